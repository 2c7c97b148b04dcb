//! Chess rules engine with a computer opponent. The [`chess`] module
//! implements the rules (move generation, check, checkmate and stalemate),
//! [`evaluation`] scores positions by material, [`search`] picks the
//! computer's moves and [`game`] ties them together into a playable session.
//!
//! Castling, en passant, promotion and draw rules other than stalemate are not
//! supported.

// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Performance is important: the search copies boards at every node.
#![deny(clippy::perf)]

pub mod chess;
pub mod evaluation;
pub mod game;
pub mod search;

use shadow_rs::shadow;

shadow!(build);

/// Build type and target. Produced by `build.rs`.
const FEATURES: &str = include_str!(concat!(env!("OUT_DIR"), "/features"));

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the version on startup.
pub fn print_engine_info() {
    println!("Pawnstorm chess {}", version());
}

/// Prints information the build type, target and whether the build is clean.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    println!("Features: {FEATURES}");
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
