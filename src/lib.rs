//! Icon inliner for utility-first stylesheets.
//!
//! Scans an SVG icon set laid out as `24/outline`, `24/solid`, `20/solid` and
//! `16/solid`, then turns each icon referenced by the application into a CSS
//! class whose `mask` is the inlined SVG, so the icon takes its colour from
//! `currentColor`.
//!
//! The public API is organised into these layers:
//!
//! - **[`icons`]**: scan the icon directories and render mask-image rules
//! - **[`theme`]**: spacing scale used to size icons, plus theme extensions
//! - **[`content`]**: find which icon classes the application references
//! - **[`config`]**: parse and validate `heroicons.toml`
//! - **[`commands`]**: top-level subcommand orchestration (`build`, `list`, `show`, `check`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod icons;
pub mod logging;
pub mod theme;

/// Version string stamped by the build script, or the package version.
pub const VERSION: &str = match option_env!("HEROICONS_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
