//! Domain-specific error types for the icon inliner.
//!
//! Library modules return typed errors ([`IconError`], [`ConfigError`]) and
//! command handlers at the CLI boundary convert them to [`anyhow::Error`]
//! via the standard `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning icon directories or generating icon rules.
#[derive(Error, Debug)]
pub enum IconError {
    /// One of the required icon sub-directories does not exist.
    ///
    /// Fatal: the scan aborts and no rules are generated.
    #[error("icon directory not found: {}", path.display())]
    DirectoryNotFound {
        /// The directory that was expected to exist.
        path: PathBuf,
    },

    /// A requested logical name is not present in the scanned icon set.
    ///
    /// Local to the usage site; other icons are still generated.
    #[error("unknown icon '{name}'")]
    UnknownIcon {
        /// The logical icon name that was requested.
        name: String,
    },

    /// An icon file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the file or directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The theme has no value for a size token an icon style needs.
    #[error("theme has no value for '{token}'")]
    MissingSpacing {
        /// The unresolved token (e.g. `spacing.6`).
        token: String,
    },
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("IO error reading config file {}: {source}", path.display())]
    Io {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or does not match the schema.
    #[error("Invalid TOML in {}: {message}", path.display())]
    Parse {
        /// Path to the config file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A content glob pattern could not be compiled.
    #[error("Invalid content glob '{pattern}': {message}")]
    InvalidGlob {
        /// The offending pattern as written in the config.
        pattern: String,
        /// Glob compiler message.
        message: String,
    },
}
