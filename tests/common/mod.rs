//! Shared helpers for integration tests.
//
// Provides a temporary-directory-backed project with an icon tree and a
// fluent builder so each integration test can set up an isolated environment
// without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use heroicons_css::config::{CONFIG_FILE_NAME, Config};
use heroicons_css::icons::{ICON_STYLES, IconStyle};

/// Directory, relative to the project root, holding the icon tree.
pub const ICONS_DIR: &str = "icons";

/// Create the four empty style directories under `root/icons`.
///
/// Creates:
/// - `icons/24/outline`
/// - `icons/24/solid`
/// - `icons/20/solid`
/// - `icons/16/solid`
pub fn setup_icon_tree(root: &Path) {
    for style in ICON_STYLES {
        std::fs::create_dir_all(root.join(ICONS_DIR).join(style.subpath()))
            .expect("create style dir");
    }
}

/// An isolated project backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped (via the underlying
/// [`tempfile::TempDir`]).
pub struct IntegrationTestContext {
    /// Temporary directory containing the project.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new context with an empty icon tree.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        setup_icon_tree(root.path());
        Self { root }
    }

    /// Path to the project root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path to the icon root.
    pub fn icons_dir(&self) -> PathBuf {
        self.root.path().join(ICONS_DIR)
    }

    /// Path to the config file, whether or not it was written.
    pub fn config_path(&self) -> PathBuf {
        self.root.path().join(CONFIG_FILE_NAME)
    }

    /// Load configuration the way the CLI does: from `heroicons.toml` when
    /// present, otherwise defaults pointed at the test icon tree.
    pub fn load_config(&self) -> Config {
        let path = self.config_path();
        if path.is_file() {
            Config::load(Some(&path), self.root.path()).expect("load config")
        } else {
            let mut config = Config::load(None, self.root.path()).expect("load defaults");
            config.icons_dir = self.icons_dir();
            config
        }
    }
}

/// Fluent builder for [`IntegrationTestContext`].
///
/// Allows individual tests to customise the project before the context is
/// finalised without modifying the shared setup.
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context backed by an empty icon tree.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `<base_name>.svg` with `markup` into the directory for `style`.
    pub fn with_icon(self, style: IconStyle, base_name: &str, markup: &str) -> Self {
        let path = self
            .ctx
            .icons_dir()
            .join(style.subpath())
            .join(format!("{base_name}.svg"));
        std::fs::write(path, markup).expect("write icon");
        self
    }

    /// Write an arbitrary file into the directory for `style`.
    pub fn with_style_file(self, style: IconStyle, file_name: &str, content: &str) -> Self {
        let path = self.ctx.icons_dir().join(style.subpath()).join(file_name);
        std::fs::write(path, content).expect("write style file");
        self
    }

    /// Remove the directory for `style` entirely.
    pub fn without_style(self, style: IconStyle) -> Self {
        std::fs::remove_dir_all(self.ctx.icons_dir().join(style.subpath()))
            .expect("remove style dir");
        self
    }

    /// Write a content file at `relative` (directories are created).
    pub fn with_content_file(self, relative: &str, text: &str) -> Self {
        let path = self.ctx.root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create content parent");
        }
        std::fs::write(&path, text).expect("write content file");
        self
    }

    /// Write `heroicons.toml` at the project root.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.ctx.config_path(), toml).expect("write config file");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
