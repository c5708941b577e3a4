//! `heroicons.toml` loading, path resolution and validation.
pub mod design_system;
pub mod toml_loader;
pub mod validation;
pub mod variants;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::theme::{Theme, ThemeExtend};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "heroicons.toml";

/// Default icon root, relative to the config file.
pub const DEFAULT_ICONS_DIR: &str = "../deps/heroicons/optimized";

/// Default class prefix (`hero-home`, `--hero-home`).
pub const DEFAULT_PREFIX: &str = "hero";

/// Raw contents of `heroicons.toml` before path resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Icon root containing the `24/outline`, `24/solid`, `20/solid` and `16/solid` directories.
    pub icons_dir: PathBuf,
    /// Class prefix.
    pub prefix: String,
    /// Stylesheet destination; stdout when unset.
    pub output: Option<PathBuf>,
    /// Content globs searched for referenced icon classes.
    pub content: Vec<String>,
    /// Theme overrides and extensions.
    pub theme: ThemeSection,
    /// Custom selector variants.
    pub variants: Vec<variants::Variant>,
    /// Design-system plugin settings.
    pub design_system: design_system::DesignSystem,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            icons_dir: PathBuf::from(DEFAULT_ICONS_DIR),
            prefix: DEFAULT_PREFIX.to_string(),
            output: None,
            content: Vec::new(),
            theme: ThemeSection::default(),
            variants: Vec::new(),
            design_system: design_system::DesignSystem::default(),
        }
    }
}

/// `[theme]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSection {
    /// Spacing keys added to or replacing the default scale.
    pub spacing: BTreeMap<String, String>,
    /// Additive extensions (colors, font families).
    pub extend: ThemeExtend,
}

/// Loaded configuration with every path resolved.
#[derive(Debug, Clone)]
pub struct Config {
    /// The file the configuration came from, if any.
    pub source: Option<PathBuf>,
    /// Directory relative paths are resolved against.
    pub base_dir: PathBuf,
    /// Resolved icon root.
    pub icons_dir: PathBuf,
    /// Class prefix.
    pub prefix: String,
    /// Resolved stylesheet destination.
    pub output: Option<PathBuf>,
    /// Content globs, as written (relative to `base_dir`).
    pub content: Vec<String>,
    /// Theme with overrides applied.
    pub theme: Theme,
    /// Custom selector variants.
    pub variants: Vec<variants::Variant>,
    /// Design-system plugin settings.
    pub design_system: design_system::DesignSystem,
}

impl Config {
    /// Load configuration from `path`, or the defaults when `path` is `None`.
    ///
    /// Relative paths in the file resolve against the file's directory; the
    /// defaults resolve against `fallback_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or its
    /// directory cannot be canonicalized.
    pub fn load(path: Option<&Path>, fallback_dir: &Path) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::from_file(ConfigFile::default(), None, fallback_dir));
        };

        let file: ConfigFile = toml_loader::load_config(path)?;
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let base_dir = dunce::canonicalize(parent)
            .with_context(|| format!("resolving config directory {}", parent.display()))?;

        Ok(Self::from_file(file, Some(path.to_path_buf()), &base_dir))
    }

    /// Resolve a parsed file against `base_dir`.
    #[must_use]
    pub fn from_file(file: ConfigFile, source: Option<PathBuf>, base_dir: &Path) -> Self {
        let theme = Theme::with_overrides(&file.theme.spacing, file.theme.extend);
        Self {
            source,
            base_dir: base_dir.to_path_buf(),
            icons_dir: base_dir.join(&file.icons_dir),
            prefix: file.prefix,
            output: file.output.map(|o| base_dir.join(o)),
            content: file.content,
            theme,
            variants: file.variants,
            design_system: file.design_system,
        }
    }

    /// Validate the configuration and return any warnings found.
    #[must_use]
    pub fn validate(&self) -> Vec<validation::ValidationWarning> {
        validation::validate_all(self)
    }
}

/// Locate the config file: an explicit path, then `$HEROICONS_CONFIG`, then
/// `heroicons.toml` in `cwd`.
///
/// An explicit path that does not exist is an error; an absent default file
/// means "use the defaults" and yields `None`.
///
/// # Errors
///
/// Returns an error if an explicitly requested file does not exist.
pub fn locate(explicit: Option<&Path>, env: Option<PathBuf>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit.map(Path::to_path_buf).or(env) {
        if !path.is_file() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(Some(path));
    }

    let default = cwd.join(CONFIG_FILE_NAME);
    Ok(default.is_file().then_some(default))
}
