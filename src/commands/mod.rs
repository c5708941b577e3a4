//! Top-level subcommand orchestration.
pub mod build;
pub mod check;
pub mod list;
pub mod show;
pub mod version;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::icons::{self, DiskFs, IconSet};
use crate::logging::Log;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "HEROICONS_CONFIG";

/// Shared state produced by the common command setup sequence.
///
/// Encapsulates config discovery, loading and validation so that each
/// command does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// Loaded configuration with CLI overrides applied.
    pub config: Config,
}

impl CommandSetup {
    /// Locate and load the configuration for the current process.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or the
    /// configuration cannot be loaded.
    pub fn init(global: &GlobalOpts, log: &dyn Log) -> Result<Self> {
        let cwd = std::env::current_dir().context("determining working directory")?;
        let env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::init_in(global, env, &cwd, log)
    }

    /// Load configuration as if running in `cwd` with `env` as the value of
    /// `HEROICONS_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named config file does not exist or
    /// any config file fails to parse.
    pub fn init_in(
        global: &GlobalOpts,
        env: Option<PathBuf>,
        cwd: &Path,
        log: &dyn Log,
    ) -> Result<Self> {
        log.stage("Loading configuration");
        let path = config::locate(global.config.as_deref(), env, cwd)?;
        let shown = path.as_deref().map_or_else(
            || "defaults (no heroicons.toml found)".to_string(),
            |p| p.display().to_string(),
        );
        log.info(&format!("config: {shown}"));

        let mut config = Config::load(path.as_deref(), cwd)?;
        if let Some(dir) = &global.icons_dir {
            config.icons_dir = cwd.join(dir);
        }

        log.debug(&format!("icons dir: {}", config.icons_dir.display()));
        log.debug(&format!("prefix: {}", config.prefix));
        log.debug(&format!("{} content patterns", config.content.len()));
        log.debug(&format!("{} variants", config.variants.len()));

        let warnings = config.validate();
        if !warnings.is_empty() {
            log.warn(&format!(
                "found {} configuration warning(s):",
                warnings.len()
            ));
            for warning in &warnings {
                log.warn(&format!(
                    "  {} [{}]: {}",
                    warning.source, warning.item, warning.message
                ));
            }
        }

        Ok(Self { config })
    }

    /// Scan the configured icon root on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the four style directories is missing or
    /// cannot be listed.
    pub fn scan_icons(&self, log: &dyn Log) -> Result<IconSet> {
        log.stage("Scanning icons");
        let icons = icons::scan(&self.config.icons_dir, &DiskFs).with_context(|| {
            format!("scanning icons in {}", self.config.icons_dir.display())
        })?;

        for path in icons.skipped() {
            log.debug(&format!("skipped non-svg file {}", path.display()));
        }
        log.info(&format!("found {} icons", icons.len()));
        Ok(icons)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::Logger;

    fn icon_tree(root: &Path) {
        for style in icons::ICON_STYLES {
            let dir = root.join(style.subpath());
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("home.svg"), "<svg/>").unwrap();
        }
    }

    #[test]
    fn init_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let setup =
            CommandSetup::init_in(&GlobalOpts::default(), None, dir.path(), &Logger::new())
                .unwrap();
        assert!(setup.config.source.is_none());
        assert_eq!(setup.config.prefix, config::DEFAULT_PREFIX);
    }

    #[test]
    fn init_reads_config_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "prefix = \"icon\"\n").unwrap();

        let setup = CommandSetup::init_in(
            &GlobalOpts::default(),
            Some(path.clone()),
            dir.path(),
            &Logger::new(),
        )
        .unwrap();
        assert_eq!(setup.config.prefix, "icon");
        assert_eq!(setup.config.source, Some(path));
    }

    #[test]
    fn init_explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOpts {
            config: Some(dir.path().join("missing.toml")),
            ..GlobalOpts::default()
        };
        let result = CommandSetup::init_in(&global, None, dir.path(), &Logger::new());
        assert!(result.is_err());
    }

    #[test]
    fn icons_dir_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(config::CONFIG_FILE_NAME),
            "icons_dir = \"vendor/icons\"\n",
        )
        .unwrap();
        let global = GlobalOpts {
            icons_dir: Some(PathBuf::from("other")),
            ..GlobalOpts::default()
        };

        let setup = CommandSetup::init_in(&global, None, dir.path(), &Logger::new()).unwrap();
        assert_eq!(setup.config.icons_dir, dir.path().join("other"));
    }

    #[test]
    fn scan_icons_reads_configured_root() {
        let dir = tempfile::tempdir().unwrap();
        icon_tree(dir.path());
        let global = GlobalOpts {
            icons_dir: Some(dir.path().to_path_buf()),
            ..GlobalOpts::default()
        };
        let log = Logger::new();

        let setup = CommandSetup::init_in(&global, None, dir.path(), &log).unwrap();
        let icons = setup.scan_icons(&log).unwrap();
        assert_eq!(icons.len(), 4);
        assert!(icons.contains("home-micro"));
    }

    #[test]
    fn scan_icons_missing_root_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOpts {
            icons_dir: Some(dir.path().join("nope")),
            ..GlobalOpts::default()
        };
        let log = Logger::new();

        let setup = CommandSetup::init_in(&global, None, dir.path(), &log).unwrap();
        let err = setup.scan_icons(&log).unwrap_err();
        assert!(err.to_string().starts_with("scanning icons in"));
    }
}
