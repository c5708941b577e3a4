//! Command: validate configuration and the icon set without generating CSS.
use anyhow::Result;

use super::CommandSetup;
use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::content;
use crate::icons::{AssetFs, DiskFs, ICON_STYLES, IconSet, breaks_url_literal};
use crate::logging::{Log, Logger};

/// Run the check command.
///
/// Configuration warnings are reported by [`CommandSetup::init`]; this adds
/// per-style counts and icon-level warnings.
///
/// # Errors
///
/// Returns an error if configuration loading fails or any icon directory is
/// missing.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let config = &setup.config;
    let icons = setup.scan_icons(log)?;

    log.stage("Checking icons");
    let warnings = inspect(&icons, &DiskFs, config, log);

    if warnings == 0 {
        log.info("no problems found");
    } else {
        log.warn(&format!("{warnings} icon warning(s)"));
    }
    Ok(())
}

/// Report per-style counts and warn about icons that cannot be inlined
/// cleanly. Returns the number of warnings emitted.
#[must_use]
pub fn inspect(icons: &IconSet, fs: &dyn AssetFs, config: &Config, log: &dyn Log) -> usize {
    let mut warnings = 0;

    for style in ICON_STYLES {
        log.info(&format!(
            "{style}: {} icons ({})",
            icons.count_by_style(style),
            style.subpath()
        ));
        if config.theme.resolve(style.size_token()).is_none() {
            log.warn(&format!(
                "{style} icons cannot be sized: theme has no {}",
                style.size_token()
            ));
            warnings += 1;
        }
    }

    for path in icons.skipped() {
        log.warn(&format!("ignored non-svg file {}", path.display()));
        warnings += 1;
    }

    for (name, source) in icons.iter() {
        match fs.read_to_string(&source.path) {
            Ok(markup) if breaks_url_literal(&markup) => {
                log.warn(&format!(
                    "{name}: contains a single quote and will break its url() value"
                ));
                warnings += 1;
            }
            Ok(_) => {}
            Err(e) => {
                log.warn(&format!("{name}: {e}"));
                warnings += 1;
            }
        }
    }

    match content::expand(&config.base_dir, &config.content) {
        Ok(matched) => {
            log.info(&format!("{} content files", matched.files.len()));
            for pattern in &matched.unmatched {
                log.warn(&format!("content pattern matched no files: {pattern}"));
                warnings += 1;
            }
        }
        Err(e) => {
            log.warn(&e.to_string());
            warnings += 1;
        }
    }

    warnings
}
