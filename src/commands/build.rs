//! Command: generate the icon stylesheet.
use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::CommandSetup;
use crate::cli::{BuildOpts, GlobalOpts};
use crate::config::Config;
use crate::content::{self, ClassExtractor};
use crate::error::IconError;
use crate::icons::{AssetFs, DiskFs, IconRule, IconSet, render_stylesheet};
use crate::logging::{IconStatus, Log, Logger};

/// Run the build command.
///
/// # Errors
///
/// Returns an error if configuration loading or the icon scan fails, the
/// stylesheet cannot be written, any icon fails to render, or `--strict` is
/// set and content references an unknown icon.
pub fn run(global: &GlobalOpts, opts: &BuildOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let config = &setup.config;
    let icons = setup.scan_icons(log)?;

    let names = if opts.all {
        icons.names().map(String::from).collect()
    } else {
        requested_names(config, log)?
    };

    log.stage("Generating rules");
    let rules = generate(&icons, &DiskFs, config, &names, log);
    let css = render_stylesheet(&rules);

    let output = opts.output.as_deref().or(config.output.as_deref());
    write_stylesheet(&css, output, global.dry_run, log)?;

    log.print_summary();

    let failed = log.count(IconStatus::Failed);
    if failed > 0 {
        anyhow::bail!("{failed} icon(s) failed to generate");
    }
    let unknown = log.count(IconStatus::Unknown);
    if opts.strict && unknown > 0 {
        anyhow::bail!("{unknown} unknown icon name(s) referenced in content");
    }
    Ok(())
}

/// Collect the icon names referenced by the configured content files.
///
/// # Errors
///
/// Returns an error if a content pattern is invalid or a matched file cannot
/// be read.
pub fn requested_names(config: &Config, log: &dyn Log) -> Result<BTreeSet<String>> {
    log.stage("Scanning content");
    let matched = content::expand(&config.base_dir, &config.content)?;
    for pattern in &matched.unmatched {
        log.warn(&format!("content pattern matched no files: {pattern}"));
    }

    let extractor = ClassExtractor::new(&config.prefix)?;
    let names = content::collect_names(&matched.files, &extractor)?;
    log.info(&format!(
        "{} content files reference {} icon names",
        matched.files.len(),
        names.len()
    ));
    Ok(names)
}

/// Generate a rule for every name in `names`, in order.
///
/// Failures are local to one name: each is logged and recorded, and the
/// remaining names are still generated.
#[must_use]
pub fn generate(
    icons: &IconSet,
    fs: &dyn AssetFs,
    config: &Config,
    names: &BTreeSet<String>,
    log: &dyn Log,
) -> Vec<IconRule> {
    let mut rules = Vec::with_capacity(names.len());
    for name in names {
        match icons.rule(name, fs, &config.theme, &config.prefix) {
            Ok(rule) => {
                log.debug(&format!(".{}", rule.class));
                log.record_icon(name, IconStatus::Generated, None);
                rules.push(rule);
            }
            Err(e @ IconError::UnknownIcon { .. }) => {
                let msg = e.to_string();
                log.warn(&msg);
                log.record_icon(name, IconStatus::Unknown, Some(&msg));
            }
            Err(e) => {
                let msg = e.to_string();
                log.error(&format!("{name}: {msg}"));
                log.record_icon(name, IconStatus::Failed, Some(&msg));
            }
        }
    }
    rules
}

/// Write `css` to `output`, or to stdout when no output is configured.
///
/// An output file that already holds `css` is left untouched.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or the file
/// cannot be written.
pub fn write_stylesheet(
    css: &str,
    output: Option<&Path>,
    dry_run: bool,
    log: &dyn Log,
) -> Result<()> {
    let Some(path) = output else {
        print!("{css}");
        return Ok(());
    };

    if std::fs::read_to_string(path).is_ok_and(|existing| existing == css) {
        log.info(&format!("{} is up to date", path.display()));
        return Ok(());
    }

    if dry_run {
        log.dry_run(&format!("would write {} bytes to {}", css.len(), path.display()));
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, css).with_context(|| format!("writing {}", path.display()))?;
    log.info(&format!("wrote {}", path.display()));
    Ok(())
}
