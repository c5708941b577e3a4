//! Command: print the rule for a single icon.
use anyhow::{Context as _, Result};

use super::CommandSetup;
use crate::cli::{GlobalOpts, ShowOpts};
use crate::icons::DiskFs;
use crate::logging::Logger;

/// Run the show command.
///
/// # Errors
///
/// Returns an error if configuration loading or the icon scan fails, or the
/// named icon is unknown or cannot be rendered.
pub fn run(global: &GlobalOpts, opts: &ShowOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let config = &setup.config;
    let icons = setup.scan_icons(log)?;

    let rule = icons
        .rule(&opts.name, &DiskFs, &config.theme, &config.prefix)
        .with_context(|| format!("rendering icon '{}'", opts.name))?;
    println!("{rule}");
    Ok(())
}
