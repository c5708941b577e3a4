//! Command: list the scanned icon names.
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::CommandSetup;
use crate::cli::{GlobalOpts, ListOpts};
use crate::icons::{IconSet, IconStyle};
use crate::logging::Logger;

/// One line of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry<'a> {
    /// Logical icon name.
    pub name: &'a str,
    /// Style the name resolved to.
    pub style: IconStyle,
    /// Source file.
    pub path: &'a Path,
}

/// Run the list command.
///
/// # Errors
///
/// Returns an error if configuration loading or the icon scan fails, or JSON
/// serialization fails.
pub fn run(global: &GlobalOpts, opts: &ListOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let icons = setup.scan_icons(log)?;

    let items = entries(&icons, opts.style);
    log.debug(&format!("listing {} icons", items.len()));
    print!("{}", render(&items, opts.json)?);
    Ok(())
}

/// Icons in name order, optionally restricted to one style.
#[must_use]
pub fn entries(icons: &IconSet, style: Option<IconStyle>) -> Vec<ListEntry<'_>> {
    icons
        .iter()
        .filter(|(_, source)| style.is_none_or(|s| source.style == s))
        .map(|(name, source)| ListEntry {
            name,
            style: source.style,
            path: &source.path,
        })
        .collect()
}

/// Format entries as tab-separated lines, or as a pretty JSON array.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(items: &[ListEntry<'_>], json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(items).context("serializing icon list")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{}\t{}\t{}", item.name, item.style, item.path.display());
    }
    Ok(out)
}
