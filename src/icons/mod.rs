//! Icon inliner: scan the icon directories, then generate mask-image rules.
//!
//! The two phases are deliberately separate. [`scan`] walks the four fixed
//! style directories once and produces an immutable [`IconSet`] keyed by
//! logical name; file contents are only read later, per requested name, by
//! [`IconSet::rule`].

mod fs;
mod render;
mod scan;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use fs::{AssetFs, DiskFs};
pub use render::{IconEntry, IconRule, breaks_url_literal, render_stylesheet, strip_newlines};
pub use scan::scan;

#[cfg(test)]
pub(crate) use fs::MockAssetFs;

/// Style variant of an icon, derived once from the directory it was found in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    /// 24px outline icons; no name suffix.
    Outline,
    /// 24px solid icons (`-solid`).
    Solid,
    /// 20px solid icons (`-mini`).
    Mini,
    /// 16px solid icons (`-micro`).
    Micro,
}

/// Styles in scan order. Later entries win name collisions.
pub const ICON_STYLES: [IconStyle; 4] = [
    IconStyle::Outline,
    IconStyle::Solid,
    IconStyle::Mini,
    IconStyle::Micro,
];

impl IconStyle {
    /// Suffix appended to the file's base name to form the logical name.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Outline => "",
            Self::Solid => "-solid",
            Self::Mini => "-mini",
            Self::Micro => "-micro",
        }
    }

    /// Directory of this style, relative to the icon root.
    #[must_use]
    pub const fn subpath(self) -> &'static str {
        match self {
            Self::Outline => "24/outline",
            Self::Solid => "24/solid",
            Self::Mini => "20/solid",
            Self::Micro => "16/solid",
        }
    }

    /// Theme token used for the rendered width and height.
    #[must_use]
    pub const fn size_token(self) -> &'static str {
        match self {
            Self::Outline | Self::Solid => "spacing.6",
            Self::Mini => "spacing.5",
            Self::Micro => "spacing.4",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Outline => "outline",
            Self::Solid => "solid",
            Self::Mini => "mini",
            Self::Micro => "micro",
        };
        f.write_str(name)
    }
}

/// One SVG file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSource {
    /// File name without the `.svg` extension.
    pub base_name: String,
    /// Style of the directory the file was found in.
    pub style: IconStyle,
    /// Full path to the file.
    pub path: PathBuf,
}

impl IconSource {
    /// Logical name: base name plus the style suffix.
    #[must_use]
    pub fn logical_name(&self) -> String {
        format!("{}{}", self.base_name, self.style.suffix())
    }
}

/// Immutable mapping from logical icon name to its source file.
///
/// Built once by [`scan`]; iteration is in sorted name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    icons: BTreeMap<String, IconSource>,
    skipped: Vec<PathBuf>,
}

impl IconSet {
    /// Look up the source file for a logical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IconSource> {
        self.icons.get(name)
    }

    /// Whether `name` is a known logical icon name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Number of distinct logical names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether no icons were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Iterate `(logical_name, source)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IconSource)> {
        self.icons.iter().map(|(name, source)| (name.as_str(), source))
    }

    /// Logical names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// Directory entries that were not `.svg` files and were left out.
    #[must_use]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    /// Count of icons per style.
    #[must_use]
    pub fn count_by_style(&self, style: IconStyle) -> usize {
        self.icons.values().filter(|s| s.style == style).count()
    }
}

/// Base name of an SVG file, or `None` for anything else.
fn svg_base_name(path: &Path) -> Option<String> {
    if path.extension()? != "svg" {
        return None;
    }
    path.file_stem()?.to_str().map(str::to_string)
}
