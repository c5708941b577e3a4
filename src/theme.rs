//! Theme token lookup used to size icons.
use std::collections::BTreeMap;

use serde::Deserialize;

/// The framework's default spacing scale.
const DEFAULT_SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

/// Spacing keys icon styles depend on.
pub const ICON_SPACING_KEYS: [&str; 3] = ["4", "5", "6"];

/// Theme values resolvable through [`Theme::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    spacing: BTreeMap<String, String>,
    extend: ThemeExtend,
}

/// Additive theme extensions carried from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeExtend {
    /// Extra named colors (e.g. `brand = "#FD4F00"`).
    pub colors: BTreeMap<String, String>,
    /// Font family stacks keyed by family name.
    pub font_family: BTreeMap<String, Vec<String>>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            extend: ThemeExtend::default(),
        }
    }
}

impl Theme {
    /// Theme with exactly the given spacing scale and no defaults.
    #[must_use]
    pub const fn new(spacing: BTreeMap<String, String>, extend: ThemeExtend) -> Self {
        Self { spacing, extend }
    }

    /// Default scale with `overrides` applied on top.
    #[must_use]
    pub fn with_overrides(spacing: &BTreeMap<String, String>, extend: ThemeExtend) -> Self {
        let mut theme = Self::default();
        theme
            .spacing
            .extend(spacing.iter().map(|(k, v)| (k.clone(), v.clone())));
        theme.extend = extend;
        theme
    }

    /// Resolve a dotted theme path such as `spacing.6`.
    ///
    /// Only the `spacing` namespace is supported; anything else is `None`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let (namespace, key) = path.split_once('.')?;
        match namespace {
            "spacing" => self.spacing(key),
            _ => None,
        }
    }

    /// Value of one spacing key.
    #[must_use]
    pub fn spacing(&self, key: &str) -> Option<&str> {
        self.spacing.get(key).map(String::as_str)
    }

    /// Theme extensions (colors, font stacks).
    #[must_use]
    pub const fn extend(&self) -> &ThemeExtend {
        &self.extend
    }
}
