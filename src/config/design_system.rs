//! Settings passed through to the design-system component plugin.
use serde::Deserialize;
use std::collections::BTreeMap;

/// Theme names the design system ships with.
pub const BUILTIN_THEMES: &[&str] = &[
    "light",
    "dark",
    "cupcake",
    "bumblebee",
    "emerald",
    "corporate",
    "synthwave",
    "retro",
    "cyberpunk",
    "valentine",
    "halloween",
    "garden",
    "forest",
    "aqua",
    "lofi",
    "pastel",
    "fantasy",
    "wireframe",
    "black",
    "luxury",
    "dracula",
    "cmyk",
    "autumn",
    "business",
    "acid",
    "lemonade",
    "night",
    "coffee",
    "winter",
    "dim",
    "nord",
    "sunset",
];

/// Semantic color slots a custom theme is expected to define.
pub const SEMANTIC_COLORS: &[&str] = &[
    "primary",
    "secondary",
    "accent",
    "neutral",
    "base-100",
];

/// `[design_system]` table: enabled themes and feature flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignSystem {
    /// Built-in themes to include, by name.
    pub themes: Vec<String>,
    /// Custom themes: name → (color slot → color).
    pub custom_themes: BTreeMap<String, BTreeMap<String, String>>,
    /// Theme used when the user prefers a dark color scheme.
    pub dark_theme: Option<String>,
    /// Emit base styles.
    pub base: bool,
    /// Emit component styles.
    pub styled: bool,
    /// Emit utility classes.
    pub utils: bool,
    /// Print plugin info to the build log.
    pub logs: bool,
    /// Right-to-left layout.
    pub rtl: bool,
}

impl Default for DesignSystem {
    fn default() -> Self {
        Self {
            themes: Vec::new(),
            custom_themes: BTreeMap::new(),
            dark_theme: None,
            base: true,
            styled: true,
            utils: true,
            logs: true,
            rtl: false,
        }
    }
}

impl DesignSystem {
    /// Whether `name` refers to a declared custom theme or an enabled built-in.
    #[must_use]
    pub fn declares_theme(&self, name: &str) -> bool {
        self.custom_themes.contains_key(name) || self.themes.iter().any(|t| t == name)
    }
}
