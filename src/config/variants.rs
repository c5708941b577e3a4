//! Custom selector variants (`phx-click-loading`, ...).
use serde::Deserialize;

/// A custom selector variant, e.g. `phx-click-loading:animate-spin`.
///
/// Each selector contains `&`, which the stylesheet compiler replaces with
/// the utility's own selector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Variant {
    /// Variant name used as the class prefix.
    pub name: String,
    /// Selector templates.
    pub selectors: Vec<String>,
}

impl Variant {
    /// Selectors that lack the `&` placeholder.
    pub fn selectors_without_placeholder(&self) -> impl Iterator<Item = &str> {
        self.selectors
            .iter()
            .map(String::as_str)
            .filter(|s| !s.contains('&'))
    }
}
