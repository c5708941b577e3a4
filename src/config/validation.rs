//! Non-fatal configuration checks.
use std::collections::HashSet;

use super::Config;
use super::design_system::{BUILTIN_THEMES, SEMANTIC_COLORS};
use crate::theme::ICON_SPACING_KEYS;

/// A validation warning detected during configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The configuration section (e.g., "theme", "variants").
    pub source: String,
    /// The specific item that triggered the warning.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Build a warning from its three parts.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            item: item.into(),
            message: message.into(),
        }
    }
}

/// Trait for configuration validators.
///
/// Implementations check one section of the configuration for values the
/// stylesheet pipeline would silently mishandle. Validation never fails the
/// run; it only produces warnings.
pub trait ConfigValidator {
    /// Validate the configuration and return any warnings found.
    fn validate(&self) -> Vec<ValidationWarning>;
}

/// Whether `value` looks like a CSS color the framework accepts.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, functional notation such
/// as `rgb(...)` or `oklch(...)`, and bare keywords like `transparent`.
#[must_use]
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some((func, rest)) = value.split_once('(') {
        return !func.is_empty()
            && func.chars().all(|c| c.is_ascii_alphabetic())
            && rest.ends_with(')');
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validator for `prefix`.
#[derive(Debug)]
pub struct PrefixValidator<'a> {
    prefix: &'a str,
}

impl<'a> PrefixValidator<'a> {
    /// Create a validator over `prefix`.
    #[must_use]
    pub const fn new(prefix: &'a str) -> Self {
        Self { prefix }
    }
}

impl ConfigValidator for PrefixValidator<'_> {
    fn validate(&self) -> Vec<ValidationWarning> {
        let valid = self
            .prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase())
            && self
                .prefix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !self.prefix.ends_with('-');

        if valid {
            Vec::new()
        } else {
            vec![ValidationWarning::new(
                "prefix",
                self.prefix,
                "prefix should be lowercase letters, digits and inner dashes",
            )]
        }
    }
}

/// Validator for `content` globs.
#[derive(Debug)]
pub struct ContentValidator<'a> {
    patterns: &'a [String],
}

impl<'a> ContentValidator<'a> {
    /// Create a validator over `patterns`.
    #[must_use]
    pub const fn new(patterns: &'a [String]) -> Self {
        Self { patterns }
    }
}

impl ConfigValidator for ContentValidator<'_> {
    fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if self.patterns.is_empty() {
            warnings.push(ValidationWarning::new(
                "content",
                "content",
                "no content globs configured; build will only emit icons with --all",
            ));
        }

        for pattern in self.patterns {
            if pattern.trim().is_empty() {
                warnings.push(ValidationWarning::new(
                    "content",
                    pattern,
                    "empty glob pattern",
                ));
            } else if let Err(e) = glob::Pattern::new(pattern) {
                warnings.push(ValidationWarning::new(
                    "content",
                    pattern,
                    format!("invalid glob: {}", e.msg),
                ));
            }
        }

        warnings
    }
}

/// Validator for the theme: icon spacing keys, colors and font stacks.
#[derive(Debug)]
pub struct ThemeValidator<'a> {
    theme: &'a crate::theme::Theme,
}

impl<'a> ThemeValidator<'a> {
    /// Create a validator over `theme`.
    #[must_use]
    pub const fn new(theme: &'a crate::theme::Theme) -> Self {
        Self { theme }
    }
}

impl ConfigValidator for ThemeValidator<'_> {
    fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for key in ICON_SPACING_KEYS {
            match self.theme.spacing(key) {
                None => warnings.push(ValidationWarning::new(
                    "theme.spacing",
                    key,
                    "icon size token is not defined",
                )),
                Some(value) if value.trim().is_empty() => warnings.push(ValidationWarning::new(
                    "theme.spacing",
                    key,
                    "icon size token is empty",
                )),
                Some(_) => {}
            }
        }

        let extend = self.theme.extend();
        for (name, color) in &extend.colors {
            if !is_valid_color(color) {
                warnings.push(ValidationWarning::new(
                    "theme.extend.colors",
                    name,
                    format!("'{color}' is not a valid color"),
                ));
            }
        }

        for (family, stack) in &extend.font_family {
            if stack.iter().all(|f| f.trim().is_empty()) {
                warnings.push(ValidationWarning::new(
                    "theme.extend.font_family",
                    family,
                    "font stack is empty",
                ));
            }
        }

        warnings
    }
}

/// Validator for custom selector variants.
#[derive(Debug)]
pub struct VariantValidator<'a> {
    variants: &'a [super::variants::Variant],
}

impl<'a> VariantValidator<'a> {
    /// Create a validator over `variants`.
    #[must_use]
    pub const fn new(variants: &'a [super::variants::Variant]) -> Self {
        Self { variants }
    }
}

impl ConfigValidator for VariantValidator<'_> {
    fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();

        for variant in self.variants {
            if variant.name.trim().is_empty() {
                warnings.push(ValidationWarning::new(
                    "variants",
                    &variant.name,
                    "variant name is empty",
                ));
            } else if !seen.insert(variant.name.as_str()) {
                warnings.push(ValidationWarning::new(
                    "variants",
                    &variant.name,
                    "variant is declared more than once",
                ));
            }

            if variant.selectors.is_empty() {
                warnings.push(ValidationWarning::new(
                    "variants",
                    &variant.name,
                    "variant has no selectors",
                ));
            }

            for selector in variant.selectors_without_placeholder() {
                warnings.push(ValidationWarning::new(
                    "variants",
                    &variant.name,
                    format!("selector '{selector}' has no '&' placeholder"),
                ));
            }
        }

        warnings
    }
}

/// Validator for the design-system theme list and palettes.
#[derive(Debug)]
pub struct DesignSystemValidator<'a> {
    design_system: &'a super::design_system::DesignSystem,
}

impl<'a> DesignSystemValidator<'a> {
    /// Create a validator over `design_system`.
    #[must_use]
    pub const fn new(design_system: &'a super::design_system::DesignSystem) -> Self {
        Self { design_system }
    }
}

impl ConfigValidator for DesignSystemValidator<'_> {
    fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let ds = self.design_system;

        for theme in &ds.themes {
            if !BUILTIN_THEMES.contains(&theme.as_str()) && !ds.custom_themes.contains_key(theme) {
                warnings.push(ValidationWarning::new(
                    "design_system.themes",
                    theme,
                    "not a built-in theme and not declared in custom_themes",
                ));
            }
        }

        if let Some(dark) = &ds.dark_theme
            && !ds.declares_theme(dark)
        {
            warnings.push(ValidationWarning::new(
                "design_system.dark_theme",
                dark,
                "dark theme is not enabled or declared",
            ));
        }

        for (name, palette) in &ds.custom_themes {
            for slot in SEMANTIC_COLORS {
                if !palette.contains_key(*slot) {
                    warnings.push(ValidationWarning::new(
                        "design_system.custom_themes",
                        name,
                        format!("missing '{slot}' color"),
                    ));
                }
            }
            for (slot, color) in palette {
                if !is_valid_color(color) {
                    warnings.push(ValidationWarning::new(
                        "design_system.custom_themes",
                        format!("{name}.{slot}"),
                        format!("'{color}' is not a valid color"),
                    ));
                }
            }
        }

        warnings
    }
}

/// Run every validator against `config`.
#[must_use]
pub fn validate_all(config: &Config) -> Vec<ValidationWarning> {
    let validators: Vec<Box<dyn ConfigValidator>> = vec![
        Box::new(PrefixValidator::new(&config.prefix)),
        Box::new(ContentValidator::new(&config.content)),
        Box::new(ThemeValidator::new(&config.theme)),
        Box::new(VariantValidator::new(&config.variants)),
        Box::new(DesignSystemValidator::new(&config.design_system)),
    ];

    let mut all_warnings = Vec::new();
    for validator in validators {
        all_warnings.extend(validator.validate());
    }

    all_warnings
}
