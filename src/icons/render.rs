//! Generation phase: load one icon and turn it into a mask-image rule.
use std::fmt;

use super::{AssetFs, IconSet, IconStyle};
use crate::error::IconError;
use crate::theme::Theme;

/// A loaded icon, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Logical name the icon was requested under.
    pub logical_name: String,
    /// Style derived at scan time.
    pub style: IconStyle,
    /// SVG markup with every `\r` and `\n` removed.
    pub markup: String,
    /// Resolved width/height value (e.g. `1.5rem`).
    pub size: String,
}

/// CSS rule block for one icon class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRule {
    /// Class name without the leading dot (e.g. `hero-home`).
    pub class: String,
    /// Declarations in output order.
    pub declarations: Vec<(String, String)>,
}

impl IconSet {
    /// Read and size the icon registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::UnknownIcon`] if `name` was not scanned,
    /// [`IconError::Read`] if its file cannot be read, and
    /// [`IconError::MissingSpacing`] if the theme lacks its size token.
    pub fn load(
        &self,
        name: &str,
        fs: &dyn AssetFs,
        theme: &Theme,
    ) -> Result<IconEntry, IconError> {
        let source = self.get(name).ok_or_else(|| IconError::UnknownIcon {
            name: name.to_string(),
        })?;

        let token = source.style.size_token();
        let size = theme
            .resolve(token)
            .ok_or_else(|| IconError::MissingSpacing {
                token: token.to_string(),
            })?
            .to_string();

        let markup = strip_newlines(&fs.read_to_string(&source.path)?);

        Ok(IconEntry {
            logical_name: name.to_string(),
            style: source.style,
            markup,
            size,
        })
    }

    /// Generate the `<prefix>-<name>` rule for one icon.
    ///
    /// # Errors
    ///
    /// See [`IconSet::load`].
    pub fn rule(
        &self,
        name: &str,
        fs: &dyn AssetFs,
        theme: &Theme,
        prefix: &str,
    ) -> Result<IconRule, IconError> {
        let entry = self.load(name, fs, theme)?;
        Ok(IconRule::mask(prefix, &entry))
    }
}

impl IconRule {
    /// Build the mask-image declarations for `entry`.
    ///
    /// The markup is embedded verbatim inside `url('...')`; a single quote in
    /// the SVG ends the literal early (see [`breaks_url_literal`]).
    #[must_use]
    pub fn mask(prefix: &str, entry: &IconEntry) -> Self {
        let class = format!("{prefix}-{}", entry.logical_name);
        let var = format!("--{class}");
        let reference = format!("var({var})");

        let declarations = vec![
            (
                var.clone(),
                format!("url('data:image/svg+xml;utf8,{}')", entry.markup),
            ),
            ("-webkit-mask".to_string(), reference.clone()),
            ("mask".to_string(), reference),
            ("mask-repeat".to_string(), "no-repeat".to_string()),
            ("background-color".to_string(), "currentColor".to_string()),
            ("vertical-align".to_string(), "middle".to_string()),
            ("display".to_string(), "inline-block".to_string()),
            ("width".to_string(), entry.size.clone()),
            ("height".to_string(), entry.size.clone()),
        ];

        Self {
            class,
            declarations,
        }
    }

    /// Value of the first declaration for `property`.
    #[must_use]
    pub fn declaration(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for IconRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".{} {{", self.class)?;
        for (property, value) in &self.declarations {
            writeln!(f, "  {property}: {value};")?;
        }
        write!(f, "}}")
    }
}

/// Remove every carriage return and line feed so the markup fits on one line.
#[must_use]
pub fn strip_newlines(markup: &str) -> String {
    markup.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// Whether `markup` contains a character that ends a `url('...')` literal.
#[must_use]
pub fn breaks_url_literal(markup: &str) -> bool {
    markup.contains('\'')
}

/// Join rule blocks into a stylesheet with a generator header.
#[must_use]
pub fn render_stylesheet(rules: &[IconRule]) -> String {
    let mut css = format!("/* Generated by heroicons {}. Do not edit. */\n", crate::VERSION);
    for rule in rules {
        css.push('\n');
        css.push_str(&rule.to_string());
        css.push('\n');
    }
    css
}
