//! Discover which icon classes the application's source files reference.
//!
//! Content files are matched with glob patterns and searched for class
//! candidates of the form `<prefix>-<name>`. Only those names get a rule
//! in the generated stylesheet.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use regex::Regex;

use crate::error::ConfigError;

/// Files matched by a set of glob patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFiles {
    /// Matched files, sorted and de-duplicated.
    pub files: Vec<PathBuf>,
    /// Patterns that matched no file at all.
    pub unmatched: Vec<String>,
}

/// Expand `patterns` relative to `base_dir`.
///
/// Absolute patterns are used as-is. Directories matched by a pattern are
/// ignored.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidGlob`] if a pattern cannot be compiled.
pub fn expand(base_dir: &Path, patterns: &[String]) -> Result<ContentFiles, ConfigError> {
    let mut files = BTreeSet::new();
    let mut unmatched = Vec::new();

    for pattern in patterns {
        let full = if Path::new(pattern).is_absolute() {
            pattern.clone()
        } else {
            base_dir.join(pattern).to_string_lossy().into_owned()
        };
        let paths = glob::glob(&full).map_err(|e| ConfigError::InvalidGlob {
            pattern: pattern.clone(),
            message: e.msg.to_string(),
        })?;

        let mut matched_any = false;
        // Unreadable entries are skipped; the glob crate reports them per path.
        for path in paths.flatten() {
            if path.is_file() {
                matched_any = true;
                files.insert(path);
            }
        }
        if !matched_any {
            unmatched.push(pattern.clone());
        }
    }

    Ok(ContentFiles {
        files: files.into_iter().collect(),
        unmatched,
    })
}

/// Extracts `<prefix>-<name>` class candidates from text.
///
/// A candidate is a whole token: it starts at the beginning of the text or
/// after a character outside `[A-Za-z0-9_-]`, and runs until the next such
/// character. Tokens whose tail is not a valid icon name are ignored.
#[derive(Debug, Clone)]
pub struct ClassExtractor {
    candidate: Regex,
    name: Regex,
}

impl ClassExtractor {
    /// Build an extractor for classes starting with `<prefix>-`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting expression fails to compile.
    pub fn new(prefix: &str) -> Result<Self> {
        let source = format!(
            r"(?:^|[^A-Za-z0-9_-]){}-([A-Za-z0-9_-]*)",
            regex::escape(prefix)
        );
        let candidate = Regex::new(&source)
            .with_context(|| format!("compiling class pattern for prefix '{prefix}'"))?;
        let name = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").context("compiling name pattern")?;
        Ok(Self { candidate, name })
    }

    /// Every distinct icon name referenced in `text`.
    #[must_use]
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        self.candidate
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| self.name.is_match(name))
            .map(str::to_string)
            .collect()
    }
}

/// Read every file and union the icon names referenced in them.
///
/// # Errors
///
/// Returns an error if a content file cannot be read.
pub fn collect_names(files: &[PathBuf], extractor: &ClassExtractor) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for file in files {
        let bytes =
            std::fs::read(file).with_context(|| format!("reading content {}", file.display()))?;
        names.extend(extractor.extract(&String::from_utf8_lossy(&bytes)));
    }
    Ok(names)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        ClassExtractor::new("hero")
            .unwrap()
            .extract(text)
            .into_iter()
            .collect()
    }

    #[test]
    fn extracts_names_from_class_attributes() {
        let found = names(r#"<span class="hero-home h-4 w-4"></span><.icon name="hero-x-mark-solid" />"#);
        assert_eq!(found, ["home", "x-mark-solid"]);
    }

    #[test]
    fn requires_a_token_boundary_before_prefix() {
        assert!(names("superhero-home").is_empty());
        assert!(names("my_hero-home").is_empty());
        assert!(names("x-hero-home").is_empty());
        assert_eq!(names("hero-home"), ["home"]);
        assert_eq!(names("'hero-arrow-left-mini'"), ["arrow-left-mini"]);
    }

    #[test]
    fn adjacent_candidates_are_all_found() {
        assert_eq!(names("hero-a hero-b\nhero-c"), ["a", "b", "c"]);
    }

    #[test]
    fn trailing_dash_token_is_not_a_name() {
        assert!(names("hero-home- ").is_empty());
        assert_eq!(names("hero-home-\nhero-bolt"), ["bolt"]);
    }

    #[test]
    fn requires_a_token_boundary_after_name() {
        assert!(names(r#"class="hero-homeX""#).is_empty());
        assert!(names(r#"class="hero-home_big""#).is_empty());
        assert!(names("hero-home--wide").is_empty());
        assert_eq!(names("hover:hero-home/50"), ["home"]);
        assert_eq!(names(r#"class="hero-homeX hero-home""#), ["home"]);
    }

    #[test]
    fn prefix_is_matched_literally() {
        let extractor = ClassExtractor::new("i.c").unwrap();
        assert!(extractor.extract("iXc-home").is_empty());
        assert_eq!(extractor.extract("i.c-home").len(), 1);
    }

    #[test]
    fn expand_matches_relative_patterns() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("js/nested")).unwrap();
        std::fs::write(dir.path().join("js/app.js"), "").unwrap();
        std::fs::write(dir.path().join("js/nested/more.js"), "").unwrap();
        std::fs::write(dir.path().join("js/style.css"), "").unwrap();

        let content = expand(dir.path(), &["js/**/*.js".to_string()]).unwrap();
        assert_eq!(
            content.files,
            vec![
                dir.path().join("js/app.js"),
                dir.path().join("js/nested/more.js")
            ]
        );
        assert!(content.unmatched.is_empty());
    }

    #[test]
    fn expand_deduplicates_overlapping_patterns() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.ex"), "").unwrap();

        let content = expand(
            dir.path(),
            &["*.ex".to_string(), "page.ex".to_string()],
        )
        .unwrap();
        assert_eq!(content.files.len(), 1);
        assert!(content.unmatched.is_empty());
    }

    #[test]
    fn expand_reports_unmatched_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let content = expand(dir.path(), &["lib/**/*.heex".to_string()]).unwrap();
        assert!(content.files.is_empty());
        assert_eq!(content.unmatched, ["lib/**/*.heex"]);
    }

    #[test]
    fn expand_rejects_invalid_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let err = expand(dir.path(), &["js/***.js".to_string()]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGlob { .. }));
    }

    #[test]
    fn collect_names_unions_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.ex");
        let b = dir.path().join("b.js");
        std::fs::write(&a, r#"<.icon name="hero-home" />"#).unwrap();
        std::fs::write(&b, "el.classList.add('hero-home', 'hero-bolt-micro')").unwrap();

        let extractor = ClassExtractor::new("hero").unwrap();
        let found = collect_names(&[a, b], &extractor).unwrap();
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            ["bolt-micro", "home"]
        );
    }
}
