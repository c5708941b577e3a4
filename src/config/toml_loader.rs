//! TOML configuration file parsing.
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::ConfigError;

/// Deserialize a TOML file into `T`.
///
/// A missing file deserializes from empty TOML, so every `#[serde(default)]`
/// field takes its default.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read and
/// [`ConfigError::Parse`] if its contents do not match `T`.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return parse_str("", path);
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_str(&content, path)
}

/// Deserialize TOML text, attributing errors to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if `content` does not match `T`.
pub fn parse_str<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ConfigFile;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file: ConfigFile = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = parse_str::<ConfigFile>("prefix = ", Path::new("conf/heroicons.toml"))
            .unwrap_err();
        assert!(matches!(&err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("conf/heroicons.toml"));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = parse_str::<ConfigFile>("content = \"js/*.js\"", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file: ConfigFile = parse_str("prefix = \"icon\"", Path::new("x.toml")).unwrap();
        assert_eq!(file.prefix, "icon");
        assert_eq!(file.icons_dir, ConfigFile::default().icons_dir);
    }
}
