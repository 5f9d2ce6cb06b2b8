use crate::utils::error::{Result, WuffError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `wuff.toml` settings. Every value may be left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub images: ImagesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// URL of the registry CSV export or a path to a local copy.
    pub data_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    pub base_url: Option<String>,
    pub list_url: Option<String>,
    pub allowed_suffixes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub directory: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WuffError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WuffError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value. Unset variables
    /// stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WuffError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.images.base_url {
            validation::validate_url("images.base_url", url)?;
        }
        if let Some(url) = &self.images.list_url {
            validation::validate_url("images.list_url", url)?;
        }
        if let Some(suffixes) = &self.images.allowed_suffixes {
            validation::validate_image_suffixes("images.allowed_suffixes", suffixes)?;
        }
        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }
        if let Some(directory) = &self.output.directory {
            validation::validate_path("output.directory", directory)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
data_url = "https://data.example.com/dogs.csv"
timeout_seconds = 10

[images]
base_url = "https://pics.example.com"
list_url = "https://pics.example.com/list"
allowed_suffixes = [".jpg"]

[output]
directory = "./dogs"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.source.data_url.as_deref(),
            Some("https://data.example.com/dogs.csv")
        );
        assert_eq!(config.source.timeout_seconds, Some(10));
        assert_eq!(config.images.allowed_suffixes, Some(vec![".jpg".to_string()]));
        assert_eq!(config.output.directory.as_deref(), Some("./dogs"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("[output]\ndirectory = \"pics\"\n").unwrap();
        assert_eq!(config.source, SourceConfig::default());
        assert_eq!(config.images, ImagesConfig::default());

        assert_eq!(TomlConfig::from_toml_str("").unwrap(), TomlConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WUFF_TEST_IMAGE_HOST", "https://test.pics.com");

        let toml_content = r#"
[images]
base_url = "${WUFF_TEST_IMAGE_HOST}"
list_url = "${WUFF_TEST_IMAGE_HOST}/list"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.images.base_url.as_deref(), Some("https://test.pics.com"));
        assert_eq!(
            config.images.list_url.as_deref(),
            Some("https://test.pics.com/list")
        );

        std::env::remove_var("WUFF_TEST_IMAGE_HOST");
    }

    #[test]
    fn test_unset_variable_is_kept() {
        let config =
            TomlConfig::from_toml_str("[source]\ndata_url = \"${WUFF_TEST_SURELY_UNSET}\"\n")
                .unwrap();
        assert_eq!(
            config.source.data_url.as_deref(),
            Some("${WUFF_TEST_SURELY_UNSET}")
        );
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[images]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[source]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = TomlConfig::from_toml_str("[source]\nendpoint = \"x\"\n");
        assert!(matches!(result, Err(WuffError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\ndata_url = \"dogs.csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source.data_url.as_deref(), Some("dogs.csv"));
    }
}
