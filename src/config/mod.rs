#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::Serialize;
use toml_config::TomlConfig;

pub const DEFAULT_DATA_URL: &str =
    "https://data.stadt-zuerich.ch/dataset/sid_stapo_hundenamen_od1002/download/KUL100OD1002.csv";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://random.dog";
pub const DEFAULT_IMAGE_LIST_URL: &str = "https://random.dog/doggos";
pub const DEFAULT_IMAGE_SUFFIXES: [&str; 3] = [".jpg", ".jpeg", ".png"];
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Values given on the command line or through the environment. They take
/// precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_url: Option<String>,
    pub image_base_url: Option<String>,
    pub image_list_url: Option<String>,
    pub allowed_image_suffixes: Vec<String>,
    pub output_dir: Option<String>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub data_location: String,
    pub image_base_url: String,
    pub image_list_url: String,
    pub allowed_image_suffixes: Vec<String>,
    pub timeout_seconds: u64,
    pub output_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(Overrides::default(), TomlConfig::default())
    }
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: TomlConfig) -> Self {
        let suffixes = if !overrides.allowed_image_suffixes.is_empty() {
            overrides.allowed_image_suffixes
        } else if let Some(suffixes) = file.images.allowed_suffixes {
            suffixes
        } else {
            DEFAULT_IMAGE_SUFFIXES.iter().map(|s| s.to_string()).collect()
        };

        Self {
            data_location: overrides
                .data_url
                .or(file.source.data_url)
                .unwrap_or_else(|| DEFAULT_DATA_URL.to_string()),
            image_base_url: overrides
                .image_base_url
                .or(file.images.base_url)
                .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
            image_list_url: overrides
                .image_list_url
                .or(file.images.list_url)
                .unwrap_or_else(|| DEFAULT_IMAGE_LIST_URL.to_string()),
            allowed_image_suffixes: suffixes
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            timeout_seconds: file
                .source
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            output_dir: overrides
                .output_dir
                .or(file.output.directory)
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
        }
    }

    /// Reads the optional config file, applies `overrides` on top and
    /// validates the result.
    pub fn load(config_file: Option<&str>, overrides: Overrides) -> Result<Self> {
        let file = match config_file {
            Some(path) => {
                tracing::debug!("loading configuration from {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let settings = Self::resolve(overrides, file);
        settings.validate()?;
        Ok(settings)
    }

    /// Whether the registry is fetched over HTTP rather than read from disk.
    pub fn data_is_remote(&self) -> bool {
        self.data_location.contains("://")
    }
}

impl ConfigProvider for Settings {
    fn data_location(&self) -> &str {
        &self.data_location
    }

    fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    fn image_list_url(&self) -> &str {
        &self.image_list_url
    }

    fn allowed_image_suffixes(&self) -> &[String] {
        &self.allowed_image_suffixes
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if self.data_is_remote() {
            validation::validate_url("data_url", &self.data_location)?;
        } else {
            validation::validate_path("data_url", &self.data_location)?;
        }
        validation::validate_url("image_base_url", &self.image_base_url)?;
        validation::validate_url("image_list_url", &self.image_list_url)?;
        validation::validate_image_suffixes("allowed_image_suffixes", &self.allowed_image_suffixes)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validation::validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}
