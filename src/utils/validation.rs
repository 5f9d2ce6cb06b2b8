use crate::utils::error::{Result, WuffError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(WuffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(WuffError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(WuffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(WuffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WuffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(WuffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Image suffixes are compared against `Path::extension` with a leading dot,
/// so every entry must look like `.jpg`.
pub fn validate_image_suffixes(field_name: &str, suffixes: &[String]) -> Result<()> {
    if suffixes.is_empty() {
        return Err(WuffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one image suffix is required".to_string(),
        });
    }

    for suffix in suffixes {
        if !suffix.starts_with('.') || suffix.len() < 2 || suffix[1..].contains('.') {
            return Err(WuffError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: suffix.clone(),
                reason: "Suffix must be a single extension with a leading dot, e.g. .jpg"
                    .to_string(),
            });
        }
    }

    Ok(())
}
