use thiserror::Error;

#[derive(Error, Debug)]
pub enum WuffError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request to {url} returned status {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Dog data is not valid UTF-8: {0}")]
    EncodingError(#[from] std::str::Utf8Error),

    #[error("No dog data provided")]
    EmptyDataset,

    #[error("Dog data is missing the column '{column}'")]
    MissingColumn { column: String },

    #[error("Invalid dog record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    #[error("No {sex} dogs found{}", .year.map(|y| format!(" for year {}", y)).unwrap_or_default())]
    NoMatchingDogs { sex: String, year: Option<i32> },

    #[error("No dog pictures with an allowed file type available")]
    NoImages,

    #[error("Could not download {url}: expected {expected} bytes, got {received}")]
    IncompleteDownload {
        url: String,
        expected: u64,
        received: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl WuffError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WuffError::ApiError(_)
            | WuffError::HttpStatusError { .. }
            | WuffError::IncompleteDownload { .. } => ErrorCategory::Network,
            WuffError::CsvError(_)
            | WuffError::SerializationError(_)
            | WuffError::EncodingError(_)
            | WuffError::EmptyDataset
            | WuffError::MissingColumn { .. }
            | WuffError::InvalidRecord { .. }
            | WuffError::NoMatchingDogs { .. }
            | WuffError::NoImages => ErrorCategory::Data,
            WuffError::ConfigError { .. } | WuffError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            WuffError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WuffError::ApiError(e) if e.is_timeout() => {
                "The dog data server took too long to answer".to_string()
            }
            WuffError::ApiError(_) => "Failed to reach the dog data server".to_string(),
            WuffError::HttpStatusError { status, .. } => {
                format!("The server refused the request (HTTP {})", status)
            }
            WuffError::EmptyDataset | WuffError::MissingColumn { .. } => {
                "The downloaded file does not look like the Zurich dog registry".to_string()
            }
            WuffError::IoError(e) => format!("File system error: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WuffError::ApiError(_) | WuffError::HttpStatusError { .. } => {
                "Check your network connection and the configured URLs, then try again"
            }
            WuffError::IncompleteDownload { .. } => "The download was interrupted, try again",
            WuffError::EmptyDataset
            | WuffError::MissingColumn { .. }
            | WuffError::InvalidRecord { .. }
            | WuffError::EncodingError(_)
            | WuffError::CsvError(_) => {
                "Make sure URL_DOG_DATA points to the dog name CSV export of the city of Zurich"
            }
            WuffError::SerializationError(_) => {
                "Make sure URL_DOG_IMAGE_LIST returns a JSON list of file names"
            }
            WuffError::ConfigError { .. } | WuffError::InvalidConfigValueError { .. } => {
                "Check the command line flags, environment variables and config file"
            }
            WuffError::NoMatchingDogs { .. } => "Try another year or leave out --year",
            WuffError::NoImages => "Check ALLOWED_IMAGE_SUFFIXES and URL_DOG_IMAGE_LIST",
            WuffError::IoError(_) => "Check that the output directory exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, WuffError>;
