pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command, OutputFormat};

pub use adapters::{FileDogSource, HttpDogSource, LocalStorage};
pub use config::Settings;
pub use core::explorer::DogExplorer;
pub use domain::model::{Dog, DogData, DogStats, SearchOutcome, Sex};
pub use utils::error::{Result, WuffError};
