pub mod dataset;
pub mod explorer;
pub mod search;
pub mod stats;
pub mod synth;

pub use crate::domain::model::{Dog, DogData, DogStats, SearchOutcome, Sex};
pub use crate::domain::ports::{ConfigProvider, DogSource, ImageSource, Storage};
pub use crate::utils::error::Result;
