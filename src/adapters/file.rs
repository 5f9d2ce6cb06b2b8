use crate::domain::model::DogData;
use crate::domain::ports::{DogSource, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads the registry from a CSV file instead of the open data portal.
pub struct FileDogSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileDogSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> DogSource for FileDogSource<S> {
    async fn load_dogs(&self) -> Result<DogData> {
        tracing::debug!("reading dog data from {}", self.path);
        let bytes = self.storage.read_file(&self.path).await?;
        DogData::from_csv_bytes(&bytes)
    }
}
