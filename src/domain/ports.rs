use crate::domain::model::DogData;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Location a relative `path` maps to, for display.
    fn resolve(&self, path: &str) -> PathBuf;
}

pub trait ConfigProvider: Send + Sync {
    fn data_location(&self) -> &str;
    fn image_base_url(&self) -> &str;
    fn image_list_url(&self) -> &str;
    fn allowed_image_suffixes(&self) -> &[String];
    fn timeout_seconds(&self) -> u64;
    fn output_dir(&self) -> &str;
}

#[async_trait]
pub trait DogSource: Send + Sync {
    async fn load_dogs(&self) -> Result<DogData>;
}

#[async_trait]
impl DogSource for Box<dyn DogSource> {
    async fn load_dogs(&self) -> Result<DogData> {
        (**self).load_dogs().await
    }
}

pub trait DownloadProgress: Send {
    fn start(&mut self, total: Option<u64>);
    fn advance(&mut self, bytes: u64);
    fn finish(&mut self) {}
}

/// Progress sink that ignores every update.
pub struct NoProgress;

impl DownloadProgress for NoProgress {
    fn start(&mut self, _total: Option<u64>) {}
    fn advance(&mut self, _bytes: u64) {}
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn image_names(&self) -> Result<Vec<String>>;
    async fn download(&self, name: &str, progress: &mut dyn DownloadProgress) -> Result<Vec<u8>>;
}
