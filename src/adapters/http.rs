use crate::domain::model::DogData;
use crate::domain::ports::{ConfigProvider, DogSource, DownloadProgress, ImageSource};
use crate::utils::error::{Result, WuffError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

/// Upper bound for the buffer reserved up front from `Content-Length`.
const MAX_PREALLOCATION: u64 = 1 << 20;

/// Talks to the open data portal for the registry and to the picture
/// service for dog images.
pub struct HttpDogSource {
    client: Client,
    data_url: String,
    image_base_url: String,
    image_list_url: String,
}

impl HttpDogSource {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(concat!("wuff/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            data_url: config.data_location().to_string(),
            image_base_url: config.image_base_url().trim_end_matches('/').to_string(),
            image_list_url: config.image_list_url().to_string(),
        })
    }

    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(WuffError::HttpStatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    pub fn image_url(&self, name: &str) -> String {
        format!("{}/{}", self.image_base_url, name.trim_start_matches('/'))
    }
}

#[async_trait]
impl DogSource for HttpDogSource {
    async fn load_dogs(&self) -> Result<DogData> {
        let body = self.get(&self.data_url).await?.bytes().await?;
        tracing::debug!("received {} bytes of dog data", body.len());
        DogData::from_csv_bytes(&body)
    }
}

#[async_trait]
impl ImageSource for HttpDogSource {
    async fn image_names(&self) -> Result<Vec<String>> {
        let body = self.get(&self.image_list_url).await?.bytes().await?;
        let names: Vec<String> = serde_json::from_slice(&body)?;
        tracing::debug!("picture list holds {} entries", names.len());
        Ok(names)
    }

    async fn download(&self, name: &str, progress: &mut dyn DownloadProgress) -> Result<Vec<u8>> {
        let url = self.image_url(name);
        let mut response = self.get(&url).await?;

        let expected = response.content_length();
        progress.start(expected);

        let capacity = expected.map_or(0, |n| n.min(MAX_PREALLOCATION));
        let mut data = Vec::with_capacity(capacity as usize);
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => {
                    data.extend_from_slice(&chunk);
                    progress.advance(chunk.len() as u64);
                }
                Ok(None) => break,
                // hyper rejects a body shorter than its Content-Length
                Err(e) if e.is_body() || e.is_decode() => match expected {
                    Some(expected) => {
                        tracing::warn!("download of {} broke off: {}", url, e);
                        return Err(WuffError::IncompleteDownload {
                            url,
                            expected,
                            received: data.len() as u64,
                        });
                    }
                    None => return Err(e.into()),
                },
                Err(e) => return Err(e.into()),
            }
        }

        let received = data.len() as u64;
        if let Some(expected) = expected {
            if expected != received {
                return Err(WuffError::IncompleteDownload {
                    url,
                    expected,
                    received,
                });
            }
        }

        tracing::debug!("downloaded {} bytes from {}", received, url);
        Ok(data)
    }
}
