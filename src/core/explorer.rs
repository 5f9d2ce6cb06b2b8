use crate::core::{search, stats, synth};
use crate::domain::model::{CreatedDog, DogData, DogStats, SearchOutcome};
use crate::domain::ports::{DogSource, DownloadProgress, ImageSource, Storage};
use crate::utils::error::{Result, WuffError};
use rand::Rng;
use tokio::sync::OnceCell;

/// Runs the registry operations against a [`DogSource`], retrieving the
/// dataset at most once.
pub struct DogExplorer<D: DogSource> {
    source: D,
    dogs: OnceCell<DogData>,
}

impl<D: DogSource> DogExplorer<D> {
    pub fn new(source: D) -> Self {
        Self {
            source,
            dogs: OnceCell::new(),
        }
    }

    pub async fn dogs(&self) -> Result<&DogData> {
        self.dogs
            .get_or_try_init(|| async {
                tracing::debug!("retrieving dog data");
                let data = self.source.load_dogs().await?;
                tracing::info!("loaded {} dog records", data.len());
                Ok::<_, WuffError>(data)
            })
            .await
    }

    pub async fn find(&self, name: &str, year: Option<i32>) -> Result<SearchOutcome> {
        let dogs = self.dogs().await?;
        Ok(search::find(dogs, name, year))
    }

    pub async fn stats(&self, year: Option<i32>) -> Result<DogStats> {
        let dogs = self.dogs().await?;
        Ok(stats::analyze(dogs, year))
    }

    /// Makes up a dog, downloads a random picture for it and stores the
    /// picture as `{name}_{birth_year}{ext}`.
    pub async fn create<I, S, R>(
        &self,
        images: &I,
        storage: &S,
        allowed_suffixes: &[String],
        year: Option<i32>,
        progress: &mut dyn DownloadProgress,
        rng: &mut R,
    ) -> Result<CreatedDog>
    where
        I: ImageSource,
        S: Storage,
        R: Rng + Send,
    {
        let dogs = self.dogs().await?;
        let dog = synth::synthesize(dogs, year, rng)?;
        if let Some(as_of) = year.or_else(|| dogs.record_years().last().copied()) {
            tracing::debug!("made up {:?}, {} years old in {}", dog, dog.age_in(as_of), as_of);
        }

        let names = images.image_names().await?;
        let image = synth::pick_image(&names, allowed_suffixes, rng)?;
        let file_name = synth::picture_file_name(&dog, &image);
        tracing::debug!("using picture {} as {}", image, file_name);

        let bytes = images.download(&image, progress).await?;
        progress.finish();
        storage.write_file(&file_name, &bytes).await?;

        Ok(CreatedDog {
            picture: storage.resolve(&file_name),
            dog,
        })
    }
}
