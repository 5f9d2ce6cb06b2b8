use crate::adapters::{FileDogSource, HttpDogSource, LocalStorage};
use crate::app::progress::BarProgress;
use crate::app::render;
use crate::config::cli::{CliConfig, Command, OutputFormat};
use crate::config::Settings;
use crate::core::explorer::DogExplorer;
use crate::domain::model::DogStats;
use crate::domain::ports::{ConfigProvider, DogSource};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::Path;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
struct StatsOutput<'a> {
    year: Option<i32>,
    #[serde(flatten)]
    stats: &'a DogStats,
    dog_count_overall: u64,
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Picks the registry source for the configured data location.
pub fn dog_source(settings: &Settings) -> Result<Box<dyn DogSource>> {
    if settings.data_is_remote() {
        Ok(Box::new(HttpDogSource::new(settings)?))
    } else {
        let storage = LocalStorage::new(".");
        Ok(Box::new(FileDogSource::new(storage, settings.data_location.clone())))
    }
}

/// Runs one CLI invocation and returns what should be printed on stdout.
pub async fn run(cli: &CliConfig) -> Result<String> {
    if let Command::Version = cli.command {
        return Ok(VERSION.to_string());
    }

    let settings = Settings::load(cli.config.as_deref(), cli.overrides())?;
    tracing::debug!("settings: {:?}", settings);
    tracing::debug!("year set to {:?}", cli.year);

    let explorer = DogExplorer::new(dog_source(&settings)?);

    match &cli.command {
        Command::Version => Ok(VERSION.to_string()),
        Command::Find { name } => {
            let outcome = explorer.find(name, cli.year).await?;
            emit(cli.format, &outcome, || render::search_report(&outcome))
        }
        Command::Stats => {
            let stats = explorer.stats(cli.year).await?;
            let output = StatsOutput {
                year: cli.year,
                stats: &stats,
                dog_count_overall: stats.dog_count_overall(),
            };
            emit(cli.format, &output, || render::stats_report(&stats, cli.year))
        }
        Command::Create { no_open, .. } => {
            let images = HttpDogSource::new(&settings)?;
            let storage = LocalStorage::new(settings.output_dir());
            let mut progress = BarProgress::new("Downloading dog picture");
            let mut rng = StdRng::from_entropy();

            let created = explorer
                .create(
                    &images,
                    &storage,
                    settings.allowed_image_suffixes(),
                    cli.year,
                    &mut progress,
                    &mut rng,
                )
                .await?;

            if !no_open && cli.format == OutputFormat::Text {
                open_default(&created.picture);
            }
            emit(cli.format, &created, || render::created_report(&created))
        }
    }
}

/// Opens `file` with the platform's default application. Failures are only
/// logged.
pub fn open_default(file: &Path) {
    let mut command = if cfg!(target_os = "windows") {
        let mut command = std::process::Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else if cfg!(target_os = "macos") {
        std::process::Command::new("open")
    } else {
        std::process::Command::new("xdg-open")
    };

    match command.arg(file).spawn() {
        Ok(_) => tracing::debug!("opened {}", file.display()),
        Err(e) => tracing::warn!("could not open {}: {}", file.display(), e),
    }
}
