use crate::config::Overrides;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "wuff")]
#[command(version, about = "Explore the dogs registered in the city of Zurich")]
pub struct CliConfig {
    /// Limit output to a specific reporting year
    #[arg(long, global = true)]
    pub year: Option<i32>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "WUFF_CONFIG")]
    pub config: Option<String>,

    /// URL of the dog registry CSV, or a path to a local copy
    #[arg(long, global = true, env = "URL_DOG_DATA")]
    pub data_url: Option<String>,

    /// Base URL dog pictures are downloaded from
    #[arg(long, global = true, env = "URL_DOG_IMAGE_BASE")]
    pub image_base_url: Option<String>,

    /// URL returning a JSON list of dog picture file names
    #[arg(long, global = true, env = "URL_DOG_IMAGE_LIST")]
    pub image_list_url: Option<String>,

    /// Comma separated picture suffixes, e.g. ".jpg,.png"
    #[arg(long, global = true, env = "ALLOWED_IMAGE_SUFFIXES", value_delimiter = ',')]
    pub allowed_image_suffixes: Vec<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print version and exit
    Version,

    /// Find a dog by its name
    Find {
        /// Exact name of the dog
        name: String,
    },

    /// Print interesting stats about the dog data
    Stats,

    /// Make up a new dog at random using data from real dogs
    Create {
        /// Directory to save the dog picture to
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Do not open the picture after downloading it
        #[arg(long)]
        no_open: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        let output_dir = match &self.command {
            Command::Create { output_dir, .. } => output_dir.clone(),
            _ => None,
        };

        Overrides {
            data_url: self.data_url.clone(),
            image_base_url: self.image_base_url.clone(),
            image_list_url: self.image_list_url.clone(),
            allowed_image_suffixes: self.allowed_image_suffixes.clone(),
            output_dir,
        }
    }
}
