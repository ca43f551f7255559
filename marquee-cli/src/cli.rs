use std::path::PathBuf;

use clap::{Parser, Subcommand};

use marquee_core::MarqueeConfig;

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about = "Item-to-item film recommendations")]
pub struct Cli {
    /// Config file (defaults to ./marquee.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog JSON file.
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Similarity matrix file (.bin or JSON).
    #[arg(long, global = true)]
    pub matrix: Option<String>,

    /// TMDB API key used to fetch posters.
    #[arg(long, env = "TMDB_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog titles in order.
    Titles,
    /// Recommend items similar to TITLE.
    Recommend {
        title: String,
        /// Number of recommendations (defaults to config).
        #[arg(long)]
        top_n: Option<usize>,
    },
    /// Recommend, then score the ranking with genre overlap and precision@K.
    Evaluate {
        title: String,
        #[arg(long)]
        top_n: Option<usize>,
        /// Precision cutoff (defaults to config).
        #[arg(long)]
        k: Option<usize>,
    },
    /// Convert a JSON similarity matrix to the binary format.
    ConvertMatrix { input: PathBuf, output: PathBuf },
}

impl Cli {
    /// Apply flags over the loaded config (highest priority layer).
    pub fn apply_overrides(&self, config: &mut MarqueeConfig) {
        if let Some(catalog) = &self.catalog {
            config.storage.catalog_path = catalog.clone();
        }
        if let Some(matrix) = &self.matrix {
            config.storage.matrix_path = matrix.clone();
        }
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            config.assets.api_key = Some(key.clone());
        }
    }
}
