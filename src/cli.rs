use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "data/cybershieldx_dataset.csv";
pub const DEFAULT_OUTPUT: &str = "extracted_keywords.json";
pub const DEFAULT_SAMPLES: usize = 20;

#[derive(Parser, Debug)]
#[command(
    name = "incident-keywords",
    version,
    about = "Extract and bucket keyword annotations from labeled incident datasets"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "TOML file overriding the built-in bucket rules"
    )]
    pub rules: Option<PathBuf>,
    #[arg(long, short, global = true, help = "Only log warnings and errors")]
    pub quiet: bool,
    #[arg(long, short, global = true, help = "Enable debug logging")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the extraction pass and write the keyword summary.
    Extract {
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        #[arg(long, default_value_t = DEFAULT_SAMPLES, help = "Keywords shown per bucket")]
        samples: usize,
    },
    /// Check that the dataset is readable and carries the required columns.
    Validate {
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
    /// Print the active bucket rules.
    Rules,
}
