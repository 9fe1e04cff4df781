use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stargaze")]
#[command(
    author,
    version,
    about = "Render GitHub starred-repository records to the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render stars from a JSON file
    Show {
        /// Path to a file holding a JSON array of star records
        file: PathBuf,

        /// Output backend to render with
        #[clap(short, long, default_value = "color")]
        output: String,

        /// Show full records: tags, description, homepage, starred date
        #[clap(short, long, default_value_t = false)]
        long: bool,
    },

    /// List the available output backends
    Outputs,
}
