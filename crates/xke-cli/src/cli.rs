use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "xke",
    about = "XKE kata: evaluate language-feature exercises by name",
    version
)]
pub struct Cli {
    /// Log exercise evaluation to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every exercise with the feature it practices
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate one exercise on a JSON input
    Run {
        /// Exercise name (see `xke list`)
        exercise: String,

        /// JSON input, e.g. `5`, `"http://x?a=1"`, `[3, 4]`
        #[arg(long, default_value = "null")]
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the host, port and blog URL constants
    Constants {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
