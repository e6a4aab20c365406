//! XKE CLI: the `xke` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_logging(cli.verbose);

    match cli.command {
        Commands::List { json } => commands::list::run(json),

        Commands::Run {
            exercise,
            input,
            json,
        } => commands::run::run(exercise, input, json),

        Commands::Constants { json } => commands::constants::run(json),
    }
}
