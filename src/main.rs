mod cli;
mod outputs;
mod show;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { file, output, long } => show::execute(file, &output, long),
        Commands::Outputs => outputs::execute(),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
