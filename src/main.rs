use clap::Parser;
use miette::Result;

use dab::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Palette(args) => dab::cli::palette::run(args)?,
        Commands::Fill(args) => dab::cli::fill::run(args)?,
        Commands::Stroke(args) => dab::cli::stroke::run(args)?,
        Commands::Completions(args) => dab::cli::completions::run(args)?,
    }

    Ok(())
}
