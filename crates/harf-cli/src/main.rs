//! harf CLI - Command-line front end for Arabic label preparation

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use harf::error::Result;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Shape(args) => commands::text::shape(args),
        Commands::Reverse(args) => commands::text::reverse(args),
        Commands::Process(args) => commands::text::process(args),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Batch(args) => commands::batch::run(args, cli.quiet),
        Commands::Info => commands::info::run(),
    }
}
