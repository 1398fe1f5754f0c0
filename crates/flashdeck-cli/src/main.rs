//! Flashdeck CLI - turn notes into flashcards and study them.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Serve {
            port,
            no_open,
            llm,
            model,
            ephemeral_key,
        } => commands::serve::run(port, no_open, llm, model, ephemeral_key),

        Commands::Extract { file, json } => commands::extract::run(file, json, cli.verbose),

        Commands::Format {
            file,
            llm,
            model,
            output,
        } => commands::format::run(file, llm, model, output),

        Commands::Study { deck } => commands::study::run(deck),

        Commands::Key { action } => commands::key::run(action),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise info, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
