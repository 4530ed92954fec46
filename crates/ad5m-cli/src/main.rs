//! Flashforge Adventurer 5M post-processing CLI
//!
//! Reorders the metadata blocks of a sliced gcode file so the printer screen
//! shows them, and optionally arms the spaghetti detector.

mod cli;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{} tracing subscriber already set", "warning:".yellow());
        }
        tracing::debug!("Verbose mode enabled");
    }

    println!(
        "{}\n",
        ">>> [Post-Processing Script for the Flashforge Adventurer 5M] <<<".bold()
    );
    println!("{}", ">>> Working... <<<".cyan());
    std::io::stdout().flush()?;

    let options = cli.options();
    tracing::debug!(?options, file = %cli.gcode_file.display(), "Starting post-processing");
    commands::run_process(&cli.gcode_file, &options)?;

    println!(
        "{}",
        ">>> Post-Processing successfully completed! <<<".green().bold()
    );
    Ok(())
}
