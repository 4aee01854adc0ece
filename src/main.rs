mod cli;
mod clipboard;
mod file_scanner;
mod workflow;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

fn main() -> Result<()> {
    // Handle daemon mode first. This should stay in main.rs as it's an early exit.
    if clipboard::check_and_run_daemon_if_requested()? {
        return Ok(());
    }

    let cli_args = cli::Cli::parse();

    // Logs go to stderr; stdout belongs to the prompts.
    let level = match cli_args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    workflow::run_pagepick(cli_args)
}
