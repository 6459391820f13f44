use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use projboard::config::Config;
use projboard::report;

fn setup_logging(default_level: &str) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("projboard")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("projboard.log");

    // File target keeps log lines off the TUI
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None | Some(Commands::Tui) => run_tui(config),
        Some(Commands::Submit {
            title,
            description,
            count,
            json,
        }) => handle_submit_command(title, description, count, *json, config),
    }
}

fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;
    runtime.block_on(projboard::tui::run(config))
}

fn handle_submit_command(title: &str, description: &str, count: &str, json: bool, config: &Config) -> Result<()> {
    // main reports the rejection; nothing is printed here
    let board =
        report::submit_once(config.form.clone(), title, description, count).context("Submission rejected")?;

    let mut stdout = io::stdout().lock();
    if json {
        report::write_json(&board, &mut stdout)
    } else {
        report::write_lists(&board, &mut stdout)
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let level = if cli.is_verbose() {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    setup_logging(level).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
