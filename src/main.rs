use anyhow::Context;
use clap::{Parser, Subcommand};
use cvhub::commands::*;
use cvhub::core::{config::HubConfig, dirs::default_config_file, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvhub")]
#[command(about = "A terminal hub for in-memory repositories")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip the start-up animation
    #[arg(long)]
    skip_intro: bool,

    /// Largest file, in bytes, that can be added or opened
    #[arg(long, value_name = "BYTES")]
    max_file_size: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive hub (default)
    Hub,
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_file()?,
    };
    let mut config = HubConfig::load(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path.display()))?;
    if cli.skip_intro {
        config.show_intro = false;
    }
    if let Some(limit) = cli.max_file_size {
        config.max_file_size = limit;
    }

    match cli.command.unwrap_or(Commands::Hub) {
        Commands::Hub => {
            if let Err(e) = execute_hub(config) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Config { init } => {
            if let Err(e) = execute_config(&config_path, &config, init) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
