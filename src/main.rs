//! Puka Cuckoo - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs command scripts against a
//! cuckoo hash table, either from a file or interactively from stdin.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use puka_cuckoo_lib::config::{
    get_global_config, init_global_config, ConfigLoader, LogConfig, PukaConfig, ENV_PREFIX,
};
use puka_cuckoo_lib::script::ScriptRunner;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Puka Cuckoo.
#[derive(Parser, Debug)]
#[clap(name = "Puka Cuckoo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Action to perform
    #[clap(subcommand)]
    action: Option<Action>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Action {
    /// Execute a command script
    Run {
        /// Path to the script
        #[clap(value_parser)]
        script: PathBuf,
    },

    /// Read commands from stdin
    Repl,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr so stdout carries only outcomes.
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.context("Failed to set global tracing subscriber")
}

/// Loads configuration, starts logging and publishes the configuration globally.
fn load_config(loader: &ConfigLoader) -> Result<PukaConfig> {
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.log)?;
    init_global_config(config);
    Ok(get_global_config())
}

/// Main entry point for the application.
fn main() -> Result<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.action.unwrap_or(Action::Repl) {
        Action::Run { script } => {
            let config = load_config(&loader)?;
            let source = fs::read_to_string(&script)
                .with_context(|| format!("Failed to read script {}", script.display()))?;

            info!(script = %script.display(), capacity = config.table.capacity, "running script");
            let mut runner = ScriptRunner::from_config(&config);
            runner.run_script(&source, &mut io::stdout().lock())?;
            Ok(())
        }
        Action::Repl => {
            let config = load_config(&loader)?;
            let mut runner = ScriptRunner::from_config(&config);
            runner.run_interactive(io::stdin().lock(), &mut io::stdout().lock())?;
            Ok(())
        }
        Action::Validate => {
            load_config(&loader)?;
            info!("Configuration validated successfully");
            println!("configuration ok");
            Ok(())
        }
        Action::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&PukaConfig::default())
                .context("Failed to serialize config")?;
            fs::write(&output, toml)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("default configuration written to {}", output.display());
            Ok(())
        }
    }
}
