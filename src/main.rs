mod backend;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::backend::{BackendClient, BotBackend};
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Base URL of the bot backend
        #[arg(long, value_name = "BASE_URL")]
        base_url: Option<String>,

        /// Run without the terminal UI, logging events to the console.
        #[arg(long)]
        headless: bool,

        /// Disable background colors in the dashboard.
        #[arg(long)]
        no_background_color: bool,
    },
    /// Print whether the bot is running
    Status {
        /// Base URL of the bot backend
        #[arg(long, value_name = "BASE_URL")]
        base_url: Option<String>,
    },
    /// Print the bot's log buffer
    Logs {
        /// Base URL of the bot backend
        #[arg(long, value_name = "BASE_URL")]
        base_url: Option<String>,
    },
    /// Ask the backend to launch the bot
    StartBot {
        /// Base URL of the bot backend
        #[arg(long, value_name = "BASE_URL")]
        base_url: Option<String>,
    },
    /// Ask the backend to stop the bot
    StopBot {
        /// Base URL of the bot backend
        #[arg(long, value_name = "BASE_URL")]
        base_url: Option<String>,
    },
    /// Save a backend base URL as the default
    SetBackend {
        /// Base URL of the bot backend
        #[arg(value_name = "BASE_URL")]
        base_url: String,
    },
    /// Remove the saved backend configuration
    ClearBackend,
}

/// Resolve the backend to talk to: command-line flag, then saved config,
/// then the BOTDASH_ENVIRONMENT variable, then the local default.
fn resolve_environment(base_url: Option<String>) -> Environment {
    if let Some(url) = base_url {
        return Environment::from_base_url(url);
    }
    if let Ok(config_path) = get_config_path() {
        if config_path.exists() {
            if let Ok(config) = Config::load_from_file(&config_path) {
                return Environment::from_base_url(config.base_url);
            }
        }
    }
    std::env::var("BOTDASH_ENVIRONMENT")
        .ok()
        .and_then(|s| s.parse::<Environment>().ok())
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            base_url,
            headless,
            no_background_color,
        } => {
            let environment = resolve_environment(base_url);
            let session = setup_session(environment);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::Status { base_url } => {
            let client = BackendClient::new(resolve_environment(base_url));
            let status = client.status().await?;
            println!("{}", if status.running { "Running" } else { "Stopped" });
            Ok(())
        }
        Command::Logs { base_url } => {
            let client = BackendClient::new(resolve_environment(base_url));
            let logs = client.logs().await?;
            println!("{}", logs.join("\n"));
            Ok(())
        }
        Command::StartBot { base_url } => {
            let client = BackendClient::new(resolve_environment(base_url));
            client.start_bot().await?;
            // Confirm against the server rather than assuming success.
            let status = client.status().await?;
            println!(
                "Start command sent. Bot is {}.",
                if status.running { "running" } else { "stopped" }
            );
            Ok(())
        }
        Command::StopBot { base_url } => {
            let client = BackendClient::new(resolve_environment(base_url));
            client.stop_bot().await?;
            let status = client.status().await?;
            println!(
                "Stop command sent. Bot is {}.",
                if status.running { "running" } else { "stopped" }
            );
            Ok(())
        }
        Command::SetBackend { base_url } => {
            let config_path = get_config_path()?;
            let config = Config::new(base_url);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Saved backend {} to {}", config.base_url, config_path.display());
            Ok(())
        }
        Command::ClearBackend => {
            println!("Clearing saved backend configuration...");
            let config_path = get_config_path()?;
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
