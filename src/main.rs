use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chatbox::{cli, config, server};

#[derive(Parser)]
#[command(name = "chatbox", version, about = "Mini chat assistant with keyword and regex intents")]
struct Cli {
    /// Config file (default: ~/.chatbox/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the reply to a message without recording it
    Ask {
        #[arg(required = true)]
        message: Vec<String>,
        /// Also print which rule produced the reply
        #[arg(long)]
        explain: bool,
    },
    /// Print a user's transcript
    History {
        /// User id (default: guest)
        #[arg(long)]
        user: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check database and intents file health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::ChatboxConfig::load_from(path)?,
        None => config::ChatboxConfig::load()?,
    };

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(config).await?;
        }
        Command::Ask { message, explain } => {
            cli::ask(&config, &message.join(" "), explain)?;
        }
        Command::History { user, json } => {
            cli::history(&config, user.as_deref(), json)?;
        }
        Command::Doctor => {
            cli::doctor(&config)?;
        }
    }

    Ok(())
}
