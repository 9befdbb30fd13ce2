//! chatcmd console.
//!
//! Reads chat messages from standard input, one per line, and runs them through
//! the command engine as the configured console player. Each outcome is
//! printed as a JSON object on its own line:
//!
//! - `{"resp": "...", "public": false}` when a command answered
//! - `{"public": true}` when a command ran silently
//! - `{"chat": "..."}` when the line is ordinary chat
//!
//! Packets the commands queue for the simulated players are logged.
//!
//! # Usage
//!
//! ```bash
//! echo '!roll 50' | chatcmd --config config.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Upper bound of the log level (default: `debug`). The `!debug`
//!   command and `server.debug` switch between `info` and `debug` below it.
//! - `CHATCMD_*` - Configuration overrides, see [`chatcmd::config`]

use std::sync::Arc;

use chatcmd::{
    commands::{CommandResponse, Commander, default_commands},
    config::Config,
    players::{Lobby, OnlinePlayer, Player, Target},
    server::ServerState,
};
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: String,

    /// Overrides the console player name from the configuration.
    #[arg(short, long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() {
    // Let everything through env_logger, the debug flag narrows it down
    let env = Env::default().filter_or("RUST_LOG", "debug");
    env_logger::init_from_env(env);

    info!("Starting chatcmd {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let mut config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    if let Some(name) = args.name {
        config.console.name = name;
    }

    if let Err(e) = run(config).await {
        error!("Console stopped: {}", e);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let server = Arc::new(ServerState::new(config.server.debug));
    server.set_debug(config.server.debug);

    let mut lobby = Lobby::new();
    let console = lobby.add(OnlinePlayer::from(&config.console));
    for player in &config.players {
        lobby.add(OnlinePlayer::from(player));
    }
    let lobby = Arc::new(lobby);

    info!(
        "{} online, console speaking as {} ({})",
        lobby.players().len(),
        config.console.name,
        config.console.privileges
    );

    let commander = Commander::new(default_commands(), lobby.clone(), server);
    let target = Target::Channel(config.server.channel);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let output = match commander.process(console.as_ref(), &target, &line) {
            None => json!({ "chat": line }),
            Some(CommandResponse::Silent) => json!({ "public": true }),
            Some(CommandResponse::Reply { text, public }) => {
                json!({ "resp": text, "public": public })
            }
        };
        println!("{}", output);

        flush_queues(&lobby);
    }

    info!("end of input");
    Ok(())
}

/// Logs and discards the packets queued for every player.
fn flush_queues(lobby: &Lobby) {
    for player in lobby.players() {
        for packet in player.dequeue() {
            info!("{} <- {:02x?}", player.name(), packet);
        }
    }
}
