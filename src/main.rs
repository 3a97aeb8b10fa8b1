//! Binary for the Telegram → WhatsApp channel relay.

use anyhow::Result;
use channel_relay::{load_config, run_relay, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_relay(config).await
        }
    }
}
