//! Binary for the NeuroNavigator bot. Config comes from env; the token can be
//! overridden on the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use navigator_bot::{run_bot, BotConfig};

#[derive(Parser)]
#[command(name = "navigator-bot")]
#[command(about = "NeuroNavigator Telegram bot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
    }
}
