use clap::{Args, Parser, Subcommand};

use client::{RectangleApi, RectangleStore, StoreError};
use geometry::rect::{Size, SizeLocation};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("api request failed: {0}")]
    Api(#[from] StoreError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "rectboard-cli", about = "Rectangle store API CLI")]
struct Cli {
    #[arg(long, env = "RECTBOARD_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is reachable.
    Ping,
    /// Read or replace the stored rectangle.
    Rect(RectCommand),
    /// Administer the server-side size limits.
    Limits(LimitsCommand),
}

#[derive(Args, Debug)]
struct RectCommand {
    #[command(subcommand)]
    command: RectSubcommand,
}

#[derive(Subcommand, Debug)]
enum RectSubcommand {
    /// Print the canonical rectangle as JSON.
    Get,
    /// Replace the canonical rectangle (validated against the limits).
    Set {
        #[arg(long)]
        x: i64,
        #[arg(long)]
        y: i64,
        #[arg(long)]
        width: i64,
        #[arg(long)]
        height: i64,
    },
}

#[derive(Args, Debug)]
struct LimitsCommand {
    #[command(subcommand)]
    command: LimitsSubcommand,
}

#[derive(Subcommand, Debug)]
enum LimitsSubcommand {
    /// Replace the maximum rectangle dimensions.
    Set {
        #[arg(long)]
        width: i64,
        #[arg(long)]
        height: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let api = RectangleApi::new(cli.base_url);

    match cli.command {
        Command::Ping => {
            api.ping().await?;
            println!("ok");
        }
        Command::Rect(rect) => match rect.command {
            RectSubcommand::Get => {
                let rect = api.fetch_size_location().await?;
                println!("{}", serde_json::to_string_pretty(&rect)?);
            }
            RectSubcommand::Set { x, y, width, height } => {
                api.persist_size_location(SizeLocation { x, y, width, height }).await?;
                println!("ok");
            }
        },
        Command::Limits(limits) => match limits.command {
            LimitsSubcommand::Set { width, height } => {
                api.set_limits(Size { width, height }).await?;
                println!("ok");
            }
        },
    }
    Ok(())
}
