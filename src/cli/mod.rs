pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio CLI - provisioning for the portfolio backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply database migrations")]
    Init,

    #[command(about = "Administrator credential management")]
    Admin {
        #[command(subcommand)]
        cmd: commands::admin::AdminCommands,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init => commands::init::handle().await,
        Commands::Admin { cmd } => commands::admin::handle(cmd).await,
    }
}
