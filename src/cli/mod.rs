pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "byob")]
#[command(about = "BYOB CLI - database setup and token issuance for the School Finder API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Database URL (defaults to DATABASE_URL)")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Schema and seed data management")]
    Db {
        #[command(subcommand)]
        cmd: commands::db::DbCommands,
    },

    #[command(about = "Issue and inspect API tokens")]
    Token {
        #[command(subcommand)]
        cmd: commands::token::TokenCommands,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Db { cmd } => commands::db::handle(cmd, cli.database_url).await,
        Commands::Token { cmd } => commands::token::handle(cmd),
    }
}
