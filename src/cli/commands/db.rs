use anyhow::Context;
use clap::Subcommand;
use sqlx::PgPool;

use crate::database::models::{County, District, School};
use crate::database::{fixtures, DatabaseManager, Repository};

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Create the counties, districts and schools tables if missing")]
    Init,

    #[command(about = "Replace all rows with the reference seed data")]
    Seed {
        #[arg(long, help = "Create the tables first")]
        init: bool,
    },

    #[command(about = "Show row counts per table")]
    Status,
}

pub async fn handle(cmd: DbCommands, database_url: Option<String>) -> anyhow::Result<()> {
    let pool = connect(database_url).await?;

    match cmd {
        DbCommands::Init => {
            fixtures::install_schema(&pool).await?;
            println!("Schema installed");
        }
        DbCommands::Seed { init } => {
            if init {
                fixtures::install_schema(&pool).await?;
            }
            fixtures::seed(&pool).await.context("seeding failed (did you run `byob db init`?)")?;
            print_counts(&pool).await?;
        }
        DbCommands::Status => print_counts(&pool).await?,
    }

    pool.close().await;
    Ok(())
}

async fn connect(database_url: Option<String>) -> anyhow::Result<PgPool> {
    let pool = match database_url {
        Some(url) => DatabaseManager::connect_to(&url).await?,
        None => DatabaseManager::connect().await?,
    };
    Ok(pool)
}

async fn print_counts(pool: &PgPool) -> anyhow::Result<()> {
    println!("counties:  {}", Repository::<County>::new(pool.clone()).count().await?);
    println!("districts: {}", Repository::<District>::new(pool.clone()).count().await?);
    println!("schools:   {}", Repository::<School>::new(pool.clone()).count().await?);
    Ok(())
}
