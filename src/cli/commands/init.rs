use anyhow::Context;

use crate::config;
use crate::database;

pub async fn handle() -> anyhow::Result<()> {
    let pool = database::connect(config::config()).context("failed to create database pool")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to apply migrations")?;

    println!("Migrations applied");
    Ok(())
}
