use anyhow::Context;
use clap::Subcommand;

use crate::auth::password::hash_password;
use crate::config;
use crate::database::{self, models::Admin};

#[derive(Subcommand)]
pub enum AdminCommands {
    #[command(about = "Create or reset an administrator credential")]
    Set {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

pub async fn handle(cmd: AdminCommands) -> anyhow::Result<()> {
    match cmd {
        AdminCommands::Set { email, password } => set(email, password).await,
    }
}

/// Provisioning step for the login flow: the stored value is always a one-way
/// hash, never the plaintext. Re-running with the same email resets the
/// password.
async fn set(email: String, password: String) -> anyhow::Result<()> {
    let email = email.trim().to_string();
    anyhow::ensure!(email.contains('@'), "a valid email address is required");
    anyhow::ensure!(
        password.len() >= 8,
        "password must be at least 8 characters"
    );

    let pool = database::connect(config::config())?;
    let hash = hash_password(&password).context("failed to hash password")?;
    let admin = Admin::upsert(&pool, &email, &hash)
        .await
        .context("failed to write administrator credential")?;

    println!("Administrator credential synchronized for {}", admin.email);
    Ok(())
}
