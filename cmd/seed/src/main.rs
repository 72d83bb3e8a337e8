//! # seed
//!
//! Registers a forum user directly in Postgres and prints an access token for
//! it. Handy for local development, since user registration lives elsewhere.

use anyhow::Context;
use auth_adapters::{hash_password, JwtTokenManager};
use clap::Parser;
use configs::AppConfig;
use domains::AuthenticatedUser;
use secrecy::ExposeSecret;
use storage_adapters::postgres;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(about = "Create a forum user and print an access token", long_about = None)]
struct Args {
    /// Login name, unique across users
    #[arg(long)]
    username: String,

    #[arg(long)]
    password: String,

    /// Display name; defaults to the username
    #[arg(long)]
    fullname: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log.filter))
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    let url = config.database.url.as_ref().context("database.url is not set")?;
    let pool = postgres::connect(url.expose_secret(), 1).await?;
    postgres::run_migrations(&pool).await?;

    let user = AuthenticatedUser {
        id: format!("user-{}", Uuid::new_v4().simple()),
        username: args.username,
    };
    let fullname = args.fullname.unwrap_or_else(|| user.username.clone());

    sqlx::query("INSERT INTO users (id, username, password, fullname) VALUES ($1, $2, $3, $4)")
        .bind(&user.id)
        .bind(&user.username)
        .bind(hash_password(&args.password)?)
        .bind(&fullname)
        .execute(&pool)
        .await
        .with_context(|| format!("failed to insert user `{}`", user.username))?;
    tracing::info!(user_id = %user.id, username = %user.username, "user created");

    let tokens = JwtTokenManager::new(
        config.auth.access_token_key.expose_secret().as_bytes(),
        config.auth.access_token_age_secs,
    );
    println!("{}", tokens.issue(&user)?);

    Ok(())
}
