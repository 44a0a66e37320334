//! rolodex-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus
//! `ROLODEX_*` environment variables, opens the SQLite store, and serves the
//! JSON API over HTTP.
//!
//! # Provisioning users
//!
//! Users are not exposed over HTTP. Create one with:
//!
//! ```sh
//! cargo run -p rolodex-server -- add-user --email admin@example.com
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rolodex_core::{store::Directory, user::NewUser};
use rolodex_server::{ServerConfig, hash_password, load_config};
use rolodex_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Rolodex contact directory server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: std::path::PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the HTTP API (the default).
  Serve,
  /// Create a user. The password is read from stdin.
  AddUser {
    #[arg(long)]
    email:    String,
    /// Store the account as inactive.
    #[arg(long)]
    inactive: bool,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = load_config(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store_path = server_cfg.resolved_store_path();
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => serve(store, &server_cfg).await,
    Command::AddUser { email, inactive } => add_user(store, email, !inactive).await,
  }
}

async fn serve(store: SqliteStore, server_cfg: &ServerConfig) -> anyhow::Result<()> {
  let app = rolodex_api::api_router(Arc::new(store)).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}

async fn add_user(store: SqliteStore, email: String, is_active: bool) -> anyhow::Result<()> {
  if store.find_user_by_email(email.clone()).await?.is_some() {
    anyhow::bail!("a user with email {email} already exists");
  }

  let password = read_password()?;
  if password.is_empty() {
    anyhow::bail!("password must not be empty");
  }

  let user = store
    .add_user(NewUser {
      email,
      password_hash: hash_password(&password)?,
      is_active,
    })
    .await
    .context("failed to create user")?;

  tracing::info!(id = user.id, email = %user.email, "user created");
  Ok(())
}

/// Read one line from stdin as the password.
fn read_password() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  let stdin = io::stdin();
  print!("Password: ");
  io::stdout().flush().ok();
  let mut line = String::new();
  stdin.lock().read_line(&mut line)?;
  Ok(
    line
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  )
}
