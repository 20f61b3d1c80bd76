//! CLI module for coffeu.
//!
//! The binary drives the same state holder the screens use:
//! - Argument parsing
//! - Version display
//! - Command dispatch (login, catalog, status, logout)
//!
//! # Usage
//!
//! ```ignore
//! use coffeu::cli::{parse_args, run_command};
//! use coffeu::startup::ClientConfig;
//!
//! let command = parse_args(std::env::args());
//! run_command(command, &ClientConfig::from_env()).await?;
//! ```

pub mod args;
pub mod output;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{handle_version_command, version_line, VERSION};

use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;

use crate::startup::{build_state, determine_start_screen, ClientConfig};

/// Run a parsed command against a freshly built state holder.
///
/// # Note
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub async fn run_command(command: CliCommand, config: &ClientConfig) -> Result<()> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Invalid(reason) => bail!("{}\n\n{}", reason, USAGE),
        CliCommand::Login {
            identifier,
            password,
        } => handle_login(config, &identifier, password).await,
        CliCommand::Catalog { query } => handle_catalog(config, query.as_deref()).await,
        CliCommand::Status => handle_status(config).await,
        CliCommand::Logout => handle_logout(config).await,
    }
}

async fn handle_login(config: &ClientConfig, identifier: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };

    let mut state = build_state(config)?;
    state.login(identifier, &password).await;

    if let Some(message) = state.error_message() {
        return Err(eyre!("{}", message));
    }
    let username = state.username().unwrap_or(identifier);
    println!("Logged in as {}.", username);
    Ok(())
}

async fn handle_catalog(config: &ClientConfig, query: Option<&str>) -> Result<()> {
    let mut state = build_state(config)?;
    state.load_catalog().await;

    if let Some(message) = state.catalog_error() {
        return Err(eyre!("{}", message));
    }
    let hits = state.search_catalog(query.unwrap_or(""));
    println!("{}", output::catalog_listing(&hits, query));
    Ok(())
}

async fn handle_status(config: &ClientConfig) -> Result<()> {
    let mut state = build_state(config)?;
    let screen = determine_start_screen(&mut state).await;
    println!("{}", output::status_line(&screen));

    if let Some(username) = state.username() {
        let profile = state.load_profile().await;
        let name = profile.display_name(username);
        if name != username {
            println!("Profile name: {}", name);
        }
    }
    Ok(())
}

async fn handle_logout(config: &ClientConfig) -> Result<()> {
    let mut state = build_state(config)?;
    state.restore_session().await;
    state.logout().await;
    println!("Logged out.");
    Ok(())
}
