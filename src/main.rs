//! Address Book - Main entry point
//!
//! Loads the saved address book, runs the interactive shell on stdin/stdout
//! and writes the book back when the shell exits.

use address_book::repositories::{BookRepository, JsonFileRepository};
use address_book::{Config, ContactServiceImpl, Shell};
use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep the prompt on stdout clean)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = JsonFileRepository::new(&config.book_path);
    let book = repository
        .load()
        .with_context(|| format!("Failed to load {}", config.book_path.display()))?;

    info!(
        "Starting address book with {} contacts from {}",
        book.len(),
        config.book_path.display()
    );

    let service =
        ContactServiceImpl::new(book).with_default_window(config.birthday_window_days);
    let mut shell = Shell::new(service);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let session = shell.run(stdin.lock(), &mut stdout);
    if let Err(e) = &session {
        error!("Shell stopped on an I/O error: {}", e);
    }

    // Save whatever the session changed, even if the terminal went away
    let book = shell.into_service().into_book();
    repository
        .save(&book)
        .with_context(|| format!("Failed to save {}", config.book_path.display()))?;

    session.context("Interactive session failed")?;
    info!("Address book shutdown complete");
    Ok(())
}
