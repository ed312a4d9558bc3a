//! clinicadent — data core for a small dental clinic's appointment book.
//!
//! An in-memory appointment list validated on every mutation, mirrored to a
//! JSON file after each create/update/delete, and driven by a form controller
//! with explicit Create/Editing state. Rendering (the table, inline errors,
//! the message area) belongs to the embedding UI; this crate hands it plain
//! data: error lists, outcome enums and the user-facing message strings.

pub mod config;
pub mod controller;
pub mod models;
pub mod repository;
pub mod store;
pub mod validation;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding shell.
///
/// `RUST_LOG` overrides the default filter. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("clinicadent starting v{}", config::APP_VERSION);
}
