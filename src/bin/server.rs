//! choreboard server
//!
//! Opens (or creates) the chore database, runs migrations, then binds the
//! local port and serves the JSON API plus the embedded web UI. The store
//! is fully initialized before the socket is bound, so clients never see a
//! half-initialized server - until then they get connection refused.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::path::PathBuf;

use clap::Parser;

use choreboard::config::GlobalConfig;
use choreboard::server;
use choreboard::storage::ChoreStore;

/// choreboard-server - local chore API and web UI
#[derive(Parser, Debug)]
#[command(
    name = "choreboard-server",
    version,
    about = "Local chore API and web UI",
    long_about = "Serves the chore JSON API and the embedded web UI on 127.0.0.1.\n\
                  Normally launched by the choreboard desktop shell, but runs fine\n\
                  standalone for use from a browser."
)]
struct Cli {
    /// Port to bind on 127.0.0.1
    #[arg(long)]
    port: Option<u16>,

    /// Database file path
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = GlobalConfig::load();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.clone()),
    )
    .init();

    // Write a default config on first run so the file is there to edit.
    if !choreboard::paths::config_file().exists() {
        if let Err(e) = config.save() {
            log::warn!("could not write default config: {e}");
        }
    }

    let port = config.resolve_port(cli.port);
    let database = config.resolve_database(cli.db);

    log::info!("opening database at {}", database.display());
    let store = ChoreStore::open(&database)?;

    server::serve(&store, port)
}
