use crate::config::AppConfig;
use crate::db::{Database, KeyValueStore, LocalStorage, MemoryStore};
use crate::router::handle;
use crate::state::App;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "oferti=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    // An unusable database file degrades to in-memory state.
    let store: Arc<dyn KeyValueStore> = match Database::open(&config.db_path) {
        Ok(db) => {
            info!(path = %config.db_path.display(), "database opened");
            Arc::new(db)
        }
        Err(e) => {
            warn!(path = %config.db_path.display(), error = %e, "database unavailable, state will not persist");
            Arc::new(MemoryStore::new())
        }
    };

    let app = App::new(LocalStorage::new(store));

    info!(addr = %config.addr, "starting server");
    let server = Server::bind(config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down");
}
