use astra::Server;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod flash;
mod forms;
mod guards;
mod handlers;
mod request;
mod responses;
mod router;
mod templates;
mod validation;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = AppConfig::from_env();

    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let addr: SocketAddr = match cfg.addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(addr = %cfg.addr, error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };
    tracing::info!("listening on http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
