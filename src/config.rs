//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::app::DEFAULT_WS_PATH;
use crate::catalog::Catalog;
use crate::error::CatalogError;

#[derive(Debug, Clone, Parser)]
#[command(name = "profile-quiz")]
#[command(about = "Serve the profile quiz over WebSocket")]
pub struct Config {
    /// Address to listen on
    #[arg(short, long, env = "QUIZ_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Catalog TOML file; the bundled economics quiz is used when omitted
    #[arg(short, long, env = "QUIZ_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Outgoing event buffer per connection
    #[arg(
        long,
        env = "QUIZ_EVENT_BUFFER",
        default_value_t = 32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub event_buffer: u32,

    /// Route the WebSocket endpoint is mounted on
    #[arg(
        long,
        env = "QUIZ_WS_PATH",
        default_value = DEFAULT_WS_PATH,
        value_parser = parse_ws_path
    )]
    pub ws_path: String,
}

// axum panics on routes without a leading slash
fn parse_ws_path(path: &str) -> Result<String, String> {
    if path.starts_with('/') && path.len() > 1 {
        Ok(path.to_string())
    } else {
        Err(format!("route must start with '/' and name a path: {path:?}"))
    }
}

impl Config {
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Catalog::reference(),
        }
    }
}
