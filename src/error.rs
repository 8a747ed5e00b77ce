//! Startup errors for the storefront host.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
