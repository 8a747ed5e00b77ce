//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders every storefront route; the browser then hydrates from
//! the WASM bundle served under `/pkg`. Other paths are tried as files under
//! the site root (images, favicon); when no file matches, the app renders its
//! not-found page with a 404 status.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use yulita_client::app::{App, shell};

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Leptos options from `[package.metadata.leptos]`, with the host's site
/// root override applied.
fn leptos_options(config: &ServerConfig) -> Result<LeptosOptions, ServerError> {
    let conf = get_configuration(Some("Cargo.toml")).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let mut options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        options.site_root = root.to_string_lossy().into_owned().into();
    }
    Ok(options)
}

/// Full storefront router: health check, SSR pages, static assets, and the
/// rendered 404 fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let options = leptos_options(config)?;
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(&*options.site_root);

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
