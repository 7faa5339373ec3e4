use std::net::SocketAddr;

use axum::{Extension, Router, routing::get};
use reqwest::Url;

use crate::{Res, api, api::RedirectSlot, error::AppError, warning};

/// Serves the redirect URI's path on its host and port.
///
/// Binds before returning, so an occupied port is reported right away. The
/// server then runs on a background task until the process exits.
///
/// # Returns
///
/// The address actually bound (useful when the URI names port 0).
pub async fn start_redirect_listener(redirect_uri: &str, slot: RedirectSlot) -> Res<SocketAddr> {
    let url = Url::parse(redirect_uri)
        .map_err(|e| AppError::InvalidUrl(format!("{}: {}", redirect_uri, e)))?;
    let host = url
        .host_str()
        .ok_or_else(|| AppError::InvalidUrl(format!("{}: no host", redirect_uri)))?
        .to_string();
    let port = url
        .port_or_known_default()
        .ok_or_else(|| AppError::InvalidUrl(format!("{}: no port", redirect_uri)))?;
    let path = match url.path() {
        "" => "/".to_string(),
        path => path.to_string(),
    };

    let app = Router::new()
        .route(&path, get(api::callback))
        .layer(Extension(slot));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            warning!("Redirect listener stopped: {}", e);
        }
    });

    Ok(addr)
}
