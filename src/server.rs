use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::sync::Mutex;

use crate::{Res, api, config, info, types::PkceToken};

pub type SharedPkce = Arc<Mutex<Option<PkceToken>>>;

pub fn router(state: SharedPkce) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .route("/app_token", get(api::app_token))
        .route("/playlists", get(api::playlists))
        .route("/playlists/{id}", get(api::playlist))
        .route("/playlists/{id}/sort", get(api::sort))
        .route("/playlists/{id}/export", get(api::export))
        .layer(Extension(state))
}

/// Serves [`router`] on `SERVER_ADDRESS` until the process ends.
pub async fn start_api_server(state: SharedPkce) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
