//! # API Module
//!
//! HTTP endpoints of the local server started by `playsort serve` (and, for
//! the OAuth callback, by `playsort auth`).
//!
//! ## Endpoints
//!
//! - `GET /health` - status and version
//! - `GET /callback` - completes the PKCE flow ([`callback`])
//! - `GET /app_token` - a client-credentials access token
//! - `GET /playlists` - the logged-in user's playlists
//! - `GET /playlists/{id}` - a playlist with enriched tracks, unsorted
//! - `GET /playlists/{id}/sort?method=bpm|camelot|wordplay&reference=N` -
//!   the same, sorted; `method` defaults to `bpm`
//! - `GET /playlists/{id}/export?method=..` - the sorted playlist as a
//!   plain-text attachment
//!
//! Failures are answered with a JSON body `{"error": "..."}`, including
//! an unknown `method` or a `reference` that is not a track index.

mod callback;
mod health;
mod playlists;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

pub use callback::callback;
pub use health::health;
pub use playlists::{SortQuery, app_token, export, playlist, playlists, sort};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl ToString) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    pub fn bad_request(message: impl ToString) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl ToString) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn bad_gateway(message: impl ToString) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
