use axum::{
    extract::{Path, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    api::ApiError,
    enrich, export,
    ranking::SortMethod,
    spotify,
    types::{PlaylistSummary, SortedPlaylist},
    warning,
};

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    pub method: Option<String>,
    pub reference: Option<String>,
}

impl SortQuery {
    fn method(&self) -> Result<SortMethod, ApiError> {
        match self.method.as_deref() {
            None => Ok(SortMethod::Bpm),
            Some(method) => method.parse().map_err(ApiError::bad_request),
        }
    }

    fn reference(&self) -> Result<Option<usize>, ApiError> {
        self.reference
            .as_deref()
            .map(|r| {
                r.trim()
                    .parse::<usize>()
                    .map_err(|_| ApiError::bad_request(format!("Invalid reference track: {}", r)))
            })
            .transpose()
    }
}

pub async fn app_token() -> Result<Json<Value>, ApiError> {
    let token = spotify::auth::get_app_token()
        .await
        .map_err(ApiError::bad_gateway)?;
    Ok(Json(json!({ "access_token": token.access_token })))
}

pub async fn playlists() -> Result<Json<Vec<PlaylistSummary>>, ApiError> {
    let token = spotify::auth::user_token()
        .await
        .map_err(ApiError::unauthorized)?;
    let playlists = spotify::playlists::get_user_playlists(&token)
        .await
        .map_err(|_| ApiError::bad_request("Failed to fetch playlists"))?;
    Ok(Json(playlists))
}

pub async fn playlist(Path(id): Path<String>) -> Result<Json<SortedPlaylist>, ApiError> {
    Ok(Json(load(&id).await?))
}

pub async fn sort(
    Path(id): Path<String>,
    Query(query): Query<SortQuery>,
) -> Result<Json<SortedPlaylist>, ApiError> {
    let method = query.method()?;
    let reference = query.reference()?;
    let playlist = load(&id).await?;
    Ok(Json(playlist.sorted_by(method, reference)))
}

pub async fn export(
    Path(id): Path<String>,
    Query(query): Query<SortQuery>,
) -> Result<Response, ApiError> {
    let method = query.method()?;
    let reference = query.reference()?;
    let playlist = load(&id).await?.sorted_by(method, reference);

    let body = export::render(&playlist.name, &playlist.tracks);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(Some(method))
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

async fn load(id: &str) -> Result<SortedPlaylist, ApiError> {
    enrich::fetch_enriched(id)
        .await
        .map_err(|e| {
            warning!("Failed to fetch playlist {}: {}", id, e);
            ApiError::bad_request("Failed to fetch playlist")
        })
}
