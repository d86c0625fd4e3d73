//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API playsort needs: logging
//! in, listing and reading playlists, and fetching audio features.
//!
//! ## Architecture
//!
//! ```text
//! CLI / HTTP API
//!          ↓
//! Enrichment (tracks, features, lyrics)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE, client credentials)
//!     ├── Playlists (user playlists, playlist tracks with pagination)
//!     └── Audio Features (tempo, key, mode, danceability, energy)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements two flows:
//! - **PKCE user flow** (`playsort auth`): needed for `/me/playlists` and
//!   private playlists. The token is cached on disk and refreshed shortly
//!   before it expires.
//! - **Client credentials**: an application token used for public playlists
//!   when nobody has logged in.
//!
//! ## Retries
//!
//! Every GET goes through [`client::get_json`], which retries a `502 Bad
//! Gateway` after 10 seconds and honours `Retry-After` on `429 Too Many
//! Requests` (up to 120 seconds), for at most three attempts.
//!
//! ## API Coverage
//!
//! - `GET /me/playlists` - the user's playlists
//! - `GET /playlists/{id}` - playlist metadata and first page of tracks
//! - `GET /playlists/{id}/tracks` - further track pages via `next`
//! - `GET /audio-features?ids=` - audio analysis in batches of 100
//! - `POST /api/token` - code exchange, refresh and client credentials
//!
//! ## Error Types
//!
//! - **`reqwest::Error`** - single HTTP calls
//! - **[`Res`](crate::Res)** - operations that combine configuration, token
//!   cache and HTTP

pub mod auth;
pub mod client;
pub mod features;
pub mod playlists;
