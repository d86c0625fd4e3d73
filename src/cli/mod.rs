//! # CLI Module
//!
//! User-facing commands of playsort. Each command coordinates the Spotify
//! client, the enrichment step and the rankers, and reports progress and
//! failures through the crate's output macros.
//!
//! ## Commands
//!
//! - [`auth`] - log in with Spotify (OAuth 2.0 PKCE)
//! - [`list_playlists`] - the logged-in user's playlists
//! - [`show`] - a playlist with tempo, key, Camelot notation and lyrics status
//! - [`sort`] - the same, sorted by `bpm`, `camelot` or `wordplay`
//! - [`export`] - write a sorted playlist to a text file
//! - [`serve`] - run the JSON API
//!
//! ## Usage
//!
//! ```bash
//! playsort auth
//! playsort playlists --search mix
//! playsort sort 37i9dQZF1DXcBWIGoYBM5M --method camelot
//! playsort sort 37i9dQZF1DXcBWIGoYBM5M --method wordplay --reference 3
//! playsort export https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M --method bpm
//! ```
//!
//! Public playlists work without `auth` as long as the client secret is
//! configured; `playlists` always needs a logged-in user.

mod auth;
mod playlists;
mod serve;
mod sort;

pub use auth::auth;
pub use playlists::list_playlists;
pub use serve::serve;
pub use sort::export;
pub use sort::show;
pub use sort::sort;
