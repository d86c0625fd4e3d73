//! Playlist Sorter CLI Library
//!
//! This library fetches Spotify playlists, enriches their tracks with audio
//! features and lyrics, and re-orders them by tempo, by harmonic key
//! compatibility on the Camelot wheel, or by lyrical similarity.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `enrich` - Turns playlist entries into fully populated tracks
//! - `export` - Plain-text export of sorted playlists
//! - `lyrics` - Lyrics lookup client
//! - `management` - Token caching
//! - `ranking` - The sort algorithms
//! - `server` - Local HTTP server for OAuth callbacks and the JSON API
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use playsort::{config, ranking};
//!
//! #[tokio::main]
//! async fn main() -> playsort::Res<()> {
//!     config::load_env().await?;
//!     let tokens = ranking::tokenize("The Cat sat on the MAT!!");
//!     assert_eq!(tokens, vec!["cat", "sat", "mat"]);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod enrich;
pub mod export;
pub mod lyrics;
pub mod management;
pub mod ranking;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result type for operations that combine configuration, disk and HTTP.
///
/// The error is boxed with `Send + Sync` so it can be returned from tasks
/// spawned on the tokio runtime.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Progress line on stdout, prefixed with a blue `o`.
///
/// ```
/// info!("Fetching playlist {}", id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Result line on stdout, prefixed with a green check mark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Only for failures a CLI command cannot continue from. Library code
/// returns errors instead.
///
/// ```
/// error!("Failed to fetch playlist: {}", e);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Non-fatal problem on stderr, prefixed with a yellow `!`.
///
/// Used where a lookup fails for some tracks but the playlist can still be
/// sorted, e.g. missing lyrics or a failed audio-feature batch.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
