use std::{fmt, io, path::PathBuf};

use chrono::Utc;

use crate::{Res, config, spotify, types::Token};

/// Seconds before the actual expiry at which a token is refreshed.
const EXPIRY_MARGIN_SECS: u64 = 240;

#[derive(Debug)]
pub enum TokenError {
    IoError(io::Error),
    SerdeError(serde_json::Error),
}

impl From<io::Error> for TokenError {
    fn from(err: io::Error) -> Self {
        TokenError::IoError(err)
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::SerdeError(err)
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::IoError(e) => write!(f, "token cache I/O error: {}", e),
            TokenError::SerdeError(e) => write!(f, "token cache is corrupt: {}", e),
        }
    }
}

impl std::error::Error for TokenError {}

/// Keeps the user token obtained by `playsort auth` on disk and refreshes it
/// when it is about to expire.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, TokenError> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), TokenError> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns an access token that is valid for at least a few more minutes,
    /// refreshing and persisting it first if needed.
    pub async fn get_valid_token(&mut self) -> Res<String> {
        if self.is_expired() {
            let mut fresh = spotify::auth::refresh_token(&self.token.refresh_token).await?;
            if fresh.refresh_token.is_empty() {
                // refresh tokens are only rotated sometimes
                fresh.refresh_token = self.token.refresh_token.clone();
            }
            self.token = fresh;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        is_expired_at(&self.token, now)
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }
}

/// Whether `token` is expired (or within the refresh margin) at `now`,
/// given in seconds since the epoch.
pub fn is_expired_at(token: &Token, now: u64) -> bool {
    now + EXPIRY_MARGIN_SECS >= token.obtained_at + token.expires_in
}
