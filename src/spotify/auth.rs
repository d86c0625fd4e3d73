use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    Res, config, info,
    management::TokenManager,
    server::start_api_server,
    types::{AppToken, PkceToken, Token},
    utils, warning,
};

/// How long `auth` waits for the browser round trip to finish.
const CALLBACK_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    scope: Option<String>,
    expires_in: Option<u64>,
}

impl TokenResponse {
    fn into_token(self) -> Token {
        Token {
            access_token: self.access_token,
            refresh_token: self.refresh_token.unwrap_or_default(),
            scope: self.scope.unwrap_or_default(),
            expires_in: self.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Runs the OAuth 2.0 PKCE flow and stores the resulting user token.
///
/// 1. Generates a code verifier and its SHA256 challenge
/// 2. Starts the local server that receives the `/callback`
/// 3. Opens the Spotify authorization page in the browser
/// 4. Waits up to 60 seconds for the callback to exchange the code
/// 5. Persists the token through [`TokenManager`]
///
/// If the browser cannot be opened the URL is printed so the user can
/// navigate there manually.
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Res<()> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = authorization_url(&code_challenge)?;
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Waiting for authorization in the browser...");
    }

    let token = wait_for_token(shared_state)
        .await
        .ok_or("Authentication failed or timed out.")?;

    TokenManager::new(token).persist().await?;
    Ok(())
}

/// Builds the Spotify authorization URL for the given PKCE challenge.
pub fn authorization_url(code_challenge: &str) -> Res<Url> {
    let url = Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", config::spotify_client_id()?),
            ("response_type", "code".to_string()),
            ("redirect_uri", config::spotify_redirect_uri()?),
            ("code_challenge", code_challenge.to_string()),
            ("code_challenge_method", "S256".to_string()),
            ("scope", config::spotify_scope()),
        ],
    )?;
    Ok(url)
}

async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    let start = std::time::Instant::now();

    while start.elapsed() < CALLBACK_TIMEOUT {
        {
            let lock = shared_state.lock().await;
            if let Some(token) = lock.as_ref().and_then(|pkce| pkce.token.clone()) {
                return Some(token);
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

async fn request_token(form: &[(&str, &str)]) -> Res<Token> {
    let response = Client::new()
        .post(config::spotify_apitoken_url())
        .form(form)
        .send()
        .await?
        .error_for_status()?;

    let json: TokenResponse = response.json().await?;
    Ok(json.into_token())
}

/// Exchanges a refresh token for a new access token.
///
/// The returned token carries an empty `refresh_token` if Spotify did not
/// rotate it; callers keep the previous one in that case.
pub async fn refresh_token(refresh_token: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    request_token(&[
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", client_id.as_str()),
    ])
    .await
}

/// Exchanges the authorization code from the callback for a user token,
/// proving possession of the PKCE `verifier`.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Res<Token> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri()?;
    request_token(&[
        ("grant_type", "authorization_code"),
        ("client_id", client_id.as_str()),
        ("code", code),
        ("code_verifier", verifier),
        ("redirect_uri", redirect_uri.as_str()),
    ])
    .await
}

/// Obtains an application token with the client-credentials grant.
///
/// Such a token can read public playlists and audio features but has no
/// user context, so `/me/...` endpoints reject it.
pub async fn get_app_token() -> Res<AppToken> {
    let client_id = config::spotify_client_id()?;
    let client_secret = config::spotify_client_secret()?;

    let token = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<AppToken>()
        .await?;

    Ok(token)
}

/// Access token of the logged-in user, refreshed if needed.
pub async fn user_token() -> Res<String> {
    let mut token_mgr = TokenManager::load()
        .await
        .map_err(|e| format!("Failed to load token. Please run playsort auth\n Error: {}", e))?;
    token_mgr.get_valid_token().await
}

/// Any usable access token: the user's if `playsort auth` was run, else an
/// application token.
pub async fn any_token() -> Res<String> {
    match user_token().await {
        Ok(token) => Ok(token),
        Err(_) => Ok(get_app_token().await?.access_token),
    }
}
