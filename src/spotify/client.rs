use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::warning;

/// Upper bound on requests for one resource, first attempt included.
const MAX_ATTEMPTS: u32 = 3;

/// Longest `Retry-After` we are willing to wait for, in seconds.
const MAX_RETRY_AFTER_SECS: u64 = 120;

const BAD_GATEWAY_BACKOFF: Duration = Duration::from_secs(10);

fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

/// Sends `request`, retrying transient failures.
///
/// A `502 Bad Gateway` is retried after 10 seconds and a `429 Too Many
/// Requests` after the advertised `Retry-After` delay, up to three attempts in
/// total. The last response is returned as is, whatever its status, so
/// callers can treat e.g. `404` themselves. Requests whose body cannot be
/// cloned are sent once.
pub async fn send_with_retry(request: RequestBuilder) -> Result<Response, reqwest::Error> {
    let mut attempt = 1;

    loop {
        let Some(current) = request.try_clone() else {
            return request.send().await;
        };
        let response = current.send().await?;
        let status = response.status();

        if attempt < MAX_ATTEMPTS {
            if status == StatusCode::BAD_GATEWAY {
                attempt += 1;
                sleep(BAD_GATEWAY_BACKOFF).await;
                continue;
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                match retry_after_secs(&response) {
                    Some(secs) if secs <= MAX_RETRY_AFTER_SECS => {
                        attempt += 1;
                        sleep(Duration::from_secs(secs)).await;
                        continue;
                    }
                    Some(secs) => warning!(
                        "Asked to retry after {} seconds. Try again later.",
                        secs
                    ),
                    None => {}
                }
            }
        }

        return Ok(response);
    }
}

/// Authenticated GET returning deserialized JSON, with the retry policy of
/// [`send_with_retry`]. Any non-success final status is an error.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: &str,
) -> Result<T, reqwest::Error> {
    send_with_retry(client.get(url).bearer_auth(token))
        .await?
        .error_for_status()?
        .json::<T>()
        .await
}
