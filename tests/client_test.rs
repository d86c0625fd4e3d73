use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use playsort::spotify::client::{get_json, send_with_retry};
use reqwest::Client;
use serde_json::{Value, json};

// Helper function to serve a router on an ephemeral local port
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{}", addr)
}

fn rate_limited(retry_after: &'static str) -> Response {
    (StatusCode::TOO_MANY_REQUESTS, [(header::RETRY_AFTER, retry_after)]).into_response()
}

async fn limited_once(State(hits): State<Arc<AtomicUsize>>) -> Response {
    if hits.fetch_add(1, Ordering::SeqCst) == 0 {
        rate_limited("0")
    } else {
        Json(json!({ "id": "abc", "tempo": 120.5 })).into_response()
    }
}

async fn always_limited(State(hits): State<Arc<AtomicUsize>>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    rate_limited("0")
}

async fn limited_for_long(State(hits): State<Arc<AtomicUsize>>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    rate_limited("600")
}

async fn not_found(State(hits): State<Arc<AtomicUsize>>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    StatusCode::NOT_FOUND.into_response()
}

async fn serve_counted(router: Router<Arc<AtomicUsize>>) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_server(router.with_state(Arc::clone(&hits))).await;
    (base, hits)
}

#[tokio::test]
async fn test_get_json_retries_after_rate_limit() {
    let (base, hits) = serve_counted(Router::new().route("/data", get(limited_once))).await;

    let value: Value = get_json(&Client::new(), &format!("{}/data", base), "token")
        .await
        .unwrap();

    assert_eq!(value["tempo"], 120.5);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_get_json_gives_up_after_three_attempts() {
    let (base, hits) = serve_counted(Router::new().route("/data", get(always_limited))).await;

    let err = get_json::<Value>(&Client::new(), &format!("{}/data", base), "token")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_get_json_does_not_wait_for_long_retry_after() {
    let (base, hits) = serve_counted(Router::new().route("/data", get(limited_for_long))).await;

    let err = get_json::<Value>(&Client::new(), &format!("{}/data", base), "token")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_send_with_retry_returns_final_status() {
    let (base, hits) = serve_counted(Router::new().route("/missing", get(not_found))).await;

    let response = send_with_retry(Client::new().get(format!("{}/missing", base)))
        .await
        .unwrap();

    // Not a transient failure, so no retry and no error
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
