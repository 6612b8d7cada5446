//! Drive the router in-process, without binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

/// Status and body text of a response.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

pub async fn send(app: &Router, request: Request<Body>) -> Reply {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    Reply {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
    }
}

pub async fn get(app: &Router, uri: &str) -> Reply {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(app, request).await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> Reply {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .expect("request");
    send(app, request).await
}

/// Open a session for `customer` and return its key.
pub async fn session_key(app: &Router, customer: u32) -> String {
    let reply = get(app, &format!("/{customer}/session")).await;
    assert_eq!(reply.status, StatusCode::OK, "session request failed: {reply:?}");
    reply.body
}

/// Submit `stake` on `market` with `key`.
pub async fn stake(app: &Router, market: i64, key: &str, stake: i64) -> Reply {
    post(
        app,
        &format!("/{market}/stake?sessionkey={key}"),
        &format!(r#"{{"stake":{stake}}}"#),
    )
    .await
}
