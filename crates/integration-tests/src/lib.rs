//! Integration tests for the TechStore demo.
//!
//! Tests drive the full storefront router in process through tower's
//! `oneshot`, so no port is bound and no server needs to be running.
//! The [`TestClient`] carries the session cookie between requests the
//! way a browser would, which is what keeps one cart across a test.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p techstore-integration-tests
//! ```
//!
//! Helpers here panic on malformed requests or responses; a panic in
//! test support is a failed test, not an error to propagate.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use tower::ServiceExt;

use techstore_storefront::config::StorefrontConfig;
use techstore_storefront::state::AppState;

/// Configuration for in-process tests. The port is never bound.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
    }
}

/// Build the full storefront app with seeded demo content.
#[must_use]
pub fn test_app() -> Router {
    techstore_storefront::app(AppState::new(test_config()))
}

/// Read a response body into a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not valid UTF-8")
}

/// Extract the session cookie pair from a response, if one was set.
#[must_use]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    raw.split(';').next().map(str::to_string)
}

/// Minimal browser stand-in: sends requests through `oneshot` and
/// carries the session cookie from response to request.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: test_app(),
            cookie: None,
        }
    }

    /// A second visitor against the same app, with no session yet.
    #[must_use]
    pub fn split(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        let request = self
            .request(Method::GET, uri)
            .body(Body::empty())
            .expect("failed to build request");
        self.send(request).await
    }

    /// Send a POST request with a URL-encoded form body.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> Response<Body> {
        let request = self
            .request(Method::POST, uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("failed to build request");
        self.send(request).await
    }

    fn request(&self, method: Method, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> Response<Body> {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = session_cookie(&response) {
            self.cookie = Some(cookie);
        }

        response
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
