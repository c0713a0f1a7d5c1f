//! HTTP Transport
//!
//! The seam between the API client and the network. The browser
//! implementation issues credentialed `fetch` calls and attaches the
//! anti-forgery header read from the `XSRF-TOKEN` cookie on every request.

use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;
use web_sys::RequestCredentials;

use crate::config::{AppConfig, XSRF_COOKIE, XSRF_HEADER};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API origin, e.g. `/api/tasks/3`
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), body: None }
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self { method: Method::Put, path: path.into(), body: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }

    pub fn json<B: serde::Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Raw status and body; status interpretation is left to the client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait(?Send)]
pub trait Transport {
    /// Send one request. `Err` only for requests that got no response at all.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

// ========================
// Browser fetch transport
// ========================

#[derive(Debug, Clone, Copy)]
pub struct BrowserTransport {
    config: AppConfig,
}

impl BrowserTransport {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let mut builder = builder
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(token) = document_cookies().as_deref().and_then(xsrf_token_from) {
            builder = builder.header(XSRF_HEADER, &token);
        }

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

fn document_cookies() -> Option<String> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()
}

/// Extract and percent-decode the XSRF cookie from a `document.cookie` string.
pub fn xsrf_token_from(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(XSRF_COOKIE)?.strip_prefix('='))
        .filter(|raw| !raw.is_empty())
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}
