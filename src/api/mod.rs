//! Backend API
//!
//! Client for the session-authenticated REST backend, organized by domain.

mod auth;
mod client;
mod tasks;
mod transport;

#[cfg(test)]
pub mod fake;

pub use auth::*;
pub use client::ApiClient;
pub use tasks::*;
pub use transport::{BrowserTransport, Transport};

use crate::config::AppConfig;

/// Client used by the running app
pub type BrowserApi = ApiClient<BrowserTransport>;

pub fn browser_api(config: AppConfig) -> BrowserApi {
    ApiClient::new(BrowserTransport::new(config), config.csrf_path)
}
