//! Frontend Configuration
//!
//! Values baked in at build time from the environment, with defaults that match
//! a local Laravel Sanctum backend.

use chrono_tz::Tz;

/// Cookie the backend sets on the CSRF bootstrap call
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
/// Header the backend expects the decoded cookie value in
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

const DEFAULT_API_BASE_URL: &str = "http://localhost:80";
const DEFAULT_CSRF_PATH: &str = "/sanctum/csrf-cookie";
const DEFAULT_DUE_DATE_TZ: Tz = chrono_tz::Asia::Tokyo;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: &'static str,
    /// CSRF-cookie-issuing endpoint
    pub csrf_path: &'static str,
    /// Fixed timezone due dates are normalised to before sending
    pub due_date_tz: Tz,
}

impl AppConfig {
    /// Read `TODO_API_BASE_URL`, `TODO_CSRF_PATH` and `TODO_DUE_DATE_TZ` as set at compile time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("TODO_API_BASE_URL"),
            option_env!("TODO_CSRF_PATH"),
            option_env!("TODO_DUE_DATE_TZ"),
        )
    }

    fn from_values(
        api_base_url: Option<&'static str>,
        csrf_path: Option<&'static str>,
        due_date_tz: Option<&str>,
    ) -> Self {
        let due_date_tz = match due_date_tz {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|err| {
                tracing::warn!(tz = name, error = %err, "unknown due date timezone, using default");
                DEFAULT_DUE_DATE_TZ
            }),
            None => DEFAULT_DUE_DATE_TZ,
        };

        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/'))
                .filter(|url| !url.is_empty())
                .unwrap_or(DEFAULT_API_BASE_URL),
            csrf_path: csrf_path.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_CSRF_PATH),
            due_date_tz,
        }
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
