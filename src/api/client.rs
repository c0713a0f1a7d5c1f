//! API Client
//!
//! Status handling and the CSRF bootstrap shared by every endpoint wrapper.

use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::error::ApiError;
use crate::models::ValidationBody;

#[derive(Debug, Clone, Copy)]
pub struct ApiClient<T> {
    transport: T,
    csrf_path: &'static str,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, csrf_path: &'static str) -> Self {
        Self { transport, csrf_path }
    }

    /// Send a request and map its status to `Ok(body)` or an [`ApiError`].
    pub async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "api request");
        let response = self.transport.send(&request).await.map_err(|err| {
            tracing::warn!(method = request.method.as_str(), path = %request.path, error = %err, "api request failed");
            err
        })?;

        classify(response).map_err(|err| {
            tracing::warn!(method = request.method.as_str(), path = %request.path, error = %err, "api request rejected");
            err
        })
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let body = self.execute(ApiRequest::get(path)).await?;
        decode(&body)
    }

    /// Ask the backend for a fresh `XSRF-TOKEN` cookie.
    pub async fn refresh_csrf(&self) -> Result<(), ApiError> {
        self.execute(ApiRequest::get(self.csrf_path)).await.map(|_| ())
    }

    /// Bootstrap the CSRF cookie, then send the state-changing request.
    ///
    /// Nothing is sent if the bootstrap fails.
    pub async fn mutate(&self, request: ApiRequest) -> Result<String, ApiError> {
        self.refresh_csrf().await?;
        self.execute(request).await
    }
}

pub(crate) fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn classify(response: ApiResponse) -> Result<String, ApiError> {
    match response.status {
        200..=299 => Ok(response.body),
        401 => Err(ApiError::Unauthorized),
        422 => match serde_json::from_str::<ValidationBody>(&response.body) {
            Ok(body) => Err(ApiError::Validation(body.errors)),
            Err(_) => Err(status_error(response)),
        },
        _ => Err(status_error(response)),
    }
}

fn status_error(response: ApiResponse) -> ApiError {
    #[derive(serde::Deserialize)]
    struct MessageBody {
        message: String,
    }

    let message = serde_json::from_str::<MessageBody>(&response.body)
        .map(|body| body.message)
        .unwrap_or_else(|_| response.body.chars().take(200).collect());
    ApiError::Status { status: response.status, message }
}
