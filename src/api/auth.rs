//! Session Endpoints
//!
//! Current user, login, logout and registration.

use super::client::{decode, ApiClient};
use super::transport::{ApiRequest, Transport};
use crate::error::ApiError;
use crate::models::{Credentials, Registration, User};

/// `GET /user`. An empty or `null` body counts as no session.
pub async fn current_user<T: Transport>(api: &ApiClient<T>) -> Result<Option<User>, ApiError> {
    let body = api.execute(ApiRequest::get("/user")).await?;
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode(&body)
}

pub async fn login<T: Transport>(api: &ApiClient<T>, credentials: &Credentials) -> Result<(), ApiError> {
    api.mutate(ApiRequest::post("/login").json(credentials)?).await?;
    Ok(())
}

pub async fn logout<T: Transport>(api: &ApiClient<T>) -> Result<(), ApiError> {
    api.mutate(ApiRequest::post("/logout")).await?;
    Ok(())
}

/// `POST /register`. Does not establish a session by itself.
pub async fn register<T: Transport>(api: &ApiClient<T>, registration: &Registration) -> Result<(), ApiError> {
    api.mutate(ApiRequest::post("/register").json(registration)?).await?;
    Ok(())
}
