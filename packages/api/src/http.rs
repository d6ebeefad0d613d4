//! Request plumbing shared by the REST and auth clients.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::error::ApiError;

/// Attach the project key and, when signed in, the user's bearer token.
pub(crate) fn authorize(
    request: RequestBuilder,
    config: &BackendConfig,
    access_token: Option<&str>,
) -> RequestBuilder {
    let request = request.header("apikey", config.anon_key());
    match access_token {
        Some(token) => request.bearer_auth(token),
        None => request.bearer_auth(config.anon_key()),
    }
}

/// Send and return the body of a 2xx response.
pub(crate) async fn send(request: RequestBuilder) -> Result<String, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), "request failed: {err}");
        return Err(err);
    }
    Ok(body)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
