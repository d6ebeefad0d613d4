//! The signed-in session.
//!
//! The hosted sign-in page redirects back to `/auth` with the tokens in the URL
//! fragment (`#access_token=...&token_type=bearer&...`). The client keeps only
//! the access token and the user id it resolves to, and persists the pair in
//! browser storage under [`STORAGE_KEY`].

use reqwest::Url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Browser storage key for the serialised session.
pub const STORAGE_KEY: &str = "kiddonotes.session";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Pull the access token out of a redirect fragment, with or without the
    /// leading `#`.
    ///
    /// Returns `Ok(None)` when the fragment carries no token, and an error when
    /// the auth service redirected back with `error_description`.
    pub fn token_from_redirect_fragment(fragment: &str) -> Result<Option<String>, ApiError> {
        let fragment = fragment.trim_start_matches('#');
        if fragment.is_empty() {
            return Ok(None);
        }
        let url = Url::parse(&format!("http://localhost/?{fragment}"))
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let mut token = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "access_token" if !value.is_empty() => token = Some(value.into_owned()),
                "error_description" => {
                    return Err(ApiError::Status {
                        status: 400,
                        message: value.into_owned(),
                    })
                }
                _ => {}
            }
        }
        Ok(token)
    }

    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
