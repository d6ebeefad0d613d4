//! # Hosted auth endpoints
//!
//! Sign-in itself happens on the hosted auth pages; this module only builds the
//! link that sends the user there and talks to the two endpoints the app needs
//! afterwards.
//!
//! | Function | Endpoint | Purpose |
//! |----------|----------|---------|
//! | [`sign_in_url`] | `GET /auth/v1/authorize` | Link to the provider's hosted sign-in, redirecting back to `/auth`. |
//! | [`current_user`] | `GET /auth/v1/user` | Resolves an access token to the user it belongs to; `Unauthorized` when it expired. |
//! | [`resume_session`] | `GET /auth/v1/user` | Builds a [`Session`] from a token via [`current_user`]. |
//! | [`sign_out`] | `POST /auth/v1/logout` | Revokes the session's token. |

use reqwest::{Client, Url};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::http::{authorize, decode, send};
use crate::session::Session;

/// OAuth providers enabled on the hosted auth service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Google,
    GitHub,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Google, Provider::GitHub];

    pub fn id(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::GitHub => "github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::GitHub => "GitHub",
        }
    }
}

/// The user an access token belongs to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Hosted sign-in link for `provider` that returns to `redirect_to`.
pub fn sign_in_url(
    config: &BackendConfig,
    provider: Provider,
    redirect_to: &str,
) -> Result<Url, ApiError> {
    Url::parse_with_params(
        &config.auth_url("authorize"),
        &[("provider", provider.id()), ("redirect_to", redirect_to)],
    )
    .map_err(|e| ApiError::Config(e.to_string()))
}

pub async fn current_user(
    client: &Client,
    config: &BackendConfig,
    access_token: &str,
) -> Result<AuthUser, ApiError> {
    let request = authorize(client.get(config.auth_url("user")), config, Some(access_token));
    let body = send(request).await?;
    decode(&body)
}

/// Validate `access_token` and build the session for it.
pub async fn resume_session(
    client: &Client,
    config: &BackendConfig,
    access_token: String,
) -> Result<Session, ApiError> {
    let user = current_user(client, config, &access_token).await?;
    tracing::info!(user_id = %user.id, "session resumed");
    Ok(Session {
        access_token,
        user_id: user.id,
        email: user.email,
    })
}

pub async fn sign_out(
    client: &Client,
    config: &BackendConfig,
    session: &Session,
) -> Result<(), ApiError> {
    let request = authorize(
        client.post(config.auth_url("logout")),
        config,
        Some(&session.access_token),
    );
    match send(request).await {
        // An already expired token is as good as signed out.
        Ok(_) | Err(ApiError::Unauthorized) => {
            tracing::info!(user_id = %session.user_id, "signed out");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_url_encodes_redirect() {
        let config = BackendConfig::new("https://kiddo.example.co", "anon").unwrap();
        let url = sign_in_url(&config, Provider::GitHub, "http://localhost:8080/auth").unwrap();
        assert_eq!(
            url.as_str(),
            "https://kiddo.example.co/auth/v1/authorize?provider=github\
             &redirect_to=http%3A%2F%2Flocalhost%3A8080%2Fauth"
        );
    }

    #[test]
    fn test_auth_user_decodes_extra_fields() {
        let body = r#"{
            "id": "6f1d2c1e-5a7b-4a43-9d1e-2f0c3b4a5d6e",
            "aud": "authenticated",
            "email": "kid@example.com",
            "app_metadata": {"provider": "google"}
        }"#;
        let user: AuthUser = decode(body).unwrap();
        assert_eq!(user.email.as_deref(), Some("kid@example.com"));

        assert!(matches!(decode::<AuthUser>("{}"), Err(ApiError::Decode(_))));
    }
}
