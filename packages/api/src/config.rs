//! Backend connection settings.

use store::AppConfig;

use crate::error::ApiError;

/// Base URL and public anon key of the hosted backend.
#[derive(Clone, PartialEq)]
pub struct BackendConfig {
    url: String,
    anon_key: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ApiError> {
        let url = url.trim().trim_end_matches('/');
        let anon_key = anon_key.trim();
        if url.is_empty() {
            return Err(ApiError::Config("backend url is empty".into()));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ApiError::Config(format!("backend url must be http(s): {url}")));
        }
        if anon_key.is_empty() {
            return Err(ApiError::Config("anon key is empty".into()));
        }
        Ok(Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Settings from the `[backend]` section of `kiddonotes.toml`.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(&config.backend.url, &config.backend.anon_key)
    }

    /// Settings from `KIDDONOTES_URL` / `KIDDONOTES_ANON_KEY`, reading `.env` first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let url = std::env::var("KIDDONOTES_URL")
            .map_err(|_| ApiError::Config("KIDDONOTES_URL not set".into()))?;
        let anon_key = std::env::var("KIDDONOTES_ANON_KEY")
            .map_err(|_| ApiError::Config("KIDDONOTES_ANON_KEY not set".into()))?;
        Self::new(&url, &anon_key)
    }

    /// Environment first, then the bundled file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env_or(config: &AppConfig) -> Result<Self, ApiError> {
        Self::from_env().or_else(|_| Self::from_app_config(config))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// `{url}/rest/v1/{table}`
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// `{url}/auth/v1/{path}`
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }
}
