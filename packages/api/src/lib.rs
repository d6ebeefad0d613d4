//! # API crate: remote backend client for KiddoNotes
//!
//! All persistence and authentication live in a hosted backend (PostgREST tables
//! plus a hosted auth service). This crate is the only place that speaks HTTP to
//! it. The UI builds a [`RestBackend`] for the signed-in [`Session`] and wraps it
//! in a [`store::Repository`], so pages never see requests or status codes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Hosted sign-in link, current user lookup, sign out |
//! | [`config`] | [`BackendConfig`] from `kiddonotes.toml` or the environment |
//! | [`error`] | [`ApiError`] and its mapping into [`store::BackendError`] |
//! | [`query`] | PostgREST filter strings |
//! | [`rest`] | [`RestBackend`], the [`store::Backend`] implementation |
//! | [`session`] | [`Session`], redirect fragment parsing and its storage form |
//!
//! All functions take a shared `reqwest::Client`; on wasm it is backed by the
//! browser's `fetch`.

pub mod auth;
pub mod config;
pub mod error;
mod http;
pub mod query;
pub mod rest;
pub mod session;

pub use auth::{AuthUser, Provider};
pub use config::BackendConfig;
pub use error::ApiError;
pub use rest::RestBackend;
pub use session::Session;

pub use store::{AppConfig, Repository};

/// Repository type the UI works with.
pub type RemoteRepository = Repository<RestBackend>;

/// Repository for `session` backed by the hosted REST API.
pub fn repository(client: reqwest::Client, config: BackendConfig, session: Session) -> RemoteRepository {
    let user_id = session.user_id;
    Repository::new(RestBackend::new(client, config, session), user_id)
}
