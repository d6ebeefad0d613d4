//! Session context and hooks.
//!
//! [`SessionProvider`] owns three pieces of shared state:
//!
//! - [`BackendContext`]: the parsed config, the backend settings and one shared HTTP client.
//! - `Signal<SessionState>`: the signed-in session, restored from browser storage on
//!   mount and validated against the auth service.
//! - `Signal<Option<Profile>>`: the user's profile, loaded once signed in; its theme
//!   preference is applied to the document.

use api::{ApiError, BackendConfig, RemoteRepository, Session};
use dioxus::prelude::*;
use store::{AppConfig, Profile};

use crate::nav::{use_navigate, Destination};
use crate::theme::apply_theme;

#[derive(Clone)]
pub struct BackendContext {
    pub app: AppConfig,
    pub client: reqwest::Client,
    pub backend: Result<BackendConfig, String>,
}

impl BackendContext {
    pub fn new(app: AppConfig) -> Self {
        #[cfg(target_arch = "wasm32")]
        let backend = BackendConfig::from_app_config(&app);
        #[cfg(not(target_arch = "wasm32"))]
        let backend = BackendConfig::from_env_or(&app);

        if let Err(e) = &backend {
            tracing::error!("{e}");
        }
        Self {
            app,
            client: reqwest::Client::new(),
            backend: backend.map_err(|e| e.to_string()),
        }
    }

    pub fn config(&self) -> Result<&BackendConfig, ApiError> {
        self.backend
            .as_ref()
            .map_err(|e| ApiError::Config(e.clone()))
    }

    /// Repository for `session`, or `None` if the backend is not configured.
    pub fn repository(&self, session: &Session) -> Option<RemoteRepository> {
        let config = self.backend.as_ref().ok()?.clone();
        Some(api::repository(self.client.clone(), config, session.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    /// The startup restore has not settled yet, and nothing else has either.
    pub fn is_restoring(&self) -> bool {
        self.loading && self.session.is_none()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

pub fn use_backend() -> BackendContext {
    use_context::<BackendContext>()
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_profile() -> Signal<Option<Profile>> {
    use_context::<Signal<Option<Profile>>>()
}

/// Repository for the signed-in user, read at call time.
pub fn current_repository(
    backend: &BackendContext,
    session: Signal<SessionState>,
) -> Option<RemoteRepository> {
    let state = session.peek();
    backend.repository(state.session.as_ref()?)
}

#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    let backend = use_context_provider(|| BackendContext::new(config.clone()));
    let mut state = use_context_provider(|| Signal::new(SessionState::default()));
    let mut profile = use_context_provider(|| Signal::new(Option::<Profile>::None));

    // Restore a stored session on mount
    let restore_backend = backend.clone();
    let _ = use_resource(move || {
        let backend = restore_backend.clone();
        async move {
            let restored = match (load_session(), backend.config()) {
                (Some(stored), Ok(config)) => {
                    let validation =
                        api::auth::resume_session(&backend.client, config, stored.access_token.clone()).await;
                    Restored::from_validation(stored, validation)
                }
                _ => Restored::Nothing,
            };
            // A sign-in redirect or a sign-out may have settled the session meanwhile
            if !state.peek().is_restoring() {
                tracing::debug!("session settled during restore; dropping stored session result");
                return;
            }
            let session = match restored {
                Restored::Valid(session) => Some(session),
                Restored::Expired => {
                    clear_session();
                    None
                }
                Restored::Nothing => None,
            };
            state.set(SessionState {
                session,
                loading: false,
            });
        }
    });

    // Load the profile whenever the session changes
    let profile_backend = backend.clone();
    let _ = use_resource(move || {
        let backend = profile_backend.clone();
        let session = state().session;
        async move {
            let Some(repo) = session.and_then(|s| backend.repository(&s)) else {
                profile.set(None);
                return;
            };
            match repo.profile().await {
                Ok(p) => {
                    if let Some(theme) = &p.theme_preference {
                        apply_theme(theme);
                    }
                    profile.set(Some(p));
                }
                Err(e) => tracing::warn!("profile: {e}"),
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Result of validating the stored session at startup.
#[derive(Debug, PartialEq)]
enum Restored {
    Valid(Session),
    Expired,
    Nothing,
}

impl Restored {
    fn from_validation(stored: Session, validation: Result<Session, ApiError>) -> Self {
        match validation {
            Ok(session) => Restored::Valid(session),
            Err(ApiError::Unauthorized) => {
                tracing::info!("stored session expired");
                Restored::Expired
            }
            Err(e) => {
                // Keep the stored session; the backend may just be unreachable.
                tracing::warn!("could not validate session: {e}");
                Restored::Valid(stored)
            }
        }
    }
}

/// Store a freshly established session and make it current.
pub fn establish_session(state: &mut Signal<SessionState>, session: Session) {
    store_session(&session);
    state.set(SessionState {
        session: Some(session),
        loading: false,
    });
}

/// Revoke the session remotely (best effort) and forget it locally.
pub async fn sign_out(backend: &BackendContext, mut state: Signal<SessionState>) {
    let session = state.peek().session.clone();
    if let (Some(session), Ok(config)) = (session, backend.config()) {
        if let Err(e) = api::auth::sign_out(&backend.client, config, &session).await {
            tracing::warn!("sign out: {e}");
        }
    }
    clear_session();
    state.set(SessionState {
        session: None,
        loading: false,
    });
}

/// Renders `children` only when signed in; otherwise sends the user to `/auth`.
#[component]
pub fn SignedIn(children: Element) -> Element {
    let state = use_session();
    let navigate = use_navigate();

    use_effect(move || {
        let s = state();
        if !s.loading && s.session.is_none() {
            navigate.call(Destination::Auth);
        }
    });

    let s = state();
    if s.loading {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }
    if s.session.is_none() {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn load_session() -> Option<Session> {
    let raw = local_storage()?.get_item(api::session::STORAGE_KEY).ok()??;
    match Session::from_json(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("discarding stored session: {e}");
            clear_session();
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn store_session(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    match session.to_json() {
        Ok(json) => {
            if let Err(e) = storage.set_item(api::session::STORAGE_KEY, &json) {
                tracing::warn!("could not store session: {e:?}");
            }
        }
        Err(e) => tracing::warn!("could not store session: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn clear_session() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(api::session::STORAGE_KEY) {
            tracing::warn!("could not clear stored session: {e:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_session() -> Option<Session> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn store_session(_session: &Session) {}

#[cfg(not(target_arch = "wasm32"))]
fn clear_session() {}

/// The URL fragment the auth service redirected back with, if any.
pub fn take_redirect_fragment() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let hash = window.location().hash().ok()?;
        if hash.is_empty() {
            return None;
        }
        // Drop the tokens from the address bar
        if let Ok(history) = window.history() {
            let path = window.location().pathname().unwrap_or_default();
            if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)) {
                tracing::warn!("could not clear auth fragment: {e:?}");
            }
        }
        Some(hash)
    }
    #[cfg(not(target_arch = "wasm32"))]
    None
}

/// Where the hosted sign-in should send the user back to.
pub fn auth_redirect_url() -> String {
    #[cfg(target_arch = "wasm32")]
    if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
        return format!("{origin}/auth");
    }
    "http://localhost:8080/auth".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn session(token: &str) -> Session {
        Session {
            access_token: token.into(),
            user_id: Uuid::new_v4(),
            email: None,
        }
    }

    #[test]
    fn test_restore_outcome_from_validation() {
        let stored = session("old");
        let fresh = session("old");
        assert_eq!(
            Restored::from_validation(stored.clone(), Ok(fresh.clone())),
            Restored::Valid(fresh)
        );
        assert_eq!(
            Restored::from_validation(stored.clone(), Err(ApiError::Unauthorized)),
            Restored::Expired
        );
        let unreachable = ApiError::Status {
            status: 503,
            message: "unavailable".into(),
        };
        assert_eq!(
            Restored::from_validation(stored.clone(), Err(unreachable)),
            Restored::Valid(stored)
        );
    }

    #[test]
    fn test_restore_yields_to_settled_session() {
        assert!(SessionState::default().is_restoring());

        // Signed in through the redirect while the restore was in flight
        let signed_in = SessionState {
            session: Some(session("new")),
            loading: false,
        };
        assert!(!signed_in.is_restoring());

        let signed_out = SessionState {
            session: None,
            loading: false,
        };
        assert!(!signed_out.is_restoring());
    }
}
