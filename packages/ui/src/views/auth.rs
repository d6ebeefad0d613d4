//! Sign-in page.
//!
//! Sign-in itself happens on the hosted auth service. This page links to it
//! and, when the service redirects back with `#access_token=..`, validates the
//! token and stores the session.

use api::auth::{resume_session, sign_in_url, Provider};
use api::Session;
use dioxus::prelude::*;

use crate::nav::{use_navigate, Destination};
use crate::session::{auth_redirect_url, establish_session, take_redirect_fragment, use_backend, use_session};
use crate::toast::{toast_error, toast_success, use_toasts};

#[component]
pub fn AuthView() -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let navigate = use_navigate();
    let mut toasts = use_toasts();
    let mut completing = use_signal(|| false);

    // Finish a redirect from the hosted sign-in
    let redirect_backend = backend.clone();
    let _ = use_resource(move || {
        let backend = redirect_backend.clone();
        async move {
            let Some(fragment) = take_redirect_fragment() else {
                return;
            };
            let token = match Session::token_from_redirect_fragment(&fragment) {
                Ok(Some(token)) => token,
                Ok(None) => return,
                Err(e) => {
                    toast_error(&mut toasts, "Sign in failed", &e.to_string());
                    return;
                }
            };
            let config = match backend.config() {
                Ok(config) => config.clone(),
                Err(e) => {
                    toast_error(&mut toasts, "Sign in failed", &e.to_string());
                    return;
                }
            };
            completing.set(true);
            match resume_session(&backend.client, &config, token).await {
                Ok(new_session) => {
                    establish_session(&mut session, new_session);
                    toast_success(&mut toasts, "Welcome!", "You are signed in.");
                    navigate.call(Destination::Notes);
                }
                Err(e) => toast_error(&mut toasts, "Sign in failed", &e.to_string()),
            }
            completing.set(false);
        }
    });

    use_effect(move || {
        let state = session();
        if !state.loading && state.session.is_some() {
            navigate.call(Destination::Notes);
        }
    });

    let redirect_to = auth_redirect_url();
    let links: Vec<(Provider, Option<String>)> = Provider::ALL
        .into_iter()
        .map(|provider| {
            let href = backend
                .config()
                .and_then(|config| sign_in_url(config, provider, &redirect_to))
                .inspect_err(|e| tracing::warn!("sign-in link: {e}"))
                .ok()
                .map(String::from);
            (provider, href)
        })
        .collect();

    rsx! {
        div {
            class: "auth",
            h1 { class: "landing-title", "KiddoNotes" }
            if completing() {
                p { class: "muted", "Signing you in..." }
            } else {
                p { class: "muted", "Choose your preferred sign-in method:" }
                div {
                    class: "auth-buttons",
                    for (provider, href) in links {
                        if let Some(href) = href {
                            a {
                                key: "{provider.id()}",
                                class: "btn btn-lg auth-btn auth-btn--{provider.id()}",
                                href: "{href}",
                                "Continue with {provider.label()}"
                            }
                        } else {
                            button {
                                key: "{provider.id()}",
                                class: "btn btn-lg auth-btn",
                                disabled: true,
                                "Continue with {provider.label()}"
                            }
                        }
                    }
                }
                if backend.config().is_err() {
                    p { class: "error-text", "The backend is not configured. Set [backend] url and anon_key in kiddonotes.toml." }
                }
            }
        }
    }
}
