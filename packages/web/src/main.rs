use dioxus::prelude::*;

use store::AppConfig;
use ui::{Destination, Navigate, SessionProvider, ToastProvider};
use uuid::Uuid;
use views::{Auth, Dashboard, EditNote, Home, NewNote, NewTask, Notes, Profile, Starred, Tasks};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/auth")]
        Auth {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/notes")]
        Notes {},
        #[route("/notes/new")]
        NewNote {},
        #[route("/notes/edit/:id")]
        EditNote { id: Uuid },
        #[route("/tasks")]
        Tasks {},
        #[route("/tasks/new")]
        NewTask {},
        #[route("/starred")]
        Starred {},
        #[route("/profile")]
        Profile {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::Auth => Route::Auth {},
            Destination::Dashboard => Route::Dashboard {},
            Destination::Notes => Route::Notes {},
            Destination::NewNote => Route::NewNote {},
            Destination::EditNote(id) => Route::EditNote { id },
            Destination::Tasks => Route::Tasks {},
            Destination::NewTask => Route::NewTask {},
            Destination::Starred => Route::Starred {},
            Destination::Profile => Route::Profile {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled configuration; edit before building.
const CONFIG_TOML: &str = include_str!("../kiddonotes.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    match AppConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid {}: {e}", AppConfig::filename());
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::KIDDONOTES_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            SessionProvider {
                config,
                Router::<Route> {}
            }
        }
    }
}

/// Wraps every page; lets shared views navigate without knowing [`Route`].
#[component]
fn Shell() -> Element {
    let nav = use_navigator();
    use_context_provider(|| {
        Navigate(EventHandler::new(move |destination: Destination| {
            nav.push(Route::from(destination));
        }))
    });

    rsx! {
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations_map_to_paths() {
        let id = Uuid::nil();
        let cases = [
            (Destination::Home, "/".to_string()),
            (Destination::Auth, "/auth".to_string()),
            (Destination::NewNote, "/notes/new".to_string()),
            (Destination::EditNote(id), format!("/notes/edit/{id}")),
            (Destination::NewTask, "/tasks/new".to_string()),
            (Destination::Starred, "/starred".to_string()),
        ];
        for (destination, path) in cases {
            assert_eq!(Route::from(destination).to_string(), path);
        }
    }

    #[test]
    fn test_edit_route_parses_id() {
        let id = Uuid::new_v4();
        let route: Route = format!("/notes/edit/{id}").parse().unwrap();
        assert_eq!(route, Route::EditNote { id });
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = AppConfig::from_toml(CONFIG_TOML).unwrap();
        assert!(config.calendar.upcoming_limit > 0);
    }
}
