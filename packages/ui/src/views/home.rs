use dioxus::prelude::*;

use crate::nav::{use_navigate, Destination};
use crate::session::use_session;

const FEATURES: [(&str, &str); 3] = [
    ("Safe & Secure", "Private space for your child to write and express themselves."),
    ("Kid-Friendly", "Simple and intuitive interface designed specifically for children."),
    ("Always Available", "Access notes from anywhere, anytime, on any device."),
];

/// Landing page. Signed-in users go straight to their notes.
#[component]
pub fn HomeView() -> Element {
    let session = use_session();
    let navigate = use_navigate();

    use_effect(move || {
        if session().session.is_some() {
            navigate.call(Destination::Notes);
        }
    });

    rsx! {
        div {
            class: "landing",
            h1 { class: "landing-title", "KiddoNotes: Your Child's Digital Notebook" }
            p {
                class: "landing-lead",
                "A safe and fun space for children to express their thoughts, capture their ideas, and develop their writing skills."
            }
            button {
                class: "btn btn-primary btn-lg",
                onclick: move |_| navigate.call(Destination::Auth),
                "Get Started"
            }
            div {
                class: "card-grid card-grid--3 landing-features",
                for (title, text) in FEATURES {
                    div {
                        key: "{title}",
                        class: "card",
                        h3 { class: "card-title", "{title}" }
                        p { class: "muted", "{text}" }
                    }
                }
            }
        }
    }
}
