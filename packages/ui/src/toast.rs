use chrono::{DateTime, TimeDelta, Utc};
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
    pub shown_at: DateTime<Utc>,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.shown_at >= TimeDelta::milliseconds(TOAST_MILLIS)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, level: ToastLevel, title: &str, description: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            level,
            title: title.to_string(),
            description: description.to_string(),
            shown_at: Utc::now(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn has_expired(&self, now: DateTime<Utc>) -> bool {
        self.entries.iter().any(|t| t.is_expired(now))
    }

    /// Drop every toast that has been on screen for its full time.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|t| !t.is_expired(now));
    }
}

const TOAST_MILLIS: i64 = 4000;
#[cfg(target_arch = "wasm32")]
const EXPIRY_TICK_MILLIS: u32 = 250;

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn toast_success(toasts: &mut Signal<Toasts>, title: &str, description: &str) {
    show(toasts, ToastLevel::Success, title, description);
}

pub fn toast_error(toasts: &mut Signal<Toasts>, title: &str, description: &str) {
    tracing::warn!("{title}: {description}");
    show(toasts, ToastLevel::Error, title, description);
}

fn show(toasts: &mut Signal<Toasts>, level: ToastLevel, title: &str, description: &str) {
    toasts.write().push(level, title, description);
}

/// Renders the toast stack. Provides the `Signal<Toasts>` context for `children`.
///
/// Expiry runs here rather than in the component that raised the toast, which
/// is often unmounted by a navigation right after.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Toasts::default()));

    #[cfg(target_arch = "wasm32")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(EXPIRY_TICK_MILLIS).await;
            let now = Utc::now();
            if toasts.peek().has_expired(now) {
                toasts.write().expire(now);
            }
        }
    });
    let entries = toasts().entries.clone();

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for (id, toast) in entries.into_iter().map(|t| (t.id, t)) {
                div {
                    key: "{id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    },
                    onclick: move |_| toasts.write().dismiss(id),
                    div { class: "toast-title", "{toast.title}" }
                    div { class: "toast-description", "{toast.description}" }
                }
            }
        }
    }
}
