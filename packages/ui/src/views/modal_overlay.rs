use dioxus::prelude::*;

/// Dimmed overlay with a centred sheet. Clicking outside the sheet calls `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
