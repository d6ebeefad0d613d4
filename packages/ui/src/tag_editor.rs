use dioxus::prelude::*;

use crate::icons::FaTag;
use crate::Icon;

/// Tag chips with an input; Enter adds, × removes.
#[component]
pub fn TagEditor(tags: Vec<String>, on_add: EventHandler<String>, on_remove: EventHandler<String>) -> Element {
    let mut input = use_signal(String::new);

    rsx! {
        div {
            class: "tag-editor",
            div {
                class: "tag-list",
                for tag in tags {
                    span {
                        key: "{tag}",
                        class: "tag",
                        Icon { icon: FaTag, width: 10, height: 10 }
                        "{tag}"
                        button {
                            r#type: "button",
                            class: "tag-remove",
                            title: "Remove tag",
                            onclick: {
                                let tag = tag.clone();
                                move |_| on_remove.call(tag.clone())
                            },
                            "×"
                        }
                    }
                }
            }
            input {
                class: "input",
                placeholder: "Add a tag and press Enter",
                value: input(),
                oninput: move |evt: FormEvent| input.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        let tag = input();
                        if !tag.trim().is_empty() {
                            on_add.call(tag);
                            input.set(String::new());
                        }
                    }
                },
            }
        }
    }
}
