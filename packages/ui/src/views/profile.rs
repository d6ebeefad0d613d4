use dioxus::prelude::*;
use store::{Profile, ProfileDraft, RepoError, ThemePreference, UserType};

use crate::icons::{FaSpinner, FaUser};
use crate::nav::{use_navigate, Destination};
use crate::session::{current_repository, use_backend, use_profile, use_session};
use crate::theme::{apply_theme, FONT_SIZES, THEME_COLORS};
use crate::toast::{toast_error, toast_success, use_toasts};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn draft_from(profile: Option<&Profile>) -> ProfileDraft {
    let Some(p) = profile else {
        return ProfileDraft::default();
    };
    ProfileDraft {
        full_name: p.full_name.clone().unwrap_or_default(),
        nickname: p.nickname.clone().unwrap_or_default(),
        is_parent: p.user_type != Some(UserType::Child),
        theme: p.theme_preference.clone(),
    }
}

/// Profile form: names, parent/child switch and theme.
#[component]
pub fn ProfileView() -> Element {
    let backend = use_backend();
    let session = use_session();
    let mut profile = use_profile();
    let navigate = use_navigate();
    let mut toasts = use_toasts();
    let mut draft = use_signal(|| draft_from(profile.peek().as_ref()));
    let mut saving = use_signal(|| false);

    // The profile may arrive after mount
    use_effect(move || {
        if let Some(p) = profile() {
            draft.set(draft_from(Some(&p)));
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(repo) = current_repository(&backend, session) else {
            return;
        };
        let current = draft();
        spawn(async move {
            saving.set(true);
            let result = repo.save_profile(&current).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    if let Some(theme) = &saved.theme_preference {
                        apply_theme(theme);
                    }
                    profile.set(Some(saved));
                    toast_success(&mut toasts, "Profile saved!", "Welcome to K.I.D.D.O! 🎉");
                    navigate.call(Destination::Dashboard);
                }
                Err(RepoError::Invalid(e)) => toast_error(&mut toasts, "Missing information", &e.to_string()),
                Err(e) => {
                    tracing::error!("save profile: {e}");
                    toast_error(&mut toasts, "Error", "Something went wrong. Please try again.");
                }
            }
        });
    };

    let d = draft();
    let theme = d.theme.clone().unwrap_or_default();
    let avatar = profile().and_then(|p| p.avatar_url);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "page page--narrow",
            div {
                class: "card",
                h1 { class: "page-title page-title--center", "Your Profile 🌟" }
                form {
                    class: "form",
                    onsubmit: handle_submit,
                    div {
                        class: "avatar avatar--large",
                        if let Some(url) = avatar {
                            img { src: "{url}", alt: "Avatar" }
                        } else {
                            Icon { icon: FaUser, width: 40, height: 40 }
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "full-name", "Full Name" }
                        input {
                            id: "full-name",
                            class: "input",
                            placeholder: "Enter your full name",
                            value: d.full_name.clone(),
                            oninput: move |evt: FormEvent| draft.write().full_name = evt.value(),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "nickname", "Nickname" }
                        input {
                            id: "nickname",
                            class: "input",
                            placeholder: "What should we call you?",
                            value: d.nickname.clone(),
                            oninput: move |evt: FormEvent| draft.write().nickname = evt.value(),
                        }
                    }
                    div {
                        class: "field field--inline",
                        label { r#for: "is-parent", "I am a parent" }
                        input {
                            id: "is-parent",
                            r#type: "checkbox",
                            class: "switch",
                            checked: d.is_parent,
                            onchange: move |evt: FormEvent| draft.write().is_parent = evt.checked(),
                        }
                    }
                    div {
                        class: "row",
                        div {
                            class: "field",
                            label { r#for: "theme-color", "Theme colour" }
                            select {
                                id: "theme-color",
                                class: "input",
                                value: theme.color.clone(),
                                onchange: move |evt: FormEvent| {
                                    let mut d = draft.write();
                                    let font_size = d.theme.as_ref().map(|t| t.font_size.clone()).unwrap_or_else(|| ThemePreference::default().font_size);
                                    d.theme = Some(ThemePreference { color: evt.value(), font_size });
                                },
                                for (name, _, _) in THEME_COLORS {
                                    option { value: name, "{name}" }
                                }
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "font-size", "Text size" }
                            select {
                                id: "font-size",
                                class: "input",
                                value: theme.font_size.clone(),
                                onchange: move |evt: FormEvent| {
                                    let mut d = draft.write();
                                    let color = d.theme.as_ref().map(|t| t.color.clone()).unwrap_or_else(|| ThemePreference::default().color);
                                    d.theme = Some(ThemePreference { color, font_size: evt.value() });
                                },
                                for (name, _) in FONT_SIZES {
                                    option { value: name, "{name}" }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: saving(),
                        if saving() {
                            span { class: "spin", Icon { icon: FaSpinner, width: 14, height: 14 } }
                        } else {
                            "Save Profile"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_draft_from_profile() {
        let profile = Profile {
            id: Uuid::new_v4(),
            full_name: Some("Sam Lee".into()),
            nickname: None,
            avatar_url: None,
            created_at: Utc::now(),
            user_type: Some(UserType::Child),
            theme_preference: None,
        };
        let draft = draft_from(Some(&profile));
        assert_eq!(draft.full_name, "Sam Lee");
        assert_eq!(draft.nickname, "");
        assert!(!draft.is_parent);
        assert_eq!(draft_from(None), ProfileDraft::default());
    }
}
