//! Applies a profile's theme preference to the document.
//!
//! The stylesheet reads `--accent`, `--accent-soft` and `--base-font-size` from
//! the root element; everything else follows from those.

use store::ThemePreference;

/// Accent colours a profile may pick, as `(name, accent, soft)`.
pub const THEME_COLORS: [(&str, &str, &str); 5] = [
    ("purple", "#9333ea", "#f3e8ff"),
    ("pink", "#db2777", "#fce7f3"),
    ("blue", "#2563eb", "#dbeafe"),
    ("green", "#16a34a", "#dcfce7"),
    ("orange", "#ea580c", "#ffedd5"),
];

pub const FONT_SIZES: [(&str, &str); 3] = [("small", "14px"), ("medium", "16px"), ("large", "18px")];

/// CSS custom properties for `theme`. Unknown names fall back to purple / medium.
pub fn theme_vars(theme: &ThemePreference) -> Vec<(&'static str, &'static str)> {
    let (_, accent, soft) = THEME_COLORS
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(&theme.color))
        .unwrap_or(&THEME_COLORS[0]);
    let (_, size) = FONT_SIZES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&theme.font_size))
        .unwrap_or(&FONT_SIZES[1]);
    vec![
        ("--accent", *accent),
        ("--accent-soft", *soft),
        ("--base-font-size", *size),
    ]
}

pub fn apply_theme(theme: &ThemePreference) {
    let vars = theme_vars(theme);
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(root) = root {
            let style = root.style();
            for (name, value) in &vars {
                if let Err(e) = style.set_property(name, value) {
                    tracing::warn!("set {name}: {e:?}");
                }
            }
        }
    }
    tracing::debug!(color = %theme.color, font_size = %theme.font_size, "theme applied");
    #[cfg(not(target_arch = "wasm32"))]
    let _ = vars;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_theme() {
        let vars = theme_vars(&ThemePreference {
            color: "Blue".into(),
            font_size: "large".into(),
        });
        assert_eq!(vars[0], ("--accent", "#2563eb"));
        assert_eq!(vars[2], ("--base-font-size", "18px"));
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let vars = theme_vars(&ThemePreference {
            color: "chartreuse".into(),
            font_size: "huge".into(),
        });
        assert_eq!(vars[0], ("--accent", "#9333ea"));
        assert_eq!(vars[2], ("--base-font-size", "16px"));
        assert_eq!(theme_vars(&ThemePreference::default()), vars);
    }
}
