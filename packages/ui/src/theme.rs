//! Dark mode. The choice is kept in `localStorage` and applied as a `dark` class on
//! the document root, which the stylesheets key off.

use dioxus::prelude::*;

use crate::icons::{FaMoon, FaSun};
use crate::Icon;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "picasclub-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unknown is light.
    pub fn from_stored(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub type ThemeSignal = Signal<Theme>;

/// Read the stored theme into `theme` and apply it to the document.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
        if let Some(value) = stored {
            theme.set(Theme::from_stored(&value));
        }
    }
    apply_theme(*theme.peek());
}

/// Toggle the `dark` class on `<html>` and persist the choice.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let _ = root.class_list().toggle_with_force("dark", theme == Theme::Dark);
        }
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
                web_sys::console::warn_1(&e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeSignal>();

    let onclick = move |_| {
        let next = theme().toggled();
        apply_theme(next);
        theme.set(next);
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: if theme() == Theme::Dark { "Modo claro" } else { "Modo escuro" },
            onclick: onclick,
            if theme() == Theme::Dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_values() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored(""), Theme::Light);
        assert_eq!(Theme::from_stored("purple"), Theme::Light);
        assert_eq!(Theme::from_stored(Theme::Dark.as_str()), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
