use api::UserInfo;
use dioxus::prelude::*;

use crate::icons::FaGuitar;
use crate::{Icon, LogoutButton, SearchBox, ThemeToggle};

/// Site header: brand, search, submit link, session actions and the theme toggle.
/// Navigation is left to the caller through the `on_*` handlers.
#[component]
pub fn Navbar(
    user: Option<UserInfo>,
    on_home: EventHandler<()>,
    on_submit: EventHandler<()>,
    on_login: EventHandler<()>,
    on_register: EventHandler<()>,
    on_search: EventHandler<String>,
) -> Element {
    rsx! {
        header {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_home.call(()),
                Icon { icon: FaGuitar, width: 18, height: 18 }
                span { "PicasClub" }
            }

            SearchBox { on_search: on_search }

            nav {
                class: "navbar-links",
                button {
                    class: "navbar-link",
                    onclick: move |_| on_submit.call(()),
                    "Enviar cifra"
                }
                if let Some(ref u) = user {
                    span { class: "navbar-user", "{u.display_name()}" }
                    LogoutButton {
                        class: "navbar-link",
                        on_logged_out: move |_| on_home.call(()),
                    }
                } else {
                    button {
                        class: "navbar-link",
                        onclick: move |_| on_login.call(()),
                        "Entrar"
                    }
                    button {
                        class: "navbar-link navbar-link-primary",
                        onclick: move |_| on_register.call(()),
                        "Cadastrar"
                    }
                }
                ThemeToggle {}
            }
        }
    }
}
