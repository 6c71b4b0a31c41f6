//! Registration page. New accounts are logged in and sent to the home page.

use dioxus::prelude::*;
use ui::views::RegisterView;

use crate::Route;

#[component]
pub fn Registro() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_registered: move |_| {
                nav.replace(Route::Home {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
