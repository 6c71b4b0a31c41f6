use dioxus::prelude::*;
use ui::views::SubmitView;

use crate::Route;

#[component]
pub fn Enviar() -> Element {
    let nav = use_navigator();

    rsx! {
        SubmitView {
            on_created: move |_id: String| {
                nav.push(Route::Home {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
