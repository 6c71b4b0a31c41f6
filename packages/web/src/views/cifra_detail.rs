use dioxus::prelude::*;
use ui::views::CifraDetailView;

use crate::Route;

#[component]
pub fn CifraDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        CifraDetailView {
            id: id,
            on_deleted: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
