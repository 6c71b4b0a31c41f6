use dioxus::prelude::*;
use ui::views::ResultsView;

use crate::Route;

#[component]
pub fn Resultados(search: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ResultsView {
            query: search,
            on_open: move |id: String| {
                nav.push(Route::CifraDetail { id });
            },
        }
    }
}
