use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Header search field. Submits the trimmed query; empty queries are ignored.
#[component]
pub fn SearchBox(
    #[props(default)] initial: String,
    on_search: EventHandler<String>,
) -> Element {
    let mut query = use_signal(|| initial.clone());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let q = query().trim().to_string();
        if !q.is_empty() {
            on_search.call(q);
        }
    };

    rsx! {
        form {
            class: "search-box",
            role: "search",
            onsubmit: onsubmit,
            input {
                r#type: "search",
                placeholder: "Buscar cifras ou artistas",
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            button {
                r#type: "submit",
                title: "Buscar",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
        }
    }
}
