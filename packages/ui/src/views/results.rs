use dioxus::prelude::*;

use crate::CifraList;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Cifras whose title or author contains `query`.
#[component]
pub fn ResultsView(query: String, on_open: EventHandler<String>) -> Element {
    // Track the query in a signal so the search re-runs when the route param changes
    let mut query_signal = use_signal(|| query.clone());
    if *query_signal.peek() != query {
        query_signal.set(query.clone());
    }

    let results = use_resource(move || {
        let q = query_signal();
        async move { api::search_cifras(q).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "view",
            h1 { class: "view-title", "Resultados para \"{query_signal}\"" }
            match &*results.read() {
                None => rsx! { p { class: "view-muted", "Buscando..." } },
                Some(Ok(list)) => rsx! {
                    CifraList {
                        cifras: list.clone(),
                        empty_message: "Nenhum resultado encontrado.",
                        on_open: on_open,
                    }
                },
                Some(Err(e)) => {
                    tracing::error!("Search failed: {e}");
                    rsx! { p { class: "form-error", "Erro ao buscar cifras." } }
                }
            }
        }
    }
}
