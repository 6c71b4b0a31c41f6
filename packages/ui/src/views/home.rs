use dioxus::prelude::*;

use crate::CifraList;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Latest cifras, newest first.
#[component]
pub fn HomeView(on_open: EventHandler<String>) -> Element {
    let cifras = use_resource(|| async move { api::list_cifras().await });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "view",
            h1 { class: "view-title", "Cifras recentes" }
            match &*cifras.read() {
                None => rsx! { p { class: "view-muted", "Carregando..." } },
                Some(Ok(list)) => rsx! {
                    CifraList {
                        cifras: list.clone(),
                        empty_message: "Nenhuma cifra enviada ainda.",
                        on_open: on_open,
                    }
                },
                Some(Err(e)) => {
                    tracing::error!("Failed to load cifras: {e}");
                    rsx! { p { class: "form-error", "Erro ao carregar as cifras." } }
                }
            }
        }
    }
}
