use dioxus::prelude::*;
use store::CifraDraft;

use crate::{alert, use_auth, CifraForm};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Submission form. Requires a session; the author is the session's display name.
#[component]
pub fn SubmitView(on_created: EventHandler<String>, on_login: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |draft: CifraDraft| {
        if auth().user.is_none() {
            error.set(Some(store::CifraError::Unauthenticated.to_string()));
            return;
        }
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api::create_cifra(draft).await {
                Ok(cifra) => {
                    loading.set(false);
                    alert("Cifra enviada com sucesso!");
                    on_created.call(cifra.id);
                }
                Err(e) => {
                    tracing::error!("Submit failed: {e}");
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "view view-narrow",
            h1 { class: "view-title", "Enviar cifra" }

            if auth().loading {
                p { class: "view-muted", "Carregando..." }
            } else if auth().user.is_none() {
                div {
                    class: "form-error",
                    "Você precisa estar logado para enviar uma cifra. "
                    button {
                        class: "link-button",
                        onclick: move |_| on_login.call(()),
                        "Entrar"
                    }
                }
            } else {
                CifraForm {
                    busy: loading(),
                    error: error(),
                    on_submit: handle_submit,
                }
            }
        }
    }
}
