use dioxus::prelude::*;

use store::access::{ensure_author, for_route, is_author};
use store::{Cifra, CifraDraft};

use crate::icons::{FaPen, FaTrashCan};
use crate::{alert, confirm, use_auth, AutoScrollControls, ChordSheet, CifraForm, Icon, VideoEmbed};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Reading view for one cifra: video, auto-scroll, highlighted sheet, and edit and
/// delete for its author.
#[component]
pub fn CifraDetailView(
    id: String,
    /// Called after the cifra was deleted.
    on_deleted: EventHandler<()>,
) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let auth = use_auth();
    let mut cifra = use_signal(|| Option::<Cifra>::None);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            editing.set(false);
            cifra.set(None);
            load_error.set(None);
            match api::get_cifra(id).await {
                Ok(found) => {
                    load_error.set(None);
                    cifra.set(Some(found));
                }
                Err(e) => {
                    tracing::warn!("Failed to load cifra: {e}");
                    cifra.set(None);
                    load_error.set(Some(e.to_string()));
                }
            }
        }
    });

    let handle_save = move |draft: CifraDraft| {
        let Some(current) = for_route(cifra(), &id_signal.peek()) else {
            return;
        };
        if let Err(e) = ensure_author(&current, auth().display_name()) {
            save_error.set(Some(e.to_string()));
            return;
        }
        spawn(async move {
            saving.set(true);
            save_error.set(None);
            match api::update_cifra(current.id.clone(), draft).await {
                Ok(updated) => {
                    cifra.set(Some(updated));
                    editing.set(false);
                    alert("Cifra atualizada com sucesso!");
                }
                Err(e) => {
                    tracing::error!("Update failed: {e}");
                    save_error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let handle_delete = move |_| {
        let Some(current) = for_route(cifra(), &id_signal.peek()) else {
            return;
        };
        if let Err(e) = ensure_author(&current, auth().display_name()) {
            alert(&e.to_string());
            return;
        }
        if !confirm("Tem certeza que deseja excluir esta cifra?") {
            return;
        }
        spawn(async move {
            match api::delete_cifra(current.id.clone()).await {
                Ok(()) => {
                    alert("Cifra excluída com sucesso!");
                    on_deleted.call(());
                }
                Err(e) => {
                    tracing::error!("Delete failed: {e}");
                    alert("Erro ao excluir a cifra. Tente novamente mais tarde.");
                }
            }
        });
    };

    let Some(current) = for_route(cifra(), &id_signal()) else {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            section {
                class: "view",
                if let Some(err) = load_error() {
                    p { class: "form-error", "{err}" }
                } else {
                    p { class: "view-muted", "Carregando..." }
                }
            }
        };
    };

    let can_edit = is_author(&current, auth().display_name());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        article {
            class: "view cifra-detail",

            if editing() {
                h1 { class: "view-title", "Editar cifra" }
                CifraForm {
                    key: "{current.id}",
                    initial: current.to_draft(),
                    submit_label: "Salvar",
                    busy: saving(),
                    error: save_error(),
                    on_submit: handle_save,
                    on_cancel: move |_| {
                        save_error.set(None);
                        editing.set(false);
                    },
                }
            } else {
                header {
                    class: "cifra-header",
                    div {
                        h1 { class: "view-title", "{current.titulo}" }
                        p { class: "view-muted", "Enviado por {current.autor}" }
                    }
                    if can_edit {
                        div {
                            class: "cifra-actions",
                            button {
                                class: "secondary",
                                onclick: move |_| editing.set(true),
                                Icon { icon: FaPen, width: 12, height: 12 }
                                span { "Editar" }
                            }
                            button {
                                class: "danger",
                                onclick: handle_delete,
                                Icon { icon: FaTrashCan, width: 12, height: 12 }
                                span { "Excluir" }
                            }
                        }
                    }
                }

                VideoEmbed { key: "{current.id}", url: current.video_url.clone() }
                AutoScrollControls {}
                ChordSheet { texto: current.texto.clone() }
            }
        }
    }
}
