use dioxus::prelude::*;
use store::CifraDraft;

/// Title, body and video fields. The draft is validated before `on_submit` fires;
/// validation messages are shown inline.
#[component]
pub fn CifraForm(
    #[props(default)] initial: CifraDraft,
    #[props(default = "Enviar".to_string())] submit_label: String,
    #[props(default)] busy: bool,
    #[props(default)] error: Option<String>,
    on_submit: EventHandler<CifraDraft>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let mut titulo = use_signal(|| initial.titulo.clone());
    let mut texto = use_signal(|| initial.texto.clone());
    let mut video_url = use_signal(|| initial.video_url.clone().unwrap_or_default());
    let mut invalid = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = CifraDraft::new(titulo(), texto())
            .with_video(video_url())
            .normalized();
        match store::validate::validate_draft(&draft) {
            Ok(()) => {
                invalid.set(None);
                on_submit.call(draft);
            }
            Err(e) => invalid.set(Some(e.to_string())),
        }
    };

    let message = invalid().or(error);

    rsx! {
        form {
            class: "cifra-form",
            onsubmit: onsubmit,

            if let Some(err) = message {
                div { class: "form-error", "{err}" }
            }

            label {
                class: "form-field",
                span { "Título" }
                input {
                    r#type: "text",
                    placeholder: "Insira aqui",
                    value: titulo(),
                    oninput: move |evt: FormEvent| titulo.set(evt.value()),
                }
            }

            label {
                class: "form-field",
                span { "Texto da cifra" }
                textarea {
                    class: "cifra-textarea",
                    placeholder: "Coloque os acordes em linhas paralelas às letras.",
                    value: texto(),
                    oninput: move |evt: FormEvent| texto.set(evt.value()),
                }
            }

            label {
                class: "form-field",
                span { "Vídeo" }
                input {
                    r#type: "url",
                    placeholder: "Insira a URL do YouTube",
                    value: video_url(),
                    oninput: move |evt: FormEvent| video_url.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Enviando..." } else { "{submit_label}" }
                }
                if let Some(cancel) = on_cancel {
                    button {
                        class: "secondary",
                        r#type: "button",
                        onclick: move |_| cancel.call(()),
                        "Cancelar"
                    }
                }
            }
        }
    }
}
