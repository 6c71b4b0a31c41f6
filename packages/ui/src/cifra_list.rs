use dioxus::prelude::*;
use store::Cifra;

/// Cards for a list of cifras. `on_open` receives the id of the clicked cifra.
#[component]
pub fn CifraList(
    cifras: Vec<Cifra>,
    #[props(default = "Nenhuma cifra encontrada.".to_string())] empty_message: String,
    on_open: EventHandler<String>,
) -> Element {
    if cifras.is_empty() {
        return rsx! {
            p { class: "view-muted", "{empty_message}" }
        };
    }

    rsx! {
        ul {
            class: "cifra-list",
            for cifra in cifras {
                li {
                    key: "{cifra.id}",
                    class: "cifra-card",
                    onclick: {
                        let id = cifra.id.clone();
                        move |_| on_open.call(id.clone())
                    },
                    if let Some(thumb) = cifra.video_url.as_deref().and_then(sheet::video::youtube_id).map(sheet::video::thumbnail_url) {
                        img { class: "cifra-card-thumb", src: "{thumb}", alt: "" }
                    }
                    div {
                        class: "cifra-card-body",
                        h3 { "{cifra.titulo}" }
                        p { class: "view-muted", "Enviado por {cifra.autor}" }
                    }
                }
            }
        }
    }
}
