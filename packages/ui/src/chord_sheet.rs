use dioxus::prelude::*;

/// The sheet body with chord lines highlighted. Lyric text is escaped by
/// [`sheet::render_html`] before it is injected.
#[component]
pub fn ChordSheet(texto: String) -> Element {
    let html = sheet::render_html(&texto);

    rsx! {
        pre {
            class: "chord-sheet",
            dangerous_inner_html: "{html}",
        }
    }
}
