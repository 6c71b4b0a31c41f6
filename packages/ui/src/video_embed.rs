use dioxus::prelude::*;

use crate::icons::FaPlay;
use crate::Icon;

/// YouTube thumbnail that turns into the embedded player when clicked.
#[component]
pub fn VideoEmbed(url: Option<String>) -> Element {
    let mut playing = use_signal(|| false);

    let mut shown_url = use_signal(|| url.clone());
    if *shown_url.peek() != url {
        let still_playing = keeps_playing(&shown_url.peek(), &url, *playing.peek());
        shown_url.set(url.clone());
        playing.set(still_playing);
    }

    let Some(id) = url.as_deref().and_then(sheet::video::youtube_id) else {
        return rsx! {
            p { class: "video-missing", "Nenhum vídeo disponível." }
        };
    };

    let thumbnail = sheet::video::thumbnail_url(id);
    let embed = sheet::video::embed_url(id);

    rsx! {
        div {
            class: "video-embed",
            if playing() {
                iframe {
                    src: "{embed}?autoplay=1",
                    title: "Vídeo da música",
                    allow: "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            } else {
                button {
                    class: "video-thumbnail",
                    title: "Assistir vídeo",
                    onclick: move |_| playing.set(true),
                    img { src: "{thumbnail}", alt: "Miniatura do vídeo" }
                    span {
                        class: "video-play",
                        Icon { icon: FaPlay, width: 28, height: 28 }
                    }
                }
            }
        }
    }
}

/// A new video starts as a thumbnail again.
fn keeps_playing(previous: &Option<String>, next: &Option<String>, playing: bool) -> bool {
    playing && previous == next
}
