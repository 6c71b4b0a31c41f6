//! YouTube link parsing for the video attached to a cifra.

const MARKERS: [&str; 5] = ["?v=", "&v=", "youtu.be/", "/embed/", "/shorts/"];

/// Extract the video id from the usual YouTube URL shapes:
/// `watch?v=<id>`, `youtu.be/<id>`, `/embed/<id>` and `/shorts/<id>`.
pub fn youtube_id(url: &str) -> Option<&str> {
    let url = url.trim();
    let rest = MARKERS
        .iter()
        .find_map(|marker| url.find(marker).map(|idx| &url[idx + marker.len()..]))?;

    let end = rest
        .find(|c: char| matches!(c, '&' | '?' | '#' | '/'))
        .unwrap_or(rest.len());
    let id = &rest[..end];

    (!id.is_empty()).then_some(id)
}

/// High-quality thumbnail shown before the player is opened.
pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}

/// Player URL for an `<iframe>`.
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}
