//! # Domain model for cifras
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Cifra`] | A stored sheet: id assigned by storage, title, the author's display name captured at submission, the raw body and an optional video link. |
//! | [`CifraDraft`] | The editable fields coming from the submit or edit form. |
//!
//! Both are `Serialize + Deserialize` so they cross the server/client boundary as
//! server-function arguments and results. The video link is always `video_url`
//! (serialized `videoUrl`); the historical `videoLink` spelling is not read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chord sheet as stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cifra {
    /// Opaque id assigned on creation.
    pub id: String,
    pub titulo: String,
    /// Display name of the submitting user at submission time.
    pub autor: String,
    /// Lyric and chord lines, newline-delimited, unsanitized.
    pub texto: String,
    #[serde(rename = "videoUrl", default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Cifra {
    /// The editable part of this cifra, e.g. to prefill the edit form.
    pub fn to_draft(&self) -> CifraDraft {
        CifraDraft {
            titulo: self.titulo.clone(),
            texto: self.texto.clone(),
            video_url: self.video_url.clone(),
        }
    }

    pub fn apply(&mut self, draft: CifraDraft) {
        self.titulo = draft.titulo;
        self.texto = draft.texto;
        self.video_url = draft.video_url;
    }
}

/// Fields a user fills in when submitting or editing a cifra.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CifraDraft {
    pub titulo: String,
    pub texto: String,
    #[serde(rename = "videoUrl", default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl CifraDraft {
    pub fn new(titulo: impl Into<String>, texto: impl Into<String>) -> Self {
        Self {
            titulo: titulo.into(),
            texto: texto.into(),
            video_url: None,
        }
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Trim the title and the video link; a blank link becomes `None`.
    /// The body is kept as typed, since its spacing aligns chords over lyrics.
    pub fn normalized(self) -> Self {
        Self {
            titulo: self.titulo.trim().to_string(),
            texto: self.texto,
            video_url: self
                .video_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_draft() {
        let draft = CifraDraft::new("  Let It Be ", "  C  G\nWhen I find")
            .with_video("   ")
            .normalized();
        assert_eq!(draft.titulo, "Let It Be");
        assert_eq!(draft.texto, "  C  G\nWhen I find");
        assert_eq!(draft.video_url, None);

        let draft = CifraDraft::new("t", "b")
            .with_video(" https://youtu.be/abc ")
            .normalized();
        assert_eq!(draft.video_url.as_deref(), Some("https://youtu.be/abc"));
    }

    #[test]
    fn test_video_url_wire_name() {
        let draft = CifraDraft::new("t", "b").with_video("https://youtu.be/abc");
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(
            json,
            r#"{"titulo":"t","texto":"b","videoUrl":"https://youtu.be/abc"}"#
        );

        let parsed: CifraDraft = serde_json::from_str(r#"{"titulo":"t","texto":"b"}"#).unwrap();
        assert_eq!(parsed.video_url, None);
    }
}
