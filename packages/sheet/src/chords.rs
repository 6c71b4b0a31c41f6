//! # Chord highlighting for cifra bodies
//!
//! A cifra body interleaves lyric lines with chord lines. Only lines made entirely of
//! chord tokens (optionally preceded by a section label such as `Intro:` or
//! `[Refrão]`) are highlighted; everything else passes through untouched. Gating on
//! whole lines keeps chord-shaped words inside lyrics (the article "A", the name "Em")
//! from being highlighted.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`annotate`] | Chord tokens wrapped in `<span class="chord">`, lyric lines byte-identical. |
//! | [`render_html`] | Same highlighting, with every non-chord byte HTML-escaped. Safe to inject. |
//! | [`is_chord_line`] | The line classifier on its own. |
//!
//! Neither function is idempotent: feed them the raw stored body, never a previous
//! result.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Root, accidental, quality, extension, `sus`/`add` suffix, parenthesized
/// alteration and slash bass. Longer quality spellings come first so the leftmost
/// alternative is also the longest.
const CHORD: &str = r"[A-G](?:b|#)?(?:maj|min|aug|dim|sus|add|7M|m|M|\+|-|7)?[0-9]*(?:(?:sus|add)[0-9]*)?(?:\([b#+-]?[0-9]+\))?(?:/[A-G](?:b|#)?)?";

/// `Intro:` or `[Primeira parte]`.
const LABEL: &str = r"(?:\[[^\]\n]*\]|[^\s\[\]:]+:)";

/// The HTML emitted around each highlighted chord token.
pub const CHORD_OPEN: &str = r#"<span class="chord">"#;
pub const CHORD_CLOSE: &str = "</span>";

/// `replace_all` template: the whole matched token between the markup constants.
static WRAPPED_TOKEN: Lazy<String> = Lazy::new(|| format!("{CHORD_OPEN}${{0}}{CHORD_CLOSE}"));

static CHORD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*(?:{LABEL}\s*)?(?P<chords>{CHORD}(?:\s+{CHORD})*)\s*$"
    ))
    .expect("chord line grammar is valid")
});

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("token pattern is valid"));

/// Whether `line` consists solely of chord tokens (after an optional section label).
pub fn is_chord_line(line: &str) -> bool {
    CHORD_LINE.is_match(line)
}

/// Wrap every chord token of every chord line in highlight markup.
pub fn annotate(text: &str) -> String {
    render(text, false)
}

/// Like [`annotate`], but lyric text and labels are HTML-escaped so the result can be
/// injected into the page as markup.
pub fn render_html(text: &str) -> String {
    render(text, true)
}

fn render(text: &str, escape: bool) -> String {
    text.split('\n')
        .map(|line| render_line(line, escape))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(line: &str, escape: bool) -> Cow<'_, str> {
    let Some(chords) = CHORD_LINE.captures(line).and_then(|caps| caps.name("chords")) else {
        return escaped(line, escape);
    };

    let head = &line[..chords.start()];
    let tail = &line[chords.end()..];

    let mut out = String::with_capacity(line.len() * 3);
    out.push_str(&escaped(head, escape));
    // The classifier guarantees every non-blank run here is a whole chord token.
    out.push_str(&TOKEN.replace_all(chords.as_str(), WRAPPED_TOKEN.as_str()));
    out.push_str(&escaped(tail, escape));
    Cow::Owned(out)
}

fn escaped(s: &str, escape: bool) -> Cow<'_, str> {
    if escape && s.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        Cow::Owned(html_escape(s))
    } else {
        Cow::Borrowed(s)
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(token: &str) -> String {
        format!("{CHORD_OPEN}{token}{CHORD_CLOSE}")
    }

    #[test]
    fn test_chord_line_classification() {
        assert!(is_chord_line("C G/B Am7 F#m"));
        assert!(is_chord_line("   Dm7(b5)  G7  C7M(9)   "));
        assert!(is_chord_line("Bbmaj7 Ebsus4 Cadd9 Faug Gdim E7sus4"));
        assert!(is_chord_line("Intro: C  G  Am  F"));
        assert!(is_chord_line("[Refrão] D A/C# Bm"));
        assert!(is_chord_line("A"));

        assert!(!is_chord_line(""));
        assert!(!is_chord_line("    "));
        assert!(!is_chord_line("Let it be, let it be"));
        assert!(!is_chord_line("A casa caiu"));
        assert!(!is_chord_line("C G Am and F"));
        assert!(!is_chord_line("Intro:"));
        assert!(!is_chord_line("Cm7M"));
    }

    #[test]
    fn test_chord_line_is_wrapped_token_by_token() {
        let out = annotate("C G/B Am7 F#m");
        assert_eq!(
            out,
            format!("{} {} {} {}", wrap("C"), wrap("G/B"), wrap("Am7"), wrap("F#m"))
        );
    }

    #[test]
    fn test_replacement_is_built_from_markup_constants() {
        assert_eq!(WRAPPED_TOKEN.as_str(), format!("{CHORD_OPEN}${{0}}{CHORD_CLOSE}"));
        assert_eq!(annotate("Am"), format!("{CHORD_OPEN}Am{CHORD_CLOSE}"));
        assert_eq!(annotate("Am"), r#"<span class="chord">Am</span>"#);
    }

    #[test]
    fn test_spacing_is_preserved() {
        let out = annotate("  C    G\t Am ");
        assert_eq!(out, format!("  {}    {}\t {} ", wrap("C"), wrap("G"), wrap("Am")));
    }

    #[test]
    fn test_lyric_lines_pass_through() {
        let text = "Let it be, let it be\nA casa é de Deus";
        assert_eq!(annotate(text), text);
    }

    #[test]
    fn test_mixed_line_left_alone() {
        let line = "C G when I find myself Am";
        assert_eq!(annotate(line), line);
    }

    #[test]
    fn test_label_is_not_highlighted() {
        let out = annotate("Bridge: Em C");
        assert_eq!(out, format!("Bridge: {} {}", wrap("Em"), wrap("C")));
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert_eq!(annotate(""), "");
        assert_eq!(annotate("\n\n"), "\n\n");
        assert_eq!(annotate("   \nC"), format!("   \n{}", wrap("C")));
    }

    #[test]
    fn test_crlf_line_keeps_carriage_return() {
        assert_eq!(annotate("G D\r"), format!("{} {}\r", wrap("G"), wrap("D")));
    }

    #[test]
    fn test_render_html_escapes_lyrics() {
        let out = render_html("<script>alert(1)</script>\nC G");
        assert_eq!(
            out,
            format!(
                "&lt;script&gt;alert(1)&lt;/script&gt;\n{} {}",
                wrap("C"),
                wrap("G")
            )
        );
    }

    #[test]
    fn test_render_html_escapes_label() {
        let out = render_html("[<b>] C");
        assert_eq!(out, format!("[&lt;b&gt;] {}", wrap("C")));
    }
}
