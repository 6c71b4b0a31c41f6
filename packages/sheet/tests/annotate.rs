use sheet::chords::{CHORD_CLOSE, CHORD_OPEN};
use sheet::{annotate, render_html};

fn wrap(token: &str) -> String {
    format!("{CHORD_OPEN}{token}{CHORD_CLOSE}")
}

#[test]
fn test_intro_then_lyrics() {
    let input = "Intro: C  G  Am  F\nLet it be, let it be";
    let expected = format!(
        "Intro: {}  {}  {}  {}\nLet it be, let it be",
        wrap("C"),
        wrap("G"),
        wrap("Am"),
        wrap("F")
    );
    assert_eq!(annotate(input), expected);
}

#[test]
fn test_single_letter_line_is_wrapped() {
    assert_eq!(annotate("A"), wrap("A"));
}

#[test]
fn test_line_count_and_order_preserved() {
    let inputs = [
        "",
        "\n",
        "C\n\nG\n",
        "When I find myself in times of trouble\nC G Am F\n\n  \nMother Mary comes to me",
        "A\r\nB\r\n",
        "<b>C</b>\nD E",
    ];

    for input in inputs {
        let output = annotate(input);
        assert_eq!(input.split('\n').count(), output.split('\n').count());

        // Stripping the markup gives back the original, line by line.
        let stripped = output.replace(CHORD_OPEN, "").replace(CHORD_CLOSE, "");
        assert_eq!(stripped, input);
    }
}

#[test]
fn test_full_sheet() {
    let sheet = "\
[Intro] G D/F# Em C

G              D/F#
Quando a noite cai
Em         C
A lua vem
";
    let html = render_html(sheet);
    let lines: Vec<&str> = html.split('\n').collect();

    assert_eq!(
        lines[0],
        format!("[Intro] {} {} {} {}", wrap("G"), wrap("D/F#"), wrap("Em"), wrap("C"))
    );
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], format!("{}              {}", wrap("G"), wrap("D/F#")));
    assert_eq!(lines[3], "Quando a noite cai");
    assert_eq!(lines[4], format!("{}         {}", wrap("Em"), wrap("C")));
    assert_eq!(lines[5], "A lua vem");
    assert_eq!(lines[6], "");
}
