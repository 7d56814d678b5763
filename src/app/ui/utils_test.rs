use super::*;
use syntect::highlighting::ThemeSet;

fn line_text(line: &Line) -> String {
    line.spans
        .iter()
        .map(|span| span.content.to_string())
        .collect()
}

#[test]
fn test_wrap_spans_fits_on_one_line() {
    let lines = wrap_spans(vec![Span::raw("hello world".to_string())], 20);
    assert_eq!(lines.len(), 1);
    assert_eq!(line_text(&lines[0]), "hello world");
}

#[test]
fn test_wrap_spans_breaks_on_words() {
    let lines = wrap_spans(vec![Span::raw("hello brave new world".to_string())], 11);
    assert_eq!(lines.len(), 2);
    assert_eq!(line_text(&lines[0]), "hello brave");
    assert_eq!(line_text(&lines[1]), "new world");
}

#[test]
fn test_wrap_spans_oversized_word_gets_own_line() {
    let lines = wrap_spans(
        vec![Span::raw("ok incomprehensibilities".to_string())],
        10,
    );
    assert_eq!(lines.len(), 2);
    assert_eq!(line_text(&lines[1]), "incomprehensibilities");
}

#[test]
fn test_wrap_spans_empty_input_yields_one_line() {
    let lines = wrap_spans(vec![], 10);
    assert_eq!(lines.len(), 1);
    assert_eq!(line_text(&lines[0]), "");
}

#[test]
fn test_build_message_lines_plain_text() {
    let themes = ThemeSet::load_defaults();
    let theme = &themes.themes["base16-ocean.dark"];

    let lines = build_message_lines("first line\nsecond line", 40, theme);
    assert_eq!(lines.len(), 2);
    assert_eq!(line_text(&lines[0]), "first line");
    assert_eq!(line_text(&lines[1]), "second line");
}

#[test]
fn test_build_message_lines_code_fence() {
    let themes = ThemeSet::load_defaults();
    let theme = &themes.themes["base16-ocean.dark"];

    let content = "look:\n```rust\nfn main() {}\n```\ndone";
    let lines = build_message_lines(content, 40, theme);
    assert_eq!(lines.len(), 5);
    assert_eq!(line_text(&lines[1]), "```rust");
    assert_eq!(line_text(&lines[2]), "fn main() {}");
    assert_eq!(line_text(&lines[4]), "done");

    // code inside the fence is highlighted, so it carries colored spans
    assert!(
        lines[2]
            .spans
            .iter()
            .any(|span| span.style.fg.is_some())
    );
}
