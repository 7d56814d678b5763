#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
};
use syntect::{easy::HighlightLines, highlighting::Theme};
use unicode_width::UnicodeWidthStr;

use super::syntaxes::{SYNTAX_SET, Syntaxes};

pub fn popup_area(area: Rect, percent_width: u16, percent_height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_width)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

pub fn notice_area(area: Rect, percent_width: u16) -> Rect {
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_width)]).flex(Flex::End);
    let [area] = horizontal.areas(area);
    area
}

/// Renders message text into styled lines: fenced code blocks go through
/// syntect with the syntax named by the fence tag, everything else stays
/// plain. All lines are word-wrapped to `max_width`.
pub fn build_message_lines(content: &str, max_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut highlight = HighlightLines::new(Syntaxes::get("text"), theme);
    let mut in_codeblock = false;
    let mut lines: Vec<Line> = vec![];

    for line in content.lines() {
        let mut spans: Vec<Span> = vec![];
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            if !in_codeblock {
                let lang = trimmed.trim_start_matches('`').trim();
                highlight = HighlightLines::new(Syntaxes::get(lang), theme);
            }
            in_codeblock = !in_codeblock;
            spans = vec![Span::styled(line.to_string(), Style::default().dim())];
        } else if in_codeblock {
            // syntect expects the trailing newline it was configured with
            let line_nl = format!("{}\n", line);
            if let Ok(highlighted) = highlight.highlight_line(&line_nl, &SYNTAX_SET) {
                spans = highlighted
                    .iter()
                    .map(|(style, content)| {
                        Span::styled(
                            content.trim_end_matches('\n').to_string(),
                            Style {
                                fg: Syntaxes::translate_colour(style.foreground),
                                ..Style::default()
                            },
                        )
                    })
                    .filter(|span| !span.content.is_empty())
                    .collect();
            }
        }

        if spans.is_empty() {
            spans = vec![Span::raw(line.to_string())];
        }

        lines.extend(wrap_spans(spans, max_width));
    }

    if lines.is_empty() {
        lines.push(Line::default());
    }
    lines
}

/// Greedy word wrap that keeps each word's style. A single word wider
/// than `max_width` gets a line of its own and is clipped by the renderer.
pub fn wrap_spans(spans: Vec<Span<'static>>, max_width: usize) -> Vec<Line<'static>> {
    let max_width = max_width.max(1);
    let mut lines = vec![];
    let mut current: Vec<Span> = vec![];
    let mut current_width = 0usize;

    for word in split_words(spans) {
        let word_width = word.content.width();
        if current_width + word_width > max_width && !current.is_empty() {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
            if word.content.trim().is_empty() {
                // don't carry the breaking space onto the next line
                continue;
            }
        }
        current_width += word_width;
        current.push(word);
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    if lines.is_empty() {
        lines.push(Line::default());
    }
    lines
}

fn split_words(spans: Vec<Span<'static>>) -> Vec<Span<'static>> {
    let mut words = vec![];
    for span in spans {
        let style = span.style;
        let mut word = String::new();
        for c in span.content.chars() {
            if c == ' ' {
                if !word.is_empty() {
                    words.push(Span::styled(std::mem::take(&mut word), style));
                }
                words.push(Span::styled(" ".to_string(), style));
            } else {
                word.push(c);
            }
        }
        if !word.is_empty() {
            words.push(Span::styled(word, style));
        }
    }
    words
}
