use crate::config::constants::BUBBLE_WIDTH_PERCENT;
use crate::models::Message;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use syntect::highlighting::Theme;
use unicode_width::UnicodeWidthStr;

use super::utils;

// "│ " on the left, " │" on the right
const BORDER_ELEMENTS_LEN: usize = 4;

/// Draws one message as a bordered bubble. Bot bubbles hug the left edge,
/// user bubbles the right edge, mirroring the two participants.
pub struct Bubble<'a> {
    message: &'a Message,
    viewport_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, viewport_width: usize) -> Bubble<'a> {
        Bubble {
            message,
            viewport_width,
        }
    }

    pub fn as_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let budget = (self.viewport_width * BUBBLE_WIDTH_PERCENT / 100)
            .saturating_sub(BORDER_ELEMENTS_LEN)
            .max(1);
        let content = utils::build_message_lines(self.message.text(), budget, theme);

        let sender = self.message.sender_str();
        let time = self
            .message
            .created_at()
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string();

        let inner_width = content
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
            .max(sender.width() + 2)
            .max(time.width() + 2);

        let bubble_width = inner_width + BORDER_ELEMENTS_LEN;
        let left_pad = if self.message.is_bot() {
            0
        } else {
            self.viewport_width.saturating_sub(bubble_width)
        };

        let border = self.border_style();
        let top_bar = format!(
            "╭─ {} {}╮",
            sender,
            "─".repeat(inner_width.saturating_sub(sender.width() + 1))
        );
        let bottom_bar = format!(
            "╰─ {} {}╯",
            time,
            "─".repeat(inner_width.saturating_sub(time.width() + 1))
        );

        let mut lines = vec![self.bar_line(top_bar, left_pad, border)];
        for line in content {
            let fill = inner_width.saturating_sub(line.width());
            let mut spans = vec![
                Span::raw(" ".repeat(left_pad)),
                Span::styled("│ ".to_string(), border),
            ];
            spans.extend(line.spans);
            spans.push(Span::raw(" ".repeat(fill)));
            spans.push(Span::styled(" │".to_string(), border));
            lines.push(Line::from(spans));
        }
        lines.push(self.bar_line(bottom_bar, left_pad, border));
        lines.push(Line::default());
        lines
    }

    fn bar_line(&self, bar: String, left_pad: usize, border: Style) -> Line<'static> {
        Line::from(vec![
            Span::raw(" ".repeat(left_pad)),
            Span::styled(bar, border),
        ])
    }

    fn border_style(&self) -> Style {
        if self.message.is_bot() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }
}
