use std::time::Duration;

use crate::models::NoticeMessage;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{List, ListItem},
};
use unicode_width::UnicodeWidthStr;

struct MessageWrapper {
    value: NoticeMessage,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Short-lived toasts in the top right corner (copy feedback, clipboard
/// failures). Messages expire on their own; nothing here blocks input.
pub struct Notice {
    notices: Vec<MessageWrapper>,
    display_duration: Duration,
}

impl Notice {
    pub fn add_message(&mut self, msg: NoticeMessage) {
        self.notices.push(MessageWrapper {
            value: msg,
            created_at: chrono::Utc::now(),
        });
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.add_message(NoticeMessage::info(msg));
    }

    fn drop_expired(&mut self) {
        let now = chrono::Utc::now();
        let default_duration = self.display_duration;
        self.notices.retain(|msg| {
            let shown_for = now.signed_duration_since(msg.created_at);
            shown_for.num_milliseconds()
                < msg.value.duration().unwrap_or(default_duration).as_millis() as i64
        });
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.drop_expired();
        if self.notices.is_empty() {
            return;
        }

        let max_width = area.width.saturating_sub(2) as usize;
        let items = self
            .notices
            .iter()
            .map(|msg| {
                let kind = msg.value.kind();
                let mut text = format!("▌ {}", msg.value.message());
                if text.width() > max_width {
                    text = text.chars().take(max_width.saturating_sub(1)).collect();
                    text.push('…');
                }
                ListItem::new(Line::styled(
                    text,
                    Style::default().fg(kind.text_color()),
                ))
            })
            .collect::<Vec<_>>();

        f.render_widget(List::new(items), area);
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            notices: vec![],
            display_duration: Duration::from_secs(3),
        }
    }
}
