use crate::config::constants::MAX_DRAFT_LEN;
use ratatui::{
    layout::Alignment,
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding},
};
use ratatui_macros::span;

pub struct TextArea {
    title: String,
    placeholder: String,
}

impl TextArea {
    pub fn build<'a>(&self) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(Self::block_with_counter(0));
        textarea.set_placeholder_text(self.placeholder.clone());
        textarea.set_cursor_line_style(Style::default());
        textarea
    }

    /// The input block with the live `N/350` counter in the bottom right
    /// corner. The counter turns red while submission is refused.
    pub fn block_with_counter(count: usize) -> Block<'static> {
        let counter = if count > MAX_DRAFT_LEN {
            span!("{}/{}", count, MAX_DRAFT_LEN).red().bold()
        } else {
            span!("{}/{}", count, MAX_DRAFT_LEN).dim()
        };

        Block::default()
            .title(TextArea::default().title)
            .title_bottom(Line::from(counter).right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title_alignment(Alignment::Left)
            .padding(Padding::new(1, 1, 0, 0))
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self {
            title: " Message ".to_string(),
            placeholder: "Type your message here...".to_string(),
        }
    }
}
