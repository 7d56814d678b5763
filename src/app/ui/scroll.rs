#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

const PAGE_LINES: usize = 10;

#[derive(Debug, Default)]
pub struct Scroll {
    content_len: usize,
    viewport_len: usize,
    pub position: usize,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.scrollbar_state.prev();
    }

    pub fn down(&mut self) {
        self.position = self
            .position
            .saturating_add(1)
            .min(self.bottom_position());
        self.scrollbar_state.next();
    }

    pub fn page_up(&mut self) {
        for _ in 0..PAGE_LINES {
            self.up();
        }
    }

    pub fn page_down(&mut self) {
        for _ in 0..PAGE_LINES {
            self.down();
        }
    }

    fn bottom_position(&self) -> usize {
        self.content_len.saturating_sub(self.viewport_len)
    }

    pub fn is_at_bottom(&self) -> bool {
        self.position == self.bottom_position()
    }

    pub fn last(&mut self) {
        self.position = self.bottom_position();
        self.scrollbar_state.last();
    }

    pub fn set_state(&mut self, content_len: usize, viewport_len: usize) {
        self.content_len = content_len;
        self.viewport_len = viewport_len;
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(self.bottom_position().max(1));
    }
}
