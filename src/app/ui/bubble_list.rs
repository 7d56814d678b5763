use std::collections::BTreeMap;

use crate::models::Message;
use ratatui::{buffer::Buffer, layout::Rect, text::Line};
use syntect::highlighting::Theme;

use super::bubble::Bubble;

struct CacheEntry {
    text_len: usize,
    lines: Vec<Line<'static>>,
}

/// Renders the conversation as a flat list of bubble lines. Rendered
/// lines are cached per message id so only new or reflowed messages pay
/// the highlighting cost.
pub struct BubbleList<'a> {
    theme: &'a Theme,
    cache: BTreeMap<u64, CacheEntry>,
    lines: Vec<Line<'static>>,
    line_width: usize,
}

impl<'a> BubbleList<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            cache: BTreeMap::new(),
            lines: Vec::new(),
            line_width: 0,
        }
    }

    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        // drop entries for deleted or cleared messages
        let live: std::collections::BTreeSet<u64> = messages.iter().map(|m| m.id()).collect();
        self.cache.retain(|id, _| live.contains(id));

        for message in messages {
            let stale = match self.cache.get(&message.id()) {
                Some(entry) => entry.text_len != message.text().len(),
                None => true,
            };
            if stale {
                let lines = Bubble::new(message, line_width).as_lines(self.theme);
                self.cache.insert(
                    message.id(),
                    CacheEntry {
                        text_len: message.text().len(),
                        lines,
                    },
                );
            }
        }

        self.lines = messages
            .iter()
            .flat_map(|message| self.cache[&message.id()].lines.clone())
            .collect();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, scroll_index: usize) {
        for (row, line) in self
            .lines
            .iter()
            .skip(scroll_index)
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_line(area.x, area.y + row as u16, line, area.width);
        }
    }
}
