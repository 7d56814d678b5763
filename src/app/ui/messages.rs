use crate::models::{Action, Event, Message};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Padding},
};
use ratatui_macros::span;
use tokio::sync::mpsc;
use tui_textarea::Key;
use unicode_width::UnicodeWidthStr;

struct MessageItem {
    id: u64,
    text: String,
    is_bot: bool,
}

/// Popup listing every message of the conversation with the per-message
/// affordances: delete the selected message, copy it to the clipboard.
/// Deletions travel back to the state manager as `Event::MessageDeleted`
/// carrying the message's stable id, so a completion landing while the
/// popup is open can never shift which message gets removed.
pub struct MessagesScreen {
    showing: bool,

    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,

    items: Vec<MessageItem>,
    list_state: ListState,
}

impl MessagesScreen {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        event_tx: mpsc::UnboundedSender<Event>,
    ) -> MessagesScreen {
        MessagesScreen {
            showing: false,
            action_tx,
            event_tx,
            items: vec![],
            list_state: ListState::default(),
        }
    }

    pub fn showing(&self) -> bool {
        self.showing
    }

    pub fn toggle_showing(&mut self) {
        self.showing = !self.showing;
    }

    pub fn set_messages(&mut self, messages: &[Message]) {
        self.items = messages
            .iter()
            .map(|msg| MessageItem {
                id: msg.id(),
                text: msg.text().to_string(),
                is_bot: msg.is_bot(),
            })
            .collect();
        self.list_state = ListState::default();
        if !self.items.is_empty() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }

    pub fn handle_key_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardEsc | Event::KeyboardCtrlE => self.showing = false,

            Event::UiScrollDown => self.next_row(),
            Event::UiScrollUp => self.prev_row(),

            Event::KeyboardCharInput(input) => match input.key {
                Key::Char('j') => self.next_row(),
                Key::Char('k') => self.prev_row(),
                Key::Char('q') => self.showing = false,
                Key::Char('d') => self.delete_selected(),
                Key::Char('y') => self.copy_selected(),
                _ => {}
            },

            _ => {}
        }
    }

    fn next_row(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn prev_row(&mut self) {
        let prev = self.list_state.selected().unwrap_or(0).saturating_sub(1);
        self.list_state.select(Some(prev));
    }

    fn delete_selected(&mut self) {
        let Some(pos) = self.list_state.selected() else {
            return;
        };
        if pos >= self.items.len() {
            return;
        }
        let item = self.items.remove(pos);
        let _ = self.event_tx.send(Event::MessageDeleted(item.id));
        if self.items.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(pos.min(self.items.len() - 1)));
        }
    }

    fn copy_selected(&mut self) {
        let Some(item) = self.list_state.selected().and_then(|pos| self.items.get(pos))
        else {
            return;
        };
        let _ = self.action_tx.send(Action::CopyText(item.text.clone()));
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.showing {
            return;
        }

        let max_width = area.width.saturating_sub(6) as usize;
        let items = self
            .items
            .iter()
            .map(|item| to_list_item(item, max_width))
            .collect::<Vec<_>>();

        let block = Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::symmetric(1, 0))
            .title_bottom(vec![
                span!(" "),
                span!("j/k").green().bold(),
                span!(" move, ").white(),
                span!("d").green().bold(),
                span!(" delete, ").white(),
                span!("y").green().bold(),
                span!(" copy, ").white(),
                span!("q").green().bold(),
                span!(" close ").white(),
            ])
            .title_alignment(Alignment::Center)
            .border_style(Style::default().light_blue());

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_widget(Clear, area);
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

fn to_list_item(item: &MessageItem, max_width: usize) -> ListItem<'static> {
    let prefix = if item.is_bot { "Bot" } else { "You" };
    let mut preview = item
        .text
        .lines()
        .next()
        .unwrap_or_default()
        .to_string();
    if preview.width() > max_width.saturating_sub(prefix.len() + 2) {
        preview = preview
            .chars()
            .take(max_width.saturating_sub(prefix.len() + 3))
            .collect();
        preview.push('…');
    }

    let prefix_span = if item.is_bot {
        span!("{}: ", prefix).dark_gray().bold()
    } else {
        span!("{}: ", prefix).cyan().bold()
    };
    ListItem::new(Line::from(vec![prefix_span, span!("{}", preview)]))
}
