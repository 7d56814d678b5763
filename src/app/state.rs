#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use crate::models::{Conversation, Message, TurnOutcome};
use ratatui::layout::Rect;
use syntect::highlighting::Theme;

use crate::app::ui::{BubbleList, Scroll};

/// Single owner of the conversation sequence and the pending flag. Every
/// mutation funnels through here, and every mutation ends with the
/// viewport snapped to its bottom.
pub(crate) struct AppState<'a> {
    theme: &'a Theme,
    pub bubble_list: BubbleList<'a>,
    pub scroll: Scroll,
    pub last_known_width: usize,
    pub last_known_height: usize,

    pub conversation: Conversation,
    pub pending: bool,
}

impl<'a> AppState<'a> {
    pub fn new(theme: &'a Theme) -> AppState<'a> {
        AppState {
            theme,
            bubble_list: BubbleList::new(theme),
            scroll: Scroll::default(),
            last_known_width: 0,
            last_known_height: 0,
            conversation: Conversation::new(),
            pending: false,
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width.into();
        self.last_known_height = rect.height.into();
        self.sync_state();
    }

    /// Starts a turn. A draft that trims to nothing is a no-op; anything
    /// else appends exactly one user message (verbatim, untrimmed), flips
    /// the pending flag and hands the prompt back for dispatch. Refuses
    /// while a turn is already pending.
    pub fn submit(&mut self, draft: &str) -> Option<String> {
        if self.pending || draft.trim().is_empty() {
            return None;
        }

        self.append_message(Message::new_user(draft));
        self.pending = true;
        Some(draft.to_string())
    }

    /// Ends a turn. Only a non-empty reply appends a bot message; an
    /// empty or failed turn is dropped with nothing but a diagnostic log.
    /// The pending flag is reset on every branch so the input always
    /// comes back, whatever the provider did.
    pub fn finish_turn(&mut self, outcome: TurnOutcome) {
        match outcome {
            TurnOutcome::Reply(text) if !text.is_empty() => {
                self.append_message(Message::new_bot(text));
            }
            TurnOutcome::Reply(_) | TurnOutcome::Empty => {
                log::debug!("turn dropped: provider returned no usable completion");
            }
            TurnOutcome::Failed(reason) => {
                log::error!("turn dropped: {reason}");
            }
        }
        self.pending = false;
    }

    pub fn delete_message(&mut self, id: u64) {
        if self.conversation.remove_message(id).is_some() {
            self.sync_state();
            self.scroll.last();
        }
    }

    pub fn clear_all(&mut self) {
        self.conversation.clear();
        self.bubble_list = BubbleList::new(self.theme);
        self.sync_state();
        self.scroll.last();
    }

    fn append_message(&mut self, message: Message) {
        self.conversation.append_message(message);
        self.sync_state();
        self.scroll.last();
    }

    pub fn sync_state(&mut self) {
        self.bubble_list
            .set_messages(self.conversation.messages(), self.last_known_width);
        let was_at_bottom = self.scroll.is_at_bottom();
        self.scroll
            .set_state(self.bubble_list.len(), self.last_known_height);
        if was_at_bottom {
            self.scroll.last();
        }
    }
}
