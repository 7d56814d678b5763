use crate::config::constants::FRAME_DURATION;
use crate::models::Event;
use crossterm::event::{Event as CrosstermEvent, EventStream, MouseEventKind};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::{Input, Key};

/// Multiplexes terminal input, internal events and the frame tick into a
/// single stream for the UI loop.
pub struct EventService {
    crossterm_events: EventStream,
    event_rx: mpsc::UnboundedReceiver<Event>,
    event_tx: mpsc::UnboundedSender<Event>,
}

impl EventService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_tx(&self) -> mpsc::UnboundedSender<Event> {
        self.event_tx.clone()
    }

    pub async fn next(&mut self) -> Event {
        loop {
            let e = tokio::select! {
                event = self.event_rx.recv() => event,
                event = self.crossterm_events.next().fuse() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None,
                },
                _ = time::sleep(FRAME_DURATION) => Some(Event::UiTick),
            };

            if let Some(event) = e {
                return event;
            }
        }
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => Some(Event::KeyboardPaste(text)),

            CrosstermEvent::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(Event::UiScrollUp),
                MouseEventKind::ScrollDown => Some(Event::UiScrollDown),
                _ => None,
            },

            CrosstermEvent::Key(key_event) => {
                let input: Input = key_event.into();
                if input.key == Key::Enter && (input.shift || input.alt) {
                    return Some(Event::KeyboardNewLine);
                }

                if input.ctrl {
                    return match input.key {
                        Key::Char('q') => Some(Event::Quit),
                        Key::Char('c') => Some(Event::KeyboardCtrlC),
                        Key::Char('e') => Some(Event::KeyboardCtrlE),
                        Key::Char('l') => Some(Event::KeyboardCtrlL),
                        Key::Char('y') => Some(Event::KeyboardCtrlY),
                        Key::Char('u') => Some(Event::UiScrollPageUp),
                        Key::Char('d') => Some(Event::UiScrollPageDown),
                        _ => None,
                    };
                }

                match input.key {
                    Key::Esc => Some(Event::KeyboardEsc),
                    Key::Enter => Some(Event::KeyboardEnter),
                    Key::Up => Some(Event::UiScrollUp),
                    Key::Down => Some(Event::UiScrollDown),
                    Key::PageUp => Some(Event::UiScrollPageUp),
                    Key::PageDown => Some(Event::UiScrollPageDown),
                    _ => Some(Event::KeyboardCharInput(input)),
                }
            }

            _ => None,
        }
    }
}

impl Default for EventService {
    fn default() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
        Self {
            crossterm_events: EventStream::new(),
            event_rx,
            event_tx,
        }
    }
}
