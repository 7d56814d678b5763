use std::io;

use crate::config::constants::{MAX_DRAFT_LEN, MIN_WIDTH};
use crate::models::{Action, Event};
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::Result;
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Margin},
    prelude::{Backend, CrosstermBackend},
    style::Stylize,
    text::Line,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation},
};
use ratatui_macros::span;
use syntect::highlighting::Theme;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::app::state::AppState;
use crate::app::ui::{Loading, MessagesScreen, Notice, TextArea, utils};

use super::services::EventService;

pub struct App<'a> {
    action_tx: mpsc::UnboundedSender<Action>,

    events: &'a mut EventService,

    state: AppState<'a>,
    messages_screen: MessagesScreen,
    input: tui_textarea::TextArea<'a>,

    notice: Notice,
    loading: Loading<'a>,

    cancel_token: CancellationToken,
}

impl<'a> App<'a> {
    pub fn new(
        theme: Theme,
        action_tx: mpsc::UnboundedSender<Action>,
        events: &'a mut EventService,
        cancel_token: CancellationToken,
    ) -> App<'a> {
        let theme = Box::leak(Box::new(theme));
        let event_tx = events.event_tx();
        App {
            action_tx: action_tx.clone(),
            messages_screen: MessagesScreen::new(action_tx, event_tx),
            events,
            state: AppState::new(theme),
            input: TextArea::default().build(),
            loading: Loading::new(vec![span!("Waiting for the reply...").gray()]),
            notice: Notice::default(),
            cancel_token,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;
        let result = self.start_loop(&mut terminal).await;

        self.cancel_token.cancel();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;

        terminal.show_cursor()?;
        result
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.render(terminal)?;
            if self.handle_key_event().await {
                return Ok(());
            }
        }
    }

    async fn handle_key_event(&mut self) -> bool {
        let event = self.events.next().await;

        if let Some(stop) = self.handle_global_event(&event) {
            return stop;
        }

        if self.messages_screen.showing() {
            self.messages_screen.handle_key_event(&event);
            return false;
        }

        self.handle_input_event(event);
        false
    }

    /// Events that apply no matter which surface has focus. Returns None
    /// to fall through to the focused surface.
    fn handle_global_event(&mut self, event: &Event) -> Option<bool> {
        match event {
            Event::Quit => Some(true),

            Event::TurnCompleted(outcome) => {
                self.state.finish_turn(outcome.clone());
                Some(false)
            }

            Event::MessageDeleted(id) => {
                self.state.delete_message(*id);
                Some(false)
            }

            Event::Notice(msg) => {
                self.notice.add_message(msg.clone());
                Some(false)
            }

            _ => None,
        }
    }

    fn handle_input_event(&mut self, event: Event) {
        match event {
            Event::KeyboardCharInput(input) => {
                if !self.state.pending {
                    self.input.input(input);
                }
            }

            Event::KeyboardCtrlC => {
                // clear the draft without sending it
                if !self.state.pending {
                    self.input = TextArea::default().build();
                }
            }

            Event::KeyboardNewLine => {
                if !self.state.pending {
                    self.input.insert_newline();
                }
            }

            Event::KeyboardPaste(text) => {
                if !self.state.pending {
                    self.input.set_yank_text(text.replace('\r', "\n"));
                    self.input.paste();
                }
            }

            Event::KeyboardEnter => self.handle_send_prompt(),

            Event::KeyboardCtrlE => {
                self.messages_screen
                    .set_messages(self.state.conversation.messages());
                self.messages_screen.toggle_showing();
            }

            Event::KeyboardCtrlL => self.state.clear_all(),

            Event::KeyboardCtrlY => self.handle_copy_last_reply(),

            Event::UiScrollUp => self.state.scroll.up(),
            Event::UiScrollDown => self.state.scroll.down(),
            Event::UiScrollPageUp => self.state.scroll.page_up(),
            Event::UiScrollPageDown => self.state.scroll.page_down(),

            _ => {}
        }
    }

    fn handle_send_prompt(&mut self) {
        if self.state.pending {
            return;
        }

        let draft = self.input.lines().join("\n");
        if draft.chars().count() > MAX_DRAFT_LEN {
            // the counter is already red; just refuse
            return;
        }

        let Some(prompt) = self.state.submit(&draft) else {
            return;
        };

        self.input = TextArea::default().build();
        let _ = self.action_tx.send(Action::CompletionRequest(prompt));
    }

    fn handle_copy_last_reply(&mut self) {
        if let Some(reply) = self.state.conversation.last_reply() {
            let _ = self
                .action_tx
                .send(Action::CopyText(reply.text().to_string()));
        }
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let draft_len = self.input.lines().join("\n").chars().count();
        self.input.set_block(TextArea::block_with_counter(draft_len));

        terminal.draw(|f| {
            let current_width = f.area().width;
            if current_width < MIN_WIDTH {
                f.render_widget(
                    Paragraph::new(format!(
                        "Terminal too narrow: need at least {} cells (current: {})",
                        MIN_WIDTH, current_width
                    ))
                    .alignment(Alignment::Left),
                    f.area(),
                );
                return;
            }

            let textarea_len = (self.input.lines().len() + 2).try_into().unwrap();
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Max(textarea_len),
                    Constraint::Length(1),
                ])
                .split(f.area());

            if layout[0].width as usize != self.state.last_known_width
                || layout[0].height as usize != self.state.last_known_height
            {
                self.state.set_rect(layout[0]);
            }

            self.state
                .bubble_list
                .render(layout[0], f.buffer_mut(), self.state.scroll.position);

            f.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .end_symbol(None)
                    .begin_symbol(None),
                layout[0].inner(Margin {
                    vertical: 1,
                    horizontal: 1,
                }),
                &mut self.state.scroll.scrollbar_state,
            );

            if self.state.pending {
                self.loading.render(f, layout[1]);
            } else {
                f.render_widget(&self.input, layout[1]);
            }

            f.render_widget(help_line(), layout[2]);

            self.messages_screen
                .render(f, utils::popup_area(f.area(), 70, 70));

            self.notice.render(f, utils::notice_area(f.area(), 30));
        })?;
        Ok(())
    }
}

fn help_line() -> Paragraph<'static> {
    let hint = span!(
        "Enter send · Alt+Enter newline · Ctrl+e messages · Ctrl+y copy reply · Ctrl+l clear · Ctrl+q quit"
    )
    .dim();
    Paragraph::new(Line::from(hint)).alignment(Alignment::Center)
}
