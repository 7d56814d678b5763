use tui_textarea::Input;

/// How a submission ended, as reported by the action service. The state
/// manager treats `Empty` and `Failed` the same way (drop the turn, log),
/// but carrying the reason keeps the failure observable for tests and
/// log sinks instead of burying it in a console write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Reply(String),
    Empty,
    Failed(String),
}

#[derive(Debug)]
pub enum Event {
    TurnCompleted(TurnOutcome),
    Notice(crate::models::NoticeMessage),
    MessageDeleted(u64),

    KeyboardCharInput(Input),
    KeyboardEsc,
    KeyboardEnter,
    KeyboardNewLine,
    KeyboardCtrlC,
    KeyboardCtrlE,
    KeyboardCtrlL,
    KeyboardCtrlY,
    KeyboardPaste(String),

    Quit,

    UiTick,
    UiScrollUp,
    UiScrollDown,
    UiScrollPageUp,
    UiScrollPageDown,
}
