pub mod action;
pub mod conversation;
pub mod event;
pub mod message;
pub mod notice;

pub use action::Action;
pub use conversation::Conversation;
pub use event::{Event, TurnOutcome};
pub use message::{Message, Sender};
pub use notice::{NoticeKind, NoticeMessage};
