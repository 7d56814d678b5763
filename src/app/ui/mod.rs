pub mod bubble;
pub mod bubble_list;
pub mod loading;
pub mod messages;
pub mod notice;
pub mod scroll;
pub mod syntaxes;
pub mod textarea;
pub mod utils;

pub use bubble::Bubble;
pub use bubble_list::BubbleList;
pub use loading::Loading;
pub use messages::MessagesScreen;
pub use notice::Notice;
pub use scroll::Scroll;
pub use textarea::TextArea;
