#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One turn participant's text. The id is assigned by the owning
/// [`Conversation`](super::Conversation) when the message is appended and
/// stays stable for the message's whole lifetime, so deletion never has to
/// rely on display positions.
#[derive(Debug, Clone)]
pub struct Message {
    id: u64,
    sender: Sender,
    text: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: 0,
            sender,
            text: text.into(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn new_user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn new_bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    pub(crate) fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }

    pub fn sender_str(&self) -> &str {
        match self.sender {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }
}
