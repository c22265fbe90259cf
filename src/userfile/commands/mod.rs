use crate::model::User;

pub mod add;
pub mod find;
pub mod helpers;
pub mod list;
pub mod remove;

/// Plain-text status for the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub content: String,
}

impl CmdMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// What a command produced for the output sink.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Unparsed file content (`list`).
    pub raw: Option<Vec<u8>>,
    /// The matched record (`findById`).
    pub found: Option<User>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_raw(mut self, raw: Vec<u8>) -> Self {
        self.raw = Some(raw);
        self
    }

    pub fn with_found(mut self, user: User) -> Self {
        self.found = Some(user);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_none() && self.found.is_none() && self.messages.is_empty()
    }
}

pub(crate) fn already_exists(id: &str) -> String {
    format!("Item with id {} already exists", id)
}

pub(crate) fn not_found(id: &str) -> String {
    format!("Item with id {} not found", id)
}
