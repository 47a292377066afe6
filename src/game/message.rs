//! Message log
//!
//! Player-visible text, tagged for colouring and kept to a bounded history.

/// A message to display in the game log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMessage {
    pub text: String,
    /// Turn the message was written on
    pub turn: u64,
    pub category: MessageCategory,
}

/// Categories for message colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Combat,
    Item,
    System,
    Lore,
    Warning,
}

/// Newest-last list of messages that drops the oldest past `capacity`
#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: Vec<GameMessage>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, message: GameMessage) {
        self.messages.push(message);
        if self.messages.len() > self.capacity {
            let excess = self.messages.len() - self.capacity;
            self.messages.drain(..excess);
        }
    }

    pub fn as_slice(&self) -> &[GameMessage] {
        &self.messages
    }
}
