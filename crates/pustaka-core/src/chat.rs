//! The scripted live-chat transcript.
//!
//! There is no agent on the other end: every visitor message gets the
//! same canned acknowledgment. The transcript is in-memory only.

/// Who wrote a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    Bot,
    Visitor,
}

/// One line of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

/// Opening line from the bot.
pub const CHAT_GREETING: &str = "Halo! Ada yang bisa kami bantu?";

/// Canned reply appended after every visitor message.
pub const CHAT_AUTO_REPLY: &str = "Terima kasih! CS akan segera merespon.";

/// In-memory chat transcript, seeded with the bot greeting.
#[derive(Debug)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                sender: ChatSender::Bot,
                text: CHAT_GREETING.to_string(),
            }],
        }
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visitor message followed by the scripted reply.
    ///
    /// Blank and whitespace-only input is ignored entirely; the
    /// transcript does not change.
    pub fn send(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        self.messages.push(ChatMessage {
            sender: ChatSender::Visitor,
            text: trimmed.to_string(),
        });
        self.messages.push(ChatMessage {
            sender: ChatSender::Bot,
            text: CHAT_AUTO_REPLY.to_string(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
