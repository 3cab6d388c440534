//! Career coach chat.
//!
//! The user's message is appended before the request is sent, and every send
//! appends exactly one bot entry: the reply or a fallback. Overlapping sends
//! are neither queued nor deduplicated, so replies land in completion order.

use crate::studio::Studio;
use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;

pub const SERVER_ERROR_REPLY: &str = "Sorry, I encountered an error.";
pub const CONNECTION_ERROR_REPLY: &str = "Sorry, I cannot connect right now.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
}

/// Append-only list of chat messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn push(&mut self, text: impl Into<String>, sender: Sender) -> ChatMessage {
        let message = ChatMessage {
            text: text.into(),
            sender,
            sent_at: Utc::now(),
        };
        self.messages.push(message.clone());
        message
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

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Studio {
    /// Send whatever is in the chat input. Blank input is ignored. Returns
    /// the bot entry that was appended.
    pub async fn send_chat_message(&self) -> Option<ChatMessage> {
        let message = self.with_view(|view| {
            let message = view.forms.chat_input.trim().to_string();
            if !message.is_empty() {
                view.transcript.push(message.clone(), Sender::User);
                view.forms.chat_input.clear();
            }
            message
        });
        if message.is_empty() {
            return None;
        }

        let reply = match self.client.chat(&message).await {
            Ok(response) => response,
            Err(e) if e.is_rejection() => {
                warn!("Chat request rejected: {}", e);
                SERVER_ERROR_REPLY.to_string()
            }
            Err(e) => {
                warn!("Chat request failed: {}", e);
                CONNECTION_ERROR_REPLY.to_string()
            }
        };

        Some(self.with_view(|view| view.transcript.push(reply, Sender::Bot)))
    }

    /// Type `message` into the chat input and send it.
    pub async fn chat(&self, message: &str) -> Option<ChatMessage> {
        self.with_view(|view| view.forms.chat_input = message.to_string());
        self.send_chat_message().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_is_append_only_in_order() {
        let mut transcript = Transcript::default();
        transcript.push("hello", Sender::User);
        transcript.push("hi there", Sender::Bot);

        let senders: Vec<_> = transcript.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot]);
        assert_eq!(transcript.last().map(|m| m.text.as_str()), Some("hi there"));
    }
}
