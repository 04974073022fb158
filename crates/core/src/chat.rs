//! The footer's "food mood" chat widget.
//!
//! There is no model behind it: a mood keyword maps to a fixed suggestion.
//! The transcript is plain data so the storefront can keep it in a session
//! slot between requests.

use serde::{Deserialize, Serialize};

/// Greeting the bot opens every conversation with.
pub const GREETING: &str = "Hey there! How are you feeling today? 😄";

/// Reply for moods outside the table.
pub const FALLBACK_REPLY: &str = "I'm not sure about your mood, but how about a delicious wrap or a refreshing mocktail to start? 🌯🥤";

/// Moods offered as quick-reply buttons.
pub const MOODS: [&str; 5] = ["happy", "sad", "hungry", "tired", "other"];

/// Longest mood kept, in characters. Anything past it is cut off.
pub const MAX_MOOD_CHARS: usize = 100;

/// Most messages a transcript holds: the greeting plus ten exchanges.
pub const MAX_MESSAGES: usize = 21;

/// Trim a typed mood and cut it to [`MAX_MOOD_CHARS`].
#[must_use]
pub fn clamp_mood(mood: &str) -> &str {
    let mood = mood.trim();
    mood.char_indices()
        .nth(MAX_MOOD_CHARS)
        .and_then(|(end, _)| mood.get(..end))
        .unwrap_or(mood)
}

/// Canned suggestion for a mood keyword.
#[must_use]
pub fn reply_for(mood: &str) -> &'static str {
    match mood.trim().to_lowercase().as_str() {
        "happy" => {
            "You seem to be in a great mood! How about some sweet treats like a chocolate cake or a refreshing smoothie? 🍰🥤"
        }
        "sad" => {
            "I'm sorry to hear that. Maybe a warm cup of coffee or a comforting bowl of pasta would help lift your spirits. ☕🍝"
        }
        "hungry" => {
            "Looks like you're craving food! How about a burger or some crispy fries to satisfy your hunger? 🍔🍟"
        }
        "tired" => "Sounds like you need a boost! How about some coffee or a light sandwich? ☕🥪",
        _ => FALLBACK_REPLY,
    }
}

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

/// A single chat bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    /// Whether the bot sent this message.
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

/// Widget state: open flag plus the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTranscript {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage {
                sender: Sender::Bot,
                text: GREETING.to_string(),
            }],
        }
    }
}

impl ChatTranscript {
    /// Record the visitor picking a mood and the bot's answer.
    ///
    /// The greeting always stays first; the oldest exchanges are dropped
    /// once the transcript passes [`MAX_MESSAGES`].
    pub fn choose_mood(&mut self, mood: &str) {
        let mood = clamp_mood(mood);
        self.open = true;
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: format!("I'm feeling {mood}"),
        });
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: reply_for(mood).to_string(),
        });

        let excess = self.messages.len().saturating_sub(MAX_MESSAGES);
        if excess > 0 {
            self.messages.drain(1..=excess);
        }
    }

    /// Close the widget and reset to the greeting.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries() {
        assert!(reply_for("happy").contains("chocolate cake"));
        assert!(reply_for("sad").contains("pasta"));
        assert!(reply_for("hungry").contains("burger"));
        assert!(reply_for("tired").contains("sandwich"));
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        assert_eq!(reply_for(" Hungry "), reply_for("hungry"));
    }

    #[test]
    fn test_unknown_mood_falls_back() {
        assert_eq!(reply_for("bored"), FALLBACK_REPLY);
        assert_eq!(reply_for(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_choose_mood_appends_two_messages() {
        let mut chat = ChatTranscript::default();
        chat.choose_mood("tired");

        assert!(chat.open);
        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[1].text, "I'm feeling tired");
        assert_eq!(chat.messages[1].sender, Sender::User);
        assert!(chat.messages[2].is_bot());
    }

    #[test]
    fn test_other_quick_reply_gets_fallback() {
        assert_eq!(MOODS.last(), Some(&"other"));
        assert_eq!(reply_for("other"), FALLBACK_REPLY);
    }

    #[test]
    fn test_clamp_mood_cuts_long_input() {
        assert_eq!(clamp_mood("  tired "), "tired");

        let long = "é".repeat(MAX_MOOD_CHARS + 50);
        let clamped = clamp_mood(&long);
        assert_eq!(clamped.chars().count(), MAX_MOOD_CHARS);
        assert!(long.starts_with(clamped));
    }

    #[test]
    fn test_transcript_keeps_greeting_and_latest_exchanges() {
        let mut chat = ChatTranscript::default();
        for i in 0..30 {
            chat.choose_mood(&format!("mood{i}"));
        }

        assert_eq!(chat.messages.len(), MAX_MESSAGES);
        assert_eq!(chat.messages[0].text, GREETING);
        assert_eq!(chat.messages[1].text, "I'm feeling mood20");
        assert_eq!(chat.messages[MAX_MESSAGES - 2].text, "I'm feeling mood29");
        assert!(chat.messages[MAX_MESSAGES - 1].is_bot());
    }

    #[test]
    fn test_choose_mood_stores_clamped_text() {
        let mut chat = ChatTranscript::default();
        chat.choose_mood(&"x".repeat(10_000));
        let prefix = "I'm feeling ".len();
        assert_eq!(chat.messages[1].text.len(), prefix + MAX_MOOD_CHARS);
    }

    #[test]
    fn test_close_resets_to_greeting() {
        let mut chat = ChatTranscript::default();
        chat.choose_mood("happy");
        chat.close();

        assert_eq!(chat, ChatTranscript::default());
        assert_eq!(chat.messages[0].text, GREETING);
    }
}
