//! One-shot notification messages.

use serde::{Deserialize, Serialize};

/// Tone of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

impl FlashKind {
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "flash-success",
            Self::Error => "flash-error",
            Self::Info => "flash-info",
        }
    }
}

/// A message shown once, on the next page the visitor sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Flash {
    fn new(kind: FlashKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(FlashKind::Success, title)
    }

    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(FlashKind::Error, title)
    }

    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(FlashKind::Info, title)
    }

    /// Attach a second line of text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
