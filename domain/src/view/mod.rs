//! View selection: which of the two main regions the session shows

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The main-region selector. Exactly one of the two views renders per
/// pass; the enum makes "both" and "neither" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewOption {
    /// Conversation transcript + question input
    #[default]
    Chat,
    /// Retrieval inspector (query → retrieved chunks)
    Inspector,
}

impl ViewOption {
    /// Flip between the two views.
    pub fn toggled(self) -> Self {
        match self {
            Self::Chat => Self::Inspector,
            Self::Inspector => Self::Chat,
        }
    }

    /// Label shown in the view selector and tab line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Inspector => "Inspector",
        }
    }
}

impl FromStr for ViewOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" => Ok(Self::Chat),
            "inspector" | "inspect" => Ok(Self::Inspector),
            _ => Err(DomainError::InvalidView(s.to_string())),
        }
    }
}

impl fmt::Display for ViewOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
