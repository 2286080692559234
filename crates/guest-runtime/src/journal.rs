//! Journal committed by the guest.
//!
//! The journal is the bincode encoding of [`BlockJournal`]; its digest is the
//! journal half of the output claim.

use serde::{Deserialize, Serialize};

use crate::error::RuntimeError;

/// Result of one message of the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOutcome {
    /// Position in the block.
    pub index: u32,
    /// Type URL of the message.
    pub msg_type: String,
    /// Whether the message was applied.
    pub success: bool,
    /// Error text of a rejected message.
    pub error: Option<String>,
}

impl MessageOutcome {
    pub fn applied(index: u32, msg_type: &str) -> Self {
        Self {
            index,
            msg_type: msg_type.to_string(),
            success: true,
            error: None,
        }
    }

    pub fn rejected(index: u32, msg_type: &str, error: impl ToString) -> Self {
        Self {
            index,
            msg_type: msg_type.to_string(),
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Everything the guest commits to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockJournal {
    /// One entry per input message, in order.
    pub outcomes: Vec<MessageOutcome>,
    /// Disabled type URLs after the block, sorted.
    pub disabled_type_urls: Vec<String>,
}

impl BlockJournal {
    /// Journal bytes.
    pub fn encode(&self) -> Result<Vec<u8>, RuntimeError> {
        Ok(bincode::serialize(self)?)
    }

    /// Parse journal bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, RuntimeError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Number of applied messages.
    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }
}
