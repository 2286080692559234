//! Block input.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use zg_03_circuit::{CircuitMsg, GenesisState};

use crate::error::RuntimeError;

/// Genesis state plus the messages of one block.
///
/// ```json
/// {
///   "genesis": { "account_permissions": [], "disabled_type_urls": [] },
///   "messages": [
///     { "type": "trip", "authority": "0x..", "msg_type_urls": ["/cosmos.bank.v1beta1.MsgSend"] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInput {
    #[serde(default)]
    pub genesis: GenesisState,
    #[serde(default)]
    pub messages: Vec<CircuitMsg>,
}

impl BlockInput {
    /// Parse a JSON block description.
    pub fn from_json(json: &str) -> Result<Self, RuntimeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON block description from `path`.
    pub fn load(path: &Path) -> Result<Self, RuntimeError> {
        let json = fs::read_to_string(path).map_err(|source| RuntimeError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_default() {
        let input = BlockInput::from_json("{}").unwrap();
        assert_eq!(input, BlockInput::default());
    }

    #[test]
    fn test_parses_messages() {
        let json = r#"{
            "messages": [
                { "type": "trip", "authority": "0x01", "msg_type_urls": ["/a.MsgA"] },
                { "type": "reset", "authority": "0x01", "msg_type_urls": ["/a.MsgA"] }
            ]
        }"#;
        let input = BlockInput::from_json(json).unwrap();
        assert_eq!(input.messages.len(), 2);
        assert_eq!(input.messages[0].type_url(), CircuitMsg::TRIP_TYPE_URL);
        assert_eq!(input.messages[1].type_url(), CircuitMsg::RESET_TYPE_URL);
    }

    #[test]
    fn test_rejects_unknown_message_type() {
        let json = r#"{ "messages": [ { "type": "burn", "authority": "0x01" } ] }"#;
        assert!(matches!(
            BlockInput::from_json(json),
            Err(RuntimeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = BlockInput::load(Path::new("/nonexistent/block.json")).unwrap_err();
        assert!(matches!(err, RuntimeError::ReadInput { .. }));
    }
}
