//! Circuit-breaker permissions
//!
//! An account holds at most one grant. Levels, from weakest:
//!
//! | Level | May trip/reset |
//! |-------|----------------|
//! | `NoneUnspecified` | nothing |
//! | `SomeMsgs` | only the type URLs in `limit_type_urls` |
//! | `AllMsgs` | any type URL |
//! | `SuperAdmin` | any type URL, and may authorize other accounts |

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Raw account address bytes.
pub type Address = Vec<u8>;

/// Permission level of a grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PermissionLevel {
    /// No permissions. Granting this revokes an account.
    #[default]
    #[serde(rename = "LEVEL_NONE_UNSPECIFIED")]
    NoneUnspecified = 0,
    /// Permission for the listed message types only.
    #[serde(rename = "LEVEL_SOME_MSGS")]
    SomeMsgs = 1,
    /// Permission for every message type.
    #[serde(rename = "LEVEL_ALL_MSGS")]
    AllMsgs = 2,
    /// Permission for every message type and for authorizing accounts.
    #[serde(rename = "LEVEL_SUPER_ADMIN")]
    SuperAdmin = 3,
}

impl PermissionLevel {
    /// Whether this level covers every message type.
    pub fn covers_all_msgs(self) -> bool {
        matches!(self, Self::AllMsgs | Self::SuperAdmin)
    }
}

/// A grant held by an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Permissions {
    /// Level of the grant.
    pub level: PermissionLevel,
    /// Type URLs covered by a `SomeMsgs` grant.
    #[serde(default)]
    pub limit_type_urls: Vec<String>,
}

impl Permissions {
    /// Grant at `level` with no allow-list.
    pub fn new(level: PermissionLevel) -> Self {
        Self {
            level,
            limit_type_urls: Vec::new(),
        }
    }

    /// `SomeMsgs` grant over `urls`.
    pub fn some_msgs<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            level: PermissionLevel::SomeMsgs,
            limit_type_urls: urls.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the allow-list names `msg_type_url`.
    pub fn lists(&self, msg_type_url: &str) -> bool {
        self.limit_type_urls.iter().any(|url| url == msg_type_url)
    }
}

/// Address of a named module account: first 20 bytes of SHA-256(name).
pub fn module_address(name: &str) -> Address {
    Sha256::digest(name.as_bytes())[..20].to_vec()
}
