//! Exit status passed to the host at halt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Guest exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExitCode(pub u8);

impl ExitCode {
    /// Normal termination.
    pub const HALTED: ExitCode = ExitCode(0);

    /// Whether this is a normal termination.
    pub fn is_success(self) -> bool {
        self == Self::HALTED
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::HALTED
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Halted({})", self.0)
    }
}
