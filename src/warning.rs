// src/warning.rs
//! Non-fatal diagnostics raised while scanning a field

use std::fmt;

/// Something odd in the field that was tolerated rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiderWarning {
    /// Odd number of indicators; the last one (at this byte offset) was ignored.
    UnbalancedIndicator { offset: usize },
    /// An indicator-bounded token that is not `key=value`.
    MalformedTokenSkipped { token: String },
}

impl fmt::Display for RiderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiderWarning::UnbalancedIndicator { offset } => {
                write!(f, "unbalanced field indicator at byte {offset}")
            }
            RiderWarning::MalformedTokenSkipped { token } => {
                write!(f, "skipped malformed token {token:?}")
            }
        }
    }
}
