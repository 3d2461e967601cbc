//! MotionKind - what a resolution motion asks the council to do.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CouncilStatus, ValidationError};

/// Type of a resolution motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    /// Formally resolve on the accumulated conclusions. Needs unanimity.
    Resolve,
    /// Abandon the council without resolving. Needs a strict majority.
    Close,
}

impl MotionKind {
    /// Council status reached when a motion of this kind passes.
    pub fn terminal_status(&self) -> CouncilStatus {
        match self {
            MotionKind::Resolve => CouncilStatus::Resolved,
            MotionKind::Close => CouncilStatus::Closed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionKind::Resolve => "resolve",
            MotionKind::Close => "close",
        }
    }
}

impl fmt::Display for MotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "resolve" => Ok(MotionKind::Resolve),
            "close" => Ok(MotionKind::Close),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("expected 'resolve' or 'close', got '{}'", other),
            )),
        }
    }
}
