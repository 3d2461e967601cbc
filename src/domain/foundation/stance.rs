//! Support/oppose stance shared by opinions and motion votes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A member's position on a conclusion or a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Support,
    Oppose,
}

impl Stance {
    pub fn is_support(&self) -> bool {
        matches!(self, Stance::Support)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Support => "support",
            Stance::Oppose => "oppose",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "support" => Ok(Stance::Support),
            "oppose" => Ok(Stance::Oppose),
            other => Err(ValidationError::invalid_format(
                "stance",
                format!("expected 'support' or 'oppose', got '{}'", other),
            )),
        }
    }
}
