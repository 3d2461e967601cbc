//! Engine limits configuration

use serde::Deserialize;

use super::ValidationError;

/// Per-council limits enforced by the command handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Member rows per council, convener included, any status.
    #[serde(default = "default_max_members")]
    pub max_members_per_council: usize,

    /// Conclusions per council, amendments included.
    #[serde(default = "default_max_conclusions")]
    pub max_conclusions_per_council: usize,
}

fn default_max_members() -> usize {
    50
}

fn default_max_conclusions() -> usize {
    200
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_members_per_council: default_max_members(),
            max_conclusions_per_council: default_max_conclusions(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_members_per_council < 2 {
            return Err(ValidationError::MembersLimitTooSmall(
                self.max_members_per_council,
            ));
        }
        if self.max_conclusions_per_council == 0 {
            return Err(ValidationError::ConclusionsLimitZero);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_single_member_councils() {
        let config = EngineConfig {
            max_members_per_council: 1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MembersLimitTooSmall(1))
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "max_members_per_council": 12 }"#).unwrap();
        assert_eq!(config.max_members_per_council, 12);
        assert_eq!(config.max_conclusions_per_council, 200);
    }
}
