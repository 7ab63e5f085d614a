//! Engine configuration

use serde::{Deserialize, Serialize};

/// Which status wins when a spouse pair is both marked ex and ended by death
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpousePrecedence {
    /// Ex wins: a divorced partner who later died is still an ex-spouse
    #[default]
    ExOverDeceased,
    /// Deceased wins
    DeceasedOverEx,
}

/// Label used when a person's gender is neither male nor female
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenderFallback {
    /// Use the neutral term ("Parent", "Sibling")
    #[default]
    Neutral,
    /// Use the male term ("Father", "Brother")
    Male,
}

/// Configuration for graph building and classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Resolution of conflicting spouse flags
    pub spouse_precedence: SpousePrecedence,

    /// Label choice for unknown or non-binary gender
    pub gender_fallback: GenderFallback,

    /// Apply lifespan checks (global gate and step-link blocking)
    pub enforce_timeline: bool,

    /// Upper bound on generations walked when climbing ancestors
    pub max_generations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spouse_precedence: SpousePrecedence::ExOverDeceased,
            gender_fallback: GenderFallback::Neutral,
            enforce_timeline: true,
            max_generations: 32,
        }
    }
}

impl EngineConfig {
    /// Lenient preset: ignore dates entirely
    pub fn lenient() -> Self {
        Self {
            enforce_timeline: false,
            ..Self::default()
        }
    }

    /// Strict preset: the defaults with ancestor walks capped at 12 generations
    pub fn strict() -> Self {
        Self {
            max_generations: 12,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_generations < 3 {
            return Err("max_generations must be at least 3".to_string());
        }
        if self.max_generations > 256 {
            return Err("max_generations cannot exceed 256".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.enforce_timeline);
        assert_eq!(config.spouse_precedence, SpousePrecedence::ExOverDeceased);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(EngineConfig::lenient().validate().is_ok());
        assert!(!EngineConfig::lenient().enforce_timeline);
        assert!(EngineConfig::strict().validate().is_ok());
    }

    #[test]
    fn test_strict_only_shortens_walks() {
        let strict = EngineConfig::strict();
        let default = EngineConfig::default();
        assert_eq!(strict.max_generations, 12);
        assert!(strict.max_generations < default.max_generations);
        assert_eq!(
            strict,
            EngineConfig {
                max_generations: 12,
                ..default
            }
        );
    }

    #[test]
    fn test_invalid_generation_bound() {
        let mut config = EngineConfig::default();
        config.max_generations = 1;
        assert!(config.validate().is_err());
        config.max_generations = 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml(
            "spouse_precedence = \"deceased_over_ex\"\ngender_fallback = \"male\"\n",
        )
        .unwrap();
        assert_eq!(config.spouse_precedence, SpousePrecedence::DeceasedOverEx);
        assert_eq!(config.gender_fallback, GenderFallback::Male);
        assert_eq!(config.max_generations, 32);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(EngineConfig::from_toml("max_generations = 0").is_err());
        assert!(EngineConfig::from_toml("spouse_precedence = \"whatever\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::lenient();
        let toml_str = config.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
