//! Prioritization configuration.
//!
//! A small value object the downstream scheduler consumes alongside the
//! validated datasets. It has no validation coupling to the engine; it only
//! shares the export boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weights steering the downstream scheduler between client priority and
/// task efficiency. The two weights always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeightPair")]
pub struct PrioritizationConfig {
    client_priority: u8,
    task_efficiency: u8,
}

/// Raised when a deserialized weight pair does not sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("prioritization weights must sum to 100, got {client_priority} + {task_efficiency}")]
pub struct WeightError {
    /// Offending client weight.
    pub client_priority: u8,
    /// Offending task weight.
    pub task_efficiency: u8,
}

#[derive(Deserialize)]
struct WeightPair {
    client_priority: u8,
    task_efficiency: u8,
}

impl TryFrom<WeightPair> for PrioritizationConfig {
    type Error = WeightError;

    fn try_from(pair: WeightPair) -> Result<Self, Self::Error> {
        if pair.client_priority.checked_add(pair.task_efficiency) == Some(100) {
            Ok(Self {
                client_priority: pair.client_priority,
                task_efficiency: pair.task_efficiency,
            })
        } else {
            Err(WeightError {
                client_priority: pair.client_priority,
                task_efficiency: pair.task_efficiency,
            })
        }
    }
}

impl PrioritizationConfig {
    /// Creates a configuration from the client weight; the task weight is
    /// the complement. Weights above 100 are clamped.
    pub fn new(client_priority: u8) -> Self {
        let client_priority = client_priority.min(100);
        Self {
            client_priority,
            task_efficiency: 100 - client_priority,
        }
    }

    /// Equal weighting (50/50).
    pub fn balanced() -> Self {
        Self::new(50)
    }

    /// Weighting that favors client priority (75/25).
    pub fn client_weighted() -> Self {
        Self::new(75)
    }

    /// Weighting that favors task efficiency (25/75).
    pub fn task_weighted() -> Self {
        Self::new(25)
    }

    /// Client weight (0..=100).
    pub fn client_priority(&self) -> u8 {
        self.client_priority
    }

    /// Task weight (0..=100).
    pub fn task_efficiency(&self) -> u8 {
        self.task_efficiency
    }
}

impl Default for PrioritizationConfig {
    fn default() -> Self {
        Self::balanced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_100() {
        let config = PrioritizationConfig::new(70);
        assert_eq!(config.client_priority(), 70);
        assert_eq!(config.task_efficiency(), 30);

        let clamped = PrioritizationConfig::new(200);
        assert_eq!(clamped.client_priority(), 100);
        assert_eq!(clamped.task_efficiency(), 0);
    }

    #[test]
    fn test_presets_are_complements() {
        let client = PrioritizationConfig::client_weighted();
        assert_eq!(client.client_priority(), 75);
        assert_eq!(client.task_efficiency(), 25);

        let task = PrioritizationConfig::task_weighted();
        assert_eq!(task.client_priority(), 25);
        assert_eq!(task.task_efficiency(), 75);
    }

    #[test]
    fn test_balanced_default() {
        assert_eq!(PrioritizationConfig::default(), PrioritizationConfig::balanced());
        assert_eq!(PrioritizationConfig::balanced().client_priority(), 50);
    }

    #[test]
    fn test_deserialization_enforces_sum() {
        let ok: PrioritizationConfig =
            serde_json::from_str(r#"{"client_priority":60,"task_efficiency":40}"#).unwrap();
        assert_eq!(ok.client_priority(), 60);

        let bad: Result<PrioritizationConfig, _> =
            serde_json::from_str(r#"{"client_priority":60,"task_efficiency":60}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = PrioritizationConfig::new(25);
        let text = serde_json::to_string(&config).unwrap();
        let back: PrioritizationConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
