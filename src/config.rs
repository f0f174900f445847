use crate::error::{PolicyError, Result};
use crate::types::BLACKJACK_ACTIONS;
use serde::{Deserialize, Serialize};

/// Exploration parameters of an epsilon-soft policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorationConfig {
    pub epsilon: f64,
    pub num_actions: usize,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        ExplorationConfig {
            epsilon: 0.1,
            num_actions: BLACKJACK_ACTIONS,
        }
    }
}

impl ExplorationConfig {
    pub fn new(epsilon: f64, num_actions: usize) -> Self {
        ExplorationConfig { epsilon, num_actions }
    }

    /// Epsilon must lie in `[0, 1]` (NaN fails) and the action space must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(PolicyError::invalid_argument(format!(
                "epsilon must lie in [0, 1], got {}",
                self.epsilon
            )));
        }
        if self.num_actions == 0 {
            return Err(PolicyError::invalid_argument("num_actions must be positive"));
        }
        Ok(())
    }
}
