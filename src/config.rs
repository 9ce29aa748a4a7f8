// ABOUTME: Tunable engine configuration with research-backed defaults
// ABOUTME: Readiness factor weights and deload trigger thresholds, validated structurally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Engine configuration.
//!
//! The heuristic weights and thresholds the engine runs on, kept as plain
//! data with `Default` implementations backed by [`crate::constants`].
//! Callers that tune them get structural validation (`validate`) instead of
//! silent nonsense at scoring time.

use crate::constants::{deload, readiness};
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Weights for the four readiness factors. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReadinessWeights {
    /// Sleep factor weight
    pub sleep: f64,
    /// Stress factor weight
    pub stress: f64,
    /// Nutrition factor weight
    pub nutrition: f64,
    /// Recovery factor weight
    pub recovery: f64,
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        Self {
            sleep: readiness::SLEEP_WEIGHT,
            stress: readiness::STRESS_WEIGHT,
            nutrition: readiness::NUTRITION_WEIGHT,
            recovery: readiness::RECOVERY_WEIGHT,
        }
    }
}

impl ReadinessWeights {
    /// Check the weights form a convex combination
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` when a weight is negative or
    /// the weights do not sum to 1.0.
    pub fn validate(&self) -> EngineResult<()> {
        if self.sleep < 0.0 || self.stress < 0.0 || self.nutrition < 0.0 || self.recovery < 0.0 {
            return Err(EngineError::InvalidConfig(
                "readiness weights must be non-negative",
            ));
        }
        let sum = self.sleep + self.stress + self.nutrition + self.recovery;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(EngineError::InvalidConfig(
                "readiness weights must sum to 1.0",
            ));
        }
        Ok(())
    }
}

/// Thresholds driving the deload decision ladder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeloadThresholds {
    /// Fatigue score at or above which a deload is required
    pub fatigue_threshold: f64,
    /// Completion percent below which a session counts as incomplete
    pub low_completion_threshold: f64,
    /// Consecutive incomplete sessions that force a deload
    pub low_completion_streak: usize,
    /// Minimum session history before RPE drift is evaluated
    pub rpe_drift_min_sessions: usize,
    /// Sessions averaged at each end of the drift window
    pub rpe_drift_sample: usize,
    /// Average-RPE rise that signals accumulating fatigue
    pub rpe_drift_threshold: f64,
}

impl Default for DeloadThresholds {
    fn default() -> Self {
        Self {
            fatigue_threshold: deload::FATIGUE_THRESHOLD,
            low_completion_threshold: deload::LOW_COMPLETION_THRESHOLD,
            low_completion_streak: deload::LOW_COMPLETION_STREAK,
            rpe_drift_min_sessions: deload::RPE_DRIFT_MIN_SESSIONS,
            rpe_drift_sample: deload::RPE_DRIFT_SAMPLE,
            rpe_drift_threshold: deload::RPE_DRIFT_THRESHOLD,
        }
    }
}

impl DeloadThresholds {
    /// Check window sizes are coherent
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` when the drift window cannot
    /// hold two non-overlapping samples or a threshold is non-positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.fatigue_threshold <= 0.0 || self.rpe_drift_threshold <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "deload thresholds must be positive",
            ));
        }
        if self.rpe_drift_sample == 0
            || self.rpe_drift_min_sessions < self.rpe_drift_sample * 2
        {
            return Err(EngineError::InvalidConfig(
                "rpe drift window must hold two non-overlapping samples",
            ));
        }
        Ok(())
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Readiness factor weights
    pub readiness_weights: ReadinessWeights,
    /// Deload trigger thresholds
    pub deload: DeloadThresholds,
}

impl EngineConfig {
    /// Validate every section
    ///
    /// # Errors
    /// Returns the first section's `EngineError::InvalidConfig`.
    pub fn validate(&self) -> EngineResult<()> {
        self.readiness_weights.validate()?;
        self.deload.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let weights = ReadinessWeights {
            sleep: 0.5,
            stress: 0.5,
            nutrition: 0.5,
            recovery: 0.5,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_drift_window_must_fit_samples() {
        let thresholds = DeloadThresholds {
            rpe_drift_min_sessions: 4,
            rpe_drift_sample: 3,
            ..DeloadThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }
}
