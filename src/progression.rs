// ABOUTME: Readiness-tiered adjustment of prescribed session targets
// ABOUTME: Rewrites weight/sets/RIR/rest with increment-quantized load cuts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Target adjuster.
//!
//! Rewrites the next session's prescribed targets based on the check-in
//! readiness score. High readiness leaves the prescription alone; lower
//! tiers progressively ease effort (RIR), extend rest, trim sets, and cut
//! load in exercise-increment steps. The lowest tier abandons progression
//! for the session entirely and switches to technique work.

use crate::constants::progression as c;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Progression scheme driving an exercise block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionType {
    /// Add load at fixed rep targets
    Linear,
    /// Add reps to a ceiling, then load
    DoubleProgression,
    /// Light technique work, no progression this session
    TechniqueFocus,
}

/// Prescribed targets for an exercise block, rewritten before each session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionTargets {
    /// Prescribed load (kg)
    pub weight_kg: f64,
    /// Prescribed working sets
    pub sets: u32,
    /// Target reps in reserve
    pub target_rir: u8,
    /// Rest between sets (seconds)
    pub rest_seconds: u32,
    /// Active progression scheme
    pub progression_type: ProgressionType,
    /// Why the prescription looks the way it does
    pub reason: String,
}

/// Quantize a fractional load cut to the exercise's loading increment
fn increment_quantized_cut(weight_kg: f64, fraction: f64, increment_kg: f64) -> f64 {
    (fraction * weight_kg / increment_kg).round() * increment_kg
}

/// Adjust prescribed targets for the measured readiness score.
///
/// `min_increment_kg` is the exercise's smallest loading step, guarded to
/// a 2.5 kg default when not positive. Each tier's reason records the
/// readiness score that triggered it.
#[must_use]
pub fn adjust_targets(
    baseline: &ProgressionTargets,
    readiness_score: f64,
    min_increment_kg: f64,
) -> ProgressionTargets {
    let increment = if min_increment_kg > 0.0 {
        min_increment_kg
    } else {
        c::DEFAULT_WEIGHT_INCREMENT_KG
    };

    let mut adjusted = baseline.clone();

    if readiness_score >= c::FULL_READINESS_THRESHOLD {
        adjusted.reason = format!("readiness {readiness_score:.0}: train as prescribed");
    } else if readiness_score >= c::MODERATE_READINESS_THRESHOLD {
        adjusted.target_rir = baseline.target_rir.saturating_add(1);
        adjusted.rest_seconds = baseline.rest_seconds + c::MODERATE_REST_BONUS_SECONDS;
        adjusted.reason = format!(
            "readiness {readiness_score:.0}: keep the load, leave one more rep in reserve"
        );
    } else if readiness_score >= c::LOW_READINESS_THRESHOLD {
        let cut = increment_quantized_cut(baseline.weight_kg, c::LOW_READINESS_LOAD_CUT, increment);
        adjusted.weight_kg = (baseline.weight_kg - cut).max(0.0);
        adjusted.target_rir = baseline.target_rir.saturating_add(2);
        adjusted.sets = baseline.sets.saturating_sub(1).max(c::MIN_SETS);
        adjusted.rest_seconds = baseline.rest_seconds + c::LOW_REST_BONUS_SECONDS;
        adjusted.reason = format!(
            "readiness {readiness_score:.0}: reduce load ~10% and drop a set"
        );
    } else {
        let cut =
            increment_quantized_cut(baseline.weight_kg, c::VERY_LOW_READINESS_LOAD_CUT, increment);
        adjusted.weight_kg = (baseline.weight_kg - cut).max(0.0);
        adjusted.target_rir = c::VERY_LOW_TARGET_RIR;
        adjusted.sets = c::MIN_SETS;
        adjusted.rest_seconds = baseline.rest_seconds + c::VERY_LOW_REST_BONUS_SECONDS;
        adjusted.progression_type = ProgressionType::TechniqueFocus;
        adjusted.reason = format!(
            "readiness {readiness_score:.0}: technique focus, reduce load ~20%"
        );
    }

    debug!(
        readiness = readiness_score,
        weight = adjusted.weight_kg,
        sets = adjusted.sets,
        rir = adjusted.target_rir,
        "adjusted session targets"
    );
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> ProgressionTargets {
        ProgressionTargets {
            weight_kg: 100.0,
            sets: 4,
            target_rir: 2,
            rest_seconds: 150,
            progression_type: ProgressionType::Linear,
            reason: "week 2 linear progression".to_owned(),
        }
    }

    #[test]
    fn test_high_readiness_changes_nothing() {
        let adjusted = adjust_targets(&baseline(), 85.0, 2.5);
        assert!((adjusted.weight_kg - 100.0).abs() < f64::EPSILON);
        assert_eq!(adjusted.sets, 4);
        assert_eq!(adjusted.target_rir, 2);
        assert_eq!(adjusted.rest_seconds, 150);
        assert_eq!(adjusted.progression_type, ProgressionType::Linear);
        assert!(adjusted.reason.contains("85"));
    }

    #[test]
    fn test_moderate_tier_eases_effort_only() {
        let adjusted = adjust_targets(&baseline(), 70.0, 2.5);
        assert!((adjusted.weight_kg - 100.0).abs() < f64::EPSILON);
        assert_eq!(adjusted.target_rir, 3);
        assert_eq!(adjusted.rest_seconds, 180);
        assert_eq!(adjusted.sets, 4);
    }

    #[test]
    fn test_low_tier_cuts_load_and_a_set() {
        let adjusted = adjust_targets(&baseline(), 45.0, 2.5);
        // 10% of 100 kg quantized to 2.5 kg steps: exactly 10 kg
        assert!((adjusted.weight_kg - 90.0).abs() < f64::EPSILON);
        assert_eq!(adjusted.target_rir, 4);
        assert_eq!(adjusted.sets, 3);
        assert_eq!(adjusted.rest_seconds, 210);
        assert!(adjusted.reason.contains("45"));
    }

    #[test]
    fn test_sets_never_drop_below_floor() {
        let mut two_set_baseline = baseline();
        two_set_baseline.sets = 2;
        let adjusted = adjust_targets(&two_set_baseline, 45.0, 2.5);
        assert_eq!(adjusted.sets, 2);
    }

    #[test]
    fn test_very_low_tier_switches_to_technique_focus() {
        let adjusted = adjust_targets(&baseline(), 30.0, 2.5);
        assert!((adjusted.weight_kg - 80.0).abs() < f64::EPSILON);
        assert_eq!(adjusted.target_rir, 4);
        assert_eq!(adjusted.sets, 2);
        assert_eq!(adjusted.rest_seconds, 240);
        assert_eq!(adjusted.progression_type, ProgressionType::TechniqueFocus);
    }

    #[test]
    fn test_cut_respects_odd_increments() {
        let mut dumbbell = baseline();
        dumbbell.weight_kg = 42.0;
        // 10% of 42 = 4.2; nearest 2 kg step is 4 kg
        let adjusted = adjust_targets(&dumbbell, 50.0, 2.0);
        assert!((adjusted.weight_kg - 38.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_increment_uses_default() {
        let adjusted = adjust_targets(&baseline(), 45.0, 0.0);
        // Default 2.5 kg increment: 10 kg cut
        assert!((adjusted.weight_kg - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(adjust_targets(&baseline(), 80.0, 2.5).sets, 4);
        assert_eq!(adjust_targets(&baseline(), 60.0, 2.5).target_rir, 3);
        assert_eq!(adjust_targets(&baseline(), 40.0, 2.5).sets, 3);
        assert_eq!(
            adjust_targets(&baseline(), 39.9, 2.5).progression_type,
            ProgressionType::TechniqueFocus
        );
    }
}
