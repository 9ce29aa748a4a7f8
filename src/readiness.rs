// ABOUTME: Session readiness scoring from subjective check-in inputs
// ABOUTME: Weighted sleep/stress/nutrition/recovery composite on a 0-100 scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Readiness scorer.
//!
//! Combines the check-in's subjective inputs into a single 0-100 readiness
//! score at session start. Every input is optional and defaults to a
//! neutral midpoint; out-of-range ratings are clamped to their scale before
//! weighting rather than rejected. The score is computed once at check-in
//! and never recalculated afterward.
//!
//! References:
//! - Saw, A.E., Main, L.C., & Gastin, P.B. (2016). Monitoring the athlete training
//!   response: subjective self-reported measures trump commonly used objective measures.
//!   <https://bjsm.bmj.com/content/50/5/281>
//! - Hirshkowitz, M., et al. (2015). National Sleep Foundation's sleep time
//!   duration recommendations. <https://doi.org/10.1016/j.sleh.2014.12.010>

use crate::config::ReadinessWeights;
use crate::constants::readiness as c;
use serde::{Deserialize, Serialize};

/// Subjective check-in inputs collected at session start.
/// Omitted fields default to neutral midpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadinessCheckIn {
    /// Hours slept last night
    pub sleep_hours: Option<f64>,
    /// Sleep quality rating, 1-5
    pub sleep_quality: Option<u8>,
    /// Stress rating, 1-5 (higher is more stressed)
    pub stress: Option<u8>,
    /// Nutrition rating, 1-5
    pub nutrition: Option<u8>,
    /// Mean RPE of the previous session
    pub previous_session_rpe: Option<f64>,
    /// Full rest days since the last session (0 = same-day repeat)
    pub days_since_last_session: Option<u32>,
}

/// Qualitative readiness band, aligned with the target-adjustment tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    /// 80+: train as prescribed
    High,
    /// 60-79: ease effort and rest slightly
    Moderate,
    /// 40-59: trim the load, session proceeds
    Low,
    /// Under 40: technique-focus session
    VeryLow,
}

impl ReadinessLevel {
    /// Band for a 0-100 readiness score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::High
        } else if score >= 60.0 {
            Self::Moderate
        } else if score >= 40.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

/// Pre-weighting factor sub-scores
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReadinessComponents {
    /// Sleep-hours band score scaled by quality
    pub sleep: f64,
    /// Inverted stress rating score
    pub stress: f64,
    /// Nutrition rating score
    pub nutrition: f64,
    /// Previous-session and rest-day recovery score
    pub recovery: f64,
}

/// Composite readiness result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessScore {
    /// Weighted composite, clamped to 0-100 and rounded
    pub score: f64,
    /// Qualitative interpretation of the score
    pub level: ReadinessLevel,
    /// Per-factor sub-scores before weighting
    pub components: ReadinessComponents,
}

/// Clamp a 1-5 rating into its scale before scoring
fn clamp_rating(rating: u8) -> f64 {
    f64::from(rating).clamp(1.0, 5.0)
}

/// Banded sleep-hours score scaled by sleep quality
fn sleep_score(hours: f64, quality: u8) -> f64 {
    let band_score = c::SLEEP_HOUR_BANDS
        .iter()
        .find(|&&(min, max, _)| hours >= min && hours <= max)
        .map_or(c::SLEEP_SCORE_FLOOR, |&(_, _, score)| score);
    let quality_factor = c::SLEEP_QUALITY_STEP.mul_add(clamp_rating(quality), c::SLEEP_QUALITY_BASE);
    band_score * quality_factor
}

/// Recovery sub-score from previous-session effort and rest-day count
fn recovery_score(previous_rpe: f64, days_since_last: u32) -> f64 {
    let mut score = c::RECOVERY_BASE;
    if previous_rpe >= c::RECOVERY_HIGH_RPE_THRESHOLD {
        score -= c::RECOVERY_HIGH_RPE_PENALTY;
    } else if previous_rpe <= c::RECOVERY_LOW_RPE_THRESHOLD {
        score += c::RECOVERY_LOW_RPE_BONUS;
    }
    if days_since_last >= c::RECOVERY_RESTED_DAYS {
        score += c::RECOVERY_RESTED_BONUS;
    } else if days_since_last == 0 {
        score -= c::RECOVERY_SAME_DAY_PENALTY;
    }
    score
}

/// Score a check-in into a 0-100 readiness composite.
///
/// Pure: the same check-in always scores identically. Missing inputs take
/// neutral defaults (7 h sleep, rating 3, RPE 7, 1 rest day).
#[must_use]
pub fn score_readiness(check_in: &ReadinessCheckIn, weights: &ReadinessWeights) -> ReadinessScore {
    let sleep_hours = check_in.sleep_hours.unwrap_or(c::DEFAULT_SLEEP_HOURS);
    let sleep_quality = check_in.sleep_quality.unwrap_or(c::DEFAULT_RATING);
    let stress = check_in.stress.unwrap_or(c::DEFAULT_RATING);
    let nutrition = check_in.nutrition.unwrap_or(c::DEFAULT_RATING);
    let previous_rpe = check_in
        .previous_session_rpe
        .unwrap_or(c::DEFAULT_PREVIOUS_RPE);
    let days_since_last = check_in
        .days_since_last_session
        .unwrap_or(c::DEFAULT_DAYS_SINCE_SESSION);

    let components = ReadinessComponents {
        sleep: sleep_score(sleep_hours, sleep_quality),
        stress: (6.0 - clamp_rating(stress)) * c::RATING_SCALE_STEP,
        nutrition: clamp_rating(nutrition) * c::RATING_SCALE_STEP,
        recovery: recovery_score(previous_rpe, days_since_last),
    };

    let weighted = components.sleep * weights.sleep
        + components.stress * weights.stress
        + components.nutrition * weights.nutrition
        + components.recovery * weights.recovery;
    let score = weighted.clamp(0.0, 100.0).round();

    ReadinessScore {
        score,
        level: ReadinessLevel::from_score(score),
        components,
    }
}
