// ABOUTME: Rolling fatigue accumulator with apply-once session updates and rest-day decay
// ABOUTME: Versioned per-mesocycle scalar on a 0-100 scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Fatigue accumulator.
//!
//! One mutable scalar per mesocycle: each completed session adds
//! RPE-dependent accumulation and subtracts rest-day recovery, clamped to
//! 0-100. Unlike weekly volume, this state is never recomputed from
//! scratch; it is a read-modify-write accumulator, so the update is keyed
//! by session identity and applied exactly once. Concurrent updates for
//! the same mesocycle must be serialized by the caller (single writer or
//! optimistic versioning via the `version` counter).

use crate::constants::fatigue as c;
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Qualitative fatigue band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatigueLevel {
    /// Under 30: fully recovered
    Fresh,
    /// 30-54: normal training fatigue
    Moderate,
    /// 55-74: accumulating, monitor closely
    High,
    /// 75+: deload territory
    Severe,
}

impl FatigueLevel {
    /// Band for a 0-100 fatigue score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < c::FRESH_UPPER_BOUND {
            Self::Fresh
        } else if score < c::MODERATE_UPPER_BOUND {
            Self::Moderate
        } else if score < c::HIGH_UPPER_BOUND {
            Self::High
        } else {
            Self::Severe
        }
    }
}

/// Versioned rolling fatigue state for one mesocycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueState {
    /// Mesocycle this state belongs to
    pub mesocycle_id: Uuid,
    /// Rolling fatigue scalar, 0-100
    pub fatigue_score: f64,
    /// Bumped on every applied update; supports optimistic concurrency
    pub version: u64,
    /// Most recently applied session
    pub last_applied_session: Option<Uuid>,
    /// Sessions already counted; the apply-once guard
    pub applied_sessions: HashSet<Uuid>,
}

impl FatigueState {
    /// Fresh state for a new mesocycle
    #[must_use]
    pub fn new(mesocycle_id: Uuid) -> Self {
        Self {
            mesocycle_id,
            fatigue_score: 0.0,
            version: 0,
            last_applied_session: None,
            applied_sessions: HashSet::new(),
        }
    }

    /// Apply one completed session's fatigue update.
    ///
    /// `new = clamp(current - days_since_last * 3 + accumulation(rpe), 0, 100)`.
    /// Returns the updated score and bumps `version`.
    ///
    /// # Errors
    /// Returns `EngineError::DuplicateSessionUpdate` if this session was
    /// already counted; the state is left untouched, since reapplying
    /// would double-count accumulation.
    pub fn apply_session(
        &mut self,
        session_id: Uuid,
        session_rpe: f64,
        days_since_last: u32,
    ) -> EngineResult<f64> {
        if self.applied_sessions.contains(&session_id) {
            return Err(EngineError::DuplicateSessionUpdate { session_id });
        }

        let recovery = f64::from(days_since_last) * c::RECOVERY_PER_REST_DAY;
        let accumulation = accumulation_for_rpe(session_rpe);
        self.fatigue_score = (self.fatigue_score - recovery + accumulation)
            .clamp(c::MIN_FATIGUE, c::MAX_FATIGUE);
        self.version += 1;
        self.last_applied_session = Some(session_id);
        self.applied_sessions.insert(session_id);

        debug!(
            mesocycle = %self.mesocycle_id,
            session = %session_id,
            recovery,
            accumulation,
            fatigue = self.fatigue_score,
            "applied session fatigue update"
        );
        Ok(self.fatigue_score)
    }

    /// Qualitative band for the current score
    #[must_use]
    pub fn level(&self) -> FatigueLevel {
        FatigueLevel::from_score(self.fatigue_score)
    }
}

/// Fatigue accumulation for a session, keyed by rounded RPE.
/// RPE outside the 5-10 table falls back to `rpe * 1.2`.
#[must_use]
pub fn accumulation_for_rpe(session_rpe: f64) -> f64 {
    let rounded = session_rpe.round();
    if (0.0..=255.0).contains(&rounded) {
        let key = rounded as u8;
        if let Some(&(_, points)) = c::ACCUMULATION_BY_RPE.iter().find(|&&(rpe, _)| rpe == key) {
            return points;
        }
    }
    session_rpe.max(0.0) * c::OUT_OF_RANGE_RPE_FACTOR
}

/// Forecast fatigue after `rest_days` with no sessions:
/// `max(0, current - 3 * rest_days)`. Pure; does not touch stored state.
#[must_use]
pub fn decay_fatigue(current: f64, rest_days: u32) -> f64 {
    (current - f64::from(rest_days) * c::RECOVERY_PER_REST_DAY).max(c::MIN_FATIGUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulation_table() {
        assert!((accumulation_for_rpe(5.0) - 2.0).abs() < f64::EPSILON);
        assert!((accumulation_for_rpe(7.4) - 6.0).abs() < f64::EPSILON);
        assert!((accumulation_for_rpe(10.0) - 14.0).abs() < f64::EPSILON);
        // Outside the table: rpe * 1.2
        assert!((accumulation_for_rpe(4.0) - 4.8).abs() < 1e-9);
        assert!((accumulation_for_rpe(12.0) - 14.4).abs() < 1e-9);
    }

    #[test]
    fn test_hard_same_day_session_raises_fatigue() {
        let mut state = FatigueState::new(Uuid::new_v4());
        state.fatigue_score = 40.0;
        let updated = state.apply_session(Uuid::new_v4(), 10.0, 0).unwrap();
        assert!(updated > 40.0);
        assert!((updated - 54.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rest_days_offset_accumulation() {
        let mut state = FatigueState::new(Uuid::new_v4());
        state.fatigue_score = 50.0;
        // 2 rest days (-6) + RPE 7 session (+6) nets to zero
        let updated = state.apply_session(Uuid::new_v4(), 7.0, 2).unwrap();
        assert!((updated - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_clamped_to_scale() {
        let mut state = FatigueState::new(Uuid::new_v4());
        state.fatigue_score = 95.0;
        let updated = state.apply_session(Uuid::new_v4(), 10.0, 0).unwrap();
        assert!((updated - 100.0).abs() < f64::EPSILON);

        let mut fresh = FatigueState::new(Uuid::new_v4());
        fresh.fatigue_score = 2.0;
        let updated = fresh.apply_session(Uuid::new_v4(), 5.0, 7).unwrap();
        assert!((updated - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duplicate_session_is_rejected_without_mutation() {
        let mut state = FatigueState::new(Uuid::new_v4());
        let session = Uuid::new_v4();
        state.apply_session(session, 8.0, 1).unwrap();
        let score_after_first = state.fatigue_score;
        let version_after_first = state.version;

        let err = state.apply_session(session, 8.0, 1);
        assert!(matches!(
            err,
            Err(EngineError::DuplicateSessionUpdate { .. })
        ));
        assert!((state.fatigue_score - score_after_first).abs() < f64::EPSILON);
        assert_eq!(state.version, version_after_first);
    }

    #[test]
    fn test_decay_over_a_week() {
        assert!((decay_fatigue(60.0, 7) - 39.0).abs() < f64::EPSILON);
        assert!((decay_fatigue(10.0, 7) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_level_bands() {
        assert_eq!(FatigueLevel::from_score(10.0), FatigueLevel::Fresh);
        assert_eq!(FatigueLevel::from_score(40.0), FatigueLevel::Moderate);
        assert_eq!(FatigueLevel::from_score(60.0), FatigueLevel::High);
        assert_eq!(FatigueLevel::from_score(75.0), FatigueLevel::Severe);
    }
}
