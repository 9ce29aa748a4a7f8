// ABOUTME: Deload decision ladder over fatigue, schedule, completion, and RPE drift
// ABOUTME: Stateless first-match evaluation producing an ephemeral deload signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Deload decision engine.
//!
//! A stateless decision over a finite evaluation window: given the
//! mesocycle schedule, the current fatigue score, and recent session
//! history, decide whether a recovery week is warranted. Conditions are
//! evaluated in priority order and the first match wins. The mesocycle
//! itself transitions state (`active -> deload -> active`) externally on
//! receiving the signal; it is never persisted directly.

use crate::config::DeloadThresholds;
use crate::models::SessionSummary;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How urgently the deload should be scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeloadUrgency {
    /// No deload needed
    Low,
    /// Planned or trend-driven deload
    Medium,
    /// Fatigue- or failure-driven deload, act now
    High,
}

/// Ephemeral deload decision, consumed to transition mesocycle state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeloadSignal {
    /// Whether a deload is warranted
    pub should_deload: bool,
    /// Which condition fired, with the triggering values
    pub reason: String,
    /// Scheduling urgency
    pub urgency: DeloadUrgency,
}

/// Everything the decision ladder looks at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeloadInputs {
    /// Current week index within the mesocycle
    pub current_week: u32,
    /// Week index the mesocycle plan schedules a deload for
    pub scheduled_deload_week: u32,
    /// Current rolling fatigue score, 0-100
    pub fatigue_score: f64,
    /// Lookback window of completed sessions, ordered oldest first
    pub recent_sessions: Vec<SessionSummary>,
}

fn mean_rpe(sessions: &[SessionSummary]) -> f64 {
    if sessions.is_empty() {
        return 0.0;
    }
    sessions.iter().map(|s| s.average_rpe).sum::<f64>() / sessions.len() as f64
}

/// Evaluate the deload ladder, first match wins:
/// scheduled week (medium), fatigue threshold (high), a streak of
/// incomplete sessions (high), RPE drift across the window (medium),
/// otherwise no deload (low).
#[must_use]
pub fn evaluate_deload(inputs: &DeloadInputs, thresholds: &DeloadThresholds) -> DeloadSignal {
    if inputs.current_week == inputs.scheduled_deload_week {
        return signal(
            true,
            format!(
                "scheduled deload week {} reached",
                inputs.scheduled_deload_week
            ),
            DeloadUrgency::Medium,
        );
    }

    if inputs.fatigue_score >= thresholds.fatigue_threshold {
        return signal(
            true,
            format!(
                "fatigue score {:.0} at or above threshold {:.0}",
                inputs.fatigue_score, thresholds.fatigue_threshold
            ),
            DeloadUrgency::High,
        );
    }

    let streak = thresholds.low_completion_streak;
    if inputs.recent_sessions.len() >= streak {
        let tail = &inputs.recent_sessions[inputs.recent_sessions.len() - streak..];
        if tail
            .iter()
            .all(|s| s.completion_percent < thresholds.low_completion_threshold)
        {
            return signal(
                true,
                format!(
                    "last {streak} sessions all under {:.0}% completion",
                    thresholds.low_completion_threshold
                ),
                DeloadUrgency::High,
            );
        }
    }

    let sample = thresholds.rpe_drift_sample;
    if inputs.recent_sessions.len() >= thresholds.rpe_drift_min_sessions {
        let earliest = mean_rpe(&inputs.recent_sessions[..sample]);
        let latest = mean_rpe(&inputs.recent_sessions[inputs.recent_sessions.len() - sample..]);
        let drift = latest - earliest;
        if drift >= thresholds.rpe_drift_threshold {
            return signal(
                true,
                format!(
                    "average RPE drifted up {drift:.1} (from {earliest:.1} to {latest:.1})"
                ),
                DeloadUrgency::Medium,
            );
        }
    }

    signal(
        false,
        "no deload condition met".to_owned(),
        DeloadUrgency::Low,
    )
}

fn signal(should_deload: bool, reason: String, urgency: DeloadUrgency) -> DeloadSignal {
    debug!(should_deload, urgency = ?urgency, %reason, "deload evaluation");
    DeloadSignal {
        should_deload,
        reason,
        urgency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn session(average_rpe: f64, completion_percent: f64) -> SessionSummary {
        SessionSummary {
            session_id: Uuid::new_v4(),
            ended_at: Utc::now(),
            average_rpe,
            completion_percent,
            days_since_previous: 1,
        }
    }

    fn inputs(fatigue: f64, sessions: Vec<SessionSummary>) -> DeloadInputs {
        DeloadInputs {
            current_week: 2,
            scheduled_deload_week: 5,
            fatigue_score: fatigue,
            recent_sessions: sessions,
        }
    }

    #[test]
    fn test_scheduled_week_wins_first() {
        let mut input = inputs(90.0, vec![]);
        input.current_week = 5;
        let decision = evaluate_deload(&input, &DeloadThresholds::default());
        assert!(decision.should_deload);
        assert_eq!(decision.urgency, DeloadUrgency::Medium);
        assert!(decision.reason.contains("scheduled"));
    }

    #[test]
    fn test_fatigue_threshold_is_inclusive() {
        let at = evaluate_deload(&inputs(75.0, vec![]), &DeloadThresholds::default());
        assert!(at.should_deload);
        assert_eq!(at.urgency, DeloadUrgency::High);

        let below = evaluate_deload(&inputs(74.0, vec![]), &DeloadThresholds::default());
        assert!(!below.should_deload);
        assert_eq!(below.urgency, DeloadUrgency::Low);
    }

    #[test]
    fn test_completion_streak_triggers() {
        let sessions = vec![
            session(8.0, 95.0),
            session(8.0, 70.0),
            session(8.5, 75.0),
            session(9.0, 60.0),
        ];
        let decision = evaluate_deload(&inputs(40.0, sessions), &DeloadThresholds::default());
        assert!(decision.should_deload);
        assert_eq!(decision.urgency, DeloadUrgency::High);
        assert!(decision.reason.contains("completion"));
    }

    #[test]
    fn test_one_good_session_breaks_the_streak() {
        let sessions = vec![session(8.0, 70.0), session(8.0, 92.0), session(8.0, 75.0)];
        let decision = evaluate_deload(&inputs(40.0, sessions), &DeloadThresholds::default());
        assert!(!decision.should_deload);
    }

    #[test]
    fn test_rpe_drift_triggers_with_enough_history() {
        let sessions = vec![
            session(7.0, 95.0),
            session(7.0, 95.0),
            session(7.0, 95.0),
            session(8.5, 95.0),
            session(8.5, 95.0),
            session(8.5, 95.0),
        ];
        let decision = evaluate_deload(&inputs(40.0, sessions), &DeloadThresholds::default());
        assert!(decision.should_deload);
        assert_eq!(decision.urgency, DeloadUrgency::Medium);
        assert!(decision.reason.contains("RPE"));
    }

    #[test]
    fn test_rpe_drift_needs_minimum_sessions() {
        let sessions = vec![
            session(7.0, 95.0),
            session(7.0, 95.0),
            session(9.0, 95.0),
            session(9.0, 95.0),
            session(9.0, 95.0),
        ];
        let decision = evaluate_deload(&inputs(40.0, sessions), &DeloadThresholds::default());
        assert!(!decision.should_deload);
    }
}
