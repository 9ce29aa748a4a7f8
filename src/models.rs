// ABOUTME: Shared input records consumed by the training load engine
// ABOUTME: Set logs, exercise metadata, training experience, and session summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Shared input records.
//!
//! These are the leaf types the surrounding planner hands to the engine:
//! immutable set logs, read-only exercise metadata, and per-session history
//! summaries. All engine outputs are rederivable from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One performed set. Immutable once logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLog {
    /// Repetitions performed
    pub reps: u32,
    /// Load on the bar (kg)
    pub weight_kg: f64,
    /// Subjective effort, RPE 1-10
    pub rpe: f64,
    /// Warm-up sets are excluded from all volume math
    pub is_warmup: bool,
    /// Rest taken after the set (seconds)
    pub rest_seconds: u32,
}

impl SetLog {
    /// A completed working set with default rest
    #[must_use]
    pub fn working(reps: u32, weight_kg: f64, rpe: f64) -> Self {
        Self {
            reps,
            weight_kg,
            rpe,
            is_warmup: false,
            rest_seconds: 120,
        }
    }
}

/// Movement classification for an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Multi-joint movement
    Compound,
    /// Single-joint movement
    Isolation,
}

/// Read-only exercise metadata from the catalog.
///
/// Muscle labels are raw strings in whichever vocabulary the catalog entry
/// was authored in (canonical, legacy coarse, or fine-grained); the muscle
/// resolver maps them to canonical groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseMeta {
    /// Display name
    pub name: String,
    /// Primary muscle label
    pub primary_muscle: String,
    /// Secondary muscle labels
    pub secondary_muscles: Vec<String>,
    /// Compound or isolation
    pub movement: MovementType,
    /// Smallest loading increment for this exercise (kg)
    pub min_weight_increment_kg: f64,
}

/// One exercise's logged sets for the week under aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseWeek {
    /// Catalog metadata for the exercise
    pub meta: ExerciseMeta,
    /// Every set logged for it this week, warm-ups included
    pub sets: Vec<SetLog>,
}

/// Training experience tier used to key the landmark table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingExperience {
    /// Under ~1 year of consistent training
    Beginner,
    /// Roughly 1-3 years
    #[default]
    Intermediate,
    /// 3+ years
    Advanced,
}

/// Completed-session summary consumed by the fatigue accumulator and the
/// deload decision engine. Ordered oldest-first in history slices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session identity, the apply-once key for fatigue updates
    pub session_id: Uuid,
    /// When the session ended
    pub ended_at: DateTime<Utc>,
    /// Mean RPE across the session's working sets
    pub average_rpe: f64,
    /// Prescribed work actually completed, 0-100
    pub completion_percent: f64,
    /// Full rest days since the previous session (0 = same-day repeat)
    pub days_since_previous: u32,
}
