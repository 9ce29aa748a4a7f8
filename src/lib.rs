// ABOUTME: Adaptive training load engine for resistance-training planning
// ABOUTME: Pure volume/readiness/fatigue/deload calculations, no I/O, no persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! # Rackline Training Load Engine
//!
//! Deterministic, side-effect-free calculation modules for a personal
//! resistance-training planner:
//!
//! - [`muscles`] resolves catalog muscle labels to canonical groups
//! - [`volume`] aggregates logged sets into per-muscle weekly volume and
//!   classifies it against MEV/MAV/MRV landmarks ([`landmarks`])
//! - [`recommendations`] turns classified volume into next-week targets
//! - [`readiness`] scores subjective check-ins 0-100
//! - [`fatigue`] accumulates a rolling per-mesocycle fatigue scalar
//! - [`deload`] decides when a recovery week is warranted
//! - [`progression`] rewrites prescribed targets for the readiness score
//!
//! Everything is pure and synchronous. Recomputing volume or readiness
//! from the same inputs always yields the same result; the one piece of
//! genuinely mutable state, [`fatigue::FatigueState`], is a versioned
//! read-modify-write accumulator with apply-once semantics keyed by
//! session id. Persistence, locking, and retry policy belong to the
//! calling layer.

/// Tunable configuration with research-backed defaults
pub mod config;
/// Named training science constants and lookup tables
pub mod constants;
/// Deload decision engine
pub mod deload;
/// Engine error types
pub mod errors;
/// Rolling fatigue accumulator
pub mod fatigue;
/// MEV/MAV/MRV landmark tables
pub mod landmarks;
/// Shared input records
pub mod models;
/// Canonical muscle groups and label resolution
pub mod muscles;
/// Readiness-tiered target adjustment
pub mod progression;
/// Session readiness scoring
pub mod readiness;
/// Weekly volume recommendations
pub mod recommendations;
/// Weekly volume aggregation and classification
pub mod volume;

pub use config::{DeloadThresholds, EngineConfig, ReadinessWeights};
pub use deload::{evaluate_deload, DeloadInputs, DeloadSignal, DeloadUrgency};
pub use errors::{EngineError, EngineResult};
pub use fatigue::{accumulation_for_rpe, decay_fatigue, FatigueLevel, FatigueState};
pub use landmarks::{LandmarkTable, VolumeLandmarks};
pub use models::{
    ExerciseMeta, ExerciseWeek, MovementType, SessionSummary, SetLog, TrainingExperience,
};
pub use muscles::{resolve_muscle_label, MuscleCredit, MuscleGroup};
pub use progression::{adjust_targets, ProgressionTargets, ProgressionType};
pub use readiness::{
    score_readiness, ReadinessCheckIn, ReadinessComponents, ReadinessLevel, ReadinessScore,
};
pub use recommendations::{
    generate_volume_recommendations, VolumeAction, VolumeRecommendation,
};
pub use volume::{
    calculate_weekly_volume, classify_volume, percent_of_mrv, summarize_volume, VolumeStatus,
    VolumeSummary, WeeklyMuscleVolume,
};
