// ABOUTME: Weekly volume recommendations from per-muscle landmark status
// ABOUTME: Maps status to action and target set range, sorted by fixed severity order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Volume recommendation generator.
//!
//! Turns classified weekly volume into a per-muscle action (`increase`,
//! `maintain`, `decrease`), a target set range for next week, and a short
//! message. During a scheduled deload week every muscle is forced down to
//! a recovery range regardless of measured status. Recommendations are
//! sorted by a fixed severity order so the most urgent corrections surface
//! first, not whichever muscle sorts first alphabetically.

use crate::constants::volume::{
    DELOAD_MEV_FACTOR, MAINTAIN_LOWER_MAV_FACTOR, OPTIMAL_UPPER_MAV_FACTOR,
};
use crate::muscles::MuscleGroup;
use crate::volume::{VolumeStatus, WeeklyMuscleVolume};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recommended direction for next week's volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeAction {
    /// Add weekly sets
    Increase,
    /// Volume is in the optimal band; hold it there
    Optimal,
    /// Hold volume, no further increases
    Maintain,
    /// Remove weekly sets
    Decrease,
}

/// One muscle's volume recommendation for the coming week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRecommendation {
    /// Muscle the recommendation applies to
    pub muscle: MuscleGroup,
    /// Status that produced the recommendation
    pub status: VolumeStatus,
    /// Recommended direction
    pub action: VolumeAction,
    /// This week's measured total sets
    pub current_sets: f64,
    /// Lower bound of the target weekly set range
    pub target_min: f64,
    /// Upper bound of the target weekly set range
    pub target_max: f64,
    /// Human-readable explanation
    pub message: String,
}

/// Fixed severity order for sorting: most urgent corrective action first.
/// Heuristic ordering preserved as data, not re-derived.
const SEVERITY_ORDER: [VolumeStatus; 5] = [
    VolumeStatus::ExceedingMrv,
    VolumeStatus::BelowMev,
    VolumeStatus::ApproachingMrv,
    VolumeStatus::Effective,
    VolumeStatus::Optimal,
];

fn severity_rank(status: VolumeStatus) -> usize {
    SEVERITY_ORDER
        .iter()
        .position(|&s| s == status)
        .unwrap_or(SEVERITY_ORDER.len())
}

fn recommend_for_muscle(
    muscle: MuscleGroup,
    snapshot: &WeeklyMuscleVolume,
    week_in_meso: u32,
) -> VolumeRecommendation {
    let landmarks = snapshot.landmarks;
    let current = snapshot.total_sets;

    let (action, target_min, target_max, message) = match snapshot.status {
        VolumeStatus::BelowMev => {
            let deficit = landmarks.mev - current;
            (
                VolumeAction::Increase,
                landmarks.mev,
                landmarks.mav,
                format!(
                    "{muscle} is {deficit:.0} sets below minimum effective volume; bring it up to at least {:.0} weekly sets",
                    landmarks.mev
                ),
            )
        }
        VolumeStatus::Effective => {
            // Linear ramp tied to mesocycle progression: nudge the floor up
            // each week without overshooting MAV.
            let ramp_floor = (current + f64::from(week_in_meso)).min(landmarks.mav);
            (
                VolumeAction::Increase,
                ramp_floor,
                landmarks.mav,
                format!(
                    "{muscle} volume is effective with room to adapt; progress toward {:.0} weekly sets",
                    landmarks.mav
                ),
            )
        }
        VolumeStatus::Optimal => (
            VolumeAction::Optimal,
            (landmarks.mav * MAINTAIN_LOWER_MAV_FACTOR).round(),
            (landmarks.mav * OPTIMAL_UPPER_MAV_FACTOR).round(),
            format!("{muscle} volume is in the optimal band; keep doing what you are doing"),
        ),
        VolumeStatus::ApproachingMrv => (
            VolumeAction::Maintain,
            landmarks.mav,
            landmarks.mrv,
            format!(
                "{muscle} volume is approaching the recoverable limit of {:.0} sets; hold, do not add more",
                landmarks.mrv
            ),
        ),
        VolumeStatus::ExceedingMrv => {
            let excess = current - landmarks.mrv;
            (
                VolumeAction::Decrease,
                landmarks.mav,
                landmarks.mrv,
                format!(
                    "{muscle} is {excess:.0} sets over maximum recoverable volume; cut back below {:.0} weekly sets",
                    landmarks.mrv
                ),
            )
        }
    };

    VolumeRecommendation {
        muscle,
        status: snapshot.status,
        action,
        current_sets: current,
        target_min,
        target_max,
        message,
    }
}

fn deload_recommendation(muscle: MuscleGroup, snapshot: &WeeklyMuscleVolume) -> VolumeRecommendation {
    let landmarks = snapshot.landmarks;
    VolumeRecommendation {
        muscle,
        status: snapshot.status,
        action: VolumeAction::Decrease,
        current_sets: snapshot.total_sets,
        target_min: (landmarks.mev * DELOAD_MEV_FACTOR).floor(),
        target_max: landmarks.mev,
        message: format!(
            "deload week: keep {muscle} between {:.0} and {:.0} easy sets",
            (landmarks.mev * DELOAD_MEV_FACTOR).floor(),
            landmarks.mev
        ),
    }
}

/// Generate priority-sorted volume recommendations for the coming week.
///
/// `week_in_meso` feeds the effective-status ramp; `is_deload_week` forces
/// every muscle's action to `decrease` with a `[floor(0.5 * mev), mev]`
/// range regardless of measured status.
#[must_use]
pub fn generate_volume_recommendations(
    volumes: &BTreeMap<MuscleGroup, WeeklyMuscleVolume>,
    week_in_meso: u32,
    is_deload_week: bool,
) -> Vec<VolumeRecommendation> {
    let mut recommendations: Vec<VolumeRecommendation> = volumes
        .iter()
        .map(|(&muscle, snapshot)| {
            if is_deload_week {
                deload_recommendation(muscle, snapshot)
            } else {
                recommend_for_muscle(muscle, snapshot, week_in_meso)
            }
        })
        .collect();

    // Stable sort: severity class first, muscle order within a class.
    recommendations.sort_by_key(|r| severity_rank(r.status));
    recommendations
}
