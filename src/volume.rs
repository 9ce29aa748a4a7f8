// ABOUTME: Weekly per-muscle volume aggregation and landmark classification
// ABOUTME: Direct/indirect set accounting with warm-up exclusion and secondary-credit splitting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Volume calculator and classifier.
//!
//! Aggregates a week's completed working sets into per-muscle direct and
//! indirect counts, then classifies each total against that muscle's
//! MEV/MAV/MRV landmarks. The whole path is pure and idempotent: snapshots
//! are always rederived from the current set logs, never mutated in place.

use crate::constants::volume::{
    OPTIMAL_LOWER_MAV_FACTOR, OPTIMAL_UPPER_MAV_FACTOR, SECONDARY_CREDIT_FACTOR,
};
use crate::landmarks::{LandmarkTable, VolumeLandmarks};
use crate::models::ExerciseWeek;
use crate::muscles::{resolve_muscle_label, MuscleGroup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification of a muscle's weekly volume against its landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeStatus {
    /// Under the minimum effective dose
    BelowMev,
    /// Effective but with adaptive headroom
    Effective,
    /// In the optimal band around MAV
    Optimal,
    /// Above the adaptive ceiling, nearing the recoverable limit
    ApproachingMrv,
    /// Beyond the recoverable limit
    ExceedingMrv,
}

/// Computed weekly volume snapshot for one muscle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMuscleVolume {
    /// Working sets where this muscle was the primary mover
    pub direct_sets: f64,
    /// Rounded secondary-credit sets
    pub indirect_sets: f64,
    /// `direct_sets + indirect_sets`
    pub total_sets: f64,
    /// Landmarks the total was classified against
    pub landmarks: VolumeLandmarks,
    /// Classification of `total_sets`
    pub status: VolumeStatus,
    /// `round(100 * total_sets / mrv)`, 0 when MRV is not positive
    pub percent_of_mrv: f64,
}

/// Classify a weekly set total against a muscle's landmarks.
///
/// Pure and monotonic in `total_sets`. Callers pass a validated triple;
/// the bands are `< mev`, `[mev, 0.8*mav)`, `[0.8*mav, 1.1*mav]`,
/// `(1.1*mav, mrv]`, `> mrv`.
#[must_use]
pub fn classify_volume(total_sets: f64, landmarks: &VolumeLandmarks) -> VolumeStatus {
    if total_sets < landmarks.mev {
        VolumeStatus::BelowMev
    } else if total_sets < landmarks.mav * OPTIMAL_LOWER_MAV_FACTOR {
        VolumeStatus::Effective
    } else if total_sets <= landmarks.mav * OPTIMAL_UPPER_MAV_FACTOR {
        VolumeStatus::Optimal
    } else if total_sets <= landmarks.mrv {
        VolumeStatus::ApproachingMrv
    } else {
        VolumeStatus::ExceedingMrv
    }
}

/// Percent of MRV used, rounded. A non-positive MRV yields 0 rather than a
/// division error.
#[must_use]
pub fn percent_of_mrv(total_sets: f64, landmarks: &VolumeLandmarks) -> f64 {
    if landmarks.mrv <= 0.0 {
        return 0.0;
    }
    (100.0 * total_sets / landmarks.mrv).round()
}

/// Aggregate a week of logged exercises into per-muscle volume snapshots.
///
/// Every canonical muscle appears in the output, zeroed if untrained.
/// Warm-up sets are excluded. Primary credit is the full working-set count,
/// undivided, to every group the primary label resolves to. Each secondary
/// label contributes a total of `0.5 * n` sets split across its expansion;
/// per-exercise secondary credit is accumulated per group and rounded once,
/// and groups already credited as primary on that exercise are skipped.
#[must_use]
pub fn calculate_weekly_volume(
    entries: &[ExerciseWeek],
    landmarks: &LandmarkTable,
) -> BTreeMap<MuscleGroup, WeeklyMuscleVolume> {
    let mut direct: BTreeMap<MuscleGroup, f64> = BTreeMap::new();
    let mut indirect: BTreeMap<MuscleGroup, f64> = BTreeMap::new();

    for entry in entries {
        let working_sets = entry.sets.iter().filter(|s| !s.is_warmup).count() as f64;
        if working_sets <= 0.0 {
            continue;
        }

        let primary_groups: Vec<MuscleGroup> = resolve_muscle_label(&entry.meta.primary_muscle)
            .into_iter()
            .map(|credit| credit.group)
            .collect();
        for &group in &primary_groups {
            *direct.entry(group).or_insert(0.0) += working_sets;
        }

        // Accumulate raw secondary credit per group across every secondary
        // label on this exercise, then round once per group.
        let mut secondary_credit: BTreeMap<MuscleGroup, f64> = BTreeMap::new();
        for label in &entry.meta.secondary_muscles {
            for credit in resolve_muscle_label(label) {
                if primary_groups.contains(&credit.group) {
                    continue;
                }
                *secondary_credit.entry(credit.group).or_insert(0.0) +=
                    SECONDARY_CREDIT_FACTOR * working_sets * credit.weight;
            }
        }
        for (group, credit) in secondary_credit {
            *indirect.entry(group).or_insert(0.0) += credit.round();
        }
    }

    MuscleGroup::ALL
        .into_iter()
        .map(|muscle| {
            let muscle_landmarks = landmarks.get(muscle);
            let direct_sets = direct.get(&muscle).copied().unwrap_or(0.0);
            let indirect_sets = indirect.get(&muscle).copied().unwrap_or(0.0);
            let total_sets = direct_sets + indirect_sets;
            let snapshot = WeeklyMuscleVolume {
                direct_sets,
                indirect_sets,
                total_sets,
                landmarks: muscle_landmarks,
                status: classify_volume(total_sets, &muscle_landmarks),
                percent_of_mrv: percent_of_mrv(total_sets, &muscle_landmarks),
            };
            (muscle, snapshot)
        })
        .collect()
}

/// Aggregate statistics over a weekly volume map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeSummary {
    /// Sum of every muscle's total sets
    pub total_weekly_sets: f64,
    /// Muscles classified below MEV
    pub muscles_below_mev: usize,
    /// Muscles classified beyond MRV
    pub muscles_exceeding_mrv: usize,
    /// Mean percent-of-MRV across muscles, 0 for an empty map
    pub average_percent_of_mrv: f64,
}

/// Summarize a weekly volume map. An empty map yields zeros, not NaN.
#[must_use]
pub fn summarize_volume(volumes: &BTreeMap<MuscleGroup, WeeklyMuscleVolume>) -> VolumeSummary {
    if volumes.is_empty() {
        return VolumeSummary {
            total_weekly_sets: 0.0,
            muscles_below_mev: 0,
            muscles_exceeding_mrv: 0,
            average_percent_of_mrv: 0.0,
        };
    }

    let total_weekly_sets = volumes.values().map(|v| v.total_sets).sum();
    let muscles_below_mev = volumes
        .values()
        .filter(|v| v.status == VolumeStatus::BelowMev)
        .count();
    let muscles_exceeding_mrv = volumes
        .values()
        .filter(|v| v.status == VolumeStatus::ExceedingMrv)
        .count();
    let average_percent_of_mrv =
        volumes.values().map(|v| v.percent_of_mrv).sum::<f64>() / volumes.len() as f64;

    VolumeSummary {
        total_weekly_sets,
        muscles_below_mev,
        muscles_exceeding_mrv,
        average_percent_of_mrv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseMeta, MovementType, SetLog};

    fn exercise(primary: &str, secondaries: &[&str], sets: Vec<SetLog>) -> ExerciseWeek {
        ExerciseWeek {
            meta: ExerciseMeta {
                name: "test exercise".to_owned(),
                primary_muscle: primary.to_owned(),
                secondary_muscles: secondaries.iter().map(|&s| s.to_owned()).collect(),
                movement: MovementType::Compound,
                min_weight_increment_kg: 2.5,
            },
            sets,
        }
    }

    fn working_sets(n: usize) -> Vec<SetLog> {
        (0..n).map(|_| SetLog::working(8, 100.0, 8.0)).collect()
    }

    #[test]
    fn test_classification_bands() {
        let landmarks = VolumeLandmarks::new(10.0, 16.0, 22.0);
        assert_eq!(classify_volume(9.0, &landmarks), VolumeStatus::BelowMev);
        assert_eq!(classify_volume(10.0, &landmarks), VolumeStatus::Effective);
        assert_eq!(classify_volume(14.0, &landmarks), VolumeStatus::Optimal);
        assert_eq!(
            classify_volume(18.0, &landmarks),
            VolumeStatus::ApproachingMrv
        );
        assert_eq!(classify_volume(23.0, &landmarks), VolumeStatus::ExceedingMrv);
    }

    #[test]
    fn test_percent_of_mrv_guards_zero_mrv() {
        let degenerate = VolumeLandmarks {
            mev: 0.0,
            mav: 0.0,
            mrv: 0.0,
        };
        assert!((percent_of_mrv(10.0, &degenerate) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_warmups_never_count() {
        let mut sets = working_sets(3);
        sets.push(SetLog {
            is_warmup: true,
            ..SetLog::working(10, 60.0, 4.0)
        });
        sets.push(SetLog {
            is_warmup: true,
            ..SetLog::working(10, 80.0, 5.0)
        });
        let entries = vec![exercise("chest", &[], sets)];
        let volumes = calculate_weekly_volume(&entries, &LandmarkTable::default());
        let chest = &volumes[&MuscleGroup::Chest];
        assert!((chest.total_sets - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_secondary_credit_split() {
        // 4 working sets, primary chest, secondaries triceps + front delts:
        // each secondary earns 0.5 * 4 = 2 indirect sets.
        let entries = vec![exercise(
            "chest",
            &["triceps", "front_delts"],
            working_sets(4),
        )];
        let volumes = calculate_weekly_volume(&entries, &LandmarkTable::default());
        assert!((volumes[&MuscleGroup::Chest].direct_sets - 4.0).abs() < f64::EPSILON);
        assert!((volumes[&MuscleGroup::Triceps].indirect_sets - 2.0).abs() < f64::EPSILON);
        assert!((volumes[&MuscleGroup::FrontDelts].indirect_sets - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_secondary_overlapping_primary_is_skipped() {
        let entries = vec![exercise("chest", &["chest", "triceps"], working_sets(4))];
        let volumes = calculate_weekly_volume(&entries, &LandmarkTable::default());
        let chest = &volumes[&MuscleGroup::Chest];
        assert!((chest.direct_sets - 4.0).abs() < f64::EPSILON);
        assert!((chest.indirect_sets - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_legacy_secondary_rounds_accumulated_credit_once() {
        // Secondary "legs" expands to four groups; 0.5 * 4 sets split four
        // ways is 0.5 per group, rounded once per group to 1.
        let entries = vec![exercise("lower_back", &["legs"], working_sets(4))];
        let volumes = calculate_weekly_volume(&entries, &LandmarkTable::default());
        assert!((volumes[&MuscleGroup::Quads].indirect_sets - 1.0).abs() < f64::EPSILON);
        assert!((volumes[&MuscleGroup::Calves].indirect_sets - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_is_direct_plus_indirect_everywhere() {
        let entries = vec![
            exercise("chest", &["triceps", "shoulders"], working_sets(5)),
            exercise("back", &["biceps", "rear_delts"], working_sets(6)),
            exercise("quads", &["glutes"], working_sets(4)),
        ];
        let volumes = calculate_weekly_volume(&entries, &LandmarkTable::default());
        for snapshot in volumes.values() {
            assert!(
                (snapshot.total_sets - (snapshot.direct_sets + snapshot.indirect_sets)).abs()
                    < f64::EPSILON
            );
        }
    }

    #[test]
    fn test_unknown_primary_drops_silently() {
        let entries = vec![exercise("mystery_muscle", &[], working_sets(3))];
        let volumes = calculate_weekly_volume(&entries, &LandmarkTable::default());
        let summary = summarize_volume(&volumes);
        assert!((summary.total_weekly_sets - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_summary_is_zeroed() {
        let summary = summarize_volume(&BTreeMap::new());
        assert!((summary.average_percent_of_mrv - 0.0).abs() < f64::EPSILON);
        assert_eq!(summary.muscles_below_mev, 0);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let entries = vec![exercise("hamstrings", &["glutes", "lower_back"], working_sets(4))];
        let table = LandmarkTable::default();
        let first = calculate_weekly_volume(&entries, &table);
        let second = calculate_weekly_volume(&entries, &table);
        for (muscle, snapshot) in &first {
            assert!((snapshot.total_sets - second[muscle].total_sets).abs() < f64::EPSILON);
        }
    }
}
