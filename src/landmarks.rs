// ABOUTME: Weekly volume landmarks (MEV/MAV/MRV) per muscle and training experience
// ABOUTME: Always-total lookup with validated fallback when a table entry is missing or malformed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Volume landmark tables.
//!
//! Landmarks are weekly set-count thresholds per muscle: MEV (minimum
//! effective), MAV (maximum adaptive), MRV (maximum recoverable). The
//! baseline table holds intermediate values; beginner and advanced tiers
//! scale it. Lookup is total: a missing or invariant-violating entry falls
//! back to a documented default triple rather than failing.
//!
//! References:
//! - Israetel, M., et al. (2017). Scientific Principles of Strength Training
//! - Schoenfeld, B.J., et al. (2017). Dose-response relationship between weekly
//!   resistance training volume and muscle hypertrophy.

use crate::constants::volume::DEFAULT_LANDMARKS;
use crate::models::TrainingExperience;
use crate::muscles::MuscleGroup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Per-muscle weekly set-count landmarks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeLandmarks {
    /// Minimum effective volume (weekly sets)
    pub mev: f64,
    /// Maximum adaptive volume (weekly sets)
    pub mav: f64,
    /// Maximum recoverable volume (weekly sets)
    pub mrv: f64,
}

impl VolumeLandmarks {
    /// Construct a landmark triple
    #[must_use]
    pub const fn new(mev: f64, mav: f64, mrv: f64) -> Self {
        Self { mev, mav, mrv }
    }

    /// The documented fallback triple used when a table entry is absent
    /// or malformed
    #[must_use]
    pub const fn fallback() -> Self {
        let (mev, mav, mrv) = DEFAULT_LANDMARKS;
        Self { mev, mav, mrv }
    }

    /// Whether `0 <= mev <= mav <= mrv` and `mrv > 0` hold
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.mev >= 0.0 && self.mev <= self.mav && self.mav <= self.mrv && self.mrv > 0.0
    }

    /// Return `self` if the ordering invariant holds, otherwise the
    /// fallback triple. Volume math never sees a malformed triple.
    #[must_use]
    pub fn validated(self) -> Self {
        if self.is_valid() {
            self
        } else {
            warn!(
                mev = self.mev,
                mav = self.mav,
                mrv = self.mrv,
                "invalid volume landmarks, substituting fallback triple"
            );
            Self::fallback()
        }
    }
}

impl Default for VolumeLandmarks {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Baseline (intermediate) landmark triples per muscle, `(mev, mav, mrv)`.
/// Larger muscles with high indirect exposure tolerate more weekly sets.
const BASELINE: &[(MuscleGroup, (f64, f64, f64))] = &[
    (MuscleGroup::Chest, (6.0, 14.0, 22.0)),
    (MuscleGroup::FrontDelts, (0.0, 8.0, 14.0)),
    (MuscleGroup::SideDelts, (8.0, 16.0, 26.0)),
    (MuscleGroup::RearDelts, (6.0, 14.0, 22.0)),
    (MuscleGroup::Lats, (8.0, 16.0, 25.0)),
    (MuscleGroup::UpperBack, (8.0, 16.0, 25.0)),
    (MuscleGroup::LowerBack, (4.0, 8.0, 12.0)),
    (MuscleGroup::Biceps, (6.0, 14.0, 20.0)),
    (MuscleGroup::Triceps, (6.0, 12.0, 18.0)),
    (MuscleGroup::Forearms, (2.0, 8.0, 16.0)),
    (MuscleGroup::Abs, (4.0, 12.0, 20.0)),
    (MuscleGroup::Obliques, (2.0, 8.0, 16.0)),
    (MuscleGroup::Quads, (8.0, 14.0, 20.0)),
    (MuscleGroup::Hamstrings, (6.0, 12.0, 18.0)),
    (MuscleGroup::Glutes, (4.0, 12.0, 18.0)),
    (MuscleGroup::Adductors, (2.0, 8.0, 14.0)),
    (MuscleGroup::Abductors, (2.0, 8.0, 14.0)),
    (MuscleGroup::Calves, (6.0, 12.0, 18.0)),
    (MuscleGroup::Neck, (0.0, 6.0, 12.0)),
    (MuscleGroup::HipFlexors, (0.0, 6.0, 12.0)),
];

/// Experience scaling applied to the baseline triples
const fn experience_factor(experience: TrainingExperience) -> f64 {
    match experience {
        TrainingExperience::Beginner => 0.75,
        TrainingExperience::Intermediate => 1.0,
        TrainingExperience::Advanced => 1.2,
    }
}

/// Landmark lookup for one user: an experience tier over the baseline
/// table, plus optional per-muscle overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkTable {
    /// Training experience tier the baseline is scaled for
    pub experience: TrainingExperience,
    /// Per-muscle overrides (user- or coach-set), validated at lookup
    pub overrides: BTreeMap<MuscleGroup, VolumeLandmarks>,
}

impl LandmarkTable {
    /// Table for an experience tier with no overrides
    #[must_use]
    pub fn for_experience(experience: TrainingExperience) -> Self {
        Self {
            experience,
            overrides: BTreeMap::new(),
        }
    }

    /// Landmarks for a muscle. Total: override, then scaled baseline, then
    /// the fallback triple; the result always satisfies the ordering
    /// invariant.
    #[must_use]
    pub fn get(&self, muscle: MuscleGroup) -> VolumeLandmarks {
        if let Some(&override_triple) = self.overrides.get(&muscle) {
            return override_triple.validated();
        }

        let factor = experience_factor(self.experience);
        BASELINE
            .iter()
            .find(|(group, _)| *group == muscle)
            .map_or_else(VolumeLandmarks::fallback, |&(_, (mev, mav, mrv))| {
                VolumeLandmarks::new(
                    (mev * factor).round(),
                    (mav * factor).round(),
                    (mrv * factor).round(),
                )
                .validated()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_triples_are_ordered() {
        for &(muscle, (mev, mav, mrv)) in BASELINE {
            let landmarks = VolumeLandmarks::new(mev, mav, mrv);
            assert!(landmarks.is_valid(), "baseline invalid for {muscle}");
        }
    }

    #[test]
    fn test_lookup_scales_by_experience() {
        let beginner = LandmarkTable::for_experience(TrainingExperience::Beginner);
        let advanced = LandmarkTable::for_experience(TrainingExperience::Advanced);
        let muscle = MuscleGroup::Quads;
        assert!(beginner.get(muscle).mrv < advanced.get(muscle).mrv);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let mut table = LandmarkTable::default();
        table
            .overrides
            .insert(MuscleGroup::Chest, VolumeLandmarks::new(10.0, 6.0, 4.0));
        assert_eq!(table.get(MuscleGroup::Chest), VolumeLandmarks::fallback());
    }

    #[test]
    fn test_every_muscle_resolves_to_valid_landmarks() {
        let table = LandmarkTable::default();
        for muscle in MuscleGroup::ALL {
            assert!(table.get(muscle).is_valid());
        }
    }
}
