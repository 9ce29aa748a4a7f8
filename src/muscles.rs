// ABOUTME: Canonical muscle groups and resolution of catalog muscle labels
// ABOUTME: Maps legacy/fine-grained vocabularies to weighted canonical credits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Muscle resolver.
//!
//! Exercise catalogs reference muscles in three overlapping vocabularies:
//! the canonical group names used for volume accounting, legacy coarse
//! labels (`back`, `legs`) that span several canonical groups, and
//! fine-grained anatomical synonyms (`gastrocnemius`, `rhomboids`) that
//! collapse into one. Resolution is an explicit data table returning
//! `(group, weight)` credits: weight 1.0 per group for exact and
//! fine-grained labels, split evenly across the expansion for legacy
//! labels. Unknown labels resolve to nothing and never fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Canonical muscle groups used for volume accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Anterior deltoids
    FrontDelts,
    /// Lateral deltoids
    SideDelts,
    /// Posterior deltoids
    RearDelts,
    /// Latissimus dorsi
    Lats,
    /// Traps, rhomboids, mid-back
    UpperBack,
    /// Spinal erectors
    LowerBack,
    /// Biceps brachii
    Biceps,
    /// Triceps brachii
    Triceps,
    /// Wrist flexors/extensors
    Forearms,
    /// Rectus abdominis
    Abs,
    /// Internal/external obliques
    Obliques,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Gluteals
    Glutes,
    /// Hip adductors
    Adductors,
    /// Hip abductors
    Abductors,
    /// Gastrocnemius and soleus
    Calves,
    /// Neck flexors/extensors
    Neck,
    /// Iliopsoas
    HipFlexors,
}

impl MuscleGroup {
    /// Every canonical group, in volume-report order
    pub const ALL: [Self; 20] = [
        Self::Chest,
        Self::FrontDelts,
        Self::SideDelts,
        Self::RearDelts,
        Self::Lats,
        Self::UpperBack,
        Self::LowerBack,
        Self::Biceps,
        Self::Triceps,
        Self::Forearms,
        Self::Abs,
        Self::Obliques,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Adductors,
        Self::Abductors,
        Self::Calves,
        Self::Neck,
        Self::HipFlexors,
    ];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::FrontDelts => "front_delts",
            Self::SideDelts => "side_delts",
            Self::RearDelts => "rear_delts",
            Self::Lats => "lats",
            Self::UpperBack => "upper_back",
            Self::LowerBack => "lower_back",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Forearms => "forearms",
            Self::Abs => "abs",
            Self::Obliques => "obliques",
            Self::Quads => "quads",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Adductors => "adductors",
            Self::Abductors => "abductors",
            Self::Calves => "calves",
            Self::Neck => "neck",
            Self::HipFlexors => "hip_flexors",
        }
    }

    fn from_canonical(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == label)
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One canonical group's share of a resolved label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleCredit {
    /// Canonical group receiving credit
    pub group: MuscleGroup,
    /// Credit weight; 1.0 unless the label split across several groups
    pub weight: f64,
}

/// Legacy coarse labels that expand to several canonical groups.
/// Credit is split evenly across the expansion.
const LEGACY_EXPANSIONS: &[(&str, &[MuscleGroup])] = &[
    (
        "shoulders",
        &[
            MuscleGroup::FrontDelts,
            MuscleGroup::SideDelts,
            MuscleGroup::RearDelts,
        ],
    ),
    (
        "delts",
        &[
            MuscleGroup::FrontDelts,
            MuscleGroup::SideDelts,
            MuscleGroup::RearDelts,
        ],
    ),
    (
        "back",
        &[
            MuscleGroup::Lats,
            MuscleGroup::UpperBack,
            MuscleGroup::LowerBack,
        ],
    ),
    ("arms", &[MuscleGroup::Biceps, MuscleGroup::Triceps]),
    (
        "legs",
        &[
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
        ],
    ),
    ("core", &[MuscleGroup::Abs, MuscleGroup::Obliques]),
    ("trunk", &[MuscleGroup::Abs, MuscleGroup::Obliques]),
];

/// Fine-grained anatomical synonyms that collapse to one canonical group
const SYNONYMS: &[(&str, MuscleGroup)] = &[
    ("pecs", MuscleGroup::Chest),
    ("pectorals", MuscleGroup::Chest),
    ("upper_chest", MuscleGroup::Chest),
    ("lower_chest", MuscleGroup::Chest),
    ("anterior_deltoid", MuscleGroup::FrontDelts),
    ("anterior_delts", MuscleGroup::FrontDelts),
    ("lateral_deltoid", MuscleGroup::SideDelts),
    ("lateral_delts", MuscleGroup::SideDelts),
    ("medial_delts", MuscleGroup::SideDelts),
    ("posterior_deltoid", MuscleGroup::RearDelts),
    ("posterior_delts", MuscleGroup::RearDelts),
    ("latissimus", MuscleGroup::Lats),
    ("latissimus_dorsi", MuscleGroup::Lats),
    ("traps", MuscleGroup::UpperBack),
    ("trapezius", MuscleGroup::UpperBack),
    ("rhomboids", MuscleGroup::UpperBack),
    ("mid_traps", MuscleGroup::UpperBack),
    ("mid_back", MuscleGroup::UpperBack),
    ("erectors", MuscleGroup::LowerBack),
    ("spinal_erectors", MuscleGroup::LowerBack),
    ("erector_spinae", MuscleGroup::LowerBack),
    ("biceps_brachii", MuscleGroup::Biceps),
    ("brachialis", MuscleGroup::Biceps),
    ("triceps_brachii", MuscleGroup::Triceps),
    ("wrist_flexors", MuscleGroup::Forearms),
    ("wrist_extensors", MuscleGroup::Forearms),
    ("grip", MuscleGroup::Forearms),
    ("rectus_abdominis", MuscleGroup::Abs),
    ("abdominals", MuscleGroup::Abs),
    ("quadriceps", MuscleGroup::Quads),
    ("quadricep", MuscleGroup::Quads),
    ("hams", MuscleGroup::Hamstrings),
    ("gluteus_maximus", MuscleGroup::Glutes),
    ("gluteus_medius", MuscleGroup::Abductors),
    ("gastrocnemius", MuscleGroup::Calves),
    ("soleus", MuscleGroup::Calves),
    ("groin", MuscleGroup::Adductors),
    ("iliopsoas", MuscleGroup::HipFlexors),
    ("psoas", MuscleGroup::HipFlexors),
];

/// Normalize a raw label for lookup: lowercase, trimmed, separators collapsed
fn normalize(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
        .replace("__", "_")
}

/// Resolve a muscle label in any supported vocabulary to weighted canonical
/// credits.
///
/// Exact canonical names and fine-grained synonyms resolve to a single group
/// at weight 1.0. Legacy coarse labels expand to several groups with the
/// weight split evenly. Unknown labels resolve to an empty vec (logged here,
/// never an error) so one bad catalog entry cannot poison a week's totals.
#[must_use]
pub fn resolve_muscle_label(label: &str) -> Vec<MuscleCredit> {
    let key = normalize(label);

    if let Some(group) = MuscleGroup::from_canonical(&key) {
        return vec![MuscleCredit { group, weight: 1.0 }];
    }

    if let Some((_, groups)) = LEGACY_EXPANSIONS.iter().find(|(name, _)| *name == key) {
        let weight = 1.0 / groups.len() as f64;
        return groups
            .iter()
            .map(|&group| MuscleCredit { group, weight })
            .collect();
    }

    if let Some(&(_, group)) = SYNONYMS.iter().find(|(name, _)| *name == key) {
        return vec![MuscleCredit { group, weight: 1.0 }];
    }

    warn!(label, "unresolvable muscle label dropped from volume accounting");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_label_resolves_to_itself() {
        let credits = resolve_muscle_label("quads");
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].group, MuscleGroup::Quads);
        assert!((credits[0].weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_legacy_label_splits_credit_evenly() {
        let credits = resolve_muscle_label("shoulders");
        assert_eq!(credits.len(), 3);
        for credit in &credits {
            assert!((credit.weight - 1.0 / 3.0).abs() < 1e-9);
        }
        let total: f64 = credits.iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fine_grained_synonym_collapses() {
        let credits = resolve_muscle_label("Gastrocnemius");
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].group, MuscleGroup::Calves);
    }

    #[test]
    fn test_label_normalization_is_forgiving() {
        let credits = resolve_muscle_label("  Erector Spinae ");
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].group, MuscleGroup::LowerBack);
    }

    #[test]
    fn test_unknown_label_resolves_to_nothing() {
        assert!(resolve_muscle_label("flux_capacitor").is_empty());
    }

    #[test]
    fn test_all_covers_every_group_once() {
        let mut names: Vec<&str> = MuscleGroup::ALL.iter().map(|g| g.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }
}
