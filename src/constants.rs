// ABOUTME: Training science constants for volume landmarks, readiness, and fatigue
// ABOUTME: Named thresholds and lookup tables used throughout the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Training science constants used throughout the engine.
//!
//! These values encode the heuristic thresholds the engine's decisions are
//! built on. They are deliberately named and grouped rather than inlined so
//! each table stays independently testable and tunable.

/// Weekly volume landmark defaults and classification bands
///
/// References:
/// - Israetel, M., Hoffmann, J., & Smith, C.W. (2017). Scientific Principles of Strength Training
/// - Schoenfeld, B.J., Ogborn, D., & Krieger, J.W. (2017). Dose-response relationship between
///   weekly resistance training volume and muscle hypertrophy.
///   <https://pubmed.ncbi.nlm.nih.gov/27433992/>
pub mod volume {
    /// Fallback landmark triple (MEV, MAV, MRV) when a muscle has no table entry
    pub const DEFAULT_LANDMARKS: (f64, f64, f64) = (4.0, 10.0, 16.0);

    /// Fraction of total working sets credited to a secondary muscle
    pub const SECONDARY_CREDIT_FACTOR: f64 = 0.5;

    /// Lower edge of the optimal band as a fraction of MAV
    pub const OPTIMAL_LOWER_MAV_FACTOR: f64 = 0.8;

    /// Upper edge of the optimal band as a fraction of MAV
    pub const OPTIMAL_UPPER_MAV_FACTOR: f64 = 1.1;

    /// Lower edge of the maintenance target range as a fraction of MAV
    pub const MAINTAIN_LOWER_MAV_FACTOR: f64 = 0.9;

    /// Fraction of MEV used as the deload-week set floor
    pub const DELOAD_MEV_FACTOR: f64 = 0.5;
}

/// Readiness scoring bands and weights
///
/// References:
/// - Hirshkowitz, M., et al. (2015). National Sleep Foundation's sleep time duration
///   recommendations. <https://doi.org/10.1016/j.sleh.2014.12.010>
/// - Saw, A.E., Main, L.C., & Gastin, P.B. (2016). Monitoring the athlete training response:
///   subjective self-reported measures trump commonly used objective measures.
///   <https://bjsm.bmj.com/content/50/5/281>
pub mod readiness {
    /// Sleep-hours bands as `(min_hours, max_hours, score)` rows, first match wins
    pub const SLEEP_HOUR_BANDS: [(f64, f64, f64); 4] = [
        (7.0, 9.0, 100.0),
        (9.0, 10.0, 85.0),
        (6.0, 7.0, 70.0),
        (5.0, 6.0, 50.0),
    ];

    /// Sleep-hours score outside every band
    pub const SLEEP_SCORE_FLOOR: f64 = 30.0;

    /// Sleep quality scaling: `SLEEP_QUALITY_BASE + SLEEP_QUALITY_STEP * quality`
    pub const SLEEP_QUALITY_BASE: f64 = 0.6;
    /// Per-point quality scaling step
    pub const SLEEP_QUALITY_STEP: f64 = 0.1;

    /// Stress/nutrition ratings map to scores via a 20-points-per-step scale
    pub const RATING_SCALE_STEP: f64 = 20.0;

    /// Baseline recovery sub-score before RPE and rest-day modifiers
    pub const RECOVERY_BASE: f64 = 70.0;
    /// Penalty when the previous session averaged RPE >= 9
    pub const RECOVERY_HIGH_RPE_PENALTY: f64 = 15.0;
    /// Bonus when the previous session averaged RPE <= 6
    pub const RECOVERY_LOW_RPE_BONUS: f64 = 10.0;
    /// Previous-session RPE at or above which the penalty applies
    pub const RECOVERY_HIGH_RPE_THRESHOLD: f64 = 9.0;
    /// Previous-session RPE at or below which the bonus applies
    pub const RECOVERY_LOW_RPE_THRESHOLD: f64 = 6.0;
    /// Bonus for two or more full rest days
    pub const RECOVERY_RESTED_BONUS: f64 = 15.0;
    /// Penalty for a same-day repeat session
    pub const RECOVERY_SAME_DAY_PENALTY: f64 = 20.0;
    /// Rest days at or above which the rested bonus applies
    pub const RECOVERY_RESTED_DAYS: u32 = 2;

    /// Weight of the sleep factor in the composite score
    pub const SLEEP_WEIGHT: f64 = 0.35;
    /// Weight of the stress factor
    pub const STRESS_WEIGHT: f64 = 0.25;
    /// Weight of the nutrition factor
    pub const NUTRITION_WEIGHT: f64 = 0.20;
    /// Weight of the recovery factor
    pub const RECOVERY_WEIGHT: f64 = 0.20;

    /// Neutral defaults for omitted check-in inputs
    pub const DEFAULT_SLEEP_HOURS: f64 = 7.0;
    /// Neutral 1-5 rating midpoint
    pub const DEFAULT_RATING: u8 = 3;
    /// Neutral previous-session RPE
    pub const DEFAULT_PREVIOUS_RPE: f64 = 7.0;
    /// Neutral days since the last session
    pub const DEFAULT_DAYS_SINCE_SESSION: u32 = 1;
}

/// Rolling fatigue accumulation and decay
///
/// References:
/// - Halson, S.L. (2014). Monitoring training load to understand fatigue in athletes.
///   <https://www.ncbi.nlm.nih.gov/pmc/articles/PMC4213373/>
pub mod fatigue {
    /// Fatigue points recovered per full rest day
    pub const RECOVERY_PER_REST_DAY: f64 = 3.0;

    /// Accumulation lookup keyed by rounded session RPE, `(rpe, points)` rows
    pub const ACCUMULATION_BY_RPE: [(u8, f64); 6] = [
        (5, 2.0),
        (6, 4.0),
        (7, 6.0),
        (8, 8.0),
        (9, 10.0),
        (10, 14.0),
    ];

    /// Fallback multiplier for RPE outside the lookup range
    pub const OUT_OF_RANGE_RPE_FACTOR: f64 = 1.2;

    /// Fatigue scale bounds
    pub const MIN_FATIGUE: f64 = 0.0;
    /// Upper fatigue scale bound
    pub const MAX_FATIGUE: f64 = 100.0;

    /// Interpretation bands: below this is fresh
    pub const FRESH_UPPER_BOUND: f64 = 30.0;
    /// Below this is moderate fatigue
    pub const MODERATE_UPPER_BOUND: f64 = 55.0;
    /// Below this is high fatigue; at or above, severe
    pub const HIGH_UPPER_BOUND: f64 = 75.0;
}

/// Deload decision thresholds
///
/// References:
/// - Gabbett, T.J. (2016). The training-injury prevention paradox.
///   <https://bjsm.bmj.com/content/50/5/273>
pub mod deload {
    /// Fatigue score at or above which a deload is required
    pub const FATIGUE_THRESHOLD: f64 = 75.0;

    /// Completion fraction below which a session counts as incomplete
    pub const LOW_COMPLETION_THRESHOLD: f64 = 80.0;

    /// Consecutive low-completion sessions that force a deload
    pub const LOW_COMPLETION_STREAK: usize = 3;

    /// Minimum session history for RPE drift evaluation
    pub const RPE_DRIFT_MIN_SESSIONS: usize = 6;

    /// Sessions averaged at each end of the drift window
    pub const RPE_DRIFT_SAMPLE: usize = 3;

    /// Average-RPE rise that signals accumulating fatigue
    pub const RPE_DRIFT_THRESHOLD: f64 = 1.5;
}

/// Readiness-tiered target adjustment
///
/// References:
/// - Helms, E.R., et al. (2016). Application of the repetitions in reserve-based
///   rating of perceived exertion scale for resistance training.
///   <https://www.ncbi.nlm.nih.gov/pmc/articles/PMC4961270/>
pub mod progression {
    /// Readiness at or above which targets are left unchanged
    pub const FULL_READINESS_THRESHOLD: f64 = 80.0;
    /// Readiness at or above which only effort/rest are eased
    pub const MODERATE_READINESS_THRESHOLD: f64 = 60.0;
    /// Readiness at or above which load is trimmed but the session proceeds
    pub const LOW_READINESS_THRESHOLD: f64 = 40.0;

    /// Load reduction fraction for the low-readiness tier
    pub const LOW_READINESS_LOAD_CUT: f64 = 0.1;
    /// Load reduction fraction for the very-low-readiness tier
    pub const VERY_LOW_READINESS_LOAD_CUT: f64 = 0.2;

    /// Rest added per tier (seconds)
    pub const MODERATE_REST_BONUS_SECONDS: u32 = 30;
    /// Rest added in the low-readiness tier
    pub const LOW_REST_BONUS_SECONDS: u32 = 60;
    /// Rest added in the very-low-readiness tier
    pub const VERY_LOW_REST_BONUS_SECONDS: u32 = 90;

    /// Set count never drops below this floor
    pub const MIN_SETS: u32 = 2;

    /// RIR forced in the very-low-readiness tier
    pub const VERY_LOW_TARGET_RIR: u8 = 4;

    /// Default smallest loading increment (kg) when the exercise reports none
    pub const DEFAULT_WEIGHT_INCREMENT_KG: f64 = 2.5;
}
