// ABOUTME: Error types for the training load engine
// ABOUTME: Defines caller-misuse and configuration validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Rackline

//! Engine error types.
//!
//! The engine is total over well-typed input: malformed data degrades to a
//! zero/neutral result instead of failing. The only `Err` paths are caller
//! misuse (re-applying a fatigue update for a session already counted) and
//! configuration validation.

use thiserror::Error;
use uuid::Uuid;

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by the training load engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// A fatigue update was applied twice for the same session.
    /// Reapplying double-counts accumulation, so the state is left untouched.
    #[error("fatigue update already applied for session {session_id}")]
    DuplicateSessionUpdate {
        /// Identity of the session whose update was already counted
        session_id: Uuid,
    },

    /// Configuration violates a structural invariant (weight sums, ordering)
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(&'static str),
}
