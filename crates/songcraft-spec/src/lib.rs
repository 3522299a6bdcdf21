//! Songcraft Canonical Value Types
//!
//! This crate provides the shared data model for the Songcraft music-theory
//! engine. All types are plain serde-serializable values with no behavior
//! beyond small, pure accessors: the engine crates (`songcraft-harmony` and
//! `songcraft-motif`) consume and produce these types without mutating them
//! in place.
//!
//! # Overview
//!
//! - A **progression** is an ordered, gap-free `Vec<ChordEvent>` spanning a
//!   run of beats.
//! - A **motif** ([`MotifSeed`]) is a short ordered note sequence with a
//!   tonal context (`key` + [`Scale`]) attached for scoring.
//! - A **style prior** ([`StylePrior`]) describes a target genre's tempo,
//!   swing, and energy characteristics; its `guardrails.energy_profile`
//!   string drives candidate-genre selection and genre-fit scoring.
//! - A [`MotifScoreReport`] carries five bounded sub-scores, a weighted
//!   overall score, and the raw analyzer outputs for explainability.
//!
//! # Modules
//!
//! - [`error`]: The [`EngineError`] trait for stable, inspectable error codes
//! - [`motif`]: Note and motif types
//! - [`progression`]: Chord event and progression candidate types
//! - [`report`]: Motif score report types
//! - [`scale`]: Major/minor scale definitions and pitch-class membership
//! - [`style`]: Style prior types

pub mod error;
pub mod motif;
pub mod progression;
pub mod report;
pub mod scale;
pub mod style;

// Re-export commonly used types at the crate root
pub use error::EngineError;
pub use motif::{MotifSeed, MotifType, Note};
pub use progression::{ChordEvent, ProgressionCandidate};
pub use report::{MotifScoreReport, ScoreBreakdown};
pub use scale::Scale;
pub use style::{ArrangementNorms, BpmSignature, Guardrails, StylePrior, SwingProfile};
