// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seat a population at tables twice, with complementary identifier codes.
//!
//! Every participant sits at an *initial* table for the first round and
//! moves to a different *destination* table for the second. Participants
//! come in pairs whose identifier sequences are reverse complements of each
//! other (A↔T/U, C↔G, read backwards), and partners never share a table.
//!
//! # Architecture
//!
//! ## Sequence Generator
//!
//! [`sequence::SequenceGenerator`] draws fixed-length nucleotide sequences,
//! optionally as stop-free coding sequences, and pairs each drawn strand
//! with its reverse complement.
//!
//! ## Seating Engine
//!
//! [`engine::SeatingEngine`] places participants one at a time by drawing
//! random tables and checking them against the [`constraints`]:
//!
//! - capacity of each round's roster
//! - no participant stays at its initial table
//! - partners are separated in both rounds
//! - at most M others share both of a participant's tables
//!
//! The search is bounded. Each table choice gets a fixed number of draws, and
//! running out aborts the run with a typed error instead of bending a rule.
//!
//! ## State
//!
//! [`context::SeatingContext`] owns the table arena, per-participant seating
//! state and run statistics. A successful run is turned into an
//! [`assignment::Assignment`], which [`roster`] writes out as TSV.
//!
//! # Determinism
//!
//! A single seeded `ChaCha8Rng` drives the whole run. Equal configurations
//! produce equal seats and sequences.

pub mod assignment;
pub mod config;
pub mod constraints;
pub mod context;
pub mod engine;
pub mod errors;
pub mod ids;
pub mod roster;
pub mod sequence;
pub mod state;

// Re-export commonly used types
pub use assignment::{Assignment, Seat};
pub use config::{Pairing, SeatingConfig};
pub use context::SeatingContext;
pub use engine::{Constraint, SeatingEngine};
pub use errors::{ConfigError, ConstraintKind, SeatingError, Step};
pub use sequence::{Alphabet, Sequence, SequenceMode};
