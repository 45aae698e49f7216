// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for a seating run.

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};
use thiserror::Error;

use crate::ids::ParticipantId;

/// The seating rule that rejected a drawn table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConstraintKind {
    /// The table's roster for this round is already at capacity.
    TableFull,

    /// The destination equals the participant's own initial table.
    SameTable,

    /// The partner already sits at this table in this round.
    PartnerCollision,

    /// Too many participants from the same initial table already moved here.
    OverlapLimit,
}

/// Which of the two seating rounds a draw belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Step {
    Initial,
    Destination,
}

/// Structural problems detected before any random draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least 2 tables are needed so everyone can move, got {tables}")]
    TooFewTables { tables: usize },

    #[error("table {table} has zero capacity")]
    EmptyTable { table: usize },

    #[error("table {table} capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge {
        table: usize,
        capacity: usize,
        max: usize,
    },

    #[error("population {population} exceeds total capacity {capacity}")]
    InsufficientCapacity { population: usize, capacity: usize },

    #[error("population {population} must be even when participants are paired")]
    OddPopulation { population: usize },

    #[error("population must contain at least one participant")]
    EmptyPopulation,

    #[error("sequence length must be at least 1")]
    EmptySequence,

    #[error("attempt budget must be at least 1")]
    NoAttempts,
}

/// Fatal failures of a seating run. None of them leave a usable assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(#[from] ConfigError),

    #[error(
        "participant {participant} has no {step} table after {attempts} draws \
         (mostly rejected by {constraint}); retry with another seed or looser limits"
    )]
    InfeasibleConstraint {
        participant: ParticipantId,
        step: Step,
        constraint: ConstraintKind,
        attempts: usize,
    },

    #[error("no codon without a stop signal after {attempts} draws")]
    SequenceExhausted { attempts: usize },
}
