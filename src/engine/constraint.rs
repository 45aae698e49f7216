// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint trait for randomized seating.
//!
//! The engine draws a table uniformly at random and asks each constraint, in
//! order, whether the draw is acceptable. The first constraint that refuses
//! names the rejection; if none refuses, the table is taken.
//!
//! # Example
//!
//! ```
//! use table_shuffle::context::SeatingContext;
//! use table_shuffle::engine::{Candidate, Constraint};
//! use table_shuffle::errors::{ConstraintKind, Step};
//! use table_shuffle::ids::TableId;
//!
//! /// Keeps table 0 free for the organisers.
//! #[derive(Debug)]
//! struct ReservedTable;
//!
//! impl Constraint for ReservedTable {
//!     fn kind(&self) -> ConstraintKind {
//!         ConstraintKind::TableFull
//!     }
//!
//!     fn admits(&self, _ctx: &SeatingContext, _candidate: &Candidate, table: TableId) -> bool {
//!         table.as_usize() != 0
//!     }
//! }
//!
//! // Without an `applies_to` override a rule is checked in both rounds.
//! assert!(ReservedTable.applies_to(Step::Initial));
//! assert!(ReservedTable.applies_to(Step::Destination));
//! ```

use std::fmt::Debug;

use crate::context::SeatingContext;
use crate::errors::{ConstraintKind, Step};
use crate::ids::{ParticipantId, TableId};

/// The participant being placed and what is known about it so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub participant: ParticipantId,
    pub step: Step,
    /// Chosen during this placement; `None` while choosing it.
    pub initial_table: Option<TableId>,
}

impl Candidate {
    pub fn initial(participant: ParticipantId) -> Self {
        Self {
            participant,
            step: Step::Initial,
            initial_table: None,
        }
    }

    pub fn destination(participant: ParticipantId, initial_table: TableId) -> Self {
        Self {
            participant,
            step: Step::Destination,
            initial_table: Some(initial_table),
        }
    }
}

/// A hard seating rule.
///
/// Constraints are pure: they read the context and the candidate and never
/// mutate anything. Rejections are recorded by the engine.
pub trait Constraint: Debug {
    /// The rejection reported when this constraint refuses a draw.
    fn kind(&self) -> ConstraintKind;

    /// Whether the constraint is checked during `step`. Defaults to both rounds.
    fn applies_to(&self, _step: Step) -> bool {
        true
    }

    /// Whether `candidate` may sit at `table`.
    fn admits(&self, ctx: &SeatingContext, candidate: &Candidate, table: TableId) -> bool;

    /// Optional: Get a name for this constraint (for tracing).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
