// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::context::SeatingContext;
use crate::engine::{Candidate, Constraint};
use crate::errors::{ConstraintKind, Step};
use crate::ids::TableId;

/// The destination table must differ from the initial table.
#[derive(Debug)]
pub struct MovementConstraint;

impl Constraint for MovementConstraint {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::SameTable
    }

    fn applies_to(&self, step: Step) -> bool {
        step == Step::Destination
    }

    fn admits(&self, _ctx: &SeatingContext, candidate: &Candidate, table: TableId) -> bool {
        candidate.initial_table != Some(table)
    }

    fn name(&self) -> &str {
        "Movement"
    }
}
