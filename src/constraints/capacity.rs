// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::context::SeatingContext;
use crate::engine::{Candidate, Constraint};
use crate::errors::ConstraintKind;
use crate::ids::TableId;

/// The table's roster for the current round must have a free seat.
#[derive(Debug)]
pub struct CapacityConstraint;

impl Constraint for CapacityConstraint {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::TableFull
    }

    fn admits(&self, ctx: &SeatingContext, candidate: &Candidate, table: TableId) -> bool {
        !ctx.table(table).is_full(candidate.step)
    }

    fn name(&self) -> &str {
        "Capacity"
    }
}
