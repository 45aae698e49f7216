// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::context::SeatingContext;
use crate::engine::{Candidate, Constraint};
use crate::errors::{ConstraintKind, Step};
use crate::ids::TableId;

/// Bounds how many people move together from one table to another.
///
/// Everyone already at the destination who started at the candidate's
/// initial table would become a co-resident of both rounds. The draw is
/// refused when that would exceed the overlap limit. Later arrivals are
/// checked against the same group, so no participant ever ends up with more
/// than M such co-residents.
#[derive(Debug)]
pub struct OverlapConstraint;

impl Constraint for OverlapConstraint {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::OverlapLimit
    }

    fn applies_to(&self, step: Step) -> bool {
        step == Step::Destination
    }

    fn admits(&self, ctx: &SeatingContext, candidate: &Candidate, table: TableId) -> bool {
        match candidate.initial_table {
            Some(initial) => ctx.cohort_size(initial, table) <= ctx.overlap_limit,
            None => true,
        }
    }

    fn name(&self) -> &str {
        "Overlap"
    }
}
