// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::context::SeatingContext;
use crate::engine::{Candidate, Constraint};
use crate::errors::ConstraintKind;
use crate::ids::TableId;

/// A participant may not join its partner's table in the same round.
///
/// Only the second member of a pair is ever constrained: pairs are placed
/// back to back, so the first member's partner has no tables yet.
#[derive(Debug)]
pub struct PartnerConstraint;

impl Constraint for PartnerConstraint {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::PartnerCollision
    }

    fn admits(&self, ctx: &SeatingContext, candidate: &Candidate, table: TableId) -> bool {
        ctx.partner_table(candidate.participant, candidate.step) != Some(table)
    }

    fn name(&self) -> &str {
        "Partner"
    }
}
