// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seating constraints.
//!
//! # Organization
//!
//! - `movement`: nobody stays at their initial table
//! - `capacity`: rosters never exceed table capacity
//! - `partner`: pair members never share a table in either round
//! - `overlap`: at most M others share both of a participant's tables

pub mod capacity;
pub mod movement;
pub mod overlap;
pub mod partner;

pub use capacity::CapacityConstraint;
pub use movement::MovementConstraint;
pub use overlap::OverlapConstraint;
pub use partner::PartnerConstraint;

use crate::engine::Constraint;

/// The standard rule set, in the order draws are checked.
pub fn standard() -> Vec<Box<dyn Constraint>> {
    vec![
        Box::new(MovementConstraint),
        Box::new(CapacityConstraint),
        Box::new(PartnerConstraint),
        Box::new(OverlapConstraint),
    ]
}
