// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-participant seating state.

use crate::errors::Step;
use crate::ids::{ParticipantId, TableId};

/// What the constraints need to know about a participant while the run is
/// in progress. Each table field is written exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    pub partner: Option<ParticipantId>,
    initial_table: Option<TableId>,
    destination_table: Option<TableId>,
}

impl Participant {
    pub fn table(&self, step: Step) -> Option<TableId> {
        match step {
            Step::Initial => self.initial_table,
            Step::Destination => self.destination_table,
        }
    }

    pub fn initial_table(&self) -> Option<TableId> {
        self.initial_table
    }

    pub fn destination_table(&self) -> Option<TableId> {
        self.destination_table
    }

    pub(crate) fn assign(&mut self, step: Step, table: TableId) {
        let slot = match step {
            Step::Initial => &mut self.initial_table,
            Step::Destination => {
                debug_assert!(self.initial_table.is_some(), "destination before initial");
                &mut self.destination_table
            }
        };
        debug_assert!(slot.is_none(), "{} table assigned twice", step);
        *slot = Some(table);
    }
}
