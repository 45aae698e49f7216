// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seating context: the state one run owns.
//!
//! ```text
//! SeatingContext {
//!     tables: Vec<Table>,              // arena, indexed by TableId
//!     participants: Vec<Participant>,  // indexed by ParticipantId
//!     statistics: Statistics,
//! }
//! ```
//!
//! Constraints read the context; only the engine writes to it.

use crate::errors::Step;
use crate::ids::{ParticipantId, TableId};
use crate::state::{Participant, Statistics, Table};

#[derive(Debug, Clone)]
pub struct SeatingContext {
    pub tables: Vec<Table>,
    pub participants: Vec<Participant>,
    pub statistics: Statistics,
    /// Most co-residents a participant may share both tables with.
    pub overlap_limit: usize,
}

impl SeatingContext {
    /// Empty tables with the given capacities and `population` unseated participants.
    pub fn new(capacities: &[usize], population: usize, overlap_limit: usize) -> Self {
        Self {
            tables: capacities
                .iter()
                .enumerate()
                .map(|(i, &capacity)| Table::new(TableId::new(i), capacity))
                .collect(),
            participants: vec![Participant::default(); population],
            statistics: Statistics::new(),
            overlap_limit,
        }
    }

    pub fn ntables(&self) -> usize {
        self.tables.len()
    }

    pub fn table(&self, id: TableId) -> &Table {
        &self.tables[id.as_usize()]
    }

    pub fn participant(&self, id: ParticipantId) -> &Participant {
        &self.participants[id.as_usize()]
    }

    /// Link two participants as partners.
    pub(crate) fn bond(&mut self, a: ParticipantId, b: ParticipantId) {
        self.participants[a.as_usize()].partner = Some(b);
        self.participants[b.as_usize()].partner = Some(a);
    }

    /// The table the participant's partner holds for `step`, if any yet.
    pub fn partner_table(&self, id: ParticipantId, step: Step) -> Option<TableId> {
        self.participant(id)
            .partner
            .and_then(|partner| self.participant(partner).table(step))
    }

    /// Participants already moved to `destination` who started at `initial`.
    pub fn cohort_size(&self, initial: TableId, destination: TableId) -> usize {
        self.table(destination)
            .roster(Step::Destination)
            .iter()
            .filter(|&&q| self.participant(q).initial_table() == Some(initial))
            .count()
    }

    /// Record both tables for a participant and append it to both rosters.
    pub(crate) fn commit(&mut self, id: ParticipantId, initial: TableId, destination: TableId) {
        self.tables[initial.as_usize()].seat(Step::Initial, id);
        self.tables[destination.as_usize()].seat(Step::Destination, id);
        let participant = &mut self.participants[id.as_usize()];
        participant.assign(Step::Initial, initial);
        participant.assign(Step::Destination, destination);
    }
}
