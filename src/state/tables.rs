// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Table arena entries.

use crate::errors::Step;
use crate::ids::{ParticipantId, TableId};

/// One table with a fixed capacity and an append-only roster per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    id: TableId,
    capacity: usize,
    initial_roster: Vec<ParticipantId>,
    destination_roster: Vec<ParticipantId>,
}

impl Table {
    pub fn new(id: TableId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            initial_roster: Vec::with_capacity(capacity),
            destination_roster: Vec::with_capacity(capacity),
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Participants seated here in the given round, in seating order.
    pub fn roster(&self, step: Step) -> &[ParticipantId] {
        match step {
            Step::Initial => &self.initial_roster,
            Step::Destination => &self.destination_roster,
        }
    }

    pub fn is_full(&self, step: Step) -> bool {
        self.roster(step).len() >= self.capacity
    }

    /// Append a participant to the roster for `step`.
    ///
    /// Callers check capacity first; seating at a full table is a bug.
    pub(crate) fn seat(&mut self, step: Step, participant: ParticipantId) {
        debug_assert!(!self.is_full(step), "{} is full", self.id);
        match step {
            Step::Initial => self.initial_roster.push(participant),
            Step::Destination => self.destination_roster.push(participant),
        }
    }
}
