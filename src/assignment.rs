// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The result of a successful seating run.

use crate::context::SeatingContext;
use crate::ids::{ParticipantId, TableId};
use crate::sequence::Sequence;
use crate::state::{Statistics, Table};

/// Everything printed on one participant's card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub participant: ParticipantId,
    pub initial_table: TableId,
    pub destination_table: TableId,
    pub sequence: Sequence,
    pub partner: Option<ParticipantId>,
}

impl Seat {
    /// Protein encoded by the participant's sequence.
    pub fn protein(&self) -> String {
        self.sequence.translate()
    }
}

/// A complete, fully populated assignment.
///
/// Only [`crate::engine::SeatingEngine`] constructs one, and only after every
/// participant has both tables and a sequence.
#[derive(Debug, Clone)]
pub struct Assignment {
    seed: u64,
    order: Vec<ParticipantId>,
    seats: Vec<Seat>,
    tables: Vec<Table>,
    statistics: Statistics,
}

impl Assignment {
    pub(crate) fn new(
        seed: u64,
        order: Vec<ParticipantId>,
        mut seats: Vec<Seat>,
        ctx: SeatingContext,
    ) -> Self {
        seats.sort_by_key(|seat| seat.participant);
        Self {
            seed,
            order,
            seats,
            tables: ctx.tables,
            statistics: ctx.statistics,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One seat per participant, ordered by participant id.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, participant: ParticipantId) -> &Seat {
        &self.seats[participant.as_usize()]
    }

    /// The order in which participants were placed.
    pub fn processing_order(&self) -> &[ParticipantId] {
        &self.order
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Every pair once, lower id first.
    pub fn pairs(&self) -> Vec<(ParticipantId, ParticipantId)> {
        self.seats
            .iter()
            .filter_map(|seat| {
                seat.partner
                    .filter(|&partner| seat.participant < partner)
                    .map(|partner| (seat.participant, partner))
            })
            .collect()
    }

    /// Other participants who share both of this participant's tables.
    pub fn co_residents(&self, participant: ParticipantId) -> Vec<ParticipantId> {
        let seat = self.seat(participant);
        self.seats
            .iter()
            .filter(|other| {
                other.participant != participant
                    && other.initial_table == seat.initial_table
                    && other.destination_table == seat.destination_table
            })
            .map(|other| other.participant)
            .collect()
    }

    /// Largest number of co-residents any participant has.
    pub fn max_overlap(&self) -> usize {
        self.seats
            .iter()
            .map(|seat| self.co_residents(seat.participant).len())
            .max()
            .unwrap_or(0)
    }
}
