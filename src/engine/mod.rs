// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Randomized seating engine.
//!
//! The engine seats every participant twice by trial and error:
//!
//! 1. Draw a table uniformly at random.
//! 2. Ask each [`Constraint`] that applies to the current round whether the
//!    draw is acceptable; the first refusal rejects it.
//! 3. Redraw until a table is accepted or the attempt budget is spent.
//!
//! The initial table is chosen first, then the destination table, then both
//! are committed. There is no backtracking: a spent budget aborts the whole
//! run with [`SeatingError::InfeasibleConstraint`], and the remedy is another
//! seed or looser limits.
//!
//! # Ordering
//!
//! Participants are processed in population order (or a seeded permutation
//! of it). With bonded pairing, consecutive participants form a pair: the
//! pair's sequences are drawn first, then both members are placed back to
//! back so that the second member's constraints see the first member's tables.
//!
//! # Determinism
//!
//! One `ChaCha8Rng` seeded from [`SeatingConfig::seed`] feeds both the
//! sequence generator and the table draws, in a fixed order. Equal configs
//! produce equal assignments.
//!
//! # Example
//!
//! ```
//! use table_shuffle::config::SeatingConfig;
//! use table_shuffle::engine::SeatingEngine;
//!
//! let config = SeatingConfig {
//!     overlap_limit: 1,
//!     ..SeatingConfig::uniform(2, 2)
//! };
//! let engine = SeatingEngine::new(config).unwrap();
//! let assignment = engine.run().unwrap();
//! assert_eq!(assignment.seats().len(), 4);
//! ```

pub mod constraint;

pub use constraint::{Candidate, Constraint};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, info, trace};

use crate::assignment::{Assignment, Seat};
use crate::config::{Pairing, SeatingConfig};
use crate::constraints;
use crate::context::SeatingContext;
use crate::errors::{ConstraintKind, SeatingError};
use crate::ids::{ParticipantId, TableId};
use crate::sequence::{Sequence, SequenceGenerator};
use crate::state::Counters;

/// Rejection counts for one table choice, used to name the cause of failure.
#[derive(Debug, Default)]
struct RejectionTally {
    counts: [usize; ConstraintKind::COUNT],
    last: Option<ConstraintKind>,
}

impl RejectionTally {
    fn record(&mut self, kind: ConstraintKind) {
        self.counts[kind as usize] += 1;
        self.last = Some(kind);
    }

    /// The constraint that refused the most draws. Ties go to the one that
    /// refused most recently.
    fn dominant(&self) -> Option<ConstraintKind> {
        let last = self.last?;
        let best = self.counts.iter().copied().max().unwrap_or(0);
        if self.counts[last as usize] == best {
            return Some(last);
        }
        ConstraintKind::iter().find(|&kind| self.counts[kind as usize] == best)
    }
}

/// Seats a population at tables twice under the configured constraints.
#[derive(Debug)]
pub struct SeatingEngine {
    config: SeatingConfig,

    /// Rules checked for every draw, in order.
    constraints: Vec<Box<dyn Constraint>>,
}

impl SeatingEngine {
    /// Create an engine with the standard constraints.
    ///
    /// Fails with [`SeatingError::ConfigurationInvalid`] before any random
    /// draw if the configuration is structurally impossible.
    pub fn new(config: SeatingConfig) -> Result<Self, SeatingError> {
        Self::with_constraints(config, constraints::standard())
    }

    /// Create an engine with a custom rule set.
    pub fn with_constraints(
        config: SeatingConfig,
        constraints: Vec<Box<dyn Constraint>>,
    ) -> Result<Self, SeatingError> {
        config.validate()?;
        Ok(Self {
            config,
            constraints,
        })
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// Run the search with a stream seeded from the config.
    pub fn run(&self) -> Result<Assignment, SeatingError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.run_with(&mut rng)
    }

    /// Run the search, drawing from `rng`.
    ///
    /// Returns an assignment only if every participant was seated in both
    /// rounds; otherwise nothing of the partial run is exposed.
    pub fn run_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Assignment, SeatingError> {
        let capacities = self.config.table_capacities();
        let population = self.config.population();
        info!(
            tables = capacities.len(),
            population,
            overlap_limit = self.config.overlap_limit,
            seed = self.config.seed,
            pairing = ?self.config.pairing,
            "seating run started"
        );

        let mut order: Vec<ParticipantId> = (0..population).map(ParticipantId::new).collect();
        if self.config.shuffle {
            order.shuffle(rng);
        }

        let mut ctx = SeatingContext::new(&capacities, population, self.config.overlap_limit);
        let mut generator = SequenceGenerator::new(
            self.config.alphabet,
            self.config.sequence_mode,
            self.config.sequence_length,
        );
        let unit = match self.config.pairing {
            Pairing::Solo => 1,
            Pairing::Bonded => 2,
        };

        let mut seats = Vec::with_capacity(population);
        for members in order.chunks(unit) {
            let sequences: Vec<Sequence> = match members {
                &[a, b] => {
                    ctx.bond(a, b);
                    let (strand, partner) = generator.generate_pair(rng)?;
                    vec![strand, partner]
                }
                _ => vec![generator.generate(rng)?],
            };
            for (&participant, sequence) in members.iter().zip(sequences) {
                let (initial, destination) = self.place(&mut ctx, rng, participant)?;
                seats.push(Seat {
                    participant,
                    initial_table: initial,
                    destination_table: destination,
                    sequence,
                    partner: ctx.participant(participant).partner,
                });
            }
        }

        ctx.statistics
            .add(Counters::RejectedCodons, generator.rejected_codons());
        info!(statistics = %ctx.statistics, "seating run complete");
        Ok(Assignment::new(self.config.seed, order, seats, ctx))
    }

    /// Choose both tables for one participant and commit them.
    fn place<R: Rng + ?Sized>(
        &self,
        ctx: &mut SeatingContext,
        rng: &mut R,
        participant: ParticipantId,
    ) -> Result<(TableId, TableId), SeatingError> {
        let initial = self.choose(ctx, rng, Candidate::initial(participant))?;
        let destination = self.choose(ctx, rng, Candidate::destination(participant, initial))?;
        ctx.commit(participant, initial, destination);
        ctx.statistics.increment_counter(Counters::Placements);
        debug!(
            participant = participant.as_usize(),
            initial = initial.as_usize(),
            destination = destination.as_usize(),
            "seated"
        );
        Ok((initial, destination))
    }

    /// Draw tables until one satisfies every applicable constraint.
    fn choose<R: Rng + ?Sized>(
        &self,
        ctx: &mut SeatingContext,
        rng: &mut R,
        candidate: Candidate,
    ) -> Result<TableId, SeatingError> {
        let ntables = ctx.ntables();
        let mut tally = RejectionTally::default();

        for attempt in 1..=self.config.max_attempts {
            let table = TableId::new(rng.random_range(0..ntables));
            ctx.statistics.increment_counter(Counters::Draws);

            let refusal = self
                .constraints
                .iter()
                .filter(|c| c.applies_to(candidate.step))
                .find(|c| !c.admits(&*ctx, &candidate, table));

            match refusal {
                None => return Ok(table),
                Some(constraint) => {
                    let kind = constraint.kind();
                    trace!(
                        participant = candidate.participant.as_usize(),
                        step = %candidate.step,
                        table = table.as_usize(),
                        attempt,
                        constraint = constraint.name(),
                        "draw rejected"
                    );
                    ctx.statistics.record_rejection(kind);
                    tally.record(kind);
                }
            }
        }

        Err(SeatingError::InfeasibleConstraint {
            participant: candidate.participant,
            step: candidate.step,
            constraint: tally.dominant().unwrap_or(ConstraintKind::TableFull),
            attempts: self.config.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_ATTEMPTS;
    use crate::errors::{ConfigError, Step};

    #[test]
    fn test_tally_prefers_most_frequent() {
        let mut tally = RejectionTally::default();
        assert_eq!(tally.dominant(), None);
        tally.record(ConstraintKind::TableFull);
        tally.record(ConstraintKind::TableFull);
        tally.record(ConstraintKind::SameTable);
        assert_eq!(tally.dominant(), Some(ConstraintKind::TableFull));
    }

    #[test]
    fn test_tally_ties_go_to_latest() {
        let mut tally = RejectionTally::default();
        tally.record(ConstraintKind::TableFull);
        tally.record(ConstraintKind::OverlapLimit);
        assert_eq!(tally.dominant(), Some(ConstraintKind::OverlapLimit));
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let err = SeatingEngine::new(SeatingConfig::uniform(1, 10)).unwrap_err();
        assert_eq!(
            err,
            SeatingError::ConfigurationInvalid(ConfigError::TooFewTables { tables: 1 })
        );
    }

    #[test]
    fn test_two_tables_two_pairs_always_succeeds() {
        for seed in 0..20 {
            let config = SeatingConfig {
                seed,
                overlap_limit: 1,
                ..SeatingConfig::uniform(2, 2)
            };
            let assignment = SeatingEngine::new(config).unwrap().run().unwrap();
            for seat in assignment.seats() {
                assert_ne!(seat.initial_table, seat.destination_table);
            }
            assert_eq!(assignment.statistics().get(Counters::Placements), 4);
        }
    }

    #[test]
    fn test_overlap_zero_on_two_tables_is_infeasible() {
        // Everyone at table 0 must move to table 1, so a second person from
        // table 0 can never arrive without a shared companion.
        let config = SeatingConfig {
            overlap_limit: 0,
            ..SeatingConfig::uniform(2, 2)
        };
        let err = SeatingEngine::new(config).unwrap().run().unwrap_err();
        match err {
            SeatingError::InfeasibleConstraint { step, attempts, .. } => {
                assert_eq!(step, Step::Destination);
                assert_eq!(attempts, DEFAULT_MAX_ATTEMPTS);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_without_constraints_anything_goes() {
        let config = SeatingConfig {
            overlap_limit: 0,
            ..SeatingConfig::uniform(2, 2)
        };
        let engine =
            SeatingEngine::with_constraints(config, vec![Box::new(constraints::CapacityConstraint)])
                .unwrap();
        let assignment = engine.run().unwrap();
        assert_eq!(assignment.seats().len(), 4);
    }
}
