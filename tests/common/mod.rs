// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use table_shuffle::sequence::SequenceMode;
use table_shuffle::{Assignment, SeatingConfig, Step};

/// Check every seating invariant of a finished assignment.
pub fn assert_invariants(assignment: &Assignment, config: &SeatingConfig) {
    let capacities = config.table_capacities();
    let seats = assignment.seats();
    assert_eq!(seats.len(), config.population());

    // Capacity, and rosters agree with the seats.
    for table in assignment.tables() {
        let t = table.id().as_usize();
        assert_eq!(table.capacity(), capacities[t]);
        for step in [Step::Initial, Step::Destination] {
            let roster = table.roster(step);
            assert!(
                roster.len() <= table.capacity(),
                "{} over capacity in {} round",
                table.id(),
                step
            );
            for &p in roster {
                let seat = assignment.seat(p);
                let expected = match step {
                    Step::Initial => seat.initial_table,
                    Step::Destination => seat.destination_table,
                };
                assert_eq!(expected, table.id());
            }
        }
    }
    let seated: usize = assignment
        .tables()
        .iter()
        .map(|t| t.roster(Step::Initial).len())
        .sum();
    assert_eq!(seated, seats.len());

    let expected_len = match config.sequence_mode {
        SequenceMode::Random => config.sequence_length,
        SequenceMode::Coding => 3 * config.sequence_length,
    };

    for (i, seat) in seats.iter().enumerate() {
        assert_eq!(seat.participant.as_usize(), i);
        assert_ne!(
            seat.initial_table, seat.destination_table,
            "participant {} stayed put",
            seat.participant
        );
        assert_eq!(seat.sequence.len(), expected_len);

        if let Some(partner) = seat.partner {
            let other = assignment.seat(partner);
            assert_eq!(other.partner, Some(seat.participant));
            assert_ne!(seat.initial_table, other.initial_table);
            assert_ne!(seat.destination_table, other.destination_table);
            assert_eq!(other.sequence, seat.sequence.reverse_complement());
        }

        let overlap = assignment.co_residents(seat.participant).len();
        assert!(
            overlap <= config.overlap_limit,
            "participant {} has {} co-residents, limit {}",
            seat.participant,
            overlap,
            config.overlap_limit
        );
    }
}

/// Seeds to sweep when a configuration only succeeds for some of them.
pub const SEEDS: std::ops::Range<u64> = 0..64;
