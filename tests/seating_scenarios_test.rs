// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end seating runs on small, hand-checkable configurations.

mod common;

use common::{assert_invariants, SEEDS};
use table_shuffle::config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_POPULATION};
use table_shuffle::ids::ParticipantId;
use table_shuffle::state::Counters;
use table_shuffle::{
    ConfigError, ConstraintKind, Pairing, SeatingConfig, SeatingEngine, SeatingError, Step,
};

/// Three tables of three, six participants: plenty of room, never infeasible.
fn roomy(seed: u64) -> SeatingConfig {
    SeatingConfig {
        population: Some(6),
        overlap_limit: 2,
        seed,
        ..SeatingConfig::uniform(3, 3)
    }
}

#[test]
fn test_two_tables_two_pairs() {
    for seed in SEEDS {
        let config = SeatingConfig {
            overlap_limit: 1,
            seed,
            ..SeatingConfig::uniform(2, 2)
        };
        let assignment = SeatingEngine::new(config.clone())
            .unwrap()
            .run()
            .unwrap_or_else(|e| panic!("seed {} failed: {}", seed, e));
        assert_invariants(&assignment, &config);

        // With two tables everybody swaps sides.
        for seat in assignment.seats() {
            assert_eq!(
                seat.destination_table.as_usize(),
                1 - seat.initial_table.as_usize()
            );
        }
        assert_eq!(
            assignment.pairs(),
            vec![
                (ParticipantId::new(0), ParticipantId::new(1)),
                (ParticipantId::new(2), ParticipantId::new(3)),
            ]
        );
        assert_eq!(assignment.max_overlap(), 1);
    }
}

/// Seed 124 on two tables of two always yields this roster. Any change to
/// how the stream is consumed (draw order, shuffling, `rand` upgrades) shows
/// up here.
#[test]
fn test_two_tables_two_pairs_seed_124_roster() {
    let config = SeatingConfig {
        overlap_limit: 1,
        seed: 124,
        ..SeatingConfig::uniform(2, 2)
    };
    let assignment = SeatingEngine::new(config).unwrap().run().unwrap();
    let roster: Vec<(usize, usize, usize, String)> = assignment
        .seats()
        .iter()
        .map(|seat| {
            (
                seat.participant.display_number(),
                seat.initial_table.display_number(),
                seat.destination_table.display_number(),
                seat.sequence.to_string(),
            )
        })
        .collect();
    assert_eq!(
        roster,
        vec![
            (1, 1, 2, "CAAUUCG".to_string()),
            (2, 2, 1, "CGAAUUG".to_string()),
            (3, 2, 1, "UAAUGUU".to_string()),
            (4, 1, 2, "AACAUUA".to_string()),
        ]
    );
}

#[test]
fn test_default_config_runs() {
    let config = SeatingConfig::default();
    let assignment = SeatingEngine::new(config.clone())
        .unwrap()
        .run()
        .unwrap_or_else(|e| panic!("default config failed: {}", e));
    assert_invariants(&assignment, &config);
    assert_eq!(assignment.seats().len(), DEFAULT_POPULATION);
    assert!(assignment.max_overlap() <= 1);
}

#[test]
fn test_default_layout_across_seeds() {
    for seed in 0..16 {
        let config = SeatingConfig {
            seed,
            ..SeatingConfig::default()
        };
        let assignment = SeatingEngine::new(config.clone())
            .unwrap()
            .run()
            .unwrap_or_else(|e| panic!("seed {} failed: {}", seed, e));
        assert_invariants(&assignment, &config);
    }
}

#[test]
fn test_single_table_is_rejected_up_front() {
    let err = SeatingEngine::new(SeatingConfig::uniform(1, 4)).unwrap_err();
    assert_eq!(
        err,
        SeatingError::ConfigurationInvalid(ConfigError::TooFewTables { tables: 1 })
    );
}

#[test]
fn test_exact_capacity_without_overlap() {
    let mut successes = 0;
    for seed in SEEDS {
        let config = SeatingConfig {
            overlap_limit: 0,
            sequence_length: 7,
            seed,
            ..SeatingConfig::uniform(5, 2)
        };
        assert_eq!(config.total_capacity(), config.population());

        match SeatingEngine::new(config.clone()).unwrap().run() {
            Ok(assignment) => {
                successes += 1;
                assert_invariants(&assignment, &config);
                assert_eq!(assignment.max_overlap(), 0);
                for table in assignment.tables() {
                    assert_eq!(table.roster(Step::Initial).len(), 2);
                    assert_eq!(table.roster(Step::Destination).len(), 2);
                }
            }
            Err(SeatingError::InfeasibleConstraint { .. }) => {}
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
    assert!(successes > 0, "no seed in {:?} succeeded", SEEDS);
}

#[test]
fn test_same_seed_same_assignment() {
    for seed in [0, 7, 124] {
        let config = SeatingConfig {
            seed,
            ..SeatingConfig::uniform(6, 4)
        };
        let first = SeatingEngine::new(config.clone())
            .unwrap()
            .run()
            .map(|a| a.seats().to_vec());
        let second = SeatingEngine::new(config)
            .unwrap()
            .run()
            .map(|a| a.seats().to_vec());
        assert_eq!(first, second);
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = SeatingEngine::new(roomy(1)).unwrap().run().unwrap();
    let b = SeatingEngine::new(roomy(2)).unwrap().run().unwrap();
    assert_ne!(a.seats(), b.seats());
}

#[test]
fn test_roomy_config_always_succeeds() {
    for seed in SEEDS {
        let config = roomy(seed);
        let assignment = SeatingEngine::new(config.clone()).unwrap().run().unwrap();
        assert_invariants(&assignment, &config);
        assert_eq!(assignment.statistics().get(Counters::Placements), 6);
        assert!(assignment.statistics().get(Counters::Draws) >= 12);
    }
}

#[test]
fn test_solo_participants_have_no_partner() {
    let config = SeatingConfig {
        pairing: Pairing::Solo,
        population: Some(5),
        ..roomy(3)
    };
    let assignment = SeatingEngine::new(config.clone()).unwrap().run().unwrap();
    assert_invariants(&assignment, &config);
    assert!(assignment.pairs().is_empty());
    assert!(assignment.seats().iter().all(|seat| seat.partner.is_none()));
}

#[test]
fn test_shuffled_order_pairs_consecutive_entries() {
    let config = SeatingConfig {
        shuffle: true,
        ..roomy(11)
    };
    let assignment = SeatingEngine::new(config.clone()).unwrap().run().unwrap();
    assert_invariants(&assignment, &config);

    let order = assignment.processing_order();
    let mut sorted = order.to_vec();
    sorted.sort();
    assert_eq!(sorted, (0..6).map(ParticipantId::new).collect::<Vec<_>>());
    for pair in order.chunks(2) {
        assert_eq!(assignment.seat(pair[0]).partner, Some(pair[1]));
    }
}

#[test]
fn test_per_table_capacities() {
    let config = SeatingConfig {
        population: Some(6),
        overlap_limit: 2,
        ..SeatingConfig::with_capacities(vec![4, 2, 3])
    };
    for seed in 0..16 {
        let config = SeatingConfig { seed, ..config.clone() };
        if let Ok(assignment) = SeatingEngine::new(config.clone()).unwrap().run() {
            assert_invariants(&assignment, &config);
        }
    }
}

#[test]
fn test_impossible_overlap_reports_destination_failure() {
    // Two people start at each table and both must cross to the other one.
    let config = SeatingConfig {
        overlap_limit: 0,
        ..SeatingConfig::uniform(2, 2)
    };
    let err = SeatingEngine::new(config).unwrap().run().unwrap_err();
    match err {
        SeatingError::InfeasibleConstraint {
            participant,
            step,
            constraint,
            attempts,
        } => {
            assert_eq!(participant, ParticipantId::new(2));
            assert_eq!(step, Step::Destination);
            assert!(matches!(
                constraint,
                ConstraintKind::OverlapLimit | ConstraintKind::SameTable
            ));
            assert_eq!(attempts, DEFAULT_MAX_ATTEMPTS);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_small_budget_still_bounded() {
    let config = SeatingConfig {
        max_attempts: 1,
        ..SeatingConfig::uniform(8, 8)
    };
    // One draw per choice rarely suffices for 64 people; it must fail cleanly.
    match SeatingEngine::new(config).unwrap().run() {
        Ok(_) | Err(SeatingError::InfeasibleConstraint { attempts: 1, .. }) => {}
        Err(other) => panic!("unexpected error: {:?}", other),
    }
}
