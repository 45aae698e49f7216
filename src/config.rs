// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! A [`SeatingConfig`] fully determines a run: two runs with equal configs
//! (seed included) produce identical assignments and sequences. Configs can
//! be written in TOML; every field is optional and falls back to
//! [`SeatingConfig::default`].
//!
//! ```toml
//! tables = 6
//! table_capacity = 8
//! overlap_limit = 1
//! seed = 7
//! pairing = "bonded"
//! alphabet = "dna"
//! ```

use std::str::FromStr;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::sequence::{Alphabet, SequenceMode};

/// No table may seat more than this many participants.
pub const MAX_TABLE_CAPACITY: usize = 100;

/// Draws allowed per table choice unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Participants seated by [`SeatingConfig::default`]: 23 tables of 10 with
/// 20 seats to spare. Filling every seat leaves the last few participants
/// with a single free destination, which is often their own table or their
/// partner's, so most full runs abort.
pub const DEFAULT_POPULATION: usize = 210;

const LAYOUT_KEYS: [&str; 3] = ["tables", "table_capacity", "capacities"];

/// Whether participants come in complementary pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pairing {
    /// Every participant has an independent sequence and no partner.
    Solo,
    /// Participants are generated two at a time with reverse-complement
    /// sequences and must never share a table.
    #[default]
    Bonded,
}

impl FromStr for Pairing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solo" => Ok(Pairing::Solo),
            "bonded" => Ok(Pairing::Bonded),
            _ => Err(format!("unknown pairing '{}', expected solo or bonded", s)),
        }
    }
}

/// Configuration for one seating run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeatingConfig {
    /// Number of tables (ignored when `capacities` is set).
    pub tables: usize,
    /// Seats per table (ignored when `capacities` is set).
    pub table_capacity: usize,
    /// Per-table capacities, overriding `tables` and `table_capacity`.
    pub capacities: Option<Vec<usize>>,
    /// Number of participants. `None` fills every seat.
    pub population: Option<usize>,
    /// Nucleotides per sequence in random mode, codons in coding mode.
    pub sequence_length: usize,
    /// Most co-residents a participant may have at both of its tables.
    pub overlap_limit: usize,
    /// Seed for the single pseudo-random stream.
    pub seed: u64,
    /// Draws allowed per table choice before the run is declared infeasible.
    pub max_attempts: usize,
    pub pairing: Pairing,
    pub alphabet: Alphabet,
    pub sequence_mode: SequenceMode,
    /// Process participants in a seeded random order instead of by id.
    pub shuffle: bool,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            tables: 23,
            table_capacity: 10,
            capacities: None,
            population: Some(DEFAULT_POPULATION),
            sequence_length: 7,
            overlap_limit: 1,
            seed: 124,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            pairing: Pairing::Bonded,
            alphabet: Alphabet::Rna,
            sequence_mode: SequenceMode::Random,
            shuffle: false,
        }
    }
}

impl SeatingConfig {
    /// `tables` tables of `table_capacity` seats each, filled completely.
    pub fn uniform(tables: usize, table_capacity: usize) -> Self {
        Self {
            tables,
            table_capacity,
            population: None,
            ..Default::default()
        }
    }

    /// Tables with individual capacities, filled completely.
    pub fn with_capacities(capacities: Vec<usize>) -> Self {
        Self {
            tables: capacities.len(),
            capacities: Some(capacities),
            population: None,
            ..Default::default()
        }
    }

    /// Parse a TOML document. Missing fields take their default values,
    /// except that a document describing its own table layout without a
    /// `population` fills every seat of that layout.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = s.parse()?;
        let fills_layout = !table.contains_key("population")
            && LAYOUT_KEYS.iter().any(|key| table.contains_key(*key));
        let mut config: Self = toml::Value::Table(table).try_into()?;
        if fills_layout {
            config.population = None;
        }
        Ok(config)
    }

    /// Capacity of every table, in table order.
    pub fn table_capacities(&self) -> Vec<usize> {
        match &self.capacities {
            Some(capacities) => capacities.clone(),
            None => vec![self.table_capacity; self.tables],
        }
    }

    pub fn total_capacity(&self) -> usize {
        self.table_capacities().iter().sum()
    }

    pub fn population(&self) -> usize {
        self.population.unwrap_or_else(|| self.total_capacity())
    }

    /// Check structural preconditions. Nothing here consumes randomness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacities = self.table_capacities();
        if capacities.len() < 2 {
            return Err(ConfigError::TooFewTables {
                tables: capacities.len(),
            });
        }
        for (table, &capacity) in capacities.iter().enumerate() {
            if capacity == 0 {
                return Err(ConfigError::EmptyTable { table });
            }
            if capacity > MAX_TABLE_CAPACITY {
                return Err(ConfigError::CapacityTooLarge {
                    table,
                    capacity,
                    max: MAX_TABLE_CAPACITY,
                });
            }
        }

        let population = self.population();
        let capacity: usize = capacities.iter().sum();
        if population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if population > capacity {
            return Err(ConfigError::InsufficientCapacity {
                population,
                capacity,
            });
        }
        if self.pairing == Pairing::Bonded && population % 2 != 0 {
            return Err(ConfigError::OddPopulation { population });
        }
        if self.sequence_length == 0 {
            return Err(ConfigError::EmptySequence);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }
}
