// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the context and incremented by the engine as it
//! draws tables and sequences.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::EnumCount as EnumCountMacro;

use crate::errors::ConstraintKind;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Table indices drawn, accepted or not.
    Draws,
    /// Participants seated in both rounds.
    Placements,
    /// Stop codons redrawn while generating coding sequences.
    RejectedCodons,
}

const COUNT: usize = Counters::COUNT + ConstraintKind::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    pub(crate) fn record_rejection(&mut self, kind: ConstraintKind) {
        self.stats[Counters::COUNT + kind as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of draws rejected by the given constraint.
    pub fn rejections(&self, kind: ConstraintKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    pub fn total_rejections(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} placements, {} draws, {} rejected codons",
            self.get(Counters::Placements),
            self.get(Counters::Draws),
            self.get(Counters::RejectedCodons)
        )?;
        for kind in ConstraintKind::iter() {
            write!(f, ", {} {}", self.rejections(kind), kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_separate() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Draws);
        stats.increment_counter(Counters::Draws);
        stats.record_rejection(ConstraintKind::TableFull);
        stats.record_rejection(ConstraintKind::OverlapLimit);
        stats.record_rejection(ConstraintKind::OverlapLimit);

        assert_eq!(stats.get(Counters::Draws), 2);
        assert_eq!(stats.get(Counters::Placements), 0);
        assert_eq!(stats.rejections(ConstraintKind::TableFull), 1);
        assert_eq!(stats.rejections(ConstraintKind::OverlapLimit), 2);
        assert_eq!(stats.rejections(ConstraintKind::SameTable), 0);
        assert_eq!(stats.total_rejections(), 3);
    }

    #[test]
    fn test_display_lists_every_constraint() {
        let text = Statistics::new().to_string();
        assert!(text.contains("0 table-full"));
        assert!(text.contains("0 same-table"));
        assert!(text.contains("0 partner-collision"));
        assert!(text.contains("0 overlap-limit"));
    }
}
