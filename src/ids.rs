// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Index newtypes for participants and tables.
//!
//! Both are plain `usize` indices into the run's arenas. The newtypes keep a
//! participant index from being used where a table index is expected.

use std::fmt;

/// A participant in the range 0..N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(usize);

impl ParticipantId {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    /// Get the participant as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0
    }

    /// The number printed on cards and in the roster (1-based).
    pub fn display_number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.display_number())
    }
}

/// A table in the range 0..T.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(usize);

impl TableId {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    /// Get the table as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0
    }

    /// The number printed on cards and in the roster (1-based).
    pub fn display_number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table {}", self.display_number())
    }
}
