// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable run state.
//!
//! - Tables: the arena of tables, each with one roster per round
//! - Participants: partner links and the tables chosen so far
//! - Statistics: draw and rejection counters
//!
//! Rosters only ever grow; nothing here is undone during a run.

pub mod participants;
pub mod statistics;
pub mod tables;

pub use participants::Participant;
pub use statistics::{Counters, Statistics};
pub use tables::Table;
