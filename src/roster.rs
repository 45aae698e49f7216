// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tab-separated roster export.
//!
//! One line per participant, ordered by id, with the numbers printed on the
//! cards (1-based):
//!
//! ```text
//! participant_id  initial_table_id  table_id  sequence
//! 1               3                 7         AUGGCA...
//! ```
//!
//! A companion pairs file lists each pair once.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::assignment::Assignment;

pub const ROSTER_HEADER: &str = "participant_id\tinitial_table_id\ttable_id\tsequence";
pub const PAIRS_HEADER: &str = "participant_id\tpartner_id";

/// Write the roster to any writer.
pub fn write_roster<W: Write>(mut out: W, assignment: &Assignment) -> io::Result<()> {
    writeln!(out, "{}", ROSTER_HEADER)?;
    for seat in assignment.seats() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            seat.participant.display_number(),
            seat.initial_table.display_number(),
            seat.destination_table.display_number(),
            seat.sequence
        )?;
    }
    out.flush()
}

/// Write the pair list to any writer.
pub fn write_pairs<W: Write>(mut out: W, assignment: &Assignment) -> io::Result<()> {
    writeln!(out, "{}", PAIRS_HEADER)?;
    for (a, b) in assignment.pairs() {
        writeln!(out, "{}\t{}", a.display_number(), b.display_number())?;
    }
    out.flush()
}

/// Write a file through a temporary sibling and rename it into place, so a
/// reader never sees a half-written roster.
pub fn export<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<fs::File>) -> io::Result<()>,
{
    let tmp = temporary_path(path);
    let result = fs::File::create(&tmp).and_then(|file| {
        let mut out = BufWriter::new(file);
        write(&mut out)?;
        out.into_inner().map_err(|e| e.into_error())?.sync_all()
    });
    match result {
        Ok(()) => fs::rename(&tmp, path),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

/// Export the roster to `path`.
pub fn export_roster(path: &Path, assignment: &Assignment) -> io::Result<()> {
    export(path, |out| write_roster(out, assignment))
}

/// Export the pair list to `path`.
pub fn export_pairs(path: &Path, assignment: &Assignment) -> io::Result<()> {
    export(path, |out| write_pairs(out, assignment))
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
