// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Codon translation with the standard genetic code.
//!
//! Nucleotide codes follow [`super::Nucleotide`]: A=0, C=1, G=2, T/U=3.

use super::{Nucleotide, Sequence};

/// Marker emitted by translation for a stop codon.
pub const STOP: char = '*';

/// `AUG` (or `ATG`), the start codon every coding sequence begins with.
pub const START_CODON: [Nucleotide; 3] = [Nucleotide::A, Nucleotide::T, Nucleotide::G];

/// Standard genetic code (NCBI table 1), indexed in T, C, A, G order:
/// `16 * first + 4 * second + third`.
const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Position of a nucleotide in the TCAG ordering used by [`STANDARD_CODE`].
#[inline]
fn tcag_index(n: Nucleotide) -> usize {
    match n {
        Nucleotide::T => 0,
        Nucleotide::C => 1,
        Nucleotide::A => 2,
        Nucleotide::G => 3,
    }
}

/// Translate a single codon to its one-letter amino acid, or [`STOP`].
pub fn translate_codon(codon: [Nucleotide; 3]) -> char {
    let index = 16 * tcag_index(codon[0]) + 4 * tcag_index(codon[1]) + tcag_index(codon[2]);
    STANDARD_CODE[index] as char
}

/// Whether a codon terminates translation.
pub fn is_stop(codon: [Nucleotide; 3]) -> bool {
    translate_codon(codon) == STOP
}

/// Translate a sequence codon by codon. Trailing bases that do not form a
/// full codon are ignored.
pub fn translate(sequence: &Sequence) -> String {
    sequence
        .nucleotides()
        .chunks_exact(3)
        .map(|c| translate_codon([c[0], c[1], c[2]]))
        .collect()
}
