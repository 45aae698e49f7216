// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Identifier sequences and their reverse complements.
//!
//! Every participant carries a short nucleotide sequence. In a pair, one
//! member receives a freshly drawn sequence `s` and the other receives
//! `s.reverse_complement()`, so the two cards read as the strands of one
//! double helix.
//!
//! Two generation modes exist:
//!
//! - [`SequenceMode::Random`]: `length` independent uniform nucleotides.
//! - [`SequenceMode::Coding`]: a start codon followed by `length - 1` codons,
//!   none of which is a stop codon. Here `length` counts codons, so the
//!   sequence has `3 * length` nucleotides and translates to a protein of
//!   `length` residues beginning with `M`.

pub mod codon;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Deserialize;

use crate::errors::SeatingError;

pub use codon::{translate, START_CODON};

/// Upper bound on redraws of a single codon. With the standard code only 3
/// of 64 codons are rejected, so reaching this means the code table is broken.
pub const MAX_CODON_DRAWS: usize = 10_000;

/// One base, encoded A=0, C=1, G=2, T=3 (U in RNA) so that the complement
/// of code `c` is `3 - c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    /// Thymine in DNA, uracil in RNA.
    T = 3,
}

impl Nucleotide {
    const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Watson-Crick partner: A<->T(U), C<->G.
    #[inline]
    pub fn complement(self) -> Self {
        Self::ALL[usize::from(3 - self.code())]
    }

    pub fn to_char(self, alphabet: Alphabet) -> char {
        match (self, alphabet) {
            (Nucleotide::A, _) => 'A',
            (Nucleotide::C, _) => 'C',
            (Nucleotide::G, _) => 'G',
            (Nucleotide::T, Alphabet::Dna) => 'T',
            (Nucleotide::T, Alphabet::Rna) => 'U',
        }
    }

    fn from_char(c: char) -> Option<(Self, Option<Alphabet>)> {
        match c.to_ascii_uppercase() {
            'A' => Some((Nucleotide::A, None)),
            'C' => Some((Nucleotide::C, None)),
            'G' => Some((Nucleotide::G, None)),
            'T' => Some((Nucleotide::T, Some(Alphabet::Dna))),
            'U' => Some((Nucleotide::T, Some(Alphabet::Rna))),
            _ => None,
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Letters used when rendering a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// A, C, G, T
    Dna,
    /// A, C, G, U
    #[default]
    Rna,
}

impl FromStr for Alphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dna" => Ok(Alphabet::Dna),
            "rna" => Ok(Alphabet::Rna),
            _ => Err(format!("unknown alphabet '{}', expected dna or rna", s)),
        }
    }
}

/// How sequences are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceMode {
    /// Independent uniform nucleotides.
    #[default]
    Random,
    /// Start codon plus stop-free codons.
    Coding,
}

impl FromStr for SequenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(SequenceMode::Random),
            "coding" => Ok(SequenceMode::Coding),
            _ => Err(format!("unknown sequence mode '{}', expected random or coding", s)),
        }
    }
}

/// A nucleotide sequence together with the alphabet it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    alphabet: Alphabet,
    nucleotides: Vec<Nucleotide>,
}

impl Sequence {
    pub fn new(alphabet: Alphabet, nucleotides: Vec<Nucleotide>) -> Self {
        Self {
            alphabet,
            nucleotides,
        }
    }

    /// Parse `s` and render it in `alphabet`, regardless of whether `s` used T or U.
    pub fn from_str_with(s: &str, alphabet: Alphabet) -> Option<Self> {
        let nucleotides = s
            .chars()
            .map(|c| Nucleotide::from_char(c).map(|(n, _)| n))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(alphabet, nucleotides))
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn nucleotides(&self) -> &[Nucleotide] {
        &self.nucleotides
    }

    pub fn len(&self) -> usize {
        self.nucleotides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nucleotides.is_empty()
    }

    /// Complement every base, then reverse. An involution.
    pub fn reverse_complement(&self) -> Self {
        Self {
            alphabet: self.alphabet,
            nucleotides: self
                .nucleotides
                .iter()
                .rev()
                .map(|n| n.complement())
                .collect(),
        }
    }

    /// Whether `other` is exactly the reverse complement of this sequence.
    pub fn pairs_with(&self, other: &Sequence) -> bool {
        self.nucleotides.len() == other.nucleotides.len()
            && self
                .nucleotides
                .iter()
                .zip(other.nucleotides.iter().rev())
                .all(|(a, b)| a.complement() == *b)
    }

    /// Protein encoded by this sequence under the standard genetic code.
    pub fn translate(&self) -> String {
        codon::translate(self)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in &self.nucleotides {
            write!(f, "{}", n.to_char(self.alphabet))?;
        }
        Ok(())
    }
}

/// Parses A/C/G/T/U (case-insensitive). The alphabet is RNA if any `U`
/// appears, DNA otherwise. Mixing T and U is rejected.
impl FromStr for Sequence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut alphabet = None;
        let mut nucleotides = Vec::with_capacity(s.len());
        for c in s.chars() {
            let (n, implied) =
                Nucleotide::from_char(c).ok_or_else(|| format!("invalid nucleotide '{}'", c))?;
            if let Some(implied) = implied {
                if alphabet.is_some_and(|a| a != implied) {
                    return Err(format!("sequence '{}' mixes T and U", s));
                }
                alphabet = Some(implied);
            }
            nucleotides.push(n);
        }
        Ok(Self::new(alphabet.unwrap_or(Alphabet::Dna), nucleotides))
    }
}

/// Draws identifier sequences from a caller-supplied random stream.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    alphabet: Alphabet,
    mode: SequenceMode,
    length: usize,
    rejected_codons: u64,
}

impl SequenceGenerator {
    /// `length` counts nucleotides in random mode and codons in coding mode.
    pub fn new(alphabet: Alphabet, mode: SequenceMode, length: usize) -> Self {
        Self {
            alphabet,
            mode,
            length,
            rejected_codons: 0,
        }
    }

    /// Draw one sequence.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Sequence, SeatingError> {
        match self.mode {
            SequenceMode::Random => Ok(self.generate_random(rng)),
            SequenceMode::Coding => self.generate_coding(rng),
        }
    }

    /// Draw one sequence for a bonded pair: `(s, reverse_complement(s))`.
    pub fn generate_pair<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Sequence, Sequence), SeatingError> {
        let strand = self.generate(rng)?;
        let partner = strand.reverse_complement();
        Ok((strand, partner))
    }

    /// Number of stop codons rejected so far.
    pub fn rejected_codons(&self) -> u64 {
        self.rejected_codons
    }

    fn generate_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Sequence {
        let nucleotides = (0..self.length).map(|_| Nucleotide::random(rng)).collect();
        Sequence::new(self.alphabet, nucleotides)
    }

    fn generate_coding<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Sequence, SeatingError> {
        let mut nucleotides = Vec::with_capacity(3 * self.length);
        nucleotides.extend_from_slice(&START_CODON);
        for _ in 1..self.length {
            nucleotides.extend_from_slice(&self.draw_sense_codon(rng)?);
        }
        Ok(Sequence::new(self.alphabet, nucleotides))
    }

    fn draw_sense_codon<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<[Nucleotide; 3], SeatingError> {
        for _ in 0..MAX_CODON_DRAWS {
            let codon = [
                Nucleotide::random(rng),
                Nucleotide::random(rng),
                Nucleotide::random(rng),
            ];
            if !codon::is_stop(codon) {
                return Ok(codon);
            }
            self.rejected_codons += 1;
            tracing::trace!(rejected = self.rejected_codons, "stop codon redrawn");
        }
        Err(SeatingError::SequenceExhausted {
            attempts: MAX_CODON_DRAWS,
        })
    }
}
