// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seating CLI.
//!
//! Assign tables, print a summary and export the roster.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use table_shuffle::roster;
use table_shuffle::sequence::SequenceGenerator;
use table_shuffle::{Alphabet, Pairing, SeatingConfig, SeatingEngine, Sequence, SequenceMode};

#[derive(Parser)]
#[command(name = "shuffle")]
#[command(about = "Seat participants at tables twice, with paired DNA codes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the seating and export the roster.
    Assign {
        #[command(flatten)]
        config: ConfigArgs,
        /// Roster output file (TSV)
        #[arg(short, long, default_value = "seats.tsv")]
        output: PathBuf,
        /// Optional pair list output file (TSV)
        #[arg(long)]
        pairs: Option<PathBuf>,
    },

    /// Draw one sequence and show its complement and protein.
    Sequence {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Validate a configuration without drawing anything.
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Configuration file plus per-field overrides.
#[derive(Args)]
struct ConfigArgs {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of tables
    #[arg(long)]
    tables: Option<usize>,
    /// Individual table capacity
    #[arg(long)]
    table_capacity: Option<usize>,
    /// Per-table capacities (comma-separated), overriding --tables
    #[arg(long, value_delimiter = ',')]
    capacities: Option<Vec<usize>>,
    /// Number of participants (defaults to 210, or every seat of a layout given here)
    #[arg(long)]
    population: Option<usize>,
    /// Sequence length (nucleotides, or codons in coding mode)
    #[arg(long)]
    sequence_length: Option<usize>,
    /// Most co-residents allowed at both of a participant's tables
    #[arg(long)]
    overlap_limit: Option<usize>,
    /// Seed to use for the pseudo-random number generator
    #[arg(short, long)]
    seed: Option<u64>,
    /// Draws allowed per table choice
    #[arg(long)]
    max_attempts: Option<usize>,
    /// Pairing: solo, bonded
    #[arg(long)]
    pairing: Option<Pairing>,
    /// Alphabet: dna, rna
    #[arg(long)]
    alphabet: Option<Alphabet>,
    /// Sequence mode: random, coding
    #[arg(long)]
    sequence_mode: Option<SequenceMode>,
    /// Place participants in a seeded random order
    #[arg(long)]
    shuffle: bool,
}

impl ConfigArgs {
    fn load(self) -> Result<SeatingConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                SeatingConfig::from_toml_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SeatingConfig::default(),
        };

        // A new layout is filled completely unless --population says otherwise.
        if let Some(tables) = self.tables {
            config.tables = tables;
            config.capacities = None;
            config.population = None;
        }
        if let Some(capacity) = self.table_capacity {
            config.table_capacity = capacity;
            config.capacities = None;
            config.population = None;
        }
        if let Some(capacities) = self.capacities {
            config.tables = capacities.len();
            config.capacities = Some(capacities);
            config.population = None;
        }
        if self.population.is_some() {
            config.population = self.population;
        }
        if let Some(length) = self.sequence_length {
            config.sequence_length = length;
        }
        if let Some(limit) = self.overlap_limit {
            config.overlap_limit = limit;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(attempts) = self.max_attempts {
            config.max_attempts = attempts;
        }
        if let Some(pairing) = self.pairing {
            config.pairing = pairing;
        }
        if let Some(alphabet) = self.alphabet {
            config.alphabet = alphabet;
        }
        if let Some(mode) = self.sequence_mode {
            config.sequence_mode = mode;
        }
        config.shuffle |= self.shuffle;
        Ok(config)
    }
}

/// Draw the first pair a seating run with this config would draw.
fn draw_pair(config: &SeatingConfig) -> Result<(Sequence, Sequence)> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut generator = SequenceGenerator::new(
        config.alphabet,
        config.sequence_mode,
        config.sequence_length,
    );
    Ok(generator.generate_pair(&mut rng)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Assign {
            config,
            output,
            pairs,
        } => {
            let config = config.load()?;
            let engine = SeatingEngine::new(config)?;
            let assignment = engine
                .run()
                .context("seating failed; if the model does not reach a solution, try a different seed")?;

            roster::export_roster(&output, &assignment)
                .with_context(|| format!("writing {}", output.display()))?;
            info!(path = %output.display(), "roster written");
            if let Some(path) = pairs {
                roster::export_pairs(&path, &assignment)
                    .with_context(|| format!("writing {}", path.display()))?;
                info!(path = %path.display(), "pairs written");
            }

            println!("\n=== Seating Complete ===");
            println!("Seed: {}", assignment.seed());
            println!("Participants: {}", assignment.seats().len());
            println!("Tables: {}", assignment.tables().len());
            println!("Pairs: {}", assignment.pairs().len());
            println!("Max overlap: {}", assignment.max_overlap());
            println!("Statistics: {}", assignment.statistics());
        }

        Commands::Sequence { config } => {
            let (strand, partner) = draw_pair(&config.load()?)?;
            println!("Sequence:   {}", strand);
            println!("Complement: {}", partner);
            println!("Protein:    {}", strand.translate());
        }

        Commands::Check { config } => {
            let config = config.load()?;
            config.validate()?;
            println!(
                "OK: {} tables, {} participants, capacity {}",
                config.table_capacities().len(),
                config.population(),
                config.total_capacity()
            );
        }
    }

    Ok(())
}
