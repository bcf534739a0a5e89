//! cellref CLI - A1 / R1C1 reference conversion tool

use anyhow::{Context, Result};
use cellref_convert::{
    convert_formula_to_a1_with, convert_to_a1, convert_to_r1c1, ConversionObserver, Dialect,
};
use cellref_core::CellPosition;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "cellref")]
#[command(author, version, about = "Convert cell references between A1 and R1C1 notation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single R1C1 reference to A1
    #[command(name = "to-a1", alias = "a1")]
    ToA1 {
        /// R1C1 reference, e.g. R[-1]C2
        address: String,

        /// Current row that relative references are resolved against
        #[arg(short, long, default_value = "1")]
        row: u32,

        /// Current column that relative references are resolved against
        #[arg(short, long, default_value = "1")]
        col: u32,
    },

    /// Convert a single A1 reference to R1C1
    #[command(name = "to-r1c1", alias = "r1c1")]
    ToR1c1 {
        /// A1 reference, e.g. $B$7
        address: String,

        /// Current row (makes the row component relative)
        #[arg(short, long)]
        row: Option<u32>,

        /// Current column (makes the column component relative)
        #[arg(short, long)]
        col: Option<u32>,
    },

    /// Convert a formula with R1C1 references to A1
    Formula {
        /// Formula text (default: one formula per line from stdin)
        formula: Option<String>,

        /// Current row that relative references are resolved against
        #[arg(short, long, default_value = "1")]
        row: u32,

        /// Current column that relative references are resolved against
        #[arg(short, long, default_value = "1")]
        col: u32,

        /// Print each conversion step to stderr
        #[arg(short, long)]
        trace: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ToA1 { address, row, col } => {
            let a1 = convert_to_a1(&address, CellPosition::new(row, col))
                .with_context(|| format!("Failed to convert '{}'", address))?;
            println!("{a1}");
            Ok(())
        }
        Commands::ToR1c1 { address, row, col } => {
            let r1c1 = convert_to_r1c1(&address, row, col)
                .with_context(|| format!("Failed to convert '{}'", address))?;
            println!("{r1c1}");
            Ok(())
        }
        Commands::Formula {
            formula,
            row,
            col,
            trace,
        } => convert_formulas(formula, CellPosition::new(row, col), trace),
    }
}

fn convert_formulas(formula: Option<String>, anchor: CellPosition, trace: bool) -> Result<()> {
    let mut observer = StderrObserver { enabled: trace };

    if let Some(formula) = formula {
        let a1 = convert_formula_to_a1_with(&formula, anchor, &mut observer)
            .with_context(|| format!("Failed to convert formula '{}'", formula))?;
        println!("{a1}");
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read stdin")?;
        let a1 = convert_formula_to_a1_with(&line, anchor, &mut observer)
            .with_context(|| format!("Failed to convert formula on line {}", line_no + 1))?;
        writeln!(out, "{a1}").context("Failed to write output")?;
    }

    Ok(())
}

/// Writes conversion steps to stderr when `--trace` is given
struct StderrObserver {
    enabled: bool,
}

impl ConversionObserver for StderrObserver {
    fn formula_received(&mut self, dialect: Dialect, formula: &str) {
        if self.enabled {
            eprintln!("{dialect:?} formula: {formula}");
        }
    }

    fn reference_converted(&mut self, r1c1: &str, a1: &str) {
        if self.enabled {
            eprintln!("  {r1c1} -> {a1}");
        }
    }

    fn formula_converted(&mut self, formula: &str) {
        if self.enabled {
            eprintln!("A1 formula: {formula}");
        }
    }
}
