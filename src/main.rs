use std::io::{self, BufWriter, Write};

use clap::{Parser, Subcommand};

use eratosthenes::{generate_primes, Sieve};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "eratosthenes",
    about = "Enumerate primes with the sieve of Eratosthenes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every prime up to MAX_VALUE, one per line
    List {
        /// Inclusive upper bound; anything below 2 prints nothing
        #[arg(allow_negative_numbers = true)]
        max_value: i64,
    },
    /// Print every prime in [LOW, HIGH], one per line
    Range {
        /// Inclusive lower bound
        low: u64,
        /// Inclusive upper bound
        high: u64,
    },
    /// Print how many primes there are up to BOUND
    Count {
        /// Inclusive upper bound
        bound: u64,
    },
}

// ── Commands ───────────────────────────────────────────────────────

fn write_primes<W: Write>(out: &mut W, primes: impl IntoIterator<Item = u64>) -> io::Result<()> {
    for p in primes {
        writeln!(out, "{}", p)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::List { max_value } => write_primes(&mut out, generate_primes(max_value))?,
        Commands::Range { low, high } => write_primes(&mut out, Sieve::range(low, high))?,
        Commands::Count { bound } => writeln!(out, "{}", Sieve::segmented(bound).count())?,
    }

    out.flush()
}
