//! Command-line driver for the algorithms in this crate.
//!
//! Usage:
//!   algs sort [--algorithm merge] [--seed N] 5 3 9 1
//!   algs search --target 4 1 2 3 4 5
//!   algs primes --count 10
//!   algs factor 360
//!   algs sequence 1 2 3 4 5

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use algs::search::binary;
use algs::sorts::{InsertionSort, MergeSort, QuickSort, SelectionSort, Sort};
use algs::{Sequence, Sieve, SieveOfEratosthenes};

#[derive(Parser, Debug)]
#[command(name = "algs", about = "Run textbook algorithms from the command line", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort integers and print them in ascending order
    Sort {
        #[arg(short, long, value_enum, default_value_t = Algorithm::Merge)]
        algorithm: Algorithm,

        /// Seed for quick sort's shuffle (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Binary search for a value (the input is sorted first)
    Search {
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print the first N primes
    Primes {
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },

    /// Print the prime factorization of a number
    Factor { n: u64 },

    /// Build a sequence from the values and replay edits on it
    Sequence {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    Insertion,
    Selection,
    Merge,
    Quick,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Sort {
            algorithm,
            seed,
            mut values,
        } => {
            match algorithm {
                Algorithm::Insertion => InsertionSort.sort(&mut values[..]),
                Algorithm::Selection => SelectionSort.sort(&mut values[..]),
                Algorithm::Merge => MergeSort.sort(&mut values[..]),
                Algorithm::Quick => match seed {
                    Some(seed) => QuickSort::with_seed(seed).sort(&mut values[..]),
                    None => QuickSort::new().sort(&mut values[..]),
                },
            }
            println!("{}", join(&values));
        }
        Command::Search { target, mut values } => {
            MergeSort.sort(&mut values[..]);
            match binary::find(&target, &values) {
                Ok(i) => println!("{target} found at index {i} of [{}]", join(&values)),
                Err(i) => println!("{target} absent; would insert at index {i} of [{}]", join(&values)),
            }
        }
        Command::Primes { count } => {
            let mut sieve = SieveOfEratosthenes::new();
            for n in 1..=count {
                println!("{}", sieve.prime(n)?);
            }
        }
        Command::Factor { n } => {
            let factors = factorize(n, SieveOfEratosthenes::MAX_LIMIT)?;
            if factors.is_empty() {
                println!("{n} has no prime factors");
            } else {
                println!("{n} = {}", join_with(&factors, " * "));
            }
        }
        Command::Sequence { values } => replay(values).context("sequence replay failed")?,
    }
    Ok(())
}

/// Appends every value, then inserts, overwrites and removes at the front,
/// back and middle, printing the sequence after each step.
fn replay(values: Vec<i64>) -> algs::Result<()> {
    let mut seq = Sequence::new();
    for v in values {
        seq.append(v);
        println!("append {v:>4}: {seq}");
    }

    seq.insert(0, 25)?;
    println!("insert front: {seq} ({})", seq.len());
    seq.insert(seq.len(), 26)?;
    println!("insert back:  {seq} ({})", seq.len());
    seq.insert(seq.len() / 2, 27)?;
    println!("insert mid:   {seq} ({})", seq.len());

    seq.set(0, 0)?;
    let last = seq.len() - 1;
    seq.set(last, last as i64)?;
    let mid = seq.len() / 2;
    seq.set(mid, mid as i64)?;
    println!("set ends/mid: {seq}");

    let front = seq.remove(0)?;
    println!("remove front: {seq} : {front}");
    let back = seq.pop()?;
    println!("remove back:  {seq} : {back}");
    let middle = seq.remove(seq.len() / 2)?;
    println!("remove mid:   {seq} : {middle}");
    Ok(())
}

/// Full factorization of `n`: a sieve up to `table_limit` covers small
/// factors, plain trial division by odd numbers covers anything past it.
fn factorize(n: u64, table_limit: u64) -> algs::Result<Vec<u64>> {
    let mut sieve = SieveOfEratosthenes::new();
    sieve.sieve_to(isqrt(n).min(table_limit))?;
    let mut factors = sieve.prime_factorize(n);
    if n < 2 {
        return Ok(factors);
    }

    let mut rest = n / factors.iter().product::<u64>();
    let mut d = sieve.known_primes().last().map_or(3, |&p| (p + 1) | 1);
    while d.checked_mul(d).is_some_and(|sq| sq <= rest) {
        while rest % d == 0 {
            factors.push(d);
            rest /= d;
        }
        d += 2;
    }
    // no divisor up to sqrt(rest) remains, so rest is prime
    if rest > 1 {
        factors.push(rest);
    }
    Ok(factors)
}

fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).is_none_or(|sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

fn join<T: ToString>(values: &[T]) -> String {
    join_with(values, ", ")
}

fn join_with<T: ToString>(values: &[T], sep: &str) -> String {
    values.iter().map(T::to_string).collect::<Vec<_>>().join(sep)
}
