//! `bench_local.rs` — quick local timing runner for the anagram search (no Criterion)
//!
//! Loads the dictionary once, then searches a fixed set of phrases several times each
//! and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:        `cargo run --bin bench_local --release -- -d words.txt`
//! - Multiple repeats:       `cargo run --bin bench_local --release -- -d words.txt -r 5`
//! - Print a few anagrams:   `cargo run --bin bench_local --release -- -d words.txt -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparisons.
//! - Printing happens outside the timed section.
//! - One warm-up run per phrase is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use anagrammer::dictionary::{Dictionary, DictionaryConfig, DEFAULT_MAX_ENTRIES};
use anagrammer::letter_bag::LetterBag;
use anagrammer::scoring::LengthCubed;
use anagrammer::search;

/// Simple local benchmark runner: load the dictionary once, time several phrases.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (word:frequency per line)
    #[arg(short, long)]
    dictionary: String,

    /// Maximum number of dictionary lines to read
    #[arg(long, default_value_t = DEFAULT_MAX_ENTRIES)]
    max_entries: usize,

    /// Number of repeats per phrase (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many anagrams per phrase (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// Phrases to time, roughly in order of increasing letter count.
const PHRASES: &[&str] = &[
    "dormitory",
    "the eyes",
    "astronomer",
    "conversation",
    "elliot bayes potter",
    "a decimal point",
];

fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let config = DictionaryConfig { max_entries: cli.max_entries, ..DictionaryConfig::default() };
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary, &config, &LengthCubed)?;
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), t_load.elapsed().as_secs_f64());

    let mut summary: Vec<(&str, f64, usize, usize)> = Vec::with_capacity(PHRASES.len());

    for (idx, &phrase) in PHRASES.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, phrase);
        let letters = LetterBag::from_phrase(phrase);

        // warm-up
        search::search(dictionary.words(), &letters)?;

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;
        for rep in 0..cli.num_repeats {
            let t_search = Instant::now();
            let solutions = search::search(dictionary.words(), black_box(&letters))?;
            let secs = t_search.elapsed().as_secs_f64();

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} anagrams)",
                rep + 1,
                cli.num_repeats,
                secs,
                solutions.len()
            );
            times.push(secs);
            last = Some(solutions);
        }

        let med = median(times);
        let (count, branches) = last.as_ref().map_or((0, 0), |s| (s.len(), s.branches_explored));

        if let Some(solutions) = &last {
            for candidate in solutions.top(cli.print_limit) {
                println!("{}\t{}", candidate.score(), candidate);
            }
        }

        eprintln!("  → median {med:.3}s over {} run(s)", cli.num_repeats);
        summary.push((phrase, med, count, branches));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<24} | {:>10} | {:>10} | {:>10}", "phrase", "median (s)", "# anagrams", "branches");
    eprintln!("{:-<24}-+-{:-<10}-+-{:-<10}-+-{:-<10}", "", "", "", "");
    for (phrase, med, count, branches) in &summary {
        eprintln!("{phrase:<24} | {med:>10.3} | {count:>10} | {branches:>10}");
    }

    Ok(())
}
