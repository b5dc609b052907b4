use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use anagrammer::dictionary::{Dictionary, DictionaryConfig, DEFAULT_MAX_ENTRIES, DEFAULT_MIN_WORD_LEN};
use anagrammer::frequency_table::FrequencyTable;
use anagrammer::letter_bag::LetterBag;
use anagrammer::scoring::{LengthCubed, LogOdds, ScoringPolicy};
use anagrammer::search::{self, SearchError};

/// Find the best multi-word anagrams of a phrase
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The phrase to anagram (case and spaces are ignored)
    phrase: String,

    /// Path to the dictionary file (word:frequency per line)
    #[arg(short, long)]
    dictionary: String,

    /// Maximum number of anagrams to print
    #[arg(short = 'n', long, default_value_t = 20)]
    num_results: usize,

    /// Maximum number of dictionary lines to read
    #[arg(long, default_value_t = DEFAULT_MAX_ENTRIES)]
    max_entries: usize,

    /// Minimum word length; shorter dictionary words are ignored
    #[arg(short = 'l', long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_length: usize,

    /// Background corpus table (word:count per line); switches scoring to log-odds
    /// with the dictionary's accepted entries as the signal corpus
    #[arg(short, long)]
    background: Option<String>,
}

/// Entry point of the anagrammer CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("ANAGRAMMER_DEBUG").is_ok();
    anagrammer::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(search_err) = e.downcast_ref::<SearchError>() {
            eprintln!("Error: {}", search_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the anagrammer CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Pick the scoring policy (length-cubed, or log-odds when a background table is given).
/// 3. Load and score the dictionary.
/// 4. Search for every anagram of the phrase.
/// 5. Print the top results on stdout and diagnostics on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = DictionaryConfig { max_entries: cli.max_entries, min_word_len: cli.min_length };

    let t_load = Instant::now();
    let policy: Box<dyn ScoringPolicy> = match &cli.background {
        Some(background_path) => {
            let signal = Dictionary::load_signal_table(&cli.dictionary, &config)?;
            let background = FrequencyTable::load_from_path(background_path)?;
            log::info!(
                "Scoring by log-odds (signal total {}, background total {})",
                signal.total(),
                background.total()
            );
            Box::new(LogOdds::new(&signal, background))
        }
        None => Box::new(LengthCubed),
    };
    let dictionary = Dictionary::load_from_path(&cli.dictionary, &config, policy.as_ref())?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let letters = LetterBag::from_phrase(&cli.phrase);

    let t_search = Instant::now();
    let solutions = search::search(dictionary.words(), &letters)?;
    let search_secs = t_search.elapsed().as_secs_f64();

    for candidate in solutions.top(cli.num_results) {
        println!("{}\t{}", candidate.score(), candidate);
    }

    if solutions.is_empty() {
        eprintln!("No anagrams of \"{}\" found", cli.phrase);
    }

    eprintln!(
        "Loaded {} words ({} lines rejected) in {:.3}s; searched {} branches in {:.3}s ({} anagrams).",
        dictionary.len(),
        dictionary.rejected,
        load_secs,
        solutions.branches_explored,
        search_secs,
        solutions.len()
    );

    Ok(())
}
