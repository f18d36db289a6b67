//! Anagram Solver - CLI
//!
//! Multi-word anagram finder with symmetric letter tolerance. Builds a
//! canonical-form trie over a dictionary (cached on disk for fast startup)
//! and searches it interactively or one-shot.

use anagram_solver::{
    commands::{FindConfig, check_word, run_find, run_interactive},
    dictionary::cache::load_or_build,
    output::{print_check_result, print_find_result},
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "anagram_solver",
    about = "Find multi-word anagrams of a phrase, exact or within a letter tolerance",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "words.txt")]
    dictionary: PathBuf,

    /// Index cache file (default: the dictionary path with '.idx' appended)
    #[arg(short, long, global = true)]
    cache: Option<PathBuf>,

    /// Ignore any cached index and rebuild from the dictionary
    #[arg(long, global = true)]
    rebuild: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt loop (default)
    Interactive,

    /// Search for anagrams of a phrase
    Find {
        /// The phrase to decompose
        phrase: String,

        /// Total letter tolerance (removed + added); 0 = exact anagrams
        #[arg(short, long, default_value = "0")]
        tolerance: u32,

        /// Show at most this many results
        #[arg(short, long, default_value = "50")]
        limit: usize,

        /// Cap the solutions collected per search task (default: unbounded)
        #[arg(long)]
        max_solutions: Option<usize>,
    },

    /// Check whether an exact spelling exists in the dictionary
    Check {
        /// Word to look up
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cache_path = cli.cache.clone().unwrap_or_else(|| {
        let mut path = cli.dictionary.clone().into_os_string();
        path.push(".idx");
        PathBuf::from(path)
    });

    let trie = load_or_build(&cli.dictionary, &cache_path, cli.rebuild)?;

    // Default to the interactive loop if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive(&trie).map_err(|e| anyhow::anyhow!(e)),
        Commands::Find {
            phrase,
            tolerance,
            limit,
            max_solutions,
        } => {
            let mut config = FindConfig::new(phrase, tolerance);
            config.max_solutions = max_solutions;
            config.progress = true;

            let result = run_find(&config, &trie);
            print_find_result(&result, limit);
            Ok(())
        }
        Commands::Check { word } => {
            let result = check_word(&word, &trie);
            print_check_result(&result);
            Ok(())
        }
    }
}
