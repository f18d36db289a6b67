//! Interactive prompt loop
//!
//! Text-based session: prompt for a phrase (remembering the last one across
//! runs in a small cache file), prompt for a tolerance, search, print the
//! best results. Invalid tolerance input falls back to the suggested
//! default instead of failing.

use crate::commands::find::{FindConfig, run_find};
use crate::dictionary::Trie;
use crate::output::print_find_result;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Where the last searched phrase is remembered between runs
const LAST_PHRASE_CACHE: &str = "last_phrase.txt";

/// Tolerance used when the user gives none or something non-numeric
const DEFAULT_TOLERANCE: u32 = 0;

/// How many results one search may print
const MAX_RESULTS_TO_DISPLAY: usize = 50;

/// Run the interactive session
///
/// # Errors
///
/// Returns an error only on I/O failures reading user input.
pub fn run_interactive(trie: &Trie) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Anagram Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Dictionary loaded with {} words.", trie.len());
    println!("Enter a phrase and a tolerance; I'll find every word combination");
    println!("whose letters match within that many added/removed letters.\n");
    println!("Commands: 'quit' to exit\n");

    loop {
        let last_phrase = load_last_phrase(LAST_PHRASE_CACHE);

        let prompt = match &last_phrase {
            Some(previous) => format!("Phrase (Enter for '{previous}')"),
            None => "Phrase".to_string(),
        };
        let input = get_user_input(&prompt)?;

        if matches!(input.as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Bye!\n");
            return Ok(());
        }

        let phrase = if input.is_empty() {
            match last_phrase {
                Some(previous) => previous,
                None => {
                    println!("The phrase contains no letters.\n");
                    continue;
                }
            }
        } else {
            save_last_phrase(LAST_PHRASE_CACHE, &input);
            input
        };

        let tolerance_input =
            get_user_input(&format!("Tolerance (Enter for {DEFAULT_TOLERANCE})"))?;
        let tolerance = if tolerance_input.is_empty() {
            DEFAULT_TOLERANCE
        } else {
            tolerance_input.parse().unwrap_or_else(|_| {
                println!(
                    "{}",
                    format!("Invalid tolerance, using {DEFAULT_TOLERANCE}.").yellow()
                );
                DEFAULT_TOLERANCE
            })
        };

        if tolerance > 3 {
            println!(
                "{}",
                "Tolerances above 3 can take a long time (combinatorial insertions)."
                    .yellow()
            );
        }

        let mut config = FindConfig::new(phrase, tolerance);
        config.progress = true;
        let result = run_find(&config, trie);

        print_find_result(&result, MAX_RESULTS_TO_DISPLAY);
        println!();
    }
}

fn load_last_phrase<P: AsRef<Path>>(path: P) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let phrase = content.trim().to_string();
    if phrase.is_empty() { None } else { Some(phrase) }
}

fn save_last_phrase<P: AsRef<Path>>(path: P, phrase: &str) {
    if let Err(e) = fs::write(path, phrase) {
        eprintln!("{}", format!("warning: could not remember phrase: {e}").yellow());
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_phrase_round_trip() {
        let path = std::env::temp_dir().join("anagram_last_phrase_rt.txt");
        save_last_phrase(&path, "Mines antipersonnel");
        assert_eq!(
            load_last_phrase(&path).as_deref(),
            Some("Mines antipersonnel")
        );
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_last_phrase_is_none() {
        assert!(load_last_phrase("/nonexistent/last_phrase.txt").is_none());
    }

    #[test]
    fn blank_last_phrase_is_none() {
        let path = std::env::temp_dir().join("anagram_last_phrase_blank.txt");
        fs::write(&path, "  \n").unwrap();
        assert!(load_last_phrase(&path).is_none());
        fs::remove_file(path).ok();
    }
}
