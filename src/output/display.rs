//! Display functions for command results

use crate::commands::{CheckResult, FindResult};
use colored::Colorize;

/// Print the result of a search, truncated to `limit` records
pub fn print_find_result(result: &FindResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Phrase: {}  (letters: {})",
        result.phrase.bright_yellow().bold(),
        result.letters.bright_white()
    );
    println!(
        "Tolerance: {}  |  {} search task(s)  |  {:.2}s",
        result.tolerance,
        result.tasks,
        result.duration.as_secs_f64()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.records.is_empty() {
        println!("\n{}", "No solutions found.".yellow());
        return;
    }

    let shown = result.records.len().min(limit);
    println!(
        "\n{} solution(s) found. Showing the {} best:\n",
        result.records.len().to_string().bright_cyan().bold(),
        shown
    );

    for record in result.records.iter().take(limit) {
        let diff_note = if record.is_exact() {
            "exact".green().to_string()
        } else {
            let mut parts = Vec::new();
            if record.removed_count > 0 {
                parts.push(format!("removed: '{}'", record.letters_removed.red()));
            }
            if record.added_count > 0 {
                parts.push(format!("added: '{}'", record.letters_added.green()));
            }
            format!("{} | diff: {}", parts.join(" | "), record.difference())
        };

        println!(
            "  → {} ({})",
            record.solution.text().bright_white().bold(),
            diff_note
        );
    }

    if result.records.len() > limit {
        println!(
            "\n  … {} more not shown",
            (result.records.len() - limit).to_string().bright_black()
        );
    }
}

/// Print the result of an exact-existence check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word: {}  (canonical: {})",
        result.word.bright_yellow().bold(),
        result.canonical.bright_white()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.exists {
        println!("\n{}", "✅ Present in the dictionary.".green().bold());
    } else {
        println!("\n{}", "❌ Not in the dictionary.".red().bold());
    }

    match result.anagrams.len() {
        0 => println!("No indexed word shares its letters."),
        n => {
            println!("{n} indexed word(s) share its letters:");
            for word in &result.anagrams {
                println!("  • {word}");
            }
        }
    }
}
