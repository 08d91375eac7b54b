// Colored terminal output for verdicts and scan summaries.
//
// This module handles all terminal-specific formatting: colors, the
// verdict layout, scan tallies. The main.rs command handlers delegate
// here; machine consumers use --json and never see this output.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::moderation::{ScreenResponse, Verdict};
use crate::output::truncate_chars;

/// Display a single check's response in full.
pub fn display_response(response: &ScreenResponse) {
    match response {
        ScreenResponse::Verdict(verdict) => display_verdict(verdict),
        ScreenResponse::Error { error } => {
            println!("{} {error}", "Input error:".red().bold());
        }
    }
}

/// Display one verdict: flag, matched terms, censored text.
pub fn display_verdict(verdict: &Verdict) {
    if verdict.toxic {
        println!("{}", "TOXIC".red().bold());
        println!(
            "  {} {}",
            "Matched terms:".dimmed(),
            verdict.found_words.join(", ")
        );
    } else {
        println!("{}", "CLEAN".green().bold());
    }
    println!("  {} {}", "Censored:".dimmed(), verdict.censored);
}

/// Display one line of a scan: a compact marker plus the censored text.
pub fn display_scan_line(index: usize, response: &ScreenResponse) {
    match response {
        ScreenResponse::Verdict(verdict) => {
            let marker = if verdict.toxic {
                "!".red().bold().to_string()
            } else {
                "·".dimmed().to_string()
            };
            println!(
                "  {:>5} {} {}",
                index,
                marker,
                truncate_chars(&verdict.censored, 100)
            );
        }
        ScreenResponse::Error { .. } => {
            println!("  {:>5} {} {}", index, "-".dimmed(), "(no text)".dimmed());
        }
    }
}

/// Display the tallies after a scan.
pub fn display_scan_summary(total: usize, toxic: usize, term_counts: &BTreeMap<String, usize>) {
    println!("\n{}", format!("=== Scan Summary ({total} texts) ===").bold());
    if toxic == 0 {
        println!("  {}", "No offensive terms found.".green());
        return;
    }

    println!("  {} {toxic} flagged", "!".red().bold());
    println!("  {} {} clean", "·".dimmed(), total - toxic);

    // Most frequent terms first; ties break lexicographically since the
    // map iterates in term order.
    let mut ranked: Vec<(&str, usize)> = term_counts
        .iter()
        .map(|(term, count)| (term.as_str(), *count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    println!("\n  {:>6}  Term", "Count".dimmed());
    println!("  {}", "-".repeat(28).dimmed());
    for (term, count) in ranked.iter().take(10) {
        println!("  {count:>6}  {term}");
    }
}
