use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use bleep::config::Config;
use bleep::moderation::{self, ScreenRequest, ScreenResponse, WordlistScreen};
use bleep::output::terminal;
use bleep::wordlist::Wordlist;

/// Bleep: obfuscation-resistant profanity detection and censoring.
///
/// Flags offensive language in user-submitted text across languages and
/// scripts, resisting leetspeak, zero-width tricks, and case games, and
/// rewrites the text with matched terms masked.
#[derive(Parser)]
#[command(name = "bleep", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen a single text and print the verdict
    Check {
        /// The text to screen
        text: String,

        /// Print the raw JSON response instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// Screen a file of texts, one per line ("-" for stdin)
    Scan {
        /// Path to the input file
        path: String,

        /// Print one raw JSON response per line
        #[arg(long)]
        json: bool,
    },

    /// Show wordlist artifact stats (term count, source path)
    Wordlist,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bleep=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check { text, json } => {
            let screen = load_screen(&config)?;
            let request = ScreenRequest { text: Some(text) };
            let response = moderation::respond(&screen, &request);

            if json {
                println!("{}", serde_json::to_string(&response)?);
            } else {
                terminal::display_response(&response);
            }
        }

        Commands::Scan { path, json } => {
            let screen = load_screen(&config)?;

            let mut total = 0usize;
            let mut toxic = 0usize;
            let mut term_counts: BTreeMap<String, usize> = BTreeMap::new();

            for (index, line) in read_lines(&path)?.enumerate() {
                let line = line.with_context(|| format!("failed to read line from {path}"))?;
                let request = ScreenRequest { text: Some(line) };
                let response = moderation::respond(&screen, &request);

                total += 1;
                if let ScreenResponse::Verdict(ref verdict) = response {
                    if verdict.toxic {
                        toxic += 1;
                        for term in &verdict.found_words {
                            *term_counts.entry(term.clone()).or_insert(0) += 1;
                        }
                    }
                }

                if json {
                    println!("{}", serde_json::to_string(&response)?);
                } else {
                    terminal::display_scan_line(index + 1, &response);
                }
            }

            if !json {
                terminal::display_scan_summary(total, toxic, &term_counts);
            }
        }

        Commands::Wordlist => {
            config.require_wordlist()?;
            let wordlist = load_wordlist(&config)?;
            println!("Wordlist: {}", config.wordlist_path.display());
            println!("  Terms: {}", wordlist.len());
        }
    }

    Ok(())
}

/// Load the wordlist artifact, failing fast with context on any error.
fn load_wordlist(config: &Config) -> Result<Wordlist> {
    Wordlist::load(&config.wordlist_path).with_context(|| {
        format!(
            "wordlist failed to load from {}",
            config.wordlist_path.display()
        )
    })
}

/// Build the screening engine: load the artifact and compile the
/// automaton. This is the cold-start step — everything after it is pure
/// computation.
fn load_screen(config: &Config) -> Result<WordlistScreen> {
    config.require_wordlist()?;
    let wordlist = load_wordlist(config)?;
    let screen = WordlistScreen::new(&wordlist, config.censor_char)
        .context("wordlist automaton compilation failed")?;
    info!(terms = screen.term_count(), "screening engine ready");
    Ok(screen)
}

/// Line iterator over a file path, with "-" meaning stdin.
fn read_lines(path: &str) -> Result<Box<dyn Iterator<Item = io::Result<String>>>> {
    if path == "-" {
        Ok(Box::new(io::stdin().lock().lines()))
    } else {
        let file =
            File::open(path).with_context(|| format!("cannot open input file {path}"))?;
        Ok(Box::new(BufReader::new(file).lines()))
    }
}
