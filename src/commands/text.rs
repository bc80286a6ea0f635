//! Text-only commands: run the analyzers over arbitrary text without a fetch

use std::io::Read;

use colored::Colorize;

use pagesense::config::Config;
use pagesense::error::Result;
use pagesense::relevance::{extract_relevant, split_sentences};
use pagesense::sentiment::{
    classify, neutral_confidence, subjectivity_band, LexiconScorer, Sentiment, SentimentResult,
};

pub fn cmd_sentiment(text: Option<String>, json: bool) -> Result<()> {
    let text = read_text(text)?;
    let scorer = LexiconScorer::new();

    match classify(&text, &scorer) {
        Some(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_sentiment(&result);
                println!();
            }
        }
        None => {
            if json {
                println!("null");
            } else {
                println!("{}", "No text to analyze.".yellow());
            }
        }
    }

    Ok(())
}

pub fn cmd_relevant(
    prompt: &str,
    text: Option<String>,
    max_snippets: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let text = read_text(text)?;
    let result = extract_relevant(&text, prompt, max_snippets.unwrap_or(config.max_snippets));

    if json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    match result {
        Some(matches) => {
            println!();
            for (i, snippet) in split_sentences(&matches).iter().enumerate() {
                println!("  {}. {}", i + 1, snippet.trim());
            }
            println!();
        }
        None => {
            println!("{}", "No matching sentences found.".yellow());
            println!("{}", "Try different prompt wording, or a longer text.".dimmed());
        }
    }

    Ok(())
}

/// Print a sentiment result block with a colored label
pub(super) fn print_sentiment(result: &SentimentResult) {
    let label = match result.sentiment {
        Sentiment::Positive => "Positive".green().bold(),
        Sentiment::Negative => "Negative".red().bold(),
        Sentiment::Neutral => "Neutral".yellow().bold(),
    };

    println!("{}", "Sentiment".bold());
    println!("  Label:        {}", label);
    println!("  Polarity:     {}", result.polarity);
    if result.sentiment == Sentiment::Neutral {
        println!(
            "  Confidence:   {} (neutral strength)",
            neutral_confidence(result.polarity)
        );
    }
    println!(
        "  Subjectivity: {} ({})",
        result.subjectivity,
        subjectivity_band(result.subjectivity)
    );
}

/// Use the argument when given, otherwise read all of stdin
fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input.trim_end().to_string())
        }
    }
}
