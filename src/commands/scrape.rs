//! The scrape command: fetch a page, analyze it, and present the result

use colored::Colorize;

use pagesense::config::Config;
use pagesense::error::Result;
use pagesense::fetch::{self, Engine};
use pagesense::relevance::split_sentences;
use pagesense::scrape::{scrape_and_analyze, AnalysisResult, ScrapeRequest};
use pagesense::sentiment::LexiconScorer;

use super::text::print_sentiment;

pub fn cmd_scrape(
    url: &str,
    selector: Option<String>,
    prompt: Option<String>,
    js: bool,
    max_snippets: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let url = normalize_url(url)?;
    let engine = if js { Engine::Rendered } else { Engine::Http };

    if !json {
        println!("\n{} {}", "Fetching".cyan().bold(), url);
        println!("  Engine: {}", if js { "rendered (JS)" } else { "http" });
        if let Some(ref s) = selector {
            println!("  Selector: {}", s);
        }
    }

    let scorer = LexiconScorer::new();
    let mut session = fetch::open_session(engine, &config);
    let request = ScrapeRequest {
        url: &url,
        selector: selector.as_deref(),
        prompt: prompt.as_deref(),
        max_snippets: max_snippets.unwrap_or(config.max_snippets),
    };

    let result = scrape_and_analyze(session.as_mut(), &scorer, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    display_result(&result, prompt.as_deref());
    Ok(())
}

fn display_result(result: &AnalysisResult, prompt: Option<&str>) {
    println!(
        "  {} Extracted {} characters\n",
        "✓".green(),
        result.content_length
    );

    match &result.sentiment {
        Some(sentiment) => print_sentiment(sentiment),
        None => {
            println!("{}", "No content could be extracted from this page.".yellow());
            println!("{}", "Try a different selector, or --js for JavaScript-heavy pages.".dimmed());
            return;
        }
    }

    if prompt.is_some() {
        println!("\n{}", "Prompt matches".bold());
        match &result.prompt_matches {
            Some(matches) => {
                for (i, snippet) in split_sentences(matches).iter().enumerate() {
                    println!("  {}. {}", i + 1, snippet.trim());
                }
            }
            None => {
                println!("  {}", "No clear matches for the prompt. Try different wording.".dimmed());
            }
        }
    }

    println!("\n{}", "Content preview".bold());
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", result.content_preview);
    println!("{}", "─".repeat(60).dimmed());

    println!("\n  URL: {}", result.url);
    println!("  Content length: {} characters", result.content_length);
}

/// Accept bare domains by prepending https://, then validate
fn normalize_url(input: &str) -> Result<String> {
    if input.starts_with("http://") || input.starts_with("https://") {
        url::Url::parse(input)?;
        return Ok(input.to_string());
    }

    let with_scheme = format!("https://{}", input);
    url::Url::parse(&with_scheme)?;
    Ok(with_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_keeps_absolute() {
        assert_eq!(
            normalize_url("https://example.com/page").unwrap(),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_normalize_url_adds_scheme() {
        assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
    }

    #[test]
    fn test_normalize_url_rejects_garbage() {
        assert!(normalize_url("https://").is_err());
    }
}
