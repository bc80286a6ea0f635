//! pagesense - scrape web pages and analyze sentiment and prompt relevance

use clap::Parser;
use colored::Colorize;

use pagesense::cli::{Cli, Commands};
use pagesense::error::Result;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint.dimmed());
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape {
            url,
            selector,
            prompt,
            js,
            max_snippets,
            json,
        } => commands::cmd_scrape(&url, selector, prompt, js, max_snippets, json),

        Commands::Sentiment { text, json } => commands::cmd_sentiment(text, json),

        Commands::Relevant {
            prompt,
            text,
            max_snippets,
            json,
        } => commands::cmd_relevant(&prompt, text, max_snippets, json),

        Commands::Doctor => commands::cmd_doctor(),
    }
}
