use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pagesense")]
#[command(author, version, about = "Scrape a web page and analyze its sentiment and prompt relevance", long_about = None)]
#[command(after_help = r#"Examples:
  pagesense scrape https://example.com                        Full-page analysis
  pagesense scrape https://example.com -p "pricing, refunds"  Rank sentences by a topic
  pagesense scrape https://example.com --selector p           Analyze <p> elements only
  pagesense scrape https://spa-site.com --js                  Render JavaScript first
  pagesense sentiment "What a great day"                      Classify arbitrary text
  cat review.txt | pagesense relevant "battery life"          Rank text from stdin
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape a URL and analyze sentiment and prompt relevance
    #[command(after_help = r#"Examples:
  pagesense scrape https://example.com
  pagesense scrape https://example.com --prompt "pricing details and refund policy"
  pagesense scrape https://example.com --selector ".review" --max-snippets 3
  pagesense scrape https://spa-site.com --js
  pagesense scrape https://example.com --json | jq .sentiment.polarity
"#)]
    Scrape {
        /// URL to scrape (bare domains get https:// prepended)
        #[arg(value_name = "URL")]
        url: String,

        /// CSS selector - analyze matching elements instead of the full page
        #[arg(long, short = 's')]
        selector: Option<String>,

        /// Topic prompt - return the sentences most relevant to it
        #[arg(long, short = 'p')]
        prompt: Option<String>,

        /// Render JavaScript with headless Chromium before extracting
        #[arg(long)]
        js: bool,

        /// Maximum number of prompt-matching sentences to return
        #[arg(long)]
        max_snippets: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify sentiment of arbitrary text (argument or stdin)
    Sentiment {
        /// Text to classify; reads stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract the sentences of a text most relevant to a prompt
    #[command(after_help = r#"Examples:
  pagesense relevant "shipping costs" "Orders ship free. Returns cost $5."
  cat article.txt | pagesense relevant "climate policy" --max-snippets 3
"#)]
    Relevant {
        /// Topic prompt to rank sentences against
        #[arg(value_name = "PROMPT")]
        prompt: String,

        /// Text to search; reads stdin when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Maximum number of sentences to return
        #[arg(long)]
        max_snippets: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check renderer and environment status
    Doctor,
}
