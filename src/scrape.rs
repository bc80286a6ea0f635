//! Orchestrates one scrape-and-analyze call: fetch, reduce to text, then run
//! sentiment classification and prompt relevance over the content.

use serde::Serialize;

use crate::error::Result;
use crate::extract::reduce_html_to_text;
use crate::fetch::PageSession;
use crate::relevance::extract_relevant;
use crate::sentiment::{classify, SentimentResult, TextSentimentScorer};
use crate::util::preview;

/// Characters kept in the content preview before the "..." marker
pub const CONTENT_PREVIEW_CHARS: usize = 300;

/// One scrape-and-analyze request
#[derive(Debug, Clone)]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
    /// When set, content is the joined text of matching elements instead of
    /// the full reduced page
    pub selector: Option<&'a str>,
    /// Topic prompt for relevance extraction; `None` skips it
    pub prompt: Option<&'a str>,
    pub max_snippets: usize,
}

/// Result of one scrape-and-analyze call. Not persisted anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    /// Character count of the extracted content, pre-truncation
    pub content_length: usize,
    /// First 300 characters of the content, "..." appended when truncated
    pub content_preview: String,
    /// Absent iff the extracted content was empty
    pub sentiment: Option<SentimentResult>,
    /// Absent iff no prompt was supplied or no sentence matched it
    pub prompt_matches: Option<String>,
}

/// Scrape a page and analyze its content.
///
/// Fetch and query failures surface as `Err` with the underlying cause; no
/// partial result is produced. The session is closed exactly once on every
/// path, success or failure.
pub fn scrape_and_analyze(
    session: &mut dyn PageSession,
    scorer: &dyn TextSentimentScorer,
    request: &ScrapeRequest,
) -> Result<AnalysisResult> {
    let outcome = run_pipeline(session, scorer, request);
    session.close();
    outcome
}

fn run_pipeline(
    session: &mut dyn PageSession,
    scorer: &dyn TextSentimentScorer,
    request: &ScrapeRequest,
) -> Result<AnalysisResult> {
    session.navigate(request.url)?;

    let content = match request.selector {
        Some(selector) => {
            // Elements with no text are skipped, the rest join on one space
            session
                .element_texts(selector)?
                .into_iter()
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        }
        None => session
            .page_markup()
            .map(|html| reduce_html_to_text(&html))?,
    };

    let sentiment = classify(&content, scorer);
    let prompt_matches = request
        .prompt
        .filter(|prompt| !prompt.is_empty())
        .and_then(|prompt| extract_relevant(&content, prompt, request.max_snippets));

    Ok(AnalysisResult {
        url: request.url.to_string(),
        content_length: content.chars().count(),
        content_preview: preview(&content, CONTENT_PREVIEW_CHARS),
        sentiment,
        prompt_matches,
    })
}
