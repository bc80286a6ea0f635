//! Relevance extraction: rank sentences against a user prompt and return
//! the top matches as a single snippet string.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default number of sentences returned by [`extract_relevant`]
pub const DEFAULT_MAX_SNIPPETS: usize = 5;

/// Prompt words this short carry no signal ("a", "of", "is", ...)
const MIN_TERM_CHARS: usize = 3;

/// Precompiled regex for word-like runs (unicode-aware)
static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+").expect("Invalid word regex")
});

/// Extract the sentences of `text` most relevant to `prompt`.
///
/// Sentences are scored by how often each prompt term occurs as a substring
/// of the lower-cased sentence. Note this deliberately matches inside longer
/// words ("cat" scores inside "category") - callers relying on ranking
/// output depend on that behavior. Scoring sentences are sorted by score
/// descending, ties keeping document order, and the top `max_snippets` are
/// trimmed and joined with single spaces.
///
/// Returns `None` when `text` or `prompt` is empty, when the prompt contains
/// no usable terms, or when no sentence scores above zero.
pub fn extract_relevant(text: &str, prompt: &str, max_snippets: usize) -> Option<String> {
    if text.is_empty() || prompt.is_empty() {
        return None;
    }

    let terms = prompt_terms(prompt);
    if terms.is_empty() {
        return None;
    }

    let mut scored: Vec<(usize, &str)> = Vec::new();
    for sentence in split_sentences(text) {
        let lowered = sentence.to_lowercase();
        let score: usize = terms.iter().map(|term| lowered.matches(term.as_str()).count()).sum();
        if score > 0 {
            scored.push((score, sentence.trim()));
        }
    }

    if scored.is_empty() {
        return None;
    }

    // sort_by is stable: equal scores preserve original text order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    Some(
        scored
            .iter()
            .take(max_snippets)
            .map(|(_, sentence)| *sentence)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Tokenize a prompt into lowercase keyword terms.
///
/// Word-like runs only, at least [`MIN_TERM_CHARS`] characters, duplicates
/// collapsed (a term repeated in the prompt still counts once per match).
fn prompt_terms(prompt: &str) -> Vec<String> {
    let lowered = prompt.to_lowercase();
    let mut terms: Vec<String> = Vec::new();
    for m in WORD_RE.find_iter(&lowered) {
        let term = m.as_str();
        if term.chars().count() >= MIN_TERM_CHARS && !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}

/// Split text into sentences on `.`, `!` or `?` followed by whitespace.
///
/// The delimiter stays attached to the preceding sentence and the whitespace
/// run is consumed. This is a deliberately simple splitter - abbreviations,
/// decimals and quoted punctuation are not special-cased, and ranking
/// results depend on these exact split points.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            match chars.peek() {
                Some(&(end, next)) if next.is_whitespace() => {
                    sentences.push(&text[start..end]);
                    while matches!(chars.peek(), Some(&(_, w)) if w.is_whitespace()) {
                        chars.next();
                    }
                    start = chars.peek().map_or(text.len(), |&(i, _)| i);
                }
                _ => {}
            }
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_return_none() {
        assert_eq!(extract_relevant("", "cats", DEFAULT_MAX_SNIPPETS), None);
        assert_eq!(extract_relevant("Some text here.", "", DEFAULT_MAX_SNIPPETS), None);
    }

    #[test]
    fn test_prompt_with_only_short_words_returns_none() {
        assert_eq!(extract_relevant("A cat runs.", "a of is", DEFAULT_MAX_SNIPPETS), None);
    }

    #[test]
    fn test_no_matching_sentence_returns_none() {
        assert_eq!(
            extract_relevant("Birds fly. Fish swim.", "volcano", DEFAULT_MAX_SNIPPETS),
            None
        );
    }

    #[test]
    fn test_ranking_by_score_descending() {
        let text = "A cat runs. A cat and dog run. Birds fly.";
        let result = extract_relevant(text, "cat dog", DEFAULT_MAX_SNIPPETS).unwrap();
        assert_eq!(result, "A cat and dog run. A cat runs.");
    }

    #[test]
    fn test_max_snippets_bound() {
        let text = "A cat runs. A cat and dog run. Birds fly.";
        let result = extract_relevant(text, "cat dog", 1).unwrap();
        assert_eq!(result, "A cat and dog run.");
    }

    #[test]
    fn test_ties_keep_document_order() {
        let text = "Second cat here? First cat there. Another cat now!";
        // All score 1; stable sort must keep text order
        let result = extract_relevant(text, "cat", DEFAULT_MAX_SNIPPETS).unwrap();
        assert_eq!(result, "Second cat here? First cat there. Another cat now!");
    }

    #[test]
    fn test_substring_matching_inside_words() {
        // "cat" matches inside "category" - intentional, if crude
        let result = extract_relevant("This category is broad.", "cat", DEFAULT_MAX_SNIPPETS);
        assert_eq!(result, Some("This category is broad.".to_string()));
    }

    #[test]
    fn test_duplicate_prompt_terms_count_once() {
        let text = "A cat sleeps. Dogs bark loudly.";
        let once = extract_relevant(text, "cat dogs", 1).unwrap();
        let twice = extract_relevant(text, "cat cat dogs", 1).unwrap();
        // Repeating "cat" must not double its weight and change the ranking
        assert_eq!(once, twice);
    }

    #[test]
    fn test_term_frequency_adds_per_sentence() {
        let text = "The cat saw a cat chase another cat. One cat slept.";
        let result = extract_relevant(text, "cat", 1).unwrap();
        assert_eq!(result, "The cat saw a cat chase another cat.");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let result = extract_relevant("CATS are great.", "cats", DEFAULT_MAX_SNIPPETS);
        assert_eq!(result, Some("CATS are great.".to_string()));
    }

    #[test]
    fn test_snippets_are_trimmed() {
        let text = "Noise here.   The cat purrs.  ";
        let result = extract_relevant(text, "cat purrs", DEFAULT_MAX_SNIPPETS).unwrap();
        assert_eq!(result, "The cat purrs.");
    }

    #[test]
    fn test_idempotent() {
        let text = "A cat runs. A cat and dog run. Birds fly.";
        let a = extract_relevant(text, "cat dog", DEFAULT_MAX_SNIPPETS);
        let b = extract_relevant(text, "cat dog", DEFAULT_MAX_SNIPPETS);
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("One. Two! Three? Four");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?", "Four"]);
    }

    #[test]
    fn test_split_sentences_keeps_delimiter_and_eats_whitespace() {
        let sentences = split_sentences("First.   \n Second.");
        assert_eq!(sentences, vec!["First.", "Second."]);
    }

    #[test]
    fn test_split_sentences_no_break_without_whitespace() {
        // Decimal point is not followed by whitespace, so no split
        let sentences = split_sentences("Price is 3.5 today. Next one");
        assert_eq!(sentences, vec!["Price is 3.5 today.", "Next one"]);
    }

    #[test]
    fn test_split_sentences_consecutive_punctuation() {
        let sentences = split_sentences("Really?! Yes.");
        assert_eq!(sentences, vec!["Really?!", "Yes."]);
    }

    #[test]
    fn test_split_sentences_trailing_terminator() {
        let sentences = split_sentences("Only one. ");
        assert_eq!(sentences, vec!["Only one."]);
    }
}
