//! Keyword extractor — tokenizes a job description and returns the most
//! frequent non-stopword tokens.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of keywords returned.
pub const MAX_KEYWORDS: usize = 30;

/// Tokens this short carry no matching signal.
const MIN_TOKEN_CHARS: usize = 3;

/// Everything outside word characters, whitespace, and hyphens is noise
/// (punctuation, bullets, slashes) and becomes a separator.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("hardcoded regex is valid"));

/// High-frequency words carrying no signal in a job description.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "will", "would", "could", "should",
    "may", "might", "can", "must", "shall", "do", "does", "did", "get", "got", "make", "made",
    "take", "took", "come", "came", "go", "went", "see", "saw", "know", "knew", "think", "thought",
    "say", "said", "tell", "told", "ask", "asked", "work", "worked", "use", "used", "find",
    "found", "give", "gave", "put", "year", "years", "team", "company", "role", "position", "job",
    "opportunity",
];

/// Extracts up to [`MAX_KEYWORDS`] lowercase tokens from a job description,
/// ordered by descending frequency. Ties keep first-occurrence order, so the
/// output is fully deterministic. Empty input yields an empty list.
pub fn extract_keywords(job_text: &str) -> Vec<String> {
    let lowered = job_text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");

    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut ranked: Vec<String> = Vec::new();

    for token in cleaned.split_whitespace() {
        if token.chars().count() < MIN_TOKEN_CHARS || STOPWORDS.contains(&token) {
            continue;
        }
        let count = counts.entry(token.to_string()).or_insert(0);
        if *count == 0 {
            ranked.push(token.to_string());
        }
        *count += 1;
    }

    // Stable sort: equal frequencies keep first-occurrence order.
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked.truncate(MAX_KEYWORDS);
    ranked
}
