//! Suggestions for issue references that Jira does not know.
//!
//! Similarity follows the classic "gestalt pattern matching" ratio: twice the
//! number of matching characters divided by the total length, where matches
//! are found by recursively taking the longest common substring.

use super::aliases::Aliases;

/// Maximum number of fuzzy alias matches.
pub const MAX_CLOSE_MATCHES: usize = 5;
/// Minimum similarity ratio for a fuzzy alias match.
pub const CLOSE_MATCH_CUTOFF: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub key: String,
    pub summary: String,
}

/// Similarity of `a` and `b` in `0.0..=1.0`.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let (i, j, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }
    size + matching_characters(&a[..i], &b[..j]) + matching_characters(&a[i + size..], &b[j + size..])
}

/// Longest common substring as `(start in a, start in b, length)`; the
/// earliest one in `a` wins ties.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut previous = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let length = previous[j] + 1;
                current[j + 1] = length;
                if length > best.2 {
                    best = (i + 1 - length, j + 1 - length, length);
                }
            }
        }
        previous = current;
    }
    best
}

/// Up to `n` candidates with a similarity of at least `cutoff`, best first.
pub fn get_close_matches<'a, I>(word: &str, candidates: I, n: usize, cutoff: f64) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| (similarity_ratio(candidate, word), candidate))
        .filter(|(score, _)| *score >= cutoff)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1)));
    scored.into_iter().take(n).map(|(_, candidate)| candidate).collect()
}

/// Issues the user may have meant by `query`.
///
/// Aliases whose name is close to the query come first (with `alias for ...`
/// as summary), followed by issues whose summary contains the query, case
/// insensitively. Every issue key appears once.
pub fn suggest_issues(query: &str, aliases: &Aliases, issues: &[(String, String)]) -> Vec<Suggestion> {
    let close = get_close_matches(query, aliases.names(), MAX_CLOSE_MATCHES, CLOSE_MATCH_CUTOFF);
    let mut suggestions: Vec<Suggestion> = Vec::new();

    for (alias, issue) in aliases.iter() {
        if close.contains(&alias) && !suggestions.iter().any(|s| s.key == issue) {
            suggestions.push(Suggestion {
                key: issue.to_string(),
                summary: format!("alias for {}", alias),
            });
        }
    }

    let needle = query.to_lowercase();
    for (key, summary) in issues {
        if summary.to_lowercase().contains(&needle) && !suggestions.iter().any(|s| &s.key == key) {
            suggestions.push(Suggestion {
                key: key.clone(),
                summary: summary.clone(),
            });
        }
    }

    suggestions
}
