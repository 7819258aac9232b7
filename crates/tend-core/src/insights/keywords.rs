//! Title tokenizer and frequent-term ranking

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Characters stripped from titles before splitting: everything that is
/// neither a word character nor whitespace.
fn strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid literal pattern"))
}

/// Split one title into countable tokens
///
/// Lowercases, strips punctuation, splits on whitespace, and drops tokens
/// of two characters or fewer ("go", "to", articles).
fn tokenize(title: &str) -> Vec<String> {
    let lowercased = title.to_lowercase();
    let cleaned = strip_pattern().replace_all(&lowercased, "");
    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

/// Rank tokens that occur more than once across all titles
///
/// Returns distinct tokens sorted by descending occurrence count. The sort
/// is stable over first-encounter order, so tokens with equal counts keep
/// the order in which the scan first saw them.
pub fn frequent_terms<'a, I>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for title in titles {
        for token in tokenize(title) {
            let count = counts.entry(token.clone()).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }
    }

    let mut ranked: Vec<String> = order.into_iter().filter(|t| counts[t] > 1).collect();
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked
}
