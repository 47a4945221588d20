use std::collections::BTreeMap;

/// Tokenize text into lower-cased terms split on runs of whitespace.
///
/// The ASCII information separators (U+001C..=U+001F) also count as
/// whitespace. Punctuation is kept as part of the token and no stemming or stopword
/// removal is applied, so `"Cat,"` and `"cat"` are distinct terms.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Raw term frequency of every distinct term in `text`, in term order.
pub fn term_counts(text: &str) -> BTreeMap<String, u32> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for term in tokenize(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// Log-scaled term frequency, `1 + ln(tf)`. Zero for a zero count.
#[inline]
pub fn log_tf(tf: u32) -> f64 {
    if tf > 0 { 1.0 + (tf as f64).ln() } else { 0.0 }
}
