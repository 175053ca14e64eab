//! Text helpers for chunking and boundary checks.

/// Collapses newlines and runs of whitespace into single spaces.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits normalised cell text on `delimiters`, trimming and lowercasing
/// each chunk. Empty chunks are dropped.
pub fn split_chunks(text: &str, delimiters: &[char]) -> Vec<String> {
    text.split(|c: char| delimiters.contains(&c))
        .map(|chunk| chunk.trim().to_lowercase())
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

fn starts_at_boundary(chunk: &str, start: usize) -> bool {
    chunk[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}

fn ends_at_boundary(rest: &str) -> bool {
    rest.chars().next().is_none_or(|c| !c.is_alphanumeric())
}

/// True if `chunk[start..end]` is delimited by word boundaries.
///
/// With `allow_plural`, a trailing `s` or `es` that itself ends at a
/// boundary is accepted too, so "seizure" matches inside "seizures" but
/// "pica" never matches inside "typical".
pub fn is_word_match(chunk: &str, start: usize, end: usize, allow_plural: bool) -> bool {
    if !starts_at_boundary(chunk, start) {
        return false;
    }
    let rest = &chunk[end..];
    if ends_at_boundary(rest) {
        return true;
    }
    allow_plural
        && ["s", "es"]
            .iter()
            .any(|suffix| rest.strip_prefix(suffix).is_some_and(ends_at_boundary))
}

/// Byte offsets of every occurrence of `needle` in `haystack` accepted by
/// `accept`, in text order.
pub fn find_matches<F>(haystack: &str, needle: &str, mut accept: F) -> Vec<usize>
where
    F: FnMut(usize) -> bool,
{
    let mut found = Vec::new();
    if needle.is_empty() {
        return found;
    }
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        if accept(start) {
            found.push(start);
        }
        let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
        from = start + step;
    }
    found
}
