use scraper::ElementRef;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Trim and normalize to Unicode NFC (canonical composed form).
pub fn normalise(s: &str) -> String {
    s.trim().nfc().collect()
}

/// Split a block of text into de-duplicated, trimmed, NFC-normalized lines,
/// preserving first-occurrence order. Empty lines are dropped.
pub fn split_lines(block: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in block.split('\n') {
        let line = normalise(raw);
        if line.is_empty() {
            continue;
        }
        if seen.insert(line.clone()) {
            out.push(line);
        }
    }
    out
}

/// Visible text of a subtree, one text node per line. Feed the result to
/// [`split_lines`] to obtain the block for field classification.
pub fn element_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Visible text of a subtree joined with single spaces, for one-line
/// fields like the name heading.
pub fn inline_text(el: ElementRef) -> String {
    normalise(
        &el.text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    )
}
