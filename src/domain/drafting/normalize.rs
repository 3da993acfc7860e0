//! Field normalization and quality backstops for extracted drafts.
//!
//! Model output routinely wraps fields in quotes or markdown emphasis and
//! sometimes repeats the `Title:` / `Content:` label. Normalization peels those
//! layers off the edges only; embedded emphasis such as `Amazing* Things` is
//! left alone.

/// Label that introduces the title line in the requested response format.
pub const TITLE_LABEL: &str = "title:";

/// Label that introduces the body in the requested response format.
pub const CONTENT_LABEL: &str = "content:";

/// Titles shorter than this (in characters) are replaced by the backstop.
pub const MIN_TITLE_CHARS: usize = 5;

/// Content shorter than this (in characters) is replaced by the backstop.
pub const MIN_CONTENT_CHARS: usize = 20;

/// Characters accepted as the end of a finished sentence.
pub const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Returns the text after `label` when `text` starts with it (ASCII case-insensitive).
///
/// The remainder is trimmed.
pub fn strip_label<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    let prefix = text.get(..label.len())?;
    if prefix.eq_ignore_ascii_case(label) {
        Some(text[label.len()..].trim())
    } else {
        None
    }
}

/// True when `text` starts with either draft label.
pub fn starts_with_any_label(text: &str) -> bool {
    strip_label(text, TITLE_LABEL).is_some() || strip_label(text, CONTENT_LABEL).is_some()
}

/// Removes the label from the front of `text` if present, otherwise returns it unchanged.
pub fn without_label<'a>(text: &'a str, label: &str) -> &'a str {
    strip_label(text, label).unwrap_or(text)
}

/// Strips one pair of identical surrounding quote characters.
fn strip_matched_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// One cleanup pass: trim, quotes, edge asterisks, trim, label.
fn clean_once<'a>(text: &'a str, label: &str) -> &'a str {
    let text = strip_matched_quotes(text.trim());
    let text = text.trim_matches('*').trim();
    without_label(text, label)
}

/// Normalizes a title or content candidate.
///
/// The cleanup pass is repeated until the text stops changing, which makes the
/// operation idempotent: a label uncovered by quote stripping, or asterisks
/// uncovered by label stripping, are removed too. Every pass that changes the
/// text shortens it, so the loop terminates.
pub fn normalize_field(text: &str, label: &str) -> String {
    let mut current = text;
    loop {
        let next = clean_once(current, label);
        if next == current {
            return next.to_string();
        }
        current = next;
    }
}

/// Title used when the extracted title is missing or too short.
pub fn fallback_title(keyword: &str) -> String {
    format!("The Ultimate Guide to {}", keyword)
}

/// Content used when the extracted body is missing or too short.
pub fn fallback_content(keyword: &str) -> String {
    format!(
        "This comprehensive article explores everything you need to know about {}, \
         providing valuable insights and practical information for readers interested in this topic.",
        keyword
    )
}

/// Replaces a too-short title with the keyword backstop.
pub fn backstop_title(title: String, keyword: &str) -> String {
    if title.chars().count() < MIN_TITLE_CHARS {
        tracing::warn!(keyword, "extracted title too short, using fallback title");
        fallback_title(keyword)
    } else {
        title
    }
}

/// Replaces too-short content and guarantees terminal punctuation.
pub fn backstop_content(content: String, keyword: &str) -> String {
    let mut content = if content.chars().count() < MIN_CONTENT_CHARS {
        tracing::warn!(keyword, "extracted content too short, using fallback content");
        fallback_content(keyword)
    } else {
        content
    };

    if !content.trim_end().ends_with(TERMINAL_PUNCTUATION) {
        content.push('.');
    }
    content
}
