//! Turns free-form model output into a titled draft.
//!
//! Models do not reliably follow the requested `Title:` / `Content:` format,
//! so extraction runs a cascade of progressively looser strategies. The first
//! strategy producing both a title and a body wins; the sentence split is the
//! last resort and always yields something. The chosen candidate is then
//! normalized and backstopped, so extraction never fails.

use super::normalize::{
    backstop_content, backstop_title, normalize_field, starts_with_any_label, strip_label,
    without_label, CONTENT_LABEL, TITLE_LABEL,
};
use super::GenerationResult;

/// One way of locating a title and body in raw model text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// `Title: ...` and `Content: ...` lines, in any order.
    LabeledLines,
    /// First paragraph or line is the title, what follows is the body.
    Paragraphs,
    /// First sentence is the title. Always produces a candidate.
    Sentences,
}

impl ParseStrategy {
    /// Strategies tried before the sentence split, in order.
    pub const PRIMARY: [ParseStrategy; 2] = [ParseStrategy::LabeledLines, ParseStrategy::Paragraphs];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStrategy::LabeledLines => "labeled_lines",
            ParseStrategy::Paragraphs => "paragraphs",
            ParseStrategy::Sentences => "sentences",
        }
    }

    /// Applies this strategy to trimmed, `\n`-separated text.
    pub fn apply(&self, text: &str, keyword: &str) -> DraftCandidate {
        match self {
            ParseStrategy::LabeledLines => labeled_lines(text),
            ParseStrategy::Paragraphs => paragraphs(text),
            ParseStrategy::Sentences => sentences(text, keyword),
        }
    }
}

/// Title and body located by a strategy, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftCandidate {
    pub title: String,
    pub content: String,
}

impl DraftCandidate {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields were found.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

fn labeled_lines(text: &str) -> DraftCandidate {
    let mut candidate = DraftCandidate::default();
    let mut lines = text.lines().map(str::trim).peekable();

    while let Some(line) = lines.next() {
        if let Some(title) = strip_label(line, TITLE_LABEL) {
            candidate.title = title.to_string();
        } else if let Some(first) = strip_label(line, CONTENT_LABEL) {
            let mut body = first.to_string();
            while let Some(next) = lines.peek() {
                if starts_with_any_label(next) {
                    break;
                }
                if !next.is_empty() {
                    if !body.is_empty() {
                        body.push(' ');
                    }
                    body.push_str(next);
                }
                lines.next();
            }
            candidate.content = body;
        }

        if candidate.is_complete() {
            break;
        }
    }

    candidate
}

fn paragraphs(text: &str) -> DraftCandidate {
    let blocks: Vec<&str> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect();
    if let [first, second, ..] = blocks.as_slice() {
        return DraftCandidate::new(
            without_label(first, TITLE_LABEL),
            without_label(second, CONTENT_LABEL),
        );
    }

    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    match lines.split_first() {
        Some((first, rest)) if !rest.is_empty() => {
            let body = rest.join(" ");
            DraftCandidate::new(
                without_label(first, TITLE_LABEL),
                without_label(&body, CONTENT_LABEL),
            )
        }
        _ => DraftCandidate::default(),
    }
}

fn sentences(text: &str, keyword: &str) -> DraftCandidate {
    let segments: Vec<&str> = text.split('.').collect();
    match segments.split_first() {
        Some((first, rest)) if !rest.is_empty() => {
            let title = format!("{}.", first.trim());
            let mut content = rest
                .iter()
                .map(|segment| segment.trim())
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
                .join(". ");
            if !content.is_empty() && !content.ends_with('.') {
                content.push('.');
            }
            DraftCandidate::new(title, content)
        }
        _ => DraftCandidate::new(format!("Complete Guide to {}", keyword), text),
    }
}

/// Extracts a draft article from raw model output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleDraftExtractor;

impl ArticleDraftExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts a title and body for `keyword` from `raw_text`.
    ///
    /// Always succeeds. Blank input goes straight to the keyword backstops.
    pub fn extract(&self, raw_text: &str, keyword: &str) -> GenerationResult {
        let text = raw_text.replace("\r\n", "\n");
        let text = text.trim();

        let candidate = if text.is_empty() {
            tracing::warn!(keyword, "model returned blank text, drafting from keyword only");
            DraftCandidate::default()
        } else {
            self.locate(text, keyword)
        };

        let title = backstop_title(normalize_field(&candidate.title, TITLE_LABEL), keyword);
        let content =
            backstop_content(normalize_field(&candidate.content, CONTENT_LABEL), keyword);

        GenerationResult::drafted(title, content)
    }

    /// Runs the strategy cascade over non-blank text.
    pub fn locate(&self, text: &str, keyword: &str) -> DraftCandidate {
        for strategy in ParseStrategy::PRIMARY {
            let candidate = strategy.apply(text, keyword);
            if candidate.is_complete() {
                tracing::debug!(strategy = strategy.as_str(), "draft located");
                return candidate;
            }
        }

        tracing::debug!(
            strategy = ParseStrategy::Sentences.as_str(),
            "draft located by fallback"
        );
        ParseStrategy::Sentences.apply(text, keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drafting::normalize::{fallback_content, MIN_CONTENT_CHARS, MIN_TITLE_CHARS};
    use proptest::prelude::*;

    fn extract(raw: &str, keyword: &str) -> GenerationResult {
        ArticleDraftExtractor::new().extract(raw, keyword)
    }

    #[test]
    fn well_formed_response_is_extracted_verbatim() {
        let raw = "Title: Ten Tips for Better Sourdough\n\
                   Content: Sourdough rewards patience. Feed your starter daily and watch it thrive.";

        let result = extract(raw, "sourdough");

        assert!(result.success);
        assert_eq!(result.title, "Ten Tips for Better Sourdough");
        assert_eq!(
            result.content,
            "Sourdough rewards patience. Feed your starter daily and watch it thrive."
        );
        assert_eq!(result.error, None);
    }

    #[test]
    fn labeled_lines_join_continuation_lines() {
        let candidate = ParseStrategy::LabeledLines.apply("Title: Foo\nContent: Bar baz.\nqux.", "k");
        assert_eq!(candidate, DraftCandidate::new("Foo", "Bar baz. qux."));
    }

    #[test]
    fn short_labeled_fields_fall_back_to_backstops() {
        let result = extract("Title: Foo\nContent: Bar baz.\nqux.", "knitting");

        assert_eq!(result.title, "The Ultimate Guide to knitting");
        assert_eq!(result.content, fallback_content("knitting"));
    }

    #[test]
    fn labeled_lines_stop_at_next_label_and_skip_blank_lines() {
        let raw = "Content: First line of the body\n\nsecond line\nTitle: Late Title Here";
        let candidate = ParseStrategy::LabeledLines.apply(raw, "k");

        assert_eq!(candidate.title, "Late Title Here");
        assert_eq!(candidate.content, "First line of the body second line");
    }

    #[test]
    fn labeled_lines_are_case_insensitive() {
        let candidate = ParseStrategy::LabeledLines.apply("TITLE: Upper\ncontent: lower body", "k");
        assert_eq!(candidate, DraftCandidate::new("Upper", "lower body"));
    }

    #[test]
    fn paragraphs_take_first_two_blocks() {
        let raw = "Why Bees Matter\n\nBees pollinate a third of our food.\n\nA footer.";
        let candidate = ParseStrategy::Paragraphs.apply(raw, "bees");
        assert_eq!(
            candidate,
            DraftCandidate::new("Why Bees Matter", "Bees pollinate a third of our food.")
        );
    }

    #[test]
    fn paragraphs_fall_back_to_lines() {
        let raw = "Title: Why Bees Matter\nBees pollinate crops.\n\n";
        let candidate = ParseStrategy::Paragraphs.apply(raw.trim(), "bees");
        assert_eq!(
            candidate,
            DraftCandidate::new("Why Bees Matter", "Bees pollinate crops.")
        );
    }

    #[test]
    fn paragraphs_need_two_lines() {
        assert_eq!(
            ParseStrategy::Paragraphs.apply("just one line", "k"),
            DraftCandidate::default()
        );
    }

    #[test]
    fn sentences_split_on_periods() {
        let candidate =
            ParseStrategy::Sentences.apply("Kayaks are fun. They float. Paddle often", "kayaks");
        assert_eq!(
            candidate,
            DraftCandidate::new("Kayaks are fun.", "They float. Paddle often.")
        );
    }

    #[test]
    fn empty_input_uses_keyword_backstops() {
        let result = extract("", "gardening");

        assert!(result.success);
        assert_eq!(result.title, "The Ultimate Guide to gardening");
        assert!(result.content.contains("gardening"));
        assert_eq!(result.content, fallback_content("gardening"));
    }

    #[test]
    fn whitespace_input_uses_keyword_backstops() {
        let result = extract(" \n\t \r\n", "gardening");
        assert_eq!(result.title, "The Ultimate Guide to gardening");
    }

    #[test]
    fn single_unpunctuated_line_becomes_complete_guide() {
        let raw = "paddling across quiet lakes at dawn";
        let result = extract(raw, "kayaks");

        assert!(result.success);
        assert_eq!(result.title, "Complete Guide to kayaks");
        assert_eq!(result.content, "paddling across quiet lakes at dawn.");
    }

    #[test]
    fn embedded_emphasis_survives_normalization() {
        let raw = "\"Title: *Amazing* Things*\"\nContent: \"Deep stuff.\"";
        let result = extract(raw, "things");
        assert_eq!(result.title, "Amazing* Things");
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let raw = "Title: Crossing Line Endings\r\n\r\nContent: Windows newlines should not confuse paragraph detection.";
        let result = extract(raw, "newlines");
        assert_eq!(result.title, "Crossing Line Endings");
        assert_eq!(
            result.content,
            "Windows newlines should not confuse paragraph detection."
        );
    }

    #[test]
    fn markdown_wrapped_fields_are_cleaned() {
        let raw = "**Title: Winter Cycling Essentials**\n**Content: Layer up and keep your chain clean all season**";
        let result = extract(raw, "cycling");
        assert_eq!(result.title, "Winter Cycling Essentials");
        assert_eq!(result.content, "Layer up and keep your chain clean all season.");
    }

    proptest! {
        #[test]
        fn non_blank_input_always_yields_a_usable_draft(raw in "\\PC{0,200}", keyword in "[a-z]{1,20}") {
            prop_assume!(!raw.trim().is_empty());
            let result = extract(&raw, &keyword);

            prop_assert!(result.success);
            prop_assert!(result.error.is_none());
            prop_assert!(result.title.chars().count() >= MIN_TITLE_CHARS);
            prop_assert!(result.content.chars().count() >= MIN_CONTENT_CHARS);
            prop_assert!(result.content.ends_with(['.', '!', '?']));
            prop_assert_eq!(normalize_field(&result.title, TITLE_LABEL), result.title.clone());
            prop_assert_eq!(normalize_field(&result.content, CONTENT_LABEL), result.content.clone());
        }

        #[test]
        fn multi_line_input_always_yields_a_usable_draft(
            lines in proptest::collection::vec("[ A-Za-z:*\"'.!?]{0,40}", 1..6),
            keyword in "[a-z]{1,12}",
        ) {
            let raw = lines.join("\n");
            let result = extract(&raw, &keyword);

            prop_assert!(result.success);
            prop_assert!(result.title.chars().count() >= MIN_TITLE_CHARS);
            prop_assert!(result.content.chars().count() >= MIN_CONTENT_CHARS);
            prop_assert!(result.content.ends_with(['.', '!', '?']));
        }

        #[test]
        fn normalization_is_idempotent(text in "[ A-Za-z:*\"']{0,40}") {
            for label in [TITLE_LABEL, CONTENT_LABEL] {
                let once = normalize_field(&text, label);
                prop_assert_eq!(normalize_field(&once, label), once);
            }
        }
    }
}
