//! Classification metadata: tagged spans produced by a host tokenizer.

use crate::span::CharSpan;

/// Tag name used by classifiers for comment text.
///
/// Matching is by case-insensitive substring, so richer host tags such as `"doc comment"` or
/// `"XML Doc Comment"` also count as comment text.
pub const TAG_COMMENT: &str = "comment";
/// Tag name for language keywords.
pub const TAG_KEYWORD: &str = "keyword";
/// Tag name for string literals.
pub const TAG_STRING: &str = "string";
/// Tag name for numeric literals.
pub const TAG_NUMBER: &str = "number";
/// Tag name for identifiers.
pub const TAG_IDENTIFIER: &str = "identifier";

/// A tagged range produced by a tokenizer, identifying the syntactic category of a slice of
/// buffer text.
///
/// Classification spans are host-owned, read-only metadata; the kernel never mutates or caches
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationSpan {
    /// The classified range.
    pub span: CharSpan,
    /// The classifier's tag name for the range (e.g. `"comment"`, `"keyword"`).
    pub tag: String,
}

impl ClassificationSpan {
    /// Create a new classification span.
    pub fn new(span: CharSpan, tag: impl Into<String>) -> Self {
        Self {
            span,
            tag: tag.into(),
        }
    }

    /// Whether this span's tag marks comment text.
    pub fn is_comment(&self) -> bool {
        is_comment_tag(&self.tag)
    }
}

/// Returns `true` when a tag name marks comment text.
///
/// The test is a case-insensitive substring match for [`TAG_COMMENT`], so composite tags
/// (`"doc comment"`, `"comment.line"`) qualify.
pub fn is_comment_tag(tag: &str) -> bool {
    tag.to_lowercase().contains(TAG_COMMENT)
}

/// A classification query capability supplied by the host.
///
/// Implementations answer against the same snapshot the view's selections were taken from.
pub trait ClassificationSource {
    /// All classification spans overlapping `span`.
    ///
    /// Unclassified text (whitespace, plain text without a grammar) yields no spans; an empty
    /// result is a valid answer, not an error.
    fn classification_spans(&self, span: CharSpan) -> Vec<ClassificationSpan>;
}
