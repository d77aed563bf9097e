//! `comment-toggle-classify-simple` - Simple (regex-based) classification for `comment-toggle`.
//!
//! This crate stands in for a real tokenizer where full parsing or LSP integration is
//! unnecessary: a small ordered rule list classifies one line at a time, which is enough to
//! drive comment-toggle decisions.

mod profile;

pub use profile::{BlockTokens, LanguageProfile, PatternRule, ProfileError};

use comment_toggle::{
    CharSpan, ClassificationSource, ClassificationSpan, TAG_COMMENT, TAG_IDENTIFIER, TAG_KEYWORD,
    TAG_NUMBER, TAG_STRING,
};
use regex::Regex;

/// A single classification rule: a regex paired with the tag it assigns.
#[derive(Debug, Clone)]
pub struct ClassifyRule {
    regex: Regex,
    tag: String,
}

impl ClassifyRule {
    pub fn new(pattern: &str, tag: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            tag: tag.into(),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// A simple regex-based classifier.
///
/// Rules are applied per line. Candidate matches are taken non-overlapping, earliest start
/// first, with rule order breaking ties - so a line-comment rule listed first consumes the rest
/// of the line and suppresses keyword or identifier matches inside comment text.
///
/// It is *not* intended to be a full parser.
#[derive(Debug, Clone)]
pub struct RegexClassifier {
    rules: Vec<ClassifyRule>,
}

impl RegexClassifier {
    pub fn new(rules: Vec<ClassifyRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ClassifyRule] {
        &self.rules
    }

    /// A small default Rust grammar (comments, strings, keywords, numbers, identifiers).
    pub fn rust_default() -> Result<Self, regex::Error> {
        Ok(Self::new(vec![
            // Doc comments first so `///`/`//!` lines get the richer tag.
            ClassifyRule::new(r"//[/!].*", "doc comment")?,
            ClassifyRule::new(r"//.*", TAG_COMMENT)?,
            ClassifyRule::new(r#""(?:\\.|[^"\\])*""#, TAG_STRING)?,
            ClassifyRule::new(
                r"\b(?:fn|let|mut|pub|use|mod|struct|enum|impl|match|if|else|for|while|loop|return|const|static|trait|where)\b",
                TAG_KEYWORD,
            )?,
            ClassifyRule::new(r"\b\d[\d_]*(?:\.\d+)?\b", TAG_NUMBER)?,
            ClassifyRule::new(r"[A-Za-z_][A-Za-z0-9_]*", TAG_IDENTIFIER)?,
        ]))
    }

    /// Compile a classifier from a language profile.
    pub fn from_profile(profile: &LanguageProfile) -> Result<Self, ProfileError> {
        let mut rules = Vec::with_capacity(profile.patterns.len());
        for pattern in &profile.patterns {
            let rule = ClassifyRule::new(&pattern.regex, pattern.tag.clone()).map_err(|err| {
                ProfileError::RegexCompile {
                    pattern: pattern.regex.clone(),
                    message: err.to_string(),
                }
            })?;
            rules.push(rule);
        }
        Ok(Self::new(rules))
    }

    /// All classification spans in `text` overlapping `span` (char offsets over `text`).
    ///
    /// A zero-length request yields no spans.
    pub fn classify(&self, text: &str, span: CharSpan) -> Vec<ClassificationSpan> {
        let mut out = Vec::new();
        let mut line_start = 0usize;

        for line in text.split('\n') {
            if line_start > span.end {
                break;
            }
            let line_span = CharSpan::new(line_start, line_start + line.chars().count());
            if line_span.overlaps(&span) {
                let mut line_out = Vec::new();
                self.classify_line(line, line_start, &mut line_out);
                out.extend(
                    line_out
                        .into_iter()
                        .filter(|classification| classification.span.overlaps(&span)),
                );
            }
            line_start = line_span.end + 1; // step over the newline
        }

        out
    }

    fn classify_line(&self, line: &str, line_start: usize, out: &mut Vec<ClassificationSpan>) {
        // Gather candidate matches from every rule, as byte offsets.
        let mut candidates: Vec<(usize, usize, usize)> = Vec::new();
        for (index, rule) in self.rules.iter().enumerate() {
            for found in rule.regex.find_iter(line) {
                if found.start() < found.end() {
                    candidates.push((found.start(), found.end(), index));
                }
            }
        }
        candidates.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.2.cmp(&b.2)));

        // Non-overlapping sweep: earliest start wins, rule order breaks ties.
        let mut cursor = 0usize;
        for (start, end, index) in candidates {
            if start < cursor {
                continue;
            }
            if let Some(span) = span_from_match(line_start, line, start, end) {
                out.push(ClassificationSpan::new(span, self.rules[index].tag.clone()));
            }
            cursor = end;
        }
    }
}

/// Binds a classifier to a text snapshot, yielding a [`ClassificationSource`] the toggle
/// handler can query.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotClassifier<'a> {
    text: &'a str,
    classifier: &'a RegexClassifier,
}

impl<'a> SnapshotClassifier<'a> {
    pub fn new(text: &'a str, classifier: &'a RegexClassifier) -> Self {
        Self { text, classifier }
    }
}

impl ClassificationSource for SnapshotClassifier<'_> {
    fn classification_spans(&self, span: CharSpan) -> Vec<ClassificationSpan> {
        self.classifier.classify(self.text, span)
    }
}

fn span_from_match(
    line_start_offset: usize,
    line_text: &str,
    match_start_byte: usize,
    match_end_byte: usize,
) -> Option<CharSpan> {
    if match_start_byte >= match_end_byte || match_end_byte > line_text.len() {
        return None;
    }

    let start_col = line_text[..match_start_byte].chars().count();
    let end_col = line_text[..match_end_byte].chars().count();
    if start_col >= end_col {
        return None;
    }

    Some(CharSpan::new(
        line_start_offset + start_col,
        line_start_offset + end_col,
    ))
}
