//! `comment-toggle-host-memory` - an in-memory reference host for `comment-toggle`.
//!
//! [`MemoryHost`] keeps a rope-backed buffer, a selection set, and a caret, and implements the
//! kernel's three capability seams: [`EditorView`], [`CommandDispatcher`] (line comment /
//! uncomment edits), and [`CaretOperations`]. It exists for integration tests, examples, and as
//! a worked reference of the capability contract - not as an editor.

use comment_toggle::{
    CaretOperations, CharSpan, CommandDispatcher, DispatchError, DispatchOptions, DispatchOutcome,
    EditorCommand, EditorView, SelectionSet,
};
use ropey::Rope;
use thiserror::Error;
use tracing::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

/// Errors produced by [`MemoryHost`] construction and selection updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host was constructed without a usable line comment token.
    #[error("line comment token must not be empty")]
    EmptyCommentToken,

    /// A selection span or caret reached past the end of the buffer.
    #[error("span {start}..{end} exceeds buffer length {len}")]
    SpanOutOfBounds {
        /// Span start offset.
        start: usize,
        /// Span end offset.
        end: usize,
        /// Buffer length in characters.
        len: usize,
    },
}

/// An in-memory editor host over a [`ropey::Rope`] buffer.
///
/// Comment edits insert the configured line comment token (plus one space) after each covered
/// line's leading whitespace; uncomment edits remove it. Whitespace-only lines are left alone in
/// both directions. Selections and the caret are shifted to follow the edits.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    buffer: Rope,
    selections: SelectionSet,
    caret: usize,
    line_comment: String,
}

impl MemoryHost {
    /// Create a host over `text` using `line_comment` as the comment token.
    ///
    /// Fails immediately when the token is empty or whitespace-only.
    pub fn new(text: &str, line_comment: impl Into<String>) -> Result<Self, HostError> {
        let line_comment = line_comment.into();
        if line_comment.trim().is_empty() {
            return Err(HostError::EmptyCommentToken);
        }

        Ok(Self {
            buffer: Rope::from_str(text),
            selections: SelectionSet::caret(0),
            caret: 0,
            line_comment,
        })
    }

    /// The current buffer contents.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// The caret position, in characters.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The configured line comment token.
    pub fn line_comment(&self) -> &str {
        &self.line_comment
    }

    /// Collapse the selection to a caret at `offset`.
    pub fn place_caret(&mut self, offset: usize) -> Result<(), HostError> {
        self.check_span(CharSpan::caret(offset))?;
        self.caret = offset;
        self.selections = SelectionSet::caret(offset);
        Ok(())
    }

    /// Select a single span. The caret moves to its end.
    pub fn set_selection(&mut self, span: CharSpan) -> Result<(), HostError> {
        self.set_selections(vec![span])
    }

    /// Select multiple spans. The caret moves to the end of the last span.
    pub fn set_selections(&mut self, spans: Vec<CharSpan>) -> Result<(), HostError> {
        for span in &spans {
            self.check_span(*span)?;
        }
        let set = SelectionSet::new(spans);
        self.caret = set.spans().last().map(|span| span.end).unwrap_or(0);
        self.selections = set;
        Ok(())
    }

    fn check_span(&self, span: CharSpan) -> Result<(), HostError> {
        let len = self.buffer.len_chars();
        if span.end > len {
            return Err(HostError::SpanOutOfBounds {
                start: span.start,
                end: span.end,
                len,
            });
        }
        Ok(())
    }

    /// One line's text, excluding the line break.
    fn line_text(&self, line: usize) -> String {
        let raw = self.buffer.line(line).to_string();
        raw.trim_end_matches(['\n', '\r']).to_string()
    }

    /// Column of the first non-whitespace character, or `None` for whitespace-only lines.
    fn indent_column(&self, line: usize) -> Option<usize> {
        self.line_text(line).chars().position(|c| !c.is_whitespace())
    }

    /// All lines covered by the current selection, in order, deduplicated.
    ///
    /// A zero-length span covers the line containing its offset.
    fn covered_lines(&self) -> Vec<usize> {
        let len = self.buffer.len_chars();
        let mut lines = Vec::new();
        for span in self.selections.iter() {
            let start_line = self.buffer.char_to_line(span.start.min(len));
            let last_offset = if span.is_empty() { span.start } else { span.end - 1 };
            let end_line = self.buffer.char_to_line(last_offset.min(len));
            lines.extend(start_line..=end_line);
        }
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    /// Insert the comment token on each covered line. Returns the edits in original coordinates.
    fn comment_lines(&mut self) -> Vec<(usize, isize)> {
        let token = format!("{} ", self.line_comment);
        let token_chars = token.chars().count() as isize;

        let mut edits = Vec::new();
        // Bottom-up so earlier offsets stay valid while editing.
        for line in self.covered_lines().into_iter().rev() {
            let Some(column) = self.indent_column(line) else {
                continue;
            };
            let offset = self.buffer.line_to_char(line) + column;
            self.buffer.insert(offset, &token);
            edits.push((offset, token_chars));
        }
        edits
    }

    /// Remove the comment token from each covered line that carries one.
    fn uncomment_lines(&mut self) -> Vec<(usize, isize)> {
        let mut edits = Vec::new();
        for line in self.covered_lines().into_iter().rev() {
            let text = self.line_text(line);
            let Some(column) = text.chars().position(|c| !c.is_whitespace()) else {
                continue;
            };
            let rest: String = text.chars().skip(column).collect();
            if !rest.starts_with(&self.line_comment) {
                continue;
            }

            let mut removed = self.line_comment.chars().count();
            if rest.chars().nth(removed) == Some(' ') {
                removed += 1;
            }
            let offset = self.buffer.line_to_char(line) + column;
            self.buffer.remove(offset..offset + removed);
            edits.push((offset, -(removed as isize)));
        }
        edits
    }

    /// Shift the selection and caret to follow a batch of edits.
    fn apply_deltas(&mut self, edits: &[(usize, isize)]) {
        if edits.is_empty() {
            return;
        }

        let spans = self
            .selections
            .iter()
            .map(|span| {
                CharSpan::new(
                    remap(span.start, edits, false),
                    remap(span.end, edits, false),
                )
            })
            .collect();
        self.selections = SelectionSet::new(spans);
        self.caret = remap(self.caret, edits, true);
    }
}

/// Map `pos` from pre-edit to post-edit coordinates.
///
/// An insertion exactly at `pos` shifts it only when `shift_at_equal` is set: the caret rides
/// ahead of inserted text, while a selection span keeps the insertion inside itself.
fn remap(pos: usize, edits: &[(usize, isize)], shift_at_equal: bool) -> usize {
    let mut result = pos as isize;
    for &(offset, delta) in edits {
        if delta >= 0 {
            if offset < pos || (shift_at_equal && offset == pos) {
                result += delta;
            }
        } else if offset < pos {
            let removed = (-delta) as usize;
            result -= removed.min(pos - offset) as isize;
        }
    }
    result.max(0) as usize
}

/// Largest grapheme-cluster boundary in `line` not past `column` (clamped to line length).
fn snap_to_grapheme(line: &str, column: usize) -> usize {
    let mut pos = 0usize;
    for grapheme in line.graphemes(true) {
        if pos >= column {
            return pos;
        }
        let next = pos + grapheme.chars().count();
        if next > column {
            return pos;
        }
        pos = next;
    }
    pos.min(column)
}

impl EditorView for MemoryHost {
    fn selections(&self) -> SelectionSet {
        self.selections.clone()
    }

    fn caret_line_extent(&self) -> CharSpan {
        let line = self.buffer.char_to_line(self.caret);
        let start = self.buffer.line_to_char(line);
        CharSpan::new(start, start + self.line_text(line).chars().count())
    }
}

impl CommandDispatcher for MemoryHost {
    fn dispatch(
        &mut self,
        command: EditorCommand,
        _options: DispatchOptions,
    ) -> Result<DispatchOutcome, DispatchError> {
        debug!(?command, "memory host executing command");
        let edits = match command {
            EditorCommand::CommentSelection => self.comment_lines(),
            EditorCommand::UncommentSelection => self.uncomment_lines(),
        };
        self.apply_deltas(&edits);
        Ok(DispatchOutcome::Handled)
    }
}

impl CaretOperations for MemoryHost {
    fn move_line_down(&mut self, extend_selection: bool) {
        let line = self.buffer.char_to_line(self.caret);
        let line_start = self.buffer.line_to_char(line);
        let column = self.caret - line_start;

        let last_line = self.buffer.len_lines().saturating_sub(1);
        let new_caret = if line >= last_line {
            // Already on the last line: clamp to end of line.
            line_start + self.line_text(line).chars().count()
        } else {
            let target = line + 1;
            let target_start = self.buffer.line_to_char(target);
            target_start + snap_to_grapheme(&self.line_text(target), column)
        };

        if extend_selection {
            let anchor = self
                .selections
                .spans()
                .first()
                .map(|span| span.start)
                .unwrap_or(self.caret);
            let (start, end) = if anchor <= new_caret {
                (anchor, new_caret)
            } else {
                (new_caret, anchor)
            };
            self.selections = SelectionSet::new(vec![CharSpan::new(start, end)]);
        } else {
            self.selections = SelectionSet::caret(new_caret);
        }
        self.caret = new_caret;
        trace!(caret = self.caret, "moved caret down one line");
    }
}
