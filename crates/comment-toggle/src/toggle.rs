//! The toggle-comment decision and its dispatch.

use tracing::debug;

use crate::classify::ClassificationSource;
use crate::commands::{DispatchError, DispatchOptions, DispatchOutcome, EditorCommand};
use crate::host::{EditorHost, EditorView};

/// Which way the toggle will go for the current selection.
///
/// Computed fresh per invocation and discarded after dispatch; it carries no identity beyond the
/// current call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDecision {
    /// The selection holds at least one non-comment token: comment it out.
    Comment,
    /// Every classified token in the selection is comment text: uncomment.
    Uncomment,
}

impl ToggleDecision {
    /// The host command that realizes this decision.
    pub fn command(self) -> EditorCommand {
        match self {
            ToggleDecision::Comment => EditorCommand::CommentSelection,
            ToggleDecision::Uncomment => EditorCommand::UncommentSelection,
        }
    }
}

/// What a toggle invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The decision that was dispatched.
    pub decision: ToggleDecision,
    /// How the host reacted to the dispatched command.
    pub dispatch: DispatchOutcome,
    /// Whether the caret was nudged down a line (caret-only invocations).
    pub caret_moved: bool,
}

/// The toggle-comment command handler.
///
/// Holds only the dispatch options it forwards; every host capability is supplied at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleComment {
    options: DispatchOptions,
}

impl ToggleComment {
    /// Create a handler that dispatches with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that forwards the given dispatch options.
    pub fn with_options(options: DispatchOptions) -> Self {
        Self { options }
    }

    /// Returns `true` iff every classified token overlapping the selection is comment text.
    ///
    /// For a zero-length selection span the caret's line extent is checked instead. The scan
    /// short-circuits on the first non-comment tag, across tokens and across selection ranges
    /// alike. A range with no classification at all contributes no failing case: a selection
    /// over unclassified text reports all-commented.
    pub fn is_all_commented<V, C>(view: &V, classifier: &C) -> bool
    where
        V: EditorView + ?Sized,
        C: ClassificationSource + ?Sized,
    {
        for span in view.selections().iter() {
            let span_to_check = if span.is_empty() {
                view.caret_line_extent()
            } else {
                *span
            };

            for classification in classifier.classification_spans(span_to_check) {
                if !classification.is_comment() {
                    return false;
                }
            }
        }

        true
    }

    /// Decide between commenting and uncommenting the current selection.
    pub fn decide<V, C>(view: &V, classifier: &C) -> ToggleDecision
    where
        V: EditorView + ?Sized,
        C: ClassificationSource + ?Sized,
    {
        if Self::is_all_commented(view, classifier) {
            ToggleDecision::Uncomment
        } else {
            ToggleDecision::Comment
        }
    }

    /// Toggle comment state for the host's current selection.
    ///
    /// Dispatches [`EditorCommand::UncommentSelection`] when the selection is all comment text
    /// and [`EditorCommand::CommentSelection`] otherwise, then nudges the caret down one line
    /// (without extending the selection) when nothing was selected.
    ///
    /// A dispatch failure propagates as `Err` and leaves the caret where it was.
    pub fn handle<H, C>(
        &self,
        host: &mut H,
        classifier: &C,
    ) -> Result<ToggleOutcome, DispatchError>
    where
        H: EditorHost + ?Sized,
        C: ClassificationSource + ?Sized,
    {
        let caret_only = host.selections().is_caret_only();
        let decision = Self::decide(&*host, classifier);
        let command = decision.command();
        debug!(?command, caret_only, "dispatching toggle-comment command");

        let dispatch = host.dispatch(command, self.options)?;
        if caret_only {
            host.move_line_down(false);
        }

        Ok(ToggleOutcome {
            decision,
            dispatch,
            caret_moved: caret_only,
        })
    }
}
