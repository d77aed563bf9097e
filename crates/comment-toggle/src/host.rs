//! Capability traits supplied by the hosting editor.
//!
//! The kernel never looks capabilities up dynamically. Callers hold whatever host objects they
//! have and pass these seams in at call time.

use crate::commands::{DispatchError, DispatchOptions, DispatchOutcome, EditorCommand};
use crate::selection::SelectionSet;
use crate::span::CharSpan;

/// Read-only view state: what is selected, and where the caret's line is.
///
/// The `&self` borrow doubles as the snapshot: implementations must answer every method against
/// one consistent buffer state.
pub trait EditorView {
    /// The current selection spans, normalized, in document order.
    fn selections(&self) -> SelectionSet;

    /// The extent of the line containing the caret, excluding the line break.
    fn caret_line_extent(&self) -> CharSpan;
}

/// Command-execution capability: performs an editor action against the current editor context.
pub trait CommandDispatcher {
    /// Execute `command` with the given options.
    fn dispatch(
        &mut self,
        command: EditorCommand,
        options: DispatchOptions,
    ) -> Result<DispatchOutcome, DispatchError>;
}

/// Caret-movement capability.
pub trait CaretOperations {
    /// Move the caret down exactly one line.
    ///
    /// With `extend_selection`, the selection is extended to the new caret position; otherwise
    /// the selection collapses to the caret.
    fn move_line_down(&mut self, extend_selection: bool);
}

/// The full set of host capabilities needed to execute a toggle.
///
/// Blanket-implemented for any type providing all three seams, so a host that is a single object
/// can be passed as one `&mut` reference.
pub trait EditorHost: EditorView + CommandDispatcher + CaretOperations {}

impl<T: EditorView + CommandDispatcher + CaretOperations + ?Sized> EditorHost for T {}
