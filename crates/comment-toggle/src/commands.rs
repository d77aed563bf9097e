//! Host command and dispatch types.

use thiserror::Error;

/// An editor action the host can perform on the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Comment out every line covered by the selection.
    CommentSelection,
    /// Remove line comments from every line covered by the selection.
    UncommentSelection,
}

/// Options forwarded to the host dispatcher along with a command.
///
/// The default value asks for the host's silent do-default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOptions {
    /// Allow the host to raise UI (prompts, previews) while executing.
    pub allow_ui: bool,
}

/// How the host reacted to a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The host executed the command.
    Handled,
    /// The host has no binding for the command in the current context.
    ///
    /// Not an error at this layer: the host was reachable and answered.
    Unhandled,
}

/// Errors surfaced by a host dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The host rejected the command in its current state.
    #[error("host rejected {command:?}: {reason}")]
    Rejected {
        /// The rejected command.
        command: EditorCommand,
        /// Host-provided reason.
        reason: String,
    },

    /// The host failed while executing the command.
    #[error("host failed executing {command:?}: {reason}")]
    Failed {
        /// The failing command.
        command: EditorCommand,
        /// Host-provided reason.
        reason: String,
    },
}
