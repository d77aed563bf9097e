#![warn(missing_docs)]
//! Comment Toggle - Headless Toggle-Comment Command Kernel
//!
//! # Overview
//!
//! `comment-toggle` decides whether the current selection of an editor view should be commented
//! out or uncommented, and dispatches the matching host command. The decision is driven entirely
//! by classification metadata the host has already computed: if every classified token overlapping
//! the selection is comment text, the selection is uncommented; one non-comment token anywhere
//! forces commenting.
//!
//! The kernel is headless. It owns no text buffer, no tokenizer, and no command implementation;
//! those arrive as narrow capability traits supplied at call time:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ToggleComment (decision + dispatch)        │  ← this crate
//! ├──────────────┬───────────────┬──────────────┤
//! │  EditorView  │ Classification│  Command     │  ← host capabilities
//! │  (selection) │ Source (tags) │  Dispatcher  │
//! └──────────────┴───────────────┴──────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use comment_toggle::{
//!     CaretOperations, CharSpan, ClassificationSource, ClassificationSpan, CommandDispatcher,
//!     DispatchError, DispatchOptions, DispatchOutcome, EditorCommand, EditorView, SelectionSet,
//!     ToggleComment, ToggleDecision,
//! };
//!
//! // A host with a caret parked on a fully commented line.
//! struct Host {
//!     moved: bool,
//! }
//!
//! impl EditorView for Host {
//!     fn selections(&self) -> SelectionSet {
//!         SelectionSet::caret(3)
//!     }
//!     fn caret_line_extent(&self) -> CharSpan {
//!         CharSpan::new(0, 10)
//!     }
//! }
//!
//! impl CommandDispatcher for Host {
//!     fn dispatch(
//!         &mut self,
//!         _command: EditorCommand,
//!         _options: DispatchOptions,
//!     ) -> Result<DispatchOutcome, DispatchError> {
//!         Ok(DispatchOutcome::Handled)
//!     }
//! }
//!
//! impl CaretOperations for Host {
//!     fn move_line_down(&mut self, _extend_selection: bool) {
//!         self.moved = true;
//!     }
//! }
//!
//! struct AllComments;
//!
//! impl ClassificationSource for AllComments {
//!     fn classification_spans(&self, span: CharSpan) -> Vec<ClassificationSpan> {
//!         vec![ClassificationSpan::new(span, "comment")]
//!     }
//! }
//!
//! let mut host = Host { moved: false };
//! let outcome = ToggleComment::new().handle(&mut host, &AllComments).unwrap();
//!
//! assert_eq!(outcome.decision, ToggleDecision::Uncomment);
//! assert!(host.moved); // caret-only invocations nudge the caret down a line
//! ```
//!
//! # Module Description
//!
//! - [`span`] - half-open character-offset spans
//! - [`selection`] - normalized selection sets
//! - [`classify`] - classification spans, tag names, and the classifier capability
//! - [`commands`] - host command and dispatch types
//! - [`host`] - the view/dispatch/caret capability traits
//! - [`toggle`] - the toggle-comment decision and handler
//!
//! # Companion Crates
//!
//! - `comment-toggle-classify-simple` - a regex-based [`ClassificationSource`] with YAML
//!   language profiles
//! - `comment-toggle-host-memory` - an in-memory reference host over a rope buffer

pub mod classify;
pub mod commands;
pub mod host;
pub mod selection;
pub mod span;
pub mod toggle;

pub use classify::{
    ClassificationSource, ClassificationSpan, TAG_COMMENT, TAG_IDENTIFIER, TAG_KEYWORD,
    TAG_NUMBER, TAG_STRING, is_comment_tag,
};
pub use commands::{DispatchError, DispatchOptions, DispatchOutcome, EditorCommand};
pub use host::{CaretOperations, CommandDispatcher, EditorHost, EditorView};
pub use selection::SelectionSet;
pub use span::CharSpan;
pub use toggle::{ToggleComment, ToggleDecision, ToggleOutcome};
