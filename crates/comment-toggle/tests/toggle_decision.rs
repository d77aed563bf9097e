use std::cell::Cell;

use comment_toggle::{
    CaretOperations, CharSpan, ClassificationSource, ClassificationSpan, CommandDispatcher,
    DispatchError, DispatchOptions, DispatchOutcome, EditorCommand, EditorView, SelectionSet,
    TAG_COMMENT, TAG_IDENTIFIER, TAG_KEYWORD, ToggleComment, ToggleDecision,
};

/// Classification metadata fixed up front; records how many queries were issued.
struct ScriptedClassifier {
    spans: Vec<ClassificationSpan>,
    queries: Cell<usize>,
}

impl ScriptedClassifier {
    fn new(spans: Vec<(usize, usize, &str)>) -> Self {
        Self {
            spans: spans
                .into_iter()
                .map(|(start, end, tag)| ClassificationSpan::new(CharSpan::new(start, end), tag))
                .collect(),
            queries: Cell::new(0),
        }
    }

    fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl ClassificationSource for ScriptedClassifier {
    fn classification_spans(&self, span: CharSpan) -> Vec<ClassificationSpan> {
        self.queries.set(self.queries.get() + 1);
        self.spans
            .iter()
            .filter(|classification| classification.span.overlaps(&span))
            .cloned()
            .collect()
    }
}

/// A host whose view state is scripted and whose dispatch/caret calls are recorded.
struct ScriptedHost {
    selections: SelectionSet,
    caret_line: CharSpan,
    dispatched: Vec<(EditorCommand, DispatchOptions)>,
    caret_moves: Vec<bool>,
    fail_dispatch: bool,
}

impl ScriptedHost {
    fn new(selections: SelectionSet, caret_line: CharSpan) -> Self {
        Self {
            selections,
            caret_line,
            dispatched: Vec::new(),
            caret_moves: Vec::new(),
            fail_dispatch: false,
        }
    }
}

impl EditorView for ScriptedHost {
    fn selections(&self) -> SelectionSet {
        self.selections.clone()
    }

    fn caret_line_extent(&self) -> CharSpan {
        self.caret_line
    }
}

impl CommandDispatcher for ScriptedHost {
    fn dispatch(
        &mut self,
        command: EditorCommand,
        options: DispatchOptions,
    ) -> Result<DispatchOutcome, DispatchError> {
        if self.fail_dispatch {
            return Err(DispatchError::Failed {
                command,
                reason: "scripted failure".to_string(),
            });
        }
        self.dispatched.push((command, options));
        Ok(DispatchOutcome::Handled)
    }
}

impl CaretOperations for ScriptedHost {
    fn move_line_down(&mut self, extend_selection: bool) {
        self.caret_moves.push(extend_selection);
    }
}

#[test]
fn test_all_commented_when_every_tag_is_comment() {
    let host = ScriptedHost::new(
        SelectionSet::new(vec![CharSpan::new(0, 8), CharSpan::new(12, 20)]),
        CharSpan::new(0, 8),
    );
    let classifier = ScriptedClassifier::new(vec![
        (0, 8, TAG_COMMENT),
        (12, 16, "doc comment"),
        (16, 20, TAG_COMMENT),
    ]);

    assert!(ToggleComment::is_all_commented(&host, &classifier));
    assert_eq!(classifier.queries(), 2);
}

#[test]
fn test_one_non_comment_tag_forces_comment() {
    let host = ScriptedHost::new(
        SelectionSet::from(CharSpan::new(0, 12)),
        CharSpan::new(0, 12),
    );
    let classifier = ScriptedClassifier::new(vec![(0, 3, TAG_KEYWORD), (4, 12, TAG_COMMENT)]);

    assert!(!ToggleComment::is_all_commented(&host, &classifier));
    assert_eq!(
        ToggleComment::decide(&host, &classifier),
        ToggleDecision::Comment
    );
}

#[test]
fn test_comment_tag_matching_accepts_host_specific_names() {
    let host = ScriptedHost::new(SelectionSet::from(CharSpan::new(0, 6)), CharSpan::new(0, 6));
    let classifier = ScriptedClassifier::new(vec![(0, 6, "XML Doc Comment")]);

    assert!(ToggleComment::is_all_commented(&host, &classifier));
}

// Documented edge case, preserved on purpose: a range yielding zero classification spans
// contributes no failing token, so unclassified (e.g. whitespace-only) selections report
// all-commented.
#[test]
fn test_unclassified_selection_reports_all_commented() {
    let host = ScriptedHost::new(SelectionSet::from(CharSpan::new(0, 5)), CharSpan::new(0, 5));
    let classifier = ScriptedClassifier::new(vec![]);

    assert!(ToggleComment::is_all_commented(&host, &classifier));
    assert_eq!(
        ToggleComment::decide(&host, &classifier),
        ToggleDecision::Uncomment
    );
}

#[test]
fn test_scan_short_circuits_before_querying_later_spans() {
    let host = ScriptedHost::new(
        SelectionSet::new(vec![CharSpan::new(0, 5), CharSpan::new(10, 15)]),
        CharSpan::new(0, 5),
    );
    let classifier = ScriptedClassifier::new(vec![(0, 3, TAG_IDENTIFIER), (10, 15, TAG_COMMENT)]);

    assert!(!ToggleComment::is_all_commented(&host, &classifier));
    // The identifier in the first span aborts the whole scan.
    assert_eq!(classifier.queries(), 1);
}

#[test]
fn test_empty_span_checks_caret_line_extent() {
    let host = ScriptedHost::new(SelectionSet::caret(3), CharSpan::new(0, 10));
    let classifier = ScriptedClassifier::new(vec![(0, 10, TAG_COMMENT)]);

    assert!(ToggleComment::is_all_commented(&host, &classifier));
    assert_eq!(classifier.queries(), 1);
}

#[test]
fn test_caret_on_commented_line_uncomments_and_moves_caret() {
    let mut host = ScriptedHost::new(SelectionSet::caret(3), CharSpan::new(0, 10));
    let classifier = ScriptedClassifier::new(vec![(0, 10, TAG_COMMENT)]);

    let outcome = ToggleComment::new().handle(&mut host, &classifier).unwrap();

    assert_eq!(outcome.decision, ToggleDecision::Uncomment);
    assert_eq!(outcome.dispatch, DispatchOutcome::Handled);
    assert!(outcome.caret_moved);
    assert_eq!(
        host.dispatched,
        vec![(
            EditorCommand::UncommentSelection,
            DispatchOptions::default()
        )]
    );
    assert_eq!(host.caret_moves, vec![false]);
}

#[test]
fn test_mixed_selection_comments_without_moving_caret() {
    let mut host = ScriptedHost::new(
        SelectionSet::from(CharSpan::new(0, 12)),
        CharSpan::new(0, 12),
    );
    let classifier = ScriptedClassifier::new(vec![(0, 3, TAG_KEYWORD), (4, 12, TAG_COMMENT)]);

    let outcome = ToggleComment::new().handle(&mut host, &classifier).unwrap();

    assert_eq!(outcome.decision, ToggleDecision::Comment);
    assert!(!outcome.caret_moved);
    assert_eq!(
        host.dispatched,
        vec![(EditorCommand::CommentSelection, DispatchOptions::default())]
    );
    assert!(host.caret_moves.is_empty());
}

#[test]
fn test_two_span_selection_with_identifier_comments() {
    let mut host = ScriptedHost::new(
        SelectionSet::new(vec![CharSpan::new(0, 5), CharSpan::new(10, 15)]),
        CharSpan::new(0, 5),
    );
    let classifier = ScriptedClassifier::new(vec![(0, 5, TAG_COMMENT), (11, 13, TAG_IDENTIFIER)]);

    let outcome = ToggleComment::new().handle(&mut host, &classifier).unwrap();

    assert_eq!(outcome.decision, ToggleDecision::Comment);
    assert_eq!(
        host.dispatched,
        vec![(EditorCommand::CommentSelection, DispatchOptions::default())]
    );
}

#[test]
fn test_commented_content_selection_uncomments_without_moving_caret() {
    let mut host = ScriptedHost::new(SelectionSet::from(CharSpan::new(2, 7)), CharSpan::new(0, 9));
    let classifier = ScriptedClassifier::new(vec![(0, 9, TAG_COMMENT)]);

    let outcome = ToggleComment::new().handle(&mut host, &classifier).unwrap();

    assert_eq!(outcome.decision, ToggleDecision::Uncomment);
    // cursorOnly is false because the span has content, even though it is a single span.
    assert!(!outcome.caret_moved);
    assert!(host.caret_moves.is_empty());
}

#[test]
fn test_dispatch_failure_propagates_and_caret_stays() {
    let mut host = ScriptedHost::new(SelectionSet::caret(3), CharSpan::new(0, 10));
    host.fail_dispatch = true;
    let classifier = ScriptedClassifier::new(vec![(0, 10, TAG_COMMENT)]);

    let result = ToggleComment::new().handle(&mut host, &classifier);

    assert!(matches!(
        result,
        Err(DispatchError::Failed {
            command: EditorCommand::UncommentSelection,
            ..
        })
    ));
    assert!(host.caret_moves.is_empty());
}

#[test]
fn test_configured_options_are_forwarded() {
    let mut host = ScriptedHost::new(
        SelectionSet::from(CharSpan::new(0, 4)),
        CharSpan::new(0, 4),
    );
    let classifier = ScriptedClassifier::new(vec![(0, 4, TAG_KEYWORD)]);
    let options = DispatchOptions { allow_ui: true };

    ToggleComment::with_options(options)
        .handle(&mut host, &classifier)
        .unwrap();

    assert_eq!(
        host.dispatched,
        vec![(EditorCommand::CommentSelection, options)]
    );
}
