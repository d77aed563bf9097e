use comment_toggle::{ToggleComment, ToggleDecision};
use comment_toggle_classify_simple::{RegexClassifier, SnapshotClassifier};
use comment_toggle_host_memory::MemoryHost;

fn main() {
    let mut host = MemoryHost::new("// a commented line\nlet x = 1;\n", "//").unwrap();
    host.place_caret(3).unwrap();

    // Classify against a snapshot of the buffer, then toggle the caret's line.
    let rules = RegexClassifier::rust_default().unwrap();
    let snapshot = host.text();
    let classifier = SnapshotClassifier::new(&snapshot, &rules);

    let outcome = ToggleComment::new().handle(&mut host, &classifier).unwrap();

    assert_eq!(outcome.decision, ToggleDecision::Uncomment);
    assert_eq!(host.text(), "a commented line\nlet x = 1;\n");
    assert!(outcome.caret_moved);

    println!("decision: {:?}", outcome.decision);
    println!("buffer:\n{}", host.text());
}
