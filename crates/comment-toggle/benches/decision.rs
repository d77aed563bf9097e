use comment_toggle::{
    CharSpan, ClassificationSource, ClassificationSpan, EditorView, SelectionSet, TAG_COMMENT,
    ToggleComment,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct FixtureView {
    selections: SelectionSet,
}

impl EditorView for FixtureView {
    fn selections(&self) -> SelectionSet {
        self.selections.clone()
    }

    fn caret_line_extent(&self) -> CharSpan {
        CharSpan::new(0, 120)
    }
}

/// Chops every queried span into fixed-width comment tokens.
struct DenseCommentClassifier {
    token_width: usize,
}

impl ClassificationSource for DenseCommentClassifier {
    fn classification_spans(&self, span: CharSpan) -> Vec<ClassificationSpan> {
        let mut spans = Vec::new();
        let mut start = span.start;
        while start < span.end {
            let end = (start + self.token_width).min(span.end);
            spans.push(ClassificationSpan::new(CharSpan::new(start, end), TAG_COMMENT));
            start = end;
        }
        spans
    }
}

fn random_spans(count: usize) -> Vec<CharSpan> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut spans = Vec::with_capacity(count);
    let mut offset = 0usize;
    for _ in 0..count {
        offset += rng.gen_range(1..24);
        let len = rng.gen_range(0..48);
        spans.push(CharSpan::new(offset, offset + len));
        offset += len;
    }
    spans
}

fn bench_selection_normalize(c: &mut Criterion) {
    let spans = random_spans(2_000);
    c.bench_function("selection_normalize/2k_spans", |b| {
        b.iter(|| {
            let set = SelectionSet::new(black_box(spans.clone()));
            black_box(set.len());
        })
    });
}

fn bench_all_commented_scan(c: &mut Criterion) {
    let view = FixtureView {
        selections: SelectionSet::new(random_spans(2_000)),
    };
    let classifier = DenseCommentClassifier { token_width: 6 };

    c.bench_function("all_commented_scan/2k_spans", |b| {
        b.iter(|| black_box(ToggleComment::is_all_commented(&view, &classifier)))
    });
}

criterion_group!(benches, bench_selection_normalize, bench_all_commented_scan);
criterion_main!(benches);
