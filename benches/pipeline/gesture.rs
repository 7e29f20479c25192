//! Benchmarks for gesture extraction.

use std::hint::black_box;

use criterion::Criterion;
use handsynth::gesture::{self, SpanRange};
use handsynth::HandFrame;

use super::full_hand;

pub fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/extract");
    let span = SpanRange::default();

    let hand = full_hand(200);
    group.bench_function("full_hand", |b| {
        b.iter(|| gesture::extract_with(black_box(&hand), black_box(&span)))
    });

    // Span is the only quadratic metric
    group.bench_function("hand_span", |b| {
        b.iter(|| gesture::hand_span(black_box(&hand), black_box(&span)))
    });

    let empty = HandFrame::empty();
    group.bench_function("empty_hand", |b| {
        b.iter(|| gesture::extract_with(black_box(&empty), black_box(&span)))
    });

    group.finish();
}
