//! Benchmarks for complete controller ticks.

use std::hint::black_box;
use std::time::Duration;

use criterion::Criterion;
use handsynth::engine::{command_queue, MidiEngine, MidiEvent, MidiSink, RecordingEngine};
use handsynth::{ControlConfig, Controller, EngineError};

use super::full_hand;

/// 30 fps frame interval
const FRAME: Duration = Duration::from_nanos(33_333_333);

/// Sink that drops every event
struct Discard;

impl MidiSink for Discard {
    fn send(&mut self, event: MidiEvent) -> Result<(), EngineError> {
        let _ = black_box(event);
        Ok(())
    }
}

pub fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("control/tick");
    let left = full_hand(200);
    let right = full_hand(500);

    // === RECORDER: pure control cost ===
    let mut controller = Controller::new(ControlConfig::default()).unwrap();
    let mut engine = RecordingEngine::new();
    let mut now = Duration::ZERO;
    group.bench_function("recording", |b| {
        b.iter(|| {
            now += FRAME;
            let report = controller.tick(
                black_box(left.clone()),
                black_box(right.clone()),
                now,
                &mut engine,
            );
            engine.drain();
            report
        })
    });

    // === QUEUE: hand-off to another thread ===
    let mut controller = Controller::new(ControlConfig::default()).unwrap();
    let (mut tx, mut rx) = command_queue(256);
    let mut now = Duration::ZERO;
    group.bench_function("queue", |b| {
        b.iter(|| {
            now += FRAME;
            let report = controller.tick(
                black_box(left.clone()),
                black_box(right.clone()),
                now,
                &mut tx,
            );
            while rx.pop().is_ok() {}
            report
        })
    });

    // === MIDI: note and CC translation ===
    let mut controller = Controller::new(ControlConfig::default()).unwrap();
    let mut engine = MidiEngine::new(Discard);
    let mut now = Duration::ZERO;
    group.bench_function("midi", |b| {
        b.iter(|| {
            now += FRAME;
            controller.tick(black_box(left.clone()), black_box(right.clone()), now, &mut engine)
        })
    });

    group.finish();
}
