//! Typewriter benchmark: engine stepping and line rendering.
//!
//! Target: a full type/delete cycle well under a millisecond, and a line
//! render cheap enough to redo on every caret blink.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use typewriter::layout::Rect;
use typewriter::widget::{TypewriterLine, TypewriterLineConfig, Widget};
use typewriter::{Frame, OutputBuffer, Typewriter, TypewriterConfig};

const WORDS: [&str; 3] = ["Tech Enthusiast", "Hobbyist", "Software Developer"];

fn engine_step_by_millisecond(c: &mut Criterion) {
    c.bench_function("engine_step_1ms_x5000", |b| {
        b.iter(|| {
            let mut typewriter = Typewriter::new(TypewriterConfig::new(WORDS));
            for _ in 0..5000 {
                typewriter.advance(black_box(Duration::from_millis(1)));
            }
            typewriter.frame()
        });
    });
}

fn engine_jump_to_deadline(c: &mut Criterion) {
    c.bench_function("engine_jump_to_done", |b| {
        b.iter(|| {
            let config = TypewriterConfig::new(WORDS).with_loop(false);
            let mut typewriter = Typewriter::new(config);
            while !typewriter.is_done() {
                match typewriter.time_until_next() {
                    Some(wait) => typewriter.advance(wait),
                    None => break,
                };
            }
            black_box(typewriter.elapsed())
        });
    });
}

fn engine_late_catch_up(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_catch_up");

    for seconds in [1u64, 10, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(seconds), &seconds, |b, &s| {
            b.iter(|| {
                let mut typewriter = Typewriter::new(TypewriterConfig::new(WORDS));
                typewriter.advance(black_box(Duration::from_secs(s)))
            });
        });
    }

    group.finish();
}

fn line_render(c: &mut Criterion) {
    let config = TypewriterLineConfig {
        prefix: "I'm a ".to_owned(),
        ..TypewriterLineConfig::default()
    };
    let mut line = TypewriterLine::with_config(Rect::new(0, 0, 80, 1), config);
    line.update(Frame {
        text: "Software Dev".to_owned(),
        caret_visible: true,
        done: false,
    });
    let mut out = OutputBuffer::new();

    c.bench_function("line_render_80", |b| {
        b.iter(|| {
            out.clear();
            line.render(black_box(&mut out));
            out.len()
        });
    });
}

criterion_group!(
    benches,
    engine_step_by_millisecond,
    engine_jump_to_deadline,
    engine_late_catch_up,
    line_render,
);
criterion_main!(benches);
