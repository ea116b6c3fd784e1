// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use longpress::{Binding, HeadlessHost, InputEvent, LongPress, PointerButton};

fn attached(len: u32) -> LongPress<HeadlessHost<u32>> {
    let mut lp = LongPress::new(HeadlessHost::new());
    for el in 0..len {
        lp.attach(el, Binding::new(|| {})).unwrap();
    }
    lp
}

fn bench_attach_detach(c: &mut Criterion) {
    let mut group = c.benchmark_group("longpress/attach_detach");

    for len in [16_u32, 256, 4_096] {
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || LongPress::new(HeadlessHost::<u32>::new()),
                |mut lp| {
                    for el in 0..len {
                        lp.attach(el, Binding::new(|| {})).unwrap();
                    }
                    for el in 0..len {
                        lp.detach(&el).unwrap();
                    }
                    black_box(lp);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_short_press(c: &mut Criterion) {
    let mut group = c.benchmark_group("longpress/short_press");

    // Hypothesis: a press/release/click cycle costs the same regardless of how
    // many other elements are attached.
    for len in [1_u32, 256, 4_096] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut lp = attached(len);
            let target = len / 2;
            b.iter(|| {
                lp.handle_event(&target, &InputEvent::mouse_down(PointerButton::Primary));
                lp.handle_event(&target, &InputEvent::mouse_up());
                black_box(lp.handle_event(&target, &InputEvent::click()))
            });
        });
    }

    group.finish();
}

fn bench_long_press(c: &mut Criterion) {
    let mut group = c.benchmark_group("longpress/long_press");

    for len in [1_u32, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut lp = attached(len);
            let mut now = 0;
            b.iter(|| {
                for el in 0..len {
                    lp.handle_event(&el, &InputEvent::touch_start());
                }
                now += 1_000;
                black_box(lp.advance_to(now));
                for el in 0..len {
                    lp.handle_event(&el, &InputEvent::touch_end());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_attach_detach, bench_short_press, bench_long_press);
criterion_main!(benches);
