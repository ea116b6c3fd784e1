// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press timeline.
//!
//! Replay a scripted sequence of mouse and touch input against two elements
//! on the headless host and print what the detector decides.
//!
//! Run:
//! - `RUST_LOG=longpress=debug cargo run -p longpress_demos --example press_timeline`

use longpress::{Binding, HeadlessHost, InputEvent, LogTrace, LongPress, PointerButton};
use longpress_demos::{Step, describe};

fn main() {
    env_logger::init();

    let mut lp = LongPress::with_trace(HeadlessHost::new(), LogTrace);
    lp.attach("save", Binding::new(|| println!("  -> save: long press")))
        .unwrap();
    lp.attach(
        "delete",
        Binding::new(|| println!("  -> delete: long press")).with_arg("1200"),
    )
    .unwrap();

    let script = [
        // Short click on save.
        Step::new(0, "save", InputEvent::mouse_down(PointerButton::Primary)),
        Step::new(120, "save", InputEvent::mouse_up()),
        Step::new(120, "save", InputEvent::click()),
        // Long touch on save.
        Step::new(1_000, "save", InputEvent::touch_start()),
        Step::new(1_700, "save", InputEvent::touch_end()),
        Step::new(1_700, "save", InputEvent::click()),
        // Right-button hold on delete never counts.
        Step::new(2_000, "delete", InputEvent::mouse_down(PointerButton::Secondary)),
        Step::new(4_000, "delete", InputEvent::mouse_up()),
        // Held too briefly for delete's longer threshold.
        Step::new(5_000, "delete", InputEvent::mouse_down(PointerButton::Primary)),
        Step::new(5_800, "delete", InputEvent::mouse_leave()),
        // Held long enough.
        Step::new(6_000, "delete", InputEvent::touch_start()),
        Step::new(7_500, "delete", InputEvent::touch_end()),
        Step::new(7_500, "delete", InputEvent::click()),
    ];

    for step in script {
        let confirmed = lp.advance_to(step.at);
        if confirmed > 0 {
            println!("t={:>5}ms  {confirmed} long press(es) confirmed", step.at);
        }
        let disposition = lp.handle_event(&step.element, &step.event);
        println!(
            "t={:>5}ms  {:<6} {:<12} {}",
            step.at,
            step.element,
            step.event.kind.name(),
            describe(disposition)
        );
    }

    lp.detach(&"save").unwrap();
    lp.detach(&"delete").unwrap();
    if let Err(err) = lp.detach(&"save") {
        println!("second detach: {err}");
    }
}
