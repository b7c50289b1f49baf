// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline elements as the pointer moves across a small in-memory page.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example inspector_outline`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Vec2};
use understory_inspector::adapters::memory::{ElementSpec, MemoryDocument};
use understory_inspector::engine::Inspector;
use understory_inspector::hooks::Lifecycle;
use understory_inspector::options::OptionsPatch;
use understory_inspector::types::{EventKind, InspectEvent};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut doc = MemoryDocument::new();
    let header = doc.insert(
        ElementSpec::new("header")
            .class("banner")
            .bounds(Rect::from_origin_size((0.0, 0.0), (800.0, 60.0))),
    );
    let card = doc.insert(
        ElementSpec::new("div")
            .class("card")
            .bounds(Rect::from_origin_size((40.0, 120.0), (300.0, 180.0))),
    );

    let framed = Rc::new(RefCell::new(Vec::new()));
    let mut inspector: Inspector<MemoryDocument> = Inspector::new();
    inspector.on_lifecycle(Lifecycle::Started, || println!("== inspection started =="));
    inspector.on_lifecycle(Lifecycle::Stopped, || println!("== inspection stopped =="));
    let f = framed.clone();
    inspector.on_event(EventKind::MouseOver, move |target, _| f.borrow_mut().push(*target));

    inspector
        .start(
            &mut doc,
            Some(
                OptionsPatch::new()
                    .create_inspector(true)
                    .excludes([".banner"]),
            ),
        )
        .expect("inspector starts");
    let overlay = *inspector.inspector_element().expect("inspector resolved");
    println!("root classes: {}", doc.root_classes());

    // The banner is excluded and never framed.
    inspector.handle_event(&mut doc, &InspectEvent::mouse_over(header));
    assert_eq!(doc.outline(overlay), None);

    inspector.handle_event(&mut doc, &InspectEvent::mouse_over(card));
    println!("card outline:     {}", doc.outline(overlay).expect("outlined"));

    doc.set_window_scroll(Some(Vec2::new(0.0, 100.0)));
    inspector.handle_event(&mut doc, &InspectEvent::mouse_over(card));
    let scrolled = doc.outline(overlay).expect("outlined");
    println!("after scrolling:  {scrolled}");
    assert_eq!(scrolled.top, 220.0);

    inspector.stop(&mut doc, true);
    assert!(!doc.is_attached(overlay));
    assert_eq!(*framed.borrow(), vec![card, card]);
}
