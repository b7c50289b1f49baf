// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observe every hook around a start/stop cycle, using keyed registration.
//!
//! Run:
//! - `cargo run -p understory_demos --example inspector_hooks`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use understory_inspector::adapters::memory::{ElementSpec, MemoryDocument, Node};
use understory_inspector::engine::Inspector;
use understory_inspector::hooks::Handler;
use understory_inspector::options::{OptionValue, OptionsPatch};
use understory_inspector::types::InspectEvent;

fn main() {
    let mut doc = MemoryDocument::new();
    let overlay = doc.insert(ElementSpec::new("div").id("overlay"));
    let button = doc.insert(
        ElementSpec::new("button")
            .bounds(Rect::from_origin_size((10.0, 10.0), (80.0, 24.0))),
    );

    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let mut inspector: Inspector<MemoryDocument> = Inspector::new();
    for name in ["starting", "started", "stopping", "stopped"] {
        let l = log.clone();
        inspector
            .on(name, Handler::lifecycle(move || l.borrow_mut().push(name.into())))
            .expect("lifecycle hook");
    }
    let l = log.clone();
    inspector
        .on(
            "hook",
            Handler::raw(move |e: &InspectEvent<Node>| {
                l.borrow_mut().push(format!("hook({})", e.kind.name()));
            }),
        )
        .expect("raw hook");
    let l = log.clone();
    inspector
        .on(
            "click",
            Handler::target(move |t: &Node, _| {
                l.borrow_mut().push(format!("click({t:?})"));
            }),
        )
        .expect("click hook");

    let patch = OptionsPatch::from_pairs([
        ("inspector", OptionValue::Selector("#overlay".into())),
        ("blockRedirection", OptionValue::Bool(true)),
    ])
    .expect("valid options");
    inspector.start(&mut doc, Some(patch)).expect("inspector starts");
    assert!(doc.unload_blocked());

    inspector.handle_event(&mut doc, &InspectEvent::mouse_over(overlay));
    inspector.handle_event(&mut doc, &InspectEvent::click(button));
    inspector.stop(&mut doc, false);

    println!("== Hook sequence ==");
    for entry in log.borrow().iter() {
        println!("  {entry}");
    }
    assert_eq!(log.borrow().len(), 7);
    assert!(!doc.unload_blocked());
}
