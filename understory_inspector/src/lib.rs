// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Inspector: a `no_std` element-outlining overlay in the style of developer-tool highlighting.
//!
//! ## Overview
//!
//! As the pointer moves over a document, a designated *inspector* element is
//! moved and resized to frame the element under the pointer. This crate holds
//! the small amount of logic behind that:
//!
//! - the [`Inspector`](crate::engine::Inspector) session and its `idle → running → stopped` state machine,
//! - the [geometry](crate::geometry) mapping a target's viewport bounds and the scroll offset to document coordinates,
//! - the [hook](crate::hooks) mechanism that lets callers observe lifecycle transitions and inspected events.
//!
//! It does not perform hit testing or layout.
//! The host supplies event targets, bounding rectangles, selector matching, and
//! styling through the [`Document`](crate::document::Document) trait.
//! [`MemoryDocument`](crate::adapters::memory::MemoryDocument) implements it in memory.
//!
//! ## Workflow
//!
//! 1) Configure a session with an [`OptionsPatch`](crate::options::OptionsPatch):
//!    an inspector selector or handle, or `create_inspector` to have one made.
//! 2) Register hooks (`starting`, `started`, `stopping`, `stopped`, `hook`, `mouseover`, `click`).
//! 3) [`start`](crate::engine::Inspector::start) the session against a document.
//! 4) Feed click and pointer-move notifications to
//!    [`handle_event`](crate::engine::Inspector::handle_event).
//! 5) [`stop`](crate::engine::Inspector::stop) the session; an auto-created inspector is removed.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_inspector::adapters::memory::{ElementSpec, MemoryDocument};
//! use understory_inspector::engine::Inspector;
//! use understory_inspector::options::OptionsPatch;
//! use understory_inspector::types::{InspectEvent, Status};
//!
//! let mut doc = MemoryDocument::new();
//! let heading = doc.insert(
//!     ElementSpec::new("h1").bounds(Rect::from_origin_size((5.0, -10.0), (100.0, 50.0))),
//! );
//!
//! let mut inspector: Inspector<MemoryDocument> = Inspector::new();
//! inspector
//!     .start(&mut doc, Some(OptionsPatch::new().create_inspector(true)))
//!     .unwrap();
//! assert_eq!(inspector.status(), Status::Running);
//!
//! inspector.handle_event(&mut doc, &InspectEvent::mouse_over(heading));
//! let outline = doc.outline(*inspector.inspector_element().unwrap()).unwrap();
//! assert_eq!(outline.to_string(), "top: 0px; left: 5px; width: 100px; height: 50px");
//!
//! inspector.stop(&mut doc, false);
//! assert_eq!(inspector.status(), Status::Stopped);
//! assert_eq!(doc.created().count(), 0);
//! ```
//!
//! ## Sessions
//!
//! Each [`Inspector`](crate::engine::Inspector) owns its options, hooks, and status.
//! Starting a session that is already running is rejected with
//! [`Error::AlreadyRunning`](crate::error::Error::AlreadyRunning) rather than subscribing twice.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod class_list;
pub mod document;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hooks;
pub mod options;
pub mod resolver;
pub mod types;

pub use error::Error;
