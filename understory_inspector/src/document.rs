// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host document the inspector runs against.
//!
//! ## Overview
//!
//! The inspector never lays out, paints, or hit-tests anything itself.
//! Layout geometry, selector matching, event delivery, and element styling all
//! belong to the host, which exposes them through [`Document`].
//! [`MemoryDocument`](crate::adapters::memory::MemoryDocument) is an in-memory
//! implementation suitable for tests and headless use.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use crate::class_list::ClassList;
use crate::geometry::OutlineBox;
use crate::types::{EventKinds, Scroll};

/// Capabilities the inspector consumes from its host.
pub trait Document {
    /// Element handle. Equality must be identity: two handles are equal only
    /// when they refer to the same element.
    type Element: Clone + PartialEq + Debug;

    /// First element matching `selector`, if any.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, which may be a comma separated list.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Bounding rectangle of `element` relative to the viewport.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Current scroll offsets.
    fn scroll(&self) -> Scroll;

    /// Start delivering the given notifications to the inspector.
    fn subscribe(&mut self, kinds: EventKinds);

    /// Stop delivering the given notifications.
    fn unsubscribe(&mut self, kinds: EventKinds);

    /// Class set of the document root element.
    fn root_classes_mut(&mut self) -> &mut ClassList;

    /// Create an element carrying `class` and attach it to the document body.
    fn create_element(&mut self, class: &str) -> Self::Element;

    /// Detach `element` from the document.
    fn remove_element(&mut self, element: &Self::Element);

    /// Apply an outline box to `element`, or clear its top/left/width/height when `None`.
    fn set_outline(&mut self, element: &Self::Element, outline: Option<OutlineBox>);

    /// Install (`true`) or remove (`false`) a page-unload interception that vetoes navigation.
    fn set_unload_guard(&mut self, block: bool);
}
