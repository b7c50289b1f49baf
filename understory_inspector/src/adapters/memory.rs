// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Document`] for tests, demos, and headless hosts.
//!
//! ## Notes
//!
//! Elements are flat: there is no parent/child structure beyond "attached to
//! the body". Bounds are set by the caller; nothing is laid out.
//!
//! Selector support is deliberately small: `*`, `tag`, `#id`, `.class`, and
//! compounds of those (`div.note#intro`), in comma separated lists. Anything
//! else matches nothing.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::class_list::ClassList;
use crate::document::Document;
use crate::geometry::OutlineBox;
use crate::types::{EventKinds, Scroll};

/// Handle of an element in a [`MemoryDocument`].
///
/// A slot index and a generation counter; a handle to a removed element never
/// aliases a later element that reuses the slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Node(u32, u32);

impl Node {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Description of an element to insert.
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    classes: ClassList,
    bounds: Rect,
}

impl ElementSpec {
    /// An element with the given tag name.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Set the `id` attribute.
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add a class.
    pub fn class(mut self, class: &str) -> Self {
        self.classes.add(class);
        self
    }

    /// Set the viewport-relative bounding rectangle.
    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }
}

#[derive(Clone, Debug)]
struct Element {
    spec: ElementSpec,
    created: bool,
    outline: Option<OutlineBox>,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// In-memory document state.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root_classes: ClassList,
    window_scroll: Option<Vec2>,
    root_scroll: Vec2,
    subscribed: EventKinds,
    unload_blocked: bool,
}

impl MemoryDocument {
    /// An empty document with a window at scroll offset zero.
    pub fn new() -> Self {
        Self {
            window_scroll: Some(Vec2::ZERO),
            ..Default::default()
        }
    }

    /// Attach a new element to the body.
    pub fn insert(&mut self, spec: ElementSpec) -> Node {
        self.insert_element(Element {
            spec,
            created: false,
            outline: None,
        })
    }

    fn insert_element(&mut self, element: Element) -> Node {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.element = Some(element);
            Node(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 1,
                element: Some(element),
            });
            Node(idx, 1)
        }
    }

    fn get(&self, node: Node) -> Option<&Element> {
        let slot = self.slots.get(node.idx())?;
        if slot.generation != node.1 {
            return None;
        }
        slot.element.as_ref()
    }

    fn get_mut(&mut self, node: Node) -> Option<&mut Element> {
        let slot = self.slots.get_mut(node.idx())?;
        if slot.generation != node.1 {
            return None;
        }
        slot.element.as_mut()
    }

    fn live(&self) -> impl Iterator<Item = (Node, &Element)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            let e = s.element.as_ref()?;
            Some((Node(u32::try_from(i).ok()?, s.generation), e))
        })
    }

    /// Whether `node` is still attached.
    pub fn is_attached(&self, node: Node) -> bool {
        self.get(node).is_some()
    }

    /// Whether `node` carries `class`.
    pub fn has_class(&self, node: Node, class: &str) -> bool {
        self.get(node).is_some_and(|e| e.spec.classes.contains(class))
    }

    /// Move `node` within the viewport.
    pub fn set_bounds(&mut self, node: Node, bounds: Rect) {
        if let Some(e) = self.get_mut(node) {
            e.spec.bounds = bounds;
        }
    }

    /// Set the window scroll offset, or `None` for a host without a window.
    pub fn set_window_scroll(&mut self, offset: Option<Vec2>) {
        self.window_scroll = offset;
    }

    /// Set the document root scroll offset.
    pub fn set_root_scroll(&mut self, offset: Vec2) {
        self.root_scroll = offset;
    }

    /// Class set of the root element.
    pub fn root_classes(&self) -> &ClassList {
        &self.root_classes
    }

    /// Currently subscribed notifications.
    pub fn subscribed(&self) -> EventKinds {
        self.subscribed
    }

    /// Whether navigation is currently vetoed.
    pub fn unload_blocked(&self) -> bool {
        self.unload_blocked
    }

    /// Outline box currently applied to `node`.
    pub fn outline(&self, node: Node) -> Option<OutlineBox> {
        self.get(node).and_then(|e| e.outline)
    }

    /// Attached elements that were created through [`Document::create_element`].
    pub fn created(&self) -> impl Iterator<Item = Node> + '_ {
        self.live().filter(|(_, e)| e.created).map(|(n, _)| n)
    }
}

fn matches_compound(spec: &ElementSpec, compound: &str) -> bool {
    if compound == "*" {
        return true;
    }
    let mut rest = compound;
    let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
    let (tag, tail) = rest.split_at(tag_end);
    if !tag.is_empty() && !tag.eq_ignore_ascii_case(&spec.tag) {
        return false;
    }
    rest = tail;
    if rest.is_empty() && tag.is_empty() {
        return false;
    }
    while let Some(sigil) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let (name, tail) = body.split_at(end);
        if name.is_empty() {
            return false;
        }
        let ok = match sigil {
            '#' => spec.id.as_deref() == Some(name),
            _ => spec.classes.contains(name),
        };
        if !ok {
            return false;
        }
        rest = tail;
    }
    true
}

fn matches(spec: &ElementSpec, selector: &str) -> bool {
    selector
        .split(',')
        .map(str::trim)
        .any(|c| !c.is_empty() && !c.contains(char::is_whitespace) && matches_compound(spec, c))
}

impl Document for MemoryDocument {
    type Element = Node;

    fn query_selector(&self, selector: &str) -> Option<Node> {
        self.live()
            .find(|(_, e)| matches(&e.spec, selector))
            .map(|(n, _)| n)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Node> {
        self.live()
            .filter(|(_, e)| matches(&e.spec, selector))
            .map(|(n, _)| n)
            .collect()
    }

    fn bounding_rect(&self, element: &Node) -> Rect {
        self.get(*element).map_or(Rect::ZERO, |e| e.spec.bounds)
    }

    fn scroll(&self) -> Scroll {
        Scroll {
            window: self.window_scroll,
            root: self.root_scroll,
        }
    }

    fn subscribe(&mut self, kinds: EventKinds) {
        self.subscribed |= kinds;
    }

    fn unsubscribe(&mut self, kinds: EventKinds) {
        self.subscribed -= kinds;
    }

    fn root_classes_mut(&mut self) -> &mut ClassList {
        &mut self.root_classes
    }

    fn create_element(&mut self, class: &str) -> Node {
        self.insert_element(Element {
            spec: ElementSpec::new("div").class(class),
            created: true,
            outline: None,
        })
    }

    fn remove_element(&mut self, element: &Node) {
        if let Some(slot) = self.slots.get_mut(element.idx())
            && slot.generation == element.1
            && slot.element.take().is_some()
        {
            self.free.push(element.0);
        }
    }

    fn set_outline(&mut self, element: &Node, outline: Option<OutlineBox>) {
        if let Some(e) = self.get_mut(*element) {
            e.outline = outline;
        }
    }

    fn set_unload_guard(&mut self, block: bool) {
        self.unload_blocked = block;
    }
}
