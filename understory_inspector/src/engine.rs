// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspection engine: the start/stop state machine and the shared event handler.
//!
//! ## Overview
//!
//! An [`Inspector`] is a caller-owned session. It holds the [options](crate::options),
//! a [dispatcher](crate::hooks::Dispatcher), the session [`Status`], and the
//! inspector element resolved for the current run. The host [`Document`] is
//! passed to each operation rather than stored, so the caller keeps ownership
//! of it.
//!
//! Run at most one session per document at a time. The subscription, the
//! namespace class, and the unload guard carry no session identity, so
//! stopping one session releases them for every session on that document.
//! Sessions on separate documents are fully independent.
//!
//! ## Lifecycle
//!
//! `idle --start--> running --stop--> stopped --start--> running ...`
//!
//! - [`Inspector::start`] on a running session fails with
//!   [`Error::AlreadyRunning`]; stop first to restart.
//! - [`Inspector::stop`] is legal in any state and always lands in `stopped`.
//! - `stop` undoes the effects `start` applied, even if options changed in between.
//!
//! ## Event path
//!
//! The host calls [`Inspector::handle_event`] for each click or pointer-move.
//! While running, every event first reaches the `hook` tap. Events without a
//! target, on the inspector element itself, or on an excluded element stop
//! there. A pointer-move then repositions the inspector, and finally the
//! type-named hook runs with the target.

use tracing::{debug, trace};

use crate::document::Document;
use crate::error::Error;
use crate::geometry::outline_box;
use crate::hooks::{Dispatcher, Handler, Hooks, Lifecycle, Signal};
use crate::options::{InspectorRef, NAMESPACE_CLASS, Options, OptionsPatch};
use crate::resolver::{Resolved, resolve};
use crate::types::{EventKind, EventKinds, InspectEvent, Status};

/// Effects `start` applied that `stop` must undo.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Applied {
    subscribed: EventKinds,
    html_class: bool,
    unload_guard: bool,
}

/// An element-outlining inspection session.
pub struct Inspector<D: Document, H: Dispatcher<D::Element> = Hooks<<D as Document>::Element>> {
    options: Options<D::Element>,
    dispatcher: H,
    status: Status,
    resolved: Option<Resolved<D::Element>>,
    applied: Applied,
}

impl<D: Document, H: Dispatcher<D::Element>> core::fmt::Debug for Inspector<D, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Inspector")
            .field("status", &self.status)
            .field("options", &self.options)
            .field("resolved", &self.resolved)
            .finish_non_exhaustive()
    }
}

impl<D: Document> Inspector<D> {
    /// A session with default options and an empty hook registry.
    pub fn new() -> Self {
        Self::with_dispatcher(Hooks::new())
    }

    /// The hook registry.
    pub fn hooks_mut(&mut self) -> &mut Hooks<D::Element> {
        &mut self.dispatcher
    }

    /// Register `handler` under a string hook name.
    ///
    /// See [`Hooks::on`].
    pub fn on(&mut self, name: &str, handler: Handler<D::Element>) -> Result<(), Error> {
        self.dispatcher.on(name, handler)
    }

    /// Register a lifecycle hook.
    pub fn on_lifecycle(&mut self, at: Lifecycle, f: impl FnMut() + 'static) {
        self.dispatcher.on_lifecycle(at, f);
    }

    /// Register the hook for inspected events of `kind`.
    pub fn on_event(
        &mut self,
        kind: EventKind,
        f: impl FnMut(&D::Element, &InspectEvent<D::Element>) + 'static,
    ) {
        self.dispatcher.on_event(kind, f);
    }

    /// Register the raw-event tap.
    pub fn on_raw(&mut self, f: impl FnMut(&InspectEvent<D::Element>) + 'static) {
        self.dispatcher.on_raw(f);
    }
}

impl<D: Document> Default for Inspector<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document, H: Dispatcher<D::Element>> Inspector<D, H> {
    /// A session with default options reporting to `dispatcher`.
    pub fn with_dispatcher(dispatcher: H) -> Self {
        Self {
            options: Options::default(),
            dispatcher,
            status: Status::Idle,
            resolved: None,
            applied: Applied::default(),
        }
    }

    /// Replace all options.
    pub fn with_options(mut self, options: Options<D::Element>) -> Self {
        self.options = options;
        self
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Current options.
    pub fn options(&self) -> &Options<D::Element> {
        &self.options
    }

    /// The dispatcher.
    pub fn dispatcher(&self) -> &H {
        &self.dispatcher
    }

    /// Shallow-merge `patch` into the options.
    ///
    /// Takes effect immediately for exclusions. The inspector element and
    /// listeners of a running session are left as they are until the next start.
    pub fn configure(&mut self, patch: OptionsPatch<D::Element>) {
        self.options.merge(patch);
    }

    /// The inspector element of the current or last run, if still held.
    pub fn inspector_element(&self) -> Option<&D::Element> {
        self.resolved.as_ref().map(|r| &r.element)
    }

    /// Start inspecting.
    ///
    /// Merges `patch` if given, resolves the inspector, emits `starting`,
    /// installs the unload guard if `block_redirection`, subscribes to click and
    /// pointer-move, adds the namespace class if `html_class`, sets the status
    /// to running and emits `started`.
    ///
    /// Fails without changing status if already running or if the inspector
    /// cannot be resolved.
    pub fn start(
        &mut self,
        doc: &mut D,
        patch: Option<OptionsPatch<D::Element>>,
    ) -> Result<(), Error> {
        if self.status == Status::Running {
            return Err(Error::AlreadyRunning);
        }
        if let Some(patch) = patch {
            self.configure(patch);
        }
        let resolved = resolve(&mut self.options, doc)?;
        debug!(inspector = ?resolved.element, owned = resolved.owned, "starting inspection");
        self.resolved = Some(resolved);

        self.dispatcher.emit(Signal::Starting);

        let mut applied = Applied::default();
        if self.options.block_redirection {
            doc.set_unload_guard(true);
            applied.unload_guard = true;
        }
        doc.subscribe(EventKinds::INSPECTED);
        applied.subscribed = EventKinds::INSPECTED;
        if self.options.html_class {
            applied.html_class = doc.root_classes_mut().add(NAMESPACE_CLASS);
        }
        self.applied = applied;
        self.status = Status::Running;

        self.dispatcher.emit(Signal::Started);
        Ok(())
    }

    /// Stop inspecting.
    ///
    /// Emits `stopping`, unsubscribes, removes the namespace class and unload
    /// guard if `start` applied them, and sets the status to stopped. With
    /// `reset_inspector` the inspector's position and size are cleared. An
    /// auto-created inspector is removed from the document and the stored handle
    /// cleared. Finally emits `stopped`.
    pub fn stop(&mut self, doc: &mut D, reset_inspector: bool) {
        self.dispatcher.emit(Signal::Stopping);

        let applied = core::mem::take(&mut self.applied);
        if !applied.subscribed.is_empty() {
            doc.unsubscribe(applied.subscribed);
        }
        if applied.html_class {
            doc.root_classes_mut().remove(NAMESPACE_CLASS);
        }
        if applied.unload_guard {
            doc.set_unload_guard(false);
        }
        self.status = Status::Stopped;

        if let Some(r) = self.resolved.take() {
            if reset_inspector {
                doc.set_outline(&r.element, None);
            }
            if r.owned {
                doc.remove_element(&r.element);
                self.options.inspector = InspectorRef::None;
            } else {
                self.resolved = Some(r);
            }
        }
        debug!("stopped inspection");

        self.dispatcher.emit(Signal::Stopped);
    }

    /// Handle one click or pointer-move notification from the host.
    ///
    /// Ignored unless the session is subscribed to `event.kind`.
    pub fn handle_event(&mut self, doc: &mut D, event: &InspectEvent<D::Element>) {
        if !self.applied.subscribed.has(event.kind) {
            return;
        }
        self.dispatcher.emit(Signal::Raw(event));

        let Some(target) = event.target.as_ref() else {
            return;
        };
        let Some(inspector) = self.resolved.as_ref().map(|r| &r.element) else {
            return;
        };
        if target == inspector {
            return;
        }
        if let Some(selector) = self.options.exclusion_selector()
            && doc.query_selector_all(&selector).contains(target)
        {
            trace!(target = ?target, "skipping excluded element");
            return;
        }

        if event.kind == EventKind::MouseOver {
            let outline = outline_box(doc.bounding_rect(target), doc.scroll().offset());
            trace!(target = ?target, %outline, "outlining");
            doc.set_outline(inspector, Some(outline));
        }

        self.dispatcher.emit(Signal::Target { target, event });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{ElementSpec, MemoryDocument, Node};
    use crate::geometry::OutlineBox;
    use crate::hooks::HookName;
    use crate::options::INSPECTOR_CLASS;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::{Rect, Vec2};

    type Log = Rc<RefCell<Vec<String>>>;

    struct Page {
        doc: MemoryDocument,
        inspector: Node,
        card: Node,
        banner: Node,
    }

    fn page() -> Page {
        let mut doc = MemoryDocument::new();
        let inspector = doc.insert(ElementSpec::new("div").id("box"));
        let card = doc.insert(
            ElementSpec::new("div")
                .class("card")
                .bounds(Rect::from_origin_size((5.0, -10.0), (100.0, 50.0))),
        );
        let banner = doc.insert(
            ElementSpec::new("header")
                .class("banner")
                .bounds(Rect::from_origin_size((0.0, 0.0), (400.0, 30.0))),
        );
        Page {
            doc,
            inspector,
            card,
            banner,
        }
    }

    fn logging(log: &Log) -> Inspector<MemoryDocument> {
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        for at in [
            Lifecycle::Starting,
            Lifecycle::Started,
            Lifecycle::Stopping,
            Lifecycle::Stopped,
        ] {
            let l = log.clone();
            let name = HookName::Lifecycle(at).as_str();
            insp.on_lifecycle(at, move || l.borrow_mut().push(name.to_string()));
        }
        let l = log.clone();
        insp.on_raw(move |e| l.borrow_mut().push(alloc::format!("hook:{}", e.kind.name())));
        for kind in [EventKind::MouseOver, EventKind::Click] {
            let l = log.clone();
            insp.on_event(kind, move |t, e| {
                l.borrow_mut().push(alloc::format!("{}:{:?}", e.kind.name(), t));
            });
        }
        insp
    }

    fn by_selector() -> Option<OptionsPatch<Node>> {
        Some(OptionsPatch::new().inspector_selector("#box"))
    }

    #[test]
    fn start_then_stop_leaves_no_subscription() {
        let mut p = page();
        let log: Log = Rc::default();
        let mut insp = logging(&log);
        assert_eq!(insp.status(), Status::Idle);

        insp.start(&mut p.doc, by_selector()).unwrap();
        assert_eq!(insp.status(), Status::Running);
        insp.stop(&mut p.doc, false);
        assert_eq!(insp.status(), Status::Stopped);
        assert!(p.doc.subscribed().is_empty());

        log.borrow_mut().clear();
        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        assert!(log.borrow().is_empty());
        assert_eq!(p.doc.outline(p.inspector), None);
    }

    #[test]
    fn lifecycle_hooks_fire_in_order() {
        let mut p = page();
        let log: Log = Rc::default();
        let mut insp = logging(&log);
        insp.start(&mut p.doc, by_selector()).unwrap();
        insp.stop(&mut p.doc, false);
        assert_eq!(*log.borrow(), ["starting", "started", "stopping", "stopped"]);
    }

    /// Forwards to a [`MemoryDocument`] and records every side effect into a shared log.
    struct Recording {
        inner: MemoryDocument,
        log: Log,
    }

    impl Document for Recording {
        type Element = Node;

        fn query_selector(&self, selector: &str) -> Option<Node> {
            self.inner.query_selector(selector)
        }

        fn query_selector_all(&self, selector: &str) -> Vec<Node> {
            self.inner.query_selector_all(selector)
        }

        fn bounding_rect(&self, element: &Node) -> Rect {
            self.inner.bounding_rect(element)
        }

        fn scroll(&self) -> crate::types::Scroll {
            self.inner.scroll()
        }

        fn subscribe(&mut self, kinds: EventKinds) {
            self.log.borrow_mut().push("subscribe".into());
            self.inner.subscribe(kinds);
        }

        fn unsubscribe(&mut self, kinds: EventKinds) {
            self.log.borrow_mut().push("unsubscribe".into());
            self.inner.unsubscribe(kinds);
        }

        fn root_classes_mut(&mut self) -> &mut crate::class_list::ClassList {
            self.log.borrow_mut().push("root-classes".into());
            self.inner.root_classes_mut()
        }

        fn create_element(&mut self, class: &str) -> Node {
            self.log.borrow_mut().push("create".into());
            self.inner.create_element(class)
        }

        fn remove_element(&mut self, element: &Node) {
            self.log.borrow_mut().push("remove".into());
            self.inner.remove_element(element);
        }

        fn set_outline(&mut self, element: &Node, outline: Option<OutlineBox>) {
            self.log.borrow_mut().push("outline".into());
            self.inner.set_outline(element, outline);
        }

        fn set_unload_guard(&mut self, block: bool) {
            self.log.borrow_mut().push(alloc::format!("unload-guard:{block}"));
            self.inner.set_unload_guard(block);
        }
    }

    #[test]
    fn hooks_and_effects_interleave_in_order() {
        let log: Log = Rc::default();
        let mut doc = Recording {
            inner: MemoryDocument::new(),
            log: log.clone(),
        };
        let mut insp: Inspector<Recording> = Inspector::new();
        for at in [
            Lifecycle::Starting,
            Lifecycle::Started,
            Lifecycle::Stopping,
            Lifecycle::Stopped,
        ] {
            let l = log.clone();
            let name = HookName::Lifecycle(at).as_str();
            insp.on_lifecycle(at, move || l.borrow_mut().push(name.to_string()));
        }

        insp.start(
            &mut doc,
            Some(
                OptionsPatch::new()
                    .create_inspector(true)
                    .block_redirection(true),
            ),
        )
        .unwrap();
        assert_eq!(
            *log.borrow(),
            [
                "create",
                "starting",
                "unload-guard:true",
                "subscribe",
                "root-classes",
                "started"
            ]
        );

        log.borrow_mut().clear();
        insp.stop(&mut doc, true);
        assert_eq!(
            *log.borrow(),
            [
                "stopping",
                "unsubscribe",
                "root-classes",
                "unload-guard:false",
                "outline",
                "remove",
                "stopped"
            ]
        );
    }

    #[test]
    fn started_fires_once_after_effects() {
        let mut p = page();
        let calls = Rc::new(RefCell::new(0_u32));
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        let c = calls.clone();
        insp.on_lifecycle(Lifecycle::Started, move || *c.borrow_mut() += 1);
        insp.start(&mut p.doc, by_selector()).unwrap();
        assert_eq!(*calls.borrow(), 1);
        assert!(p.doc.root_classes().contains(NAMESPACE_CLASS));
        assert_eq!(p.doc.subscribed(), EventKinds::INSPECTED);
    }

    #[test]
    fn missing_inspector_selector_keeps_status() {
        let mut p = page();
        let log: Log = Rc::default();
        let mut insp = logging(&log);
        let err = insp
            .start(&mut p.doc, Some(OptionsPatch::new().inspector_selector("#nope")))
            .unwrap_err();
        assert_eq!(err, Error::ElementNotFound("#nope".into()));
        assert_eq!(insp.status(), Status::Idle);
        assert!(p.doc.subscribed().is_empty());
        assert!(p.doc.root_classes().is_empty());
        assert!(log.borrow().is_empty());

        insp.start(&mut p.doc, by_selector()).unwrap();
        insp.stop(&mut p.doc, false);
        let err = insp
            .start(&mut p.doc, Some(OptionsPatch::new().inspector_selector("#nope")))
            .unwrap_err();
        assert!(matches!(err, Error::ElementNotFound(_)));
        assert_eq!(insp.status(), Status::Stopped);
    }

    #[test]
    fn unresolvable_inspector_is_invalid_configuration() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        assert!(matches!(
            insp.start(&mut p.doc, None),
            Err(Error::InvalidConfiguration(_))
        ));
        assert_eq!(insp.status(), Status::Idle);
    }

    #[test]
    fn restart_while_running_is_rejected() {
        let mut p = page();
        let log: Log = Rc::default();
        let mut insp = logging(&log);
        insp.start(&mut p.doc, by_selector()).unwrap();
        log.borrow_mut().clear();

        assert_eq!(insp.start(&mut p.doc, None), Err(Error::AlreadyRunning));
        assert_eq!(insp.status(), Status::Running);
        assert!(log.borrow().is_empty());

        insp.handle_event(&mut p.doc, &InspectEvent::click(p.card));
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn pointer_move_outlines_target() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(&mut p.doc, by_selector()).unwrap();

        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        let outline = p.doc.outline(p.inspector).unwrap();
        assert_eq!(
            outline,
            OutlineBox {
                top: 0.0,
                left: 5.0,
                width: 100.0,
                height: 50.0
            }
        );
        assert_eq!(
            outline.to_string(),
            "top: 0px; left: 5px; width: 100px; height: 50px"
        );
    }

    #[test]
    fn scroll_offsets_shift_outline() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(&mut p.doc, by_selector()).unwrap();

        p.doc.set_window_scroll(Some(Vec2::new(0.0, 100.0)));
        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        assert_eq!(p.doc.outline(p.inspector).unwrap().top, 90.0);

        // Without a window the root element's offset applies.
        p.doc.set_window_scroll(None);
        p.doc.set_root_scroll(Vec2::new(10.0, 20.0));
        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        let outline = p.doc.outline(p.inspector).unwrap();
        assert_eq!((outline.top, outline.left), (10.0, 15.0));
    }

    #[test]
    fn click_does_not_move_inspector() {
        let mut p = page();
        let log: Log = Rc::default();
        let mut insp = logging(&log);
        insp.start(&mut p.doc, by_selector()).unwrap();
        log.borrow_mut().clear();

        insp.handle_event(&mut p.doc, &InspectEvent::click(p.card));
        assert_eq!(p.doc.outline(p.inspector), None);
        assert_eq!(
            *log.borrow(),
            ["hook:click".to_string(), alloc::format!("click:{:?}", p.card)]
        );
    }

    #[test]
    fn excluded_elements_only_reach_the_tap() {
        let mut p = page();
        let log: Log = Rc::default();
        let mut insp = logging(&log);
        insp.start(
            &mut p.doc,
            Some(
                OptionsPatch::new()
                    .inspector_selector("#box")
                    .excludes([".banner", "footer"]),
            ),
        )
        .unwrap();
        log.borrow_mut().clear();

        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.banner));
        assert_eq!(p.doc.outline(p.inspector), None);
        assert_eq!(*log.borrow(), ["hook:mouseover"]);

        insp.handle_event(&mut p.doc, &InspectEvent::click(p.banner));
        assert_eq!(*log.borrow(), ["hook:mouseover", "hook:click"]);
    }

    // Exclusions are read on every event, so changing them mid-run takes effect at once.
    #[test]
    fn exclusions_apply_live() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(&mut p.doc, by_selector()).unwrap();
        insp.configure(OptionsPatch::new().excludes([".card"]));
        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        assert_eq!(p.doc.outline(p.inspector), None);

        insp.configure(OptionsPatch::new().excludes(Vec::<String>::new()));
        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        assert!(p.doc.outline(p.inspector).is_some());
    }

    #[test]
    fn inspector_and_targetless_events_are_ignored() {
        let mut p = page();
        let log: Log = Rc::default();
        let mut insp = logging(&log);
        insp.start(&mut p.doc, by_selector()).unwrap();
        log.borrow_mut().clear();

        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.inspector));
        insp.handle_event(
            &mut p.doc,
            &InspectEvent {
                kind: EventKind::MouseOver,
                target: None,
            },
        );
        assert_eq!(p.doc.outline(p.inspector), None);
        assert_eq!(*log.borrow(), ["hook:mouseover", "hook:mouseover"]);
    }

    #[test]
    fn html_class_is_added_and_removed() {
        let mut p = page();
        p.doc.root_classes_mut().add("dark");
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(&mut p.doc, by_selector()).unwrap();
        assert_eq!(p.doc.root_classes().to_string(), "dark understory-inspector");

        // Reordering by other code does not prevent removal.
        p.doc.root_classes_mut().remove("dark");
        p.doc.root_classes_mut().add("dark");
        insp.stop(&mut p.doc, false);
        assert_eq!(p.doc.root_classes().to_string(), "dark");
    }

    #[test]
    fn html_class_can_be_disabled() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(
            &mut p.doc,
            Some(OptionsPatch::new().inspector_selector("#box").html_class(false)),
        )
        .unwrap();
        assert!(p.doc.root_classes().is_empty());
        insp.stop(&mut p.doc, false);
        assert!(p.doc.root_classes().is_empty());
    }

    // A namespace class present before start belongs to someone else and survives stop.
    #[test]
    fn preexisting_namespace_class_is_left_in_place() {
        let mut p = page();
        p.doc.root_classes_mut().add(NAMESPACE_CLASS);
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(&mut p.doc, by_selector()).unwrap();
        insp.stop(&mut p.doc, false);
        assert!(p.doc.root_classes().contains(NAMESPACE_CLASS));
    }

    #[test]
    fn unload_guard_follows_session() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(
            &mut p.doc,
            Some(
                OptionsPatch::new()
                    .inspector_selector("#box")
                    .block_redirection(true),
            ),
        )
        .unwrap();
        assert!(p.doc.unload_blocked());

        // Turning the option off mid-run still removes the guard installed at start.
        insp.configure(OptionsPatch::new().block_redirection(false));
        insp.stop(&mut p.doc, false);
        assert!(!p.doc.unload_blocked());
    }

    #[test]
    fn reset_clears_outline() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(&mut p.doc, by_selector()).unwrap();
        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        insp.stop(&mut p.doc, false);
        assert!(p.doc.outline(p.inspector).is_some());

        insp.start(&mut p.doc, None).unwrap();
        insp.stop(&mut p.doc, true);
        assert_eq!(p.doc.outline(p.inspector), None);
        assert_eq!(insp.inspector_element(), Some(&p.inspector));
    }

    #[test]
    fn created_inspector_is_torn_down_and_recreated() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(&mut p.doc, Some(OptionsPatch::new().create_inspector(true)))
            .unwrap();
        let first = *insp.inspector_element().unwrap();
        assert!(p.doc.has_class(first, INSPECTOR_CLASS));
        assert_eq!(insp.options().inspector, InspectorRef::Element(first));

        insp.stop(&mut p.doc, false);
        assert!(!p.doc.is_attached(first));
        assert_eq!(insp.options().inspector, InspectorRef::None);
        assert_eq!(insp.inspector_element(), None);

        insp.start(&mut p.doc, None).unwrap();
        let second = *insp.inspector_element().unwrap();
        assert_ne!(first, second);
        assert_eq!(p.doc.created().count(), 1);
        insp.stop(&mut p.doc, false);
        assert_eq!(p.doc.created().count(), 0);
    }

    #[test]
    fn created_inspector_frames_targets() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.start(&mut p.doc, Some(OptionsPatch::new().create_inspector(true)))
            .unwrap();
        let created = *insp.inspector_element().unwrap();
        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.banner));
        assert_eq!(
            p.doc.outline(created).map(|o| o.rect()),
            Some(Rect::new(0.0, 0.0, 400.0, 30.0))
        );
    }

    #[test]
    fn stop_before_start_is_harmless() {
        let mut p = page();
        let log: Log = Rc::default();
        let mut insp = logging(&log);
        insp.stop(&mut p.doc, true);
        assert_eq!(insp.status(), Status::Stopped);
        assert_eq!(*log.borrow(), ["stopping", "stopped"]);
    }

    // Options set between runs apply from the next start on.
    #[test]
    fn configuration_persists_across_runs() {
        let mut p = page();
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        insp.configure(OptionsPatch::new().inspector_selector("#box"));
        insp.configure(OptionsPatch::new().block_redirection(true));
        insp.start(&mut p.doc, None).unwrap();
        assert!(p.doc.unload_blocked());
        assert_eq!(insp.options().inspector, InspectorRef::Element(p.inspector));
        insp.stop(&mut p.doc, false);

        insp.configure(OptionsPatch::new().html_class(false));
        insp.start(&mut p.doc, None).unwrap();
        assert!(p.doc.unload_blocked());
        assert!(p.doc.root_classes().is_empty());
    }

    #[test]
    fn sessions_on_separate_documents_are_independent() {
        let mut first = page();
        let mut second = page();
        let mut a: Inspector<MemoryDocument> = Inspector::new();
        let mut b: Inspector<MemoryDocument> = Inspector::new();
        a.start(&mut first.doc, by_selector()).unwrap();
        b.start(&mut second.doc, by_selector()).unwrap();

        a.stop(&mut first.doc, false);
        assert_eq!(b.status(), Status::Running);
        assert_eq!(second.doc.subscribed(), EventKinds::INSPECTED);
        assert!(second.doc.root_classes().contains(NAMESPACE_CLASS));

        b.handle_event(&mut second.doc, &InspectEvent::mouse_over(second.card));
        assert!(second.doc.outline(second.inspector).is_some());
        assert!(first.doc.subscribed().is_empty());
        assert_eq!(first.doc.outline(first.inspector), None);
    }

    // Host effects are not tracked per session: stopping one session on a
    // shared document releases them for the other.
    #[test]
    fn stopping_one_session_releases_shared_document_effects() {
        let mut p = page();
        let other = p.doc.insert(ElementSpec::new("div").id("other"));
        let mut a: Inspector<MemoryDocument> = Inspector::new();
        let mut b: Inspector<MemoryDocument> = Inspector::new();
        a.start(&mut p.doc, by_selector()).unwrap();
        b.start(&mut p.doc, Some(OptionsPatch::new().inspector_element(other))).unwrap();

        a.stop(&mut p.doc, false);
        assert_eq!(b.status(), Status::Running);
        assert!(p.doc.subscribed().is_empty());
        assert!(!p.doc.root_classes().contains(NAMESPACE_CLASS));

        // The session itself still outlines whatever it is handed.
        b.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        assert!(p.doc.outline(other).is_some());
        assert_eq!(p.doc.outline(p.inspector), None);
    }

    #[test]
    fn keyed_hook_registration() {
        let mut p = page();
        let hits = Rc::new(RefCell::new(0_u32));
        let mut insp: Inspector<MemoryDocument> = Inspector::new();
        let h = hits.clone();
        insp.on("mouseover", Handler::target(move |_, _| *h.borrow_mut() += 1))
            .unwrap();
        assert!(insp.on("mouseover", Handler::lifecycle(|| {})).is_err());
        assert!(insp.on("htmlClass", Handler::lifecycle(|| {})).is_err());

        insp.start(&mut p.doc, by_selector()).unwrap();
        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        insp.handle_event(&mut p.doc, &InspectEvent::click(p.card));
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn custom_dispatcher_sees_every_signal() {
        #[derive(Default)]
        struct Names(Vec<HookName>);
        impl Dispatcher<Node> for Names {
            fn emit(&mut self, signal: Signal<'_, Node>) {
                self.0.push(signal.hook_name());
            }
        }

        let mut p = page();
        let mut insp: Inspector<MemoryDocument, Names> =
            Inspector::with_dispatcher(Names::default());
        insp.start(&mut p.doc, by_selector()).unwrap();
        insp.handle_event(&mut p.doc, &InspectEvent::mouse_over(p.card));
        insp.stop(&mut p.doc, false);

        let names: Vec<&str> = insp.dispatcher().0.iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            ["starting", "started", "hook", "mouseover", "stopping", "stopped"]
        );
    }
}
