// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hook registry and dispatch.
//!
//! ## Overview
//!
//! The [engine](crate::engine) reports every lifecycle transition and every
//! handled event as a [`Signal`] to a [`Dispatcher`]. [`Hooks`] is the default
//! dispatcher: a registry of user callbacks invoked synchronously, in the
//! order the engine emits, with return values discarded.
//!
//! ## Hook names
//!
//! | Name        | Signal                 | Handler shape          |
//! |-------------|------------------------|------------------------|
//! | `starting`  | before start effects   | [`Handler::Lifecycle`] |
//! | `started`   | after start effects    | [`Handler::Lifecycle`] |
//! | `stopping`  | before stop effects    | [`Handler::Lifecycle`] |
//! | `stopped`   | after stop effects     | [`Handler::Lifecycle`] |
//! | `hook`      | every raw event        | [`Handler::Raw`]       |
//! | `mouseover` | inspected pointer-move | [`Handler::Target`]    |
//! | `click`     | inspected click        | [`Handler::Target`]    |
//!
//! Hooks live apart from [options](crate::options), so no option value can
//! shadow a hook.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//! use understory_inspector::hooks::{Dispatcher, Hooks, Lifecycle, Signal};
//!
//! let count = Rc::new(Cell::new(0));
//! let mut hooks: Hooks<u32> = Hooks::new();
//! let c = count.clone();
//! hooks.on_lifecycle(Lifecycle::Started, move || c.set(c.get() + 1));
//! hooks.emit(Signal::Starting);
//! hooks.emit(Signal::Started);
//! assert_eq!(count.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::format;
use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::types::{EventKind, InspectEvent};

/// Lifecycle points around start and stop.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Lifecycle {
    /// Inspector resolved, nothing applied yet.
    Starting,
    /// Subscribed, classes applied, status is running.
    Started,
    /// About to unsubscribe.
    Stopping,
    /// Fully stopped.
    Stopped,
}

impl Lifecycle {
    const fn index(self) -> usize {
        match self {
            Self::Starting => 0,
            Self::Started => 1,
            Self::Stopping => 2,
            Self::Stopped => 3,
        }
    }
}

/// Name of a hook slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HookName {
    /// One of the lifecycle points.
    Lifecycle(Lifecycle),
    /// The unconditional tap on every raw event (`hook`).
    Hook,
    /// The type-named hook for inspected events.
    Event(EventKind),
}

impl HookName {
    /// The string name of this hook.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lifecycle(Lifecycle::Starting) => "starting",
            Self::Lifecycle(Lifecycle::Started) => "started",
            Self::Lifecycle(Lifecycle::Stopping) => "stopping",
            Self::Lifecycle(Lifecycle::Stopped) => "stopped",
            Self::Hook => "hook",
            Self::Event(kind) => kind.name(),
        }
    }
}

impl FromStr for HookName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "starting" => Self::Lifecycle(Lifecycle::Starting),
            "started" => Self::Lifecycle(Lifecycle::Started),
            "stopping" => Self::Lifecycle(Lifecycle::Stopping),
            "stopped" => Self::Lifecycle(Lifecycle::Stopped),
            "hook" => Self::Hook,
            other => Self::Event(
                other
                    .parse()
                    .map_err(|_| Error::InvalidArgument(format!("unknown hook: {other}")))?,
            ),
        })
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something the engine reports to its dispatcher.
#[derive(Debug)]
pub enum Signal<'a, E> {
    /// See [`Lifecycle::Starting`].
    Starting,
    /// See [`Lifecycle::Started`].
    Started,
    /// See [`Lifecycle::Stopping`].
    Stopping,
    /// See [`Lifecycle::Stopped`].
    Stopped,
    /// A raw event, before any filtering.
    Raw(&'a InspectEvent<E>),
    /// An event that passed filtering, with its target.
    Target {
        /// The inspected element.
        target: &'a E,
        /// The raw event.
        event: &'a InspectEvent<E>,
    },
}

impl<E> Signal<'_, E> {
    /// The hook slot this signal is delivered to.
    pub fn hook_name(&self) -> HookName {
        match self {
            Self::Starting => HookName::Lifecycle(Lifecycle::Starting),
            Self::Started => HookName::Lifecycle(Lifecycle::Started),
            Self::Stopping => HookName::Lifecycle(Lifecycle::Stopping),
            Self::Stopped => HookName::Lifecycle(Lifecycle::Stopped),
            Self::Raw(_) => HookName::Hook,
            Self::Target { event, .. } => HookName::Event(event.kind),
        }
    }
}

/// Receiver of engine signals.
///
/// Delivery is synchronous: `emit` returns before the engine continues.
pub trait Dispatcher<E> {
    /// Deliver `signal`.
    fn emit(&mut self, signal: Signal<'_, E>);
}

/// A user callback for one hook slot.
pub enum Handler<E> {
    /// Called with no arguments.
    Lifecycle(Box<dyn FnMut()>),
    /// Called with the raw event.
    Raw(Box<dyn FnMut(&InspectEvent<E>)>),
    /// Called with the target and the raw event.
    Target(Box<dyn FnMut(&E, &InspectEvent<E>)>),
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lifecycle(_) => "Handler::Lifecycle",
            Self::Raw(_) => "Handler::Raw",
            Self::Target(_) => "Handler::Target",
        })
    }
}

impl<E> Handler<E> {
    /// Wrap a no-argument closure.
    pub fn lifecycle(f: impl FnMut() + 'static) -> Self {
        Self::Lifecycle(Box::new(f))
    }

    /// Wrap a raw-event closure.
    pub fn raw(f: impl FnMut(&InspectEvent<E>) + 'static) -> Self {
        Self::Raw(Box::new(f))
    }

    /// Wrap a target closure.
    pub fn target(f: impl FnMut(&E, &InspectEvent<E>) + 'static) -> Self {
        Self::Target(Box::new(f))
    }
}

type TargetFn<E> = Box<dyn FnMut(&E, &InspectEvent<E>)>;

/// Registry of hook callbacks, one per slot.
pub struct Hooks<E> {
    lifecycle: [Option<Box<dyn FnMut()>>; 4],
    raw: Option<Box<dyn FnMut(&InspectEvent<E>)>>,
    mouse_over: Option<TargetFn<E>>,
    click: Option<TargetFn<E>>,
}

impl<E> fmt::Debug for Hooks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("starting", &self.lifecycle[0].is_some())
            .field("started", &self.lifecycle[1].is_some())
            .field("stopping", &self.lifecycle[2].is_some())
            .field("stopped", &self.lifecycle[3].is_some())
            .field("hook", &self.raw.is_some())
            .field("mouseover", &self.mouse_over.is_some())
            .field("click", &self.click.is_some())
            .finish()
    }
}

impl<E> Default for Hooks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Hooks<E> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            lifecycle: [None, None, None, None],
            raw: None,
            mouse_over: None,
            click: None,
        }
    }

    /// Register a lifecycle hook, replacing any previous one.
    pub fn on_lifecycle(&mut self, at: Lifecycle, f: impl FnMut() + 'static) {
        self.lifecycle[at.index()] = Some(Box::new(f));
    }

    /// Register the raw-event tap, replacing any previous one.
    pub fn on_raw(&mut self, f: impl FnMut(&InspectEvent<E>) + 'static) {
        self.raw = Some(Box::new(f));
    }

    /// Register the hook for inspected events of `kind`, replacing any previous one.
    pub fn on_event(&mut self, kind: EventKind, f: impl FnMut(&E, &InspectEvent<E>) + 'static) {
        *self.event_slot(kind) = Some(Box::new(f));
    }

    /// Register `handler` under a string hook name.
    ///
    /// Fails with [`Error::InvalidArgument`] if `name` is unknown or the
    /// handler shape does not fit the slot (see the table in the module docs).
    pub fn on(&mut self, name: &str, handler: Handler<E>) -> Result<(), Error> {
        match (name.parse::<HookName>()?, handler) {
            (HookName::Lifecycle(at), Handler::Lifecycle(f)) => {
                self.lifecycle[at.index()] = Some(f);
            }
            (HookName::Hook, Handler::Raw(f)) => self.raw = Some(f),
            (HookName::Event(kind), Handler::Target(f)) => *self.event_slot(kind) = Some(f),
            (slot, h) => {
                return Err(Error::InvalidArgument(format!(
                    "{h:?} does not fit hook: {slot}"
                )));
            }
        }
        Ok(())
    }

    /// Remove the handler for `name`, returning whether one was registered.
    pub fn remove(&mut self, name: HookName) -> bool {
        match name {
            HookName::Lifecycle(at) => self.lifecycle[at.index()].take().is_some(),
            HookName::Hook => self.raw.take().is_some(),
            HookName::Event(kind) => self.event_slot(kind).take().is_some(),
        }
    }

    /// Whether a handler is registered for `name`.
    pub fn is_registered(&self, name: HookName) -> bool {
        match name {
            HookName::Lifecycle(at) => self.lifecycle[at.index()].is_some(),
            HookName::Hook => self.raw.is_some(),
            HookName::Event(EventKind::MouseOver) => self.mouse_over.is_some(),
            HookName::Event(EventKind::Click) => self.click.is_some(),
        }
    }

    fn event_slot(&mut self, kind: EventKind) -> &mut Option<TargetFn<E>> {
        match kind {
            EventKind::MouseOver => &mut self.mouse_over,
            EventKind::Click => &mut self.click,
        }
    }
}

impl<E> Dispatcher<E> for Hooks<E> {
    fn emit(&mut self, signal: Signal<'_, E>) {
        let at = match signal {
            Signal::Starting => Lifecycle::Starting,
            Signal::Started => Lifecycle::Started,
            Signal::Stopping => Lifecycle::Stopping,
            Signal::Stopped => Lifecycle::Stopped,
            Signal::Raw(event) => {
                if let Some(f) = self.raw.as_mut() {
                    f(event);
                }
                return;
            }
            Signal::Target { target, event } => {
                if let Some(f) = self.event_slot(event.kind).as_mut() {
                    f(target, event);
                }
                return;
            }
        };
        if let Some(f) = self.lifecycle[at.index()].as_mut() {
            f();
        }
    }
}
