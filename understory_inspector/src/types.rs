// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the inspector: session status, event kinds, raw events, and scroll offsets.
//!
//! ## Overview
//!
//! These types describe what the host delivers to the [engine](crate::engine)
//! and what the engine reports back through [hooks](crate::hooks).

use alloc::format;
use core::fmt;
use core::str::FromStr;

use kurbo::Vec2;

use crate::error::Error;

/// Lifecycle status of an inspection session.
///
/// `Idle` is only the initial state. [`Inspector::start`](crate::engine::Inspector::start)
/// always lands in `Running`, [`Inspector::stop`](crate::engine::Inspector::stop) always lands in `Stopped`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Status {
    /// Never started.
    #[default]
    Idle,
    /// Subscribed to pointer notifications and outlining targets.
    Running,
    /// Started at least once and currently halted.
    Stopped,
}

impl Status {
    /// Lowercase name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of pointer notification the inspector listens to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// The pointer moved onto a target.
    MouseOver,
    /// The target was clicked.
    Click,
}

impl EventKind {
    /// DOM event type name, also used as the hook name for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseOver => "mouseover",
            Self::Click => "click",
        }
    }

    /// The subscription flag for this kind.
    pub const fn flag(self) -> EventKinds {
        match self {
            Self::MouseOver => EventKinds::MOUSE_OVER,
            Self::Click => EventKinds::CLICK,
        }
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mouseover" => Ok(Self::MouseOver),
            "click" => Ok(Self::Click),
            other => Err(Error::InvalidArgument(format!("unknown event type: {other}"))),
        }
    }
}

bitflags::bitflags! {
    /// Set of event kinds a session is subscribed to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventKinds: u8 {
        /// Pointer-move over a target.
        const MOUSE_OVER = 0b0000_0001;
        /// Click on a target.
        const CLICK      = 0b0000_0010;
    }
}

impl Default for EventKinds {
    fn default() -> Self {
        Self::empty()
    }
}

impl EventKinds {
    /// Everything a running inspector subscribes to.
    pub const INSPECTED: Self = Self::MOUSE_OVER.union(Self::CLICK);

    /// Whether `kind` is in this set.
    pub const fn has(self, kind: EventKind) -> bool {
        self.contains(kind.flag())
    }
}

/// A raw notification delivered by the host.
///
/// `target` is whatever the host's native event target resolution produced.
/// The inspector does no hit testing of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct InspectEvent<E> {
    /// Which notification this is.
    pub kind: EventKind,
    /// Element the notification is about, if any.
    pub target: Option<E>,
}

impl<E> InspectEvent<E> {
    /// A pointer-move over `target`.
    pub fn mouse_over(target: E) -> Self {
        Self {
            kind: EventKind::MouseOver,
            target: Some(target),
        }
    }

    /// A click on `target`.
    pub fn click(target: E) -> Self {
        Self {
            kind: EventKind::Click,
            target: Some(target),
        }
    }
}

/// Scroll offsets reported by the host.
///
/// The window offset is authoritative when present; otherwise the
/// document root's offset is used.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Scroll {
    /// Window scroll offset (`scrollX`, `scrollY`), if the host has a window.
    pub window: Option<Vec2>,
    /// Document root scroll offset (`scrollLeft`, `scrollTop`).
    pub root: Vec2,
}

impl Scroll {
    /// Effective document scroll offset.
    pub fn offset(&self) -> Vec2 {
        self.window.unwrap_or(self.root)
    }
}
