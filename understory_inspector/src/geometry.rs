// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping a target's viewport bounds to document-relative inspector coordinates.

use core::fmt;

use kurbo::{Rect, Vec2};

/// Position and size applied to the inspector element, in CSS pixels.
///
/// `top` and `left` are document relative and never negative.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OutlineBox {
    /// Distance from the top of the document.
    pub top: f64,
    /// Distance from the left of the document.
    pub left: f64,
    /// Width of the framed target.
    pub width: f64,
    /// Height of the framed target.
    pub height: f64,
}

impl OutlineBox {
    /// The box as a document-space rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

impl fmt::Display for OutlineBox {
    /// Renders as inline style declarations, e.g. `top: 0px; left: 5px; width: 100px; height: 50px`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top: {}px; left: {}px; width: {}px; height: {}px",
            self.top, self.left, self.width, self.height
        )
    }
}

/// Compute the inspector box for a target.
///
/// `bounds` is the target's bounding rectangle relative to the viewport, and
/// `scroll` the effective document scroll offset. The origin is shifted by the
/// scroll offset and clamped at zero; the size is taken unchanged.
pub fn outline_box(bounds: Rect, scroll: Vec2) -> OutlineBox {
    OutlineBox {
        top: (bounds.y0 + scroll.y).max(0.0),
        left: (bounds.x0 + scroll.x).max(0.0),
        width: bounds.width(),
        height: bounds.height(),
    }
}
