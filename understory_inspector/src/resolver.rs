// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve the configured inspector reference into a concrete element.

use alloc::string::ToString;

use tracing::debug;

use crate::document::Document;
use crate::error::Error;
use crate::options::{INSPECTOR_CLASS, InspectorRef, Options};

/// An inspector element resolved for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<E> {
    /// The element the outline is drawn with.
    pub element: E,
    /// Whether the session created the element and must remove it on stop.
    pub owned: bool,
}

/// Resolve `options.inspector` against `doc`.
///
/// Order:
/// 1. A selector is looked up with [`Document::query_selector`].
/// 2. An element handle is returned unchanged.
/// 3. With no inspector and `create_inspector` set, a new element carrying
///    [`INSPECTOR_CLASS`] is attached to the body.
///
/// On success `options.inspector` is replaced by the resolved handle. On
/// failure neither `options` nor `doc` is touched.
pub fn resolve<D: Document>(
    options: &mut Options<D::Element>,
    doc: &mut D,
) -> Result<Resolved<D::Element>, Error> {
    let resolved = match &options.inspector {
        InspectorRef::Selector(sel) => {
            let element = doc
                .query_selector(sel)
                .ok_or_else(|| Error::ElementNotFound(sel.to_string()))?;
            debug!(selector = %sel, "resolved inspector from selector");
            Resolved {
                element,
                owned: false,
            }
        }
        InspectorRef::Element(e) => Resolved {
            element: e.clone(),
            owned: false,
        },
        InspectorRef::None if options.create_inspector => {
            let element = doc.create_element(INSPECTOR_CLASS);
            debug!(element = ?element, "created inspector element");
            Resolved {
                element,
                owned: true,
            }
        }
        InspectorRef::None => {
            return Err(Error::InvalidConfiguration(
                "inspector must be a selector or element handle",
            ));
        }
    };
    options.inspector = InspectorRef::Element(resolved.element.clone());
    Ok(resolved)
}
