// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session options and shallow-merge patches.
//!
//! ## Merging
//!
//! An [`OptionsPatch`] carries only the keys a caller wants to change.
//! [`Options::merge`] overwrites exactly those keys and leaves every other key
//! at its prior value. A patch is either built with the chaining setters or
//! from keyed pairs via [`OptionsPatch::from_pairs`], which validates every
//! pair before anything is merged.
//!
//! ```
//! use understory_inspector::options::{OptionValue, Options, OptionsPatch};
//!
//! let mut opts: Options<u32> = Options::default();
//! opts.merge(OptionsPatch::new().block_redirection(true));
//! opts.merge(OptionsPatch::from_pairs([("excludes", OptionValue::List(vec![".ad".into()]))]).unwrap());
//! assert!(opts.block_redirection);
//! assert_eq!(opts.excludes, [".ad"]);
//! assert!(opts.html_class);
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;

/// Marker class given to an auto-created inspector element.
pub const INSPECTOR_CLASS: &str = "inspector-element";

/// Class added to the document root while a session is running.
pub const NAMESPACE_CLASS: &str = "understory-inspector";

/// How the inspector element is found.
#[derive(Clone, Debug, PartialEq)]
pub enum InspectorRef<E> {
    /// Not configured; only valid together with `create_inspector`.
    None,
    /// Selector resolved against the document on each start.
    Selector(String),
    /// A concrete element handle.
    Element(E),
}

impl<E> Default for InspectorRef<E> {
    fn default() -> Self {
        Self::None
    }
}

impl<E> InspectorRef<E> {
    /// The element handle, if resolved.
    pub fn element(&self) -> Option<&E> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// Current option values of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct Options<E> {
    /// Element used to draw the outline.
    pub inspector: InspectorRef<E>,
    /// Add [`NAMESPACE_CLASS`] to the document root while running.
    pub html_class: bool,
    /// Veto page navigation while running.
    pub block_redirection: bool,
    /// Create an inspector element when none is configured.
    pub create_inspector: bool,
    /// Selectors whose matching elements are never inspected.
    pub excludes: Vec<String>,
}

impl<E> Default for Options<E> {
    fn default() -> Self {
        Self {
            inspector: InspectorRef::None,
            html_class: true,
            block_redirection: false,
            create_inspector: false,
            excludes: Vec::new(),
        }
    }
}

impl<E> Options<E> {
    /// Shallow-merge `patch`: provided keys overwrite, absent keys are untouched.
    pub fn merge(&mut self, patch: OptionsPatch<E>) {
        if let Some(v) = patch.inspector {
            self.inspector = v;
        }
        if let Some(v) = patch.html_class {
            self.html_class = v;
        }
        if let Some(v) = patch.block_redirection {
            self.block_redirection = v;
        }
        if let Some(v) = patch.create_inspector {
            self.create_inspector = v;
        }
        if let Some(v) = patch.excludes {
            self.excludes = v;
        }
    }

    /// Combined exclusion selector, or `None` when there are no excludes.
    pub fn exclusion_selector(&self) -> Option<String> {
        if self.excludes.is_empty() {
            None
        } else {
            Some(self.excludes.join(","))
        }
    }
}

/// A dynamically typed option value for keyed configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue<E> {
    /// Boolean flag.
    Bool(bool),
    /// Selector string.
    Selector(String),
    /// Element handle.
    Element(E),
    /// List of selectors.
    List(Vec<String>),
    /// Explicit absence, e.g. clearing the inspector.
    Null,
}

/// A set of option changes to merge into [`Options`].
#[derive(Clone, Debug, PartialEq)]
pub struct OptionsPatch<E> {
    /// New inspector reference.
    pub inspector: Option<InspectorRef<E>>,
    /// New `html_class` value.
    pub html_class: Option<bool>,
    /// New `block_redirection` value.
    pub block_redirection: Option<bool>,
    /// New `create_inspector` value.
    pub create_inspector: Option<bool>,
    /// New exclusion list.
    pub excludes: Option<Vec<String>>,
}

impl<E> Default for OptionsPatch<E> {
    fn default() -> Self {
        Self {
            inspector: None,
            html_class: None,
            block_redirection: None,
            create_inspector: None,
            excludes: None,
        }
    }
}

impl<E> OptionsPatch<E> {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the first element matching `selector` as the inspector.
    pub fn inspector_selector(mut self, selector: impl Into<String>) -> Self {
        self.inspector = Some(InspectorRef::Selector(selector.into()));
        self
    }

    /// Use `element` as the inspector.
    pub fn inspector_element(mut self, element: E) -> Self {
        self.inspector = Some(InspectorRef::Element(element));
        self
    }

    /// Set `html_class`.
    pub fn html_class(mut self, on: bool) -> Self {
        self.html_class = Some(on);
        self
    }

    /// Set `block_redirection`.
    pub fn block_redirection(mut self, on: bool) -> Self {
        self.block_redirection = Some(on);
        self
    }

    /// Set `create_inspector`.
    pub fn create_inspector(mut self, on: bool) -> Self {
        self.create_inspector = Some(on);
        self
    }

    /// Replace the exclusion list.
    pub fn excludes<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = Some(selectors.into_iter().map(Into::into).collect());
        self
    }

    /// Build a patch from keyed pairs using the option names
    /// `inspector`, `htmlClass`, `blockRedirection`, `createInspector`, `excludes`.
    ///
    /// Fails with [`Error::InvalidArgument`] on an unknown key or a value of the wrong shape.
    /// Later pairs for the same key win.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (&'a str, OptionValue<E>)>,
    {
        let mut patch = Self::new();
        for (key, value) in pairs {
            match (key, value) {
                ("inspector", OptionValue::Selector(s)) => {
                    patch.inspector = Some(InspectorRef::Selector(s));
                }
                ("inspector", OptionValue::Element(e)) => {
                    patch.inspector = Some(InspectorRef::Element(e));
                }
                ("inspector", OptionValue::Null) => patch.inspector = Some(InspectorRef::None),
                ("htmlClass", OptionValue::Bool(b)) => patch.html_class = Some(b),
                ("blockRedirection", OptionValue::Bool(b)) => patch.block_redirection = Some(b),
                ("createInspector", OptionValue::Bool(b)) => patch.create_inspector = Some(b),
                ("excludes", OptionValue::List(l)) => patch.excludes = Some(l),
                (
                    k @ ("inspector" | "htmlClass" | "blockRedirection" | "createInspector"
                    | "excludes"),
                    _,
                ) => {
                    return Err(Error::InvalidArgument(format!(
                        "unexpected value type for option: {k}"
                    )));
                }
                (k, _) => return Err(Error::InvalidArgument(format!("unknown option: {k}"))),
            }
        }
        Ok(patch)
    }
}
