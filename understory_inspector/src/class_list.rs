// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered set of class tokens for an element's `class` attribute.
//!
//! Adding a token that is already present is a no-op, and removal drops the
//! token wherever it sits, so mutations by other code never leave a stale
//! namespace class behind.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// An ordered, duplicate-free list of class tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Add `token`, returning `true` if it was not already present.
    ///
    /// Empty tokens and tokens containing whitespace are rejected.
    pub fn add(&mut self, token: &str) -> bool {
        if !is_valid_token(token) || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove `token`, returning `true` if it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Whether `token` is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the list has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }
}

fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

impl From<&str> for ClassList {
    /// Parse a whitespace separated `class` attribute value.
    fn from(attr: &str) -> Self {
        let mut list = Self::new();
        for token in attr.split_whitespace() {
            list.add(token);
        }
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(t)?;
        }
        Ok(())
    }
}
