// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host adapters implementing [`Document`](crate::document::Document).

pub mod memory;
