/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Transformations on graphs.
//!
//! # Dangling nodes
//!
//! - [`dangling_nodes`]: returns the nodes without successors;
//! - [`patch_dangling`]: links every dangling node to all other nodes, in
//!   place;
//! - [`normalize`]: same, taking and returning the graph by value.
//!
//! # Transpose
//!
//! - [`transpose`]: returns the transpose of a graph.

mod dangling;
pub use dangling::*;

mod transpose;
pub use transpose::*;
