/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of graphs.

pub mod adj_graph;
pub mod random;

pub mod prelude {
    pub use super::adj_graph::{AdjGraph, ParseError};
    pub use super::random::ErdosRenyi;
}
