/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod pagerank;
pub use pagerank::{iterate, ConfigError, EmptyGraph, PageRank, RankError};
