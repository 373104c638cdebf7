/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod graphs;
pub mod rank;
pub mod report;
pub mod transform;

/// The minimum number of items a Rayon task will process.
pub const RAYON_MIN_LEN: usize = 1024;

pub mod prelude {
    pub use crate::graphs::prelude::*;
    pub use crate::rank::*;
    pub use crate::report::*;
    pub use crate::transform::*;
}
