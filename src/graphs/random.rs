/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::adj_graph::AdjGraph;

/// Provides an implementation of Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two nodes. In this implementation, loops are never
/// included.
///
/// The time required to generate the graph is quadratic in `n`.
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an edge between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Generates the graph.
    ///
    /// All nodes are listed, so nodes without successors are dangling. The
    /// same parameters always yield the same graph.
    pub fn graph(&self) -> AdjGraph {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut g = AdjGraph::empty(self.n);
        for x in 0..self.n {
            let succ = (0..self.n)
                .filter(|&y| y != x && rng.random_bool(self.p))
                .collect::<Vec<_>>();
            g.set_successors(x, succ);
        }
        g
    }
}
