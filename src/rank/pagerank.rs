/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! PageRank by a fixed number of power-iteration passes.
//!
//! # The formula
//!
//! Let *n* be the number of nodes, α the damping factor, and *d*(*q*) the
//! outdegree of node *q*. Starting from the uniform vector **x**⁽⁰⁾ = **1**/*n*,
//! each pass computes
//!
//! > *xₚ*⁽*ᵗ* ⁺ ¹⁾ = (1 − α) / *n*  +  α ∑_(*q* → *p*) *x_q*⁽*ᵗ*⁾ / *d*(*q*)
//!
//! for every node *p*, where the sum ranges over the predecessors of *p*.
//! The number of passes is fixed in advance: there is no stopping criterion
//! based on convergence.
//!
//! The formula assumes that there are no dangling nodes, so the graph should
//! be [patched](crate::transform::patch_dangling) first: every dangling node
//! then spreads its rank uniformly over all other nodes, and the rank vector
//! stays stochastic. A node that still has no successors keeps its own rank,
//! as if it had a loop. After patching this happens only in a graph with one
//! node, whose rank is thus always 1.
//!
//! # Passes
//!
//! Each pass reads only the vector of the previous pass and writes a new
//! one; the two vectors are swapped at the end of the pass. Contributions
//! to a node are summed in increasing order of predecessor, so the result
//! does not depend on the number of threads: nodes are distributed among
//! Rayon tasks, but each task writes only the entries of its nodes.

use crate::graphs::adj_graph::AdjGraph;
use crate::transform::transpose;
use crate::RAYON_MIN_LEN;
use dsi_progress_logger::{no_logging, ProgressLog};
use kahan::KahanSum;
use rayon::prelude::*;
use thiserror::Error;

/// Errors in the parameters of a PageRank computation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The damping factor is not in the open interval (0 . . 1).
    #[error("The damping factor must be in (0 . . 1), got {0}")]
    DampingFactor(f64),
    /// A negative number of iterations was requested.
    #[error("The number of iterations must be nonnegative, got {0}")]
    NegativeIterations(i64),
}

/// PageRank is undefined on a graph without nodes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The graph has no nodes")]
pub struct EmptyGraph;

/// The errors of [`iterate`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RankError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    EmptyGraph(#[from] EmptyGraph),
}

/// Computes PageRank using a fixed number of power-iteration passes.
///
/// The struct is configured via setters and then executed via
/// [`run`](Self::run). After completion the rank vector is available via the
/// [`rank`](Self::rank) method.
///
/// # Examples
///
/// ```
/// use seqrank::graphs::adj_graph::AdjGraph;
/// use seqrank::rank::PageRank;
/// use seqrank::transform::normalize;
///
/// let g = AdjGraph::from_lists([(0, vec![]), (1, vec![2]), (2, vec![1])])?;
/// let g = normalize(g);
///
/// let mut pr = PageRank::new(&g)?;
/// pr.alpha(0.85)?.iterations(20);
/// pr.run();
///
/// assert_eq!(pr.rank().len(), 3);
/// assert!((pr.rank_sum() - 1.0).abs() < 1E-12);
/// assert!(pr.rank()[1] > pr.rank()[0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PageRank<'a> {
    graph: &'a AdjGraph,
    alpha: f64,
    iterations: usize,
    transpose: Option<AdjGraph>,

    rank: Box<[f64]>,
    iteration: usize,
}

impl std::fmt::Debug for PageRank<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRank")
            .field("alpha", &self.alpha)
            .field("iterations", &self.iterations)
            .field("iteration", &self.iteration)
            .finish_non_exhaustive()
    }
}

impl<'a> PageRank<'a> {
    pub const DEFAULT_ALPHA: f64 = 0.85;
    pub const DEFAULT_ITERATIONS: usize = 10;

    /// Creates a new PageRank computation on the given graph.
    ///
    /// The rank vector is initialized to the uniform distribution.
    pub fn new(graph: &'a AdjGraph) -> Result<Self, EmptyGraph> {
        let n = graph.num_nodes();
        if n == 0 {
            return Err(EmptyGraph);
        }
        Ok(Self {
            graph,
            alpha: Self::DEFAULT_ALPHA,
            iterations: Self::DEFAULT_ITERATIONS,
            transpose: None,
            rank: vec![1.0 / n as f64; n].into_boxed_slice(),
            iteration: 0,
        })
    }

    /// Sets the damping factor α, which must be in the open interval
    /// (0 . . 1).
    pub fn alpha(&mut self, alpha: f64) -> Result<&mut Self, ConfigError> {
        // Also rejects NaN
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::DampingFactor(alpha));
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Sets the number of passes performed by [`run`](Self::run).
    pub fn iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Returns the rank vector.
    ///
    /// After calling [`run`](Self::run), this contains the computed PageRank
    /// values.
    pub fn rank(&self) -> &[f64] {
        &self.rank
    }

    /// Consumes the computation and returns the rank vector.
    pub fn into_rank(self) -> Box<[f64]> {
        self.rank
    }

    /// Returns the number of passes performed by the last call to
    /// [`run`](Self::run).
    pub fn iterations_done(&self) -> usize {
        self.iteration
    }

    /// Returns the sum of the rank vector, computed with compensated
    /// summation.
    pub fn rank_sum(&self) -> f64 {
        kahan_sum(&self.rank)
    }

    /// Runs the PageRank computation.
    pub fn run(&mut self) {
        self.run_with_logging(no_logging![]);
    }

    /// Runs the PageRank computation, logging each pass on `pl`.
    ///
    /// The options of `pl` will be preserved, making thus possible to
    /// customize the logs.
    pub fn run_with_logging(&mut self, pl: &mut impl ProgressLog) {
        let n = self.graph.num_nodes();
        let alpha = self.alpha;
        let teleport = (1.0 - alpha) / n as f64;

        log::info!("Alpha: {}", alpha);
        log::info!("Iterations: {}", self.iterations);

        self.iteration = 0;
        self.rank.fill(1.0 / n as f64);

        let graph = self.graph;
        let preds: &AdjGraph = self.transpose.get_or_insert_with(|| transpose(graph));
        let outdegrees = graph.iter().map(|(_, succ)| succ.len()).collect::<Vec<_>>();

        let num_dangling = outdegrees.iter().filter(|&&d| d == 0).count();
        if n > 1 && num_dangling != 0 {
            log::warn!(
                "{} dangling node(s) will keep their rank; patch dangling nodes first to distribute it",
                num_dangling
            );
        }

        let mut next = vec![0.0; n].into_boxed_slice();

        pl.item_name("iteration");
        pl.expected_updates(Some(self.iterations));
        pl.start(format!(
            "Computing PageRank (alpha={alpha}, {} iterations)...",
            self.iterations
        ));

        while self.iteration < self.iterations {
            let prev = &self.rank;
            next.par_iter_mut()
                .with_min_len(RAYON_MIN_LEN)
                .enumerate()
                .for_each(|(p, new_rank)| {
                    let mut sigma = 0.0;
                    for &q in preds.successors(p) {
                        sigma += prev[q] / outdegrees[q] as f64;
                    }
                    if outdegrees[p] == 0 {
                        sigma += prev[p];
                    }
                    *new_rank = teleport + alpha * sigma;
                });

            std::mem::swap(&mut self.rank, &mut next);
            self.iteration += 1;

            log::debug!(
                "Iteration {}: rank sum = {}",
                self.iteration,
                kahan_sum(&self.rank)
            );

            pl.update_and_display();
        }

        pl.done();
    }
}

fn kahan_sum(v: &[f64]) -> f64 {
    v.iter()
        .fold(KahanSum::<f64>::new(), |sum, &x| sum + x)
        .sum()
}

/// Runs `iterations` passes of PageRank with damping factor `alpha` on a
/// graph and returns the rank vector.
///
/// This is a shortcut for configuring and running a [`PageRank`]
/// computation. The graph should have been
/// [normalized](crate::transform::normalize).
pub fn iterate(graph: &AdjGraph, alpha: f64, iterations: usize) -> Result<Box<[f64]>, RankError> {
    let mut pr = PageRank::new(graph)?;
    pr.alpha(alpha)?.iterations(iterations);
    pr.run();
    Ok(pr.into_rank())
}
