/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Directed graphs stored as adjacency lists indexed by node.
//!
//! The textual format read by [`AdjGraph::from_reader`] has one line per
//! listed node: the first whitespace-separated token is the node, the
//! following ones are its successors. For example,
//!
//! ```text
//! 0
//! 1 2
//! 2 1
//! ```
//!
//! describes a graph with three nodes in which node 0 has no successors,
//! node 1 points to node 2, and node 2 points back to node 1. Blank lines and
//! lines starting with `#` are ignored.
//!
//! The number of nodes is the largest identifier seen (as a source or as a
//! target) plus one. Identifiers in this range that are never listed as a
//! source are still nodes: they have no successors, so they are dangling. Use
//! [`AdjGraph::check_complete`] to reject such inputs instead. Inputs whose
//! identifier range is much larger than the number of identifiers they
//! contain are rejected with [`ParseError::SparseIds`].

use anyhow::Context;
use dsi_progress_logger::{no_logging, ProgressLog};
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while building an [`AdjGraph`].
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A token is not a nonnegative integer.
    #[error("Line {line}: {token:?} is not a valid node identifier")]
    InvalidToken {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
    /// The same source node appears on two lines.
    #[error("Line {line}: node {node} has already been listed")]
    DuplicateNode { line: usize, node: usize },
    /// A line lists the same successor twice.
    #[error("Line {line}: node {node} lists successor {target} more than once")]
    DuplicateTarget {
        line: usize,
        node: usize,
        target: usize,
    },
    /// The largest identifier is too large for the number of identifiers
    /// in the input (see [`AdjGraph::MAX_SPARSITY`]).
    #[error(
        "Line {line}: node {node} is out of range for an input mentioning {mentioned} identifiers"
    )]
    SparseIds {
        line: usize,
        node: usize,
        mentioned: usize,
    },
    /// A node in the identifier range never appears as a source.
    #[error("Node {node} is never listed as a source")]
    MissingNode { node: usize },
}

/// A mutable directed graph based on a vector of successor lists.
///
/// Nodes are the integers in `0..num_nodes()`, and successor lists are kept
/// in increasing order without repetitions. Besides successors, the graph
/// remembers which nodes were explicitly listed when it was built, so that
/// nodes implied only by the identifier range can be told apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors.
    succ: Vec<Vec<usize>>,
    /// For each node, whether it was listed as a source.
    listed: Vec<bool>,
}

impl AdjGraph {
    /// The largest accepted ratio between the number of nodes and the number
    /// of identifiers occurring in the input (listed nodes plus arcs).
    ///
    /// Nodes are stored densely, and dangling nodes are later linked to all
    /// other nodes, so a few very large identifiers would otherwise allocate
    /// an unbounded amount of memory.
    pub const MAX_SPARSITY: usize = 16;

    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with `n` listed nodes and no arcs.
    pub fn empty(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: vec![Vec::new(); n],
            listed: vec![true; n],
        }
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of arcs.
    #[inline(always)]
    pub fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    /// Returns the successors of `node` in increasing order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not smaller than the number of nodes.
    #[inline(always)]
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }

    /// Returns the number of successors of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not smaller than the number of nodes.
    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    /// Returns an iterator over pairs made of a node and its successors, in
    /// increasing node order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &[usize])> + '_ {
        self.succ.iter().map(Vec::as_slice).enumerate()
    }

    /// Adds an isolated, unlisted node to the graph (and all nodes before it
    /// that are missing) and returns true if it is a new node.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        self.listed.resize(self.succ.len(), false);
        len <= node
    }

    /// Replaces the successors of `node`.
    ///
    /// Successors can be given in any order; repetitions are removed.
    ///
    /// # Panics
    ///
    /// Panics if `node` or one of the successors is not smaller than the
    /// number of nodes.
    pub fn set_successors(&mut self, node: usize, succ: impl IntoIterator<Item = usize>) {
        let n = self.num_nodes();
        assert!(
            node < n,
            "Node {node} does not exist (the graph has {n} nodes)"
        );
        let mut succ = succ.into_iter().collect::<Vec<_>>();
        succ.sort_unstable();
        succ.dedup();
        if let Some(&last) = succ.last() {
            assert!(
                last < n,
                "Node {last} does not exist (the graph has {n} nodes)"
            );
        }
        self.num_arcs -= self.succ[node].len() as u64;
        self.num_arcs += succ.len() as u64;
        self.succ[node] = succ;
    }

    /// Returns whether `node` was listed as a source when the graph was built.
    pub fn is_listed(&self, node: usize) -> bool {
        self.listed.get(node).copied().unwrap_or(false)
    }

    /// Returns the number of nodes listed as a source.
    pub fn num_listed(&self) -> usize {
        self.listed.iter().filter(|&&l| l).count()
    }

    /// Returns an iterator over the nodes that exist only because they are
    /// in the identifier range, in increasing order.
    pub fn implicit_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.listed
            .iter()
            .enumerate()
            .filter(|&(_, &l)| !l)
            .map(|(node, _)| node)
    }

    /// Checks that every node was listed as a source.
    pub fn check_complete(&self) -> Result<(), ParseError> {
        match self.implicit_nodes().next() {
            Some(node) => Err(ParseError::MissingNode { node }),
            None => Ok(()),
        }
    }

    /// Creates a graph from pairs made of a node and its successors.
    ///
    /// Errors refer to the position of the pair (starting from one) as the
    /// line.
    pub fn from_lists<I, S>(lists: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: IntoIterator<Item = usize>,
    {
        let mut parsed = ParsedLists::default();
        for (i, (node, succ)) in lists.into_iter().enumerate() {
            parsed.push(i + 1, node, succ.into_iter().collect())?;
        }
        parsed.build()
    }

    /// Reads a graph in the textual format described in the
    /// [module documentation](self).
    pub fn from_reader(reader: impl BufRead) -> Result<Self, ParseError> {
        Self::from_reader_with_logging(reader, no_logging![])
    }

    /// Reads a graph in the textual format described in the
    /// [module documentation](self), logging progress on `pl`.
    pub fn from_reader_with_logging(
        reader: impl BufRead,
        pl: &mut impl ProgressLog,
    ) -> Result<Self, ParseError> {
        let mut parsed = ParsedLists::default();

        pl.item_name("line");
        pl.expected_updates(None);
        pl.start("Reading adjacency lists...");

        for (i, line) in reader.lines().enumerate() {
            let line_num = i + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line
                .split_whitespace()
                .map(|token| parse_node(line_num, token));
            let Some(node) = tokens.next() else {
                continue;
            };
            let node = node?;
            let succ = tokens.collect::<Result<Vec<_>, _>>()?;
            parsed.push(line_num, node, succ)?;
            pl.light_update();
        }

        pl.done();

        let g = parsed.build()?;

        log::info!(
            "Read {} nodes ({} listed) and {} arcs",
            g.num_nodes(),
            g.num_listed(),
            g.num_arcs()
        );
        let num_implicit = g.num_nodes() - g.num_listed();
        if num_implicit != 0 {
            log::warn!(
                "{} node(s) in the identifier range are never listed as a source and will be treated as dangling",
                num_implicit
            );
        }

        Ok(g)
    }

    /// Reads a graph from the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::from_path_with_logging(path, no_logging![])
    }

    /// Reads a graph from the file at `path`, logging progress on `pl`.
    pub fn from_path_with_logging(
        path: impl AsRef<Path>,
        pl: &mut impl ProgressLog,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::info!("Loading the graph from {}", path.display());
        let file = std::fs::File::open(path)
            .with_context(|| format!("Could not open {}", path.display()))?;
        Self::from_reader_with_logging(BufReader::new(file), pl)
            .with_context(|| format!("Could not read the adjacency lists in {}", path.display()))
    }
}

/// Adjacency lists as read, before the graph is allocated.
///
/// The identifier range is known only at the end of the input, so density
/// is checked once all lists have been read.
#[derive(Default)]
struct ParsedLists {
    lists: Vec<(usize, usize, Vec<usize>)>,
    num_arcs: usize,
    /// The largest identifier seen, with the line where it first appears.
    max: Option<(usize, usize)>,
}

impl ParsedLists {
    fn push(&mut self, line: usize, node: usize, mut succ: Vec<usize>) -> Result<(), ParseError> {
        succ.sort_unstable();
        if let Some(w) = succ.windows(2).find(|w| w[0] == w[1]) {
            return Err(ParseError::DuplicateTarget {
                line,
                node,
                target: w[0],
            });
        }

        let max = succ.last().map_or(node, |&last| last.max(node));
        if self.max.map_or(true, |(m, _)| max > m) {
            self.max = Some((max, line));
        }
        self.num_arcs += succ.len();
        self.lists.push((line, node, succ));
        Ok(())
    }

    fn build(self) -> Result<AdjGraph, ParseError> {
        let Some((max, line)) = self.max else {
            return Ok(AdjGraph::new());
        };

        let mentioned = self.lists.len() + self.num_arcs;
        if max >= AdjGraph::MAX_SPARSITY.saturating_mul(mentioned) {
            return Err(ParseError::SparseIds {
                line,
                node: max,
                mentioned,
            });
        }

        let n = max + 1;
        let mut g = AdjGraph {
            num_arcs: self.num_arcs as u64,
            succ: vec![Vec::new(); n],
            listed: vec![false; n],
        };
        for (line, node, succ) in self.lists {
            if g.listed[node] {
                return Err(ParseError::DuplicateNode { line, node });
            }
            g.listed[node] = true;
            g.succ[node] = succ;
        }
        Ok(g)
    }
}

fn parse_node(line: usize, token: &str) -> Result<usize, ParseError> {
    token
        .parse::<usize>()
        .map_err(|source| ParseError::InvalidToken {
            line,
            token: token.to_owned(),
            source,
        })
}
