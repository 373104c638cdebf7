/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::adj_graph::AdjGraph;

/// Returns the transpose of the provided graph.
///
/// The transpose has the same nodes, all listed, and an arc *y* → *x* for
/// each arc *x* → *y* of the original graph. Since sources are scanned in
/// increasing order, the predecessors of each node come out sorted.
pub fn transpose(graph: &AdjGraph) -> AdjGraph {
    let n = graph.num_nodes();
    let mut indegrees = vec![0usize; n];
    for (_, succ) in graph.iter() {
        for &y in succ {
            indegrees[y] += 1;
        }
    }

    let mut pred: Vec<Vec<usize>> = indegrees.into_iter().map(Vec::with_capacity).collect();
    for (x, succ) in graph.iter() {
        for &y in succ {
            pred[y].push(x);
        }
    }

    let mut t = AdjGraph::empty(n);
    for (y, p) in pred.into_iter().enumerate() {
        t.set_successors(y, p);
    }
    t
}
