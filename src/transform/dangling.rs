/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::adj_graph::AdjGraph;
use dsi_progress_logger::{no_logging, ProgressLog};

/// Returns the dangling nodes of a graph (nodes without successors), in
/// increasing order.
pub fn dangling_nodes(graph: &AdjGraph) -> Vec<usize> {
    graph
        .iter()
        .filter(|(_, succ)| succ.is_empty())
        .map(|(node, _)| node)
        .collect()
}

/// Links every dangling node to all other nodes and returns the number of
/// patched nodes.
///
/// After the call, no node has an empty successor list, except for the only
/// node of a one-node graph, which has no other node to link to. Calling this
/// function again is thus a no-op.
pub fn patch_dangling(graph: &mut AdjGraph) -> usize {
    patch_dangling_with_logging(graph, no_logging![])
}

/// Same as [`patch_dangling`], logging progress on `pl`.
pub fn patch_dangling_with_logging(graph: &mut AdjGraph, pl: &mut impl ProgressLog) -> usize {
    let n = graph.num_nodes();
    let dangling = dangling_nodes(graph);
    if n < 2 || dangling.is_empty() {
        log::info!("{} dangling node(s), nothing to patch", dangling.len());
        return 0;
    }

    pl.item_name("node");
    pl.expected_updates(Some(dangling.len()));
    pl.start("Patching dangling nodes...");
    for &node in &dangling {
        graph.set_successors(node, (0..n).filter(|&other| other != node));
        pl.light_update();
    }
    pl.done();

    log::info!(
        "Patched {} dangling node(s); the graph now has {} arcs",
        dangling.len(),
        graph.num_arcs()
    );
    dangling.len()
}

/// Links every dangling node to all other nodes, taking and returning the
/// graph by value.
///
/// See [`patch_dangling`].
pub fn normalize(mut graph: AdjGraph) -> AdjGraph {
    patch_dangling(&mut graph);
    graph
}
