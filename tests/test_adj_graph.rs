/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::progress_logger;
use seqrank::graphs::adj_graph::{AdjGraph, ParseError};

#[test]
fn test_read() -> Result<()> {
    let g = AdjGraph::from_reader("0\n1 2\n2 1\n".as_bytes())?;
    assert_eq!(g.num_nodes(), 3);
    assert_eq!(g.num_arcs(), 2);
    assert_eq!(g.num_listed(), 3);
    assert!(g.successors(0).is_empty());
    assert_eq!(g.successors(1), &[2]);
    assert_eq!(g.successors(2), &[1]);
    g.check_complete()?;
    Ok(())
}

#[test]
fn test_unsorted_lines_and_successors() -> Result<()> {
    let g = AdjGraph::from_reader("3 2 0 1\n1 3\n0\n2 3 0\n".as_bytes())?;
    assert_eq!(g.num_nodes(), 4);
    assert_eq!(g.num_arcs(), 6);
    assert_eq!(g.successors(3), &[0, 1, 2]);
    assert_eq!(g.successors(2), &[0, 3]);
    assert_eq!(g.outdegree(0), 0);
    let pairs = g.iter().map(|(x, s)| (x, s.len())).collect::<Vec<_>>();
    assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    Ok(())
}

#[test]
fn test_whitespace_comments_and_blank_lines() -> Result<()> {
    let g = AdjGraph::from_reader("# a comment\n\n  0 \t 1  \n\n1\t0\n   \n".as_bytes())?;
    assert_eq!(g.num_nodes(), 2);
    assert_eq!(g.successors(0), &[1]);
    assert_eq!(g.successors(1), &[0]);
    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    let g = AdjGraph::from_reader("".as_bytes())?;
    assert_eq!(g.num_nodes(), 0);
    assert_eq!(g.num_arcs(), 0);
    Ok(())
}

#[test]
fn test_implicit_nodes() -> Result<()> {
    // Node 3 appears only as a target, nodes 1 and 2 not at all
    let g = AdjGraph::from_reader("0 3\n".as_bytes())?;
    assert_eq!(g.num_nodes(), 4);
    assert_eq!(g.num_listed(), 1);
    assert!(g.is_listed(0));
    assert!(!g.is_listed(3));
    assert!(!g.is_listed(100));
    assert_eq!(g.implicit_nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(g.successors(3).is_empty());
    assert!(matches!(
        g.check_complete(),
        Err(ParseError::MissingNode { node: 1 })
    ));
    Ok(())
}

#[test]
fn test_invalid_token() {
    let err = AdjGraph::from_reader("0 1\n1 x\n".as_bytes()).unwrap_err();
    match err {
        ParseError::InvalidToken { line, token, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "x");
        }
        e => panic!("Unexpected error: {e}"),
    }

    assert!(matches!(
        AdjGraph::from_reader("0 -1\n".as_bytes()),
        Err(ParseError::InvalidToken { line: 1, .. })
    ));
    assert!(matches!(
        AdjGraph::from_reader("1.5 0\n".as_bytes()),
        Err(ParseError::InvalidToken { line: 1, .. })
    ));
}

#[test]
fn test_duplicate_node() {
    // Comment and blank lines still count for line numbers
    let err = AdjGraph::from_reader("# header\n0 1\n\n0 2\n".as_bytes()).unwrap_err();
    assert!(
        matches!(err, ParseError::DuplicateNode { line: 4, node: 0 }),
        "Unexpected error: {err}"
    );
}

#[test]
fn test_duplicate_target() {
    let err = AdjGraph::from_reader("0 2 1 2\n".as_bytes()).unwrap_err();
    assert!(
        matches!(
            err,
            ParseError::DuplicateTarget {
                line: 1,
                node: 0,
                target: 2
            }
        ),
        "Unexpected error: {err}"
    );
}

#[test]
fn test_sparse_ids() {
    let err = AdjGraph::from_reader("0 18446744073709551615\n".as_bytes()).unwrap_err();
    assert!(
        matches!(
            err,
            ParseError::SparseIds {
                line: 1,
                node: usize::MAX,
                mentioned: 2
            }
        ),
        "Unexpected error: {err}"
    );

    let err = AdjGraph::from_reader("0 1\n1 0\n# gap\n2 1000000000\n".as_bytes()).unwrap_err();
    assert!(
        matches!(
            err,
            ParseError::SparseIds {
                line: 4,
                node: 1_000_000_000,
                ..
            }
        ),
        "Unexpected error: {err}"
    );

    // Two identifiers allow a range of 2 * MAX_SPARSITY nodes
    let limit = 2 * AdjGraph::MAX_SPARSITY;
    let g = AdjGraph::from_reader(format!("0 {}\n", limit - 1).as_bytes()).unwrap();
    assert_eq!(g.num_nodes(), limit);
    assert!(matches!(
        AdjGraph::from_reader(format!("0 {limit}\n").as_bytes()),
        Err(ParseError::SparseIds { .. })
    ));
    assert!(matches!(
        AdjGraph::from_lists([(usize::MAX, vec![])]),
        Err(ParseError::SparseIds { line: 1, .. })
    ));
}

#[test]
fn test_descending_order() -> Result<()> {
    // The largest identifier comes first, before the lines that justify it
    let input = (0..1000)
        .rev()
        .map(|x| format!("{x} {}\n", (x + 1) % 1000))
        .collect::<String>();
    let g = AdjGraph::from_reader(input.as_bytes())?;
    assert_eq!(g.num_nodes(), 1000);
    assert_eq!(g.num_arcs(), 1000);
    g.check_complete()?;
    Ok(())
}

#[test]
fn test_from_lists() -> Result<()> {
    let g = AdjGraph::from_lists([(2, vec![0]), (0, vec![1, 2]), (1, vec![])])?;
    assert_eq!(g.num_nodes(), 3);
    assert_eq!(g.num_arcs(), 3);
    assert_eq!(g.successors(0), &[1, 2]);

    assert!(matches!(
        AdjGraph::from_lists([(0, vec![1]), (0, vec![])]),
        Err(ParseError::DuplicateNode { line: 2, node: 0 })
    ));
    Ok(())
}

#[test]
fn test_set_successors() {
    let mut g = AdjGraph::empty(4);
    g.set_successors(1, [3, 0, 3, 2]);
    assert_eq!(g.successors(1), &[0, 2, 3]);
    assert_eq!(g.num_arcs(), 3);
    g.set_successors(1, [2]);
    assert_eq!(g.num_arcs(), 1);
}

#[test]
#[should_panic]
fn test_set_successors_out_of_range() {
    let mut g = AdjGraph::empty(2);
    g.set_successors(0, [2]);
}

#[test]
fn test_add_node() {
    let mut g = AdjGraph::new();
    assert!(g.add_node(2));
    assert!(!g.add_node(1));
    assert_eq!(g.num_nodes(), 3);
    assert_eq!(g.num_listed(), 0);
}

#[test]
fn test_from_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("graph.txt");
    std::fs::write(&path, "0 1\n1 0\n")?;
    let g = AdjGraph::from_path(&path)?;
    assert_eq!(g.num_nodes(), 2);

    let mut pl = progress_logger![];
    let h = AdjGraph::from_path_with_logging(&path, &mut pl)?;
    assert_eq!(g, h);

    assert!(AdjGraph::from_path(dir.path().join("missing.txt")).is_err());
    Ok(())
}
