/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use seqrank::report::{top_k, write_preview, RankFormat};

#[test]
fn test_top_k() {
    let rank = [0.2, 0.3, 0.3, 0.2];
    assert_eq!(top_k(&rank, 3), vec![(1, 0.3), (2, 0.3), (0, 0.2)]);
    assert_eq!(
        top_k(&rank, 10),
        vec![(1, 0.3), (2, 0.3), (0, 0.2), (3, 0.2)]
    );
    assert!(top_k(&rank, 0).is_empty());
    assert!(top_k(&[], 5).is_empty());
}

#[test]
fn test_preview() -> Result<()> {
    let rank = [0.05, 0.475, 0.475];
    let mut out = Vec::new();
    write_preview(&mut out, &rank, 2, 1)?;
    let out = String::from_utf8(out)?;
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Number of iterations: 1"));
    let mut nodes = vec![];
    for line in lines {
        let (page, value) = line.split_once('\t').unwrap();
        let node = page.strip_prefix("Page ").unwrap().parse::<usize>()?;
        let value = value.strip_prefix("PageRank: ").unwrap().parse::<f64>()?;
        assert_eq!(value, rank[node]);
        nodes.push(node);
    }
    assert_eq!(nodes, vec![1, 2]);
    Ok(())
}

#[test]
fn test_tsv() -> Result<()> {
    let mut out = Vec::new();
    RankFormat::Tsv.write(&mut out, &[0.25, 0.5, 0.25], Some(2))?;
    assert_eq!(String::from_utf8(out)?, "0\t0.25\n1\t0.50\n2\t0.25\n");

    let rank = [0.1, 1.0 / 3.0];
    let mut out = Vec::new();
    RankFormat::Tsv.write(&mut out, &rank, None)?;
    let parsed = String::from_utf8(out)?
        .lines()
        .map(|line| line.split_once('\t').unwrap().1.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(parsed, rank);
    Ok(())
}

#[test]
fn test_ascii() -> Result<()> {
    let mut out = Vec::new();
    RankFormat::Ascii.write(&mut out, &[0.125, 0.875], Some(3))?;
    assert_eq!(String::from_utf8(out)?, "0.125\n0.875\n");
    Ok(())
}

#[test]
fn test_json() -> Result<()> {
    let rank = [0.05, 0.475, 0.475];
    let mut out = Vec::new();
    RankFormat::Json.write(&mut out, &rank, None)?;
    let parsed: Vec<f64> = serde_json::from_slice(&out)?;
    assert_eq!(parsed, rank);

    let mut out = Vec::new();
    RankFormat::Json.write(&mut out, &[], None)?;
    let parsed: Vec<f64> = serde_json::from_slice(&out)?;
    assert!(parsed.is_empty());
    Ok(())
}

#[test]
fn test_java() -> Result<()> {
    let rank = [0.5, 0.25];
    let mut out = Vec::new();
    RankFormat::Java.write(&mut out, &rank, Some(1))?;
    assert_eq!(out.len(), 16);
    let values = out
        .chunks_exact(8)
        .map(|c| f64::from_be_bytes(c.try_into().unwrap()))
        .collect::<Vec<_>>();
    assert_eq!(values, rank);
    Ok(())
}

#[test]
fn test_store() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("dir").join("rank.tsv");
    RankFormat::Tsv.store(&path, &[1.0], Some(1))?;
    assert_eq!(std::fs::read_to_string(&path)?, "0\t1.0\n");
    Ok(())
}
