/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Output of rank vectors.
//!
//! Rank vectors can be [stored](RankFormat::store) in several formats, and
//! the nodes of highest rank can be [previewed](write_preview) for human
//! consumption. Node ranking is performed by [`top_k`], which breaks ties by
//! increasing node identifier.

use anyhow::{Context, Result};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Returns the `k` nodes of highest rank, with their rank, in decreasing
/// rank order.
///
/// Nodes with the same rank appear in increasing order. If `k` is larger
/// than the number of nodes, all nodes are returned.
pub fn top_k(rank: &[f64], k: usize) -> Vec<(usize, f64)> {
    let cmp = |&x: &usize, &y: &usize| rank[y].total_cmp(&rank[x]).then(x.cmp(&y));
    let mut nodes = (0..rank.len()).collect::<Vec<_>>();
    if k < nodes.len() {
        nodes.select_nth_unstable_by(k, cmp);
        nodes.truncate(k);
    }
    nodes.sort_unstable_by(cmp);
    nodes.into_iter().map(|x| (x, rank[x])).collect()
}

/// Writes a summary of a rank vector: the number of iterations that produced
/// it, followed by the `k` nodes of highest rank as ordered by [`top_k`].
///
/// ```text
/// Number of iterations: 10
/// Page 2	PageRank: 0.4358...
/// Page 1	PageRank: 0.4358...
/// ```
pub fn write_preview(
    mut writer: impl Write,
    rank: &[f64],
    k: usize,
    iterations: usize,
) -> std::io::Result<()> {
    let mut buf = zmij::Buffer::new();
    writeln!(writer, "Number of iterations: {iterations}")?;
    for (node, r) in top_k(rank, k) {
        writeln!(writer, "Page {node}\tPageRank: {}", buf.format(r))?;
    }
    Ok(())
}

/// Formats for storing rank vectors.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankFormat {
    /// One line per node, in increasing node order, containing the node and
    /// its rank separated by a TAB.
    #[default]
    Tsv,
    /// ASCII format, one rank per line.
    Ascii,
    /// A JSON Array.
    Json,
    /// Java-compatible format: a sequence of big-endian doubles.
    Java,
}

impl std::fmt::Display for RankFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankFormat::Tsv => f.write_str("TSV"),
            RankFormat::Ascii => f.write_str("ASCII"),
            RankFormat::Json => f.write_str("JSON"),
            RankFormat::Java => f.write_str("Java"),
        }
    }
}

impl RankFormat {
    /// Writes a rank vector using the format defined by `self`.
    ///
    /// If the format is textual, that is, TSV, ASCII, or JSON, `precision`
    /// will be used to truncate the values to the specified number of
    /// decimal digits. If `None`, [zmij](https://crates.io/crates/zmij)
    /// formatting will be used.
    pub fn write(
        &self,
        mut writer: impl Write,
        rank: &[f64],
        precision: Option<usize>,
    ) -> std::io::Result<()> {
        let mut buf = zmij::Buffer::new();
        let mut fmt = |x: f64| match precision {
            None => buf.format(x).to_owned(),
            Some(precision) => format!("{x:.precision$}"),
        };

        match self {
            RankFormat::Tsv => {
                for (node, &r) in rank.iter().enumerate() {
                    writeln!(writer, "{node}\t{}", fmt(r))?;
                }
            }
            RankFormat::Ascii => {
                for &r in rank {
                    writeln!(writer, "{}", fmt(r))?;
                }
            }
            RankFormat::Json => {
                write!(writer, "[")?;
                for &r in rank.iter().take(rank.len().saturating_sub(1)) {
                    write!(writer, "{}, ", fmt(r))?;
                }
                if let Some(&last) = rank.last() {
                    write!(writer, "{}", fmt(last))?;
                }
                write!(writer, "]")?;
            }
            RankFormat::Java => {
                for &r in rank {
                    writer.write_all(&r.to_be_bytes())?;
                }
            }
        }

        writer.flush()
    }

    /// Stores a rank vector in the specified `path` using the format defined
    /// by `self`, creating parent directories as needed.
    ///
    /// See [`write`](Self::write) for the meaning of `precision`.
    pub fn store(
        &self,
        path: impl AsRef<Path>,
        rank: &[f64],
        precision: Option<usize>,
    ) -> Result<()> {
        create_parent_dir(&path)?;
        let path_display = path.as_ref().display();
        let file = std::fs::File::create(&path)
            .with_context(|| format!("Could not create rank vector at {}", path_display))?;

        log::info!("Storing in {} format at {}", self, path_display);
        self.write(BufWriter::new(file), rank, precision)
            .with_context(|| format!("Could not write rank vector to {}", path_display))
    }
}

/// Creates all parent directories of the given file path.
pub fn create_parent_dir(file_path: impl AsRef<Path>) -> Result<()> {
    if let Some(parent_dir) = file_path.as_ref().parent() {
        std::fs::create_dir_all(parent_dir).with_context(|| {
            format!(
                "Failed to create the directory {:?}",
                parent_dir.to_string_lossy()
            )
        })?;
    }
    Ok(())
}
