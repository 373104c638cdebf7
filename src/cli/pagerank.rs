/*
 * SPDX-FileCopyrightText: 2026 seqrank authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{damping_factor_parser, get_thread_pool, iterations_parser, GlobalArgs, NumThreadsArg};
use crate::graphs::adj_graph::AdjGraph;
use crate::rank::PageRank;
use crate::report::{write_preview, RankFormat};
use crate::transform::patch_dangling_with_logging;
use anyhow::{Context, Result};
use clap::Parser;
use dsi_progress_logger::{progress_logger, ProgressLog};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pagerank",
    about = "Compute PageRank with a fixed number of power-iteration passes.",
    long_about = "Compute PageRank with a fixed number of power-iteration passes. The graph is read as adjacency lists, one line per node: the node followed by its successors, separated by whitespace. Dangling nodes are linked to all other nodes before iterating. The rank vector is stored in the output file, and the nodes of highest rank are printed on standard output."
)]
pub struct CliArgs {
    /// The adjacency lists of the graph; if missing, they are read from
    /// standard input.
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    /// Where to store the rank vector.
    pub output: PathBuf,

    #[arg(short, long, allow_negative_numbers = true, default_value_t = PageRank::DEFAULT_ITERATIONS, value_parser = iterations_parser)]
    /// The number of power-iteration passes.
    pub iterations: usize,

    #[arg(short, long, allow_negative_numbers = true, default_value_t = PageRank::DEFAULT_ALPHA, value_parser = damping_factor_parser)]
    /// The damping factor α (must be in the interval (0 . . 1)).
    pub alpha: f64,

    #[arg(long, default_value_t = 10)]
    /// How many nodes of highest rank to print on standard output.
    pub top: usize,

    #[arg(long, value_enum, default_value_t = RankFormat::Tsv)]
    /// The output format for the rank vector.
    pub fmt: RankFormat,

    #[arg(long)]
    /// Decimal digits for text output formats.
    pub precision: Option<usize>,

    #[arg(long)]
    /// Fail if some node in the identifier range is never listed as a source,
    /// instead of treating it as dangling.
    pub strict: bool,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let mut pl = progress_logger![];
    pl.display_memory(true);
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let thread_pool = get_thread_pool(args.num_threads.num_threads)?;

    let mut graph = match &args.input {
        Some(path) => AdjGraph::from_path_with_logging(path, &mut pl)?,
        None => {
            log::info!("Loading the graph from standard input");
            AdjGraph::from_reader_with_logging(std::io::stdin().lock(), &mut pl)
                .context("Could not read the adjacency lists from standard input")?
        }
    };

    if args.strict {
        graph.check_complete()?;
    }

    patch_dangling_with_logging(&mut graph, &mut pl);

    let mut pr = PageRank::new(&graph)?;
    pr.alpha(args.alpha)?.iterations(args.iterations);

    thread_pool.install(|| pr.run_with_logging(&mut pl));

    log::info!(
        "Completed {} iteration(s), rank sum = {}",
        pr.iterations_done(),
        pr.rank_sum()
    );

    args.fmt.store(&args.output, pr.rank(), args.precision)?;

    write_preview(
        std::io::stdout().lock(),
        pr.rank(),
        args.top,
        pr.iterations_done(),
    )
    .context("Could not print the nodes of highest rank")?;

    Ok(())
}
