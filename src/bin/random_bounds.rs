use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
};

use ::log::{LevelFilter, info, warn};
use itertools::Itertools;
use lsa::{log::build_logger_for_verbosity, prelude::*};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use rayon::prelude::*;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "random_bounds",
    about = "Compares both estimates with exact values on random G(n,p) graphs"
)]
struct Opts {
    /// Number of graphs per combination of node count and average degree
    #[structopt(short, long, default_value = "1000")]
    repeats: u64,

    #[structopt(short, long, use_delimiter = true, default_value = "8,10,12,14")]
    nodes: Vec<NumNodes>,

    #[structopt(short = "d", long, use_delimiter = true, default_value = "2,4,6")]
    avg_deg: Vec<f64>,

    #[structopt(short, long, default_value = "1")]
    seed: u64,

    /// Write graphs on which a bound is violated as edge lists
    #[structopt(short = "w", long)]
    write: bool,

    #[structopt(long, parse(from_os_str), default_value = "instances/violations")]
    output_dir: PathBuf,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

#[derive(Clone, Default)]
struct Statistics {
    degree: RatioStatistics,
    density: RatioStatistics,
    violating_graphs: u64,
}

impl Statistics {
    fn merge(mut self, other: Self) -> Self {
        self.degree.merge(&other.degree);
        self.density.merge(&other.density);
        self.violating_graphs += other.violating_graphs;
        self
    }
}

fn process_instance(
    opts: &Opts,
    index: u64,
    n: NumNodes,
    avg_deg: f64,
) -> anyhow::Result<Statistics> {
    let mut rng = Pcg64::seed_from_u64(opts.seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ index);
    let p = (avg_deg / (n - 1) as f64).min(1.0);
    let graph = CsrGraph::random_gnp(&mut rng, n, p);

    let record = elimination_order(&graph);
    let exact = ExactOracle::try_new(&graph)?.alpha_curve();

    let degree: RatioStatistics = degree_curve(&record)
        .into_iter()
        .zip(&exact)
        .map(|(dk, &alpha)| verify(dk, alpha))
        .collect();

    let density: RatioStatistics = density_curve(&record)
        .into_iter()
        .zip(&exact)
        .map(|(approx, &alpha)| verify(approx, alpha))
        .collect();

    // only the lower bound is guaranteed for the degree curve
    let violated = degree.lower_violations > 0 || density.violations() > 0;
    if violated {
        warn!(
            "Instance {index} (n={n}, m={}) violates a bound",
            graph.number_of_edges()
        );

        if opts.write {
            let path = opts.output_dir.join(format!(
                "n{n:>03}_m{:>04}_i{index}.txt",
                graph.number_of_edges()
            ));
            graph.try_write_edgelist_file(&path)?;
        }
    }

    Ok(Statistics {
        degree,
        density,
        violating_graphs: violated as u64,
    })
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    anyhow::ensure!(
        opts.nodes
            .iter()
            .all(|&n| (2..=EXACT_NODE_LIMIT).contains(&n)),
        "Node counts have to be in 2..={EXACT_NODE_LIMIT}"
    );

    if opts.write {
        std::fs::create_dir_all(&opts.output_dir)?;
    }

    let params = opts
        .nodes
        .iter()
        .copied()
        .cartesian_product(opts.avg_deg.iter().copied())
        .collect_vec();

    anyhow::ensure!(!params.is_empty(), "No parameters given");

    let total_instances = opts.repeats * params.len() as u64;
    info!("Processing {total_instances} instances");

    let completed = AtomicU64::new(0);

    let stats = (0..total_instances)
        .into_par_iter()
        .map(|index| -> anyhow::Result<Statistics> {
            let (n, avg_deg) = params[(index % params.len() as u64) as usize];
            let stats = process_instance(&opts, index, n, avg_deg)?;

            let counter = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if counter % 10000 == 0 {
                info!("Completed {counter:>8} of {total_instances:>8}");
            }

            Ok(stats)
        })
        .try_reduce(Statistics::default, |a, b| Ok(a.merge(b)))?;

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "instances": total_instances,
            "violating_graphs": stats.violating_graphs,
            "degree_curve": stats.degree,
            "density_curve": stats.density,
        }))?
    );

    Ok(())
}
