use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use ::log::{LevelFilter, info};
use anyhow::Context;
use glob::glob;
use lsa::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lsa",
    about = "Estimates the k-bounded arboricity of graphs given as edge lists"
)]
struct Opts {
    /// Edge list files or glob patterns; reads from stdin if none are given
    inputs: Vec<String>,

    /// JSON file with the base analysis configuration; flags below override it
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Largest k to report
    #[structopt(short = "k", long)]
    max_k: Option<NumNodes>,

    /// Skip the exact oracle even for small graphs
    #[structopt(long)]
    no_exact: bool,

    /// Run the exact oracle on all cores
    #[structopt(short, long)]
    parallel_exact: bool,

    /// Analyse only the largest connected component of each graph
    #[structopt(short, long)]
    largest_component: bool,

    /// Embed the removal record and the density witnesses, both with input ids, into JSON
    /// reports
    #[structopt(short = "r", long)]
    include_record: bool,

    /// Write `k,dk,alpha_approx,alpha_exact` lines instead of JSON; each graph is
    /// introduced by a `# name` line
    #[structopt(long)]
    csv: bool,

    /// Output file; stdout if omitted
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

impl Opts {
    fn analysis_config(&self) -> anyhow::Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)
                .with_context(|| format!("Cannot load config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };

        if self.max_k.is_some() {
            config.max_k = self.max_k;
        }
        config.exact &= !self.no_exact;
        config.parallel_exact |= self.parallel_exact;
        config.largest_component |= self.largest_component;
        config.include_record |= self.include_record;

        Ok(config)
    }

    fn input_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for input in &self.inputs {
            if !input.contains(['*', '?', '[']) {
                files.push(PathBuf::from(input));
                continue;
            }

            let before = files.len();
            for entry in glob(input).with_context(|| format!("Invalid pattern {input}"))? {
                files.push(entry?);
            }
            anyhow::ensure!(files.len() > before, "Pattern {input} matches no file");
        }
        Ok(files)
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let config = opts.analysis_config()?;
    let files = opts.input_files()?;

    let reports = if files.is_empty() {
        info!("Reading edge list from stdin");
        let (graph, mapper) = CsrGraph::try_read_edgelist(std::io::stdin().lock())?;
        vec![GraphAnalysis::with_mapper("stdin", &graph, &mapper, &config)]
    } else {
        files
            .iter()
            .map(|file| -> anyhow::Result<GraphAnalysis> {
                let (graph, mapper) = CsrGraph::try_read_edgelist_file(file)
                    .with_context(|| format!("Cannot read {}", file.display()))?;
                Ok(GraphAnalysis::with_mapper(
                    &file.display().to_string(),
                    &graph,
                    &mapper,
                    &config,
                ))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    for report in &reports {
        info!(
            "{}: n={} m={} degeneracy={} arboricity>={}",
            report.name,
            report.number_of_nodes,
            report.number_of_edges,
            report.degeneracy,
            report.arboricity_bound
        );
    }

    let mut writer: BufWriter<Box<dyn Write>> = match &opts.output {
        Some(path) => BufWriter::new(Box::new(File::create(path)?) as Box<dyn Write>),
        None => BufWriter::new(Box::new(std::io::stdout().lock()) as Box<dyn Write>),
    };

    if opts.csv {
        writeln!(writer, "{CSV_HEADER}")?;
        for report in &reports {
            writeln!(writer, "# {}", report.name)?;
            report.try_write_csv(&mut writer, false)?;
        }
    } else if let [report] = reports.as_slice() {
        report.try_write_json(&mut writer)?;
    } else {
        try_write_json_reports(&mut writer, &reports)?;
    }

    writer.flush()?;
    Ok(())
}
