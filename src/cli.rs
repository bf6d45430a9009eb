//! Command-line interface: load a recording, filter one channel, export it

use anyhow::{bail, Context};
use clap::Parser;
use hampel_filter::{
    FilterParameters, FilterResult, HampelFilter, NullOutlierVisualizer, OutlierFilter,
    OutlierReport, OutlierVisualizer, DEFAULT_HISTOGRAM_BINS, DEFAULT_THRESHOLD,
    DEFAULT_WINDOW_SIZE,
};
use hampel_io::{default_output_path, read_signal_table, write_signal_table_to_path, SignalTable};
use hampel_viz::SvgOutlierVisualizer;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Hampel-filter outlier removal for recorded waveforms
#[derive(Parser, Debug, Clone)]
#[command(name = "hampel-ecg")]
#[command(author, version, about = "Detect and replace outliers in recorded waveforms")]
pub struct Cli {
    /// Whitespace-delimited recording, one row per sample
    pub input: PathBuf,

    /// Samples in the sliding window
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    /// Multiplier on the scaled MAD above which a sample is an outlier
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Outlier max value; recorded with the run but not applied
    #[arg(long, allow_negative_numbers = true)]
    pub max_delta: Option<f64>,

    /// Channel to filter (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub channel: usize,

    /// Output file [default: <input stem>_filtered.ecg next to the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip writing the cleaned table
    #[arg(long)]
    pub no_export: bool,

    /// Directory for SVG charts of the run
    #[arg(long)]
    pub plot_dir: Option<PathBuf>,

    /// Bins in the deviation histogram
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub histogram_bins: usize,

    /// Print a per-outlier table
    #[arg(long)]
    pub report: bool,

    /// Don't print the list of outlier indices
    #[arg(short, long)]
    pub quiet: bool,
}

/// What a run produced
#[derive(Debug)]
pub struct RunOutcome {
    pub table: SignalTable,
    pub result: FilterResult,
    pub report: OutlierReport,
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Filter parameters from the flags
    pub fn parameters(&self) -> anyhow::Result<FilterParameters> {
        FilterParameters::builder()
            .window_size(self.window_size)
            .threshold(self.threshold)
            .maybe_max_delta(self.max_delta)
            .build()
            .context("invalid filter parameters")
    }

    /// Chart file prefix: `<plot dir>/<input stem>`
    fn plot_prefix(&self, dir: &Path) -> PathBuf {
        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "signal".to_string());
        dir.join(stem)
    }
}

fn run_filter<V: OutlierVisualizer>(
    params: FilterParameters,
    signal: &[f64],
    visualizer: V,
) -> anyhow::Result<FilterResult> {
    let filter = HampelFilter::new(params)?.with_visualizer(visualizer);
    #[cfg(feature = "parallel")]
    let filter = filter.with_engine(hampel_core::parallel());
    Ok(filter.apply(signal)?)
}

/// Run the whole pipeline without printing
pub fn execute(cli: &Cli) -> anyhow::Result<RunOutcome> {
    let params = cli.parameters()?;

    let loaded = read_signal_table(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    if !loaded.dropped.is_empty() {
        warn!("Dropped {} malformed rows", loaded.dropped.len());
    }
    let table = loaded.table;
    info!(
        "Loaded: {} | Columns: {} | Samples: {}",
        cli.input.display(),
        table.n_columns(),
        table.n_rows()
    );

    if cli.channel == 0 || cli.channel > table.n_columns() {
        bail!(
            "channel {} out of range: the file has {} columns",
            cli.channel,
            table.n_columns()
        );
    }
    let index = cli.channel - 1;
    let signal = table.column(index)?;

    let result = match &cli.plot_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let viz = SvgOutlierVisualizer::new(cli.plot_prefix(dir))
                .histogram_bins(cli.histogram_bins);
            run_filter(params, signal, viz)?
        }
        None => run_filter(params, signal, NullOutlierVisualizer)?,
    };
    let report = OutlierReport::new(signal, &result)?;

    let output = if cli.no_export {
        None
    } else {
        let path = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&cli.input));
        let cleaned = table.with_column_replaced(index, result.cleaned())?;
        write_signal_table_to_path(&cleaned, &path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        info!("Cleaned signal saved as {}", path.display());
        Some(path)
    };

    Ok(RunOutcome {
        table,
        result,
        report,
        output,
    })
}

/// Run the pipeline and print the summary to stdout
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let outcome = execute(cli)?;

    println!("{}", outcome.result);
    if !cli.quiet {
        println!("Outliers: {}", outcome.result.outliers());
    }
    if cli.report && outcome.result.has_outliers() {
        println!();
        print!("{}", outcome.report);
    }
    if let Some(path) = &outcome.output {
        println!("Cleaned ECG saved as: {}", path.display());
    }
    Ok(())
}
