use std::fs::File;
use std::io::{self, BufReader, Write};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use katamari_core::{
    ClusterEngine, ClusterEngineBuilder, ClusterError, ClusterSet, DEFAULT_COLORS,
    DEFAULT_COLUMNS, DEFAULT_MIN_CLUSTER_SIZE, DEFAULT_ROWS, FieldError, FieldSpec, GridShape,
    MergeStrategy,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::grid_file::parse_grid;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "katamari",
    about = "Find same-color clusters in a grid of colored cells."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Cluster a grid read from a text file.
    Run(RunCommand),
    /// Generate a random field and cluster it.
    Generate(GenerateCommand),
}

/// Engine options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct EngineArgs {
    /// Minimum number of cells a reported cluster must contain.
    #[arg(
        long = "min-cluster-size",
        default_value_t = DEFAULT_MIN_CLUSTER_SIZE,
        value_parser = clap::value_parser!(usize),
    )]
    pub min_cluster_size: usize,

    /// Strategy used to merge provisional labels.
    #[arg(long, value_enum, default_value_t = StrategyArg::UnionFind)]
    pub strategy: StrategyArg,
}

impl Default for EngineArgs {
    fn default() -> Self {
        Self {
            min_cluster_size: DEFAULT_MIN_CLUSTER_SIZE,
            strategy: StrategyArg::UnionFind,
        }
    }
}

/// Merge strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Union by rank with path compression.
    UnionFind,
    /// Rewrite the absorbed class on every merge.
    EagerRewrite,
}

impl From<StrategyArg> for MergeStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::UnionFind => Self::UnionFind,
            StrategyArg::EagerRewrite => Self::EagerRewrite,
        }
    }
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a grid file: one row per line, whitespace-separated color ids.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,

    /// Engine configuration.
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of rows in the field.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns in the field.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Number of distinct colors.
    #[arg(long, default_value_t = DEFAULT_COLORS)]
    pub colors: usize,

    /// Seed for the field generator; a random seed is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Engine configuration.
    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening an input file failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line of the grid file failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number.
        line: usize,
        /// Underlying read error.
        #[source]
        source: io::Error,
    },
    /// A token in the grid file is not an unsigned integer.
    #[error("line {line}, cell {column}: `{token}` is not a color id")]
    Parse {
        /// One-based line number.
        line: usize,
        /// One-based token position within the line.
        column: usize,
        /// Offending token.
        token: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// A row's length differs from the first row's.
    #[error("line {line} has {got} cells but the first row has {expected}")]
    RaggedRow {
        /// One-based line number of the offending row.
        line: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        got: usize,
    },
    /// The requested field dimensions are unusable.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// The clustering engine rejected its configuration or input.
    #[error(transparent)]
    Core(#[from] ClusterError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the clustered grid.
    pub data_source: String,
    /// Color ids of the clustered grid in row-major order.
    pub cells: Vec<u32>,
    /// Clusters found by the engine.
    pub clusters: ClusterSet,
}

impl ExecutionSummary {
    /// Returns the number of rows of the clustered grid.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells
            .len()
            .checked_div(self.clusters.columns())
            .unwrap_or(0)
    }

    /// Returns the row width of the clustered grid, or zero when it is empty.
    #[must_use]
    pub fn columns(&self) -> usize {
        if self.cells.is_empty() {
            0
        } else {
            self.clusters.columns()
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the input or clustering fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use katamari_cli::cli::{Cli, Command, EngineArgs, GenerateCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         rows: 4,
///         columns: 6,
///         colors: 1,
///         seed: Some(7),
///         engine: EngineArgs::default(),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.clusters.len(), 1);
/// assert_eq!(summary.clusters.clustered_cells(), 24);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => run_command(run),
        Command::Generate(generate) => generate_command(generate),
    }
}

fn build_engine(args: &EngineArgs) -> Result<ClusterEngine, CliError> {
    Ok(ClusterEngineBuilder::new()
        .with_min_cluster_size(args.min_cluster_size)
        .with_merge_strategy(args.strategy.into())
        .with_grid_shape(GridShape::Rectangular)
        .build()?)
}

pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let engine = build_engine(&command.engine)?;
    let RunCommand { path, name, .. } = command;
    let data_source = derive_data_source_name(&path, name.as_deref());
    let grid = parse_grid(open_grid_reader(&path)?)?;
    let clusters = engine.find_clusters(&grid.cells, grid.columns.max(1))?;
    Ok(ExecutionSummary {
        data_source,
        cells: grid.cells,
        clusters,
    })
}

#[instrument(name = "cli.generate", skip(command), fields(seed = field::Empty))]
pub(super) fn generate_command(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let engine = build_engine(&command.engine)?;
    let spec = FieldSpec::new(command.rows, command.columns, command.colors)?;
    let seed = command.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);
    if !spec.within_slider_ranges() {
        info!(
            rows = spec.rows(),
            columns = spec.columns(),
            colors = spec.colors(),
            "field dimensions exceed the board sliders"
        );
    }

    let field = spec.generate(seed);
    let clusters = engine.find_clusters(field.cells(), field.columns())?;
    Ok(ExecutionSummary {
        data_source: format!("field-{seed}"),
        cells: field.into_cells().into_iter().map(u32::from).collect(),
        clusters,
    })
}

#[instrument(name = "cli.open_grid_reader", err, fields(path = field::Empty))]
pub(super) fn open_grid_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "grid".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// The report lists each cluster as `id<TAB>size<TAB>cells`, followed by one
/// mask line per row where cells outside every cluster show as `.`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use katamari_cli::cli::{ExecutionSummary, render_summary};
/// # use katamari_core::find_clusters;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cells = vec![1, 1, 1, 2];
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     clusters: find_clusters(&cells, 2)?,
///     cells,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "data source: demo\ngrid: 2x2\nclusters: 1\n0\t3\t0,1,2\n1 1\n1 .\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "grid: {}x{}", summary.rows(), summary.columns())?;
    writeln!(writer, "clusters: {}", summary.clusters.len())?;
    for cluster in &summary.clusters {
        let cells: Vec<String> = cluster.cells().iter().map(ToString::to_string).collect();
        writeln!(
            writer,
            "{}\t{}\t{}",
            cluster.id().get(),
            cluster.len(),
            cells.join(",")
        )?;
    }

    let columns = summary.clusters.columns().max(1);
    for (row_index, row) in summary.cells.chunks(columns).enumerate() {
        let tokens: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(offset, color)| {
                let index = row_index * columns + offset;
                match summary.clusters.cluster_of(index) {
                    Some(_) => color.to_string(),
                    None => ".".to_owned(),
                }
            })
            .collect();
        writeln!(writer, "{}", tokens.join(" "))?;
    }
    Ok(())
}
