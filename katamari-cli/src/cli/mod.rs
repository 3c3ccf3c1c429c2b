//! Command-line interface orchestration for katamari.
//!
//! The `run` command clusters a grid read from a text file; `generate` draws
//! a random field first. Both print the clusters and a highlight mask where
//! cells outside every cluster are hidden.

mod commands;
mod grid_file;

pub use commands::{
    Cli, CliError, Command, EngineArgs, ExecutionSummary, GenerateCommand, RunCommand,
    StrategyArg, render_summary, run_cli,
};
pub use grid_file::{ParsedGrid, parse_grid};

#[cfg(test)]
mod test_helpers;
