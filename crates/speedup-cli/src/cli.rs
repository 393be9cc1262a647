// Dweve Speedup - Parallel Benchmark Analysis Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command definitions and argument parsing.
//!
//! The defaults match the fixed relative paths of the original study,
//! so a plain `speedup report` run inside a results directory needs no
//! arguments at all.

use crate::error::CliError;
use clap::{Args, Subcommand};
use speedup_core::Analysis;
use speedup_csv::{read_parallel, read_serial, ReadConfig};
use speedup_report::{export_html, export_markdown, print_report, write_chart};
use std::path::PathBuf;

/// Input file arguments shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Serial timings CSV (one row per matrix size)
    #[arg(long, default_value = "results_row.csv")]
    pub serial: PathBuf,

    /// Parallel timings CSV (one row per trial)
    #[arg(long, default_value = "results_omp.csv")]
    pub parallel: PathBuf,
}

/// Chart output arguments.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Output path for the SVG chart
    #[arg(long, short, default_value = "inverse_matrix_performance_avg.svg")]
    pub output: PathBuf,

    /// Output path for the interactive HTML report
    /// (defaults to the chart path with an `.html` extension)
    #[arg(long)]
    pub html: Option<PathBuf>,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Full report: console tables plus SVG chart and HTML report
    Report {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        chart: ChartArgs,

        /// Additionally write the summary tables as Markdown
        #[arg(long)]
        markdown: Option<PathBuf>,
    },

    /// Console tables only; writes no files
    Tables {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Chart artifacts only; prints no tables
    Chart {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        chart: ChartArgs,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an input file is missing or malformed, the
    /// baseline is structurally invalid, or an output artifact cannot
    /// be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report {
                input,
                chart,
                markdown,
            } => {
                let analysis = load(&input)?;
                print_report(&analysis);
                write_artifacts(&analysis, &chart)?;
                if let Some(path) = markdown {
                    export_markdown(&analysis, &path, &chart_file_name(&chart.output))?;
                    println!("Wrote {}", path.display());
                }
                Ok(())
            }
            Commands::Tables { input } => {
                let analysis = load(&input)?;
                print_report(&analysis);
                Ok(())
            }
            Commands::Chart { input, chart } => {
                let analysis = load(&input)?;
                write_artifacts(&analysis, &chart)
            }
        }
    }
}

/// Reads both CSV tables and runs the analysis pipeline.
fn load(input: &InputArgs) -> Result<Analysis, CliError> {
    let config = ReadConfig::default();
    let serial = read_serial(&input.serial, &config)?;
    let parallel = read_parallel(&input.parallel, &config)?;
    Ok(Analysis::run(&serial, &parallel)?)
}

/// Writes the SVG chart and the HTML report next to it.
fn write_artifacts(analysis: &Analysis, chart: &ChartArgs) -> Result<(), CliError> {
    write_chart(analysis, &chart.output)?;
    println!("Wrote {}", chart.output.display());

    let html = chart
        .html
        .clone()
        .unwrap_or_else(|| chart.output.with_extension("html"));
    export_html(analysis, &html)?;
    println!("Wrote {}", html.display());
    Ok(())
}

/// Relative chart name for the Markdown link.
fn chart_file_name(output: &std::path::Path) -> String {
    output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_file_name() {
        assert_eq!(
            chart_file_name(std::path::Path::new("out/scaling.svg")),
            "scaling.svg"
        );
    }
}
