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

//! Speedup Command Line Interface

use clap::Parser;
use speedup_cli::cli::Commands;
use std::process::ExitCode;

/// Speedup - serial vs. parallel timing analysis
///
/// Reads the two CSV tables of a timing study (serial baseline and
/// parallel trials), averages repeated trials, derives speedup and
/// efficiency against the baseline, and renders console tables plus a
/// four-panel comparison chart.
///
/// # Examples
///
/// ```bash
/// # Full report with the study's default file names
/// speedup report
///
/// # Console tables for explicitly named inputs
/// speedup tables --serial results_row.csv --parallel results_omp.csv
///
/// # Chart artifacts only, to a chosen path
/// speedup chart --output scaling.svg
/// ```
#[derive(Parser)]
#[command(name = "speedup")]
#[command(author, version, about = "Serial vs. parallel timing analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
