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

//! Structured error types for the Speedup CLI.
//!
//! All CLI operations return `Result<T, CliError>` for consistent error
//! reporting; the binary prints the message and exits non-zero.

use thiserror::Error;

/// The main error type for CLI operations.
///
/// Wraps the lower layers: CSV ingestion, the analysis core, and report
/// generation. Each underlying error already carries its own context
/// (file path, row number, output path).
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or validating an input CSV failed.
    #[error(transparent)]
    Csv(#[from] speedup_csv::CsvError),

    /// The analysis core rejected the input (duplicate baseline).
    #[error(transparent)]
    Core(#[from] speedup_core::CoreError),

    /// Writing a report artifact failed.
    #[error(transparent)]
    Report(#[from] speedup_report::ReportError),
}
