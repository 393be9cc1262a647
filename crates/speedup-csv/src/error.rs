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

//! Error types for CSV ingestion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CSV ingestion operations.
pub type Result<T> = std::result::Result<T, CsvError>;

/// CSV ingestion error types.
///
/// Malformed or missing input aborts the run; this is an offline analysis
/// tool and a hard, visible failure is the intended behavior.
#[derive(Debug, Error)]
pub enum CsvError {
    /// I/O error with file path context.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// Error from the underlying CSV library (parse or type errors,
    /// including the record position where they occurred).
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Missing required column in the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A row carried a value outside the valid domain.
    #[error("Invalid value in row {row}: {message}")]
    InvalidRow {
        /// Data row number where the value occurred (1-based).
        row: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Row count exceeded the configured limit.
    #[error("Row limit exceeded: file has more than {limit} data rows")]
    RowLimit {
        /// Maximum allowed rows.
        limit: usize,
    },
}

impl CsvError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid-row error.
    pub fn invalid_row(row: usize, message: impl Into<String>) -> Self {
        Self::InvalidRow {
            row,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CsvError::io_error(
            "results_omp.csv",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("results_omp.csv"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_invalid_row_display() {
        let err = CsvError::invalid_row(7, "execution_time must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid value in row 7: execution_time must be positive"
        );
    }

    #[test]
    fn test_missing_column_display() {
        let err = CsvError::MissingColumn("num_threads".to_string());
        assert_eq!(err.to_string(), "Missing required column: num_threads");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CsvError>();
    }
}
