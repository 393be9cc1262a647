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

//! Read timing records from CSV files.

use crate::error::{CsvError, Result};
use speedup_core::{ParallelRecord, SerialRecord};
use std::fs::File;
use std::path::Path;

/// Default maximum number of data rows per file.
///
/// A timing study produces at most a few hundred rows; the limit exists
/// so a wrong file (or an unbounded one) fails fast instead of exhausting
/// memory.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Accepted header names for the matrix size column.
const SIZE_COLUMNS: [&str; 2] = ["matrix_size", "tamanho_matriz"];
/// Accepted header names for the thread count column.
const THREAD_COLUMNS: [&str; 2] = ["num_threads", "thread_count"];
/// Accepted header names for the execution time column.
const TIME_COLUMNS: [&str; 2] = ["execution_time", "tempo_execucao"];

/// Configuration for CSV reading.
///
/// # Examples
///
/// ```
/// use speedup_csv::ReadConfig;
///
/// let config = ReadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.has_headers);
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,
    /// Whether the first row contains column headers (default: `true`).
    ///
    /// When `false`, fields are read positionally in the order
    /// size, [threads,] time.
    pub has_headers: bool,
    /// Whether to trim leading/trailing whitespace from fields
    /// (default: `true`).
    pub trim: bool,
    /// Maximum number of data rows to read (default: 1,000,000).
    pub max_rows: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Reads the serial baseline table.
///
/// Required columns: `matrix_size`/`tamanho_matriz` and
/// `execution_time`/`tempo_execucao`.
///
/// # Errors
///
/// Fails on a missing or unreadable file, a malformed row, a missing
/// required column, a non-positive value, or a breached row limit.
pub fn read_serial(path: impl AsRef<Path>, config: &ReadConfig) -> Result<Vec<SerialRecord>> {
    let path = path.as_ref();
    let mut reader = open_reader(path, config)?;
    if config.has_headers {
        check_headers(&mut reader, &[&SIZE_COLUMNS, &TIME_COLUMNS])?;
    }

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<SerialRecord>().enumerate() {
        let row = index + 1;
        if row > config.max_rows {
            return Err(CsvError::RowLimit {
                limit: config.max_rows,
            });
        }
        let record = result?;
        validate_size(record.matrix_size, row)?;
        validate_time(record.execution_time, row)?;
        records.push(record);
    }
    Ok(records)
}

/// Reads the parallel trials table.
///
/// Required columns: `matrix_size`/`tamanho_matriz`,
/// `num_threads`/`thread_count` and `execution_time`/`tempo_execucao`.
/// Repeated trials per configuration are expected and left as-is; the
/// core aggregates them.
///
/// # Errors
///
/// Same failure conditions as [`read_serial`].
pub fn read_parallel(path: impl AsRef<Path>, config: &ReadConfig) -> Result<Vec<ParallelRecord>> {
    let path = path.as_ref();
    let mut reader = open_reader(path, config)?;
    if config.has_headers {
        check_headers(&mut reader, &[&SIZE_COLUMNS, &THREAD_COLUMNS, &TIME_COLUMNS])?;
    }

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<ParallelRecord>().enumerate() {
        let row = index + 1;
        if row > config.max_rows {
            return Err(CsvError::RowLimit {
                limit: config.max_rows,
            });
        }
        let record = result?;
        validate_size(record.matrix_size, row)?;
        validate_threads(record.num_threads, row)?;
        validate_time(record.execution_time, row)?;
        records.push(record);
    }
    Ok(records)
}

fn open_reader(path: &Path, config: &ReadConfig) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| CsvError::io_error(path, e))?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(file))
}

/// Checks that every required column is present under at least one of
/// its accepted names.
fn check_headers(reader: &mut csv::Reader<File>, required: &[&[&str]]) -> Result<()> {
    let headers = reader.headers()?.clone();
    for aliases in required {
        let found = aliases
            .iter()
            .any(|name| headers.iter().any(|header| header == *name));
        if !found {
            return Err(CsvError::MissingColumn(aliases[0].to_string()));
        }
    }
    Ok(())
}

fn validate_size(matrix_size: u32, row: usize) -> Result<()> {
    if matrix_size == 0 {
        return Err(CsvError::invalid_row(row, "matrix_size must be positive"));
    }
    Ok(())
}

fn validate_threads(num_threads: u32, row: usize) -> Result<()> {
    if num_threads == 0 {
        return Err(CsvError::invalid_row(row, "num_threads must be positive"));
    }
    Ok(())
}

fn validate_time(execution_time: f64, row: usize) -> Result<()> {
    if !execution_time.is_finite() || execution_time <= 0.0 {
        return Err(CsvError::invalid_row(
            row,
            format!("execution_time must be a positive number, got {execution_time}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_serial_english_headers() {
        let file = write_csv("matrix_size,execution_time\n1000,10.0\n2000,85.5\n");

        let records = read_serial(file.path(), &ReadConfig::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].matrix_size, 1000);
        assert_eq!(records[1].execution_time, 85.5);
    }

    #[test]
    fn test_read_parallel_portuguese_headers() {
        let file = write_csv(
            "tamanho_matriz,num_threads,tempo_execucao\n1000,2,5.1\n1000,4,2.9\n",
        );

        let records = read_parallel(file.path(), &ReadConfig::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].num_threads, 4);
        assert_eq!(records[1].execution_time, 2.9);
    }

    #[test]
    fn test_missing_file() {
        let err = read_serial("no/such/file.csv", &ReadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::Io { .. }));
        assert!(err.to_string().contains("no/such/file.csv"));
    }

    #[test]
    fn test_missing_column() {
        let file = write_csv("matrix_size,execution_time\n1000,2,5.1\n");

        let err = read_parallel(file.path(), &ReadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "num_threads"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let file = write_csv("matrix_size,num_threads,execution_time\n1000,0,5.1\n");

        let err = read_parallel(file.path(), &ReadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn test_negative_time_rejected_with_row() {
        let file = write_csv(
            "matrix_size,num_threads,execution_time\n1000,2,5.1\n1000,4,-2.9\n",
        );

        let err = read_parallel(file.path(), &ReadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::InvalidRow { row: 2, .. }));
    }

    #[test]
    fn test_malformed_value_is_csv_error() {
        let file = write_csv("matrix_size,execution_time\n1000,not-a-number\n");

        let err = read_serial(file.path(), &ReadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::CsvLib(_)));
    }

    #[test]
    fn test_row_limit() {
        let file = write_csv("matrix_size,execution_time\n1000,1.0\n2000,2.0\n3000,3.0\n");
        let config = ReadConfig {
            max_rows: 2,
            ..Default::default()
        };

        let err = read_serial(file.path(), &config).unwrap_err();
        assert!(matches!(err, CsvError::RowLimit { limit: 2 }));
    }

    #[test]
    fn test_trim_and_custom_delimiter() {
        let file = write_csv("matrix_size;execution_time\n 1000 ; 10.0 \n");
        let config = ReadConfig {
            delimiter: b';',
            ..Default::default()
        };

        let records = read_serial(file.path(), &config).unwrap();
        assert_eq!(records[0].matrix_size, 1000);
        assert_eq!(records[0].execution_time, 10.0);
    }
}
