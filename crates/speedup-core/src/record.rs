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

//! Timing record types shared across the toolkit.
//!
//! The study that produces these records wrote its CSV headers in
//! Portuguese (`tamanho_matriz`, `num_threads`, `tempo_execucao`); serde
//! aliases accept both those and the English column names, so either
//! generation of results file loads without conversion.

use serde::{Deserialize, Serialize};

/// One serial baseline measurement.
///
/// The serial results file carries exactly one row per matrix size; the
/// size is the unique key used to join parallel results against the
/// baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SerialRecord {
    /// Matrix dimension (N for an N×N inversion).
    #[serde(alias = "tamanho_matriz")]
    pub matrix_size: u32,
    /// Wall-clock execution time in seconds.
    #[serde(alias = "tempo_execucao")]
    pub execution_time: f64,
}

/// One parallel trial measurement.
///
/// The parallel results file carries repeated trials per
/// `(matrix_size, num_threads)` configuration; trials are averaged by
/// [`aggregate_trials`](crate::aggregate::aggregate_trials) before any
/// derived metric is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallelRecord {
    /// Matrix dimension (N for an N×N inversion).
    #[serde(alias = "tamanho_matriz")]
    pub matrix_size: u32,
    /// OpenMP thread count used for this trial.
    #[serde(alias = "thread_count")]
    pub num_threads: u32,
    /// Wall-clock execution time in seconds.
    #[serde(alias = "tempo_execucao")]
    pub execution_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_record_roundtrip() {
        let record = SerialRecord {
            matrix_size: 1000,
            execution_time: 10.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: SerialRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_parallel_record_portuguese_aliases() {
        let json = r#"{"tamanho_matriz": 2000, "num_threads": 8, "tempo_execucao": 1.25}"#;
        let record: ParallelRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.matrix_size, 2000);
        assert_eq!(record.num_threads, 8);
        assert_eq!(record.execution_time, 1.25);
    }

    #[test]
    fn test_parallel_record_english_aliases() {
        let json = r#"{"matrix_size": 500, "thread_count": 4, "execution_time": 0.5}"#;
        let record: ParallelRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.matrix_size, 500);
        assert_eq!(record.num_threads, 4);
        assert_eq!(record.execution_time, 0.5);
    }
}
