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

//! Derived metrics: baseline join, speedup, efficiency, best configuration.
//!
//! Speedup and efficiency are only defined where a serial baseline exists
//! for the matrix size; absence propagates as `None` through every derived
//! table rather than failing the run.

use crate::aggregate::TrialGroup;
use crate::error::{CoreError, Result};
use crate::record::SerialRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serial baseline lookup keyed by matrix size.
///
/// Built from the serial results table, which carries one row per matrix
/// size. A duplicate size is rejected as a corrupted results file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerialBaseline {
    times: BTreeMap<u32, f64>,
}

impl SerialBaseline {
    /// Builds the baseline from serial records.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateBaseline`] if a matrix size appears
    /// more than once.
    pub fn from_records(records: &[SerialRecord]) -> Result<Self> {
        let mut times = BTreeMap::new();
        for record in records {
            if times
                .insert(record.matrix_size, record.execution_time)
                .is_some()
            {
                return Err(CoreError::DuplicateBaseline {
                    matrix_size: record.matrix_size,
                });
            }
        }
        Ok(Self { times })
    }

    /// Serial execution time for a matrix size, if measured.
    pub fn time(&self, matrix_size: u32) -> Option<f64> {
        self.times.get(&matrix_size).copied()
    }

    /// Matrix sizes with a baseline, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.times.keys().copied()
    }

    /// Number of baseline entries.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the baseline is empty.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// One aggregated parallel configuration with its derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    /// Matrix dimension of this configuration.
    pub matrix_size: u32,
    /// Thread count of this configuration.
    pub num_threads: u32,
    /// Mean execution time over all trials, in seconds.
    pub mean_time: f64,
    /// Number of trials behind the mean.
    pub trials: usize,
    /// `serial_time / mean_time`; `None` when the size has no baseline.
    pub speedup: Option<f64>,
    /// `speedup / num_threads`; `None` when speedup is undefined.
    pub efficiency: Option<f64>,
}

/// Joins aggregated trial groups against the serial baseline and derives
/// speedup and efficiency.
///
/// Input ordering is preserved. Groups whose matrix size has no baseline
/// keep `None` in both derived columns.
pub fn derive_metrics(groups: &[TrialGroup], baseline: &SerialBaseline) -> Vec<AggregatedRecord> {
    groups
        .iter()
        .map(|group| {
            let speedup = baseline
                .time(group.matrix_size)
                .map(|serial| serial / group.mean_time);
            let efficiency = speedup.map(|s| s / f64::from(group.num_threads));
            AggregatedRecord {
                matrix_size: group.matrix_size,
                num_threads: group.num_threads,
                mean_time: group.mean_time,
                trials: group.trials,
                speedup,
                efficiency,
            }
        })
        .collect()
}

/// Selects, per matrix size, the configuration with the minimal mean
/// execution time.
///
/// The arg-min is stable: on an exact tie the first-encountered record
/// wins. Output is ascending by matrix size.
pub fn select_best(records: &[AggregatedRecord]) -> Vec<AggregatedRecord> {
    let mut best: BTreeMap<u32, AggregatedRecord> = BTreeMap::new();

    for record in records {
        match best.get(&record.matrix_size) {
            Some(current) if record.mean_time >= current.mean_time => {}
            _ => {
                best.insert(record.matrix_size, *record);
            }
        }
    }

    best.into_values().collect()
}

/// Maximum observed speedup per matrix size, ascending by size.
///
/// Sizes without a serial baseline have no defined speedup and are
/// skipped entirely.
pub fn max_speedup(records: &[AggregatedRecord]) -> Vec<(u32, f64)> {
    let mut best: BTreeMap<u32, f64> = BTreeMap::new();

    for record in records {
        if let Some(speedup) = record.speedup {
            let entry = best.entry(record.matrix_size).or_insert(speedup);
            if speedup > *entry {
                *entry = speedup;
            }
        }
    }

    best.into_iter().collect()
}

/// One row of the serial vs. best-parallel improvement table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementRow {
    /// Matrix dimension.
    pub matrix_size: u32,
    /// Serial baseline time in seconds.
    pub serial_time: f64,
    /// Best parallel mean time in seconds.
    pub parallel_time: f64,
    /// `(serial - parallel) / serial * 100`; 0 when the times are equal.
    pub improvement_pct: f64,
    /// Speedup of the best configuration.
    pub speedup: f64,
    /// Thread count of the best configuration.
    pub num_threads: u32,
}

/// Builds the improvement table from the per-size best configurations.
///
/// Sizes with no serial baseline are excluded; the table only compares
/// configurations where both measurements exist.
pub fn improvement_table(
    best: &[AggregatedRecord],
    baseline: &SerialBaseline,
) -> Vec<ImprovementRow> {
    best.iter()
        .filter_map(|record| {
            let serial = baseline.time(record.matrix_size)?;
            Some(ImprovementRow {
                matrix_size: record.matrix_size,
                serial_time: serial,
                parallel_time: record.mean_time,
                improvement_pct: (serial - record.mean_time) / serial * 100.0,
                speedup: serial / record.mean_time,
                num_threads: record.num_threads,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(matrix_size: u32, num_threads: u32, mean_time: f64) -> TrialGroup {
        TrialGroup {
            matrix_size,
            num_threads,
            mean_time,
            trials: 3,
        }
    }

    fn baseline_1000() -> SerialBaseline {
        SerialBaseline::from_records(&[SerialRecord {
            matrix_size: 1000,
            execution_time: 10.0,
        }])
        .unwrap()
    }

    #[test]
    fn test_duplicate_baseline_rejected() {
        let records = vec![
            SerialRecord {
                matrix_size: 1000,
                execution_time: 10.0,
            },
            SerialRecord {
                matrix_size: 1000,
                execution_time: 11.0,
            },
        ];

        let err = SerialBaseline::from_records(&records).unwrap_err();
        assert_eq!(err, CoreError::DuplicateBaseline { matrix_size: 1000 });
    }

    #[test]
    fn test_speedup_and_efficiency() {
        let baseline = baseline_1000();
        let groups = vec![group(1000, 4, 2.9)];

        let derived = derive_metrics(&groups, &baseline);
        let record = derived[0];
        assert!((record.speedup.unwrap() - 10.0 / 2.9).abs() < 1e-12);
        assert!((record.efficiency.unwrap() - 10.0 / 2.9 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_baseline_yields_none() {
        let baseline = baseline_1000();
        let groups = vec![group(2000, 4, 2.9)];

        let derived = derive_metrics(&groups, &baseline);
        assert_eq!(derived[0].speedup, None);
        assert_eq!(derived[0].efficiency, None);
    }

    #[test]
    fn test_select_best_global_minimum() {
        let baseline = baseline_1000();
        let groups = vec![group(1000, 1, 9.8), group(1000, 2, 5.1), group(1000, 4, 2.9)];

        let best = select_best(&derive_metrics(&groups, &baseline));
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].num_threads, 4);
        assert!((best[0].mean_time - 2.9).abs() < 1e-12);
    }

    #[test]
    fn test_select_best_tie_keeps_first() {
        let baseline = baseline_1000();
        let groups = vec![group(1000, 2, 2.9), group(1000, 4, 2.9)];

        let best = select_best(&derive_metrics(&groups, &baseline));
        assert_eq!(best[0].num_threads, 2);
    }

    #[test]
    fn test_max_speedup_skips_missing_baseline() {
        let baseline = baseline_1000();
        let groups = vec![
            group(1000, 2, 5.0),
            group(1000, 4, 2.5),
            group(2000, 4, 20.0),
        ];

        let speedups = max_speedup(&derive_metrics(&groups, &baseline));
        assert_eq!(speedups.len(), 1);
        assert_eq!(speedups[0].0, 1000);
        assert!((speedups[0].1 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_improvement_table() {
        let baseline = baseline_1000();
        let groups = vec![group(1000, 4, 2.9), group(2000, 4, 20.0)];

        let best = select_best(&derive_metrics(&groups, &baseline));
        let table = improvement_table(&best, &baseline);

        // Size 2000 has no baseline and must be excluded.
        assert_eq!(table.len(), 1);
        let row = table[0];
        assert_eq!(row.matrix_size, 1000);
        assert_eq!(row.num_threads, 4);
        assert!((row.improvement_pct - 71.0).abs() < 0.5);
        assert!((row.speedup - 3.448).abs() < 0.001);
    }

    #[test]
    fn test_improvement_zero_when_equal() {
        let baseline = baseline_1000();
        let groups = vec![group(1000, 1, 10.0)];

        let best = select_best(&derive_metrics(&groups, &baseline));
        let table = improvement_table(&best, &baseline);
        assert_eq!(table[0].improvement_pct, 0.0);
    }
}
