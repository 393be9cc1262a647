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

//! One-shot analysis pipeline over both timing tables.

use crate::aggregate::aggregate_trials;
use crate::error::Result;
use crate::metrics::{
    derive_metrics, improvement_table, max_speedup, select_best, AggregatedRecord,
    ImprovementRow, SerialBaseline,
};
use crate::record::{ParallelRecord, SerialRecord};

/// The complete derived state of one analysis run.
///
/// Holds everything the reporting layer needs: the aggregated records in
/// ascending `(matrix_size, num_threads)` order, the per-size best
/// configurations, the improvement table, and the max-speedup summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Serial baseline lookup.
    pub baseline: SerialBaseline,
    /// Aggregated parallel records with derived metrics.
    pub records: Vec<AggregatedRecord>,
    /// Per matrix size, the record with the minimal mean time.
    pub best: Vec<AggregatedRecord>,
    /// Serial vs. best-parallel improvement rows (baseline sizes only).
    pub improvements: Vec<ImprovementRow>,
    /// Maximum speedup per matrix size (baseline sizes only).
    pub max_speedups: Vec<(u32, f64)>,
}

impl Analysis {
    /// Runs the full pipeline: aggregate, join, derive, select.
    ///
    /// # Errors
    ///
    /// Returns an error only for a structurally invalid baseline
    /// (duplicate matrix size). Parallel sizes without a baseline are
    /// carried through with `None` metrics.
    pub fn run(serial: &[SerialRecord], parallel: &[ParallelRecord]) -> Result<Self> {
        let baseline = SerialBaseline::from_records(serial)?;
        let groups = aggregate_trials(parallel);
        let records = derive_metrics(&groups, &baseline);
        let best = select_best(&records);
        let improvements = improvement_table(&best, &baseline);
        let max_speedups = max_speedup(&records);

        Ok(Self {
            baseline,
            records,
            best,
            improvements,
            max_speedups,
        })
    }

    /// Distinct thread counts across all records, ascending.
    ///
    /// These are the columns of the pivoted mean-time table.
    pub fn thread_counts(&self) -> Vec<u32> {
        let mut counts: Vec<u32> = self.records.iter().map(|r| r.num_threads).collect();
        counts.sort_unstable();
        counts.dedup();
        counts
    }

    /// Distinct matrix sizes across all records, ascending.
    ///
    /// These are the rows of the pivoted mean-time table.
    pub fn matrix_sizes(&self) -> Vec<u32> {
        let mut sizes: Vec<u32> = self.records.iter().map(|r| r.matrix_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Mean time for one pivot cell, if that configuration was measured.
    pub fn mean_time(&self, matrix_size: u32, num_threads: u32) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.matrix_size == matrix_size && r.num_threads == num_threads)
            .map(|r| r.mean_time)
    }

    /// All records for one matrix size, ascending by thread count.
    pub fn records_for_size(&self, matrix_size: u32) -> Vec<&AggregatedRecord> {
        self.records
            .iter()
            .filter(|r| r.matrix_size == matrix_size)
            .collect()
    }

    /// All records for one thread count, ascending by matrix size.
    pub fn records_for_threads(&self, num_threads: u32) -> Vec<&AggregatedRecord> {
        self.records
            .iter()
            .filter(|r| r.num_threads == num_threads)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serial(matrix_size: u32, execution_time: f64) -> SerialRecord {
        SerialRecord {
            matrix_size,
            execution_time,
        }
    }

    fn trial(matrix_size: u32, num_threads: u32, execution_time: f64) -> ParallelRecord {
        ParallelRecord {
            matrix_size,
            num_threads,
            execution_time,
        }
    }

    /// The worked example: serial(1000) = 10.0s, parallel means at
    /// {1, 2, 4} threads = {9.8, 5.1, 2.9}.
    fn example() -> Analysis {
        let serial_records = vec![serial(1000, 10.0)];
        let parallel_records = vec![
            trial(1000, 1, 9.7),
            trial(1000, 1, 9.9),
            trial(1000, 2, 5.0),
            trial(1000, 2, 5.2),
            trial(1000, 4, 2.8),
            trial(1000, 4, 3.0),
        ];
        Analysis::run(&serial_records, &parallel_records).unwrap()
    }

    #[test]
    fn test_worked_example() {
        let analysis = example();

        assert_eq!(analysis.best.len(), 1);
        let best = analysis.best[0];
        assert_eq!(best.num_threads, 4);
        assert!((best.speedup.unwrap() - 3.448).abs() < 0.001);
        assert!((best.efficiency.unwrap() - 0.862).abs() < 0.001);

        let row = analysis.improvements[0];
        assert!((row.improvement_pct - 71.0).abs() < 0.5);
    }

    #[test]
    fn test_pivot_accessors() {
        let analysis = example();

        assert_eq!(analysis.thread_counts(), vec![1, 2, 4]);
        assert_eq!(analysis.matrix_sizes(), vec![1000]);
        assert!((analysis.mean_time(1000, 2).unwrap() - 5.1).abs() < 1e-12);
        assert_eq!(analysis.mean_time(1000, 8), None);
    }

    #[test]
    fn test_parallel_only_size_excluded_from_improvements() {
        let serial_records = vec![serial(1000, 10.0)];
        let parallel_records = vec![trial(1000, 4, 2.9), trial(2000, 4, 25.0)];

        let analysis = Analysis::run(&serial_records, &parallel_records).unwrap();

        for record in analysis.records_for_size(2000) {
            assert_eq!(record.speedup, None);
            assert_eq!(record.efficiency, None);
        }
        assert!(analysis.improvements.iter().all(|r| r.matrix_size != 2000));
        assert!(analysis.max_speedups.iter().all(|(s, _)| *s != 2000));
    }

    #[test]
    fn test_empty_parallel_input() {
        let analysis = Analysis::run(&[serial(1000, 10.0)], &[]).unwrap();
        assert!(analysis.records.is_empty());
        assert!(analysis.best.is_empty());
        assert!(analysis.improvements.is_empty());
    }

    #[test]
    fn test_series_accessors() {
        let serial_records = vec![serial(500, 2.0), serial(1000, 10.0)];
        let parallel_records = vec![
            trial(500, 2, 1.2),
            trial(500, 4, 0.8),
            trial(1000, 2, 5.1),
            trial(1000, 4, 2.9),
        ];
        let analysis = Analysis::run(&serial_records, &parallel_records).unwrap();

        let by_threads = analysis.records_for_threads(4);
        assert_eq!(by_threads.len(), 2);
        assert_eq!(by_threads[0].matrix_size, 500);
        assert_eq!(by_threads[1].matrix_size, 1000);

        let by_size = analysis.records_for_size(1000);
        assert_eq!(by_size.len(), 2);
        assert_eq!(by_size[0].num_threads, 2);
    }
}
