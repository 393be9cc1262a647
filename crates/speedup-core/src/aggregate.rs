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

//! Trial aggregation: group-by mean over repeated measurements.

use crate::record::ParallelRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean execution time for one `(matrix_size, num_threads)` configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialGroup {
    /// Matrix dimension of this configuration.
    pub matrix_size: u32,
    /// Thread count of this configuration.
    pub num_threads: u32,
    /// Arithmetic mean over all trials, in seconds.
    pub mean_time: f64,
    /// Number of trials merged into the mean.
    pub trials: usize,
}

/// Groups parallel trials by `(matrix_size, num_threads)` and averages
/// their execution times.
///
/// Output ordering is deterministic: ascending by matrix size, then by
/// thread count. Duplicate keys are merged into a single mean; an empty
/// input yields an empty output.
///
/// # Examples
///
/// ```
/// use speedup_core::{aggregate_trials, ParallelRecord};
///
/// let trials = vec![
///     ParallelRecord { matrix_size: 1000, num_threads: 4, execution_time: 2.8 },
///     ParallelRecord { matrix_size: 1000, num_threads: 4, execution_time: 3.0 },
/// ];
/// let groups = aggregate_trials(&trials);
/// assert_eq!(groups.len(), 1);
/// assert!((groups[0].mean_time - 2.9).abs() < 1e-12);
/// ```
pub fn aggregate_trials(records: &[ParallelRecord]) -> Vec<TrialGroup> {
    let mut groups: BTreeMap<(u32, u32), (f64, usize)> = BTreeMap::new();

    for record in records {
        let entry = groups
            .entry((record.matrix_size, record.num_threads))
            .or_insert((0.0, 0));
        entry.0 += record.execution_time;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((matrix_size, num_threads), (total, trials))| TrialGroup {
            matrix_size,
            num_threads,
            mean_time: total / trials as f64,
            trials,
        })
        .collect()
}
