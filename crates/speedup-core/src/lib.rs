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

//! Speedup Analysis Core
//!
//! Record types and derived metrics for a serial vs. OpenMP-parallel
//! timing study. The pipeline is a single pass over in-memory tables:
//!
//! 1. **Aggregate**: group parallel trials by `(matrix_size, num_threads)`
//!    and average their execution times.
//! 2. **Join & derive**: look up the serial baseline per matrix size and
//!    compute speedup (`serial / mean_parallel`) and efficiency
//!    (`speedup / num_threads`). A missing baseline yields `None`, never
//!    an error.
//! 3. **Select**: per matrix size, the configuration with the minimal
//!    mean time (stable arg-min), plus the improvement table against the
//!    baseline.
//!
//! [`Analysis::run`] performs all three steps for the reporting layer.

pub mod aggregate;
pub mod analysis;
pub mod error;
pub mod metrics;
pub mod record;

// Re-export key types for convenience
pub use aggregate::{aggregate_trials, TrialGroup};
pub use analysis::Analysis;
pub use error::{CoreError, Result};
pub use metrics::{
    derive_metrics, improvement_table, max_speedup, select_best, AggregatedRecord,
    ImprovementRow, SerialBaseline,
};
pub use record::{ParallelRecord, SerialRecord};
