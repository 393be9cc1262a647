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

//! CSV ingestion for timing results.
//!
//! Loads the two tables of a serial vs. parallel timing study:
//!
//! - the serial baseline (`matrix_size`, `execution_time`), and
//! - the parallel trials (`matrix_size`, `num_threads`, `execution_time`).
//!
//! Headers may use the original study's Portuguese names
//! (`tamanho_matriz`, `num_threads`, `tempo_execucao`) or their English
//! equivalents. Rows are validated on load: non-positive sizes, thread
//! counts, or times abort with the offending row number rather than
//! flowing NaN-like nonsense into the derived metrics.

pub mod error;
pub mod reader;

pub use error::{CsvError, Result};
pub use reader::{read_parallel, read_serial, ReadConfig, DEFAULT_MAX_ROWS};
