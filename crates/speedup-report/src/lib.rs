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

//! Reporting for timing analyses.
//!
//! Renders an [`Analysis`](speedup_core::Analysis) in four forms:
//!
//! - `console`: the pivoted mean-time table, max speedup, best thread
//!   count, and the improvement table on stdout
//! - `svg`: a four-panel comparison chart (times, speedup, efficiency,
//!   serial vs. best parallel)
//! - `html`: a self-contained page with interactive versions of the same
//!   four panels
//! - `markdown`: the summary tables for inclusion in study notes

pub mod console;
pub mod error;
pub mod html;
pub mod markdown;
pub mod svg;

pub use console::{print_best_threads, print_improvements, print_max_speedup, print_pivot, print_report};
pub use error::{ReportError, Result};
pub use html::export_html;
pub use markdown::export_markdown;
pub use svg::{render_chart, write_chart};
