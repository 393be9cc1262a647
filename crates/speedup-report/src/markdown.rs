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

//! Markdown export of the summary tables.

use crate::error::{ReportError, Result};
use chrono::Utc;
use speedup_core::Analysis;
use std::fs;
use std::path::Path;

/// Exports the analysis summary as Markdown.
///
/// `chart_file` is the relative name of the SVG chart to link; pass the
/// file the caller wrote next to this document.
///
/// # Errors
///
/// Fails if the file cannot be written.
pub fn export_markdown(analysis: &Analysis, path: &Path, chart_file: &str) -> Result<()> {
    let mut md = String::new();

    md.push_str("# Serial vs. Parallel Matrix Inversion\n\n");
    md.push_str(&format!("**Generated:** {}\n\n", Utc::now().to_rfc3339()));
    md.push_str(&format!("![chart]({chart_file})\n\n"));

    md.push_str("## Best configuration per matrix size\n\n");
    if analysis.best.is_empty() {
        md.push_str("_No parallel data._\n");
    } else {
        md.push_str("| Size | Threads | Mean time (s) | Speedup | Efficiency |\n");
        md.push_str("|------|---------|---------------|---------|------------|\n");
        for record in &analysis.best {
            let speedup = record
                .speedup
                .map(|s| format!("{s:.3}"))
                .unwrap_or_else(|| "-".to_string());
            let efficiency = record
                .efficiency
                .map(|e| format!("{e:.3}"))
                .unwrap_or_else(|| "-".to_string());
            md.push_str(&format!(
                "| {} | {} | {:.4} | {} | {} |\n",
                record.matrix_size, record.num_threads, record.mean_time, speedup, efficiency
            ));
        }
    }
    md.push('\n');

    md.push_str("## Improvement over serial\n\n");
    if analysis.improvements.is_empty() {
        md.push_str("_No size has both serial and parallel measurements._\n");
    } else {
        md.push_str("| Size | Serial (s) | Best parallel (s) | Improvement (%) |\n");
        md.push_str("|------|------------|-------------------|------------------|\n");
        for row in &analysis.improvements {
            md.push_str(&format!(
                "| {} | {:.4} | {:.4} | {:.2} |\n",
                row.matrix_size, row.serial_time, row.parallel_time, row.improvement_pct
            ));
        }
    }

    fs::write(path, md).map_err(|e| ReportError::io_error(path, e))
}
