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

//! Error types for the analysis core.

use thiserror::Error;

/// Result type for core analysis operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while building derived metrics.
///
/// A matrix size that is present in the parallel data but absent from the
/// serial baseline is *not* an error: derived columns become `None` and
/// downstream tables omit the affected rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The serial results carried two rows for the same matrix size.
    ///
    /// The matrix size is the unique key of the baseline table; a
    /// duplicate almost always means a corrupted or concatenated results
    /// file, so the run aborts instead of silently keeping one of the
    /// conflicting measurements.
    #[error("Duplicate serial baseline for matrix size {matrix_size}")]
    DuplicateBaseline {
        /// The matrix size that appeared more than once.
        matrix_size: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_baseline_display() {
        let err = CoreError::DuplicateBaseline { matrix_size: 1000 };
        assert_eq!(
            err.to_string(),
            "Duplicate serial baseline for matrix size 1000"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
