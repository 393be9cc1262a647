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

//! End-to-end: CSV files on disk through the full analysis pipeline.

use speedup_core::Analysis;
use speedup_csv::{read_parallel, read_serial, ReadConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_csv_to_analysis() {
    let serial = write_csv(
        "tamanho_matriz,tempo_execucao\n\
         500,1.5\n\
         1000,10.0\n",
    );
    let parallel = write_csv(
        "tamanho_matriz,num_threads,tempo_execucao\n\
         500,2,0.9\n\
         500,2,1.1\n\
         500,4,0.6\n\
         1000,1,9.8\n\
         1000,2,5.1\n\
         1000,4,2.9\n",
    );

    let config = ReadConfig::default();
    let serial_records = read_serial(serial.path(), &config).unwrap();
    let parallel_records = read_parallel(parallel.path(), &config).unwrap();

    let analysis = Analysis::run(&serial_records, &parallel_records).unwrap();

    // Trials for (500, 2) are averaged before the join.
    assert!((analysis.mean_time(500, 2).unwrap() - 1.0).abs() < 1e-12);

    // Best configuration per size is the global minimum mean time.
    let best_1000 = analysis
        .best
        .iter()
        .find(|r| r.matrix_size == 1000)
        .unwrap();
    assert_eq!(best_1000.num_threads, 4);
    assert!((best_1000.speedup.unwrap() - 10.0 / 2.9).abs() < 1e-9);

    // Improvement table covers both sizes.
    assert_eq!(analysis.improvements.len(), 2);
}

#[test]
fn test_mixed_header_generations() {
    // An English-headered serial file joined against a Portuguese
    // parallel file must behave identically.
    let serial = write_csv("matrix_size,execution_time\n1000,10.0\n");
    let parallel = write_csv("tamanho_matriz,num_threads,tempo_execucao\n1000,4,2.9\n");

    let config = ReadConfig::default();
    let serial_records = read_serial(serial.path(), &config).unwrap();
    let parallel_records = read_parallel(parallel.path(), &config).unwrap();

    let analysis = Analysis::run(&serial_records, &parallel_records).unwrap();
    assert!((analysis.best[0].speedup.unwrap() - 3.448).abs() < 0.001);
}

#[test]
fn test_baseline_gap_is_not_an_error() {
    let serial = write_csv("matrix_size,execution_time\n1000,10.0\n");
    let parallel = write_csv(
        "matrix_size,num_threads,execution_time\n\
         1000,4,2.9\n\
         2000,4,25.0\n",
    );

    let config = ReadConfig::default();
    let serial_records = read_serial(serial.path(), &config).unwrap();
    let parallel_records = read_parallel(parallel.path(), &config).unwrap();

    let analysis = Analysis::run(&serial_records, &parallel_records).unwrap();

    // Size 2000 aggregates fine but has no derived metrics and no
    // improvement row.
    assert_eq!(analysis.mean_time(2000, 4), Some(25.0));
    let orphan = analysis
        .records
        .iter()
        .find(|r| r.matrix_size == 2000)
        .unwrap();
    assert_eq!(orphan.speedup, None);
    assert!(analysis.improvements.iter().all(|r| r.matrix_size != 2000));
}

#[test]
fn test_duplicate_serial_rows_rejected() {
    let serial = write_csv("matrix_size,execution_time\n1000,10.0\n1000,9.5\n");

    let config = ReadConfig::default();
    let serial_records = read_serial(serial.path(), &config).unwrap();
    let err = Analysis::run(&serial_records, &[]).unwrap_err();
    assert!(err.to_string().contains("1000"));
}
