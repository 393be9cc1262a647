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

//! Console reporter for timing analyses.
//!
//! Formats and prints the summary tables to stdout.

use colored::Colorize;
use speedup_core::Analysis;

const CELL: usize = 12;

/// Prints the full set of console tables.
pub fn print_report(analysis: &Analysis) {
    print_pivot(analysis);
    print_max_speedup(analysis);
    print_best_threads(analysis);
    print_improvements(analysis);
}

/// Prints the pivoted mean-time table: rows are matrix sizes, columns
/// are thread counts, cells are mean execution times in seconds. Absent
/// configurations print `-`.
pub fn print_pivot(analysis: &Analysis) {
    section("MEAN EXECUTION TIME (s) BY MATRIX SIZE AND THREAD COUNT");

    let threads = analysis.thread_counts();
    if threads.is_empty() {
        println!("(no parallel data)");
        return;
    }

    print!("{:>CELL$}", "size");
    for t in &threads {
        print!("{:>CELL$}", format!("t={}", t));
    }
    println!();
    println!("{}", "-".repeat(CELL * (threads.len() + 1)));

    for size in analysis.matrix_sizes() {
        print!("{:>CELL$}", size);
        for &t in &threads {
            match analysis.mean_time(size, t) {
                Some(time) => print!("{:>CELL$.4}", time),
                None => print!("{:>CELL$}", "-"),
            }
        }
        println!();
    }
}

/// Prints the maximum observed speedup per matrix size.
///
/// Sizes without a serial baseline have no defined speedup and are
/// omitted.
pub fn print_max_speedup(analysis: &Analysis) {
    section("MAX SPEEDUP PER MATRIX SIZE");

    if analysis.max_speedups.is_empty() {
        println!("(no size has both serial and parallel measurements)");
        return;
    }

    println!("{:>CELL$}{:>CELL$}", "size", "speedup");
    println!("{}", "-".repeat(CELL * 2));
    for (size, speedup) in &analysis.max_speedups {
        println!("{:>CELL$}{:>CELL$.3}", size, speedup);
    }
}

/// Prints the best thread count per matrix size, based on mean times.
pub fn print_best_threads(analysis: &Analysis) {
    section("BEST THREAD COUNT PER MATRIX SIZE");

    if analysis.best.is_empty() {
        println!("(no parallel data)");
        return;
    }

    println!("{:>CELL$}{:>CELL$}{:>CELL$}", "size", "threads", "time (s)");
    println!("{}", "-".repeat(CELL * 3));
    for record in &analysis.best {
        println!(
            "{:>CELL$}{:>CELL$}{:>CELL$.4}",
            record.matrix_size, record.num_threads, record.mean_time
        );
    }
}

/// Prints the combined improvement table: serial vs. best-parallel time
/// per matrix size, with the percentage improvement and the winning
/// thread count. Only sizes with a serial baseline appear.
pub fn print_improvements(analysis: &Analysis) {
    section("IMPROVEMENT OVER SERIAL PER MATRIX SIZE");

    if analysis.improvements.is_empty() {
        println!("(no size has both serial and parallel measurements)");
        return;
    }

    println!(
        "{:>CELL$}{:>CELL$}{:>CELL$}{:>CELL$}{:>CELL$}{:>CELL$}",
        "size", "serial (s)", "best (s)", "gain (%)", "speedup", "threads"
    );
    println!("{}", "-".repeat(CELL * 6));
    for row in &analysis.improvements {
        println!(
            "{:>CELL$}{:>CELL$.4}{:>CELL$.4}{:>CELL$.2}{:>CELL$.3}{:>CELL$}",
            row.matrix_size,
            row.serial_time,
            row.parallel_time,
            row.improvement_pct,
            row.speedup,
            row.num_threads
        );
    }
}

fn section(title: &str) {
    println!("\n{}", "=".repeat(72));
    println!("{}", title.bold());
    println!("{}", "=".repeat(72));
}
