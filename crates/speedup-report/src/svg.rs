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

//! Four-panel SVG comparison chart.
//!
//! Renders the figure of the study in a 2×2 grid:
//!
//! 1. mean execution time vs. matrix size (log-log), one line per
//!    thread count;
//! 2. speedup vs. thread count, one line per matrix size;
//! 3. efficiency vs. thread count, one line per matrix size;
//! 4. serial vs. best-parallel time per matrix size as grouped bars
//!    (log scale) with numeric value labels.
//!
//! Sizes without a serial baseline have no speedup or efficiency and are
//! omitted from panels 2–4. The output is vector graphics at 1600×1200,
//! so any print resolution is covered.

use crate::error::{ReportError, Result};
use speedup_core::Analysis;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const SVG_W: f64 = 1600.0;
const SVG_H: f64 = 1200.0;
const TITLE_H: f64 = 56.0;
const PANEL_W: f64 = SVG_W / 2.0;
const PANEL_H: f64 = (SVG_H - TITLE_H) / 2.0;
const MARGIN_LEFT: f64 = 96.0;
const MARGIN_RIGHT: f64 = 36.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 64.0;

const PALETTE: [&str; 8] = [
    "#4C78A8", "#F58518", "#E45756", "#72B7B2", "#54A24B", "#B279A2", "#FF9DA7", "#9D755D",
];

/// Writes the four-panel chart to `path`.
pub fn write_chart(analysis: &Analysis, path: &Path) -> Result<()> {
    let svg = render_chart(analysis);
    fs::write(path, svg).map_err(|e| ReportError::io_error(path, e))
}

/// Renders the four-panel chart as an SVG document.
pub fn render_chart(analysis: &Analysis) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SVG_W}\" height=\"{SVG_H}\" \
         font-family=\"Helvetica,Arial,sans-serif\">"
    )
    .unwrap();
    writeln!(out, "<rect width=\"{SVG_W}\" height=\"{SVG_H}\" fill=\"#FFFFFF\"/>").unwrap();
    writeln!(
        out,
        "<text x=\"{}\" y=\"36\" text-anchor=\"middle\" font-size=\"22\" font-weight=\"bold\" \
         fill=\"#222\">Serial vs. Parallel Matrix Inversion</text>",
        SVG_W / 2.0
    )
    .unwrap();

    draw_time_panel(&mut out, analysis, 0);
    draw_speedup_panel(&mut out, analysis, 1);
    draw_efficiency_panel(&mut out, analysis, 2);
    draw_comparison_panel(&mut out, analysis, 3);

    writeln!(out, "</svg>").unwrap();
    out
}

/// One line series: a label, a color, and data points.
struct Series {
    label: String,
    points: Vec<(f64, f64)>,
}

/// An axis with its data range and scale kind.
#[derive(Debug, Clone, Copy)]
struct Axis {
    min: f64,
    max: f64,
    log: bool,
}

impl Axis {
    /// Log axis padded around the data range.
    fn log(lo: f64, hi: f64) -> Self {
        Self {
            min: lo * 0.55,
            max: hi * 1.45,
            log: true,
        }
    }

    /// Linear axis from zero up to the padded data maximum.
    fn linear(hi: f64) -> Self {
        let max = if hi > 0.0 { hi * 1.15 } else { 1.0 };
        Self {
            min: 0.0,
            max,
            log: false,
        }
    }

    /// Fraction of the axis length at which `v` sits (0.0 .. 1.0).
    fn fraction(&self, v: f64) -> f64 {
        if self.log {
            (v.log10() - self.min.log10()) / (self.max.log10() - self.min.log10())
        } else {
            (v - self.min) / (self.max - self.min)
        }
    }

    /// Tick positions: 1-2-5 per decade on log axes, a nice step on
    /// linear ones.
    fn ticks(&self) -> Vec<f64> {
        if self.log {
            log_ticks(self.min, self.max)
        } else {
            linear_ticks(self.min, self.max)
        }
    }
}

/// The drawable chart area of one panel plus its axes.
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    x: Axis,
    y: Axis,
}

impl Frame {
    fn new(slot: usize, x: Axis, y: Axis) -> Self {
        let col = (slot % 2) as f64;
        let row = (slot / 2) as f64;
        Self {
            left: col * PANEL_W + MARGIN_LEFT,
            top: TITLE_H + row * PANEL_H + MARGIN_TOP,
            width: PANEL_W - MARGIN_LEFT - MARGIN_RIGHT,
            height: PANEL_H - MARGIN_TOP - MARGIN_BOTTOM,
            x,
            y,
        }
    }

    fn px(&self, v: f64) -> f64 {
        self.left + self.x.fraction(v) * self.width
    }

    fn py(&self, v: f64) -> f64 {
        self.top + self.height - self.y.fraction(v) * self.height
    }

    /// Panel title, axis titles, grid lines, tick labels, frame line.
    fn draw_axes(&self, out: &mut String, title: &str, x_title: &str, y_title: &str) {
        let (left, top, width, height) = (self.left, self.top, self.width, self.height);
        let bottom = top + height;

        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"16\" \
             font-weight=\"bold\" fill=\"#333\">{title}</text>",
            left + width / 2.0,
            top - 18.0
        )
        .unwrap();

        for tick in self.x.ticks() {
            let tx = self.px(tick);
            if tx < left - 0.5 || tx > left + width + 0.5 {
                continue;
            }
            writeln!(
                out,
                "<line x1=\"{tx:.1}\" y1=\"{top:.1}\" x2=\"{tx:.1}\" y2=\"{bottom:.1}\" \
                 stroke=\"#E8E8E8\" stroke-width=\"1\"/>"
            )
            .unwrap();
            writeln!(
                out,
                "<text x=\"{tx:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\" \
                 fill=\"#666\">{}</text>",
                bottom + 16.0,
                fmt_tick(tick)
            )
            .unwrap();
        }

        for tick in self.y.ticks() {
            let ty = self.py(tick);
            if ty < top - 0.5 || ty > bottom + 0.5 {
                continue;
            }
            writeln!(
                out,
                "<line x1=\"{left:.1}\" y1=\"{ty:.1}\" x2=\"{:.1}\" y2=\"{ty:.1}\" \
                 stroke=\"#E8E8E8\" stroke-width=\"1\"/>",
                left + width
            )
            .unwrap();
            writeln!(
                out,
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" \
                 fill=\"#666\">{}</text>",
                left - 8.0,
                ty + 4.0,
                fmt_tick(tick)
            )
            .unwrap();
        }

        writeln!(
            out,
            "<rect x=\"{left:.1}\" y=\"{top:.1}\" width=\"{width:.1}\" height=\"{height:.1}\" \
             fill=\"none\" stroke=\"#AAA\" stroke-width=\"1\"/>"
        )
        .unwrap();

        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" \
             fill=\"#444\">{x_title}</text>",
            left + width / 2.0,
            bottom + 40.0
        )
        .unwrap();
        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" \
             fill=\"#444\" transform=\"rotate(-90 {:.1} {:.1})\">{y_title}</text>",
            left - 64.0,
            top + height / 2.0,
            left - 64.0,
            top + height / 2.0
        )
        .unwrap();
    }

    /// Polyline with circle markers for each series, plus a legend block
    /// in the top-right corner of the chart area.
    fn draw_series(&self, out: &mut String, series: &[Series], legend_title: &str) {
        for (i, s) in series.iter().enumerate() {
            let colour = PALETTE[i % PALETTE.len()];
            if s.points.is_empty() {
                continue;
            }

            let path: Vec<String> = s
                .points
                .iter()
                .map(|&(x, y)| format!("{:.1},{:.1}", self.px(x), self.py(y)))
                .collect();
            writeln!(
                out,
                "<polyline points=\"{}\" fill=\"none\" stroke=\"{colour}\" \
                 stroke-width=\"2.5\"/>",
                path.join(" ")
            )
            .unwrap();

            for &(x, y) in &s.points {
                writeln!(
                    out,
                    "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{colour}\"/>",
                    self.px(x),
                    self.py(y)
                )
                .unwrap();
            }
        }

        // legend
        let lx = self.left + self.width - 130.0;
        let mut ly = self.top + 14.0;
        writeln!(
            out,
            "<text x=\"{lx:.1}\" y=\"{ly:.1}\" font-size=\"12\" font-weight=\"bold\" \
             fill=\"#444\">{legend_title}</text>"
        )
        .unwrap();
        for (i, s) in series.iter().enumerate() {
            let colour = PALETTE[i % PALETTE.len()];
            ly += 17.0;
            writeln!(
                out,
                "<line x1=\"{lx:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" \
                 stroke=\"{colour}\" stroke-width=\"3\"/>",
                ly - 4.0,
                lx + 22.0,
                ly - 4.0
            )
            .unwrap();
            writeln!(
                out,
                "<text x=\"{:.1}\" y=\"{ly:.1}\" font-size=\"11\" fill=\"#333\">{}</text>",
                lx + 28.0,
                s.label
            )
            .unwrap();
        }
    }
}

/// Panel 1: mean execution time vs. matrix size, log-log, one line per
/// thread count.
fn draw_time_panel(out: &mut String, analysis: &Analysis, slot: usize) {
    let series: Vec<Series> = analysis
        .thread_counts()
        .into_iter()
        .map(|t| Series {
            label: format!("{t} threads"),
            points: analysis
                .records_for_threads(t)
                .iter()
                .map(|r| (f64::from(r.matrix_size), r.mean_time))
                .collect(),
        })
        .collect();

    let values: Vec<(f64, f64)> = series.iter().flat_map(|s| s.points.iter().copied()).collect();
    if values.is_empty() {
        draw_empty_panel(out, slot, "Mean Execution Time vs. Matrix Size");
        return;
    }

    let (x_lo, x_hi) = bounds(values.iter().map(|p| p.0));
    let (y_lo, y_hi) = bounds(values.iter().map(|p| p.1));
    let frame = Frame::new(slot, Axis::log(x_lo, x_hi), Axis::log(y_lo, y_hi));

    frame.draw_axes(
        out,
        "Mean Execution Time vs. Matrix Size",
        "Matrix size (N)",
        "Mean execution time (s)",
    );
    frame.draw_series(out, &series, "Threads");
}

/// Panel 2: speedup vs. thread count, one line per matrix size.
fn draw_speedup_panel(out: &mut String, analysis: &Analysis, slot: usize) {
    let series = per_size_series(analysis, |r| r.speedup);

    let values: Vec<(f64, f64)> = series.iter().flat_map(|s| s.points.iter().copied()).collect();
    if values.is_empty() {
        draw_empty_panel(out, slot, "Speedup vs. Thread Count");
        return;
    }

    let (_, x_hi) = bounds(values.iter().map(|p| p.0));
    let (_, y_hi) = bounds(values.iter().map(|p| p.1));
    let frame = Frame::new(slot, Axis::linear(x_hi), Axis::linear(y_hi));

    frame.draw_axes(
        out,
        "Speedup vs. Thread Count",
        "Thread count",
        "Speedup (T_serial / T_parallel)",
    );
    frame.draw_series(out, &series, "Size");
}

/// Panel 3: efficiency vs. thread count, one line per matrix size.
fn draw_efficiency_panel(out: &mut String, analysis: &Analysis, slot: usize) {
    let series = per_size_series(analysis, |r| r.efficiency);

    let values: Vec<(f64, f64)> = series.iter().flat_map(|s| s.points.iter().copied()).collect();
    if values.is_empty() {
        draw_empty_panel(out, slot, "Efficiency vs. Thread Count");
        return;
    }

    let (_, x_hi) = bounds(values.iter().map(|p| p.0));
    let (_, y_hi) = bounds(values.iter().map(|p| p.1));
    // Ideal scaling is 1.0; keep it in view even when efficiency is low.
    let frame = Frame::new(slot, Axis::linear(x_hi), Axis::linear(y_hi.max(1.0)));

    frame.draw_axes(
        out,
        "Efficiency vs. Thread Count",
        "Thread count",
        "Efficiency (speedup / threads)",
    );
    frame.draw_series(out, &series, "Size");
}

/// Panel 4: serial vs. best-parallel time per matrix size, grouped bars
/// on a log scale with value labels.
fn draw_comparison_panel(out: &mut String, analysis: &Analysis, slot: usize) {
    let rows = &analysis.improvements;
    if rows.is_empty() {
        draw_empty_panel(out, slot, "Serial vs. Best Parallel");
        return;
    }

    let (y_lo, y_hi) = bounds(
        rows.iter()
            .flat_map(|r| [r.serial_time, r.parallel_time].into_iter()),
    );
    // x axis is categorical; use unit positions per size group.
    let frame = Frame::new(
        slot,
        Axis {
            min: 0.0,
            max: rows.len() as f64,
            log: false,
        },
        Axis::log(y_lo, y_hi),
    );

    frame.draw_axes_categorical(
        out,
        "Serial vs. Best Parallel",
        "Matrix size",
        "Execution time (s)",
        rows.iter().map(|r| r.matrix_size.to_string()).collect(),
    );

    let group_width = frame.width / rows.len() as f64;
    let bar_width = (group_width * 0.32).min(60.0);
    let base_y = frame.top + frame.height;
    let serial_colour = PALETTE[2];
    let parallel_colour = PALETTE[0];

    for (i, row) in rows.iter().enumerate() {
        let centre = frame.left + (i as f64 + 0.5) * group_width;
        for (value, colour, offset) in [
            (row.serial_time, serial_colour, -bar_width),
            (row.parallel_time, parallel_colour, 0.0),
        ] {
            let x = centre + offset;
            let y = frame.py(value);
            writeln!(
                out,
                "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_width:.1}\" height=\"{:.1}\" \
                 fill=\"{colour}\" opacity=\"0.85\"/>",
                base_y - y
            )
            .unwrap();
            writeln!(
                out,
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\" \
                 fill=\"#333\">{:.2}</text>",
                x + bar_width / 2.0,
                y - 4.0,
                value
            )
            .unwrap();
        }
    }

    // legend
    let lx = frame.left + frame.width - 130.0;
    let mut ly = frame.top + 14.0;
    for (label, colour) in [("Serial", serial_colour), ("Best parallel", parallel_colour)] {
        writeln!(
            out,
            "<rect x=\"{lx:.1}\" y=\"{:.1}\" width=\"14\" height=\"10\" fill=\"{colour}\"/>",
            ly - 9.0
        )
        .unwrap();
        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{ly:.1}\" font-size=\"11\" fill=\"#333\">{label}</text>",
            lx + 20.0
        )
        .unwrap();
        ly += 17.0;
    }
}

impl Frame {
    /// Axes variant for the bar panel: y grid as usual, category labels
    /// centred under each group instead of numeric x ticks.
    fn draw_axes_categorical(
        &self,
        out: &mut String,
        title: &str,
        x_title: &str,
        y_title: &str,
        categories: Vec<String>,
    ) {
        let (left, top, width, height) = (self.left, self.top, self.width, self.height);
        let bottom = top + height;

        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"16\" \
             font-weight=\"bold\" fill=\"#333\">{title}</text>",
            left + width / 2.0,
            top - 18.0
        )
        .unwrap();

        for tick in self.y.ticks() {
            let ty = self.py(tick);
            if ty < top - 0.5 || ty > bottom + 0.5 {
                continue;
            }
            writeln!(
                out,
                "<line x1=\"{left:.1}\" y1=\"{ty:.1}\" x2=\"{:.1}\" y2=\"{ty:.1}\" \
                 stroke=\"#E8E8E8\" stroke-width=\"1\"/>",
                left + width
            )
            .unwrap();
            writeln!(
                out,
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" \
                 fill=\"#666\">{}</text>",
                left - 8.0,
                ty + 4.0,
                fmt_tick(tick)
            )
            .unwrap();
        }

        let group_width = width / categories.len() as f64;
        for (i, label) in categories.iter().enumerate() {
            writeln!(
                out,
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\" \
                 fill=\"#666\">{label}</text>",
                left + (i as f64 + 0.5) * group_width,
                bottom + 16.0
            )
            .unwrap();
        }

        writeln!(
            out,
            "<rect x=\"{left:.1}\" y=\"{top:.1}\" width=\"{width:.1}\" height=\"{height:.1}\" \
             fill=\"none\" stroke=\"#AAA\" stroke-width=\"1\"/>"
        )
        .unwrap();

        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" \
             fill=\"#444\">{x_title}</text>",
            left + width / 2.0,
            bottom + 40.0
        )
        .unwrap();
        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" \
             fill=\"#444\" transform=\"rotate(-90 {:.1} {:.1})\">{y_title}</text>",
            left - 64.0,
            top + height / 2.0,
            left - 64.0,
            top + height / 2.0
        )
        .unwrap();
    }
}

/// One series per matrix size over thread counts, using a derived metric
/// that may be undefined. Sizes where the metric is `None` everywhere
/// produce no series; individual `None` points are skipped so the line
/// simply omits them.
fn per_size_series<F>(analysis: &Analysis, metric: F) -> Vec<Series>
where
    F: Fn(&speedup_core::AggregatedRecord) -> Option<f64>,
{
    analysis
        .matrix_sizes()
        .into_iter()
        .filter_map(|size| {
            let points: Vec<(f64, f64)> = analysis
                .records_for_size(size)
                .iter()
                .filter_map(|r| metric(r).map(|v| (f64::from(r.num_threads), v)))
                .collect();
            if points.is_empty() {
                None
            } else {
                Some(Series {
                    label: size.to_string(),
                    points,
                })
            }
        })
        .collect()
}

fn draw_empty_panel(out: &mut String, slot: usize, title: &str) {
    let frame = Frame::new(slot, Axis::linear(1.0), Axis::linear(1.0));
    writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"16\" \
         font-weight=\"bold\" fill=\"#333\">{title}</text>",
        frame.left + frame.width / 2.0,
        frame.top - 18.0
    )
    .unwrap();
    writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" \
         fill=\"#999\">no data</text>",
        frame.left + frame.width / 2.0,
        frame.top + frame.height / 2.0
    )
    .unwrap();
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// 1-2-5 ticks per decade across the axis range.
fn log_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut power = lo.log10().floor() as i32;
    while 10f64.powi(power) <= hi * 1.1 {
        for mantissa in [1.0, 2.0, 5.0] {
            let tick = mantissa * 10f64.powi(power);
            if tick >= lo && tick <= hi {
                ticks.push(tick);
            }
        }
        power += 1;
    }
    ticks
}

/// Roughly six ticks with a 1/2/5-scaled step.
fn linear_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let span = hi - lo;
    if span <= 0.0 {
        return vec![lo];
    }
    let raw_step = span / 6.0;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw_step)
        .unwrap_or(magnitude);

    let mut ticks = Vec::new();
    let mut tick = (lo / step).ceil() * step;
    while tick <= hi + step * 1e-9 {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

/// Compact tick label: no trailing zeros, no scientific notation in the
/// ranges this study produces.
fn fmt_tick(v: f64) -> String {
    if v >= 100.0 || (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else if v >= 1.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speedup_core::{ParallelRecord, SerialRecord};

    fn example() -> Analysis {
        let serial = vec![
            SerialRecord {
                matrix_size: 500,
                execution_time: 1.5,
            },
            SerialRecord {
                matrix_size: 1000,
                execution_time: 10.0,
            },
        ];
        let parallel = vec![
            ParallelRecord {
                matrix_size: 500,
                num_threads: 2,
                execution_time: 0.9,
            },
            ParallelRecord {
                matrix_size: 500,
                num_threads: 4,
                execution_time: 0.6,
            },
            ParallelRecord {
                matrix_size: 1000,
                num_threads: 2,
                execution_time: 5.1,
            },
            ParallelRecord {
                matrix_size: 1000,
                num_threads: 4,
                execution_time: 2.9,
            },
        ];
        Analysis::run(&serial, &parallel).unwrap()
    }

    #[test]
    fn test_render_chart_structure() {
        let svg = render_chart(&example());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Mean Execution Time vs. Matrix Size"));
        assert!(svg.contains("Speedup vs. Thread Count"));
        assert!(svg.contains("Efficiency vs. Thread Count"));
        assert!(svg.contains("Serial vs. Best Parallel"));
        // two line series in panel 1 (threads 2 and 4) plus two each in
        // panels 2 and 3 (sizes 500 and 1000)
        assert_eq!(svg.matches("<polyline").count(), 6);
        // grouped bars: 2 sizes x 2 bars
        assert_eq!(svg.matches("opacity=\"0.85\"").count(), 4);
    }

    #[test]
    fn test_baseline_gap_omitted_from_derived_panels() {
        let serial = vec![SerialRecord {
            matrix_size: 1000,
            execution_time: 10.0,
        }];
        let parallel = vec![
            ParallelRecord {
                matrix_size: 1000,
                num_threads: 4,
                execution_time: 2.9,
            },
            ParallelRecord {
                matrix_size: 2000,
                num_threads: 4,
                execution_time: 25.0,
            },
        ];
        let analysis = Analysis::run(&serial, &parallel).unwrap();

        let svg = render_chart(&analysis);
        // panel 1 draws one series (threads=4) covering both sizes;
        // panels 2 and 3 draw one series each (size 1000 only)
        assert_eq!(svg.matches("<polyline").count(), 3);
        // comparison bars only for size 1000
        assert_eq!(svg.matches("opacity=\"0.85\"").count(), 2);
    }

    #[test]
    fn test_empty_analysis_renders_placeholder() {
        let analysis = Analysis::run(&[], &[]).unwrap();
        let svg = render_chart(&analysis);
        assert_eq!(svg.matches("no data").count(), 4);
    }

    #[test]
    fn test_write_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        write_chart(&example(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("</svg>"));
    }

    #[test]
    fn test_log_ticks() {
        let ticks = log_ticks(0.5, 100.0);
        assert!(ticks.contains(&1.0));
        assert!(ticks.contains(&2.0));
        assert!(ticks.contains(&50.0));
        assert!(ticks.iter().all(|&t| t >= 0.5 && t <= 100.0));
    }

    #[test]
    fn test_linear_ticks() {
        let ticks = linear_ticks(0.0, 10.0);
        assert!(ticks.contains(&0.0));
        assert!(ticks.contains(&10.0));
        assert!(ticks.len() >= 4 && ticks.len() <= 12);
    }
}
