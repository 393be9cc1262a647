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

//! HTML export with interactive charts.
//!
//! Generates a self-contained page with Chart.js-backed versions of the
//! four figure panels plus the improvement table. This is the
//! interactive surface of the report; open it in any browser.

use crate::error::Result;
use chrono::Utc;
use serde::Serialize;
use speedup_core::Analysis;
use std::fs;
use std::path::Path;

/// One chart line: label plus `{x, y}` points, Chart.js-shaped.
#[derive(Debug, Serialize)]
struct Series {
    label: String,
    points: Vec<Point>,
}

#[derive(Debug, Serialize)]
struct Point {
    x: f64,
    y: f64,
}

/// The serial vs. best-parallel pair for one matrix size.
#[derive(Debug, Serialize)]
struct CompareRow {
    size: u32,
    serial: f64,
    parallel: f64,
    improvement_pct: f64,
    speedup: f64,
    threads: u32,
}

/// Everything the embedded script needs, serialized once into the page.
#[derive(Debug, Serialize)]
struct ChartData {
    time_series: Vec<Series>,
    speedup_series: Vec<Series>,
    efficiency_series: Vec<Series>,
    comparison: Vec<CompareRow>,
}

impl ChartData {
    fn from_analysis(analysis: &Analysis) -> Self {
        let time_series = analysis
            .thread_counts()
            .into_iter()
            .map(|t| Series {
                label: format!("{t} threads"),
                points: analysis
                    .records_for_threads(t)
                    .iter()
                    .map(|r| Point {
                        x: f64::from(r.matrix_size),
                        y: r.mean_time,
                    })
                    .collect(),
            })
            .collect();

        let speedup_series = per_size_series(analysis, |r| r.speedup);
        let efficiency_series = per_size_series(analysis, |r| r.efficiency);

        let comparison = analysis
            .improvements
            .iter()
            .map(|row| CompareRow {
                size: row.matrix_size,
                serial: row.serial_time,
                parallel: row.parallel_time,
                improvement_pct: row.improvement_pct,
                speedup: row.speedup,
                threads: row.num_threads,
            })
            .collect();

        Self {
            time_series,
            speedup_series,
            efficiency_series,
            comparison,
        }
    }
}

fn per_size_series<F>(analysis: &Analysis, metric: F) -> Vec<Series>
where
    F: Fn(&speedup_core::AggregatedRecord) -> Option<f64>,
{
    analysis
        .matrix_sizes()
        .into_iter()
        .filter_map(|size| {
            let points: Vec<Point> = analysis
                .records_for_size(size)
                .iter()
                .filter_map(|r| {
                    metric(r).map(|v| Point {
                        x: f64::from(r.num_threads),
                        y: v,
                    })
                })
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

/// Exports the interactive HTML report.
///
/// # Errors
///
/// Fails if the chart data cannot be serialized or the file cannot be
/// written.
pub fn export_html(analysis: &Analysis, path: &Path) -> Result<()> {
    let html = render_html(analysis)?;
    fs::write(path, html).map_err(|e| crate::error::ReportError::io_error(path, e))
}

fn render_html(analysis: &Analysis) -> Result<String> {
    let data = serde_json::to_string(&ChartData::from_analysis(analysis))?;
    let timestamp = Utc::now().to_rfc3339();

    let mut table_rows = String::new();
    for row in &analysis.improvements {
        table_rows.push_str(&format!(
            "<tr><td>{}</td><td>{:.4}</td><td>{:.4}</td><td>{:.2}</td><td>{:.3}</td><td>{}</td></tr>\n",
            row.matrix_size,
            row.serial_time,
            row.parallel_time,
            row.improvement_pct,
            row.speedup,
            row.num_threads
        ));
    }

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Serial vs. Parallel Matrix Inversion</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
            background: #f5f5f5;
            color: #333;
        }}
        h1 {{
            text-align: center;
            color: #2c3e50;
        }}
        .timestamp {{
            text-align: center;
            color: #7f8c8d;
            margin-bottom: 30px;
        }}
        .container {{
            max-width: 1400px;
            margin: 0 auto;
        }}
        .chart-row {{
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 20px;
            margin-bottom: 20px;
        }}
        .chart-container {{
            background: white;
            border-radius: 8px;
            padding: 20px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        @media (max-width: 900px) {{
            .chart-row {{
                grid-template-columns: 1fr;
            }}
        }}
        table {{
            width: 100%;
            border-collapse: collapse;
            background: white;
            border-radius: 8px;
            overflow: hidden;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        th, td {{
            padding: 10px 14px;
            text-align: right;
            border-bottom: 1px solid #ecf0f1;
        }}
        th {{
            background: #3498db;
            color: white;
        }}
        th:first-child, td:first-child {{
            text-align: left;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Serial vs. Parallel Matrix Inversion</h1>
        <p class="timestamp">Generated {timestamp}</p>

        <div class="chart-row">
            <div class="chart-container"><canvas id="timeChart"></canvas></div>
            <div class="chart-container"><canvas id="speedupChart"></canvas></div>
        </div>
        <div class="chart-row">
            <div class="chart-container"><canvas id="efficiencyChart"></canvas></div>
            <div class="chart-container"><canvas id="comparisonChart"></canvas></div>
        </div>

        <h2>Improvement over serial</h2>
        <table>
            <tr><th>Matrix size</th><th>Serial (s)</th><th>Best parallel (s)</th>
                <th>Improvement (%)</th><th>Speedup</th><th>Threads</th></tr>
            {table_rows}
        </table>
    </div>

    <script>
        const data = {data};
        const palette = ['#4C78A8', '#F58518', '#E45756', '#72B7B2',
                         '#54A24B', '#B279A2', '#FF9DA7', '#9D755D'];

        function lineDatasets(series) {{
            return series.map((s, i) => ({{
                label: s.label,
                data: s.points,
                borderColor: palette[i % palette.length],
                backgroundColor: palette[i % palette.length],
                tension: 0,
            }}));
        }}

        function lineChart(id, title, series, xTitle, yTitle, logX, logY) {{
            new Chart(document.getElementById(id), {{
                type: 'line',
                data: {{ datasets: lineDatasets(series) }},
                options: {{
                    plugins: {{ title: {{ display: true, text: title }} }},
                    scales: {{
                        x: {{
                            type: logX ? 'logarithmic' : 'linear',
                            title: {{ display: true, text: xTitle }},
                        }},
                        y: {{
                            type: logY ? 'logarithmic' : 'linear',
                            title: {{ display: true, text: yTitle }},
                        }},
                    }},
                }},
            }});
        }}

        lineChart('timeChart', 'Mean execution time vs. matrix size',
                  data.time_series, 'Matrix size (N)', 'Mean time (s)', true, true);
        lineChart('speedupChart', 'Speedup vs. thread count',
                  data.speedup_series, 'Threads', 'Speedup', false, false);
        lineChart('efficiencyChart', 'Efficiency vs. thread count',
                  data.efficiency_series, 'Threads', 'Efficiency', false, false);

        new Chart(document.getElementById('comparisonChart'), {{
            type: 'bar',
            data: {{
                labels: data.comparison.map(r => r.size),
                datasets: [
                    {{
                        label: 'Serial',
                        data: data.comparison.map(r => r.serial),
                        backgroundColor: '#E45756',
                    }},
                    {{
                        label: 'Best parallel',
                        data: data.comparison.map(r => r.parallel),
                        backgroundColor: '#4C78A8',
                    }},
                ],
            }},
            options: {{
                plugins: {{ title: {{ display: true, text: 'Serial vs. best parallel' }} }},
                scales: {{
                    y: {{
                        type: 'logarithmic',
                        title: {{ display: true, text: 'Execution time (s)' }},
                    }},
                }},
            }},
        }});
    </script>
</body>
</html>
"##
    ))
}
