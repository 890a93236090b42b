//! Backend-independent description of the per-run figure
//!
//! The figure stacks four panels over a shared time axis. Reporters decide
//! how to draw it; building it here keeps the layout free of any drawing
//! library.

use itertools::izip;

use crate::config::ChartSettings;
use crate::parsers::RunSeries;
use crate::run_name::RunParameters;
use crate::units::{finite_bounds, is_usable_range, padded_range, total_throughput};

/// Line colors used by the panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Yellow,
    Black,
    Red,
    Green,
    Cyan,
    Blue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: SeriesColor,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    fn new(label: &str, color: SeriesColor, times: &[f64], values: &[f64]) -> Series {
        Series {
            label: label.to_string(),
            color,
            points: izip!(times, values).map(|(t, v)| (*t, *v)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    /// Relative height; the throughput panel spans two rows
    pub rows: u32,
    pub series: Vec<Series>,
    pub y_range: (f64, f64),
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub legend: bool,
}

impl Panel {
    fn new(title: &str, series: Vec<Series>, y_limit: Option<(f64, f64)>) -> Panel {
        let y_range = match y_limit {
            Some(limit) if is_usable_range(limit) => limit,
            _ => {
                if let Some((lo, hi)) = y_limit {
                    log::debug!("Ignoring unusable y range [{}, {}] for {}", lo, hi, title);
                }
                padded_range(finite_bounds(
                    series.iter().flat_map(|s| s.points.iter().map(|(_, y)| *y)),
                ))
            }
        };
        Panel {
            title: title.to_string(),
            rows: 1,
            series,
            y_range,
            x_label: None,
            y_label: None,
            legend: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Title lines drawn above the panels
    pub title: Vec<String>,
    /// Time range shared by all panels, in milliseconds
    pub x_range: (f64, f64),
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Lay out the four panels of a run.
    pub fn for_run(params: &RunParameters, series: &RunSeries, settings: &ChartSettings) -> Figure {
        let times = series.times();
        let num_reqs: Vec<f64> = series.num_reqs().iter().map(|n| *n as f64).collect();
        let total = total_throughput(series.cache_tps(), series.core_tps());

        let requests = Panel::new(
            "#4K-Reqs",
            vec![Series::new("#4K-Reqs", SeriesColor::Yellow, times, &num_reqs)],
            None,
        );

        let miss_ratio = Panel::new(
            "miss_ratio",
            vec![Series::new(
                "miss_ratio",
                SeriesColor::Black,
                times,
                series.miss_ratios(),
            )],
            settings.miss_ratio_ylim,
        );

        let load_admit = Panel::new(
            "load_admit",
            vec![Series::new(
                "load_admit",
                SeriesColor::Red,
                times,
                series.load_admits(),
            )],
            settings.load_admit_ylim,
        );

        let mut throughput = Panel::new(
            "Throughput",
            vec![
                Series::new("Total", SeriesColor::Green, times, &total),
                Series::new("Cache", SeriesColor::Cyan, times, series.cache_tps()),
                Series::new("Core", SeriesColor::Blue, times, series.core_tps()),
            ],
            settings.throughput_ylim,
        );
        throughput.rows = 2;
        throughput.x_label = Some("Time (ms)".to_string());
        throughput.y_label = Some("MiB/s".to_string());
        throughput.legend = true;

        Figure {
            title: params.title_lines(),
            x_range: padded_range(finite_bounds(times.iter().copied())),
            panels: vec![requests, miss_ratio, load_admit, throughput],
        }
    }

    /// Total number of rows the panels are stacked in.
    pub fn rows(&self) -> u32 {
        self.panels.iter().map(|p| p.rows).sum()
    }

    /// Pixel offsets where each panel but the first starts, for `height` pixels.
    pub fn row_breakpoints(&self, height: u32) -> Vec<u32> {
        let rows = u64::from(self.rows().max(1));
        self.panels
            .iter()
            .scan(0, |acc, panel| {
                *acc += panel.rows;
                Some(*acc)
            })
            .take(self.panels.len().saturating_sub(1))
            .map(|row| (u64::from(height) * u64::from(row) / rows) as u32)
            .collect()
    }
}
