use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::OnceLock,
};

use anyhow::{anyhow, Context, Result};
use itertools::{izip, Itertools};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::register_font;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use bench_plot_cli_types::OutputFormat;

use crate::{
    chart::{Figure, Panel, SeriesColor},
    config::ChartSettings,
    parsers::RunSeries,
    run_name::RunParameters,
    units::total_throughput,
};

const FONT_FAMILY: &str = "sans-serif";
const BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const TITLE_FONT_SIZE: u32 = 22;
const TITLE_LINE_HEIGHT: u32 = 26;
const TITLE_PADDING: u32 = 5;
const PANEL_TITLE_FONT_SIZE: u32 = 16;
const LINE_WIDTH: u32 = 2;

const CSV_HEADER: [&str; 7] = [
    "time_ms",
    "num_reqs",
    "miss_ratio",
    "load_admit",
    "cache_tp",
    "core_tp",
    "total_tp",
];

/// Turns one parsed run into an artifact on disk.
pub trait Reporter {
    /// File extension of the written artifact
    fn extension(&self) -> &'static str;

    fn write(&self, params: &RunParameters, series: &RunSeries, output: &Path) -> Result<()>;
}

/// Pick the reporter for the requested output format.
pub fn reporter_for(format: OutputFormat, settings: ChartSettings) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Png => Box::new(PngReporter::new(settings)),
        OutputFormat::Csv => Box::new(CsvReporter),
    }
}

/// Renders the four-panel figure into a PNG image
pub struct PngReporter {
    settings: ChartSettings,
}

impl PngReporter {
    /// Image sizes below the supported minimum fall back to the default size.
    pub fn new(settings: ChartSettings) -> PngReporter {
        PngReporter {
            settings: settings.with_supported_size(),
        }
    }
}

/// Make the bundled font the one all chart text is drawn with.
///
/// Charts never depend on fonts installed on the host.
fn register_bundled_font() -> Result<()> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let registered = *REGISTERED.get_or_init(|| {
        register_font(FONT_FAMILY, FontStyle::Normal, BUNDLED_FONT).is_ok()
    });

    if registered {
        Ok(())
    } else {
        Err(anyhow!("Bundled chart font could not be loaded"))
    }
}

impl Reporter for PngReporter {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn write(&self, params: &RunParameters, series: &RunSeries, output: &Path) -> Result<()> {
        register_bundled_font()?;
        let figure = Figure::for_run(params, series, &self.settings);

        let root = BitMapBackend::new(output, (self.settings.width, self.settings.height))
            .into_drawing_area();
        draw_figure(&root, &figure)
            .map_err(|e| anyhow!("Failed to draw chart {}: {}", output.display(), e))?;
        root.present()
            .map_err(|e| anyhow!("Failed to write image {}: {}", output.display(), e))?;

        Ok(())
    }
}

fn rgb(color: SeriesColor) -> RGBColor {
    match color {
        SeriesColor::Yellow => YELLOW,
        SeriesColor::Black => BLACK,
        SeriesColor::Red => RED,
        SeriesColor::Green => GREEN,
        SeriesColor::Cyan => CYAN,
        SeriesColor::Blue => BLUE,
    }
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let body = draw_title(root, &figure.title)?;

    let (_, height) = body.dim_in_pixel();
    let no_columns: [u32; 0] = [];
    let areas = body.split_by_breakpoints(no_columns, figure.row_breakpoints(height));

    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel, figure.x_range)?;
    }

    Ok(())
}

/// Draw the centered title lines and return the area below them.
fn draw_title<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    lines: &[String],
) -> Result<DrawingArea<DB, Shift>, DrawingAreaErrorKind<DB::ErrorType>> {
    let (width, height) = root.dim_in_pixel();
    let style = TextStyle::from((FONT_FAMILY, TITLE_FONT_SIZE).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));

    let mut y = TITLE_PADDING;
    for line in lines {
        root.draw_text(line, &style, ((width / 2) as i32, y as i32))?;
        y += TITLE_LINE_HEIGHT;
    }

    let band = (y + TITLE_PADDING).min(height);
    let (_, body) = root.split_vertically(band);
    Ok(body)
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    (x_min, x_max): (f64, f64),
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (y_min, y_max) = panel.y_range;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT_FAMILY, PANEL_TITLE_FONT_SIZE))
        .margin(8)
        .x_label_area_size(if panel.x_label.is_some() { 40 } else { 25 })
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    let mut mesh = chart.configure_mesh();
    if let Some(x_label) = &panel.x_label {
        mesh.x_desc(x_label.as_str());
    }
    if let Some(y_label) = &panel.y_label {
        mesh.y_desc(y_label.as_str());
    }
    mesh.draw()?;

    for series in &panel.series {
        let color = rgb(series.color);
        // plotters does not clip; far out-of-range points overflow pixel coordinates
        let points = series
            .points
            .iter()
            .map(|(x, y)| (x.clamp(x_min, x_max), y.clamp(y_min, y_max)));
        let anno = chart.draw_series(LineSeries::new(points, color.stroke_width(LINE_WIDTH)))?;
        if panel.legend {
            anno.label(series.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });
        }
    }

    if panel.legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::MiddleLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}

/// Dumps the parsed samples as tab-separated values
pub struct CsvReporter;

impl CsvReporter {
    fn to_csv(series: &RunSeries) -> String {
        let total = total_throughput(series.cache_tps(), series.core_tps());

        let mut out = CSV_HEADER.join("\t");
        out.push('\n');
        for (time, num_reqs, miss_ratio, load_admit, cache_tp, core_tp, total_tp) in izip!(
            series.times(),
            series.num_reqs(),
            series.miss_ratios(),
            series.load_admits(),
            series.cache_tps(),
            series.core_tps(),
            &total
        ) {
            let row = [
                format_float(*time),
                num_reqs.to_string(),
                format_float(*miss_ratio),
                format_float(*load_admit),
                format_float(*cache_tp),
                format_float(*core_tp),
                format_float(*total_tp),
            ];
            out.push_str(&row.iter().join("\t"));
            out.push('\n');
        }
        out
    }
}

impl Reporter for CsvReporter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write(&self, _params: &RunParameters, series: &RunSeries, output: &Path) -> Result<()> {
        let file = File::create(output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(Self::to_csv(series).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Whole numbers keep one decimal place so that columns stay visibly floats
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
