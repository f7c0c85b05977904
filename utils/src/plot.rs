use anyhow::{bail, Context};
use sigmoid_lut::{logger::ansi, GeneratorConfig, LookupTable, Variant};
use structopt::StructOpt;

use std::path::{Path, PathBuf};

use plotters::prelude::*;

#[derive(StructOpt)]
pub struct PlotOptions {
    /// Table variant the file was generated with: 'counting' or 'range'
    #[structopt(short, long, default_value = "range")]
    variant: Variant,
    /// Case table to reload, defaults to the variant's table file
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,
    /// Image to write, defaults to the variant's plot file
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

const LINE_COLOUR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOUR: RGBAColor = RGBAColor(0, 0, 0, 0.15);

const LINE_STROKE_WIDTH: u32 = 4;

const X_LABEL_AREA_SIZE: i32 = 140;
const Y_LABEL_AREA_SIZE: i32 = 180;

const TITLE_FONT_SIZE: i32 = 80;
const LABEL_FONT_SIZE: i32 = 56;
const TICKS_FONT_SIZE: i32 = 44;

const FONT: &str = "sans-serif";

const MARGIN: i32 = 60;

/// 6.4in x 4.8in at 400 DPI
const IMG_DIMS: (u32, u32) = (2560, 1920);

impl PlotOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let input = self.input.clone().unwrap_or_else(|| PathBuf::from(self.variant.default_table_path()));
        let output = self.output.clone().unwrap_or_else(|| PathBuf::from(self.variant.default_plot_path()));

        let table = LookupTable::load(&input)
            .with_context(|| format!("Failed to reload table {}.", input.display()))?;

        println!("Reloaded [{}] ({} entries)", input.display(), table.len());

        plot_sigmoid_lookup_table(&table, &self.variant.config(), &output)?;

        println!("Plot saved to {}", ansi(output.display(), "32;1"));

        Ok(())
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min < max {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    }
}

/// Draws decoded output against the domain's real inputs.
pub fn plot_sigmoid_lookup_table(table: &LookupTable, config: &GeneratorConfig, path: &Path) -> anyhow::Result<()> {
    let points = table.plot_points(config).with_context(|| "Table does not fit the selected variant.")?;

    if points.is_empty() {
        bail!("Cannot plot an empty table!");
    }

    let (x_min, x_max) = bounds(points.iter().map(|p| p.0));
    let (y_min, y_max) = if config.plot_unit_range { (0.0, 1.0) } else { bounds(points.iter().map(|p| p.1)) };

    let root = BitMapBackend::new(path, IMG_DIMS).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(config.plot_labels.title, (FONT, TITLE_FONT_SIZE))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(GRID_COLOUR)
        .x_label_style((FONT, TICKS_FONT_SIZE).into_font())
        .y_label_style((FONT, TICKS_FONT_SIZE).into_font())
        .axis_desc_style((FONT, LABEL_FONT_SIZE).into_font())
        .x_desc(config.plot_labels.x_desc)
        .y_desc(config.plot_labels.y_desc)
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        ShapeStyle::from(LINE_COLOUR).stroke_width(LINE_STROKE_WIDTH),
    ))?;

    root.present().with_context(|| format!("Failed to write plot {}.", path.display()))?;

    Ok(())
}
