//! Close-price line chart, rendered to SVG.

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use serde::Serialize;

use crate::error::ChartError;
use crate::structs::{PricePoint, Symbol};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 400;

/// Everything needed to draw the chart; rendering is a separate step.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: String,
    pub points: Vec<PricePoint>,
}

impl Chart {
    pub fn price_history(symbol: &Symbol, points: Vec<PricePoint>) -> Self {
        Self {
            title: format!("{} Price History", symbol),
            x_label: "Date".to_string(),
            y_label: "Price".to_string(),
            legend: "Close Price".to_string(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn render_svg(&self) -> Result<String, ChartError> {
        self.render_svg_sized(WIDTH, HEIGHT)
    }

    pub fn render_svg_sized(&self, width: u32, height: u32) -> Result<String, ChartError> {
        let (x_min, x_max) = self.date_bounds().ok_or(ChartError::NoPoints)?;
        let (y_min, y_max) = self.price_bounds().ok_or(ChartError::NoPoints)?;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 24).into_font())
                .margin(15)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)
                .map_err(render_err)?;

            chart
                .configure_mesh()
                .x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
                .draw()
                .map_err(render_err)?;

            chart
                .draw_series(LineSeries::new(
                    self.points.iter().map(|p| (p.date, p.close)),
                    &BLUE,
                ))
                .map_err(render_err)?
                .label(self.legend.as_str())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(render_err)?;

            root.present().map_err(render_err)?;
        }
        Ok(svg)
    }

    // A single date still needs a non-empty axis.
    fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.points.first()?.date;
        let (lo, hi) = self
            .points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(p.date), hi.max(p.date)));
        if lo == hi {
            Some((lo - Duration::days(1), hi + Duration::days(1)))
        } else {
            Some((lo, hi))
        }
    }

    fn price_bounds(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let min = self.points.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
        let max = self
            .points
            .iter()
            .map(|p| p.close)
            .fold(f64::NEG_INFINITY, f64::max);
        let padding = (max - min).max(1e-8) * 0.1;
        Some((min - padding, max + padding))
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}
