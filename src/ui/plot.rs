use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};

const CHART_HEIGHT: f32 = 240.0;

// ---------------------------------------------------------------------------
// Categorical bar charts
// ---------------------------------------------------------------------------

/// One bar series: a name for the legend, a colour per bar, and values in
/// category order.
pub struct Series<'a> {
    pub name: &'a str,
    pub values: Vec<f64>,
    pub colors: Vec<Color32>,
}

impl<'a> Series<'a> {
    pub fn uniform(name: &'a str, values: Vec<f64>, color: Color32) -> Self {
        let colors = vec![color; values.len()];
        Series {
            name,
            values,
            colors,
        }
    }
}

/// Bar chart over named categories. Several series are drawn side by side.
pub fn bar_chart(ui: &mut Ui, title: &str, y_label: &str, categories: &[String], series: Vec<Series<'_>>) {
    ui.strong(title);
    if categories.is_empty() {
        ui.label("Nothing to chart.");
        return;
    }

    let n_series = series.len().max(1) as f64;
    let width = 0.8 / n_series;
    let charts: Vec<BarChart> = series
        .into_iter()
        .enumerate()
        .map(|(s, serie)| {
            let offset = (s as f64 - (n_series - 1.0) / 2.0) * width;
            let bars = categories
                .iter()
                .zip(serie.values.iter().zip(serie.colors.iter()))
                .enumerate()
                .map(|(i, (category, (&value, &color)))| {
                    Bar::new(i as f64 + offset, value)
                        .width(width * 0.95)
                        .name(category)
                        .fill(color)
                })
                .collect();
            BarChart::new(bars).name(serie.name)
        })
        .collect();

    let labels = categories.to_vec();
    Plot::new(title)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark, range| category_label(&labels, mark, range))
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

fn category_label(labels: &[String], mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Line chart over numeric x
// ---------------------------------------------------------------------------

pub fn line_chart(ui: &mut Ui, title: &str, x_label: &str, y_label: &str, points: &[[f64; 2]], color: Color32) {
    ui.strong(title);
    if points.is_empty() {
        ui.label("Nothing to chart.");
        return;
    }

    Plot::new(title)
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.to_vec()))
                    .color(color)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points.to_vec()))
                    .color(color)
                    .radius(3.5),
            );
        });
}

/// Line over categories (e.g. spend per player kind).
pub fn category_line_chart(ui: &mut Ui, title: &str, y_label: &str, categories: &[String], values: &[f64], color: Color32) {
    ui.strong(title);
    if categories.is_empty() {
        ui.label("Nothing to chart.");
        return;
    }

    let points: Vec<[f64; 2]> = values.iter().enumerate().map(|(i, &v)| [i as f64, v]).collect();
    let labels = categories.to_vec();
    Plot::new(title)
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark, range| category_label(&labels, mark, range))
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(points.clone())).color(color).width(2.0));
            plot_ui.points(Points::new(PlotPoints::from(points)).color(color).radius(3.5));
        });
}
