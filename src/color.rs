use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Mix, Srgb};

use crate::data::model::SoldStatus;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

fn to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Category colours: team / player kind → Color32
// ---------------------------------------------------------------------------

/// Assigns every category label a distinct, stable colour.
#[derive(Debug, Clone, Default)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
}

impl CategoryColors {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a String>) -> Self {
        let labels: Vec<&String> = labels.into_iter().collect();
        let palette = generate_palette(labels.len());
        let mapping = labels
            .into_iter()
            .zip(palette)
            .map(|(label, c)| (label.clone(), c))
            .collect();
        CategoryColors { mapping }
    }

    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }
}

pub fn status_color(status: SoldStatus) -> Color32 {
    match status {
        SoldStatus::Sold => Color32::from_rgb(76, 175, 80),
        SoldStatus::Unsold => Color32::from_rgb(239, 108, 0),
        SoldStatus::Retained => Color32::from_rgb(126, 87, 194),
    }
}

// ---------------------------------------------------------------------------
// Value gradients for price columns
// ---------------------------------------------------------------------------

/// Named gradients used to tint price cells, light (low) to saturated (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    Greens,
    Oranges,
    Blues,
    Purples,
    YellowRed,
}

impl Gradient {
    fn hue(self) -> f32 {
        match self {
            Gradient::Greens => 120.0,
            Gradient::Oranges => 30.0,
            Gradient::Blues => 210.0,
            Gradient::Purples => 275.0,
            Gradient::YellowRed => 10.0,
        }
    }

    /// Colour for `value` relative to `[min, max]`. A degenerate range maps
    /// to the low end.
    pub fn color(self, value: f64, min: f64, max: f64) -> Color32 {
        let range = max - min;
        let t = if range.abs() < f64::EPSILON {
            0.0
        } else {
            ((value - min) / range).clamp(0.0, 1.0) as f32
        };
        let low = Hsl::new(self.hue() + 40.0, 0.45, 0.80);
        let high = Hsl::new(self.hue(), 0.85, 0.45);
        to_color32(low.mix(high, t))
    }
}

/// `(min, max)` of `values`, or `(0, 0)` when empty.
pub fn value_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max { (0.0, 0.0) } else { (min, max) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(10).len(), 10);
    }

    #[test]
    fn unknown_category_is_gray() {
        let labels = vec!["BAT".to_string(), "BOWL".to_string()];
        let colors = CategoryColors::new(&labels);
        assert_ne!(colors.color_for("BAT"), colors.color_for("BOWL"));
        assert_eq!(colors.color_for("WK"), Color32::GRAY);
    }

    #[test]
    fn gradient_ends_differ_and_clamp() {
        let low = Gradient::Blues.color(0.0, 0.0, 10.0);
        let high = Gradient::Blues.color(10.0, 0.0, 10.0);
        assert_ne!(low, high);
        assert_eq!(Gradient::Blues.color(50.0, 0.0, 10.0), high);
        assert_eq!(Gradient::Blues.color(3.0, 3.0, 3.0), Gradient::Blues.color(0.0, 0.0, 0.0));
    }

    #[test]
    fn range_of_empty_is_zero() {
        assert_eq!(value_range(Vec::new()), (0.0, 0.0));
        assert_eq!(value_range([2.0, -1.0, 5.5]), (-1.0, 5.5));
    }
}
