//! Canvas-space geometry for the chart painter.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::{FRAC_PI_2, TAU};

/// Arc `(start, end)` angles in radians for each gauge segment, starting at
/// twelve o'clock and running clockwise. Empty when the total is not positive.
pub fn gauge_arcs(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            let sweep = value.max(0.0) / total * TAU;
            let arc = (start, start + sweep);
            start += sweep;
            arc
        })
        .collect()
}

/// Radar vertices: axis `i` points at `-90° + i * 360° / n`, scaled by
/// `value / max` and clamped to the outer ring.
pub fn radar_points(values: &[f64], max: f64, center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    if values.is_empty() || max <= 0.0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / values.len() as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            #[allow(clippy::cast_precision_loss)]
            let angle = -FRAC_PI_2 + step * i as f64;
            let scale = (value / max).clamp(0.0, 1.0);
            (center.0 + radius * scale * angle.cos(), center.1 + radius * scale * angle.sin())
        })
        .collect()
}

/// Polyline for a 0..=100 series inside a `width` x `height` plot with
/// `pad` px margins. Points are spaced evenly left to right.
pub fn line_points(values: &[f64], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let plot_w = (width - 2.0 * pad).max(0.0);
    let plot_h = (height - 2.0 * pad).max(0.0);
    #[allow(clippy::cast_precision_loss)]
    let step = if values.len() > 1 { plot_w / (values.len() - 1) as f64 } else { 0.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let norm = value.clamp(0.0, 100.0) / 100.0;
            #[allow(clippy::cast_precision_loss)]
            let x = pad + step * i as f64;
            (x, pad + plot_h * (1.0 - norm))
        })
        .collect()
}
