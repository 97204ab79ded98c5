//! Pie charts rasterized onto a stretched character grid.
//!
//! Slices are laid out counter-clockwise starting at three o'clock, in data
//! order. Small slices can be folded into one trailing "Other" slice.

use std::f64::consts::TAU;

use tabula_core::{Result, TabulaError};
use tabula_render::{Canvas, GlyphLine};
use tabula_style::{ColorToken, PieGraphFormatting};
use tabula_text::measure;

use crate::charts::GraphSettings;

/// One slice after grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the total, in `[0, 1]`.
    pub share: f64,
    pub color: ColorToken,
}

/// Compute slices for `samples`, grouping those under the threshold.
///
/// # Errors
///
/// [`TabulaError::InvalidArgument`] for an empty sample list, a negative
/// value, or a total that is not positive.
pub fn slices<T>(
    samples: &[T],
    settings: &GraphSettings<T>,
    formatting: &PieGraphFormatting,
) -> Result<Vec<PieSlice>> {
    if samples.is_empty() {
        return Err(TabulaError::invalid_argument("graph has no values"));
    }
    let values: Vec<f64> = samples.iter().map(|s| settings.value_of(s)).collect();
    if values.iter().any(|v| *v < 0.0) {
        return Err(TabulaError::invalid_argument("pie values must not be negative"));
    }
    let total: f64 = values.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return Err(TabulaError::invalid_argument("pie values must sum to a positive total"));
    }

    let labels: Vec<String> = samples.iter().map(|s| settings.x_label(s)).collect();
    let small: Vec<usize> = (0..values.len())
        .filter(|&i| values[i] / total < formatting.group_threshold)
        .collect();
    let grouping = small.len() >= 2;

    let mut parts: Vec<(String, f64)> = Vec::with_capacity(values.len());
    for (i, (label, value)) in labels.iter().zip(&values).enumerate() {
        if !(grouping && small.contains(&i)) {
            parts.push((label.clone(), *value));
        }
    }
    if grouping {
        let names: Vec<&str> = small.iter().map(|&i| labels[i].as_str()).collect();
        let value = small.iter().map(|&i| values[i]).sum();
        parts.push((format!("Other ({})", names.join(",")), value));
    }

    Ok(parts
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| PieSlice {
            label,
            value,
            share: value / total,
            color: formatting.slice_color(i),
        })
        .collect())
}

/// Angle of the cell at `(dx, y)` measured counter-clockwise from the
/// positive x axis, in `[0, 2π)`. Rows grow downwards.
fn cell_angle(dx: f64, y: f64) -> f64 {
    let angle = (-y).atan2(dx);
    if angle < 0.0 { angle + TAU } else { angle }
}

pub(crate) fn render<T>(
    samples: &[T],
    settings: &GraphSettings<T>,
    formatting: &PieGraphFormatting,
) -> Result<Canvas> {
    let stretch = formatting.horizontal_stretch;
    if !stretch.is_finite() || stretch <= 0.0 {
        return Err(TabulaError::invalid_formatting("horizontal_stretch must be positive"));
    }
    let slices = slices(samples, settings, formatting)?;
    let base = &formatting.base;

    let mut ends = Vec::with_capacity(slices.len());
    let mut cumulative = 0.0;
    for slice in &slices {
        cumulative += slice.share;
        ends.push(cumulative * TAU);
    }

    let radius = i64::try_from(formatting.radius)
        .map_err(|_| TabulaError::invalid_formatting("radius is too large"))?;
    let r = radius as f64;
    let half_width = (r * stretch).round() as i64;
    let raster_width = usize::try_from(2 * half_width + 1).unwrap_or(1);

    let mut canvas = Canvas::new();

    if !settings.header.is_empty() {
        let mut line = GlyphLine::new();
        let pad = raster_width.saturating_sub(measure(&settings.header)) / 2;
        line.push_repeat(' ', pad, None);
        line.push_str(&settings.header, None);
        canvas.push_line(line);
    }

    for y in -radius..=radius {
        let mut line = GlyphLine::with_capacity(raster_width);
        for x in -half_width..=half_width {
            if x == 0 && y == 0 {
                line.push(formatting.center_char, Some(base.graph_icon_color));
                continue;
            }
            let dx = x as f64 / stretch;
            let fy = y as f64;
            if (dx * dx + fy * fy).sqrt() > r {
                line.push(base.empty_point, Some(base.empty_point_color));
                continue;
            }
            let angle = cell_angle(dx, fy);
            let index = ends.iter().position(|end| angle < *end).unwrap_or(slices.len() - 1);
            line.push(base.graph_icon, Some(slices[index].color));
        }
        canvas.push_line(line);
    }

    if formatting.show_legend {
        for slice in &slices {
            let mut line = GlyphLine::new();
            line.push(base.graph_icon, Some(slice.color));
            line.push_str(
                &format!(" {} ({:.2}%)", slice.label, slice.share * 100.0),
                Some(base.x_axis_label_color),
            );
            canvas.push_line(line);
        }
    }

    Ok(canvas)
}
