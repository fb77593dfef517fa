//! Chart data (contributed vs. total value per month) and a text rendering of it

use crate::projection::SeriesEntry;
use crate::state::Theme;
use serde::Serialize;

/// Per-month chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub months: Vec<u32>,
    pub contributed: Vec<f64>,
    pub value: Vec<f64>,
}

impl ChartData {
    pub fn from_series(series: &[SeriesEntry]) -> Self {
        Self {
            months: series.iter().map(|e| e.month).collect(),
            contributed: series.iter().map(|e| e.total_contributed).collect(),
            value: series.iter().map(|e| e.total_value).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Glyphs used for the two stacked areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub contributed: char,
    pub growth: char,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette { contributed: '#', growth: '+' },
            Theme::Dark => Palette { contributed: '█', growth: '░' },
        }
    }
}

/// Indices of the entries shown, one per column, always ending at the last month
fn sample_indices(len: usize, width: usize) -> Vec<usize> {
    let columns = width.max(1).min(len);
    (1..=columns).map(|c| c * len / columns - 1).collect()
}

fn scaled(value: f64, max: f64, height: usize) -> usize {
    if !value.is_finite() || value <= 0.0 || max <= 0.0 {
        return 0;
    }
    ((value / max) * height as f64).round().min(height as f64) as usize
}

/// Render the chart as text rows, top row first.
///
/// Each column stacks contributed capital under growth; losses show as a
/// shorter contributed bar.
pub fn render_chart(data: &ChartData, width: usize, height: usize, theme: Theme) -> String {
    if data.is_empty() || height == 0 {
        return String::new();
    }

    let palette = Palette::for_theme(theme);
    let indices = sample_indices(data.len(), width);
    let max = indices
        .iter()
        .map(|&i| data.value[i].max(data.contributed[i]))
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let columns: Vec<(usize, usize)> = indices
        .iter()
        .map(|&i| {
            let value = scaled(data.value[i], max, height);
            let contributed = scaled(data.contributed[i].min(data.value[i]), max, height);
            (contributed, value)
        })
        .collect();

    let mut rows = Vec::with_capacity(height + 1);
    for level in (0..height).rev() {
        let row: String = columns
            .iter()
            .map(|&(contributed, value)| {
                if level < contributed {
                    palette.contributed
                } else if level < value {
                    palette.growth
                } else {
                    ' '
                }
            })
            .collect();
        rows.push(row.trim_end().to_string());
    }

    let first = data.months[indices[0]];
    let last = data.months[indices[indices.len() - 1]];
    rows.push(format!(
        "months {first}-{last}  {} contributed  {} growth  max {max:.0}",
        palette.contributed, palette.growth
    ));
    rows.join("\n")
}
