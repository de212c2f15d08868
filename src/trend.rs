/// Trend chart layout: maps daily history onto a fixed-size canvas

use crate::history::DailyHistory;

/// Drawable area and point spacing of the trend chart, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLayout {
    pub width: u32,
    pub height: u32,
    pub spacing: u32,
}

impl TrendLayout {
    /// Number of points that fit across the chart
    pub fn max_points(&self) -> usize {
        self.width.div_ceil(self.spacing) as usize
    }
}

impl Default for TrendLayout {
    fn default() -> Self {
        TrendLayout {
            width: 500,
            height: 100,
            spacing: 5,
        }
    }
}

/// One plotted day
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub x: u32,
    pub y: u32,
    pub label: String,
}

/// Points of the chart in plotting order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendChart {
    pub points: Vec<TrendPoint>,
}

impl TrendChart {
    /// Value for the polyline `points` attribute, e.g. `0,40 5,12`
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lay out the most recent days of `history` that fit in `layout`.
///
/// Older entries beyond `layout.max_points()` are dropped. Counts are scaled
/// so the largest retained count reaches the top edge. When every retained
/// count is zero the points sit on the baseline.
pub fn build_trend(history: &DailyHistory, layout: &TrendLayout) -> TrendChart {
    let days = history.last(layout.max_points());

    let max_value = days.iter().map(|d| d.count).max().unwrap_or(0);
    let ratio = if max_value == 0 {
        0.0
    } else {
        layout.height as f64 / max_value as f64
    };

    let points = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let scaled = (day.count as f64 * ratio).round() as u32;
            TrendPoint {
                x: i as u32 * layout.spacing,
                y: layout.height - scaled.min(layout.height),
                label: format!("{}: {}", day.date, day.count),
            }
        })
        .collect();

    TrendChart { points }
}
