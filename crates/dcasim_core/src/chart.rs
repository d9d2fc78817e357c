//! Trajectory thinning for display

use crate::model::ChartDataPoint;

/// Default cap on points handed to a chart
pub const DEFAULT_MAX_CHART_POINTS: usize = 120;

/// Sample a trajectory down to roughly `max_points` entries.
///
/// Short trajectories are returned whole. Longer ones keep every
/// `ceil(len / max_points)`-th point from the first, and the final point is
/// always kept so the chart ends on the true closing state.
pub fn downsample(data: &[ChartDataPoint], max_points: usize) -> Vec<ChartDataPoint> {
    if max_points == 0 {
        return Vec::new();
    }
    if data.len() <= max_points {
        return data.to_vec();
    }

    let step = data.len().div_ceil(max_points);
    let mut sampled: Vec<ChartDataPoint> = data.iter().step_by(step).copied().collect();

    let last_index = data.len() - 1;
    if last_index % step != 0 {
        sampled.push(data[last_index]);
    }
    sampled
}
