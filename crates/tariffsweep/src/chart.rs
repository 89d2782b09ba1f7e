//! Line charts for aggregated sweep series using the ratatui Chart widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};
use tariffsweep_core::{AggregatedSeries, SweepReport};

use crate::report::series_title;
use crate::util::format::{format_axis_value, format_percent};

/// Y-axis title shared by all panels
pub const PROBABILITY_LABEL: &str = "P{q_m > q_l}";

/// Split a series into runs of consecutive defined points.
///
/// Undefined probabilities break the line, so each run is drawn separately.
pub fn line_segments(series: &AggregatedSeries) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for point in &series.points {
        match point.probability {
            Some(p) => current.push((point.value, p)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// X bounds covering every axis coordinate, padded so markers at the edges
/// stay visible
pub fn x_bounds(series: &AggregatedSeries) -> [f64; 2] {
    let (min, max) = series
        .points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });
    if !min.is_finite() {
        return [0.0, 1.0];
    }
    let span = max - min;
    let padding = if span > 0.0 {
        span * 0.02
    } else {
        (min.abs() * 0.02).max(1.0)
    };
    [min - padding, max + padding]
}

/// Render one series as a line+marker chart with a percent-formatted y axis
pub fn render_series(frame: &mut Frame, area: Rect, title: &str, series: &AggregatedSeries) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "));

    let segments = line_segments(series);
    if segments.is_empty() {
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No defined cells for this axis.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(content).block(block), area);
        return;
    }
    let markers: Vec<(f64, f64)> = segments.iter().flatten().copied().collect();

    let mut datasets: Vec<Dataset> = segments
        .iter()
        .map(|segment| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Gray))
                .data(segment)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::White))
            .data(&markers),
    );

    let [x_min, x_max] = x_bounds(series);
    let (lo, hi) = match (series.points.first(), series.points.last()) {
        (Some(first), Some(last)) => (first.value.min(last.value), first.value.max(last.value)),
        _ => (x_min, x_max),
    };
    let x_labels = vec![
        Span::raw(format_axis_value(lo)),
        Span::raw(format_axis_value((lo + hi) / 2.0)),
        Span::raw(format_axis_value(hi)),
    ];
    let y_labels = vec![
        Span::raw(format_percent(0.0, 0)),
        Span::raw(format_percent(0.5, 0)),
        Span::raw(format_percent(1.0, 0)),
    ];

    let x_axis = Axis::default()
        .title(series.axis.symbol().dark_gray())
        .bounds([x_min, x_max])
        .labels(x_labels);

    let y_axis = Axis::default()
        .title(PROBABILITY_LABEL.dark_gray())
        .bounds([0.0, 1.0])
        .labels(y_labels);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Render every series of the report side by side
pub fn render_report(frame: &mut Frame, area: Rect, report: &SweepReport) {
    if report.series.is_empty() {
        return;
    }
    let count = report.series.len() as u32;
    let constraints: Vec<Constraint> = report
        .series
        .iter()
        .map(|_| Constraint::Ratio(1, count))
        .collect();
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, (series, panel)) in report.series.iter().zip(panels.iter()).enumerate() {
        render_series(frame, *panel, &series_title(index, series), series);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tariffsweep_core::AxisKind;
    use tariffsweep_core::analysis::SeriesPoint;

    fn series(probabilities: &[Option<f64>]) -> AggregatedSeries {
        AggregatedSeries {
            axis: AxisKind::MarketSize,
            points: probabilities
                .iter()
                .enumerate()
                .map(|(i, &probability)| SeriesPoint {
                    value: 100.0 + 10.0 * i as f64,
                    probability,
                    defined_cells: usize::from(probability.is_some()),
                })
                .collect(),
        }
    }

    #[test]
    fn test_segments_break_at_undefined_points() {
        let s = series(&[Some(0.1), Some(0.2), None, Some(0.4), None, None, Some(0.7)]);
        assert_eq!(
            line_segments(&s),
            vec![
                vec![(100.0, 0.1), (110.0, 0.2)],
                vec![(130.0, 0.4)],
                vec![(160.0, 0.7)],
            ]
        );
    }

    #[test]
    fn test_segments_all_undefined() {
        assert!(line_segments(&series(&[None, None])).is_empty());
    }

    #[test]
    fn test_x_bounds_padded() {
        let [lo, hi] = x_bounds(&series(&[Some(0.1), None, Some(0.3)]));
        assert!(lo < 100.0 && lo > 99.0);
        assert!(hi > 120.0 && hi < 121.0);
    }

    #[test]
    fn test_x_bounds_single_point() {
        let [lo, hi] = x_bounds(&series(&[Some(0.5)]));
        assert!(lo < 100.0 && hi > 100.0);
    }
}
