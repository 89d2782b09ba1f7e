//! Tests for axis aggregation
//!
//! These tests verify that:
//! - Each series has one point per axis value, in axis order
//! - Probabilities are means over defined cells only
//! - A coordinate whose cells are all undefined yields `None`
//! - Probabilities always lie in [0, 1]

use crate::analysis::{aggregate_axis, aggregate_many, evaluate_grid};
use crate::config::{AxisSpec, ModelConfig};
use crate::model::AxisKind;

#[test]
fn test_series_lengths_match_axes() {
    let grid = evaluate_grid(&ModelConfig::default()).unwrap();

    for kind in AxisKind::ALL {
        let series = aggregate_axis(&grid, kind);
        assert_eq!(series.axis, kind);
        assert_eq!(series.len(), grid.axis(kind).len(), "{kind:?}");
        assert_eq!(series.values(), grid.axis(kind).values());
    }

    assert_eq!(grid.aggregate(AxisKind::B1).len(), 9);
    assert_eq!(grid.aggregate(AxisKind::MarketSize).len(), 11);
    assert_eq!(grid.aggregate(AxisKind::TariffRate).len(), 11);
}

#[test]
fn test_probabilities_in_unit_interval() {
    let grid = evaluate_grid(&ModelConfig::default()).unwrap();

    for series in aggregate_many(&grid, &AxisKind::ALL) {
        for point in &series.points {
            if let Some(p) = point.probability {
                assert!((0.0..=1.0).contains(&p), "{:?} at {}: {p}", series.axis, point.value);
            }
        }
    }
}

#[test]
fn test_undefined_cells_are_skipped() {
    // b0 = 0.5 everywhere: b1 = 0.4 is outside the filter, b1 = 0.6 is inside.
    let config = ModelConfig::default()
        .with_axis(AxisKind::TimeCost, AxisSpec::values(vec![1.0]))
        .with_axis(AxisKind::TariffRate, AxisSpec::values(vec![0.0, 0.7]))
        .with_axis(AxisKind::B0, AxisSpec::values(vec![0.5]))
        .with_axis(AxisKind::B1, AxisSpec::values(vec![0.4, 0.6]))
        .with_axis(AxisKind::MarginalCost, AxisSpec::values(vec![10.0]))
        .with_axis(AxisKind::MarketSize, AxisSpec::values(vec![100.0]));
    let grid = evaluate_grid(&config).unwrap();

    // gap(r=0)   = 0.5*89 - 0.6*90 - 3        = -12.5 (lose)
    // gap(r=0.7) = 0.5*89 - 0.6*83 + 3*(7-1)  =  12.7 (win)
    let by_b1 = aggregate_axis(&grid, AxisKind::B1);
    assert_eq!(by_b1.points[0].probability, None);
    assert_eq!(by_b1.points[0].defined_cells, 0);
    assert_eq!(by_b1.points[1].probability, Some(0.5));
    assert_eq!(by_b1.points[1].defined_cells, 2);

    // Each tariff value has one undefined and one defined cell
    let by_r = aggregate_axis(&grid, AxisKind::TariffRate);
    assert_eq!(by_r.probabilities(), vec![Some(0.0), Some(1.0)]);
    assert_eq!(by_r.defined_points(), vec![(0.0, 0.0), (0.7, 1.0)]);
}

#[test]
fn test_all_undefined_axis_value_is_none() {
    // No b1 exceeds any b0, so nothing is defined anywhere
    let config = ModelConfig::default()
        .with_axis(AxisKind::B0, AxisSpec::values(vec![0.9]))
        .with_axis(AxisKind::B1, AxisSpec::values(vec![0.2, 0.5]));
    let grid = evaluate_grid(&config).unwrap();

    for series in aggregate_many(&grid, &AxisKind::CHARTED) {
        assert!(series.points.iter().all(|p| p.probability.is_none()));
        assert!(series.defined_points().is_empty());
    }
    assert_eq!(grid.summary().overall_probability(), None);
}

#[test]
fn test_aggregate_many_preserves_order() {
    let grid = evaluate_grid(&ModelConfig::default()).unwrap();
    let order = [AxisKind::TariffRate, AxisKind::B1, AxisKind::MarketSize];
    let axes: Vec<AxisKind> = aggregate_many(&grid, &order).iter().map(|s| s.axis).collect();
    assert_eq!(axes, order);
}

#[test]
fn test_defined_counts_sum_to_summary() {
    let grid = evaluate_grid(&ModelConfig::default()).unwrap();
    let summary = grid.summary();

    for kind in AxisKind::ALL {
        let series = grid.aggregate(kind);
        let defined: usize = series.points.iter().map(|p| p.defined_cells).sum();
        assert_eq!(defined, summary.defined_cells(), "{kind:?}");
    }
}
