//! End-to-end runs of the published parameterization
//!
//! The expected counts and probabilities below were computed independently
//! with the same arithmetic in the same evaluation order.

use crate::model::AxisKind;
use crate::{ModelConfig, run, run_axes};

const B1_VALUES: [f64; 9] = [0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
const R_VALUES: [f64; 11] = [0.0, 0.02, 0.03, 0.05, 0.07, 0.1, 0.17, 0.25, 0.35, 0.5, 0.7];
const A_VALUES: [f64; 11] = [
    100.0, 110.0, 120.0, 130.0, 140.0, 150.0, 160.0, 170.0, 180.0, 190.0, 200.0,
];

#[test]
fn test_default_run_charts_b1_a_r() {
    let report = run(&ModelConfig::default()).unwrap();

    let axes: Vec<AxisKind> = report.series.iter().map(|s| s.axis).collect();
    assert_eq!(
        axes,
        vec![AxisKind::B1, AxisKind::MarketSize, AxisKind::TariffRate]
    );

    assert_eq!(report.series[0].values(), B1_VALUES);
    assert_eq!(report.series[1].values(), A_VALUES);
    assert_eq!(report.series[2].values(), R_VALUES);

    for series in &report.series {
        assert!(
            series.points.iter().all(|p| p.probability.is_some()),
            "{:?} has an undefined point",
            series.axis
        );
    }
}

#[test]
fn test_default_run_summary_counts() {
    let report = run(&ModelConfig::default()).unwrap();
    let summary = report.summary;

    assert_eq!(summary.total_cells, 11 * 11 * 9 * 9 * 6 * 11);
    // 45 of the 81 (b0, b1) pairs satisfy b1 > b0
    assert_eq!(summary.filtered_cells, 45 * 11 * 11 * 6 * 11);
    assert_eq!(summary.wins, 16_896);
    assert_eq!(summary.losses, 342_464);
    assert_eq!(summary.ties, 10);
    assert_eq!(
        summary.wins + summary.losses + summary.ties,
        summary.filtered_cells
    );
}

#[test]
fn test_default_run_probabilities() {
    let report = run(&ModelConfig::default()).unwrap();
    let by_b1 = &report.series[0];
    let by_a = &report.series[1];
    let by_r = &report.series[2];

    let first_b1 = by_b1.points[0];
    assert_eq!(first_b1.defined_cells, 7_985);
    assert!((first_b1.probability.unwrap() - 0.159_423_919_849_718_2).abs() < 1e-12);

    // Larger markets and larger b1 both favour firm L
    for series in [by_b1, by_a] {
        let probs: Vec<f64> = series.probabilities().into_iter().flatten().collect();
        assert!(
            probs.windows(2).all(|w| w[1] < w[0]),
            "{:?} not decreasing: {probs:?}",
            series.axis
        );
    }

    // The gap rises with r in every cell, so the probability never falls
    let probs: Vec<f64> = by_r.probabilities().into_iter().flatten().collect();
    assert!(probs.windows(2).all(|w| w[1] >= w[0]), "{probs:?}");
    assert!(probs[..7].iter().all(|&p| p == 0.0));
    assert!(probs[10] > 0.29 && probs[10] < 0.31, "p(r=0.7) = {}", probs[10]);
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    let first = run(&ModelConfig::default()).unwrap();
    let second = run(&ModelConfig::default()).unwrap();

    assert_eq!(first.summary, second.summary);
    for (a, b) in first.series.iter().zip(&second.series) {
        assert_eq!(a.axis, b.axis);
        for (p, q) in a.points.iter().zip(&b.points) {
            assert_eq!(p.value.to_bits(), q.value.to_bits());
            assert_eq!(
                p.probability.map(f64::to_bits),
                q.probability.map(f64::to_bits)
            );
        }
    }
}

#[test]
fn test_run_axes_custom_selection() {
    let report = run_axes(&ModelConfig::default(), &[AxisKind::MarginalCost]).unwrap();
    assert_eq!(report.series.len(), 1);
    assert_eq!(
        report.series[0].values(),
        vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0]
    );
}
