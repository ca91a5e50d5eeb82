use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn gauge_arcs_split_the_circle_proportionally() {
    let arcs = gauge_arcs(&[25.0, 75.0]);
    assert_eq!(arcs.len(), 2);
    assert!(close(arcs[0].0, -FRAC_PI_2));
    assert!(close(arcs[0].1, 0.0));
    assert!(close(arcs[1].0, 0.0));
    assert!(close(arcs[1].1, 3.0 * FRAC_PI_2));
}

#[test]
fn gauge_arcs_empty_for_zero_total() {
    assert!(gauge_arcs(&[0.0, 0.0]).is_empty());
    assert!(gauge_arcs(&[]).is_empty());
}

#[test]
fn radar_first_axis_points_up() {
    let points = radar_points(&[100.0, 0.0, 0.0, 0.0], 100.0, (50.0, 50.0), 40.0);
    assert_eq!(points.len(), 4);
    assert!(close(points[0].0, 50.0));
    assert!(close(points[0].1, 10.0));
    assert!(close(points[1].0, 50.0));
    assert!(close(points[1].1, 50.0));
}

#[test]
fn radar_clamps_to_outer_ring() {
    let points = radar_points(&[0.0, 500.0], 100.0, (0.0, 0.0), 10.0);
    let (x, y) = points[1];
    assert!(close(x.hypot(y), 10.0));
    assert!(close(y.atan2(x), PI / 2.0));
}

#[test]
fn line_points_span_the_plot() {
    let points = line_points(&[0.0, 50.0, 100.0], 120.0, 100.0, 10.0);
    assert_eq!(points, vec![(10.0, 90.0), (60.0, 50.0), (110.0, 10.0)]);
}

#[test]
fn single_point_sits_at_the_left_edge() {
    assert_eq!(line_points(&[100.0], 100.0, 100.0, 10.0), vec![(10.0, 10.0)]);
}
