//! End-to-end checks of the stroke ribbon through the public API.

#![allow(clippy::unwrap_used, clippy::float_cmp, clippy::cast_precision_loss)]

use approx::assert_abs_diff_eq;
use ribbon::geometry::{circle_outline, rectangle_outline, Polyline2D};
use ribbon::math::{Point2, Vector2};
use ribbon::tessellation::{StrokeMesh, StrokeStyle, TessellateStroke};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn stroke(points: Vec<Point2>, half_width: f64, closed: bool) -> StrokeMesh {
    init_tracing();
    let style = StrokeStyle::from_half_width(half_width).unwrap();
    TessellateStroke::new(points, style, closed).execute()
}

fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

fn assert_continuous(mesh: &StrokeMesh) {
    for (k, w) in mesh.offsets.windows(2).enumerate() {
        assert!(
            w[0].dot(&w[1]) > 0.0,
            "offsets {k} and {} flip: {:?} vs {:?}",
            k + 1,
            w[0],
            w[1]
        );
    }
}

/// Every strip quad keeps both of its outer vertices on the same side of its
/// edge, and that side never changes along the stroke.
fn assert_untwisted(points: &[Point2], closed: bool, mesh: &StrokeMesh) {
    let seq = Polyline2D::new(points.to_vec(), closed).working_sequence();
    let working = seq.points();
    assert_eq!(working.len(), mesh.offsets.len());

    let mut side = 0.0;
    for k in 0..working.len() - 1 {
        let d = working[k + 1] - working[k];
        if d.norm() < 1e-12 {
            continue;
        }
        for offset in [mesh.offsets[k], mesh.offsets[k + 1]] {
            let s = d.x * offset.y - d.y * offset.x;
            assert!(s != 0.0, "offset parallel to edge {k}");
            if side == 0.0 {
                side = s.signum();
            }
            assert_eq!(s.signum(), side, "ribbon twists at edge {k}");
        }
    }
}

fn assert_finite(mesh: &StrokeMesh) {
    for v in &mesh.vertices {
        assert!(v.position.x.is_finite() && v.position.y.is_finite(), "{v:?}");
    }
}

#[test]
fn empty_and_single_point_produce_nothing() {
    for closed in [false, true] {
        assert_eq!(stroke(vec![], 1.0, closed).len(), 0);
        assert_eq!(stroke(pts(&[(4.0, 2.0)]), 1.0, closed).len(), 0);
    }
}

#[test]
fn two_point_open_stroke() {
    let mesh = stroke(pts(&[(0.0, 0.0), (10.0, 0.0)]), 1.0, false);
    assert_eq!(mesh.len(), 4);

    let positions: Vec<Point2> = mesh.vertices.iter().map(|v| v.position).collect();
    assert_abs_diff_eq!(positions[0], Point2::new(0.0, -1.0));
    assert_abs_diff_eq!(positions[1], Point2::new(0.0, 1.0));
    assert_abs_diff_eq!(positions[2], Point2::new(10.0, -1.0));
    assert_abs_diff_eq!(positions[3], Point2::new(10.0, 1.0));
    assert_eq!(mesh.offsets[0], mesh.offsets[1]);
}

#[test]
fn closed_square_keeps_width_at_every_corner() {
    let square = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let mesh = stroke(square.clone(), 1.0, true);
    assert_eq!(mesh.len(), 10);

    // Edge normals of the square are the two axes.
    let normals = [Vector2::new(0.0, 1.0), Vector2::new(1.0, 0.0)];
    for (inner, outer) in mesh.pairs() {
        let across = outer.position - inner.position;
        for n in &normals {
            assert_abs_diff_eq!(across.dot(n).abs(), 2.0, epsilon = 1e-12);
        }
        // Right-angle miter: sqrt(2) * half width from center to corner.
        assert_abs_diff_eq!(across.norm() * 0.5, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    assert_eq!(mesh.offsets.first(), mesh.offsets.last());
    assert_untwisted(&square, true, &mesh);
}

#[test]
fn rectangle_marquee_matches_square() {
    let marquee = rectangle_outline(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
    let square = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert_eq!(stroke(marquee, 1.0, true), stroke(square, 1.0, true));
}

#[test]
fn near_hairpin_does_not_twist() {
    let hairpin = pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.001)]);
    let mesh = stroke(hairpin.clone(), 1.0, false);
    assert_eq!(mesh.len(), 6);
    assert_finite(&mesh);
    assert_continuous(&mesh);
    assert_untwisted(&hairpin, false, &mesh);
}

#[test]
fn exact_fold_back_turns_with_a_bevel() {
    let mesh = stroke(pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]), 1.0, false);
    assert_eq!(mesh.len(), 8);
    assert_finite(&mesh);
    for offset in &mesh.offsets {
        assert_abs_diff_eq!(offset.norm(), 1.0, epsilon = 1e-12);
    }
    // Left of travel on the way out, then left of travel on the way back.
    assert_abs_diff_eq!(mesh.offsets[1], Vector2::new(0.0, 1.0), epsilon = 1e-12);
    assert_abs_diff_eq!(mesh.offsets[2], Vector2::new(0.0, -1.0), epsilon = 1e-12);
    assert_abs_diff_eq!(mesh.offsets[3], Vector2::new(0.0, -1.0), epsilon = 1e-12);
}

#[test]
fn back_tracking_lasso_closes_on_its_first_offset() {
    let mesh = stroke(
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (4.0, 2.0), (0.0, 4.0)]),
        1.0,
        true,
    );
    // Six working points plus the extra pair of the back-track bevel.
    assert_eq!(mesh.len(), 14);
    assert_finite(&mesh);

    let first = mesh.offsets[0];
    let last = mesh.offsets[mesh.offsets.len() - 1];
    assert_abs_diff_eq!(first, Vector2::new(1.0, 1.0), epsilon = 1e-12);
    assert_abs_diff_eq!(last, first, epsilon = 1e-12);
    assert_abs_diff_eq!(
        mesh.vertices[0].position,
        mesh.vertices[12].position,
        epsilon = 1e-12
    );
    assert_eq!(mesh.vertices[0].tex_coord.y, 0.0);
    assert_eq!(mesh.vertices[12].tex_coord.y, 0.0);

    // The tip at (4, 4) is bevelled: back along the first leg, then forward.
    assert_abs_diff_eq!(mesh.offsets[2], Vector2::new(-1.0, 0.0), epsilon = 1e-12);
    assert_abs_diff_eq!(mesh.offsets[3], Vector2::new(1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn collinear_run_has_exact_offsets() {
    let line: Vec<Point2> = (0..50).map(|i| Point2::new(f64::from(i), 0.0)).collect();
    let mesh = stroke(line, 0.75, false);
    assert_eq!(mesh.len(), 100);
    for offset in &mesh.offsets {
        assert_eq!(*offset, Vector2::new(0.0, 0.75));
    }
}

#[test]
fn diagonal_collinear_run_is_finite() {
    let line: Vec<Point2> = (0..50)
        .map(|i| Point2::new(3.0 * f64::from(i), 4.0 * f64::from(i)))
        .collect();
    let mesh = stroke(line, 2.0, false);
    assert_finite(&mesh);
    assert_continuous(&mesh);
    for offset in &mesh.offsets {
        assert_abs_diff_eq!(offset.norm(), 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(offset.dot(&Vector2::new(3.0, 4.0)), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn nearly_straight_run_stays_on_one_side() {
    let wobbly: Vec<Point2> = (0..200)
        .map(|i| {
            let jitter = if i % 2 == 0 { 1e-7 } else { -1e-7 };
            Point2::new(f64::from(i) * 0.5, jitter)
        })
        .collect();
    let mesh = stroke(wobbly, 1.0, false);
    assert_finite(&mesh);
    assert_continuous(&mesh);
    for offset in &mesh.offsets {
        assert!(offset.y > 0.99, "{offset:?}");
        assert_abs_diff_eq!(offset.norm(), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn brush_outline_loop_closes() {
    let outline = circle_outline(Point2::new(5.0, 5.0), 3.0, 128).unwrap();
    let mesh = stroke(outline.clone(), 0.1, true);
    assert_eq!(mesh.len(), 2 * 129);
    assert_eq!(mesh.offsets.first(), mesh.offsets.last());
    assert_continuous(&mesh);
    assert_untwisted(&outline, true, &mesh);

    let expected = 0.1 / (std::f64::consts::PI / 128.0).cos();
    for offset in &mesh.offsets {
        assert_abs_diff_eq!(offset.norm(), expected, epsilon = 1e-9);
    }
}

#[test]
fn repeated_samples_do_not_break_a_lasso() {
    let lasso = pts(&[
        (0.0, 0.0),
        (0.0, 0.0),
        (2.0, 0.5),
        (2.0, 0.5),
        (2.0, 0.5),
        (3.0, 3.0),
        (1.0, 4.0),
        (1.0, 4.0),
    ]);
    let mesh = stroke(lasso.clone(), 0.25, true);
    assert_eq!(mesh.len(), 18);
    assert_finite(&mesh);
    assert_untwisted(&lasso, true, &mesh);
    assert_eq!(mesh.offsets.first(), mesh.offsets.last());
}

#[test]
fn tessellation_is_bit_identical_across_calls() {
    let points = pts(&[(0.0, 0.0), (3.3, 1.1), (4.2, 7.9), (-2.5, 5.0), (0.1, 0.2)]);
    let a = stroke(points.clone(), 0.4, true);
    let b = stroke(points, 0.4, true);
    assert_eq!(a.len(), b.len());
    for (va, vb) in a.vertices.iter().zip(&b.vertices) {
        assert_eq!(va.position.x.to_bits(), vb.position.x.to_bits());
        assert_eq!(va.position.y.to_bits(), vb.position.y.to_bits());
        assert_eq!(va.tex_coord.x.to_bits(), vb.tex_coord.x.to_bits());
        assert_eq!(va.tex_coord.y.to_bits(), vb.tex_coord.y.to_bits());
    }
}
