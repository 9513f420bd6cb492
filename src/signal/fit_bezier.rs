//! Least-squares cubic Bézier fitting
//!
//! Schneider's curve-fitting algorithm: chord-length parameterization,
//! a least-squares solve for the two free control points, Newton-Raphson
//! reparameterization, and recursive subdivision at the worst point when a
//! single segment cannot meet tolerance.
//!
//! Errors are squared distances, so `max_err` is in squared position units.

/// A 2D point (or vector)
pub type Point = [f64; 2];

/// Cubic Bézier segment: endpoint, two control points, endpoint
pub type Bezier = [Point; 4];

/// Reparameterization passes before giving up and subdividing
const MAX_REFINE_PASSES: usize = 32;

/// Tangent estimation looks at most this many neighbor points
const TANGENT_WINDOW: usize = 10;

// ---------------------------------------------------------------------------
// 2-vector helpers
// ---------------------------------------------------------------------------

fn add(a: Point, b: Point) -> Point {
    [a[0] + b[0], a[1] + b[1]]
}

fn sub(a: Point, b: Point) -> Point {
    [a[0] - b[0], a[1] - b[1]]
}

fn neg(a: Point) -> Point {
    [-a[0], -a[1]]
}

fn scale(a: Point, s: f64) -> Point {
    [a[0] * s, a[1] * s]
}

fn dot(a: Point, b: Point) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

fn norm(a: Point) -> f64 {
    dot(a, a).sqrt()
}

fn normalize(a: Point) -> Point {
    let magnitude = norm(a);
    if magnitude < f64::EPSILON {
        return a;
    }
    scale(a, 1.0 / magnitude)
}

// ---------------------------------------------------------------------------
// Curve evaluation
// ---------------------------------------------------------------------------

/// Evaluate a cubic Bézier at parameter `t`
pub fn eval_bezier(bez: &Bezier, t: f64) -> Point {
    let s = 1.0 - t;
    let b0 = s * s * s;
    let b1 = 3.0 * s * s * t;
    let b2 = 3.0 * s * t * t;
    let b3 = t * t * t;
    [
        b0 * bez[0][0] + b1 * bez[1][0] + b2 * bez[2][0] + b3 * bez[3][0],
        b0 * bez[0][1] + b1 * bez[1][1] + b2 * bez[2][1] + b3 * bez[3][1],
    ]
}

/// First derivative of a cubic Bézier at parameter `t`
fn eval_derivative(bez: &Bezier, t: f64) -> Point {
    let s = 1.0 - t;
    let d0 = scale(sub(bez[1], bez[0]), 3.0 * s * s);
    let d1 = scale(sub(bez[2], bez[1]), 6.0 * s * t);
    let d2 = scale(sub(bez[3], bez[2]), 3.0 * t * t);
    add(add(d0, d1), d2)
}

/// Second derivative of a cubic Bézier at parameter `t`
fn eval_second_derivative(bez: &Bezier, t: f64) -> Point {
    let s = 1.0 - t;
    let a = add(sub(bez[2], scale(bez[1], 2.0)), bez[0]);
    let b = add(sub(bez[3], scale(bez[2], 2.0)), bez[1]);
    add(scale(a, 6.0 * s), scale(b, 6.0 * t))
}

// ---------------------------------------------------------------------------
// Fitting
// ---------------------------------------------------------------------------

/// Fit one or more cubic Bézier segments to an ordered point sequence.
///
/// Segments chain: each starts at the previous segment's last point, and the
/// chain interpolates the first and last input points exactly. Needs at
/// least two points.
pub fn fit_bezier(points: &[Point], max_err: f64) -> Vec<Bezier> {
    assert!(points.len() >= 2, "need at least two points to fit");
    fit_segment(points, max_err, None, None)
}

fn fit_segment(
    points: &[Point],
    max_err: f64,
    left_tangent: Option<Point>,
    right_tangent: Option<Point>,
) -> Vec<Bezier> {
    let left = left_tangent.unwrap_or_else(|| estimate_left_tangent(points));
    let right = right_tangent.unwrap_or_else(|| estimate_right_tangent(points));

    // two points only: place control points a third of the chord out
    if points.len() == 2 {
        let dist = norm(sub(points[1], points[0])) / 3.0;
        return vec![[
            points[0],
            add(points[0], scale(left, dist)),
            add(points[1], scale(right, dist)),
            points[1],
        ]];
    }

    let mut u = chord_length_parameterize(points);
    let mut bez = generate_bezier(points, &u, left, right);
    let (mut split, mut err) = max_sq_error(points, &bez, &u);

    if err >= max_err {
        // iterate parameterization while the error is within salvage range
        for _ in 1..MAX_REFINE_PASSES {
            if err > max_err * max_err {
                break;
            }
            u = reparameterize(&bez, points, &u);
            bez = generate_bezier(points, &u, left, right);
            (split, err) = max_sq_error(points, &bez, &u);
            if err < max_err {
                break;
            }
        }
    }

    if err < max_err {
        return vec![bez];
    }

    // split at the worst point and fit each side with a shared center tangent
    let split = split.clamp(1, points.len() - 2);
    let center = normalize(sub(points[split - 1], points[split + 1]));

    let mut segments = fit_segment(&points[..=split], max_err, Some(left), Some(center));
    segments.extend(fit_segment(
        &points[split..],
        max_err,
        Some(neg(center)),
        Some(right),
    ));
    segments
}

/// Weights for tangent estimation: geometric falloff that sums to one
fn tangent_weights(n: usize) -> Vec<f64> {
    let x: f64 = 2.0;
    let denom = 1.0 - x.powi(-(n as i32));
    (1..=n).map(|k| (x - 1.0) * x.powi(-(k as i32)) / denom).collect()
}

/// Unit tangent at the start of the sequence, from a weighted neighbor blend
fn estimate_left_tangent(points: &[Point]) -> Point {
    if points.len() == 2 {
        return normalize(sub(points[1], points[0]));
    }
    let n = (points.len() - 2).min(TANGENT_WINDOW);
    let mut acc = [0.0, 0.0];
    for (k, w) in tangent_weights(n).iter().enumerate() {
        acc = add(acc, scale(sub(points[2 + k], points[1]), *w));
    }
    normalize(acc)
}

/// Unit tangent at the end of the sequence (pointing inward-to-outward)
fn estimate_right_tangent(points: &[Point]) -> Point {
    if points.len() == 2 {
        return normalize(sub(points[0], points[1]));
    }
    let last = points.len();
    let n = (last - 2).min(TANGENT_WINDOW);
    let mut acc = [0.0, 0.0];
    for (k, w) in tangent_weights(n).iter().enumerate() {
        acc = add(acc, scale(sub(points[last - 3 - k], points[last - 2]), *w));
    }
    normalize(acc)
}

/// Assign each point a parameter proportional to accumulated chord length
fn chord_length_parameterize(points: &[Point]) -> Vec<f64> {
    let mut u = Vec::with_capacity(points.len());
    u.push(0.0);
    for pair in points.windows(2) {
        let prev = *u.last().unwrap_or(&0.0);
        u.push(prev + norm(sub(pair[1], pair[0])));
    }
    let total = u[u.len() - 1];
    if total > 0.0 {
        for v in &mut u {
            *v /= total;
        }
    }
    u
}

/// Least-squares solve for the two free control points given fixed endpoints
/// and endpoint tangent directions
fn generate_bezier(points: &[Point], u: &[f64], left: Point, right: Point) -> Bezier {
    let first = points[0];
    let last = points[points.len() - 1];
    let mut bez: Bezier = [first, first, last, last];

    // normal equations over the two tangent magnitudes alpha_l, alpha_r
    let mut c = [[0.0f64; 2]; 2];
    let mut x = [0.0f64; 2];
    for (point, &ui) in points.iter().zip(u) {
        let s = 1.0 - ui;
        let a0 = scale(left, 3.0 * s * s * ui);
        let a1 = scale(right, 3.0 * s * ui * ui);

        c[0][0] += dot(a0, a0);
        c[0][1] += dot(a0, a1);
        c[1][0] += dot(a0, a1);
        c[1][1] += dot(a1, a1);

        let d = sub(*point, eval_bezier(&bez, ui));
        x[0] += dot(a0, d);
        x[1] += dot(a1, d);
    }

    let det_c0_c1 = c[0][0] * c[1][1] - c[1][0] * c[0][1];
    let (alpha_l, alpha_r) = if det_c0_c1.abs() < 1e-5 {
        (0.0, 0.0)
    } else {
        let det_x_c1 = x[0] * c[1][1] - x[1] * c[0][1];
        let det_c0_x = c[0][0] * x[1] - c[1][0] * x[0];
        (det_x_c1 / det_c0_c1, det_c0_x / det_c0_c1)
    };

    // Wu/Barsky fallback when the solve degenerates: coincident control
    // points would divide by zero in later Newton-Raphson steps
    let seg_len = norm(sub(first, last));
    let epsilon = 1e-6 * seg_len;
    if alpha_l < epsilon || alpha_r < epsilon {
        bez[1] = add(bez[1], scale(left, seg_len / 3.0));
        bez[2] = add(bez[2], scale(right, seg_len / 3.0));
    } else {
        bez[1] = add(bez[1], scale(left, alpha_l));
        bez[2] = add(bez[2], scale(right, alpha_r));
    }
    bez
}

/// Worst squared distance between the curve and the points it parameterizes,
/// with the index where it occurs
fn max_sq_error(points: &[Point], bez: &Bezier, u: &[f64]) -> (usize, f64) {
    let mut split = points.len() / 2;
    let mut max_err = 0.0;
    for (i, (point, &ui)) in points.iter().zip(u).enumerate() {
        let d = sub(eval_bezier(bez, ui), *point);
        let err = dot(d, d);
        if err > max_err {
            max_err = err;
            split = i;
        }
    }
    (split, max_err)
}

/// One Newton-Raphson step per point toward the parameter minimizing its
/// distance to the curve
fn reparameterize(bez: &Bezier, points: &[Point], u: &[f64]) -> Vec<f64> {
    points
        .iter()
        .zip(u)
        .map(|(point, &ui)| newton_raphson_step(bez, *point, ui))
        .collect()
}

/// Solve f(u) = (q(u) - p) . q'(u) = 0 by one iteration of
/// u <- u - f(u) / f'(u)
fn newton_raphson_step(bez: &Bezier, point: Point, u: f64) -> f64 {
    let d = sub(eval_bezier(bez, u), point);
    let qp = eval_derivative(bez, u);
    let qpp = eval_second_derivative(bez, u);

    let num = dot(d, qp);
    let den = dot(qp, qp) + dot(d, qpp);
    if den == 0.0 {
        u
    } else {
        u - num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eval_endpoints() {
        let bez: Bezier = [[0.0, 0.0], [1.0, 2.0], [3.0, 2.0], [4.0, 0.0]];
        assert_eq!(eval_bezier(&bez, 0.0), bez[0]);
        assert_eq!(eval_bezier(&bez, 1.0), bez[3]);
    }

    #[test]
    fn test_eval_midpoint() {
        // symmetric arch: midpoint x is the mean, y = (3*2 + 3*2) / 8
        let bez: Bezier = [[0.0, 0.0], [1.0, 2.0], [3.0, 2.0], [4.0, 0.0]];
        let mid = eval_bezier(&bez, 0.5);
        assert_relative_eq!(mid[0], 2.0);
        assert_relative_eq!(mid[1], 1.5);
    }

    #[test]
    fn test_derivative_at_endpoints() {
        let bez: Bezier = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]];
        // q'(0) = 3 (p1 - p0)
        assert_eq!(eval_derivative(&bez, 0.0), [3.0, 0.0]);
        assert_eq!(eval_derivative(&bez, 1.0), [3.0, 0.0]);
    }

    #[test]
    fn test_two_point_heuristic() {
        let points = [[0.0, 0.0], [9.0, 0.0]];
        let segments = fit_bezier(&points, 1.0);
        assert_eq!(segments.len(), 1);
        let bez = segments[0];
        assert_eq!(bez[0], points[0]);
        assert_eq!(bez[3], points[1]);
        // control points a third of the chord out along the chord
        assert_relative_eq!(bez[1][0], 3.0);
        assert_relative_eq!(bez[2][0], 6.0);
    }

    #[test]
    fn test_straight_line_single_segment() {
        let points: Vec<Point> = (0..10).map(|i| [i as f64, 2.0 * i as f64]).collect();
        let segments = fit_bezier(&points, 0.25);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0][0], points[0]);
        assert_eq!(segments[0][3], points[9]);

        // every input point sits on the fitted curve
        let u = chord_length_parameterize(&points);
        let (_, err) = max_sq_error(&points, &segments[0], &u);
        assert!(err < 0.25, "max squared error {err} exceeds tolerance");
    }

    #[test]
    fn test_quarter_circle_within_tolerance() {
        let points: Vec<Point> = (0..=16)
            .map(|i| {
                let theta = std::f64::consts::FRAC_PI_2 * i as f64 / 16.0;
                [100.0 * theta.cos(), 100.0 * theta.sin()]
            })
            .collect();
        let segments = fit_bezier(&points, 1.0);
        assert!(!segments.is_empty());

        // chain interpolates the sequence endpoints
        let first = segments[0];
        let last = segments[segments.len() - 1];
        assert_relative_eq!(first[0][0], 100.0);
        assert_relative_eq!(first[0][1], 0.0);
        assert_relative_eq!(last[3][0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(last[3][1], 100.0);
    }

    #[test]
    fn test_corner_forces_split() {
        // sharp V: no single cubic stays within a tight tolerance
        let mut points: Vec<Point> = (0..=10).map(|i| [i as f64, i as f64]).collect();
        points.extend((1..=10).map(|i| [10.0 + i as f64, 10.0 - i as f64]));
        let segments = fit_bezier(&points, 0.01);
        assert!(segments.len() > 1);

        // consecutive segments share their join point
        for pair in segments.windows(2) {
            assert_eq!(pair[0][3], pair[1][0]);
        }
    }

    #[test]
    fn test_chord_length_parameterize_bounds() {
        let points = [[0.0, 0.0], [1.0, 0.0], [3.0, 0.0]];
        let u = chord_length_parameterize(&points);
        assert_eq!(u[0], 0.0);
        assert_relative_eq!(u[1], 1.0 / 3.0);
        assert_eq!(u[2], 1.0);
    }

    #[test]
    #[should_panic(expected = "at least two points")]
    fn test_single_point_panics() {
        fit_bezier(&[[0.0, 0.0]], 1.0);
    }
}
