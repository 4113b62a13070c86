// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*
Find the intersection of a line and a curve by solving for valid t values.

The curve's control points are mapped to signed distances from the line:

  d(i) = cross(line_end - line_start, p(i) - line_start) / |line_end - line_start|

Since the mapping is affine, the distance along the curve is a Bezier polynomial
with the same basis:

  line:  d0(1-t) + d1 t
  quad:  d0(1-t)^2 + 2 d1 (1-t)t + d2 t^2
  conic: the numerator of the rational form, i.e. a quad with d1 scaled by the weight
  cubic: d0(1-t)^3 + 3 d1 (1-t)^2 t + 3 d2 (1-t) t^2 + d3 t^3

Its roots are the parameters where the curve crosses the line.
Horizontal and vertical lines are the special case where the distance is just
the coordinate minus the axis intercept.
*/

use super::point64::{Point64, SearchAxis};
use super::{bezier_derivative, bezier_value, cubic64, quad64, Scalar64};

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use tiny_pathops_path::NoStdFloat;

/// Finds `t` values where a curve crosses the infinite line through `line`.
///
/// `points` are 2, 3 or 4 control points. `weight` is used only by 3 point curves.
pub fn line_intersect(
    points: &[Point64],
    weight: f64,
    line: [Point64; 2],
    roots: &mut [f64; 3],
) -> usize {
    let dir = line[1] - line[0];
    let len = dir.length();
    if !(len > 0.0) {
        return 0;
    }

    let mut values = [0.0; 4];
    for (v, p) in values.iter_mut().zip(points) {
        *v = dir.cross(*p - line[0]) / len;
    }

    solve(&mut values[..points.len()], weight, roots)
}

/// Finds `t` values where a curve crosses a horizontal (`SearchAxis::Y`)
/// or vertical (`SearchAxis::X`) line.
pub fn axis_intersect(
    points: &[Point64],
    weight: f64,
    axis: SearchAxis,
    axis_intercept: f64,
    roots: &mut [f64; 3],
) -> usize {
    let mut values = [0.0; 4];
    for (v, p) in values.iter_mut().zip(points) {
        *v = p.axis_coord(axis) - axis_intercept;
    }

    solve(&mut values[..points.len()], weight, roots)
}

fn solve(values: &mut [f64], weight: f64, roots: &mut [f64; 3]) -> usize {
    let count = match values.len() {
        2 => {
            let (d0, d1) = (values[0], values[1]);
            if d0 == d1 {
                0
            } else {
                quad64::roots_valid_t(0.0, d1 - d0, d0, roots)
            }
        }
        3 => {
            // Only the numerator matters for a conic.
            values[1] *= weight;
            let (d0, d1, d2) = (values[0], values[1], values[2]);
            quad64::roots_valid_t(d0 - 2.0 * d1 + d2, 2.0 * (d1 - d0), d0, roots)
        }
        4 => {
            let src = [values[0], 0.0, values[1], 0.0, values[2], 0.0, values[3]];
            let (a, b, c, d) = cubic64::coefficients(&src);
            cubic64::roots_valid_t(a, b, c, d, roots)
        }
        _ => 0,
    };

    for t in &mut roots[..count] {
        *t = polish_root(values, *t);
    }

    count
}

// The closed forms lose precision near double roots and for large coordinates.
// A couple of Newton steps bring the root back onto the curve.
fn polish_root(values: &[f64], mut t: f64) -> f64 {
    let mut dist = bezier_value(values, t).abs();
    for _ in 0..3 {
        let deriv = bezier_derivative(values, t);
        if deriv.precisely_zero() {
            break;
        }

        let new_t = (t - bezier_value(values, t) / deriv).bound(0.0, 1.0);
        let new_dist = bezier_value(values, new_t).abs();
        if new_dist >= dist {
            break;
        }

        t = new_t;
        dist = new_dist;
    }

    t
}
