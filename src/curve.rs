// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use arrayvec::ArrayVec;

use crate::path64::conic64::Conic64;
use crate::path64::cubic64::Cubic64;
use crate::path64::quad64::Quad64;
use crate::path64::{line_intersections, Point64, SearchAxis};

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use tiny_pathops_path::NoStdFloat;

/// Number of single precision ULPs two coordinates may differ by and still be equal.
const ULPS_TOLERANCE: f64 = 16.0 * f32::EPSILON as f64;

/// A scale-aware tolerance.
///
/// Input coordinates are `f32`, so anything closer than a few of their ULPs
/// cannot be told apart. The tolerance is computed per axis.
#[derive(Copy, Clone, Debug)]
pub struct Tolerance {
    scale: f64,
}

impl Tolerance {
    pub fn new(scale: f64) -> Self {
        Tolerance { scale }
    }

    /// Returns the tolerance for a coordinate of the given magnitude.
    pub fn of(&self, v: f64) -> f64 {
        v.abs().max(1.0) * ULPS_TOLERANCE * self.scale
    }

    /// Returns the tolerance for distances around the given point.
    pub fn of_point(&self, p: Point64) -> f64 {
        self.of(p.x.abs().max(p.y.abs()))
    }

    pub fn points_near(&self, a: Point64, b: Point64) -> bool {
        self.points_within(a, b, 1.0)
    }

    /// Same as `points_near`, but with the tolerance multiplied by `factor`.
    pub fn points_within(&self, a: Point64, b: Point64, factor: f64) -> bool {
        (a.x - b.x).abs() <= self.of(a.x.abs().max(b.x.abs())) * factor
            && (a.y - b.y).abs() <= self.of(a.y.abs().max(b.y.abs())) * factor
    }
}

/// A path segment converted to double precision.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Curve {
    Line([Point64; 2]),
    Quad(Quad64),
    Conic(Conic64),
    Cubic(Cubic64),
}

impl Curve {
    pub fn points(&self) -> &[Point64] {
        match self {
            Curve::Line(points) => points,
            Curve::Quad(quad) => &quad.points,
            Curve::Conic(conic) => &conic.points,
            Curve::Cubic(cubic) => &cubic.points,
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            Curve::Conic(conic) => conic.weight,
            _ => 1.0,
        }
    }

    pub fn start(&self) -> Point64 {
        self.points()[0]
    }

    pub fn end(&self) -> Point64 {
        let points = self.points();
        points[points.len() - 1]
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Curve::Line(_))
    }

    pub fn point_at_t(&self, t: f64) -> Point64 {
        match self {
            Curve::Line(points) => {
                if t == 0.0 {
                    points[0]
                } else if t == 1.0 {
                    points[1]
                } else {
                    points[0].lerp(points[1], t)
                }
            }
            Curve::Quad(quad) => quad.point_at_t(t),
            Curve::Conic(conic) => conic.point_at_t(t),
            Curve::Cubic(cubic) => cubic.point_at_t(t),
        }
    }

    /// Returns the part of the curve between `t0` and `t1`. Reversed when `t0 > t1`.
    pub fn sub_divide(&self, t0: f64, t1: f64) -> Curve {
        match self {
            Curve::Line(_) => Curve::Line([self.point_at_t(t0), self.point_at_t(t1)]),
            Curve::Quad(quad) => Curve::Quad(quad.sub_divide(t0, t1)),
            Curve::Conic(conic) => Curve::Conic(conic.sub_divide(t0, t1)),
            Curve::Cubic(cubic) => Curve::Cubic(cubic.sub_divide(t0, t1)),
        }
    }

    /// Returns the sorted interior `t` values where the curve turns in x or y.
    pub fn extrema(&self) -> ArrayVec<f64, 4> {
        let mut result = ArrayVec::new();
        for axis in SearchAxis::ALL.iter().copied() {
            let mut t_values = [0.0; 3];
            let count = match self {
                Curve::Line(_) => 0,
                Curve::Quad(quad) => quad.find_extrema(axis, &mut t_values),
                Curve::Conic(conic) => conic.find_extrema(axis, &mut t_values),
                Curve::Cubic(cubic) => cubic.find_extrema(axis, &mut t_values),
            };

            for &t in &t_values[..count] {
                if t > 0.0 && t < 1.0 && !result.is_full() {
                    result.push(t);
                }
            }
        }

        result.sort_unstable_by(|a: &f64, b: &f64| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
        result
    }

    /// Finds `t` values where the curve crosses the infinite line through `line`.
    pub fn line_intersect(&self, line: [Point64; 2]) -> ArrayVec<f64, 3> {
        let mut roots = [0.0; 3];
        let count =
            line_intersections::line_intersect(self.points(), self.weight(), line, &mut roots);
        roots[..count].iter().copied().collect()
    }

    /// Finds `t` values where the curve reaches `value` along `axis`.
    pub fn axis_intersect(&self, axis: SearchAxis, value: f64) -> ArrayVec<f64, 3> {
        let mut roots = [0.0; 3];
        let count =
            line_intersections::axis_intersect(self.points(), self.weight(), axis, value, &mut roots);
        roots[..count].iter().copied().collect()
    }

    /// Returns the direction in which the curve leaves `t_from` while heading to `t_to`.
    ///
    /// Uses the first control point of the sub-curve that is distinct from its start,
    /// falling back to the chord.
    pub fn tangent(&self, t_from: f64, t_to: f64) -> Point64 {
        let part = self.sub_divide(t_from, t_to);
        let points = part.points();
        let start = points[0];
        let chord = points[points.len() - 1] - start;
        let min_len = chord.length() * 1e-9;
        for p in &points[1..] {
            let d = *p - start;
            if d.length() > min_len {
                return d;
            }
        }

        chord
    }

    /// Checks that the `t0..t1` part of the curve is within `tolerance` of its chord.
    pub fn is_flat(&self, t0: f64, t1: f64, tolerance: f64) -> bool {
        if self.is_line() {
            return true;
        }

        let part = self.sub_divide(t0, t1);
        is_polygon_flat(part.points(), tolerance)
    }
}

/// Checks that inner control points are within `tolerance` of the chord.
pub fn is_polygon_flat(points: &[Point64], tolerance: f64) -> bool {
    let start = points[0];
    let chord = points[points.len() - 1] - start;
    let len = chord.length();
    points[1..points.len() - 1].iter().all(|p| {
        let d = *p - start;
        if len > 0.0 {
            (chord.cross(d) / len).abs() <= tolerance
        } else {
            d.length() <= tolerance
        }
    })
}

/// A part of a curve that is monotonic in both x and y.
///
/// `start` and `end` are the part's end points. They can differ slightly from
/// the curve's points at `t0`/`t1` after snapping.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Piece {
    pub t0: f64,
    pub t1: f64,
    pub start: Point64,
    pub end: Point64,
}

impl Piece {
    pub fn mid_t(&self) -> f64 {
        (self.t0 + self.t1) * 0.5
    }

    pub fn min(&self) -> Point64 {
        Point64::from_xy(self.start.x.min(self.end.x), self.start.y.min(self.end.y))
    }

    pub fn max(&self) -> Point64 {
        Point64::from_xy(self.start.x.max(self.end.x), self.start.y.max(self.end.y))
    }

    /// Finds `t` where the piece reaches `value` along `axis`.
    ///
    /// Values outside of the piece are clamped to its ends.
    pub fn solve(&self, curve: &Curve, axis: SearchAxis, value: f64) -> f64 {
        let v0 = self.start.axis_coord(axis);
        let v1 = self.end.axis_coord(axis);
        let increasing = v1 >= v0;
        if (value <= v0) == increasing {
            return self.t0;
        }

        if (value >= v1) == increasing {
            return self.t1;
        }

        let found = curve
            .axis_intersect(axis, value)
            .into_iter()
            .find(|t| *t >= self.t0 && *t <= self.t1);
        if let Some(t) = found {
            return t;
        }

        // The closed form can miss a root at the very end of the range.
        let mut lo = self.t0;
        let mut hi = self.t1;
        for _ in 0..64 {
            let mid = (lo + hi) * 0.5;
            if !(mid > lo && mid < hi) {
                break;
            }

            let v = curve.point_at_t(mid).axis_coord(axis);
            if (v < value) == increasing {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        (lo + hi) * 0.5
    }

    /// Finds `t` of the point on the piece closest to `p`, if `p` is within `tolerance`.
    pub fn project(&self, curve: &Curve, p: Point64, tolerance: &Tolerance) -> Option<f64> {
        let min = self.min();
        let max = self.max();
        let slack_x = tolerance.of(p.x);
        let slack_y = tolerance.of(p.y);
        if p.x < min.x - slack_x
            || p.x > max.x + slack_x
            || p.y < min.y - slack_y
            || p.y > max.y + slack_y
        {
            return None;
        }

        let mut best: Option<(f64, f64)> = None;
        for axis in SearchAxis::ALL.iter().copied() {
            let span = self.end.axis_coord(axis) - self.start.axis_coord(axis);
            if span == 0.0 {
                continue;
            }

            let t = self.solve(curve, axis, p.axis_coord(axis));
            let q = self.point_at(curve, t);
            if tolerance.points_near(p, q) {
                let dist = p.distance(q);
                if best.map_or(true, |(_, d)| dist < d) {
                    best = Some((t, dist));
                }
            }
        }

        best.map(|(t, _)| t)
    }

    /// Returns the point at `t`, using the exact end points at the ends.
    pub fn point_at(&self, curve: &Curve, t: f64) -> Point64 {
        if t == self.t0 {
            self.start
        } else if t == self.t1 {
            self.end
        } else {
            curve.point_at_t(t)
        }
    }
}
