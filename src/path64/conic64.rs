// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use super::point64::{Point64, SearchAxis};
use super::quad64;

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use tiny_pathops_path::NoStdFloat;

/// A rational quadratic curve.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Conic64 {
    pub points: [Point64; 3],
    pub weight: f64,
}

// A point in homogeneous coordinates.
#[derive(Copy, Clone, Debug)]
struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3 {
    fn project(&self) -> Point64 {
        Point64::from_xy(self.x / self.z, self.y / self.z)
    }
}

impl Conic64 {
    pub fn new(points: [Point64; 3], weight: f64) -> Self {
        Conic64 { points, weight }
    }

    pub fn point_at_t(&self, t: f64) -> Point64 {
        if t == 0.0 {
            return self.points[0];
        }

        if t == 1.0 {
            return self.points[2];
        }

        self.blossom(t, t).project()
    }

    // Same as the quad one, but in homogeneous space.
    fn blossom(&self, u: f64, v: f64) -> Point3 {
        let [p0, p1, p2] = self.points;
        let w = self.weight;
        let a = (1.0 - u) * (1.0 - v);
        let b = ((1.0 - u) * v + u * (1.0 - v)) * w;
        let c = u * v;
        Point3 {
            x: a * p0.x + b * p1.x + c * p2.x,
            y: a * p0.y + b * p1.y + c * p2.y,
            z: a + b + c,
        }
    }

    /// Returns the part of the curve between `t0` and `t1`.
    ///
    /// `t0` can be bigger than `t1`, in which case the part is reversed.
    /// The end points are normalized to a unit weight.
    pub fn sub_divide(&self, t0: f64, t1: f64) -> Conic64 {
        let h0 = self.blossom(t0, t0);
        let h1 = self.blossom(t0, t1);
        let h2 = self.blossom(t1, t1);
        let weight = h1.z / (h0.z * h2.z).sqrt();
        Conic64::new(
            [self.point_at_t(t0), h1.project(), self.point_at_t(t1)],
            weight,
        )
    }

    /// Finds `t` values where the curve's derivative along `axis` is zero.
    pub fn find_extrema(&self, axis: SearchAxis, t_values: &mut [f64]) -> usize {
        let p20 = self.points[2].axis_coord(axis) - self.points[0].axis_coord(axis);
        let p10 = self.points[1].axis_coord(axis) - self.points[0].axis_coord(axis);
        let w_p10 = self.weight * p10;
        quad64::roots_valid_t(
            self.weight * p20 - p20,
            p20 - 2.0 * w_p10,
            w_p10,
            t_values,
        )
    }
}
