// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Double precision curve math.

use tiny_pathops_path::{Scalar, SCALAR_MAX};

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use tiny_pathops_path::NoStdFloat;

pub mod point64;

pub mod conic64;
pub mod cubic64;
pub mod line_intersections;
pub mod quad64;

pub use point64::{Point64, SearchAxis};

// The code below is from SkPathOpsTypes.

const FLT_EPSILON: f64 = f32::EPSILON as f64;
const DBL_EPSILON_ERR: f64 = f64::EPSILON * 4.0;
const FLT_EPSILON_CUBED: f64 = FLT_EPSILON * FLT_EPSILON * FLT_EPSILON;
const FLT_EPSILON_INVERSE: f64 = 1.0 / FLT_EPSILON;

pub trait Scalar64 {
    fn bound(self, min: Self, max: Self) -> Self;
    fn between(self, a: f64, b: f64) -> bool;
    fn precisely_zero(self) -> bool;
    fn approximately_zero_or_more(self) -> bool;
    fn approximately_one_or_less(self) -> bool;
    fn approximately_zero(self) -> bool;
    fn approximately_zero_inverse(self) -> bool;
    fn approximately_zero_cubed(self) -> bool;
    fn approximately_zero_when_compared_to(self, other: Self) -> bool;
    fn approximately_equal(self, other: Self) -> bool;
    fn almost_dequal_ulps(self, other: Self) -> bool;
}

impl Scalar64 for f64 {
    // Works just like SkTPin, returning `max` for NaN/inf
    fn bound(self, min: Self, max: Self) -> Self {
        max.min(self).max(min)
    }

    /// Returns true if (a <= self <= b) || (a >= self >= b).
    fn between(self, a: f64, b: f64) -> bool {
        (a - self) * (b - self) <= 0.0
    }

    fn precisely_zero(self) -> bool {
        self.abs() < DBL_EPSILON_ERR
    }

    fn approximately_zero_or_more(self) -> bool {
        self > -FLT_EPSILON
    }

    fn approximately_one_or_less(self) -> bool {
        self < 1.0 + FLT_EPSILON
    }

    fn approximately_zero(self) -> bool {
        self.abs() < FLT_EPSILON
    }

    fn approximately_zero_inverse(self) -> bool {
        self.abs() > FLT_EPSILON_INVERSE
    }

    fn approximately_zero_cubed(self) -> bool {
        self.abs() < FLT_EPSILON_CUBED
    }

    fn approximately_zero_when_compared_to(self, other: Self) -> bool {
        self == 0.0 || self.abs() < (other * FLT_EPSILON).abs()
    }

    // Use this for comparing Ts in the range of 0 to 1. For general numbers (larger and smaller) use
    // AlmostEqualUlps instead.
    fn approximately_equal(self, other: Self) -> bool {
        (self - other).approximately_zero()
    }

    fn almost_dequal_ulps(self, other: Self) -> bool {
        if self.abs() < SCALAR_MAX as f64 && other.abs() < SCALAR_MAX as f64 {
            (self as f32).almost_dequal_ulps(other as f32)
        } else {
            (self - other).abs() / self.abs().max(other.abs()) < FLT_EPSILON * 16.0
        }
    }
}

pub fn cube_root(x: f64) -> f64 {
    if x.approximately_zero_cubed() {
        return 0.0;
    }

    let result = halley_cbrt3d(x.abs());
    if x < 0.0 {
        -result
    } else {
        result
    }
}

// cube root approximation using 3 iterations of Halley's method (double)
fn halley_cbrt3d(d: f64) -> f64 {
    let mut a = cbrt_5d(d);
    a = cbrta_halleyd(a, d);
    a = cbrta_halleyd(a, d);
    cbrta_halleyd(a, d)
}

// cube root approximation using bit hack for 64-bit float
// adapted from Kahan's cbrt
fn cbrt_5d(d: f64) -> f64 {
    let b1 = 715094163;
    let mut t: f64 = 0.0;
    let pt: &mut [u32; 2] = bytemuck::cast_mut(&mut t);
    let px: [u32; 2] = bytemuck::cast(d);
    pt[1] = px[1] / 3 + b1;
    t
}

// iterative cube root approximation using Halley's method (double)
fn cbrta_halleyd(a: f64, r: f64) -> f64 {
    let a3 = a * a * a;
    a * (a3 + r + r) / (a3 + a3 + r)
}

pub fn interp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Evaluates a polynomial Bezier, given by its per-axis control values, at `t`.
///
/// Supports lines, quads and cubics. Used for 1D distance curves.
pub fn bezier_value(values: &[f64], t: f64) -> f64 {
    let mt = 1.0 - t;
    match *values {
        [a, b] => a * mt + b * t,
        [a, b, c] => a * mt * mt + 2.0 * b * mt * t + c * t * t,
        [a, b, c, d] => {
            a * mt * mt * mt + 3.0 * b * mt * mt * t + 3.0 * c * mt * t * t + d * t * t * t
        }
        _ => 0.0,
    }
}

/// A derivative of [`bezier_value`].
pub fn bezier_derivative(values: &[f64], t: f64) -> f64 {
    let mt = 1.0 - t;
    match *values {
        [a, b] => b - a,
        [a, b, c] => 2.0 * ((b - a) * mt + (c - b) * t),
        [a, b, c, d] => 3.0 * ((b - a) * mt * mt + 2.0 * (c - b) * mt * t + (d - c) * t * t),
        _ => 0.0,
    }
}
