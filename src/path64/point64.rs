// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::Point;

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use tiny_pathops_path::NoStdFloat;

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum SearchAxis {
    X,
    Y,
}

impl SearchAxis {
    pub const ALL: [SearchAxis; 2] = [SearchAxis::X, SearchAxis::Y];
}

#[repr(C)]
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Point64 {
    pub x: f64,
    pub y: f64,
}

impl Point64 {
    pub fn from_xy(x: f64, y: f64) -> Self {
        Point64 { x, y }
    }

    pub fn from_point(p: Point) -> Self {
        Point64 {
            x: f64::from(p.x),
            y: f64::from(p.y),
        }
    }

    pub fn zero() -> Self {
        Point64 { x: 0.0, y: 0.0 }
    }

    pub fn to_point(&self) -> Point {
        Point::from_xy(self.x as f32, self.y as f32)
    }

    pub fn axis_coord(&self, axis: SearchAxis) -> f64 {
        match axis {
            SearchAxis::X => self.x,
            SearchAxis::Y => self.y,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn dot(&self, other: Point64) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: Point64) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Point64) -> f64 {
        (*self - other).length()
    }

    /// Angle in radians, in the (-PI, PI] range.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn lerp(&self, other: Point64, t: f64) -> Point64 {
        Point64::from_xy(
            super::interp(self.x, other.x, t),
            super::interp(self.y, other.y, t),
        )
    }

    pub fn scale(&self, s: f64) -> Point64 {
        Point64::from_xy(self.x * s, self.y * s)
    }
}

impl core::ops::Neg for Point64 {
    type Output = Point64;

    fn neg(self) -> Self::Output {
        Point64::from_xy(-self.x, -self.y)
    }
}

impl core::ops::Add for Point64 {
    type Output = Point64;

    fn add(self, other: Point64) -> Self::Output {
        Point64::from_xy(self.x + other.x, self.y + other.y)
    }
}

impl core::ops::Sub for Point64 {
    type Output = Point64;

    fn sub(self, other: Point64) -> Self::Output {
        Point64::from_xy(self.x - other.x, self.y - other.y)
    }
}
