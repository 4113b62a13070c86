// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

use tiny_pathops_path::{Path, PathSegment, Point, Rect};

use crate::edge_builder::PathEdge;

/// Returns bounds of the path's curves, ignoring control points that are off the curves.
///
/// Unlike [`Path::bounds`], a curve bulging less than its control polygon
/// produces tighter bounds. Moves without segments are included.
///
/// Returns `None` for an empty path.
pub fn tight_bounds(path: &Path) -> Option<Rect> {
    if path.is_empty() {
        return None;
    }

    let mut points = Vec::with_capacity(path.points().len());
    let mut last = Point::zero();
    for segment in path.segments() {
        let edge = match segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                points.push(p);
                last = p;
                continue;
            }
            PathSegment::QuadTo(p1, p) => PathEdge::QuadTo(last, p1, p),
            PathSegment::ConicTo(p1, p, w) => PathEdge::ConicTo(last, p1, p, w),
            PathSegment::CubicTo(p1, p2, p) => PathEdge::CubicTo(last, p1, p2, p),
            PathSegment::Close => continue,
        };

        let curve = edge.to_curve()?;
        for t in curve.extrema() {
            points.push(curve.point_at_t(t).to_point());
        }

        last = curve.end().to_point();
        points.push(last);
    }

    Rect::from_points(&points)
}
