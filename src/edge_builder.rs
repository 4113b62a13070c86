// Copyright 2011 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

use tiny_pathops_path::{Path, PathVerb, Point};

use crate::curve::{Curve, Piece, Tolerance};
use crate::path64::conic64::Conic64;
use crate::path64::cubic64::Cubic64;
use crate::path64::quad64::Quad64;
use crate::path64::{Point64, Scalar64};
use crate::SimplifyError;

/// A path segment with an explicit start point.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathEdge {
    LineTo(Point, Point),
    QuadTo(Point, Point, Point),
    ConicTo(Point, Point, Point, f32),
    CubicTo(Point, Point, Point, Point),
}

impl PathEdge {
    /// Converts the edge into a double precision curve.
    ///
    /// Returns `None` for non-finite coordinates or weights.
    pub fn to_curve(&self) -> Option<Curve> {
        let p = Point64::from_point;
        let curve = match *self {
            PathEdge::LineTo(p0, p1) => Curve::Line([p(p0), p(p1)]),
            PathEdge::QuadTo(p0, p1, p2) => Curve::Quad(Quad64::new([p(p0), p(p1), p(p2)])),
            PathEdge::ConicTo(p0, p1, p2, w) => {
                if !(w.is_finite() && w > 0.0) {
                    return None;
                }

                Curve::Conic(Conic64::new([p(p0), p(p1), p(p2)], f64::from(w)))
            }
            PathEdge::CubicTo(p0, p1, p2, p3) => {
                Curve::Cubic(Cubic64::new([p(p0), p(p1), p(p2), p(p3)]))
            }
        };

        if curve.points().iter().all(|p| p.is_finite()) {
            Some(curve)
        } else {
            None
        }
    }
}

/// Iterates over path's segments, closing every contour with a line.
///
/// Filling treats open contours as closed ones, so this iterator does too.
pub fn edge_iter(path: &Path) -> PathEdgeIter {
    PathEdgeIter {
        path,
        verb_index: 0,
        points_index: 0,
        weights_index: 0,
        move_to: Point::zero(),
        needs_close_line: false,
    }
}

#[allow(missing_debug_implementations)]
pub struct PathEdgeIter<'a> {
    path: &'a Path,
    verb_index: usize,
    points_index: usize,
    weights_index: usize,
    move_to: Point,
    needs_close_line: bool,
}

impl<'a> PathEdgeIter<'a> {
    fn close_line(&mut self) -> Option<PathEdge> {
        self.needs_close_line = false;

        let edge = PathEdge::LineTo(self.path.points()[self.points_index - 1], self.move_to);
        Some(edge)
    }
}

impl<'a> Iterator for PathEdgeIter<'a> {
    type Item = PathEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let points = self.path.points();
        if self.verb_index < self.path.verbs().len() {
            let verb = self.path.verbs()[self.verb_index];
            self.verb_index += 1;

            match verb {
                PathVerb::Move => {
                    if self.needs_close_line {
                        let res = self.close_line();
                        self.move_to = points[self.points_index];
                        self.points_index += 1;
                        return res;
                    }

                    self.move_to = points[self.points_index];
                    self.points_index += 1;
                    self.next()
                }
                PathVerb::Close => {
                    if self.needs_close_line {
                        return self.close_line();
                    }

                    self.next()
                }
                PathVerb::Line => {
                    self.needs_close_line = true;
                    let i = self.points_index;
                    self.points_index += 1;
                    Some(PathEdge::LineTo(points[i - 1], points[i]))
                }
                PathVerb::Quad => {
                    self.needs_close_line = true;
                    let i = self.points_index;
                    self.points_index += 2;
                    Some(PathEdge::QuadTo(points[i - 1], points[i], points[i + 1]))
                }
                PathVerb::Conic => {
                    self.needs_close_line = true;
                    let i = self.points_index;
                    self.points_index += 2;
                    let weight = self.path.weights()[self.weights_index];
                    self.weights_index += 1;
                    Some(PathEdge::ConicTo(points[i - 1], points[i], points[i + 1], weight))
                }
                PathVerb::Cubic => {
                    self.needs_close_line = true;
                    let i = self.points_index;
                    self.points_index += 3;
                    Some(PathEdge::CubicTo(
                        points[i - 1],
                        points[i],
                        points[i + 1],
                        points[i + 2],
                    ))
                }
            }
        } else if self.needs_close_line {
            self.close_line()
        } else {
            None
        }
    }
}

/// A monotonic part of an input curve.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Edge {
    /// An index into `EdgeList::curves`.
    pub curve: usize,
    pub piece: Piece,
    /// Winding contribution per operand, in the curve's direction.
    pub wind: [i32; 2],
    /// Whether the start/end point is an input point and not a computed one.
    pub exact: [bool; 2],
}

#[derive(Clone, Debug)]
pub struct EdgeList {
    pub curves: Vec<Curve>,
    pub edges: Vec<Edge>,
}

pub struct EdgeBuilder {
    list: EdgeList,
    tolerance: Tolerance,
    max_edges: usize,
}

impl EdgeBuilder {
    pub fn new(tolerance: Tolerance, max_edges: usize) -> Self {
        EdgeBuilder {
            list: EdgeList {
                curves: Vec::with_capacity(64),
                edges: Vec::with_capacity(64),
            },
            tolerance,
            max_edges,
        }
    }

    /// Adds all path's segments as edges of the `operand`, which is 0 or 1.
    pub fn push_path(&mut self, path: &Path, operand: usize) -> Result<(), SimplifyError> {
        let mut wind = [0; 2];
        wind[operand] = 1;

        for edge in edge_iter(path) {
            let curve = edge.to_curve().ok_or(SimplifyError::NonFiniteInput)?;
            self.push_curve(curve, wind)?;
        }

        Ok(())
    }

    // Chops the curve at its x and y extrema. Zero-length parts are dropped,
    // parts without curvature become lines.
    fn push_curve(&mut self, curve: Curve, wind: [i32; 2]) -> Result<(), SimplifyError> {
        let source = self.list.curves.len();
        self.list.curves.push(curve);

        let mut prev_t = 0.0;
        let mut prev_p = curve.start();
        for t in curve.extrema() {
            if t.approximately_zero()
                || (1.0 - t).approximately_zero()
                || (t - prev_t).approximately_zero()
            {
                continue;
            }

            let p = curve.point_at_t(t);
            let piece = Piece {
                t0: prev_t,
                t1: t,
                start: prev_p,
                end: p,
            };
            self.push_piece(source, piece, [prev_t == 0.0, false], wind)?;

            prev_t = t;
            prev_p = p;
        }

        let piece = Piece {
            t0: prev_t,
            t1: 1.0,
            start: prev_p,
            end: curve.end(),
        };
        self.push_piece(source, piece, [prev_t == 0.0, true], wind)?;

        Ok(())
    }

    fn push_piece(
        &mut self,
        source: usize,
        piece: Piece,
        exact: [bool; 2],
        wind: [i32; 2],
    ) -> Result<(), SimplifyError> {
        if self.tolerance.points_near(piece.start, piece.end) {
            return Ok(());
        }

        let curve = self.list.curves[source];
        let flatness = self
            .tolerance
            .of_point(piece.start)
            .max(self.tolerance.of_point(piece.end));

        let edge = if !curve.is_line() && curve.is_flat(piece.t0, piece.t1, flatness) {
            let line = self.list.curves.len();
            self.list.curves.push(Curve::Line([piece.start, piece.end]));
            Edge {
                curve: line,
                piece: Piece {
                    t0: 0.0,
                    t1: 1.0,
                    start: piece.start,
                    end: piece.end,
                },
                wind,
                exact,
            }
        } else {
            Edge {
                curve: source,
                piece,
                wind,
                exact,
            }
        };

        self.list.edges.push(edge);
        if self.list.edges.len() > self.max_edges {
            return Err(SimplifyError::TooComplex);
        }

        Ok(())
    }

    pub fn finish(self) -> EdgeList {
        self.list
    }
}
