// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec;
use alloc::vec::Vec;

use tiny_pathops_path::FillType;

use crate::op::PathOp;
use crate::path64::{Point64, SearchAxis};
use crate::spans::{Span, SpanGraph};
use crate::SimplifyError;

/// Angles closer than this cannot be ordered reliably.
const MIN_WEDGE: f64 = 1e-3;

/// Winding numbers on both sides of a span, per operand.
///
/// Sides are given relative to the span's direction in y-down coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Sides {
    pub left: [i32; 2],
    pub right: [i32; 2],
}

/// Decides which winding numbers denote a filled area.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum FillRule {
    Single(FillType),
    Binary {
        op: PathOp,
        one: FillType,
        two: FillType,
    },
}

impl FillRule {
    /// Checks that the area with the given winding numbers is drawn by the result.
    ///
    /// The result's own inverse bit is factored out, so areas far away
    /// from all edges are never filled.
    pub fn is_filled(&self, wind: [i32; 2]) -> bool {
        match *self {
            FillRule::Single(fill_type) => fill_type.is_inside(wind[0]),
            FillRule::Binary { op, one, two } => {
                let a = one.is_inside(wind[0]) ^ one.is_inverse();
                let b = two.is_inside(wind[1]) ^ two.is_inverse();
                op.apply(a, b) ^ op.apply(one.is_inverse(), two.is_inverse())
            }
        }
    }
}

/// A span oriented so that the filled area is on its right.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct BoundaryEdge {
    pub curve: usize,
    pub t_start: f64,
    pub t_end: f64,
    pub from: usize,
    pub to: usize,
}

/// Computes winding numbers on both sides of every span.
///
/// A ray is cast from the span's middle along the axis
/// the span is least aligned with. Rays are swept in order of their level,
/// so each one is only tested against spans crossing that level.
pub fn assign(graph: &SpanGraph) -> Vec<Sides> {
    let mut sides = vec![Sides::default(); graph.spans.len()];
    for &along in &SearchAxis::ALL {
        let across = cross_axis(along);

        let mut rays: Vec<(usize, Point64)> = graph
            .spans
            .iter()
            .enumerate()
            .filter(|(_, span)| ray_axis(span.piece.end - span.piece.start) == along)
            .map(|(i, span)| (i, graph.curves[span.curve].point_at_t(span.piece.mid_t())))
            .collect();
        rays.sort_by(|a, b| cmp_f64(a.1.axis_coord(across), b.1.axis_coord(across)));

        let extent = |i: usize| {
            let piece = &graph.spans[i].piece;
            let v0 = piece.start.axis_coord(across);
            let v1 = piece.end.axis_coord(across);
            if v0 <= v1 {
                (v0, v1)
            } else {
                (v1, v0)
            }
        };

        let mut order: Vec<usize> = (0..graph.spans.len()).collect();
        order.sort_by(|a, b| cmp_f64(extent(*a).0, extent(*b).0));

        let mut next = 0;
        let mut active: Vec<usize> = Vec::new();
        for (i, p) in rays {
            let level = p.axis_coord(across);
            while next < order.len() && extent(order[next]).0 <= level {
                active.push(order[next]);
                next += 1;
            }
            active.retain(|j| extent(*j).1 > level);

            let before = winding_at(graph, &active, i, p, along);
            sides[i] = sides_of(&graph.spans[i], before);
        }
    }

    sides
}

fn ray_axis(d: Point64) -> SearchAxis {
    if d.y.abs() >= d.x.abs() {
        SearchAxis::X
    } else {
        SearchAxis::Y
    }
}

fn cross_axis(axis: SearchAxis) -> SearchAxis {
    match axis {
        SearchAxis::X => SearchAxis::Y,
        SearchAxis::Y => SearchAxis::X,
    }
}

fn cmp_f64(a: f64, b: f64) -> core::cmp::Ordering {
    a.partial_cmp(&b).unwrap_or(core::cmp::Ordering::Equal)
}

// Derives both sides from the winding right before the span along its ray.
fn sides_of(span: &Span, before: [i32; 2]) -> Sides {
    let d = span.piece.end - span.piece.start;
    match ray_axis(d) {
        SearchAxis::X => {
            let sign = if d.y > 0.0 { 1 } else { -1 };
            let after = add(before, span.wind, sign);
            if d.y > 0.0 {
                Sides { left: after, right: before }
            } else {
                Sides { left: before, right: after }
            }
        }
        SearchAxis::Y => {
            let sign = if d.x > 0.0 { -1 } else { 1 };
            let after = add(before, span.wind, sign);
            if d.x > 0.0 {
                Sides { left: before, right: after }
            } else {
                Sides { left: after, right: before }
            }
        }
    }
}

fn add(a: [i32; 2], b: [i32; 2], sign: i32) -> [i32; 2] {
    [a[0] + b[0] * sign, a[1] + b[1] * sign]
}

// Sums crossings of a ray from `p` towards negative `along`.
// `candidates` are the spans whose extent across the ray contains `p`,
// half-open, so vertices are counted once.
fn winding_at(
    graph: &SpanGraph,
    candidates: &[usize],
    skip: usize,
    p: Point64,
    along: SearchAxis,
) -> [i32; 2] {
    let across = cross_axis(along);
    let origin = p.axis_coord(along);
    let level = p.axis_coord(across);

    let mut wind = [0; 2];
    for &i in candidates {
        if i == skip {
            continue;
        }

        let span = &graph.spans[i];
        let piece = &span.piece;
        let a0 = piece.start.axis_coord(along);
        let a1 = piece.end.axis_coord(along);
        if a0.min(a1) >= origin {
            continue;
        }

        if a0.max(a1) >= origin {
            let curve = &graph.curves[span.curve];
            let t = piece.solve(curve, across, level);
            if piece.point_at(curve, t).axis_coord(along) >= origin {
                continue;
            }
        }

        let v0 = piece.start.axis_coord(across);
        let v1 = piece.end.axis_coord(across);
        let increasing = if v1 > v0 { 1 } else { -1 };
        let sign = match along {
            SearchAxis::X => increasing,
            SearchAxis::Y => -increasing,
        };
        wind = add(wind, span.wind, sign);
    }

    wind
}

struct Ray {
    angle: f64,
    right: [i32; 2],
    left: [i32; 2],
}

/// Checks that angularly adjacent spans agree about the winding between them.
pub fn check(graph: &SpanGraph, sides: &[Sides]) -> Result<(), SimplifyError> {
    let mut rays: Vec<Vec<Ray>> = (0..graph.vertices.len()).map(|_| Vec::new()).collect();
    for (span, s) in graph.spans.iter().zip(sides) {
        let curve = &graph.curves[span.curve];
        rays[span.from].push(Ray {
            angle: curve.tangent(span.piece.t0, span.piece.t1).angle(),
            right: s.right,
            left: s.left,
        });
        rays[span.to].push(Ray {
            angle: curve.tangent(span.piece.t1, span.piece.t0).angle(),
            right: s.left,
            left: s.right,
        });
    }

    for (v, list) in rays.iter_mut().enumerate() {
        list.sort_by(|a, b| a.angle.partial_cmp(&b.angle).unwrap_or(core::cmp::Ordering::Equal));

        let n = list.len();
        let gap = |i: usize| {
            let i = i % n;
            let a = list[i].angle;
            let b = list[(i + 1) % n].angle;
            if i + 1 == n {
                b - a + 2.0 * core::f64::consts::PI
            } else {
                b - a
            }
        };

        for i in 0..n {
            if n > 1 && (gap(i) < MIN_WEDGE || gap(i + n - 1) < MIN_WEDGE || gap(i + 1) < MIN_WEDGE) {
                continue;
            }

            // The wedge after ray `i` is on its right and on the left of the next ray.
            if list[i].right != list[(i + 1) % n].left {
                log::trace!("vertex {} at {:?} has an inconsistent wedge", v, graph.vertices[v]);
                return Err(SimplifyError::WindingInconsistency);
            }
        }
    }

    Ok(())
}

/// Returns spans separating filled and empty areas, oriented with the filled area on the right.
pub fn boundary(
    graph: &SpanGraph,
    sides: &[Sides],
    rule: FillRule,
) -> Result<Vec<BoundaryEdge>, SimplifyError> {
    let mut edges = Vec::new();
    let mut balance = vec![0i32; graph.vertices.len()];
    for (span, s) in graph.spans.iter().zip(sides) {
        let right = rule.is_filled(s.right);
        if right == rule.is_filled(s.left) {
            continue;
        }

        let edge = if right {
            BoundaryEdge {
                curve: span.curve,
                t_start: span.piece.t0,
                t_end: span.piece.t1,
                from: span.from,
                to: span.to,
            }
        } else {
            BoundaryEdge {
                curve: span.curve,
                t_start: span.piece.t1,
                t_end: span.piece.t0,
                from: span.to,
                to: span.from,
            }
        };

        balance[edge.from] += 1;
        balance[edge.to] -= 1;
        edges.push(edge);
    }

    if balance.iter().any(|b| *b != 0) {
        return Err(SimplifyError::WindingInconsistency);
    }

    log::debug!("{} boundary edges out of {} spans", edges.len(), graph.spans.len());
    Ok(edges)
}
