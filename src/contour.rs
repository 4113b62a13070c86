// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec;
use alloc::vec::Vec;

use tiny_pathops_path::{FillType, Path, PathBuilder};

use crate::curve::{Curve, Tolerance};
use crate::path64::Point64;
use crate::winding::BoundaryEdge;
use crate::SimplifyError;

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use tiny_pathops_path::NoStdFloat;

const TWO_PI: f64 = 2.0 * core::f64::consts::PI;

/// Turns closer than this are resolved by chords.
const TURN_EPSILON: f64 = 1e-9;

/// Links boundary edges into closed contours and builds the resulting path.
pub fn assemble(
    curves: &[Curve],
    vertices: &[Point64],
    edges: &[BoundaryEdge],
    tolerance: &Tolerance,
    fill_type: FillType,
) -> Result<Path, SimplifyError> {
    let contours = link(curves, vertices, edges)?;
    log::debug!("{} contours", contours.len());

    let mut pb = PathBuilder::with_capacity(edges.len() + contours.len() * 2, edges.len() * 3);
    for contour in &contours {
        let runs = coalesce(curves, vertices, edges, contour, tolerance);
        emit(&mut pb, curves, vertices, &runs, tolerance);
    }

    pb.set_fill_type(fill_type);
    Ok(pb.finish().unwrap_or_else(|| Path::empty(fill_type)))
}

// Returns contours as lists of edge indices.
fn link(
    curves: &[Curve],
    vertices: &[Point64],
    edges: &[BoundaryEdge],
) -> Result<Vec<Vec<usize>>, SimplifyError> {
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); vertices.len()];
    for (i, edge) in edges.iter().enumerate() {
        outgoing[edge.from].push(i);
    }

    // Top-most, then left-most start vertex first.
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|a, b| {
        let pa = vertices[edges[*a].from];
        let pb = vertices[edges[*b].from];
        (pa.y, pa.x)
            .partial_cmp(&(pb.y, pb.x))
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    let mut used = vec![false; edges.len()];
    let mut contours = Vec::new();
    for start in order {
        if used[start] {
            continue;
        }

        used[start] = true;
        let mut contour = vec![start];
        let mut current = start;
        while edges[current].to != edges[start].from {
            let next = next_edge(curves, vertices, edges, &outgoing, &used, current)
                .ok_or(SimplifyError::WindingInconsistency)?;

            used[next] = true;
            contour.push(next);
            current = next;

            if contour.len() > edges.len() {
                return Err(SimplifyError::WindingInconsistency);
            }
        }

        contours.push(contour);
    }

    Ok(contours)
}

// Picks the outgoing edge with the smallest turn from the reversed incoming
// direction, sweeping through the filled side.
fn next_edge(
    curves: &[Curve],
    vertices: &[Point64],
    edges: &[BoundaryEdge],
    outgoing: &[Vec<usize>],
    used: &[bool],
    current: usize,
) -> Option<usize> {
    let incoming = &edges[current];
    let back = curves[incoming.curve]
        .tangent(incoming.t_end, incoming.t_start)
        .angle();
    let back_chord = chord_angle(curves, vertices, incoming, true);

    let mut best: Option<(usize, f64, f64)> = None;
    for &i in &outgoing[incoming.to] {
        if used[i] {
            continue;
        }

        let edge = &edges[i];
        let turn = normalize(back - curves[edge.curve].tangent(edge.t_start, edge.t_end).angle());
        let chord_turn = normalize(back_chord - chord_angle(curves, vertices, edge, false));

        let better = match best {
            None => true,
            Some((_, best_turn, best_chord)) => {
                if (turn - best_turn).abs() < TURN_EPSILON {
                    chord_turn < best_chord
                } else {
                    turn < best_turn
                }
            }
        };

        if better {
            best = Some((i, turn, chord_turn));
        }
    }

    best.map(|(i, _, _)| i)
}

// Direction from the edge's end point (or start point) to its middle.
fn chord_angle(curves: &[Curve], vertices: &[Point64], edge: &BoundaryEdge, at_end: bool) -> f64 {
    let mid = curves[edge.curve].point_at_t((edge.t_start + edge.t_end) * 0.5);
    let origin = if at_end {
        vertices[edge.to]
    } else {
        vertices[edge.from]
    };

    (mid - origin).angle()
}

// Maps an angle into (0, 2pi].
fn normalize(mut angle: f64) -> f64 {
    while angle <= 0.0 {
        angle += TWO_PI;
    }

    while angle > TWO_PI {
        angle -= TWO_PI;
    }

    angle
}

/// A part of a contour emitted as a single verb.
#[derive(Copy, Clone, PartialEq, Debug)]
struct Run {
    curve: usize,
    t_start: f64,
    t_end: f64,
    from: usize,
    to: usize,
}

impl Run {
    fn new(edge: &BoundaryEdge) -> Self {
        Run {
            curve: edge.curve,
            t_start: edge.t_start,
            t_end: edge.t_end,
            from: edge.from,
            to: edge.to,
        }
    }
}

// Checks that `next` continues `run`: either the same curve with contiguous
// parameters in the same direction, or a collinear line.
fn continues(
    curves: &[Curve],
    vertices: &[Point64],
    run: &Run,
    next: &BoundaryEdge,
    tolerance: &Tolerance,
) -> bool {
    if run.curve == next.curve {
        let forward = run.t_end > run.t_start;
        if run.t_end == next.t_start && forward == (next.t_end > next.t_start) {
            return true;
        }
    }

    if !(curves[run.curve].is_line() && curves[next.curve].is_line()) {
        return false;
    }

    let start = vertices[run.from];
    let joint = vertices[run.to];
    let end = vertices[next.to];
    let chord = end - start;
    let len = chord.length();
    if len == 0.0 {
        return false;
    }

    let first = joint - start;
    let second = end - joint;
    first.dot(second) > 0.0 && (chord.cross(first) / len).abs() <= tolerance.of_point(joint)
}

fn coalesce(
    curves: &[Curve],
    vertices: &[Point64],
    edges: &[BoundaryEdge],
    contour: &[usize],
    tolerance: &Tolerance,
) -> Vec<Run> {
    let n = contour.len();

    // Start at an edge that doesn't continue the previous one,
    // so a single curve is never emitted as two verbs.
    let first = (0..n)
        .find(|&i| {
            let prev = Run::new(&edges[contour[(i + n - 1) % n]]);
            !continues(curves, vertices, &prev, &edges[contour[i]], tolerance)
        })
        .unwrap_or(0);

    let mut runs: Vec<Run> = Vec::with_capacity(n);
    for k in 0..n {
        let edge = &edges[contour[(first + k) % n]];
        if let Some(run) = runs.last_mut() {
            if continues(curves, vertices, run, edge, tolerance) {
                run.t_end = edge.t_end;
                run.to = edge.to;
                continue;
            }
        }

        runs.push(Run::new(edge));
    }

    runs
}

fn emit(
    pb: &mut PathBuilder,
    curves: &[Curve],
    vertices: &[Point64],
    runs: &[Run],
    tolerance: &Tolerance,
) {
    let start = match runs.first() {
        Some(run) => vertices[run.from].to_point(),
        None => return,
    };

    pb.move_to(start.x, start.y);
    for (i, run) in runs.iter().enumerate() {
        let curve = &curves[run.curve];
        let end = vertices[run.to].to_point();

        // Flat parts are read back as lines, so they are written as lines.
        let flatness = tolerance
            .of_point(vertices[run.from])
            .max(tolerance.of_point(vertices[run.to]));
        let part = if curve.is_flat(run.t_start, run.t_end, flatness) {
            Curve::Line([vertices[run.from], vertices[run.to]])
        } else {
            curve.sub_divide(run.t_start, run.t_end)
        };

        match part {
            // The closing line is implied.
            Curve::Line(_) if i + 1 == runs.len() => {}
            Curve::Line(_) => pb.line_to(end.x, end.y),
            Curve::Quad(quad) => {
                let p1 = quad.points[1].to_point();
                pb.quad_to(p1.x, p1.y, end.x, end.y);
            }
            Curve::Conic(conic) => {
                let p1 = conic.points[1].to_point();
                pb.conic_to(p1.x, p1.y, end.x, end.y, conic.weight as f32);
            }
            Curve::Cubic(cubic) => {
                let p1 = cubic.points[1].to_point();
                let p2 = cubic.points[2].to_point();
                pb.cubic_to(p1.x, p1.y, p2.x, p2.y, end.x, end.y);
            }
        }
    }

    pb.close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path64::quad64::Quad64;
    use tiny_pathops_path::{PathSegment, Point};

    fn pt(x: f64, y: f64) -> Point64 {
        Point64::from_xy(x, y)
    }

    // Line edges along a closed polygon over `vertices[indices]`.
    fn polygon(curves: &mut Vec<Curve>, vertices: &[Point64], indices: &[usize]) -> Vec<BoundaryEdge> {
        let mut edges = Vec::new();
        for i in 0..indices.len() {
            let from = indices[i];
            let to = indices[(i + 1) % indices.len()];
            edges.push(BoundaryEdge {
                curve: curves.len(),
                t_start: 0.0,
                t_end: 1.0,
                from,
                to,
            });
            curves.push(Curve::Line([vertices[from], vertices[to]]));
        }

        edges
    }

    fn run(curves: &[Curve], vertices: &[Point64], edges: &[BoundaryEdge]) -> Path {
        assemble(curves, vertices, edges, &Tolerance::new(1.0), FillType::EvenOdd).unwrap()
    }

    #[test]
    fn collinear_lines_are_merged() {
        let vertices = vec![pt(0.0, 0.0), pt(5.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)];
        let mut curves = Vec::new();
        let edges = polygon(&mut curves, &vertices, &[1, 2, 3, 4, 0]);
        let path = run(&curves, &vertices, &edges);

        let segments: Vec<_> = path.segments().collect();
        assert_eq!(
            segments,
            vec![
                PathSegment::MoveTo(Point::from_xy(0.0, 0.0)),
                PathSegment::LineTo(Point::from_xy(10.0, 0.0)),
                PathSegment::LineTo(Point::from_xy(10.0, 10.0)),
                PathSegment::LineTo(Point::from_xy(0.0, 10.0)),
                PathSegment::Close,
            ]
        );
        assert_eq!(path.fill_type(), FillType::EvenOdd);
    }

    #[test]
    fn touching_squares() {
        let vertices = vec![
            pt(0.0, 0.0),
            pt(10.0, 0.0),
            pt(10.0, 10.0),
            pt(0.0, 10.0),
            pt(20.0, 10.0),
            pt(20.0, 20.0),
            pt(10.0, 20.0),
        ];
        let mut curves = Vec::new();
        let mut edges = polygon(&mut curves, &vertices, &[0, 1, 2, 3]);
        edges.extend(polygon(&mut curves, &vertices, &[2, 4, 5, 6]));

        let contours = link(&curves, &vertices, &edges).unwrap();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0], vec![0, 1, 2, 3]);
        assert_eq!(contours[1].len(), 4);
    }

    #[test]
    fn split_curve_is_joined() {
        let quad = Curve::Quad(Quad64::new([pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)]));
        let vertices = vec![pt(0.0, 0.0), quad.point_at_t(0.5), pt(10.0, 10.0)];
        let curves = vec![quad, Curve::Line([vertices[2], vertices[0]])];
        let edges = vec![
            BoundaryEdge { curve: 0, t_start: 0.0, t_end: 0.5, from: 0, to: 1 },
            BoundaryEdge { curve: 0, t_start: 0.5, t_end: 1.0, from: 1, to: 2 },
            BoundaryEdge { curve: 1, t_start: 0.0, t_end: 1.0, from: 2, to: 0 },
        ];

        let path = run(&curves, &vertices, &edges);
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[1],
            PathSegment::QuadTo(Point::from_xy(10.0, 0.0), Point::from_xy(10.0, 10.0))
        );
    }

    #[test]
    fn flat_curve_part_is_a_line() {
        let quad = Curve::Quad(Quad64::new([pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)]));
        let vertices = vec![pt(0.0, 0.0), quad.point_at_t(1e-4), pt(0.0, 10.0)];
        let curves = vec![
            quad,
            Curve::Line([vertices[1], vertices[2]]),
            Curve::Line([vertices[2], vertices[0]]),
        ];
        let edges = vec![
            BoundaryEdge { curve: 0, t_start: 0.0, t_end: 1e-4, from: 0, to: 1 },
            BoundaryEdge { curve: 1, t_start: 0.0, t_end: 1.0, from: 1, to: 2 },
            BoundaryEdge { curve: 2, t_start: 0.0, t_end: 1.0, from: 2, to: 0 },
        ];

        let path = run(&curves, &vertices, &edges);
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[1], PathSegment::LineTo(vertices[1].to_point()));
        assert_eq!(segments[2], PathSegment::LineTo(Point::from_xy(0.0, 10.0)));
    }

    #[test]
    fn dead_end() {
        let vertices = vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)];
        let curves = vec![
            Curve::Line([vertices[0], vertices[1]]),
            Curve::Line([vertices[1], vertices[2]]),
        ];
        let edges = vec![
            BoundaryEdge { curve: 0, t_start: 0.0, t_end: 1.0, from: 0, to: 1 },
            BoundaryEdge { curve: 1, t_start: 0.0, t_end: 1.0, from: 1, to: 2 },
        ];

        let res = assemble(&curves, &vertices, &edges, &Tolerance::new(1.0), FillType::EvenOdd);
        assert_eq!(res.err(), Some(SimplifyError::WindingInconsistency));
    }

    #[test]
    fn empty() {
        let path = run(&[], &[], &[]);
        assert!(path.is_empty());
    }
}
