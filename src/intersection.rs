// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec;
use alloc::vec::Vec;

use crate::curve::{Curve, Tolerance};
use crate::edge_builder::{Edge, EdgeList};
use crate::path64::Point64;
use crate::SimplifyError;

/// Parameter slack used when intersecting chords.
const CHORD_SLACK: f64 = 1e-9;

/// A parameter range that is too short to be split any further.
const MIN_RANGE: f64 = 1e-14;

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum IntersectionKind {
    /// Edges cross each other.
    Cross,
    /// Edges share a stretch of their length, which starts here.
    CoincidentStart,
    /// Edges share a stretch of their length, which ends here.
    CoincidentEnd,
    /// An end point of one edge lies on the other one.
    TangentTouch,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Intersection {
    pub ta: f64,
    pub tb: f64,
    pub point: Point64,
    pub kind: IntersectionKind,
}

/// A point where an edge has to be split.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Split {
    pub t: f64,
    pub point: Point64,
}

/// Finds all split points of all edges.
///
/// Returns a list of splits per edge, unsorted.
pub fn find(
    list: &EdgeList,
    tolerance: &Tolerance,
    max_subdivisions: usize,
) -> Result<Vec<Vec<Split>>, SimplifyError> {
    let edges = &list.edges;
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|a, b| {
        let a = edges[*a].piece.min().x;
        let b = edges[*b].piece.min().x;
        a.partial_cmp(&b).unwrap_or(core::cmp::Ordering::Equal)
    });

    let mut splits = vec![Vec::new(); edges.len()];
    let mut pairs = 0;
    for (pos, &i) in order.iter().enumerate() {
        let a = &edges[i];
        let a_min = a.piece.min();
        let a_max = a.piece.max();
        let right = a_max.x + tolerance.of(a_max.x);
        for &j in &order[pos + 1..] {
            let b = &edges[j];
            let b_min = b.piece.min();
            if b_min.x > right {
                break;
            }

            let b_max = b.piece.max();
            if b_min.y > a_max.y + tolerance.of(a_max.y) || a_min.y > b_max.y + tolerance.of(b_max.y) {
                continue;
            }

            pairs += 1;
            let found = intersect(
                a,
                &list.curves[a.curve],
                b,
                &list.curves[b.curve],
                tolerance,
                max_subdivisions,
            )?;

            for hit in found {
                log::trace!("edges {} and {}: {:?} at {:?}", i, j, hit.kind, hit.point);
                splits[i].push(Split { t: hit.ta, point: hit.point });
                splits[j].push(Split { t: hit.tb, point: hit.point });
            }
        }
    }

    log::debug!("tested {} edge pairs out of {} edges", pairs, edges.len());
    Ok(splits)
}

/// Intersects two edges.
///
/// Coincident stretches are reported by their ends and suppress the crossing search.
pub fn intersect(
    a: &Edge,
    ca: &Curve,
    b: &Edge,
    cb: &Curve,
    tolerance: &Tolerance,
    max_subdivisions: usize,
) -> Result<Vec<Intersection>, SimplifyError> {
    let mut hits = touches(a, ca, b, cb, tolerance);

    if hits.len() >= 2 && is_coincident(a, ca, b, cb, &hits, tolerance) {
        hits.sort_by(|a, b| a.ta.partial_cmp(&b.ta).unwrap_or(core::cmp::Ordering::Equal));
        for hit in &mut hits {
            hit.kind = IntersectionKind::CoincidentStart;
        }

        if let Some(last) = hits.last_mut() {
            last.kind = IntersectionKind::CoincidentEnd;
        }

        return Ok(hits);
    }

    let crossings = match (ca.is_line(), cb.is_line()) {
        (true, true) => line_line(a, b),
        (true, false) => line_curve(a, b, cb),
        (false, true) => line_curve(b, a, ca)
            .into_iter()
            .map(|hit| Intersection { ta: hit.tb, tb: hit.ta, ..hit })
            .collect(),
        (false, false) => curve_curve(a, ca, b, cb, tolerance, max_subdivisions)?,
    };

    let ends = [a.piece.start, a.piece.end, b.piece.start, b.piece.end];
    for hit in crossings {
        let known = ends
            .iter()
            .chain(hits.iter().map(|h| &h.point))
            .any(|p| tolerance.points_within(*p, hit.point, 2.0));
        if !known {
            hits.push(hit);
        }
    }

    Ok(hits)
}

// Projects end points of each edge onto the other one.
fn touches(a: &Edge, ca: &Curve, b: &Edge, cb: &Curve, tolerance: &Tolerance) -> Vec<Intersection> {
    let mut hits: Vec<Intersection> = Vec::new();

    let mut push = |hit: Intersection| {
        if !hits.iter().any(|h| tolerance.points_near(h.point, hit.point)) {
            hits.push(hit);
        }
    };

    for &(ta, p) in &[(a.piece.t0, a.piece.start), (a.piece.t1, a.piece.end)] {
        if let Some(tb) = b.piece.project(cb, p, tolerance) {
            push(Intersection { ta, tb, point: p, kind: IntersectionKind::TangentTouch });
        }
    }

    for &(tb, p) in &[(b.piece.t0, b.piece.start), (b.piece.t1, b.piece.end)] {
        if let Some(ta) = a.piece.project(ca, p, tolerance) {
            push(Intersection { ta, tb, point: p, kind: IntersectionKind::TangentTouch });
        }
    }

    hits
}

// Checks that the part of `a` between the outermost touches lies on `b`.
fn is_coincident(
    a: &Edge,
    ca: &Curve,
    b: &Edge,
    cb: &Curve,
    hits: &[Intersection],
    tolerance: &Tolerance,
) -> bool {
    let mut lo = f64::MAX;
    let mut hi = f64::MIN;
    for hit in hits {
        lo = lo.min(hit.ta);
        hi = hi.max(hit.ta);
    }

    if !(hi > lo) {
        return false;
    }

    [0.25, 0.5, 0.75].iter().all(|s| {
        let p = a.piece.point_at(ca, lo + (hi - lo) * s);
        b.piece.project(cb, p, tolerance).is_some()
    })
}

/// Intersects two segments, returning parameters on both of them.
fn segment_intersect(
    a0: Point64,
    a1: Point64,
    b0: Point64,
    b1: Point64,
    slack: f64,
) -> Option<(f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let denom = da.cross(db);
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }

    let w = b0 - a0;
    let s = w.cross(db) / denom;
    let u = w.cross(da) / denom;
    let range = -slack..=1.0 + slack;
    if range.contains(&s) && range.contains(&u) {
        Some((s.max(0.0).min(1.0), u.max(0.0).min(1.0)))
    } else {
        None
    }
}

fn line_line(a: &Edge, b: &Edge) -> Vec<Intersection> {
    let pa = &a.piece;
    let pb = &b.piece;
    match segment_intersect(pa.start, pa.end, pb.start, pb.end, 0.0) {
        Some((s, u)) => vec![Intersection {
            ta: pa.t0 + (pa.t1 - pa.t0) * s,
            tb: pb.t0 + (pb.t1 - pb.t0) * u,
            point: pa.start.lerp(pa.end, s),
            kind: IntersectionKind::Cross,
        }],
        None => Vec::new(),
    }
}

// `a` is a line, `b` is a curve.
fn line_curve(a: &Edge, b: &Edge, cb: &Curve) -> Vec<Intersection> {
    let pa = &a.piece;
    let pb = &b.piece;
    let d = pa.end - pa.start;
    let len2 = d.dot(d);
    if len2 == 0.0 {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for t in cb.line_intersect([pa.start, pa.end]) {
        if t < pb.t0 - CHORD_SLACK || t > pb.t1 + CHORD_SLACK {
            continue;
        }

        let t = t.max(pb.t0).min(pb.t1);
        let point = pb.point_at(cb, t);
        let u = (point - pa.start).dot(d) / len2;
        if !(-CHORD_SLACK..=1.0 + CHORD_SLACK).contains(&u) {
            continue;
        }

        let u = u.max(0.0).min(1.0);
        hits.push(Intersection {
            ta: pa.t0 + (pa.t1 - pa.t0) * u,
            tb: t,
            point,
            kind: IntersectionKind::Cross,
        });
    }

    hits
}

#[derive(Copy, Clone, Debug)]
struct Range {
    t0: f64,
    t1: f64,
    start: Point64,
    end: Point64,
}

impl Range {
    fn new(curve: &Curve, t0: f64, t1: f64) -> Self {
        Range {
            t0,
            t1,
            start: curve.point_at_t(t0),
            end: curve.point_at_t(t1),
        }
    }

    fn split(&self, curve: &Curve) -> (Range, Range) {
        let mid_t = (self.t0 + self.t1) * 0.5;
        let mid = curve.point_at_t(mid_t);
        (
            Range { t1: mid_t, end: mid, ..*self },
            Range { t0: mid_t, start: mid, ..*self },
        )
    }

    fn is_flat(&self, curve: &Curve, tolerance: &Tolerance) -> bool {
        self.t1 - self.t0 < MIN_RANGE || curve.is_flat(self.t0, self.t1, tolerance.of_point(self.start))
    }

    // Both edges are monotonic, so end points give the bounding box.
    fn overlaps(&self, other: &Range, tolerance: &Tolerance) -> bool {
        let overlap = |a0: f64, a1: f64, b0: f64, b1: f64| {
            let (a_lo, a_hi) = if a0 <= a1 { (a0, a1) } else { (a1, a0) };
            let (b_lo, b_hi) = if b0 <= b1 { (b0, b1) } else { (b1, b0) };
            let slack = tolerance.of(a_hi.abs().max(b_hi.abs()).max(a_lo.abs()).max(b_lo.abs()));
            a_lo <= b_hi + slack && b_lo <= a_hi + slack
        };

        overlap(self.start.x, self.end.x, other.start.x, other.end.x)
            && overlap(self.start.y, self.end.y, other.start.y, other.end.y)
    }
}

// Recursive subdivision until both parts are flat, then chord intersection.
fn curve_curve(
    a: &Edge,
    ca: &Curve,
    b: &Edge,
    cb: &Curve,
    tolerance: &Tolerance,
    max_subdivisions: usize,
) -> Result<Vec<Intersection>, SimplifyError> {
    let mut hits: Vec<Intersection> = Vec::new();
    let mut stack = vec![(
        Range::new(ca, a.piece.t0, a.piece.t1),
        Range::new(cb, b.piece.t0, b.piece.t1),
    )];

    let mut steps = 0;
    while let Some((ra, rb)) = stack.pop() {
        steps += 1;
        if steps > max_subdivisions {
            log::trace!("curve intersection exceeded {} steps", max_subdivisions);
            return Err(SimplifyError::IntersectionFailure);
        }

        if !ra.overlaps(&rb, tolerance) {
            continue;
        }

        let flat_a = ra.is_flat(ca, tolerance);
        let flat_b = rb.is_flat(cb, tolerance);
        if flat_a && flat_b {
            if let Some((s, u)) = segment_intersect(ra.start, ra.end, rb.start, rb.end, CHORD_SLACK) {
                let ta = ra.t0 + (ra.t1 - ra.t0) * s;
                let tb = rb.t0 + (rb.t1 - rb.t0) * u;
                let pa = ca.point_at_t(ta);
                let pb = cb.point_at_t(tb);
                let point = pa.lerp(pb, 0.5);
                if !hits.iter().any(|h| tolerance.points_within(h.point, point, 2.0)) {
                    hits.push(Intersection { ta, tb, point, kind: IntersectionKind::Cross });
                }
            }

            continue;
        }

        match (flat_a, flat_b) {
            (false, false) => {
                let (a1, a2) = ra.split(ca);
                let (b1, b2) = rb.split(cb);
                stack.push((a1, b1));
                stack.push((a1, b2));
                stack.push((a2, b1));
                stack.push((a2, b2));
            }
            (false, true) => {
                let (a1, a2) = ra.split(ca);
                stack.push((a1, rb));
                stack.push((a2, rb));
            }
            _ => {
                let (b1, b2) = rb.split(cb);
                stack.push((ra, b1));
                stack.push((ra, b2));
            }
        }
    }

    Ok(hits)
}
