// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::curve::{Curve, Piece, Tolerance};
use crate::edge_builder::EdgeList;
use crate::intersection::Split;
use crate::path64::Point64;
use crate::SimplifyError;

/// An edge part between two vertices, which doesn't cross any other span.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Span {
    pub curve: usize,
    pub piece: Piece,
    pub from: usize,
    pub to: usize,
    /// Winding contribution per operand, in the `from` to `to` direction.
    pub wind: [i32; 2],
}

/// A planar graph of spans.
#[derive(Clone, Debug)]
pub struct SpanGraph {
    pub curves: Vec<Curve>,
    pub vertices: Vec<Point64>,
    pub spans: Vec<Span>,
}

#[derive(Copy, Clone, Debug)]
struct Node {
    point: Point64,
    exact: bool,
}

struct SubEdge {
    edge: usize,
    t0: f64,
    t1: f64,
    nodes: [usize; 2],
}

/// Splits edges at their intersections, merges nearby end points
/// and folds coincident spans into one.
pub fn build(
    list: EdgeList,
    splits: Vec<Vec<Split>>,
    tolerance: &Tolerance,
    max_edges: usize,
) -> Result<SpanGraph, SimplifyError> {
    let mut nodes: Vec<Node> = Vec::with_capacity(list.edges.len() * 2);
    let mut sub_edges: Vec<SubEdge> = Vec::with_capacity(list.edges.len());

    for (i, (edge, mut edge_splits)) in list.edges.iter().zip(splits).enumerate() {
        let piece = &edge.piece;
        edge_splits.retain(|s| s.t > piece.t0 && s.t < piece.t1);
        edge_splits.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(core::cmp::Ordering::Equal));

        let mut t0 = piece.t0;
        let mut start = nodes.len();
        nodes.push(Node { point: piece.start, exact: edge.exact[0] });
        for split in edge_splits {
            if tolerance.points_near(split.point, nodes[start].point)
                || tolerance.points_near(split.point, piece.end)
            {
                continue;
            }

            let end = nodes.len();
            nodes.push(Node { point: split.point, exact: false });
            sub_edges.push(SubEdge { edge: i, t0, t1: split.t, nodes: [start, end] });
            t0 = split.t;
            start = end;
        }

        let end = nodes.len();
        nodes.push(Node { point: piece.end, exact: edge.exact[1] });
        sub_edges.push(SubEdge { edge: i, t0, t1: piece.t1, nodes: [start, end] });

        if sub_edges.len() > max_edges {
            return Err(SimplifyError::TooComplex);
        }
    }

    let (vertices, node_to_vertex) = merge_nodes(&nodes, tolerance);

    let mut spans = Vec::with_capacity(sub_edges.len());
    for sub in &sub_edges {
        let from = node_to_vertex[sub.nodes[0]];
        let to = node_to_vertex[sub.nodes[1]];
        if from == to {
            continue;
        }

        let edge = &list.edges[sub.edge];
        spans.push(Span {
            curve: edge.curve,
            piece: Piece {
                t0: sub.t0,
                t1: sub.t1,
                start: vertices[from],
                end: vertices[to],
            },
            from,
            to,
            wind: edge.wind,
        });
    }

    let count = spans.len();
    let spans = fold_coincident(spans, &list.curves, tolerance);
    log::debug!(
        "{} vertices, {} spans, {} after folding",
        vertices.len(),
        count,
        spans.len()
    );

    Ok(SpanGraph {
        curves: list.curves,
        vertices,
        spans,
    })
}

// Clusters nodes that are within tolerance of each other.
// Returns vertices and a node to vertex map.
fn merge_nodes(nodes: &[Node], tolerance: &Tolerance) -> (Vec<Point64>, Vec<usize>) {
    let mut parents: Vec<usize> = (0..nodes.len()).collect();

    fn root(parents: &mut [usize], mut i: usize) -> usize {
        while parents[i] != i {
            parents[i] = parents[parents[i]];
            i = parents[i];
        }

        i
    }

    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|a, b| {
        nodes[*a]
            .point
            .x
            .partial_cmp(&nodes[*b].point.x)
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    for (pos, &i) in order.iter().enumerate() {
        let p = nodes[i].point;
        for &j in &order[pos + 1..] {
            let q = nodes[j].point;
            if q.x - p.x > tolerance.of(p.x.abs().max(q.x.abs())) * 2.0 {
                break;
            }

            if tolerance.points_within(p, q, 2.0) {
                let ri = root(&mut parents, i);
                let rj = root(&mut parents, j);
                if ri != rj {
                    // Keep the smallest index as a root, so clusters are stable.
                    let (lo, hi) = if ri < rj { (ri, rj) } else { (rj, ri) };
                    parents[hi] = lo;
                }
            }
        }
    }

    // Every cluster is represented by its first exact point, if any.
    let mut representative: Vec<Option<usize>> = alloc::vec![None; nodes.len()];
    for i in 0..nodes.len() {
        let r = root(&mut parents, i);
        let better = match representative[r] {
            None => true,
            Some(cur) => !nodes[cur].exact && nodes[i].exact,
        };

        if better {
            representative[r] = Some(i);
        }
    }

    let mut vertices = Vec::new();
    let mut root_to_vertex: Vec<Option<usize>> = alloc::vec![None; nodes.len()];
    let mut node_to_vertex = Vec::with_capacity(nodes.len());
    for i in 0..nodes.len() {
        let r = root(&mut parents, i);
        let v = match root_to_vertex[r] {
            Some(v) => v,
            None => {
                let point = representative[r].map_or(nodes[r].point, |n| nodes[n].point);
                vertices.push(point);
                root_to_vertex[r] = Some(vertices.len() - 1);
                vertices.len() - 1
            }
        };

        node_to_vertex.push(v);
    }

    (vertices, node_to_vertex)
}

// Spans between the same vertices and along the same locus become one span
// carrying the sum of their windings.
fn fold_coincident(spans: Vec<Span>, curves: &[Curve], tolerance: &Tolerance) -> Vec<Span> {
    let mut groups: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
    let mut folded: Vec<Span> = Vec::with_capacity(spans.len());

    for span in spans {
        let key = (span.from.min(span.to), span.from.max(span.to));
        let group = groups.entry(key).or_default();

        let same = group
            .iter()
            .copied()
            .find(|&r| same_locus(&span, &folded[r], curves, tolerance));

        match same {
            Some(r) => {
                let rep = &mut folded[r];
                let sign = if rep.from == span.from { 1 } else { -1 };
                rep.wind[0] += sign * span.wind[0];
                rep.wind[1] += sign * span.wind[1];
            }
            None => {
                group.push(folded.len());
                folded.push(span);
            }
        }
    }

    folded.retain(|s| s.wind != [0, 0]);
    folded
}

fn same_locus(a: &Span, b: &Span, curves: &[Curve], tolerance: &Tolerance) -> bool {
    let ca = &curves[a.curve];
    let cb = &curves[b.curve];
    if ca.is_line() && cb.is_line() {
        return true;
    }

    let mid = ca.point_at_t(a.piece.mid_t());
    b.piece.project(cb, mid, tolerance).is_some()
}
