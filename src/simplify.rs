// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_pathops_path::{FillType, Path};

use crate::contour;
use crate::curve::Tolerance;
use crate::edge_builder::EdgeBuilder;
use crate::intersection;
use crate::op::PathOp;
use crate::spans;
use crate::winding::{self, FillRule};
use crate::SimplifyError;

/// Limits and precision of path operations.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SimplifyOptions {
    /// The maximum number of edges after splitting at intersections.
    ///
    /// Default: 100_000
    pub max_edges: usize,

    /// The maximum number of subdivision steps when intersecting two curves.
    ///
    /// Default: 65536
    pub max_subdivisions: usize,

    /// A multiplier for the distance at which points are treated as equal.
    ///
    /// The distance itself depends on coordinates' magnitude.
    ///
    /// Default: 1.0
    pub tolerance_scale: f64,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        SimplifyOptions {
            max_edges: 100_000,
            max_subdivisions: 1 << 16,
            tolerance_scale: 1.0,
        }
    }
}

/// Runs path operations with the given options.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Simplifier {
    options: SimplifyOptions,
}

impl Simplifier {
    /// Creates a new simplifier.
    pub fn new(options: SimplifyOptions) -> Self {
        Simplifier { options }
    }

    /// Returns simplifier's options.
    pub fn options(&self) -> &SimplifyOptions {
        &self.options
    }

    /// Removes self-intersections and overlaps from a path.
    ///
    /// The result covers the same area as the input, using the input's fill type.
    /// It has an even-odd fill type, or an inverse even-odd one when the input is inverse.
    ///
    /// Degenerate input produces an empty path.
    pub fn simplify(&self, path: &Path) -> Result<Path, SimplifyError> {
        let fill_type = if path.fill_type().is_inverse() {
            FillType::InverseEvenOdd
        } else {
            FillType::EvenOdd
        };

        self.run(&[path], FillRule::Single(path.fill_type()), fill_type)
            .map_err(|e| {
                log::warn!("Failed to simplify a path: {}.", e);
                e
            })
    }

    /// Applies a Boolean operation to two paths.
    ///
    /// The result has an even-odd fill type, which is inverse when the operator
    /// applied to the operands' inverse flags is true.
    pub fn op(&self, one: &Path, two: &Path, op: PathOp) -> Result<Path, SimplifyError> {
        let inverse = op.apply(one.fill_type().is_inverse(), two.fill_type().is_inverse());
        let fill_type = if inverse {
            FillType::InverseEvenOdd
        } else {
            FillType::EvenOdd
        };

        let rule = FillRule::Binary {
            op,
            one: one.fill_type(),
            two: two.fill_type(),
        };

        self.run(&[one, two], rule, fill_type).map_err(|e| {
            log::warn!("Failed to apply {:?}: {}.", op, e);
            e
        })
    }

    fn run(&self, paths: &[&Path], rule: FillRule, fill_type: FillType) -> Result<Path, SimplifyError> {
        let tolerance = Tolerance::new(self.options.tolerance_scale);

        let mut builder = EdgeBuilder::new(tolerance, self.options.max_edges);
        for (operand, path) in paths.iter().enumerate() {
            builder.push_path(path, operand)?;
        }

        let list = builder.finish();
        log::debug!("{} edges from {} curves", list.edges.len(), list.curves.len());
        if list.edges.is_empty() {
            return Ok(Path::empty(fill_type));
        }

        let splits = intersection::find(&list, &tolerance, self.options.max_subdivisions)?;
        let graph = spans::build(list, splits, &tolerance, self.options.max_edges)?;

        let sides = winding::assign(&graph);
        winding::check(&graph, &sides)?;
        let edges = winding::boundary(&graph, &sides, rule)?;

        contour::assemble(&graph.curves, &graph.vertices, &edges, &tolerance, fill_type)
    }
}

/// Removes self-intersections and overlaps from a path, using default options.
///
/// See [`Simplifier::simplify`] for details.
pub fn simplify(path: &Path) -> Result<Path, SimplifyError> {
    Simplifier::default().simplify(path)
}
