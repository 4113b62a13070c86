// Copyright 2012 Google Inc.
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

use tiny_pathops_path::{FillType, Path};

use crate::{Simplifier, SimplifyError};

/// A Boolean operation on two paths.
///
/// The first path is the one the operation is applied to,
/// the second one is the operand.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PathOp {
    /// Subtracts the second path from the first one.
    Difference,
    /// Keeps the area covered by both paths.
    Intersect,
    /// Keeps the area covered by either path.
    Union,
    /// Keeps the area covered by exactly one of the paths.
    Xor,
    /// Subtracts the first path from the second one.
    ReverseDifference,
}

impl PathOp {
    /// Applies the operation to "inside" flags of both paths.
    pub fn apply(self, one: bool, two: bool) -> bool {
        match self {
            PathOp::Difference => one && !two,
            PathOp::Intersect => one && two,
            PathOp::Union => one || two,
            PathOp::Xor => one != two,
            PathOp::ReverseDifference => !one && two,
        }
    }
}

/// Applies a Boolean operation to two paths, using default options.
///
/// See [`Simplifier::op`] for details.
pub fn op(one: &Path, two: &Path, op: PathOp) -> Result<Path, SimplifyError> {
    Simplifier::default().op(one, two, op)
}

/// Applies a sequence of Boolean operations.
///
/// Operations are applied left to right, starting from an empty path.
/// The first one is usually [`PathOp::Union`].
#[derive(Clone, Default, Debug)]
pub struct OpBuilder {
    simplifier: Simplifier,
    ops: Vec<(Path, PathOp)>,
}

impl OpBuilder {
    /// Creates a new builder with default options.
    pub fn new() -> Self {
        OpBuilder::default()
    }

    /// Creates a new builder that uses the provided simplifier.
    pub fn with_simplifier(simplifier: Simplifier) -> Self {
        OpBuilder {
            simplifier,
            ops: Vec::new(),
        }
    }

    /// Adds a path and the operation to apply it with.
    pub fn add(&mut self, path: Path, op: PathOp) {
        self.ops.push((path, op));
    }

    /// Returns the number of added paths.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Checks that no paths were added.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Applies all operations.
    ///
    /// An empty builder produces an empty path.
    pub fn resolve(self) -> Result<Path, SimplifyError> {
        let mut result = Path::empty(FillType::Winding);
        for (path, op) in &self.ops {
            result = self.simplifier.op(&result, path, *op)?;
        }

        Ok(result)
    }
}
