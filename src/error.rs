// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// A path operation error.
///
/// No partial output is produced on failure.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimplifyError {
    /// Curve intersection did not converge within the subdivision budget.
    IntersectionFailure,
    /// Computed winding numbers contradict each other.
    ///
    /// Happens when numerical errors break the edge graph.
    WindingInconsistency,
    /// The input produced more edges than allowed.
    TooComplex,
    /// The input has a NaN or infinite coordinate or conic weight.
    NonFiniteInput,
}

impl core::fmt::Display for SimplifyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SimplifyError::IntersectionFailure => {
                write!(f, "curve intersection did not converge")
            }
            SimplifyError::WindingInconsistency => {
                write!(f, "inconsistent winding numbers")
            }
            SimplifyError::TooComplex => {
                write!(f, "path has too many edges")
            }
            SimplifyError::NonFiniteInput => {
                write!(f, "path has non-finite coordinates")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimplifyError {}
