// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
`tiny-pathops` is a port of [Skia](https://skia.org/)'s path simplification
and Boolean operations to Rust.

`simplify` turns a path with self-intersections and overlapping contours
into an equivalent one without them. `op` combines two paths.

```
use tiny_pathops::*;

let mut pb = PathBuilder::new();
pb.push_rect(0.0, 0.0, 12.0, 12.0, PathDirection::CW);
pb.push_rect(4.0, 0.0, 13.0, 13.0, PathDirection::CCW);
let path = pb.finish().unwrap();

let simple = simplify(&path).unwrap();
assert_eq!(simple.fill_type(), FillType::EvenOdd);
```
*/

#![no_std]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::approx_constant)]
#![allow(clippy::clone_on_copy)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::float_cmp)]
#![allow(clippy::identity_op)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::too_many_arguments)]

#[cfg(not(any(feature = "std", feature = "no-std-float")))]
compile_error!("You have to activate either the `std` or the `no-std-float` feature.");

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod bounds;
mod contour;
mod curve;
mod edge_builder;
mod error;
mod intersection;
mod op;
mod path64;
mod simplify;
mod spans;
mod winding;

pub use tiny_pathops_path::*;

pub use bounds::tight_bounds;
pub use error::SimplifyError;
pub use op::{op, OpBuilder, PathOp};
pub use simplify::{simplify, Simplifier, SimplifyOptions};
