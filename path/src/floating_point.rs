// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

pub use strict_num::FiniteF32;

/// Return the float as a 2s compliment int. Just to be used to compare floats
/// to each other or against positive float-bit-constants (like 0). This does
/// not return the int equivalent of the float, just something cheaper for
/// compares-only.
pub(crate) fn f32_as_2s_compliment(x: f32) -> i32 {
    sign_bit_to_2s_compliment(bytemuck::cast(x))
}

/// Convert a sign-bit int (i.e. float interpreted as int) into a 2s compliement
/// int. This also converts -0 (0x80000000) to 0. Doing this to a float allows
/// it to be compared using normal C operators (<, <=, etc.)
fn sign_bit_to_2s_compliment(mut x: i32) -> i32 {
    if x < 0 {
        x &= 0x7FFFFFFF;
        x = -x;
    }

    x
}

/// Returns the number of representable floats between `a` and `b`.
///
/// Saturates instead of overflowing for values of opposite sign that are far apart.
pub fn f32_ulps_distance(a: f32, b: f32) -> u32 {
    let a_bits = f32_as_2s_compliment(a);
    let b_bits = f32_as_2s_compliment(b);
    (i64::from(a_bits) - i64::from(b_bits)).unsigned_abs().min(u64::from(u32::MAX)) as u32
}

/// Reinterprets raw bits as an `f32`.
///
/// Mirrors `SkBits2Float`, which regression inputs use to spell exact float values.
pub fn f32_from_bits(bits: u32) -> f32 {
    bytemuck::cast(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ulps() {
        assert_eq!(f32_ulps_distance(1.0, 1.0), 0);
        assert_eq!(f32_ulps_distance(0.0, -0.0), 0);
        assert_eq!(f32_ulps_distance(1.0, 1.0 + f32::EPSILON), 1);
        assert!(f32_ulps_distance(-1.0, 1.0) > 1000);
    }

    #[test]
    fn bits() {
        assert_eq!(f32_from_bits(0x42c80000), 100.0);
        assert_eq!(f32_from_bits(0x3f3504f3), 0.70710677);
    }
}
