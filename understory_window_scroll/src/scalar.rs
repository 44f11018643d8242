// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for extents, offsets, and scroll positions.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.
//! Rounding goes through `libm` so the crate stays `no_std`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for extents, offsets, and scroll positions.
///
/// This is currently implemented for `f32` and `f64`. The trait is deliberately
/// minimal and geared toward floating-point pixel coordinates.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Returns `true` if the value is negative, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Largest integral value less than or equal to `self`.
    fn floor(self) -> Self;

    /// Smallest integral value greater than or equal to `self`.
    fn ceil(self) -> Self;

    /// Converts an integral value to an index.
    ///
    /// Negative values and NaN become `0`; values beyond `usize::MAX`
    /// saturate. Callers are expected to round first.
    fn to_index(self) -> usize;

    /// Clamps negative values to zero.
    fn clamp_non_negative(self) -> Self {
        if self.is_sign_negative() {
            Self::zero()
        } else {
            self
        }
    }

    /// Returns `true` if the value is finite and strictly greater than zero.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }

    /// Floors the value and converts it to an index, saturating at `0`.
    fn floor_to_index(self) -> usize {
        self.floor().to_index()
    }

    /// Ceils the value and converts it to an index, saturating at `0`.
    fn ceil_to_index(self) -> usize {
        self.ceil().to_index()
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor(self) -> Self {
        libm::floorf(self)
    }

    fn ceil(self) -> Self {
        libm::ceilf(self)
    }

    fn to_index(self) -> usize {
        if self > 0.0 {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Float to int casts saturate; callers clamp to the data length afterwards"
            )]
            {
                self as usize
            }
        } else {
            0
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn to_index(self) -> usize {
        if self > 0.0 {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Float to int casts saturate; callers clamp to the data length afterwards"
            )]
            {
                self as usize
            }
        } else {
            0
        }
    }
}
