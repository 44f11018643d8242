// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item extent and buffer configuration.

use core::fmt;

use crate::Scalar;

/// Extents and buffer thresholds for a fixed-extent list.
///
/// All values live in the same 1D coordinate space as the window's scroll
/// offset (typically logical pixels).
///
/// - `item_extent` is the size of every item along the scroll axis.
/// - `leading_extent` is extra space added to the total content extent, for
///   example a header rendered above the list.
/// - `min_buffer` is how much content must remain rendered beyond each edge of
///   the viewport before the rendered range is grown.
/// - `max_buffer` is how much content to render beyond the edge once growth is
///   triggered.
///
/// [`ScrollConfig::new`] does not validate its inputs; the geometry tolerates
/// pathological values by clamping. Use [`ScrollConfig::try_new`] to reject
/// them up front.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollConfig<S: Scalar> {
    /// Extent of a single item.
    pub item_extent: S,
    /// Extra extent added to the total content extent.
    pub leading_extent: S,
    /// Minimum buffer beyond the viewport before more items are rendered.
    pub min_buffer: S,
    /// Buffer rendered beyond the viewport once more items are needed.
    pub max_buffer: S,
}

impl<S: Scalar> ScrollConfig<S> {
    /// Creates a configuration without validating it.
    #[must_use]
    pub fn new(item_extent: S, leading_extent: S, min_buffer: S, max_buffer: S) -> Self {
        Self {
            item_extent,
            leading_extent,
            min_buffer,
            max_buffer,
        }
    }

    /// Creates a configuration, rejecting values the geometry cannot use
    /// meaningfully.
    pub fn try_new(
        item_extent: S,
        leading_extent: S,
        min_buffer: S,
        max_buffer: S,
    ) -> Result<Self, ConfigError> {
        let config = Self::new(item_extent, leading_extent, min_buffer, max_buffer);
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is finite, the item extent is positive, the
    /// leading extent and buffers are non-negative, and
    /// `min_buffer <= max_buffer`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.item_extent,
            self.leading_extent,
            self.min_buffer,
            self.max_buffer,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if !self.item_extent.is_positive_finite() {
            return Err(ConfigError::NonPositiveItemExtent);
        }
        if self.leading_extent < S::zero() {
            return Err(ConfigError::NegativeLeadingExtent);
        }
        if self.min_buffer < S::zero() || self.max_buffer < S::zero() {
            return Err(ConfigError::NegativeBuffer);
        }
        if self.max_buffer < self.min_buffer {
            return Err(ConfigError::InvertedBuffer);
        }
        Ok(())
    }

    /// Total content extent for `len` items: `len * item_extent + leading_extent`.
    #[must_use]
    pub fn total_content_extent(&self, len: usize) -> S {
        S::from_usize(len) * self.item_extent + self.leading_extent
    }

    /// Offset of the leading edge of item `index`: `index * item_extent`.
    ///
    /// The leading extent is not included.
    #[must_use]
    pub fn offset_of_index(&self, index: usize) -> S {
        S::from_usize(index) * self.item_extent
    }
}

/// Reason a [`ScrollConfig`] was rejected by [`ScrollConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// At least one value is NaN or infinite.
    NonFinite,
    /// The item extent is zero or negative.
    NonPositiveItemExtent,
    /// The leading extent is negative.
    NegativeLeadingExtent,
    /// The minimum or maximum buffer is negative.
    NegativeBuffer,
    /// The maximum buffer is smaller than the minimum buffer.
    InvertedBuffer,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NonFinite => "scroll configuration contains a non-finite value",
            Self::NonPositiveItemExtent => "item extent must be greater than zero",
            Self::NegativeLeadingExtent => "leading extent must not be negative",
            Self::NegativeBuffer => "buffer extents must not be negative",
            Self::InvertedBuffer => "max buffer must be at least the min buffer",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ConfigError {}
