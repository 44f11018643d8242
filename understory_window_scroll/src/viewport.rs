// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface a [`crate::WindowScrollStrategy`] drives.

use alloc::vec::Vec;

use crate::{RenderedRange, Scalar};

/// How a programmatic scroll should be animated by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Let the host pick (typically whatever its scroll container defaults to).
    #[default]
    Auto,
    /// Jump to the target immediately.
    Instant,
    /// Animate towards the target.
    Smooth,
}

/// A virtual scroll viewport that materializes a range of items.
///
/// The viewport is a sink: it reports how many items exist and applies what
/// the strategy computes, but the strategy owns the committed range.
pub trait VirtualScrollViewport {
    /// Scalar type for extents and offsets.
    type Scalar: Scalar;

    /// Number of items in the list.
    fn data_len(&self) -> usize;

    /// Range currently materialized by the viewport.
    fn rendered_range(&self) -> RenderedRange;

    /// Sets the extent of the spacer that makes the content scrollable.
    fn set_total_content_extent(&mut self, extent: Self::Scalar);

    /// Materializes `range`.
    fn set_rendered_range(&mut self, range: RenderedRange);

    /// Positions the first rendered item `offset` from the content origin.
    fn set_rendered_content_offset(&mut self, offset: Self::Scalar);

    /// Requests that the host scroll to `offset`.
    fn scroll_to_offset(&mut self, offset: Self::Scalar, behavior: ScrollBehavior);
}

/// An in-memory [`VirtualScrollViewport`] that records what it is told.
///
/// Useful for headless hosts, simulations, and tests. Scroll requests are
/// queued rather than applied, since the window owns the scroll position.
#[derive(Clone, Debug)]
pub struct HeadlessViewport<S: Scalar> {
    len: usize,
    rendered_range: RenderedRange,
    content_offset: S,
    total_content_extent: S,
    scroll_requests: Vec<(S, ScrollBehavior)>,
}

impl<S: Scalar> HeadlessViewport<S> {
    /// Creates a viewport over `len` items with nothing rendered.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            rendered_range: RenderedRange::EMPTY,
            content_offset: S::zero(),
            total_content_extent: S::zero(),
            scroll_requests: Vec::new(),
        }
    }

    /// Changes the number of items.
    ///
    /// The owning strategy must be told via
    /// [`crate::WindowScrollStrategy::on_data_length_changed`].
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Last content offset applied.
    #[must_use]
    pub fn content_offset(&self) -> S {
        self.content_offset
    }

    /// Last total content extent applied.
    #[must_use]
    pub fn total_content_extent(&self) -> S {
        self.total_content_extent
    }

    /// Scroll requests received so far, oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> &[(S, ScrollBehavior)] {
        &self.scroll_requests
    }

    /// Drains the queued scroll requests.
    pub fn take_scroll_requests(&mut self) -> Vec<(S, ScrollBehavior)> {
        core::mem::take(&mut self.scroll_requests)
    }
}

impl<S: Scalar> VirtualScrollViewport for HeadlessViewport<S> {
    type Scalar = S;

    fn data_len(&self) -> usize {
        self.len
    }

    fn rendered_range(&self) -> RenderedRange {
        self.rendered_range
    }

    fn set_total_content_extent(&mut self, extent: S) {
        self.total_content_extent = extent;
    }

    fn set_rendered_range(&mut self, range: RenderedRange) {
        self.rendered_range = range;
    }

    fn set_rendered_content_offset(&mut self, offset: S) {
        self.content_offset = offset;
    }

    fn scroll_to_offset(&mut self, offset: S, behavior: ScrollBehavior) {
        self.scroll_requests.push((offset, behavior));
    }
}
