// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

use crate::Scalar;

/// Source of the global scroll position and viewport extent.
///
/// In a browser this is `window.scrollY` / `window.innerHeight`; a native
/// host would report its top-level scroll container. Values are polled on
/// every computation and never cached by the strategy.
pub trait WindowMetrics {
    /// Scalar type for offsets and extents.
    type Scalar: Scalar;

    /// Current scroll offset of the window along the list's axis.
    fn scroll_offset(&self) -> Self::Scalar;

    /// Current extent of the window's viewport along the list's axis.
    fn viewport_extent(&self) -> Self::Scalar;
}

/// Window metrics shared between a host and a strategy.
///
/// Clones observe the same values, so the host keeps one handle to update
/// from its scroll/resize handlers and gives another to
/// [`crate::WindowScrollStrategy::attach`]. Single-threaded by construction.
#[derive(Clone, Debug)]
pub struct SharedWindowMetrics<S: Scalar> {
    scroll_offset: Rc<Cell<S>>,
    viewport_extent: Rc<Cell<S>>,
}

impl<S: Scalar> SharedWindowMetrics<S> {
    /// Creates metrics with the given scroll offset and viewport extent.
    #[must_use]
    pub fn new(scroll_offset: S, viewport_extent: S) -> Self {
        Self {
            scroll_offset: Rc::new(Cell::new(scroll_offset)),
            viewport_extent: Rc::new(Cell::new(viewport_extent)),
        }
    }

    /// Updates the scroll offset seen by every clone.
    pub fn set_scroll_offset(&self, offset: S) {
        self.scroll_offset.set(offset);
    }

    /// Updates the viewport extent seen by every clone.
    pub fn set_viewport_extent(&self, extent: S) {
        self.viewport_extent.set(extent);
    }
}

impl<S: Scalar> WindowMetrics for SharedWindowMetrics<S> {
    type Scalar = S;

    fn scroll_offset(&self) -> S {
        self.scroll_offset.get()
    }

    fn viewport_extent(&self) -> S {
        self.viewport_extent.get()
    }
}
