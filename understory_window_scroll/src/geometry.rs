// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure rendered-range computation for fixed-extent lists.
//!
//! [`compute_rendered_range`] takes the previously committed [`RenderedRange`]
//! explicitly and returns a fresh [`RenderedGeometry`]; it never touches a
//! viewport. The controller in [`crate::WindowScrollStrategy`] is a thin
//! wrapper that feeds it window metrics and writes the result back.
//!
//! The range only grows or moves when a buffer edge is starved:
//!
//! - If the rendered content above the scroll offset is smaller than
//!   `min_buffer`, the start moves back far enough to leave `max_buffer`, and
//!   the end is recomputed to cover the viewport plus `min_buffer`.
//! - Otherwise, if the rendered content below the viewport is smaller than
//!   `min_buffer`, the end moves forward far enough to leave `max_buffer`, and
//!   the start is recomputed to keep `min_buffer` above the viewport.
//!
//! Only one of these adjustments happens per call, and the start edge wins.
//! After a very large jump both edges can be starved at once; the next call
//! (for example on the next scroll event) settles the other edge.

use crate::{RenderedRange, Scalar};

/// Inputs to [`compute_rendered_range`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometryInput<S: Scalar> {
    /// Global scroll offset of the window.
    pub scroll_offset: S,
    /// Extent of the window's viewport along the scroll axis.
    pub viewport_extent: S,
    /// Number of items in the list.
    pub len: usize,
    /// Extent of every item.
    pub item_extent: S,
    /// Minimum buffer beyond each viewport edge before the range grows.
    pub min_buffer: S,
    /// Buffer to leave beyond an edge once the range grows.
    pub max_buffer: S,
    /// Range committed by the previous computation.
    pub previous: RenderedRange,
}

/// Result of [`compute_rendered_range`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderedGeometry<S: Scalar> {
    /// New rendered range, always within `[0, len]`.
    pub range: RenderedRange,
    /// Offset of the first rendered item from the content origin.
    pub content_offset: S,
    /// Index of the item at the scroll offset, floored.
    pub first_visible_index: usize,
    /// Scroll offset the range was computed for.
    ///
    /// This differs from the input only when the list shrank underneath a
    /// scrolled-to-the-end viewport and the anchor had to move back.
    pub scroll_offset: S,
}

/// Computes the range of items to render for a window-driven viewport.
///
/// Negative or non-finite scroll offsets are treated as `0`, and so are
/// non-positive or non-finite viewport extents. If the item extent is not
/// positive and finite, no division is attempted: the previous range is
/// clamped to `len`, and the content offset and first visible index are `0`.
///
/// Calling this again with the same inputs, the returned range as `previous`,
/// and the returned `scroll_offset` yields the same range, provided
/// `min_buffer <= max_buffer`.
#[must_use]
pub fn compute_rendered_range<S: Scalar>(input: &GeometryInput<S>) -> RenderedGeometry<S> {
    let len = input.len;
    let item = input.item_extent;
    let zero = S::zero();

    if !item.is_positive_finite() {
        return RenderedGeometry {
            range: input.previous.clamp_to_len(len),
            content_offset: zero,
            first_visible_index: 0,
            scroll_offset: sanitize(input.scroll_offset),
        };
    }

    let viewport = sanitize(input.viewport_extent);
    let min_buffer = input.min_buffer;
    let max_buffer = input.max_buffer;
    let mut scroll = sanitize(input.scroll_offset);
    let mut range = input.previous;
    let mut first_visible = scroll / item;

    // The list shrank while the previous range reached past its new end:
    // re-anchor so the viewport shows the tail of the shorter list.
    if range.end > len {
        let max_visible = (viewport / item).ceil();
        let anchored = first_visible
            .min(S::from_usize(len) - max_visible)
            .max(zero);
        if anchored != first_visible {
            first_visible = anchored;
            scroll = anchored * item;
            range.start = anchored.floor_to_index();
        }
        range.end = range
            .start
            .saturating_add(max_visible.to_index())
            .min(len);
    }

    let start_buffer = scroll - S::from_usize(range.start) * item;
    if start_buffer < min_buffer && range.start != 0 {
        // Signed: with `max_buffer < min_buffer` the start can move forward.
        let expand_start = ((max_buffer - start_buffer) / item).ceil();
        range.start = (S::from_usize(range.start) - expand_start).floor_to_index();
        range.end = (first_visible + (viewport + min_buffer) / item)
            .ceil_to_index()
            .min(len);
    } else {
        let end_buffer = S::from_usize(range.end) * item - (scroll + viewport);
        if end_buffer < min_buffer && range.end != len {
            let expand_end = ((max_buffer - end_buffer) / item).ceil();
            if expand_end > zero {
                range.end = range.end.saturating_add(expand_end.to_index()).min(len);
                range.start = (first_visible - min_buffer / item).floor_to_index();
            }
        }
    }

    let range = range.clamp_to_len(len);
    RenderedGeometry {
        range,
        content_offset: S::from_usize(range.start) * item,
        first_visible_index: first_visible.floor_to_index(),
        scroll_offset: scroll,
    }
}

fn sanitize<S: Scalar>(value: S) -> S {
    if value.is_finite() {
        value.clamp_non_negative()
    } else {
        S::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::{GeometryInput, RenderedGeometry, compute_rendered_range};
    use crate::RenderedRange;

    fn input(scroll_offset: f64, len: usize, previous: RenderedRange) -> GeometryInput<f64> {
        GeometryInput {
            scroll_offset,
            viewport_extent: 800.0,
            len,
            item_extent: 100.0,
            min_buffer: 200.0,
            max_buffer: 500.0,
            previous,
        }
    }

    #[test]
    fn initial_range_covers_viewport_and_buffer() {
        let out = compute_rendered_range(&input(0.0, 1500, RenderedRange::EMPTY));
        assert_eq!(out.range, RenderedRange::new(0, 13));
        assert_eq!(out.content_offset, 0.0);
        assert_eq!(out.first_visible_index, 0);
        assert_eq!(out.scroll_offset, 0.0);
    }

    #[test]
    fn starved_end_buffer_grows_forward_and_trims_start() {
        let out = compute_rendered_range(&input(5000.0, 1500, RenderedRange::new(45, 55)));
        assert_eq!(out.range, RenderedRange::new(48, 63));
        assert_eq!(out.content_offset, 4800.0);
        assert_eq!(out.first_visible_index, 50);
    }

    #[test]
    fn starved_start_buffer_grows_backward() {
        // 100px rendered above the scroll offset, less than the 200px minimum.
        let out = compute_rendered_range(&input(5000.0, 1500, RenderedRange::new(49, 63)));
        // ceil((500 - 100) / 100) = 4 items back; end covers 50 + (800 + 200) / 100.
        assert_eq!(out.range, RenderedRange::new(45, 60));
        assert_eq!(out.content_offset, 4500.0);
    }

    #[test]
    fn start_expansion_wins_over_end_expansion() {
        // Both edges are starved; only the start-side branch runs.
        let out = compute_rendered_range(&input(5000.0, 1500, RenderedRange::new(50, 51)));
        assert_eq!(out.range, RenderedRange::new(45, 60));
    }

    #[test]
    fn settled_range_is_left_alone() {
        let first = compute_rendered_range(&input(5000.0, 1500, RenderedRange::new(45, 55)));
        let second = compute_rendered_range(&input(5000.0, 1500, first.range));
        assert_eq!(second, first);
    }

    #[test]
    fn shrink_reanchors_to_tail_of_new_list() {
        let out = compute_rendered_range(&input(149_200.0, 40, RenderedRange::new(1490, 1500)));
        // Anchor moves to 40 - ceil(800 / 100) = 32, then the start buffer
        // (0px) is starved and grows back by ceil(500 / 100) = 5 items.
        assert_eq!(
            out,
            RenderedGeometry {
                range: RenderedRange::new(27, 40),
                content_offset: 2700.0,
                first_visible_index: 32,
                scroll_offset: 3200.0,
            }
        );
    }

    #[test]
    fn shrink_below_one_viewport_renders_everything() {
        let out = compute_rendered_range(&input(3000.0, 5, RenderedRange::new(28, 40)));
        assert_eq!(out.range, RenderedRange::new(0, 5));
        assert_eq!(out.first_visible_index, 0);
        assert_eq!(out.scroll_offset, 0.0);
    }

    #[test]
    fn shrink_without_moving_anchor_keeps_range_ordered() {
        // Scroll offset already fits the shorter list, but the stale range
        // lies entirely past its end.
        let out = compute_rendered_range(&input(0.0, 40, RenderedRange::new(1490, 1500)));
        assert!(out.range.start <= out.range.end);
        assert!(out.range.end <= 40);
    }

    #[test]
    fn empty_list_yields_empty_range() {
        let out = compute_rendered_range(&input(900.0, 0, RenderedRange::new(3, 12)));
        assert_eq!(out.range, RenderedRange::EMPTY);
        assert_eq!(out.content_offset, 0.0);
    }

    #[test]
    fn non_positive_item_extent_is_a_guard() {
        let mut bad = input(5000.0, 30, RenderedRange::new(20, 40));
        bad.item_extent = 0.0;
        let out = compute_rendered_range(&bad);
        assert_eq!(out.range, RenderedRange::new(20, 30));
        assert_eq!(out.first_visible_index, 0);
        assert_eq!(out.content_offset, 0.0);

        bad.item_extent = -10.0;
        assert_eq!(compute_rendered_range(&bad).range, RenderedRange::new(20, 30));
    }

    #[test]
    fn zero_viewport_renders_only_the_buffer() {
        let mut zero = input(0.0, 1500, RenderedRange::EMPTY);
        zero.viewport_extent = -5.0;
        let out = compute_rendered_range(&zero);
        // end_buffer = 0 < 200, expand by ceil(500 / 100).
        assert_eq!(out.range, RenderedRange::new(0, 5));
    }

    #[test]
    fn inverted_buffers_can_move_start_forward() {
        let mut inverted = input(5100.0, 1500, RenderedRange::new(48, 63));
        inverted.min_buffer = 500.0;
        inverted.max_buffer = 200.0;
        let out = compute_rendered_range(&inverted);
        // start_buffer = 300 < 500, so start -= ceil((200 - 300) / 100) = -1;
        // end = ceil(51 + (800 + 500) / 100).
        assert_eq!(out.range, RenderedRange::new(49, 64));
        assert_eq!(out.content_offset, 4900.0);
    }

    #[test]
    fn negative_scroll_offset_is_treated_as_zero() {
        let out = compute_rendered_range(&input(-120.0, 1500, RenderedRange::EMPTY));
        assert_eq!(out.range, RenderedRange::new(0, 13));
        assert_eq!(out.first_visible_index, 0);
        assert_eq!(out.scroll_offset, 0.0);
    }

    #[test]
    fn f32_scalars_are_supported() {
        let out = compute_rendered_range(&GeometryInput {
            scroll_offset: 5000.0_f32,
            viewport_extent: 800.0,
            len: 1500,
            item_extent: 100.0,
            min_buffer: 200.0,
            max_buffer: 500.0,
            previous: RenderedRange::new(45, 55),
        });
        assert_eq!(out.range, RenderedRange::new(48, 63));
    }
}
