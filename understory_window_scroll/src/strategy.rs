// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller tying window metrics, the geometry, and a viewport together.

use crate::geometry::{GeometryInput, compute_rendered_range};
use crate::{
    IndexChangeNotifier, RenderedRange, Scalar, ScrollBehavior, ScrollConfig,
    VirtualScrollViewport, WindowMetrics,
};

/// State last committed to the attached viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderedState<S: Scalar> {
    /// Rendered range.
    pub range: RenderedRange,
    /// Offset of the first rendered item from the content origin.
    pub content_offset: S,
    /// Extent of the whole list, including the leading extent.
    pub total_content_extent: S,
}

#[derive(Debug)]
struct Attached<V: VirtualScrollViewport, W> {
    viewport: V,
    metrics: W,
    state: RenderedState<V::Scalar>,
}

/// Virtual scroll strategy for fixed-extent items scrolled by the window.
///
/// The strategy is either detached or attached to exactly one viewport plus
/// the [`WindowMetrics`] it polls. While attached, the host forwards its
/// window and viewport notifications (`on_*` methods); each one synchronously
/// recomputes the rendered range and writes it to the viewport. While
/// detached every notification is a no-op.
///
/// The first visible index is published through [`IndexChangeNotifier`],
/// which only forwards changes. Detaching completes that stream; attaching
/// again reopens it.
///
/// ```rust
/// use understory_window_scroll::{HeadlessViewport, SharedWindowMetrics, WindowScrollStrategy};
///
/// let window = SharedWindowMetrics::new(0.0_f64, 800.0);
/// let mut strategy: WindowScrollStrategy<HeadlessViewport<f64>, _> =
///     WindowScrollStrategy::with_extents(100.0, 0.0, 200.0, 500.0);
/// strategy.attach(HeadlessViewport::new(1500), window.clone());
///
/// window.set_scroll_offset(5000.0);
/// strategy.on_window_scroll();
///
/// let state = strategy.rendered_state().unwrap();
/// assert!(state.range.contains(50));
/// assert_eq!(strategy.index_changes().last_emitted(), Some(50));
/// ```
#[derive(Debug)]
pub struct WindowScrollStrategy<V, W>
where
    V: VirtualScrollViewport,
    W: WindowMetrics<Scalar = V::Scalar>,
{
    config: ScrollConfig<V::Scalar>,
    attached: Option<Attached<V, W>>,
    index_changes: IndexChangeNotifier,
}

impl<V, W> WindowScrollStrategy<V, W>
where
    V: VirtualScrollViewport,
    W: WindowMetrics<Scalar = V::Scalar>,
{
    /// Creates a detached strategy.
    #[must_use]
    pub fn new(config: ScrollConfig<V::Scalar>) -> Self {
        Self {
            config,
            attached: None,
            index_changes: IndexChangeNotifier::new(),
        }
    }

    /// Creates a detached strategy from individual extents.
    ///
    /// See [`ScrollConfig`] for their meaning.
    #[must_use]
    pub fn with_extents(
        item_extent: V::Scalar,
        leading_extent: V::Scalar,
        min_buffer: V::Scalar,
        max_buffer: V::Scalar,
    ) -> Self {
        Self::new(ScrollConfig::new(
            item_extent,
            leading_extent,
            min_buffer,
            max_buffer,
        ))
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ScrollConfig<V::Scalar> {
        &self.config
    }

    /// Returns `true` while a viewport is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// The attached viewport.
    #[must_use]
    pub fn viewport(&self) -> Option<&V> {
        self.attached.as_ref().map(|a| &a.viewport)
    }

    /// The attached viewport, mutably.
    ///
    /// Changes to its data length must be followed by
    /// [`WindowScrollStrategy::on_data_length_changed`].
    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.attached.as_mut().map(|a| &mut a.viewport)
    }

    /// The attached window metrics.
    #[must_use]
    pub fn metrics(&self) -> Option<&W> {
        self.attached.as_ref().map(|a| &a.metrics)
    }

    /// State last written to the attached viewport.
    #[must_use]
    pub fn rendered_state(&self) -> Option<RenderedState<V::Scalar>> {
        self.attached.as_ref().map(|a| a.state)
    }

    /// First-visible-index notifications.
    #[must_use]
    pub fn index_changes(&self) -> &IndexChangeNotifier {
        &self.index_changes
    }

    /// First-visible-index notifications, for subscribing and unsubscribing.
    pub fn index_changes_mut(&mut self) -> &mut IndexChangeNotifier {
        &mut self.index_changes
    }

    /// Attaches to `viewport`, polling `metrics` for the window's scroll
    /// offset and viewport extent.
    ///
    /// The committed range is seeded from the viewport's current range, then
    /// the total content extent and rendered range are computed immediately.
    /// If another viewport was attached it is detached first and returned.
    pub fn attach(&mut self, viewport: V, metrics: W) -> Option<(V, W)> {
        let previous = if self.attached.is_some() {
            self.detach()
        } else {
            None
        };

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "window_scroll_attach",
            len = viewport.data_len(),
            item_extent = ?self.config.item_extent
        )
        .entered();

        if self.index_changes.is_completed() {
            self.index_changes.reopen();
        }
        let state = RenderedState {
            range: viewport.rendered_range(),
            content_offset: <V::Scalar as Scalar>::zero(),
            total_content_extent: <V::Scalar as Scalar>::zero(),
        };
        self.attached = Some(Attached {
            viewport,
            metrics,
            state,
        });
        self.update_total_content_extent();
        self.update_rendered_range();
        previous
    }

    /// Detaches from the current viewport and returns it with its metrics.
    ///
    /// Completes the index-change stream. Notifications received afterwards
    /// are ignored until the next [`WindowScrollStrategy::attach`].
    pub fn detach(&mut self) -> Option<(V, W)> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("window_scroll_detach", attached = self.is_attached())
            .entered();

        self.index_changes.complete();
        let attached = self.attached.take()?;
        Some((attached.viewport, attached.metrics))
    }

    /// Replaces the configuration and recomputes the total content extent and
    /// rendered range without waiting for the next scroll.
    pub fn update_config(&mut self, config: ScrollConfig<V::Scalar>) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "window_scroll_update_config",
            item_extent = ?config.item_extent,
            leading_extent = ?config.leading_extent,
            min_buffer = ?config.min_buffer,
            max_buffer = ?config.max_buffer
        )
        .entered();

        self.config = config;
        self.update_total_content_extent();
        self.update_rendered_range();
    }

    /// The window scrolled.
    pub fn on_window_scroll(&mut self) {
        self.update_rendered_range();
    }

    /// The window's viewport was resized.
    pub fn on_window_resize(&mut self) {
        self.update_rendered_range();
    }

    /// The viewport's own content scrolled.
    pub fn on_content_scrolled(&mut self) {
        self.update_rendered_range();
    }

    /// The viewport's data length changed.
    pub fn on_data_length_changed(&mut self) {
        self.update_total_content_extent();
        self.update_rendered_range();
    }

    /// The viewport finished rendering content. Nothing to do for fixed extents.
    pub fn on_content_rendered(&mut self) {}

    /// The viewport's rendered offset changed. Nothing to do for fixed extents.
    pub fn on_rendered_offset_changed(&mut self) {}

    /// Asks the viewport to scroll so that `index` starts at the top.
    ///
    /// No-op while detached.
    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        let offset = self.config.offset_of_index(index);
        if let Some(attached) = self.attached.as_mut() {
            attached.viewport.scroll_to_offset(offset, behavior);
        }
    }

    fn update_total_content_extent(&mut self) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        let extent = self
            .config
            .total_content_extent(attached.viewport.data_len());
        attached.viewport.set_total_content_extent(extent);
        attached.state.total_content_extent = extent;
    }

    fn update_rendered_range(&mut self) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        let geometry = compute_rendered_range(&GeometryInput {
            scroll_offset: attached.metrics.scroll_offset(),
            viewport_extent: attached.metrics.viewport_extent(),
            len: attached.viewport.data_len(),
            item_extent: self.config.item_extent,
            min_buffer: self.config.min_buffer,
            max_buffer: self.config.max_buffer,
            previous: attached.state.range,
        });

        attached.viewport.set_rendered_range(geometry.range);
        attached
            .viewport
            .set_rendered_content_offset(geometry.content_offset);
        attached.state.range = geometry.range;
        attached.state.content_offset = geometry.content_offset;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            start = geometry.range.start,
            end = geometry.range.end,
            content_offset = ?geometry.content_offset,
            first_visible = geometry.first_visible_index,
            "committed rendered range"
        );

        self.index_changes.emit(geometry.first_visible_index);
    }
}
