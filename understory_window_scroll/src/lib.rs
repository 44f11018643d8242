// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Window Scroll: virtual scrolling for lists scrolled by the window.
//!
//! Many pages render a long list of uniformly sized rows inline with the rest
//! of the document, so the scroll position belongs to the window (or another
//! top-level scroll container) rather than to the list itself. This crate
//! decides which contiguous range of those rows must be materialized to cover
//! the visible viewport plus a safety buffer.
//!
//! The core concepts are:
//!
//! - [`compute_rendered_range`]: a pure function that, given the window's
//!   scroll offset and viewport extent, the item extent, the data length,
//!   buffer thresholds, and the previously committed [`RenderedRange`], returns
//!   the new range, the content offset at which to position it, and the first
//!   visible index.
//! - [`WindowScrollStrategy`]: a small controller that owns a [`ScrollConfig`],
//!   attaches to a [`VirtualScrollViewport`], polls an injected
//!   [`WindowMetrics`] provider on every scroll/resize notification, and writes
//!   the results back to the viewport.
//! - [`IndexChangeNotifier`]: distinct-until-changed notifications of the
//!   first visible index, completed when the strategy detaches.
//!
//! This crate deliberately does **not** know about the DOM, widgets, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Implementing [`VirtualScrollViewport`] for the element that holds the
//!   rendered rows (a spacer sized to the total content extent plus a
//!   container translated by the content offset).
//! - Implementing [`WindowMetrics`] (or using [`SharedWindowMetrics`]) to
//!   report the global scroll offset and viewport extent.
//! - Forwarding window scroll/resize events and data length changes to the
//!   strategy while it is attached.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_window_scroll::{
//!     HeadlessViewport, RenderedRange, ScrollConfig, SharedWindowMetrics, WindowScrollStrategy,
//! };
//!
//! // 1500 rows, 100px each, inside an 800px tall window.
//! let window = SharedWindowMetrics::new(0.0_f64, 800.0);
//! let config = ScrollConfig::new(100.0, 0.0, 200.0, 500.0);
//! let mut strategy: WindowScrollStrategy<HeadlessViewport<f64>, _> =
//!     WindowScrollStrategy::new(config);
//! strategy.attach(HeadlessViewport::new(1500), window.clone());
//!
//! // The viewport plus the buffer below it is rendered immediately.
//! let state = strategy.rendered_state().unwrap();
//! assert_eq!(state.range, RenderedRange::new(0, 13));
//! assert_eq!(state.total_content_extent, 150_000.0);
//!
//! // The host forwards window scroll events.
//! window.set_scroll_offset(5000.0);
//! strategy.on_window_scroll();
//! assert_eq!(strategy.index_changes().last_emitted(), Some(50));
//! ```
//!
//! The geometry can also be used on its own:
//!
//! ```rust
//! use understory_window_scroll::{GeometryInput, RenderedRange, compute_rendered_range};
//!
//! let out = compute_rendered_range(&GeometryInput {
//!     scroll_offset: 5000.0_f64,
//!     viewport_extent: 800.0,
//!     len: 1500,
//!     item_extent: 100.0,
//!     min_buffer: 200.0,
//!     max_buffer: 500.0,
//!     previous: RenderedRange::new(45, 55),
//! });
//! assert_eq!(out.range, RenderedRange::new(48, 63));
//! assert_eq!(out.content_offset, 4800.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to dependencies that distinguish `std`.
//! - `tracing`: emits `tracing` spans for attach, detach, and configuration
//!   updates, and a `trace` event for every committed range.
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels). This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod geometry;
mod metrics;
mod notify;
mod range;
mod scalar;
mod strategy;
mod viewport;

pub use config::{ConfigError, ScrollConfig};
pub use geometry::{GeometryInput, RenderedGeometry, compute_rendered_range};
pub use metrics::{SharedWindowMetrics, WindowMetrics};
pub use notify::{IndexChange, IndexChangeNotifier, SubscriptionId};
pub use range::RenderedRange;
pub use scalar::Scalar;
pub use strategy::{RenderedState, WindowScrollStrategy};
pub use viewport::{HeadlessViewport, ScrollBehavior, VirtualScrollViewport};
