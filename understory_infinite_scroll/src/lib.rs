// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_infinite_scroll --heading-base-level=0

//! Understory Infinite Scroll: headless looping for 1D scroll strips.
//!
//! This crate makes a finite, linearly scrolling list behave as if it looped
//! forever over a circular data set. It does so without repeating the data
//! more than one viewport's worth on each side:
//!
//! - [`compute_sizing`] resolves a [`SizingConfig`] into a uniform item
//!   extent and spacing for the current viewport.
//! - [`build_padded`] surrounds the data with wrap-around copies (a
//!   [`PaddedSequence`]) and provides an [`IndexMapping`] between padded
//!   positions and logical items.
//! - [`ScrollGeometry::correct`] detects when the scroll offset has entered
//!   either padding region and returns the equivalent offset in the interior,
//!   which the host applies immediately ("teleport").
//! - [`InfiniteScroll`] ties these together behind a small controller that a
//!   host list widget can drive with viewport sizes and scroll offsets.
//!
//! This crate deliberately does **not** know about widgets, cells or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Showing [`InfiniteScroll::item_count`] items and rendering position `j`
//!   from [`InfiniteScroll::item_at`].
//! - Reporting every scroll offset change to
//!   [`InfiniteScroll::on_scroll_changed`] and applying the returned offset,
//!   without animation, before the next frame.
//! - Optionally supplying a [`ScrollDelegate`] for selection, settling and
//!   cross-axis insets.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_infinite_scroll::{InfiniteScroll, InfiniteScrollConfig, ScrollAxis, SizingConfig};
//!
//! // Three items, two per 200px-tall viewport.
//! let config = InfiniteScrollConfig::new(ScrollAxis::Vertical, SizingConfig::CountPerViewport(2.0));
//! let mut scroll = InfiniteScroll::new(vec!["red", "green", "blue"], Size::new(320.0, 200.0), config)?;
//!
//! // Two wrap-around copies on each side.
//! assert_eq!(scroll.item_count(), 7);
//! let first = scroll.item_at(0)?;
//! assert_eq!((first.logical_index, *first.item), (1, "green"));
//!
//! // Scrolling back past the start lands one full loop further on.
//! assert_eq!(scroll.on_scroll_changed(0.0), Some(300.0));
//! # Ok::<(), understory_infinite_scroll::InfiniteScrollError>(())
//! ```
//!
//! All extents and offsets are `f64` values along the scroll axis, in a
//! caller-chosen coordinate space (typically logical pixels).
//!
//! ## Features
//!
//! - `std` (default): builds Kurbo with the standard library.
//! - `libm`: builds Kurbo for `no_std` targets.
//! - `tracing`: emits `tracing` events when the padding is rebuilt and
//!   whenever a scroll offset is relocated.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod axis;
mod correction;
mod delegate;
mod error;
mod padding;
mod sizing;

pub use adapter::{InfiniteScroll, InfiniteScrollConfig, InfiniteScrollDebugInfo, ItemRef};
pub use axis::ScrollAxis;
pub use correction::{Correction, OffsetZone, ScrollGeometry, ScrollSession, correct};
pub use delegate::ScrollDelegate;
pub use error::InfiniteScrollError;
pub use padding::{IndexMapping, MAX_PADDING_COUNT, PaddedSequence, build_padded, padding_count};
pub use sizing::{Sizing, SizingConfig, compute_sizing};
