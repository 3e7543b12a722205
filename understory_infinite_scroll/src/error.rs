// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the infinite scroll core.

use core::fmt;

use crate::sizing::SizingConfig;

/// Error returned when a request cannot be honored.
///
/// Every fallible operation in this crate leaves its receiver unchanged when it
/// returns an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InfiniteScrollError {
    /// A sizing configuration that cannot produce a usable item extent.
    ///
    /// Returned for `CountPerViewport` with a count that is not a positive
    /// finite number, and for `FixedExtent` with a negative or non-finite
    /// extent or spacing.
    InvalidConfiguration {
        /// The rejected configuration.
        config: SizingConfig,
    },
    /// An index outside the valid range was presented.
    OutOfRangeIndex {
        /// The offending index.
        index: usize,
        /// Number of valid indices; valid indices are `0..len`.
        len: usize,
    },
    /// Covering the viewport would need more wrap-around copies than
    /// [`MAX_PADDING_COUNT`](crate::MAX_PADDING_COUNT) on each side, or a padded
    /// length that does not fit in a `usize`.
    ///
    /// This happens when the item extent is tiny compared to the viewport.
    PaddingOverflow {
        /// Number of logical items.
        len: usize,
        /// Item extent along the scroll axis.
        item_extent: f64,
        /// Viewport extent along the scroll axis.
        viewport_extent: f64,
    },
}

impl fmt::Display for InfiniteScrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { config } => {
                write!(f, "invalid sizing configuration {config:?}")
            }
            Self::OutOfRangeIndex { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Self::PaddingOverflow {
                len,
                item_extent,
                viewport_extent,
            } => write!(
                f,
                "padding {len} items of extent {item_extent} to cover a viewport of {viewport_extent} exceeds the padding limit"
            ),
        }
    }
}

impl core::error::Error for InfiniteScrollError {}
