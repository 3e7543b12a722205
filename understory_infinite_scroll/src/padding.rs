// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrap-around boundary padding.
//!
//! A circular sequence of `n` logical items is laid out as a linear strip of
//! `n + 2·p` padded items: the last `p` logical items (wrapping as often as
//! needed) in front, the `n` logical items in the middle, and the first `p`
//! logical items (again wrapping) at the back.
//!
//! ```text
//! logical:            A B C
//! padded (p = 5):  B C A B C | A B C | A B C A B
//!                  leading   interior  trailing
//! ```
//!
//! `p` is chosen so that each pad covers at least one full viewport, which is
//! what lets [`correct`](crate::correct) swap the visible position between a
//! pad and the interior without anything on screen changing.

use alloc::vec::Vec;

use crate::error::InfiniteScrollError;

/// Largest number of padding items placed on each side.
///
/// Items tiny enough relative to the viewport to need more copies than this
/// are rejected by [`build_padded`] instead of allocating an unbounded strip.
pub const MAX_PADDING_COUNT: usize = 1 << 16;

/// Number of padding items needed on each side to cover one viewport.
///
/// This is `ceil(viewport_extent / item_extent)`. A zero, negative or
/// non-finite extent on either side yields `Some(0)` instead of dividing by
/// zero. Returns `None` when the count would exceed [`MAX_PADDING_COUNT`].
#[must_use]
pub fn padding_count(item_extent: f64, viewport_extent: f64) -> Option<usize> {
    if !(item_extent.is_finite() && item_extent > 0.0) {
        return Some(0);
    }
    if !(viewport_extent.is_finite() && viewport_extent > 0.0) {
        return Some(0);
    }
    let mut count = libm::ceil(viewport_extent / item_extent);
    // The quotient can round down onto a whole number.
    if count * item_extent < viewport_extent {
        count += 1.0;
    }
    if !(count <= MAX_PADDING_COUNT as f64) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "count is a whole number no larger than MAX_PADDING_COUNT"
    )]
    {
        Some(count as usize)
    }
}

/// Bidirectional mapping between logical and padded indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IndexMapping {
    padding: usize,
    len: usize,
}

impl IndexMapping {
    /// Creates a mapping for `len` logical items with `padding` copies per side.
    ///
    /// An empty logical sequence never gets padding. Returns `None` if the
    /// padded length `len + 2 * padding` does not fit in a `usize`.
    #[must_use]
    pub fn new(len: usize, padding: usize) -> Option<Self> {
        let padding = if len == 0 { 0 } else { padding };
        padding.checked_mul(2)?.checked_add(len)?;
        Some(Self { padding, len })
    }

    /// Number of padding items on each side.
    #[must_use]
    pub fn padding_count(&self) -> usize {
        self.padding
    }

    /// Number of logical items.
    #[must_use]
    pub fn logical_len(&self) -> usize {
        self.len
    }

    /// Number of padded items, `len + 2 * padding`.
    #[must_use]
    pub fn padded_len(&self) -> usize {
        self.len + 2 * self.padding
    }

    /// Returns `true` if there are no logical items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps a logical index to its position in the interior of the padded strip.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::OutOfRangeIndex`] if `logical >= len`.
    pub fn to_padded(&self, logical: usize) -> Result<usize, InfiniteScrollError> {
        if logical >= self.len {
            return Err(InfiniteScrollError::OutOfRangeIndex {
                index: logical,
                len: self.len,
            });
        }
        Ok(logical + self.padding)
    }

    /// Maps any padded index (pad or interior) back to its logical index.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::OutOfRangeIndex`] if `padded >= padded_len()`.
    pub fn to_logical(&self, padded: usize) -> Result<usize, InfiniteScrollError> {
        let padded_len = self.padded_len();
        if padded >= padded_len {
            return Err(InfiniteScrollError::OutOfRangeIndex {
                index: padded,
                len: padded_len,
            });
        }
        let n = self.len;
        Ok(if padded < self.padding {
            // (n + d) mod n with d = padded - padding < 0, kept non-negative.
            (n - (self.padding - padded) % n) % n
        } else if padded - self.padding < n {
            padded - self.padding
        } else {
            (padded - self.padding - n) % n
        })
    }

    /// Returns `true` if `padded` lies in either padding region.
    #[must_use]
    pub fn is_padding(&self, padded: usize) -> bool {
        padded < self.padding || padded >= self.padding + self.len
    }
}

/// A logical sequence with wrap-around copies on both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct PaddedSequence<T> {
    items: Vec<T>,
    mapping: IndexMapping,
}

impl<T> Default for PaddedSequence<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            mapping: IndexMapping::default(),
        }
    }
}

impl<T> PaddedSequence<T> {
    /// Number of padded items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the padded sequence has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The index mapping for this sequence.
    #[must_use]
    pub fn mapping(&self) -> IndexMapping {
        self.mapping
    }

    /// Number of padding items on each side.
    #[must_use]
    pub fn padding_count(&self) -> usize {
        self.mapping.padding
    }

    /// The padded items in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The interior items, equal to the logical sequence.
    #[must_use]
    pub fn interior(&self) -> &[T] {
        let start = self.mapping.padding;
        &self.items[start..start + self.mapping.len]
    }

    /// Returns the item at a padded index.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::OutOfRangeIndex`] if `padded >= len()`.
    pub fn get(&self, padded: usize) -> Result<&T, InfiniteScrollError> {
        self.items
            .get(padded)
            .ok_or(InfiniteScrollError::OutOfRangeIndex {
                index: padded,
                len: self.items.len(),
            })
    }
}

/// Builds the padded sequence for `data`.
///
/// The padding count is [`padding_count`] of the two extents, forced to zero
/// when `data` is empty. Padding may exceed `data.len()`, in which case the
/// pads wrap around the data more than once.
///
/// # Errors
///
/// Returns [`InfiniteScrollError::PaddingOverflow`] if covering the viewport
/// needs more than [`MAX_PADDING_COUNT`] items per side, or if the padded
/// length does not fit in a `usize`.
pub fn build_padded<T: Clone>(
    data: &[T],
    item_extent: f64,
    viewport_extent: f64,
) -> Result<PaddedSequence<T>, InfiniteScrollError> {
    let n = data.len();
    let mapping = padding_count(item_extent, viewport_extent)
        .and_then(|padding| IndexMapping::new(n, padding))
        .ok_or(InfiniteScrollError::PaddingOverflow {
            len: n,
            item_extent,
            viewport_extent,
        })?;
    let p = mapping.padding;

    let mut items = Vec::with_capacity(mapping.padded_len());
    // Leading pad: the last `p` logical items, wrapping, in data order.
    for k in 1..=p {
        items.push(data[(n - 1) - ((p - k) % n)].clone());
    }
    items.extend_from_slice(data);
    // Trailing pad: the first `p` logical items, wrapping.
    for k in 0..p {
        items.push(data[k % n].clone());
    }

    Ok(PaddedSequence { items, mapping })
}
