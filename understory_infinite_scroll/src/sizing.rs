// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform item sizing.
//!
//! Every item in an infinite scroll strip has the same extent along the scroll
//! axis. [`SizingConfig`] describes how that extent is chosen and
//! [`compute_sizing`] resolves it against the current viewport extent.

use crate::error::InfiniteScrollError;

/// How item extents are chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizingConfig {
    /// Every item has `extent` along the scroll axis and items are separated by
    /// `spacing`.
    FixedExtent {
        /// Item extent along the scroll axis.
        extent: f64,
        /// Gap between adjacent items along the scroll axis.
        spacing: f64,
    },
    /// Exactly this many items fit in one viewport, with no spacing.
    ///
    /// Fractional counts are allowed; `2.5` shows two and a half items.
    CountPerViewport(f64),
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self::CountPerViewport(5.0)
    }
}

impl SizingConfig {
    /// Checks that this configuration can produce a usable item extent.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::InvalidConfiguration`] when the count of a
    /// `CountPerViewport` is not a positive finite number, or when a
    /// `FixedExtent` has a negative or non-finite extent or spacing.
    pub fn validate(self) -> Result<(), InfiniteScrollError> {
        let valid = match self {
            Self::FixedExtent { extent, spacing } => {
                extent.is_finite() && spacing.is_finite() && extent >= 0.0 && spacing >= 0.0
            }
            Self::CountPerViewport(count) => count.is_finite() && count > 0.0,
        };
        if valid {
            Ok(())
        } else {
            Err(InfiniteScrollError::InvalidConfiguration { config: self })
        }
    }
}

/// Resolved item extent and spacing along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Sizing {
    /// Extent of every item along the scroll axis.
    pub item_extent: f64,
    /// Gap between adjacent items along the scroll axis.
    pub spacing: f64,
}

impl Sizing {
    /// Distance from the start of one item to the start of the next.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.item_extent + self.spacing
    }
}

/// Resolves `config` against a viewport extent along the scroll axis.
///
/// A zero (or negative) viewport extent is legal and produces a zero item
/// extent for `CountPerViewport`; callers must tolerate zero-size items while
/// the viewport has not been laid out yet.
///
/// # Errors
///
/// Returns [`InfiniteScrollError::InvalidConfiguration`] when `config` fails
/// [`SizingConfig::validate`].
pub fn compute_sizing(
    config: SizingConfig,
    viewport_extent: f64,
) -> Result<Sizing, InfiniteScrollError> {
    config.validate()?;
    Ok(match config {
        SizingConfig::FixedExtent { extent, spacing } => Sizing {
            item_extent: extent,
            spacing,
        },
        SizingConfig::CountPerViewport(count) => {
            let viewport = if viewport_extent.is_finite() {
                viewport_extent.max(0.0)
            } else {
                0.0
            };
            Sizing {
                item_extent: viewport / count,
                spacing: 0.0,
            }
        }
    })
}
