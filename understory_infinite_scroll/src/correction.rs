// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll offset correction.
//!
//! The padded strip is finite, so a user scrolling in one direction would
//! eventually hit its end. To keep the loop going, whenever the scroll offset
//! enters one of the padding regions it is rewritten ("teleported") to the
//! offset in the opposite part of the strip that shows exactly the same items.
//!
//! ## Zones
//!
//! - **Trailing pad**: `offset >= padded_extent - padding_extent`. The offset
//!   moves to `padding_extent - spacing`, just before the first interior item.
//! - **Leading pad**: `offset <= 0`. The offset moves forward by one full
//!   logical extent, to `logical_extent`.
//! - **Interior**: anything in between. Nothing happens.
//!
//! Only the position is rewritten. Hosts keep whatever scroll velocity or
//! momentum they have, so a fling continues seamlessly across the jump.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_infinite_scroll::{Correction, ScrollGeometry};
//!
//! // 3 items of 10 units, 5 padding items per side, no spacing.
//! let geometry = ScrollGeometry {
//!     padded_extent: 130.0,
//!     padding_extent: 50.0,
//!     logical_extent: 30.0,
//!     spacing: 0.0,
//! };
//!
//! assert_eq!(geometry.correct(60.0), Correction::Unchanged);
//! assert_eq!(geometry.correct(80.0), Correction::Relocate(50.0));
//! assert_eq!(geometry.correct(0.0), Correction::Relocate(30.0));
//! ```

use crate::padding::IndexMapping;
use crate::sizing::Sizing;

/// Which region of the padded strip an offset falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OffsetZone {
    /// At or before the start of the strip.
    LeadingPad,
    /// Strictly between the two pads.
    Interior,
    /// Far enough forward that the trailing pad fills the viewport.
    TrailingPad,
}

/// Outcome of [`ScrollGeometry::correct`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Correction {
    /// The offset is safe; leave it alone.
    Unchanged,
    /// Replace the scroll offset with this value.
    Relocate(f64),
}

impl Correction {
    /// The new offset, if the correction fired.
    #[must_use]
    pub fn offset(self) -> Option<f64> {
        match self {
            Self::Unchanged => None,
            Self::Relocate(offset) => Some(offset),
        }
    }

    /// Returns `true` if the offset must be rewritten.
    #[must_use]
    pub fn is_relocate(self) -> bool {
        matches!(self, Self::Relocate(_))
    }
}

/// Extents along the scroll axis that drive offset correction.
///
/// Hosts that measure their own content extent can fill this in directly;
/// [`ScrollGeometry::from_layout`] derives it for a flow layout with uniform
/// items.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollGeometry {
    /// Total extent of the padded content.
    pub padded_extent: f64,
    /// Extent of one padding region, including its spacing.
    pub padding_extent: f64,
    /// Extent of the logical items, including their spacing.
    pub logical_extent: f64,
    /// Gap between adjacent items.
    pub spacing: f64,
}

impl ScrollGeometry {
    /// Derives the geometry of a padded strip laid out item after item.
    ///
    /// Spacing only appears between items, so the padded extent is
    /// `len * item_extent + (len - 1) * spacing`, while the padding and
    /// logical extents count one stride per item.
    #[must_use]
    pub fn from_layout(sizing: Sizing, mapping: IndexMapping) -> Self {
        let padded_len = mapping.padded_len();
        let padded_extent = if padded_len == 0 {
            0.0
        } else {
            scale(padded_len, sizing.item_extent) + scale(padded_len - 1, sizing.spacing)
        };
        Self {
            padded_extent,
            padding_extent: scale(mapping.padding_count(), sizing.stride()),
            logical_extent: scale(mapping.logical_len(), sizing.stride()),
            spacing: sizing.spacing,
        }
    }

    /// Returns `true` if no correction can ever fire.
    ///
    /// This is the case for empty data and for zero-size items, where there is
    /// no interior to relocate into.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        !(self.padding_extent > 0.0 && self.logical_extent > 0.0)
    }

    /// Classifies `offset`.
    ///
    /// The trailing pad is checked first, so in a strip too short to have an
    /// interior an offset of zero is reported as trailing.
    #[must_use]
    pub fn zone(&self, offset: f64) -> OffsetZone {
        if offset >= self.padded_extent - self.padding_extent {
            OffsetZone::TrailingPad
        } else if offset <= 0.0 {
            OffsetZone::LeadingPad
        } else {
            OffsetZone::Interior
        }
    }

    /// Decides whether `offset` needs to be rewritten, and to what.
    #[must_use]
    pub fn correct(&self, offset: f64) -> Correction {
        if self.is_inert() || !offset.is_finite() {
            return Correction::Unchanged;
        }
        match self.zone(offset) {
            OffsetZone::TrailingPad => Correction::Relocate(self.padding_extent - self.spacing),
            OffsetZone::LeadingPad => Correction::Relocate(self.logical_extent),
            OffsetZone::Interior => Correction::Unchanged,
        }
    }
}

/// Stateless form of [`ScrollGeometry::correct`].
#[must_use]
pub fn correct(offset: f64, geometry: &ScrollGeometry) -> Correction {
    geometry.correct(offset)
}

fn scale(count: usize, extent: f64) -> f64 {
    count as f64 * extent
}

/// Per-session scroll state: the current offset and the geometry it lives in.
///
/// Feed every scroll notification to [`ScrollSession::on_scroll`] and apply any
/// returned relocation before the next frame.
#[derive(Clone, Debug, Default)]
pub struct ScrollSession {
    geometry: ScrollGeometry,
    offset: f64,
    suspended: bool,
    corrections: u64,
}

impl ScrollSession {
    /// Creates a session at `offset` within `geometry`.
    #[must_use]
    pub fn new(geometry: ScrollGeometry, offset: f64) -> Self {
        Self {
            geometry,
            offset,
            suspended: false,
            corrections: 0,
        }
    }

    /// The geometry corrections are computed against.
    #[must_use]
    pub fn geometry(&self) -> ScrollGeometry {
        self.geometry
    }

    /// The last known scroll offset, after any correction.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Number of corrections applied since the last reset.
    #[must_use]
    pub fn corrections(&self) -> u64 {
        self.corrections
    }

    /// Returns `true` while corrections are suspended.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Replaces the geometry and offset wholesale.
    ///
    /// Any suspension and the correction counter are cleared; nothing computed
    /// against the previous geometry survives.
    pub fn reset(&mut self, geometry: ScrollGeometry, offset: f64) {
        *self = Self::new(geometry, offset);
    }

    /// Moves to `offset` without checking it for correction.
    pub fn jump_to(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Suspends or resumes corrections.
    ///
    /// While suspended, [`ScrollSession::on_scroll`] records offsets but never
    /// relocates them.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    /// Records a new scroll offset and corrects it if it entered a pad.
    ///
    /// Returns the correction; when it is [`Correction::Relocate`], the stored
    /// offset has already been rewritten and the host must apply the same value.
    pub fn on_scroll(&mut self, offset: f64) -> Correction {
        self.offset = offset;
        if self.suspended {
            return Correction::Unchanged;
        }
        let correction = self.geometry.correct(offset);
        if let Correction::Relocate(new_offset) = correction {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                from = offset,
                to = new_offset,
                zone = ?self.geometry.zone(offset),
                "scroll offset relocated"
            );
            self.offset = new_offset;
            self.corrections += 1;
        }
        correction
    }
}
