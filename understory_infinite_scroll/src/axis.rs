// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll axis selection.
//!
//! Everything in this crate is one-dimensional. [`ScrollAxis`] picks which
//! component of a 2D [`Size`] or [`Point`] is the scroll dimension and which
//! one runs across it.

use kurbo::{Insets, Point, Size};

/// The axis along which content scrolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollAxis {
    /// Items are laid out left to right; offsets are X coordinates.
    #[default]
    Horizontal,
    /// Items are laid out top to bottom; offsets are Y coordinates.
    Vertical,
}

impl ScrollAxis {
    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns the extent of `size` across this axis.
    #[must_use]
    pub fn cross_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Returns the component of `point` along this axis.
    #[must_use]
    pub fn offset_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Builds a content offset point with `offset` along this axis and zero across it.
    #[must_use]
    pub fn point_at(self, offset: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(offset, 0.0),
            Self::Vertical => Point::new(0.0, offset),
        }
    }

    /// Builds a size from a main-axis and a cross-axis extent.
    #[must_use]
    pub fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Insets of `inset` on both cross-axis edges and zero along the axis.
    #[must_use]
    pub fn cross_insets(self, inset: f64) -> Insets {
        match self {
            Self::Horizontal => Insets::new(0.0, inset, 0.0, inset),
            Self::Vertical => Insets::new(inset, 0.0, inset, 0.0),
        }
    }
}
