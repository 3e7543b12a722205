// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities consulted by [`InfiniteScroll`](crate::InfiniteScroll).

use crate::adapter::ItemRef;
use crate::axis::ScrollAxis;

/// Optional callbacks and layout hints supplied by the host.
///
/// Every method has a default, so hosts only implement what they care about.
/// `()` implements this trait with all defaults.
pub trait ScrollDelegate<T> {
    /// Called when the host reports a tap/click on a padded position.
    ///
    /// `item` carries both the padded and the logical index, so copies in the
    /// padding regions resolve to the same logical item as the interior.
    fn did_select_item(&mut self, item: ItemRef<'_, T>) {
        let _ = item;
    }

    /// Called once scrolling motion has fully stopped.
    fn did_end_scrolling(&mut self) {}

    /// Inset applied on both edges across the scroll axis.
    ///
    /// For a horizontal strip this is the top and bottom padding; for a
    /// vertical strip, the left and right padding. It shrinks the cross-axis
    /// item size and never affects padding or correction.
    fn cross_axis_inset(&self, axis: ScrollAxis) -> f64 {
        let _ = axis;
        0.0
    }
}

impl<T> ScrollDelegate<T> for () {}
