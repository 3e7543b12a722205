// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport-facing controller.
//!
//! [`InfiniteScroll`] owns the logical data, the padded sequence built from it
//! and the scroll session. Hosts drive it with viewport sizes and scroll
//! offsets, and read back item counts, items and corrected offsets. It never
//! holds a reference to the host's scroll view.

use alloc::vec::Vec;

use kurbo::{Insets, Point, Size};

use crate::axis::ScrollAxis;
use crate::correction::{ScrollGeometry, ScrollSession};
use crate::delegate::ScrollDelegate;
use crate::error::InfiniteScrollError;
use crate::padding::{IndexMapping, PaddedSequence, build_padded};
use crate::sizing::{Sizing, SizingConfig, compute_sizing};

/// Axis and sizing for an [`InfiniteScroll`].
///
/// The default is a horizontal strip showing five items per viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct InfiniteScrollConfig {
    /// The scroll axis.
    pub axis: ScrollAxis,
    /// How item extents are chosen.
    pub sizing: SizingConfig,
}

impl InfiniteScrollConfig {
    /// Creates a configuration.
    #[must_use]
    pub fn new(axis: ScrollAxis, sizing: SizingConfig) -> Self {
        Self { axis, sizing }
    }

    /// Returns a copy with a different axis.
    #[must_use]
    pub fn with_axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Returns a copy with a different sizing configuration.
    #[must_use]
    pub fn with_sizing(mut self, sizing: SizingConfig) -> Self {
        self.sizing = sizing;
        self
    }
}

/// An item at a padded position, together with its logical identity.
#[derive(Debug, PartialEq)]
pub struct ItemRef<'a, T> {
    /// Position in the padded sequence.
    pub padded_index: usize,
    /// Position in the logical data.
    pub logical_index: usize,
    /// The item itself.
    pub item: &'a T,
}

impl<T> Clone for ItemRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ItemRef<'_, T> {}

/// Resolves sizing and builds the padded strip without touching any controller state.
fn layout_for<T: Clone>(
    data: &[T],
    config: InfiniteScrollConfig,
    viewport: Size,
) -> Result<(Sizing, PaddedSequence<T>), InfiniteScrollError> {
    let viewport_extent = config.axis.extent(viewport);
    let sizing = compute_sizing(config.sizing, viewport_extent)?;
    let padded = build_padded(data, sizing.item_extent, viewport_extent)?;
    Ok((sizing, padded))
}

fn item_ref<T>(
    padded: &PaddedSequence<T>,
    padded_index: usize,
) -> Result<ItemRef<'_, T>, InfiniteScrollError> {
    let item = padded.get(padded_index)?;
    let logical_index = padded.mapping().to_logical(padded_index)?;
    Ok(ItemRef {
        padded_index,
        logical_index,
        item,
    })
}

/// Infinitely looping scroll controller for a circular sequence of items.
///
/// ## Usage
///
/// 1) Create it with the data, the viewport size and a configuration.
/// 2) Report [`InfiniteScroll::item_count`] items to the host's list widget and
///    fill position `j` from [`InfiniteScroll::item_at`].
/// 3) Apply [`InfiniteScroll::scroll_offset`] as the initial content offset.
/// 4) On every scroll notification call [`InfiniteScroll::on_scroll_changed`]
///    and, if it returns an offset, apply it before the next frame.
///
/// ## Minimal example
///
/// ```rust
/// use kurbo::Size;
/// use understory_infinite_scroll::{InfiniteScroll, InfiniteScrollConfig, SizingConfig};
///
/// let config = InfiniteScrollConfig::default().with_sizing(SizingConfig::FixedExtent {
///     extent: 10.0,
///     spacing: 0.0,
/// });
/// let mut scroll = InfiniteScroll::new(vec!['A', 'B', 'C'], Size::new(50.0, 20.0), config)?;
///
/// // Five copies on each side of the three real items.
/// assert_eq!(scroll.item_count(), 13);
/// // The strip starts on logical item 0.
/// assert_eq!(scroll.scroll_offset(), 50.0);
///
/// // Scrolling into the trailing pad teleports back into the interior.
/// assert_eq!(scroll.on_scroll_changed(80.0), Some(50.0));
/// # Ok::<(), understory_infinite_scroll::InfiniteScrollError>(())
/// ```
#[derive(Clone, Debug)]
pub struct InfiniteScroll<T, D = ()> {
    config: InfiniteScrollConfig,
    viewport: Size,
    data: Vec<T>,
    sizing: Sizing,
    padded: PaddedSequence<T>,
    session: ScrollSession,
    pending_refresh: bool,
    delegate: D,
}

impl<T: Clone> InfiniteScroll<T> {
    /// Creates a controller without host callbacks, positioned on logical item 0.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::InvalidConfiguration`] if `config.sizing`
    /// is invalid, and [`InfiniteScrollError::PaddingOverflow`] if the items
    /// are too small to pad the viewport.
    pub fn new(
        data: Vec<T>,
        viewport: Size,
        config: InfiniteScrollConfig,
    ) -> Result<Self, InfiniteScrollError> {
        Self::with_delegate(data, viewport, config, ())
    }
}

impl<T: Clone, D: ScrollDelegate<T>> InfiniteScroll<T, D> {
    /// Creates a controller with host callbacks, positioned on logical item 0.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::InvalidConfiguration`] if `config.sizing`
    /// is invalid, and [`InfiniteScrollError::PaddingOverflow`] if the items
    /// are too small to pad the viewport.
    pub fn with_delegate(
        data: Vec<T>,
        viewport: Size,
        config: InfiniteScrollConfig,
        delegate: D,
    ) -> Result<Self, InfiniteScrollError> {
        let (sizing, padded) = layout_for(&data, config, viewport)?;
        let mut this = Self {
            config,
            viewport,
            data,
            sizing,
            padded: PaddedSequence::default(),
            session: ScrollSession::default(),
            pending_refresh: false,
            delegate,
        };
        this.install(sizing, padded);
        Ok(this)
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> InfiniteScrollConfig {
        self.config
    }

    /// The scroll axis.
    #[must_use]
    pub fn axis(&self) -> ScrollAxis {
        self.config.axis
    }

    /// The resolved item extent and spacing.
    #[must_use]
    pub fn sizing(&self) -> Sizing {
        self.sizing
    }

    /// The last viewport size reported by the host.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// The logical data.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The padded sequence.
    #[must_use]
    pub fn padded(&self) -> &PaddedSequence<T> {
        &self.padded
    }

    /// The index mapping for the current padded sequence.
    #[must_use]
    pub fn mapping(&self) -> IndexMapping {
        self.padded.mapping()
    }

    /// The geometry scroll corrections are computed against.
    #[must_use]
    pub fn geometry(&self) -> ScrollGeometry {
        self.session.geometry()
    }

    /// The host callbacks.
    #[must_use]
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the host callbacks.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Number of items the host's list should show.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.padded.len()
    }

    /// The item at a padded position.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::OutOfRangeIndex`] if
    /// `padded_index >= item_count()`.
    pub fn item_at(&self, padded_index: usize) -> Result<ItemRef<'_, T>, InfiniteScrollError> {
        item_ref(&self.padded, padded_index)
    }

    /// All padded positions in order.
    pub fn items(&self) -> impl Iterator<Item = ItemRef<'_, T>> + '_ {
        let mapping = self.padded.mapping();
        self.padded
            .as_slice()
            .iter()
            .enumerate()
            .filter_map(move |(padded_index, item)| {
                let logical_index = mapping.to_logical(padded_index).ok()?;
                Some(ItemRef {
                    padded_index,
                    logical_index,
                    item,
                })
            })
    }

    /// Scroll offset that puts the padded item at the leading edge.
    #[must_use]
    pub fn offset_of_padded(&self, padded_index: usize) -> f64 {
        padded_index as f64 * self.sizing.stride()
    }

    /// The current scroll offset along the axis.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.session.offset()
    }

    /// The current scroll offset as a content offset point.
    #[must_use]
    pub fn content_offset(&self) -> Point {
        self.config.axis.point_at(self.session.offset())
    }

    /// Total content extent of the padded strip along the axis.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.session.geometry().padded_extent
    }

    /// The logical item at the leading edge of the viewport, if any.
    #[must_use]
    pub fn current_logical_index(&self) -> Option<usize> {
        self.logical_index_at(self.session.offset())
    }

    /// Scrolls so that a logical item sits at the leading edge.
    ///
    /// Returns the new offset, which the host should apply without animation.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::OutOfRangeIndex`] if `logical_index` is
    /// not a valid logical index. The offset is left unchanged.
    pub fn scroll_to(&mut self, logical_index: usize) -> Result<f64, InfiniteScrollError> {
        let padded_index = self.padded.mapping().to_padded(logical_index)?;
        let offset = self.offset_of_padded(padded_index);
        self.session.jump_to(offset);
        Ok(offset)
    }

    /// Handles a scroll-position-changed notification.
    ///
    /// Returns `Some(offset)` when the position entered a padding region and
    /// must be rewritten before the next frame.
    pub fn on_scroll_changed(&mut self, offset: f64) -> Option<f64> {
        self.session.on_scroll(offset).offset()
    }

    /// Point-based form of [`InfiniteScroll::on_scroll_changed`].
    ///
    /// Only the component along the scroll axis is consulted; the returned
    /// point has a zero cross-axis component.
    pub fn on_content_offset_changed(&mut self, offset: Point) -> Option<Point> {
        let axis = self.config.axis;
        self.on_scroll_changed(axis.offset_of(offset))
            .map(|offset| axis.point_at(offset))
    }

    /// Handles the end of all scrolling motion.
    pub fn on_scroll_settled(&mut self) {
        self.delegate.did_end_scrolling();
    }

    /// Handles the end of a drag gesture.
    ///
    /// If the content keeps decelerating, settling is reported later through
    /// [`InfiniteScroll::on_deceleration_ended`].
    pub fn on_drag_ended(&mut self, will_decelerate: bool) {
        if !will_decelerate {
            self.on_scroll_settled();
        }
    }

    /// Handles the end of deceleration after a fling.
    pub fn on_deceleration_ended(&mut self) {
        self.on_scroll_settled();
    }

    /// Handles a selection at a padded position.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::OutOfRangeIndex`] if
    /// `padded_index >= item_count()`; the delegate is not called.
    pub fn on_item_selected(&mut self, padded_index: usize) -> Result<(), InfiniteScrollError> {
        let item = item_ref(&self.padded, padded_index)?;
        self.delegate.did_select_item(item);
        Ok(())
    }

    /// Replaces the logical data, rebuilds the padding and returns to logical item 0.
    ///
    /// Any pending refresh is dropped. Returns the new scroll offset.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::PaddingOverflow`] if the padded length
    /// for `data` does not fit in a `usize`. The previous data stays active.
    pub fn reload(&mut self, data: Vec<T>) -> Result<f64, InfiniteScrollError> {
        let (sizing, padded) = layout_for(&data, self.config, self.viewport)?;
        self.data = data;
        self.pending_refresh = false;
        Ok(self.install(sizing, padded))
    }

    /// Replaces the configuration and rebuilds the padding.
    ///
    /// The recorded offset moves to logical item 0 of the new layout right
    /// away, but the host should not apply it until it calls
    /// [`InfiniteScroll::take_pending_refresh`] on its next frame, once any
    /// in-flight layout pass has completed. Until then, scroll notifications
    /// are recorded but never corrected, even across viewport resizes.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::InvalidConfiguration`] if
    /// `config.sizing` is invalid, and [`InfiniteScrollError::PaddingOverflow`]
    /// if its items are too small to pad the viewport. The previous
    /// configuration stays active.
    pub fn reconfigure(&mut self, config: InfiniteScrollConfig) -> Result<(), InfiniteScrollError> {
        let (sizing, padded) = layout_for(&self.data, config, self.viewport).inspect_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::warn!(?config, "rejected sizing configuration");
        })?;
        self.config = config;
        self.pending_refresh = true;
        self.install(sizing, padded);
        Ok(())
    }

    /// Returns `true` if a reconfiguration is waiting for its refresh.
    #[must_use]
    pub fn has_pending_refresh(&self) -> bool {
        self.pending_refresh
    }

    /// Completes a pending reconfiguration.
    ///
    /// Returns the offset of logical item 0, which the host should apply after
    /// reloading its list, or `None` if nothing was pending.
    pub fn take_pending_refresh(&mut self) -> Option<f64> {
        if !self.pending_refresh {
            return None;
        }
        self.pending_refresh = false;
        Some(self.reset_to_first())
    }

    /// Updates the viewport size.
    ///
    /// When the extent along the scroll axis changes, sizing and padding are
    /// recomputed and the logical item at the leading edge stays there.
    /// While a refresh is pending the offset goes to logical item 0 instead,
    /// and corrections stay suspended. Returns the resulting scroll offset.
    ///
    /// # Errors
    ///
    /// Returns [`InfiniteScrollError::InvalidConfiguration`] if the active
    /// sizing configuration cannot be resolved, and
    /// [`InfiniteScrollError::PaddingOverflow`] if its items are too small to
    /// pad the new viewport; nothing is changed.
    pub fn set_viewport_size(&mut self, viewport: Size) -> Result<f64, InfiniteScrollError> {
        let axis = self.config.axis;
        if axis.extent(viewport) == axis.extent(self.viewport) {
            self.viewport = viewport;
            return Ok(self.session.offset());
        }
        let (sizing, padded) = layout_for(&self.data, self.config, viewport)?;
        // The recorded offset predates the pending layout and anchors nothing.
        let anchor = if self.pending_refresh {
            None
        } else {
            self.current_logical_index()
        };
        self.viewport = viewport;
        let offset = self.install(sizing, padded);
        match anchor {
            Some(logical_index) => self.scroll_to(logical_index),
            None => Ok(offset),
        }
    }

    /// Size of every item, for the host's layout.
    ///
    /// Along the axis this is the item extent; across it, the viewport minus
    /// the delegate's inset on both edges.
    #[must_use]
    pub fn item_size(&self) -> Size {
        let axis = self.config.axis;
        let inset = self.delegate.cross_axis_inset(axis);
        let cross = (axis.cross_extent(self.viewport) - 2.0 * inset).max(0.0);
        axis.size(self.sizing.item_extent, cross)
    }

    /// Section insets for the host's layout.
    #[must_use]
    pub fn section_insets(&self) -> Insets {
        let axis = self.config.axis;
        axis.cross_insets(self.delegate.cross_axis_inset(axis))
    }

    /// Spacing between consecutive items along the axis.
    #[must_use]
    pub fn line_spacing(&self) -> f64 {
        self.sizing.spacing
    }

    /// Spacing between items across the axis; equal to the line spacing.
    #[must_use]
    pub fn interitem_spacing(&self) -> f64 {
        self.sizing.spacing
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> InfiniteScrollDebugInfo {
        let mapping = self.padded.mapping();
        InfiniteScrollDebugInfo {
            config: self.config,
            viewport: self.viewport,
            sizing: self.sizing,
            logical_len: mapping.logical_len(),
            padding_count: mapping.padding_count(),
            padded_len: mapping.padded_len(),
            geometry: self.session.geometry(),
            scroll_offset: self.session.offset(),
            corrections: self.session.corrections(),
            pending_refresh: self.pending_refresh,
        }
    }

    fn logical_index_at(&self, offset: f64) -> Option<usize> {
        let len = self.padded.len();
        if len == 0 {
            return None;
        }
        let stride = self.sizing.stride();
        let padded_index = if stride > 0.0 && offset.is_finite() {
            let index = libm::floor(offset.max(0.0) / stride);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Used only for index approximation; result is clamped immediately after"
            )]
            {
                index as usize
            }
        } else {
            0
        };
        self.padded.mapping().to_logical(padded_index.min(len - 1)).ok()
    }

    /// Swaps in a layout produced by [`layout_for`] and returns to logical item 0.
    fn install(&mut self, sizing: Sizing, padded: PaddedSequence<T>) -> f64 {
        self.sizing = sizing;
        self.padded = padded;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            logical_len = self.data.len(),
            padding_count = self.padded.padding_count(),
            padded_len = self.padded.len(),
            item_extent = sizing.item_extent,
            pending_refresh = self.pending_refresh,
            "rebuilt infinite scroll padding"
        );
        let geometry = ScrollGeometry::from_layout(sizing, self.padded.mapping());
        self.session.reset(geometry, 0.0);
        self.reset_to_first()
    }

    /// Moves the session to logical item 0, suspended while a refresh is pending.
    fn reset_to_first(&mut self) -> f64 {
        let offset = self
            .padded
            .mapping()
            .to_padded(0)
            .map_or(0.0, |padded_index| self.offset_of_padded(padded_index));
        self.session.reset(self.session.geometry(), offset);
        self.session.set_suspended(self.pending_refresh);
        offset
    }
}

/// Debug snapshot of an [`InfiniteScroll`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfiniteScrollDebugInfo {
    /// Active configuration.
    pub config: InfiniteScrollConfig,
    /// Last reported viewport size.
    pub viewport: Size,
    /// Resolved item extent and spacing.
    pub sizing: Sizing,
    /// Number of logical items.
    pub logical_len: usize,
    /// Padding items per side.
    pub padding_count: usize,
    /// Number of padded items.
    pub padded_len: usize,
    /// Geometry used for corrections.
    pub geometry: ScrollGeometry,
    /// Current scroll offset along the axis.
    pub scroll_offset: f64,
    /// Corrections applied since the last rebuild or reset.
    pub corrections: u64,
    /// Whether a reconfiguration is waiting for its refresh.
    pub pending_refresh: bool,
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Insets, Point, Size};

    use super::{InfiniteScroll, InfiniteScrollConfig, ItemRef};
    use crate::{InfiniteScrollError, ScrollAxis, ScrollDelegate, SizingConfig};

    fn fixed(extent: f64, spacing: f64) -> InfiniteScrollConfig {
        InfiniteScrollConfig::default().with_sizing(SizingConfig::FixedExtent { extent, spacing })
    }

    fn abc() -> InfiniteScroll<char> {
        InfiniteScroll::new(vec!['A', 'B', 'C'], Size::new(50.0, 20.0), fixed(10.0, 0.0))
            .unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        selected: Vec<(usize, usize, char)>,
        settled: usize,
    }

    impl ScrollDelegate<char> for Recorder {
        fn did_select_item(&mut self, item: ItemRef<'_, char>) {
            self.selected
                .push((item.padded_index, item.logical_index, *item.item));
        }

        fn did_end_scrolling(&mut self) {
            self.settled += 1;
        }

        fn cross_axis_inset(&self, _axis: ScrollAxis) -> f64 {
            3.0
        }
    }

    #[test]
    fn starts_on_first_logical_item() {
        let scroll = abc();
        assert_eq!(scroll.item_count(), 13);
        assert_eq!(scroll.scroll_offset(), 50.0);
        assert_eq!(scroll.current_logical_index(), Some(0));
        assert_eq!(scroll.content_offset(), Point::new(50.0, 0.0));
        assert_eq!(scroll.content_extent(), 130.0);
    }

    #[test]
    fn item_at_reports_logical_identity() {
        let scroll = abc();
        let item = scroll.item_at(0).unwrap();
        assert_eq!(item.logical_index, 1);
        assert_eq!(*item.item, 'B');
        assert_eq!(
            scroll.item_at(13),
            Err(InfiniteScrollError::OutOfRangeIndex { index: 13, len: 13 })
        );
    }

    #[test]
    fn items_iterates_every_padded_position() {
        let scroll = abc();
        let text: Vec<char> = scroll.items().map(|item| *item.item).collect();
        assert_eq!(text, "BCABCABCABCAB".chars().collect::<Vec<_>>());
        assert!(
            scroll
                .items()
                .all(|item| scroll.data()[item.logical_index] == *item.item)
        );
    }

    #[test]
    fn scroll_to_uses_padded_position() {
        let mut scroll = abc();
        assert_eq!(scroll.scroll_to(2), Ok(70.0));
        assert_eq!(scroll.current_logical_index(), Some(2));
        assert!(scroll.scroll_to(3).is_err());
        assert_eq!(scroll.scroll_offset(), 70.0);
    }

    #[test]
    fn corrections_apply_along_the_axis() {
        let config = fixed(10.0, 0.0).with_axis(ScrollAxis::Vertical);
        let mut scroll =
            InfiniteScroll::new(vec!['A', 'B', 'C'], Size::new(20.0, 50.0), config).unwrap();
        assert_eq!(scroll.on_content_offset_changed(Point::new(7.0, 60.0)), None);
        assert_eq!(
            scroll.on_content_offset_changed(Point::new(7.0, 90.0)),
            Some(Point::new(0.0, 50.0))
        );
        assert_eq!(
            scroll.on_content_offset_changed(Point::new(0.0, -1.0)),
            Some(Point::new(0.0, 30.0))
        );
        assert_eq!(scroll.debug_info().corrections, 2);
    }

    #[test]
    fn delegate_receives_selection_and_settling() {
        let mut scroll = InfiniteScroll::with_delegate(
            vec!['A', 'B', 'C'],
            Size::new(50.0, 20.0),
            fixed(10.0, 0.0),
            Recorder::default(),
        )
        .unwrap();

        scroll.on_item_selected(12).unwrap();
        assert_eq!(scroll.delegate().selected, [(12, 1, 'B')]);
        assert!(scroll.on_item_selected(13).is_err());
        assert_eq!(scroll.delegate().selected.len(), 1);

        scroll.on_drag_ended(true);
        assert_eq!(scroll.delegate().settled, 0);
        scroll.on_deceleration_ended();
        scroll.on_drag_ended(false);
        assert_eq!(scroll.delegate().settled, 2);
    }

    #[test]
    fn item_size_and_insets_use_delegate_inset() {
        let scroll = InfiniteScroll::with_delegate(
            vec!['A', 'B', 'C'],
            Size::new(50.0, 20.0),
            fixed(10.0, 2.0),
            Recorder::default(),
        )
        .unwrap();
        assert_eq!(scroll.item_size(), Size::new(10.0, 14.0));
        assert_eq!(scroll.section_insets(), Insets::new(0.0, 3.0, 0.0, 3.0));
        assert_eq!(scroll.line_spacing(), 2.0);
        assert_eq!(scroll.interitem_spacing(), 2.0);

        let plain = abc();
        assert_eq!(plain.item_size(), Size::new(10.0, 20.0));
        assert_eq!(plain.section_insets(), Insets::ZERO);
    }

    #[test]
    fn reconfigure_defers_refresh_and_suppresses_corrections() {
        let mut scroll = abc();
        let config =
            InfiniteScrollConfig::default().with_sizing(SizingConfig::CountPerViewport(2.0));
        scroll.scroll_to(2).unwrap();
        scroll.reconfigure(config).unwrap();
        assert!(scroll.has_pending_refresh());
        assert_eq!(scroll.sizing().item_extent, 25.0);
        assert_eq!(scroll.mapping().padding_count(), 2);
        // Queries already describe the new layout, positioned on item 0.
        assert_eq!(scroll.scroll_offset(), 50.0);
        assert_eq!(scroll.current_logical_index(), Some(0));
        assert_eq!(scroll.debug_info().scroll_offset, 50.0);
        assert_eq!(scroll.on_scroll_changed(0.0), None);

        assert_eq!(scroll.take_pending_refresh(), Some(50.0));
        assert!(!scroll.has_pending_refresh());
        assert_eq!(scroll.take_pending_refresh(), None);
        assert_eq!(scroll.on_scroll_changed(0.0), Some(75.0));
    }

    #[test]
    fn rejected_reconfigure_keeps_previous_state() {
        let mut scroll = abc();
        let before = scroll.debug_info();
        let config =
            InfiniteScrollConfig::default().with_sizing(SizingConfig::CountPerViewport(0.0));
        let err = scroll.reconfigure(config).unwrap_err();
        assert!(matches!(
            err,
            InfiniteScrollError::InvalidConfiguration { .. }
        ));
        assert_eq!(scroll.debug_info(), before);
    }

    #[test]
    fn resize_during_pending_refresh_stays_suspended() {
        let mut scroll = abc();
        scroll.scroll_to(2).unwrap();
        scroll.reconfigure(fixed(25.0, 0.0)).unwrap();
        let offset = scroll.set_viewport_size(Size::new(60.0, 20.0)).unwrap();
        assert_eq!(scroll.mapping().padding_count(), 3);
        assert!(scroll.has_pending_refresh());
        // Not re-anchored on the stale position: logical item 0 of the new strip.
        assert_eq!(offset, 75.0);
        assert_eq!(scroll.scroll_offset(), 75.0);
        assert_eq!(scroll.on_scroll_changed(0.0), None);
        assert_eq!(scroll.debug_info().corrections, 0);

        assert_eq!(scroll.take_pending_refresh(), Some(75.0));
        assert_eq!(scroll.on_scroll_changed(0.0), Some(75.0));
    }

    #[test]
    fn tiny_items_are_rejected_instead_of_padded() {
        let overflow = InfiniteScrollError::PaddingOverflow {
            len: 3,
            item_extent: 1e-6,
            viewport_extent: 1_000.0,
        };
        let result =
            InfiniteScroll::new(vec!['A', 'B', 'C'], Size::new(1_000.0, 20.0), fixed(1e-6, 0.0));
        assert_eq!(result.err(), Some(overflow));

        let mut scroll = abc();
        scroll.scroll_to(1).unwrap();
        let before = scroll.debug_info();
        assert_eq!(
            scroll.reconfigure(fixed(1e-6, 0.0)),
            Err(InfiniteScrollError::PaddingOverflow {
                len: 3,
                item_extent: 1e-6,
                viewport_extent: 50.0,
            })
        );
        assert_eq!(scroll.debug_info(), before);
        assert!(!scroll.has_pending_refresh());
    }

    #[test]
    fn rejected_resize_keeps_previous_layout() {
        let mut scroll =
            InfiniteScroll::new(vec!['A', 'B', 'C'], Size::new(50.0, 20.0), fixed(0.0078125, 0.0))
                .unwrap();
        assert_eq!(scroll.mapping().padding_count(), 6_400);
        let before = scroll.debug_info();
        assert!(matches!(
            scroll.set_viewport_size(Size::new(1_000.0, 20.0)),
            Err(InfiniteScrollError::PaddingOverflow { .. })
        ));
        assert_eq!(scroll.debug_info(), before);
        assert_eq!(scroll.viewport_size(), Size::new(50.0, 20.0));
    }

    #[test]
    fn reload_drops_pending_refresh() {
        let mut scroll = abc();
        scroll.reconfigure(fixed(25.0, 0.0)).unwrap();
        assert_eq!(scroll.reload(vec!['X', 'Y', 'Z', 'W']), Ok(50.0));
        assert!(!scroll.has_pending_refresh());
        assert_eq!(scroll.item_count(), 8);
        assert_eq!(scroll.on_scroll_changed(0.0), Some(100.0));
    }

    #[test]
    fn viewport_resize_keeps_leading_item() {
        let mut scroll = abc();
        scroll.scroll_to(1).unwrap();
        let offset = scroll.set_viewport_size(Size::new(20.0, 20.0)).unwrap();
        assert_eq!(scroll.mapping().padding_count(), 2);
        assert_eq!(offset, 30.0);
        assert_eq!(scroll.current_logical_index(), Some(1));

        // Cross-axis changes do not rebuild.
        let offset = scroll.set_viewport_size(Size::new(20.0, 99.0)).unwrap();
        assert_eq!(offset, 30.0);
        assert_eq!(scroll.item_count(), 7);
    }

    #[test]
    fn empty_data_is_inert() {
        let mut scroll =
            InfiniteScroll::<char>::new(Vec::new(), Size::new(50.0, 20.0), fixed(10.0, 0.0))
                .unwrap();
        assert_eq!(scroll.item_count(), 0);
        assert_eq!(scroll.scroll_offset(), 0.0);
        assert_eq!(scroll.current_logical_index(), None);
        assert_eq!(scroll.on_scroll_changed(0.0), None);
        assert_eq!(scroll.on_scroll_changed(500.0), None);
        assert!(scroll.scroll_to(0).is_err());
    }

    #[test]
    fn zero_viewport_is_tolerated() {
        let mut scroll =
            InfiniteScroll::new(vec![1_u8, 2, 3], Size::ZERO, InfiniteScrollConfig::default())
                .unwrap();
        assert_eq!(scroll.sizing().item_extent, 0.0);
        assert_eq!(scroll.item_count(), 3);
        assert_eq!(scroll.on_scroll_changed(0.0), None);

        let offset = scroll.set_viewport_size(Size::new(100.0, 30.0)).unwrap();
        assert_eq!(scroll.sizing().item_extent, 20.0);
        assert_eq!(scroll.mapping().padding_count(), 5);
        assert_eq!(offset, 100.0);
    }
}
