// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A pixel extent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Extent {
    /// Horizontal size in pixels.
    pub width: f32,
    /// Vertical size in pixels.
    pub height: f32,
}

impl Extent {
    /// An extent with no width and no height.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new extent.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The outcome of [`TextBlock::split_line`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LineSplit {
    /// Whether a remainder line was split off and inserted after the split line.
    ///
    /// When this is `false` the line could not be reduced any further; callers must not
    /// split it again expecting progress.
    pub remainder: bool,
    /// Whether a single indivisible unit was wider than the target width.
    ///
    /// In that case the prefix left in place may still be wider than the target width.
    pub forced: bool,
}

/// Line-broken, measured text.
///
/// A text block is an ordered sequence of lines, each an ordered sequence of shaped
/// segments. Extents are measured against an opaque metrics context which is passed through
/// unchanged by formatters.
///
/// Line indices are checked like slice indices: passing a `line` that is not less than
/// [`line_count`](Self::line_count) panics.
pub trait TextBlock: Clone {
    /// The measurement basis for extent queries (for example a font and scale context).
    type Metrics: ?Sized;
    /// One shaped segment of a line.
    type Segment;

    /// Returns the number of lines.
    fn line_count(&self) -> usize;

    /// Returns the segments of `line`, in visual order.
    fn line_segments(&self, line: usize) -> &[Self::Segment];

    /// Returns the pixel extent of a single segment.
    fn segment_extent(&self, segment: &Self::Segment, metrics: &Self::Metrics) -> Extent;

    /// Returns the number of stretchable inter-word gaps within a single segment.
    fn segment_space_count(&self, segment: &Self::Segment) -> usize;

    /// Splits `line` so that it fits within `width`.
    ///
    /// The line is replaced in place by its fitting prefix. Whatever does not fit is inserted
    /// as a new line directly after it, shifting any following lines down by one.
    ///
    /// Implementations must make progress: when [`LineSplit::remainder`] is `true` the prefix
    /// must be strictly narrower than the line was before the split.
    fn split_line(&mut self, line: usize, metrics: &Self::Metrics, width: f32) -> LineSplit;

    /// Returns the pixel extent of `line`.
    ///
    /// The width is the sum of the segment widths and the height is the tallest segment.
    fn line_extent(&self, line: usize, metrics: &Self::Metrics) -> Extent {
        self.line_segments(line)
            .iter()
            .fold(Extent::ZERO, |acc, segment| {
                let extent = self.segment_extent(segment, metrics);
                Extent::new(acc.width + extent.width, acc.height.max(extent.height))
            })
    }

    /// Returns the number of stretchable inter-word gaps on `line`.
    fn space_count(&self, line: usize) -> usize {
        self.line_segments(line)
            .iter()
            .map(|segment| self.segment_space_count(segment))
            .sum()
    }

    /// Returns the extent of the whole block: the widest line by the sum of line heights.
    fn extent(&self, metrics: &Self::Metrics) -> Extent {
        (0..self.line_count()).fold(Extent::ZERO, |acc, line| {
            let extent = self.line_extent(line, metrics);
            Extent::new(acc.width.max(extent.width), acc.height + extent.height)
        })
    }
}
