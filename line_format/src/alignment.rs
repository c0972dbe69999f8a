// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-line horizontal placement.

use alloc::vec::Vec;

use peniko::Color;
use peniko::kurbo::{Point, Rect};
use text_block::{Extent, TextBlock};

use crate::sink::{GeometrySink, SegmentDraw};

/// Horizontal alignment of a line within the formatting area.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// The line starts at the left edge of the area.
    #[default]
    Left,
    /// The line ends at the right edge of the area.
    Right,
    /// The line is centred within the area.
    Centre,
    /// The line's inter-word gaps are stretched so that it spans the whole area.
    ///
    /// A line without gaps is left aligned.
    Justified,
}

/// Additional options to fine tune alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentOptions {
    /// If set to `true`, lines wider than the area still get an alignment offset or
    /// justification spacing, which may be negative: right and centre aligned lines
    /// overflow to the left, justified lines are compressed.
    ///
    /// If set to `false`, overflowing lines are left in place.
    ///
    /// The default is `true`.
    pub align_when_overflowing: bool,
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            align_when_overflowing: true,
        }
    }
}

/// Horizontal placement data computed for one line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LinePlacement {
    /// Offset of the line's start from the area's left edge.
    pub offset: f32,
    /// Extra space added to every inter-word gap.
    pub extra_space_per_gap: f32,
    /// Number of inter-word gaps on the line.
    pub gap_count: usize,
}

impl LinePlacement {
    /// Returns the width the line occupies once placed, given its natural width.
    pub fn rendered_width(&self, natural_width: f32) -> f32 {
        natural_width + self.gap_count as f32 * self.extra_space_per_gap
    }

    fn compute(
        alignment: Alignment,
        options: AlignmentOptions,
        natural_width: f32,
        gap_count: usize,
        area_width: f32,
    ) -> Self {
        let left = Self {
            gap_count,
            ..Self::default()
        };
        let free_space = area_width - natural_width;
        if !options.align_when_overflowing && free_space < 0.0 {
            return left;
        }

        match alignment {
            Alignment::Left => left,
            Alignment::Right => Self {
                offset: free_space,
                ..left
            },
            Alignment::Centre => Self {
                offset: free_space * 0.5,
                ..left
            },
            Alignment::Justified => {
                if gap_count == 0 {
                    return left;
                }
                Self {
                    extra_space_per_gap: free_space / gap_count as f32,
                    ..left
                }
            }
        }
    }
}

/// Places a single line of a text block according to one [`Alignment`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineFormatter {
    alignment: Alignment,
    options: AlignmentOptions,
    extent: Extent,
    placement: LinePlacement,
}

impl LineFormatter {
    /// Creates an unformatted line formatter.
    pub fn new(alignment: Alignment, options: AlignmentOptions) -> Self {
        Self {
            alignment,
            options,
            extent: Extent::ZERO,
            placement: LinePlacement::default(),
        }
    }

    /// The alignment this formatter applies.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The natural extent of the line, as measured by the last call to
    /// [`format`](Self::format).
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The placement computed by the last call to [`format`](Self::format).
    pub fn placement(&self) -> LinePlacement {
        self.placement
    }

    /// The width of the line once placed, including justification spacing.
    pub fn rendered_width(&self) -> f32 {
        self.placement.rendered_width(self.extent.width)
    }

    /// Measures `line` of `text` and computes its placement within `area_width`.
    pub fn format<T: TextBlock>(
        &mut self,
        text: &T,
        line: usize,
        metrics: &T::Metrics,
        area_width: f32,
    ) {
        self.extent = text.line_extent(line, metrics);
        self.placement = LinePlacement::compute(
            self.alignment,
            self.options,
            self.extent.width,
            text.space_count(line),
            area_width,
        );
    }

    /// Emits geometry for every segment of `line`, with the line's top left corner at
    /// `origin` before alignment.
    pub fn emit<T, G>(
        &self,
        text: &T,
        line: usize,
        metrics: &T::Metrics,
        sink: &mut G,
        origin: Point,
        colour: Option<Color>,
        clip: Option<Rect>,
        out: &mut Vec<G::Geometry>,
    ) where
        T: TextBlock,
        G: GeometrySink<T::Segment>,
    {
        let space_extra = self.placement.extra_space_per_gap;
        let mut x = origin.x + f64::from(self.placement.offset);
        for segment in text.line_segments(line) {
            let draw = SegmentDraw {
                position: Point::new(x, origin.y),
                line_height: self.extent.height,
                space_extra,
                colour,
                clip,
            };
            out.extend(sink.emit(segment, &draw));

            let gaps = text.segment_space_count(segment) as f32;
            x += f64::from(text.segment_extent(segment, metrics).width + gaps * space_extra);
        }
    }
}

/// Returns the extent of a stack of formatted lines: the widest rendered line by the sum of
/// the line heights.
pub(crate) fn stacked_extent<'a>(lines: impl IntoIterator<Item = &'a LineFormatter>) -> Extent {
    lines.into_iter().fold(Extent::ZERO, |acc, line| {
        Extent::new(
            acc.width.max(line.rendered_width()),
            acc.height + line.extent.height,
        )
    })
}

/// Emits a stack of formatted lines top to bottom, starting at `origin`.
pub(crate) fn emit_stacked<'a, T, G>(
    text: &T,
    lines: impl IntoIterator<Item = (usize, &'a LineFormatter)>,
    metrics: &T::Metrics,
    sink: &mut G,
    origin: Point,
    colour: Option<Color>,
    clip: Option<Rect>,
) -> Vec<G::Geometry>
where
    T: TextBlock,
    G: GeometrySink<T::Segment>,
{
    let mut out = Vec::new();
    let mut y = origin.y;
    for (line, formatter) in lines {
        formatter.emit(
            text,
            line,
            metrics,
            sink,
            Point::new(origin.x, y),
            colour,
            clip,
            &mut out,
        );
        y += f64::from(formatter.extent.height);
    }
    out
}
