// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::Color;
use peniko::kurbo::{Point, Rect};
use text_block::{Extent, TextBlock};

use crate::alignment::{emit_stacked, stacked_extent};
use crate::{Alignment, AlignmentOptions, FormattedText, GeometrySink, LineFormatter};

/// Text formatted line by line with a single [`Alignment`], without wrapping.
///
/// Justified text stretches every line, the last one included; use
/// [`WrappedText`](crate::WrappedText) for paragraph-style justification.
#[derive(Clone, Debug)]
pub struct AlignedText<T: TextBlock> {
    alignment: Alignment,
    options: AlignmentOptions,
    text: Option<T>,
    lines: Vec<LineFormatter>,
    extent: Extent,
}

impl<T: TextBlock> AlignedText<T> {
    /// Creates unformatted text with the given alignment.
    pub fn new(alignment: Alignment) -> Self {
        Self::with_options(alignment, AlignmentOptions::default())
    }

    /// Creates unformatted text with the given alignment and options.
    pub fn with_options(alignment: Alignment, options: AlignmentOptions) -> Self {
        Self {
            alignment,
            options,
            text: None,
            lines: Vec::new(),
            extent: Extent::ZERO,
        }
    }

    /// The alignment applied to every line.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The formatted lines, in order.
    pub fn lines(&self) -> &[LineFormatter] {
        &self.lines
    }
}

impl<T: TextBlock> FormattedText for AlignedText<T> {
    type Text = T;

    fn format(&mut self, text: &T, metrics: &T::Metrics, area: Extent) {
        self.lines = (0..text.line_count())
            .map(|line| {
                let mut formatter = LineFormatter::new(self.alignment, self.options);
                formatter.format(text, line, metrics, area.width);
                formatter
            })
            .collect();
        self.extent = stacked_extent(&self.lines);
        self.text = Some(text.clone());
    }

    fn emit_geometry<G>(
        &self,
        sink: &mut G,
        metrics: &T::Metrics,
        origin: Point,
        colour: Option<Color>,
        clip: Option<Rect>,
    ) -> Vec<G::Geometry>
    where
        G: GeometrySink<T::Segment>,
    {
        let Some(text) = &self.text else {
            log::debug!("emitting geometry for unformatted text");
            return Vec::new();
        };
        emit_stacked(
            text,
            self.lines.iter().enumerate(),
            metrics,
            sink,
            origin,
            colour,
            clip,
        )
    }

    fn is_formatted(&self) -> bool {
        self.text.is_some()
    }

    fn formatted_line_count(&self) -> usize {
        self.lines.len()
    }

    fn original_line_count(&self) -> usize {
        self.lines.len()
    }

    fn horizontal_extent(&self) -> f32 {
        self.extent.width
    }

    fn vertical_extent(&self) -> f32 {
        self.extent.height
    }

    fn was_word_split(&self) -> bool {
        false
    }
}
