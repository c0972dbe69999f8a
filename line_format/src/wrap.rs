// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word wrapping.

use alloc::vec::Vec;

use peniko::Color;
use peniko::kurbo::{Point, Rect};
use text_block::{Extent, TextBlock};

use crate::alignment::{emit_stacked, stacked_extent};
use crate::{Alignment, AlignmentOptions, FormattedText, GeometrySink, LineFormatter};

/// Options for word wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// The maximum number of line splits performed by a single format.
    ///
    /// Once reached, wrapping stops and the lines are formatted as they are.
    ///
    /// The default is 65536.
    pub split_limit: usize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            split_limit: 1 << 16,
        }
    }
}

/// One line of word wrapped text and the formatter that places it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FormattedLine {
    line: usize,
    formatter: LineFormatter,
}

impl FormattedLine {
    /// The index of the line within the wrapped text block.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The formatter placing this line.
    pub fn formatter(&self) -> &LineFormatter {
        &self.formatter
    }
}

/// Text whose lines are word wrapped to fit the area width, then aligned.
///
/// Every over-wide line is split at the area width until it fits, or until it is a single
/// word that cannot be split further. The split pieces each become a line, aligned with the
/// configured [`Alignment`]. Justified text leaves its last line left aligned.
///
/// The caller's text block is never modified; formatting works on a clone owned by this
/// value.
#[derive(Clone, Debug)]
pub struct WrappedText<T: TextBlock> {
    alignment: Alignment,
    options: AlignmentOptions,
    wrap_options: WrapOptions,
    text: Option<T>,
    lines: Vec<FormattedLine>,
    original_line_count: usize,
    word_split: bool,
    extent: Extent,
}

impl<T: TextBlock> WrappedText<T> {
    /// Creates unformatted text with the given alignment.
    pub fn new(alignment: Alignment) -> Self {
        Self::with_options(alignment, AlignmentOptions::default(), WrapOptions::default())
    }

    /// Creates unformatted text with the given alignment and options.
    pub fn with_options(
        alignment: Alignment,
        options: AlignmentOptions,
        wrap_options: WrapOptions,
    ) -> Self {
        Self {
            alignment,
            options,
            wrap_options,
            text: None,
            lines: Vec::new(),
            original_line_count: 0,
            word_split: false,
            extent: Extent::ZERO,
        }
    }

    /// The alignment applied to the wrapped lines.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The formatted lines, in order.
    pub fn lines(&self) -> &[FormattedLine] {
        &self.lines
    }

    /// The wrapped text block, once formatted.
    pub fn text(&self) -> Option<&T> {
        self.text.as_ref()
    }

    /// Creates the formatter for a line: left aligned for the last line of justified text,
    /// the configured alignment otherwise.
    fn line_formatter(&self, is_last: bool) -> LineFormatter {
        if is_last && self.alignment == Alignment::Justified {
            LineFormatter::new(Alignment::Left, self.options)
        } else {
            LineFormatter::new(self.alignment, self.options)
        }
    }

    /// Splits the lines of `text` until each fits `width` or cannot be split any further.
    ///
    /// Returns the number of splits that produced a new line.
    fn wrap(&mut self, text: &mut T, metrics: &T::Metrics, width: f32) -> usize {
        let mut splits = 0;
        let mut line = 0;
        'lines: while line < text.line_count() {
            let mut line_width = text.line_extent(line, metrics).width;
            while line_width > width {
                if splits == self.wrap_options.split_limit {
                    log::warn!("stopped wrapping after {splits} splits");
                    break 'lines;
                }

                let split = text.split_line(line, metrics, width);
                self.word_split |= split.forced;
                if !split.remainder {
                    break;
                }
                splits += 1;

                let prefix_width = text.line_extent(line, metrics).width;
                if prefix_width >= line_width {
                    log::warn!(
                        "split of line {line} did not narrow it ({line_width} to {prefix_width})"
                    );
                    break;
                }

                // Start over from the first line after every split.
                line = 0;
                line_width = text.line_extent(line, metrics).width;
            }
            line += 1;
        }
        splits
    }
}

impl<T: TextBlock> FormattedText for WrappedText<T> {
    type Text = T;

    fn format(&mut self, text: &T, metrics: &T::Metrics, area: Extent) {
        self.word_split = false;
        self.lines.clear();
        self.original_line_count = text.line_count();

        let mut remaining = text.clone();
        let splits = self.wrap(&mut remaining, metrics, area.width);

        let line_count = remaining.line_count();
        self.lines = (0..line_count)
            .map(|line| {
                let mut formatter = self.line_formatter(line + 1 == line_count);
                formatter.format(&remaining, line, metrics, area.width);
                FormattedLine { line, formatter }
            })
            .collect();
        self.extent = stacked_extent(self.lines.iter().map(|line| &line.formatter));
        self.text = Some(remaining);

        log::debug!(
            "wrapped {} lines into {} with {splits} splits, word split: {}",
            self.original_line_count,
            line_count,
            self.word_split
        );
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
            self.lines.iter().map(|line| (line.line, &line.formatter)),
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
        self.original_line_count
    }

    fn horizontal_extent(&self) -> f32 {
        self.extent.width
    }

    fn vertical_extent(&self) -> f32 {
        self.extent.height
    }

    fn was_word_split(&self) -> bool {
        self.word_split
    }
}
