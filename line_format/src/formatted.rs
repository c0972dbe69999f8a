// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use peniko::Color;
use peniko::kurbo::{Point, Rect};
use text_block::{Extent, TextBlock};

use crate::{AlignedText, Alignment, GeometrySink, WrappedText};

/// The metrics context of a text block.
pub type MetricsOf<T> = <T as TextBlock>::Metrics;

/// The segment type of a text block.
pub type SegmentOf<T> = <T as TextBlock>::Segment;

/// Formatted text, ready to be drawn.
///
/// An instance starts out unformatted. [`format`](Self::format) lays out a text block within
/// an area, replacing whatever the previous call produced; afterwards geometry can be
/// emitted any number of times until the text or the area changes.
///
/// Instances are not meant to be shared between threads while formatting or drawing.
pub trait FormattedText {
    /// The text block type this formatter lays out.
    type Text: TextBlock;

    /// Lays out `text` within `area`.
    ///
    /// Only `area.width` affects the layout. Formatting the same text with the same metrics
    /// and area again yields identical results.
    fn format(&mut self, text: &Self::Text, metrics: &MetricsOf<Self::Text>, area: Extent);

    /// Emits geometry for every formatted line, top to bottom, starting at `origin`.
    ///
    /// Returns an empty `Vec` if the text has not been formatted yet.
    fn emit_geometry<G>(
        &self,
        sink: &mut G,
        metrics: &MetricsOf<Self::Text>,
        origin: Point,
        colour: Option<Color>,
        clip: Option<Rect>,
    ) -> Vec<G::Geometry>
    where
        G: GeometrySink<SegmentOf<Self::Text>>;

    /// Returns `true` once [`format`](Self::format) has been called.
    fn is_formatted(&self) -> bool;

    /// The number of lines after formatting.
    fn formatted_line_count(&self) -> usize;

    /// The number of lines of the text block given to the last [`format`](Self::format).
    fn original_line_count(&self) -> usize;

    /// The width of the widest formatted line.
    fn horizontal_extent(&self) -> f32;

    /// The total height of all formatted lines.
    fn vertical_extent(&self) -> f32;

    /// Whether the last [`format`](Self::format) had to split a word, or keep a word wider
    /// than the area on its own line.
    fn was_word_split(&self) -> bool;
}

/// The horizontal formatting modes of a text widget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalFormatting {
    /// Lines are left aligned.
    #[default]
    LeftAligned,
    /// Lines are right aligned.
    RightAligned,
    /// Lines are centred.
    CentreAligned,
    /// Lines are justified.
    Justified,
    /// Lines are word wrapped and left aligned.
    WordWrapLeftAligned,
    /// Lines are word wrapped and right aligned.
    WordWrapRightAligned,
    /// Lines are word wrapped and centred.
    WordWrapCentreAligned,
    /// Lines are word wrapped and justified, except for the last one.
    WordWrapJustified,
}

impl HorizontalFormatting {
    /// Every formatting mode.
    pub const ALL: [Self; 8] = [
        Self::LeftAligned,
        Self::RightAligned,
        Self::CentreAligned,
        Self::Justified,
        Self::WordWrapLeftAligned,
        Self::WordWrapRightAligned,
        Self::WordWrapCentreAligned,
        Self::WordWrapJustified,
    ];

    /// Combines an alignment with whether words are wrapped.
    pub fn new(alignment: Alignment, word_wrap: bool) -> Self {
        match (alignment, word_wrap) {
            (Alignment::Left, false) => Self::LeftAligned,
            (Alignment::Right, false) => Self::RightAligned,
            (Alignment::Centre, false) => Self::CentreAligned,
            (Alignment::Justified, false) => Self::Justified,
            (Alignment::Left, true) => Self::WordWrapLeftAligned,
            (Alignment::Right, true) => Self::WordWrapRightAligned,
            (Alignment::Centre, true) => Self::WordWrapCentreAligned,
            (Alignment::Justified, true) => Self::WordWrapJustified,
        }
    }

    /// The alignment applied to lines.
    pub fn alignment(self) -> Alignment {
        match self {
            Self::LeftAligned | Self::WordWrapLeftAligned => Alignment::Left,
            Self::RightAligned | Self::WordWrapRightAligned => Alignment::Right,
            Self::CentreAligned | Self::WordWrapCentreAligned => Alignment::Centre,
            Self::Justified | Self::WordWrapJustified => Alignment::Justified,
        }
    }

    /// Whether lines wider than the area are wrapped.
    pub fn is_word_wrapped(self) -> bool {
        matches!(
            self,
            Self::WordWrapLeftAligned
                | Self::WordWrapRightAligned
                | Self::WordWrapCentreAligned
                | Self::WordWrapJustified
        )
    }

    /// The name of the mode, as used in look descriptions.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftAligned => "LeftAligned",
            Self::RightAligned => "RightAligned",
            Self::CentreAligned => "CentreAligned",
            Self::Justified => "Justified",
            Self::WordWrapLeftAligned => "WordWrapLeftAligned",
            Self::WordWrapRightAligned => "WordWrapRightAligned",
            Self::WordWrapCentreAligned => "WordWrapCentreAligned",
            Self::WordWrapJustified => "WordWrapJustified",
        }
    }
}

impl fmt::Display for HorizontalFormatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizontalFormatting {
    type Err = ParseFormattingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|formatting| formatting.as_str() == s)
            .ok_or(ParseFormattingError::UnknownName)
    }
}

/// An error returned from parsing a [`HorizontalFormatting`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseFormattingError {
    /// The input did not name a formatting mode.
    UnknownName,
}

impl fmt::Display for ParseFormattingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName => f.write_str("unknown horizontal formatting"),
        }
    }
}

impl core::error::Error for ParseFormattingError {}

/// A formatter for any [`HorizontalFormatting`], chosen at runtime.
#[derive(Clone, Debug)]
pub enum Formatter<T: TextBlock> {
    /// Lines are aligned as they are.
    Aligned(AlignedText<T>),
    /// Lines are word wrapped, then aligned.
    Wrapped(WrappedText<T>),
}

impl<T: TextBlock> Formatter<T> {
    /// Creates an unformatted formatter for `formatting`.
    pub fn new(formatting: HorizontalFormatting) -> Self {
        let alignment = formatting.alignment();
        if formatting.is_word_wrapped() {
            Self::Wrapped(WrappedText::new(alignment))
        } else {
            Self::Aligned(AlignedText::new(alignment))
        }
    }

    /// The formatting mode of this formatter.
    pub fn formatting(&self) -> HorizontalFormatting {
        match self {
            Self::Aligned(text) => HorizontalFormatting::new(text.alignment(), false),
            Self::Wrapped(text) => HorizontalFormatting::new(text.alignment(), true),
        }
    }
}

impl<T: TextBlock> From<AlignedText<T>> for Formatter<T> {
    fn from(text: AlignedText<T>) -> Self {
        Self::Aligned(text)
    }
}

impl<T: TextBlock> From<WrappedText<T>> for Formatter<T> {
    fn from(text: WrappedText<T>) -> Self {
        Self::Wrapped(text)
    }
}

impl<T: TextBlock> FormattedText for Formatter<T> {
    type Text = T;

    fn format(&mut self, text: &T, metrics: &T::Metrics, area: Extent) {
        match self {
            Self::Aligned(formatter) => formatter.format(text, metrics, area),
            Self::Wrapped(formatter) => formatter.format(text, metrics, area),
        }
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
        match self {
            Self::Aligned(formatter) => {
                formatter.emit_geometry(sink, metrics, origin, colour, clip)
            }
            Self::Wrapped(formatter) => {
                formatter.emit_geometry(sink, metrics, origin, colour, clip)
            }
        }
    }

    fn is_formatted(&self) -> bool {
        match self {
            Self::Aligned(formatter) => formatter.is_formatted(),
            Self::Wrapped(formatter) => formatter.is_formatted(),
        }
    }

    fn formatted_line_count(&self) -> usize {
        match self {
            Self::Aligned(formatter) => formatter.formatted_line_count(),
            Self::Wrapped(formatter) => formatter.formatted_line_count(),
        }
    }

    fn original_line_count(&self) -> usize {
        match self {
            Self::Aligned(formatter) => formatter.original_line_count(),
            Self::Wrapped(formatter) => formatter.original_line_count(),
        }
    }

    fn horizontal_extent(&self) -> f32 {
        match self {
            Self::Aligned(formatter) => formatter.horizontal_extent(),
            Self::Wrapped(formatter) => formatter.horizontal_extent(),
        }
    }

    fn vertical_extent(&self) -> f32 {
        match self {
            Self::Aligned(formatter) => formatter.vertical_extent(),
            Self::Wrapped(formatter) => formatter.vertical_extent(),
        }
    }

    fn was_word_split(&self) -> bool {
        match self {
            Self::Aligned(formatter) => formatter.was_word_split(),
            Self::Wrapped(formatter) => formatter.was_word_split(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HorizontalFormatting, ParseFormattingError};
    use crate::Alignment;

    #[test]
    fn names_round_trip() {
        for formatting in HorizontalFormatting::ALL {
            assert_eq!(
                formatting.as_str().parse::<HorizontalFormatting>(),
                Ok(formatting),
                "{formatting}"
            );
            assert_eq!(
                HorizontalFormatting::new(formatting.alignment(), formatting.is_word_wrapped()),
                formatting,
                "{formatting} decomposes"
            );
        }
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            "WordWrapCentred".parse::<HorizontalFormatting>(),
            Err(ParseFormattingError::UnknownName),
            "names are exact"
        );
    }

    #[test]
    fn wrap_modes() {
        assert!(
            HorizontalFormatting::WordWrapJustified.is_word_wrapped(),
            "wrapped"
        );
        assert!(!HorizontalFormatting::Justified.is_word_wrapped(), "not wrapped");
        assert_eq!(
            HorizontalFormatting::WordWrapCentreAligned.alignment(),
            Alignment::Centre,
            "alignment"
        );
    }
}
