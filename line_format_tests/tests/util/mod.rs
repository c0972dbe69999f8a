// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;
mod sink;
mod stubborn;

pub(crate) use asserts::{assert_close, assert_same_formatting};
pub(crate) use sink::{Quad, Recorder};
pub(crate) use stubborn::StubbornText;

use line_format::{Alignment, FormattedText, WrappedText};
use text_block::{Extent, Monospace, RunStyle, RunText};

/// Advance of every character, in pixels.
pub(crate) const ADVANCE: f32 = 10.0;

/// Height of every line, in pixels.
pub(crate) const LINE_HEIGHT: f32 = 20.0;

/// Metrics where every character is [`ADVANCE`] wide and every line [`LINE_HEIGHT`] tall.
pub(crate) fn measure() -> Monospace {
    Monospace::new(ADVANCE, LINE_HEIGHT)
}

/// A block of plain text in the default style.
pub(crate) fn plain(text: &str) -> RunText {
    RunText::from_plain(text, RunStyle::default())
}

/// An area of the given width; only the width affects formatting.
pub(crate) fn area(width: f32) -> Extent {
    Extent::new(width, 200.0)
}

/// The text of every formatted line, in order.
pub(crate) fn wrapped_lines(wrapped: &WrappedText<RunText>) -> Vec<String> {
    let text = wrapped.text().expect("text was formatted");
    wrapped
        .lines()
        .iter()
        .map(|line| text.line_text(line.line()))
        .collect()
}

/// Formats `text` with word wrapping at `width`.
pub(crate) fn wrap(alignment: Alignment, text: &RunText, width: f32) -> WrappedText<RunText> {
    let mut wrapped = WrappedText::new(alignment);
    wrapped.format(text, &measure(), area(width));
    wrapped
}
