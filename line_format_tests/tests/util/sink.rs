// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A geometry sink that records what it was asked to draw.

use line_format::peniko::Color;
use line_format::peniko::kurbo::{Point, Rect};
use line_format::{GeometrySink, SegmentDraw, modulate};
use text_block::Run;

/// One recorded draw of a run.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Quad {
    pub(crate) text: String,
    pub(crate) position: Point,
    pub(crate) line_height: f32,
    pub(crate) space_extra: f32,
    pub(crate) colour: Color,
    pub(crate) clip: Option<Rect>,
}

/// Records a [`Quad`] for every non-empty run it is asked to draw.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    /// Number of times `emit` was called, empty runs included.
    pub(crate) calls: usize,
}

impl GeometrySink<Run> for Recorder {
    type Geometry = Quad;

    fn emit(&mut self, run: &Run, draw: &SegmentDraw) -> impl IntoIterator<Item = Quad> {
        self.calls += 1;
        (!run.text().is_empty()).then(|| Quad {
            text: run.text().to_owned(),
            position: draw.position,
            line_height: draw.line_height,
            space_extra: draw.space_extra,
            colour: modulate(run.style().brush, draw.colour),
            clip: draw.clip,
        })
    }
}
