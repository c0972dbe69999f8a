// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between formatting and rendering.

use peniko::Color;
use peniko::kurbo::{Point, Rect};

/// Where and how to draw one segment of a formatted line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentDraw {
    /// Top left corner of the segment.
    pub position: Point,
    /// Height of the line the segment belongs to, for vertical placement within the line.
    pub line_height: f32,
    /// Extra space to add after every space character of the segment (may be negative).
    pub space_extra: f32,
    /// Colour to modulate the segment's own colours with.
    pub colour: Option<Color>,
    /// Region to clip the segment's geometry to.
    pub clip: Option<Rect>,
}

/// Turns positioned line segments into renderable geometry.
///
/// `S` is the segment type of the text block being drawn.
pub trait GeometrySink<S: ?Sized> {
    /// Handle to a piece of geometry produced by the sink.
    type Geometry;

    /// Produces geometry for `segment` as described by `draw`.
    fn emit(&mut self, segment: &S, draw: &SegmentDraw)
    -> impl IntoIterator<Item = Self::Geometry>;
}

/// Returns `base` modulated by `modulation`, component by component, alpha included.
pub fn modulate(base: Color, modulation: Option<Color>) -> Color {
    let Some(modulation) = modulation else {
        return base;
    };
    let [r, g, b, a] = base.components;
    let [mr, mg, mb, ma] = modulation.components;
    Color::new([r * mr, g * mg, b * mb, a * ma])
}
