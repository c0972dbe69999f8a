// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text block that breaks the splitting contract.

use text_block::{Extent, LineSplit, TextBlock};

/// A block of fixed-width lines whose splits never narrow anything.
///
/// Every split claims to produce a remainder but inserts a copy of the line instead.
#[derive(Clone, Debug)]
pub(crate) struct StubbornText {
    widths: Vec<f32>,
}

impl StubbornText {
    pub(crate) fn new(widths: &[f32]) -> Self {
        Self {
            widths: widths.to_vec(),
        }
    }
}

impl TextBlock for StubbornText {
    type Metrics = ();
    type Segment = f32;

    fn line_count(&self) -> usize {
        self.widths.len()
    }

    fn line_segments(&self, line: usize) -> &[f32] {
        core::slice::from_ref(&self.widths[line])
    }

    fn segment_extent(&self, segment: &f32, _metrics: &()) -> Extent {
        Extent::new(*segment, 10.0)
    }

    fn segment_space_count(&self, _segment: &f32) -> usize {
        0
    }

    fn split_line(&mut self, line: usize, _metrics: &(), _width: f32) -> LineSplit {
        self.widths.insert(line + 1, self.widths[line]);
        LineSplit {
            remainder: true,
            forced: false,
        }
    }
}
