// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Error, Extent, LineSplit, Measure, OverflowWrap, Run, RunStyle, TextBlock};

type Runs = SmallVec<[Run; 2]>;

/// A block of styled text runs, broken into lines.
///
/// Lines are split at [wrap delimiters](crate::WRAP_DELIMITERS); words wider than the split
/// width are handled according to the block's [`OverflowWrap`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunText {
    lines: Vec<Runs>,
    overflow_wrap: OverflowWrap,
}

impl RunText {
    /// Creates a block with no lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a block from plain text, starting a new line at every `'\n'`.
    ///
    /// A `'\r'` directly before a line break is dropped. Every line, including an empty one,
    /// holds a single run in `style`.
    pub fn from_plain(text: &str, style: RunStyle) -> Self {
        let mut block = Self::new();
        for line in text.split('\n') {
            block.push_line();
            block.push_run(line.strip_suffix('\r').unwrap_or(line), style);
        }
        block
    }

    /// Sets how words wider than the split width are handled.
    #[must_use]
    pub fn with_overflow_wrap(mut self, overflow_wrap: OverflowWrap) -> Self {
        self.overflow_wrap = overflow_wrap;
        self
    }

    /// Sets how words wider than the split width are handled.
    pub fn set_overflow_wrap(&mut self, overflow_wrap: OverflowWrap) {
        self.overflow_wrap = overflow_wrap;
    }

    /// How words wider than the split width are handled.
    pub fn overflow_wrap(&self) -> OverflowWrap {
        self.overflow_wrap
    }

    /// Starts a new, empty line.
    pub fn push_line(&mut self) {
        self.lines.push(Runs::new());
    }

    /// Appends a run to the last line, starting the first line if there is none.
    pub fn push_run(&mut self, text: impl Into<String>, style: RunStyle) {
        if self.lines.is_empty() {
            self.push_line();
        }
        if let Some(line) = self.lines.last_mut() {
            line.push(Run::new(text, style));
        }
    }

    /// Returns `true` if the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the runs of `line`, or an error if there is no such line.
    pub fn try_line(&self, line: usize) -> Result<&[Run], Error> {
        self.lines
            .get(line)
            .map(|runs| runs.as_slice())
            .ok_or_else(|| Error::invalid_line(line, self.lines.len()))
    }

    /// Returns the extent of `line`, or an error if there is no such line.
    pub fn try_line_extent(
        &self,
        line: usize,
        measure: &(dyn Measure + 'static),
    ) -> Result<Extent, Error> {
        self.try_line(line)?;
        Ok(self.line_extent(line, measure))
    }

    /// Returns the concatenated text of `line`.
    ///
    /// # Panics
    ///
    /// If `line` is out of bounds.
    pub fn line_text(&self, line: usize) -> String {
        self.lines[line].iter().map(Run::text).collect()
    }
}

impl TextBlock for RunText {
    type Metrics = dyn Measure;
    type Segment = Run;

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_segments(&self, line: usize) -> &[Run] {
        &self.lines[line]
    }

    fn segment_extent(&self, segment: &Run, metrics: &Self::Metrics) -> Extent {
        segment.extent(metrics)
    }

    fn segment_space_count(&self, segment: &Run) -> usize {
        segment.space_count()
    }

    fn split_line(&mut self, line: usize, metrics: &Self::Metrics, width: f32) -> LineSplit {
        let runs = &mut self.lines[line];

        // Find the run in which the split point lies.
        let mut run_start = 0.0;
        let mut split_idx = None;
        for (idx, run) in runs.iter().enumerate() {
            let run_width = run.extent(metrics).width;
            if run_width > 0.0 && width <= run_start + run_width {
                split_idx = Some(idx);
                break;
            }
            run_start += run_width;
        }
        let Some(split_idx) = split_idx else {
            // The whole line already fits.
            return LineSplit::default();
        };

        let style = *runs[split_idx].style();
        let (left, forced) = runs[split_idx].split_off_prefix(
            metrics,
            width - run_start,
            run_start <= 0.0,
            self.overflow_wrap,
        );
        let mut rest: Runs = runs.drain(split_idx..).collect();
        if !left.text().is_empty() {
            runs.push(left);
        }
        while let Some(first) = rest.first_mut() {
            first.trim_start();
            if !first.text().is_empty() {
                break;
            }
            rest.remove(0);
        }

        if runs.iter().all(|run| run.text().is_empty()) && !rest.is_empty() {
            // Only whitespace preceded the split point; drop it and split what follows.
            *runs = rest;
            return self.split_line(line, metrics, width);
        }

        if runs.is_empty() {
            // Only whitespace was left in place; keep the line's height.
            runs.push(Run::new("", style));
        }

        let remainder = !rest.is_empty();
        if remainder {
            self.lines.insert(line + 1, rest);
        }
        LineSplit { remainder, forced }
    }
}
