// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph measurement for [`RunText`](crate::RunText).

use hashbrown::HashMap;

/// Identifies a font known to a [`Measure`] implementation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontId(pub u32);

/// Source of glyph metrics.
///
/// This is the metrics context of [`RunText`](crate::RunText); formatters pass it through
/// without inspecting it.
pub trait Measure {
    /// Returns the horizontal advance of `ch` when set in `font`.
    fn char_advance(&self, ch: char, font: FontId) -> f32;

    /// Returns the height of a line of text set in `font`.
    fn line_height(&self, font: FontId) -> f32;

    /// Returns the horizontal advance of `text` when set in `font`.
    fn advance(&self, text: &str, font: FontId) -> f32 {
        text.chars().map(|ch| self.char_advance(ch, font)).sum()
    }

    /// Returns the byte length of the longest prefix of `text` whose advance does not exceed
    /// `pixel`.
    fn char_at_pixel(&self, text: &str, font: FontId, pixel: f32) -> usize {
        let mut x = 0.0;
        for (idx, ch) in text.char_indices() {
            x += self.char_advance(ch, font);
            if x > pixel {
                return idx;
            }
        }
        text.len()
    }
}

/// Metrics where every character has the same advance, regardless of font.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Monospace {
    advance: f32,
    line_height: f32,
}

impl Monospace {
    /// Creates metrics with the given per-character `advance` and `line_height`.
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Measure for Monospace {
    fn char_advance(&self, _ch: char, _font: FontId) -> f32 {
        self.advance
    }

    fn line_height(&self, _font: FontId) -> f32 {
        self.line_height
    }

    fn advance(&self, text: &str, _font: FontId) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

/// Per-font tables of character advances and line heights.
///
/// Lookups that miss the table use the fallback advance and line height.
#[derive(Clone, Debug)]
pub struct AdvanceTable {
    advances: HashMap<(FontId, char), f32>,
    line_heights: HashMap<FontId, f32>,
    fallback_advance: f32,
    fallback_line_height: f32,
}

impl AdvanceTable {
    /// Creates an empty table with the given fallback metrics.
    pub fn new(fallback_advance: f32, fallback_line_height: f32) -> Self {
        Self {
            advances: HashMap::new(),
            line_heights: HashMap::new(),
            fallback_advance,
            fallback_line_height,
        }
    }

    /// Sets the advance of `ch` in `font`.
    pub fn set_advance(&mut self, font: FontId, ch: char, advance: f32) {
        self.advances.insert((font, ch), advance);
    }

    /// Sets the advance of every character of `chars` in `font`.
    pub fn set_advances(&mut self, font: FontId, chars: &str, advance: f32) {
        for ch in chars.chars() {
            self.set_advance(font, ch, advance);
        }
    }

    /// Sets the line height of `font`.
    pub fn set_line_height(&mut self, font: FontId, line_height: f32) {
        self.line_heights.insert(font, line_height);
    }
}

impl Measure for AdvanceTable {
    fn char_advance(&self, ch: char, font: FontId) -> f32 {
        self.advances
            .get(&(font, ch))
            .copied()
            .unwrap_or(self.fallback_advance)
    }

    fn line_height(&self, font: FontId) -> f32 {
        self.line_heights
            .get(&font)
            .copied()
            .unwrap_or(self.fallback_line_height)
    }
}
