// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::Color;
use peniko::color::palette::css;

use crate::{Extent, FontId, Measure};

/// Characters at which lines may be wrapped.
pub const WRAP_DELIMITERS: &[char] = &[' ', '\t', '\r', '\n'];

/// Control over "emergency" line-breaking, named for the CSS property.
///
/// See: <https://www.w3.org/TR/css-text-3/#overflow-wrap-property>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OverflowWrap {
    /// Words are never broken; a word wider than the available width is kept whole.
    #[default]
    Normal,
    /// A word wider than the available width is broken after the last character that fits.
    Anywhere,
}

/// Style shared by every character of a [`Run`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunStyle {
    /// The font the run is set in.
    pub font: FontId,
    /// The colour of the run.
    pub brush: Color,
}

impl Default for RunStyle {
    fn default() -> Self {
        Self {
            font: FontId::default(),
            brush: css::WHITE,
        }
    }
}

/// A span of text with a single style.
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    text: String,
    style: RunStyle,
}

impl Run {
    /// Creates a new run.
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// The text of the run.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The style of the run.
    pub fn style(&self) -> &RunStyle {
        &self.style
    }

    /// Returns the pixel extent of the run.
    ///
    /// An empty run has no width but still occupies a line's height.
    pub fn extent(&self, measure: &dyn Measure) -> Extent {
        Extent::new(
            measure.advance(&self.text, self.style.font),
            measure.line_height(self.style.font),
        )
    }

    /// Returns the number of space characters in the run.
    ///
    /// Tabs are not counted; they are not stretched by justification.
    pub fn space_count(&self) -> usize {
        self.text.chars().filter(|&ch| ch == ' ').count()
    }

    /// Removes leading wrap delimiters.
    pub(crate) fn trim_start(&mut self) {
        let trimmed = self.text.len() - self.text.trim_start_matches(WRAP_DELIMITERS).len();
        self.text.replace_range(..trimmed, "");
    }

    /// Splits off the longest prefix of whole tokens that fits within `split_point`.
    ///
    /// The prefix is returned and `self` keeps the remainder, without its leading delimiters.
    /// When the run starts its line and not even the first token fits, that token is taken
    /// anyway, whole or broken according to `overflow_wrap`, and the split is reported as
    /// forced.
    pub(crate) fn split_off_prefix(
        &mut self,
        measure: &dyn Measure,
        split_point: f32,
        at_line_start: bool,
        overflow_wrap: OverflowWrap,
    ) -> (Self, bool) {
        let font = self.style.font;
        let mut left_len = 0;
        let mut left_extent = 0.0;
        let mut forced = false;

        while left_len < self.text.len() {
            let token_len = next_token_len(&self.text, left_len);
            if token_len == 0 {
                break;
            }
            let token = &self.text[left_len..left_len + token_len];
            let token_extent = measure.advance(token, font);

            if left_extent + token_extent > split_point {
                if at_line_start && left_len == 0 {
                    forced = true;
                    left_len = match overflow_wrap {
                        OverflowWrap::Normal => token_len,
                        OverflowWrap::Anywhere => {
                            // At least the leading delimiters and one character of the word.
                            let word = token.trim_start_matches(WRAP_DELIMITERS);
                            let min_len = token.len() - word.len()
                                + word.chars().next().map_or(0, char::len_utf8);
                            measure
                                .char_at_pixel(token, font, split_point)
                                .max(min_len)
                        }
                    };
                }
                break;
            }

            left_len += token_len;
            left_extent += token_extent;
        }

        let left = Self::new(&self.text[..left_len], self.style);
        self.text.replace_range(..left_len, "");
        self.trim_start();
        (left, forced)
    }
}

fn is_delimiter(ch: char) -> bool {
    WRAP_DELIMITERS.contains(&ch)
}

/// Returns the length of the token starting at `start`: any leading delimiters plus the word
/// that follows them. Trailing delimiters with no word after them are not a token.
fn next_token_len(text: &str, start: usize) -> usize {
    let rest = &text[start..];
    let Some(word_start) = rest.find(|ch| !is_delimiter(ch)) else {
        return 0;
    };
    rest[word_start..]
        .find(is_delimiter)
        .map_or(rest.len(), |word_len| word_start + word_len)
}
