// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various helper functions to assert truths during testing.

use line_format::{FormattedText, WrappedText};
use text_block::RunText;

/// Assert that two floats are equal to within a small tolerance.
pub(crate) fn assert_close(actual: f32, expected: f32, case: &str) {
    assert!(
        (actual - expected).abs() <= 1e-3,
        "{case}: expected {expected}, got {actual}"
    );
}

/// Assert that two formatted texts have the same lines, placements and extents.
pub(crate) fn assert_same_formatting(
    a: &WrappedText<RunText>,
    b: &WrappedText<RunText>,
    case: &str,
) {
    assert_eq!(
        a.formatted_line_count(),
        b.formatted_line_count(),
        "line count mismatch with {case}"
    );
    for (i, (line_a, line_b)) in a.lines().iter().zip(b.lines()).enumerate() {
        assert_eq!(line_a, line_b, "line {i} mismatch with {case}");
    }
    assert_eq!(a.text(), b.text(), "wrapped text mismatch with {case}");
    assert_eq!(
        a.horizontal_extent().to_bits(),
        b.horizontal_extent().to_bits(),
        "horizontal extent mismatch with {case}"
    );
    assert_eq!(
        a.vertical_extent().to_bits(),
        b.vertical_extent().to_bits(),
        "vertical extent mismatch with {case}"
    );
    assert_eq!(
        a.was_word_split(),
        b.was_word_split(),
        "word split mismatch with {case}"
    );
}
