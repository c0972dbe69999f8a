// Copyright 2026 the Line Format Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for geometry emission.

use line_format::peniko::Color;
use line_format::peniko::kurbo::{Point, Rect};
use line_format::{AlignedText, Alignment, FormattedText, WrappedText};
use text_block::{FontId, RunStyle, RunText};

use crate::util::{LINE_HEIGHT, Quad, Recorder, area, measure, plain, wrap};

fn draw<F>(formatted: &F, origin: Point) -> Vec<Quad>
where
    F: FormattedText<Text = RunText>,
{
    formatted.emit_geometry(&mut Recorder::default(), &measure(), origin, None, None)
}

fn positions(quads: &[Quad]) -> Vec<(&str, Point)> {
    quads
        .iter()
        .map(|quad| (quad.text.as_str(), quad.position))
        .collect()
}

#[test]
fn draw_unformatted_text() {
    let wrapped = WrappedText::<RunText>::new(Alignment::Left);
    let mut recorder = Recorder::default();
    let quads = wrapped.emit_geometry(&mut recorder, &measure(), Point::ZERO, None, None);
    assert!(quads.is_empty(), "nothing to draw");
    assert_eq!(recorder.calls, 0, "sink never called");
}

#[test]
fn draw_empty_block() {
    let mut aligned = AlignedText::new(Alignment::Centre);
    aligned.format(&RunText::new(), &measure(), area(100.0));
    assert!(draw(&aligned, Point::ZERO).is_empty(), "no lines");
}

#[test]
fn draw_lines_top_to_bottom() {
    let wrapped = wrap(Alignment::Left, &plain("hello big world"), 100.0);
    let quads = draw(&wrapped, Point::new(5.0, 7.0));
    assert_eq!(
        positions(&quads),
        [
            ("hello big", Point::new(5.0, 7.0)),
            ("world", Point::new(5.0, 27.0)),
        ],
        "stacked lines"
    );
    assert!(
        quads.iter().all(|quad| quad.line_height == LINE_HEIGHT),
        "line height passed along"
    );
}

#[test]
fn draw_aligned_lines() {
    let wrapped = wrap(Alignment::Right, &plain("hello big world"), 100.0);
    assert_eq!(
        positions(&draw(&wrapped, Point::new(5.0, 0.0))),
        [
            ("hello big", Point::new(15.0, 0.0)),
            ("world", Point::new(55.0, 20.0)),
        ],
        "right aligned"
    );
}

#[test]
fn draw_justified_spacing() {
    let wrapped = wrap(Alignment::Justified, &plain("ab cde f ghijk"), 100.0);
    let quads = draw(&wrapped, Point::ZERO);
    let spacing: Vec<f32> = quads.iter().map(|quad| quad.space_extra).collect();
    assert_eq!(spacing, [10.0, 0.0], "last line not stretched");
}

#[test]
fn draw_advances_past_stretched_spaces() {
    let style = RunStyle::default();
    let mut text = RunText::new();
    text.push_run("ab ", style);
    text.push_run("cd", style);

    let mut aligned = AlignedText::new(Alignment::Justified);
    aligned.format(&text, &measure(), area(100.0));
    assert_eq!(
        positions(&draw(&aligned, Point::ZERO)),
        [("ab ", Point::ZERO), ("cd", Point::new(80.0, 0.0))],
        "second run starts after the widened space"
    );
}

#[test]
fn draw_offers_every_segment() {
    let aligned = {
        let mut aligned = AlignedText::new(Alignment::Left);
        aligned.format(&plain("a\n\nb"), &measure(), area(100.0));
        aligned
    };
    let mut recorder = Recorder::default();
    let quads = aligned.emit_geometry(&mut recorder, &measure(), Point::ZERO, None, None);
    assert_eq!(recorder.calls, 3, "every segment offered to the sink");
    assert_eq!(
        positions(&quads),
        [("a", Point::ZERO), ("b", Point::new(0.0, 40.0))],
        "empty line still takes up space"
    );
}

#[test]
fn draw_colour_and_clip() {
    let style = RunStyle {
        font: FontId(0),
        brush: Color::new([1.0, 0.5, 0.0, 1.0]),
    };
    let mut text = RunText::new();
    text.push_run("tinted", style);

    let mut aligned = AlignedText::new(Alignment::Left);
    aligned.format(&text, &measure(), area(100.0));

    let clip = Rect::new(0.0, 0.0, 30.0, 10.0);
    let colour = Color::new([0.5, 0.5, 0.5, 0.5]);
    let quads = aligned.emit_geometry(
        &mut Recorder::default(),
        &measure(),
        Point::ZERO,
        Some(colour),
        Some(clip),
    );
    assert_eq!(quads.len(), 1, "one run");
    assert_eq!(
        quads[0].colour.components,
        [0.5, 0.25, 0.0, 0.5],
        "modulated colour"
    );
    assert_eq!(quads[0].clip, Some(clip), "clip passed along");

    let plain_quads = draw(&aligned, Point::ZERO);
    assert_eq!(plain_quads[0].colour, style.brush, "own colour without modulation");
    assert_eq!(plain_quads[0].clip, None, "unclipped");
}

#[test]
fn draw_is_repeatable() {
    let wrapped = wrap(Alignment::Centre, &plain("hello big world"), 100.0);
    let first = draw(&wrapped, Point::new(1.0, 2.0));
    let second = draw(&wrapped, Point::new(1.0, 2.0));
    assert_eq!(first, second, "emitting does not change the formatting");

    let moved = draw(&wrapped, Point::new(11.0, 2.0));
    for (a, b) in first.iter().zip(&moved) {
        assert_eq!(b.position.x - a.position.x, 10.0, "origin only shifts geometry");
    }
}
