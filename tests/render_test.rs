//! Session frames laid out and encoded for the terminal.

use tui_snake::core::Session;
use tui_snake::settings::Settings;
use tui_snake::term::{encode_diff_into, CellStyle, FrameView, Viewport};
use tui_snake::types::{GRID_HEIGHT, GRID_WIDTH};

fn first_frame() -> String {
    let mut session = Session::new(Settings::default(), 11);
    session.frame(0).expect("first frame renders")
}

#[test]
fn test_frame_is_a_41_by_41_block() {
    let frame = first_frame();
    let lines: Vec<&str> = frame.lines().collect();
    assert_eq!(lines.len(), GRID_HEIGHT as usize);
    assert!(lines.iter().all(|l| l.chars().count() == GRID_WIDTH as usize));
    assert!(lines[0].starts_with("SCORE: 0 X"));
    assert_eq!(lines[40], "X".repeat(41));
}

#[test]
fn test_frame_centered_with_glyph_styles() {
    let frame = first_frame();
    let fb = FrameView::new().render(&frame, Viewport::new(81, 45));

    // 20 columns and 2 rows of margin.
    assert_eq!(fb.get(19, 2).map(|c| c.ch), Some(' '));
    assert_eq!(fb.get(20, 2).map(|c| c.ch), Some('S'));
    assert_eq!(fb.get(20, 2).map(|c| c.style), Some(CellStyle::TEXT));

    // Snake head at (10, 20), fruit at (31, 20).
    let head = fb.get(30, 22).unwrap();
    assert_eq!((head.ch, head.style), ('#', CellStyle::SNAKE));
    let fruit = fb.get(51, 22).unwrap();
    assert_eq!((fruit.ch, fruit.style), ('+', CellStyle::FRUIT));
    let corner = fb.get(60, 42).unwrap();
    assert_eq!((corner.ch, corner.style), ('X', CellStyle::BORDER));
}

#[test]
fn test_unchanged_frame_needs_no_output() {
    let mut session = Session::new(Settings::default(), 11);
    let frame = session.frame(0).unwrap();
    assert!(session.frame(16).is_none());

    let view = FrameView::new();
    let a = view.render(&frame, Viewport::new(50, 45));
    let b = view.render(&frame, Viewport::new(50, 45));
    let mut out = Vec::new();
    encode_diff_into(&a, &b, &mut out).unwrap();
    assert!(out.is_empty());

    session.invalidate();
    assert_eq!(session.frame(32).as_deref(), Some(frame.as_str()));
}

#[test]
fn test_small_terminal_clips_instead_of_panicking() {
    let frame = first_frame();
    let fb = FrameView::new().render(&frame, Viewport::new(10, 3));
    assert_eq!(fb.row_text(0), "SCORE: 0 X");
    assert_eq!(fb.width(), 10);
}
