use std::num::NonZeroU32;

use fractal_life::{
    Colour, Complex, Dimensions, MandelbrotColourMapKinds, PixelBuffer, Point, RenderParameters,
    Viewport, escape_value, render_fractal, step_automaton,
};

fn dimensions(width: u32, height: u32) -> Dimensions {
    Dimensions::new(width, height).unwrap()
}

fn one_to_one_viewport(width: u32, height: u32) -> Viewport {
    Viewport::new(dimensions(width, height), dimensions(width, height))
}

fn seeded(size: (u32, u32), live: &[(u32, u32)]) -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(dimensions(size.0, size.1), Colour::WHITE);

    for &(x, y) in live {
        buffer.set_pixel(Point { x, y }, Colour::BLACK).unwrap();
    }

    buffer
}

fn live_cells(buffer: &PixelBuffer) -> Vec<(u32, u32)> {
    buffer
        .dimensions()
        .points()
        .filter(|&p| buffer.pixel(p).unwrap().is_dark())
        .map(|p| (p.x, p.y))
        .collect()
}

#[test]
fn test_escape_value_at_origin_is_one() {
    let budget = NonZeroU32::new(100).unwrap();

    assert_eq!(escape_value(Complex::ZERO, budget), 1.0);
}

#[test]
fn test_escape_value_far_outside_escapes_early() {
    let budget = NonZeroU32::new(100).unwrap();

    assert!(escape_value(Complex::new(2.5, 0.0), budget) < 1.0);
    assert_eq!(escape_value(Complex::new(3.0, 3.0), budget), 0.01);
}

#[test]
fn test_small_grayscale_render_is_white_inside_dark_outside() {
    let viewport = one_to_one_viewport(4, 3);
    let params = RenderParameters::new(100, MandelbrotColourMapKinds::Grayscale).unwrap();

    let frame = render_fractal(&viewport, &params).unwrap();

    // cell (2, 1) sits on c = -0.5i, inside the set
    assert_eq!(frame.pixel(Point { x: 2, y: 1 }).unwrap(), Colour::WHITE);
    // cell (0, 0) sits on c = -2 - 1.5i and escapes after one step
    assert_eq!(frame.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::grey(2));
}

#[test]
fn test_render_is_idempotent() {
    let mut viewport = Viewport::new(dimensions(40, 30), dimensions(80, 60));
    viewport.zoom_at(13.0, 7.0, 2.5).unwrap();
    let params = RenderParameters::new(64, MandelbrotColourMapKinds::Fire).unwrap();

    let first = render_fractal(&viewport, &params).unwrap();
    let second = render_fractal(&viewport, &params).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_board_is_unchanged() {
    let board = seeded((5, 4), &[]);

    let next = step_automaton(&board, one_to_one_viewport(5, 4).layout()).unwrap();

    assert_eq!(next, board);
}

#[test]
fn test_l_shape_completes_into_block() {
    let board = seeded((6, 6), &[(1, 1), (2, 1), (1, 2)]);

    let next = step_automaton(&board, one_to_one_viewport(6, 6).layout()).unwrap();

    assert_eq!(live_cells(&next), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_block_across_the_corner_is_stable() {
    let corners = [(0, 0), (5, 0), (0, 4), (5, 4)];
    let board = seeded((6, 5), &corners);
    let layout = one_to_one_viewport(6, 5).layout();

    let next = step_automaton(&board, layout).unwrap();
    let after = step_automaton(&next, layout).unwrap();

    assert_eq!(live_cells(&next), vec![(0, 0), (5, 0), (0, 4), (5, 4)]);
    assert_eq!(after, board);
}

#[test]
fn test_render_then_evolve_keeps_canvas_size() {
    let viewport = Viewport::new(dimensions(16, 12), dimensions(32, 24));
    let params = RenderParameters::new(50, MandelbrotColourMapKinds::Rainbow).unwrap();
    let frame = render_fractal(&viewport, &params).unwrap();

    let next = step_automaton(&frame, viewport.layout()).unwrap();

    assert_eq!(next.dimensions(), frame.dimensions());
    for pixel in next.dimensions().points() {
        assert_eq!(next.alpha(pixel).unwrap(), 255);
    }
}
