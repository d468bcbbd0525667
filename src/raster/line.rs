//! Line rasterizers: Bresenham, parallel-offset thick lines, and
//! Xiaolin Wu antialiasing

use std::mem;

use crate::raster::pixel::{aa_color, set_at, DrawnArea};
use crate::surface::Surface;

/// Draw a one-pixel line with Bresenham's algorithm.
///
/// Both endpoints are always written. Single-point, horizontal and vertical
/// lines take dedicated paths; the general case keeps an error accumulator
/// seeded with half the major-axis delta.
pub(crate) fn draw_line(
    surf: &mut Surface,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: u32,
    area: &mut DrawnArea,
) {
    if x1 == x2 && y1 == y2 {
        set_at(surf, x1, y1, color, area);
        return;
    }
    if y1 == y2 {
        let step = if x1 < x2 { 1 } else { -1 };
        for i in 0..=(x1 - x2).abs() {
            set_at(surf, x1 + step * i, y1, color, area);
        }
        return;
    }
    if x1 == x2 {
        let step = if y1 < y2 { 1 } else { -1 };
        for i in 0..=(y1 - y2).abs() {
            set_at(surf, x1, y1 + step * i, color, area);
        }
        return;
    }

    let dx = (x2 - x1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let dy = (y2 - y1).abs();
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = (if dx > dy { dx } else { -dy }) / 2;
    let (mut x, mut y) = (x1, y1);

    while x != x2 || y != y2 {
        set_at(surf, x, y, color, area);
        let e2 = err;
        if e2 > -dx {
            err -= dy;
            x += sx;
        }
        if e2 < dy {
            err += dx;
            y += sy;
        }
    }
    set_at(surf, x2, y2, color, area);
}

/// Draw a line of the given width (>= 1) as a bundle of parallel lines.
///
/// The bundle grows perpendicular to the dominant axis, so the caps stay
/// flat. Offsets alternate +1, -1, +2, -2, ... from the center line; when
/// the width is even the last positive offset has no negative partner, which
/// leaves even-width lines one pixel heavier on the positive side. The
/// rounded-rect stroke depends on that exact growth.
pub(crate) fn draw_line_width(
    surf: &mut Surface,
    color: u32,
    width: i32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    area: &mut DrawnArea,
) {
    let (xinc, yinc) = if (x1 - x2).abs() > (y1 - y2).abs() {
        (0, 1)
    } else {
        (1, 0)
    };

    draw_line(surf, x1, y1, x2, y2, color, area);

    if width != 1 {
        let mut pass = 1;
        while pass < width {
            let off = pass / 2 + 1;
            draw_line(
                surf,
                x1 + xinc * off,
                y1 + yinc * off,
                x2 + xinc * off,
                y2 + yinc * off,
                color,
                area,
            );
            if pass + 1 < width {
                draw_line(
                    surf,
                    x1 - xinc * off,
                    y1 - yinc * off,
                    x2 - xinc * off,
                    y2 - yinc * off,
                    color,
                    area,
                );
            }
            pass += 2;
        }
    }
}

/// Draw an antialiased one-pixel line between float endpoints.
///
/// Wu's walk: classify steep lines by swapping axes, orient left-to-right,
/// then for every integer column write the floor row at `1 - frac` and the
/// row below at `frac` of the intersect height. The fringe row is skipped
/// once the intersect has passed the far endpoint, except in the last
/// column of a non-horizontal line where it is forced so the endpoint
/// doesn't drop out.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_aaline(
    surf: &mut Surface,
    color: u32,
    mut from_x: f32,
    mut from_y: f32,
    mut to_x: f32,
    mut to_y: f32,
    blend: bool,
    area: &mut DrawnArea,
) {
    let steep = (to_x - from_x).abs() < (to_y - from_y).abs();
    if steep {
        mem::swap(&mut from_x, &mut from_y);
        mem::swap(&mut to_x, &mut to_y);
    }
    if from_x > to_x {
        mem::swap(&mut from_x, &mut to_x);
        mem::swap(&mut from_y, &mut to_y);
    }

    let dx = to_x - from_x;
    let dy = to_y - from_y;
    let x_pixel_start = from_x as i32;
    let x_pixel_end = to_x as i32;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };
    let mut intersect_y = from_y + gradient * (from_x as i32 as f32 + 0.5 - from_x);

    for x in x_pixel_start..=x_pixel_end {
        // truncating cast, so the fringe test below matches screen rows
        let row = intersect_y as i32;

        let brightness = 1.0 - intersect_y + row as f32;
        let (px, py) = if steep { (row, x) } else { (x, row) };
        let pixel_color = aa_color(surf, px, py, color, brightness, blend);
        set_at(surf, px, py, pixel_color, area);

        if (row as f32) < to_y || (x == x_pixel_end && from_y != to_y) {
            let brightness = intersect_y - row as f32;
            let (px, py) = if steep { (row + 1, x) } else { (x, row + 1) };
            let pixel_color = aa_color(surf, px, py, color, brightness, blend);
            set_at(surf, px, py, pixel_color, area);
        }

        intersect_y += gradient;
    }
}
