//! Rounded rectangle, composed from polygon fill, thick lines and circle
//! quadrants
//!
//! Corners carry independent radii; a negative per-corner radius falls back
//! to the global one. When two adjacent corners together exceed the edge
//! between them, all four radii scale down by the smallest ratio that fits.
//! The filled form is an octagon through the eight tangent points plus four
//! filled quadrants; the outlined form is four thick side lines whose
//! centerline offset matches the thick-line growth direction, plus four
//! stroked quadrant arcs. A corner radius reduced to the point where a side
//! collapses leaves a gap that gets patched with a column or row of width
//! pixels.

use crate::raster::circle::draw_circle_quadrant;
use crate::raster::line::draw_line_width;
use crate::raster::pixel::{set_at, DrawnArea};
use crate::raster::poly::draw_fillpoly;
use crate::surface::Surface;

#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_round_rect(
    surf: &mut Surface,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    radius: i32,
    width: i32,
    color: u32,
    top_left: i32,
    top_right: i32,
    bottom_left: i32,
    bottom_right: i32,
    area: &mut DrawnArea,
) {
    let mut top_left = if top_left < 0 { radius } else { top_left };
    let mut top_right = if top_right < 0 { radius } else { top_right };
    let mut bottom_left = if bottom_left < 0 { radius } else { bottom_left };
    let mut bottom_right = if bottom_right < 0 { radius } else { bottom_right };

    if (top_left + top_right) > (x2 - x1 + 1)
        || (bottom_left + bottom_right) > (x2 - x1 + 1)
        || (top_left + bottom_left) > (y2 - y1 + 1)
        || (top_right + bottom_right) > (y2 - y1 + 1)
    {
        let q_top = (x2 - x1 + 1) as f32 / (top_left + top_right) as f32;
        let q_left = (y2 - y1 + 1) as f32 / (top_left + bottom_left) as f32;
        let q_bottom = (x2 - x1 + 1) as f32 / (bottom_left + bottom_right) as f32;
        let q_right = (y2 - y1 + 1) as f32 / (top_right + bottom_right) as f32;
        let f = q_top.min(q_left).min(q_bottom).min(q_right);
        top_left = (top_left as f32 * f) as i32;
        top_right = (top_right as f32 * f) as i32;
        bottom_left = (bottom_left as f32 * f) as i32;
        bottom_right = (bottom_right as f32 * f) as i32;
    }

    if width == 0 {
        // octagon through the eight tangent points, corners rounded off by
        // filled quadrants
        let octagon = [
            (x1, y1 + top_left),
            (x1 + top_left, y1),
            (x2 - top_right, y1),
            (x2, y1 + top_right),
            (x2, y2 - bottom_right),
            (x2 - bottom_right, y2),
            (x1 + bottom_left, y2),
            (x1, y2 - bottom_left),
        ];
        draw_fillpoly(surf, &octagon, color, area);
        draw_circle_quadrant(
            surf,
            x2 - top_right + 1,
            y1 + top_right,
            top_right,
            0,
            color,
            true,
            false,
            false,
            false,
            area,
        );
        draw_circle_quadrant(
            surf,
            x1 + top_left,
            y1 + top_left,
            top_left,
            0,
            color,
            false,
            true,
            false,
            false,
            area,
        );
        draw_circle_quadrant(
            surf,
            x1 + bottom_left,
            y2 - bottom_left + 1,
            bottom_left,
            0,
            color,
            false,
            false,
            true,
            false,
            area,
        );
        draw_circle_quadrant(
            surf,
            x2 - bottom_right + 1,
            y2 - bottom_right + 1,
            bottom_right,
            0,
            color,
            false,
            false,
            false,
            true,
            area,
        );
    } else {
        // side centerlines sit width/2 - 1 + width%2 inside the border,
        // matching where the thick line bundle grows
        let inset = width / 2 - 1 + width % 2;

        // top
        let (lx1, ly, lx2) = (x1 + top_left, y1 + inset, x2 - top_right);
        if lx2 == lx1 {
            for i in 0..width {
                set_at(surf, lx1, y1 + i, color, area);
            }
        } else {
            draw_line_width(surf, color, width, lx1, ly, lx2, ly, area);
        }

        // left
        let (lx, ly1, ly2) = (x1 + inset, y1 + top_left, y2 - bottom_left);
        if ly2 == ly1 {
            for i in 0..width {
                set_at(surf, x1 + i, ly1, color, area);
            }
        } else {
            draw_line_width(surf, color, width, lx, ly1, lx, ly2, area);
        }

        // bottom
        let (lx1, ly, lx2) = (x1 + bottom_left, y2 - width / 2, x2 - bottom_right);
        if lx2 == lx1 {
            for i in 0..width {
                set_at(surf, lx1, y2 - i, color, area);
            }
        } else {
            draw_line_width(surf, color, width, lx1, ly, lx2, ly, area);
        }

        // right
        let (lx, ly1, ly2) = (x2 - width / 2, y1 + top_right, y2 - bottom_right);
        if ly2 == ly1 {
            for i in 0..width {
                set_at(surf, x2 - i, ly1, color, area);
            }
        } else {
            draw_line_width(surf, color, width, lx, ly1, lx, ly2, area);
        }

        draw_circle_quadrant(
            surf,
            x2 - top_right + 1,
            y1 + top_right,
            top_right,
            width,
            color,
            true,
            false,
            false,
            false,
            area,
        );
        draw_circle_quadrant(
            surf,
            x1 + top_left,
            y1 + top_left,
            top_left,
            width,
            color,
            false,
            true,
            false,
            false,
            area,
        );
        draw_circle_quadrant(
            surf,
            x1 + bottom_left,
            y2 - bottom_left + 1,
            bottom_left,
            width,
            color,
            false,
            false,
            true,
            false,
            area,
        );
        draw_circle_quadrant(
            surf,
            x2 - bottom_right + 1,
            y2 - bottom_right + 1,
            bottom_right,
            width,
            color,
            false,
            false,
            false,
            true,
            area,
        );
    }
}
