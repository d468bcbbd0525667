//! Midpoint ellipse rasterizer, integer-only with a 64-scaled rational step
//!
//! One routine serves both the solid and the outline form: the stepper
//! walks the first quadrant and mirrors, emitting either horizontal spans
//! (solid) or four symmetric plots (outline) whenever the derived row
//! indices move. Memo variables suppress re-emitting a row the stepper
//! lands on twice. Even bounding boxes shift the mirrored half by one pixel
//! through the parity offsets.

use crate::raster::line::draw_line;
use crate::raster::pixel::{set_at, DrawnArea};
use crate::surface::Surface;

pub(crate) fn draw_ellipse(
    surf: &mut Surface,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    solid: bool,
    color: u32,
    area: &mut DrawnArea,
) {
    let xoff = (width & 1) ^ 1;
    let yoff = (height & 1) ^ 1;
    let rx = width >> 1;
    let mut ry = height >> 1;

    // degenerate boxes collapse to a point or a line
    if rx == 0 && ry == 0 {
        set_at(surf, x, y, color, area);
        return;
    }
    if rx == 0 {
        draw_line(surf, x, y - ry, x, y + ry + (height & 1), color, area);
        return;
    }
    if ry == 0 {
        draw_line(surf, x - rx, y, x + rx + (width & 1), y, color, area);
        return;
    }

    ry += (solid as i32) - yoff;

    let mut oh = 0xFFFF;
    let mut oi = 0xFFFF;
    let mut oj = 0xFFFF;
    let mut ok = 0xFFFF;

    if rx >= ry {
        let mut ix = 0;
        let mut iy = rx * 64;

        loop {
            let h = (ix + 8) >> 6;
            let i = (iy + 8) >> 6;
            let j = (h * ry) / rx;
            let k = (i * ry) / rx;

            if ((ok != k) && (oj != k) && (k < ry)) || !solid {
                if solid {
                    draw_line(surf, x - h, y - k - yoff, x + h - xoff, y - k - yoff, color, area);
                    draw_line(surf, x - h, y + k, x + h - xoff, y + k, color, area);
                } else {
                    set_at(surf, x - h, y - k - yoff, color, area);
                    set_at(surf, x + h - xoff, y - k - yoff, color, area);
                    set_at(surf, x - h, y + k, color, area);
                    set_at(surf, x + h - xoff, y + k, color, area);
                }
                ok = k;
            }
            if ((oj != j) && (ok != j) && (k != j)) || !solid {
                if solid {
                    draw_line(surf, x - i, y + j, x + i - xoff, y + j, color, area);
                    draw_line(surf, x - i, y - j - yoff, x + i - xoff, y - j - yoff, color, area);
                } else {
                    set_at(surf, x - i, y + j, color, area);
                    set_at(surf, x + i - xoff, y + j, color, area);
                    set_at(surf, x - i, y - j - yoff, color, area);
                    set_at(surf, x + i - xoff, y - j - yoff, color, area);
                }
                oj = j;
            }

            ix += iy / rx;
            iy -= ix / rx;

            if i <= h {
                break;
            }
        }
    } else {
        let mut ix = 0;
        let mut iy = ry * 64;

        loop {
            let h = (ix + 8) >> 6;
            let i = (iy + 8) >> 6;
            let j = (h * rx) / ry;
            let k = (i * rx) / ry;

            if ((oi != i) && (oh != i) && (i < ry)) || !solid {
                if solid {
                    draw_line(surf, x - j, y + i, x + j - xoff, y + i, color, area);
                    draw_line(surf, x - j, y - i - yoff, x + j - xoff, y - i - yoff, color, area);
                } else {
                    set_at(surf, x - j, y + i, color, area);
                    set_at(surf, x + j - xoff, y + i, color, area);
                    set_at(surf, x - j, y - i - yoff, color, area);
                    set_at(surf, x + j - xoff, y - i - yoff, color, area);
                }
                oi = i;
            }
            if ((oh != h) && (oi != h) && (i != h)) || !solid {
                if solid {
                    draw_line(surf, x - k, y + h, x + k - xoff, y + h, color, area);
                    draw_line(surf, x - k, y - h - yoff, x + k - xoff, y - h - yoff, color, area);
                } else {
                    set_at(surf, x - k, y + h, color, area);
                    set_at(surf, x + k - xoff, y + h, color, area);
                    set_at(surf, x - k, y - h - yoff, color, area);
                    set_at(surf, x + k - xoff, y - h - yoff, color, area);
                }
                oh = h;
            }

            ix += iy / ry;
            iy -= ix / ry;

            if i <= h {
                break;
            }
        }
    }
}
