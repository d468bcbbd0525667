//! Midpoint circle rasterizers: outlined ring, filled disk, and the
//! per-quadrant variant used for rounded-rect corners
//!
//! All three share one state machine: x advances every step, y drops when
//! the error term flips sign. The ring and quadrant variants run a second
//! state machine for the inner radius so the per-column thickness follows
//! the ring instead of staying constant. The octant writes are guarded by
//! inequalities that keep adjacent octants from double-writing their seam
//! pixels; the quadrant variant mixes strict and non-strict forms so the
//! seams between enabled quadrants stay single-covered.

use crate::raster::pixel::{set_at, DrawnArea};
use crate::surface::Surface;

/// Outlined circle of the given thickness, centered on the half-pixel cross
/// at (x0, y0).
pub(crate) fn draw_circle_bresenham(
    surf: &mut Surface,
    x0: i32,
    y0: i32,
    radius: i32,
    thickness: i32,
    color: u32,
    area: &mut DrawnArea,
) {
    let mut f = 1 - radius;
    let mut ddf_x = 0;
    let mut ddf_y = -2 * radius;
    let mut x = 0;
    let mut y = radius;

    let mut i_y = radius - thickness;
    let mut i_f = 1 - i_y;
    let mut i_ddf_x = 0;
    let mut i_ddf_y = -2 * i_y;

    let mut thickness = thickness;

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        if i_f >= 0 {
            i_y -= 1;
            i_ddf_y += 2;
            i_f += i_ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x + 1;

        i_ddf_x += 2;
        i_f += i_ddf_x + 1;

        // ring thickness per column tracks the gap between the two walkers
        if thickness > 1 {
            thickness = y - i_y;
        }

        for i in 0..thickness {
            let y1 = y - i;
            if y0 + y1 - 1 >= y0 + x - 1 {
                set_at(surf, x0 + x - 1, y0 + y1 - 1, color, area);
                set_at(surf, x0 - x, y0 + y1 - 1, color, area);
            }
            if y0 - y1 <= y0 - x {
                set_at(surf, x0 + x - 1, y0 - y1, color, area);
                set_at(surf, x0 - x, y0 - y1, color, area);
            }
            if x0 + y1 - 1 >= x0 + x - 1 {
                set_at(surf, x0 + y1 - 1, y0 + x - 1, color, area);
                set_at(surf, x0 + y1 - 1, y0 - x, color, area);
            }
            if x0 - y1 <= x0 - x {
                set_at(surf, x0 - y1, y0 + x - 1, color, area);
                set_at(surf, x0 - y1, y0 - x, color, area);
            }
        }
    }
}

/// Filled disk. Each column step paints half-open vertical spans on both
/// sides of the center, so opposite quadrants meet without overlap.
pub(crate) fn draw_circle_filled(
    surf: &mut Surface,
    x0: i32,
    y0: i32,
    radius: i32,
    color: u32,
    area: &mut DrawnArea,
) {
    let mut f = 1 - radius;
    let mut ddf_x = 0;
    let mut ddf_y = -2 * radius;
    let mut x = 0;
    let mut y = radius;

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x + 1;

        for y1 in (y0 - x)..(y0 + x) {
            set_at(surf, x0 + y - 1, y1, color, area);
            set_at(surf, x0 - y, y1, color, area);
        }
        for y1 in (y0 - y)..(y0 + y) {
            set_at(surf, x0 + x - 1, y1, color, area);
            set_at(surf, x0 - x, y1, color, area);
        }
    }
}

/// Circle restricted to the enabled 90-degree quadrants. thickness == 0
/// fills the quadrant with vertical spans; otherwise it strokes a ring of
/// that thickness.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_circle_quadrant(
    surf: &mut Surface,
    x0: i32,
    y0: i32,
    radius: i32,
    thickness: i32,
    color: u32,
    top_right: bool,
    top_left: bool,
    bottom_left: bool,
    bottom_right: bool,
    area: &mut DrawnArea,
) {
    let mut f = 1 - radius;
    let mut ddf_x = 0;
    let mut ddf_y = -2 * radius;
    let mut x = 0;
    let mut y = radius;

    let mut i_y = radius - thickness;
    let mut i_f = 1 - i_y;
    let mut i_ddf_x = 0;
    let mut i_ddf_y = -2 * i_y;

    let mut thickness = thickness;

    // a one-pixel arc degenerates to the center's cardinal neighbors
    if radius == 1 {
        if top_right {
            set_at(surf, x0, y0 - 1, color, area);
        }
        if top_left {
            set_at(surf, x0 - 1, y0 - 1, color, area);
        }
        if bottom_left {
            set_at(surf, x0 - 1, y0, color, area);
        }
        if bottom_right {
            set_at(surf, x0, y0, color, area);
        }
        return;
    }

    if thickness != 0 {
        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            if i_f >= 0 {
                i_y -= 1;
                i_ddf_y += 2;
                i_f += i_ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x + 1;

            i_ddf_x += 2;
            i_f += i_ddf_x + 1;

            if thickness > 1 {
                thickness = y - i_y;
            }

            // The guards differ in strictness between quadrants so the
            // diagonal seam pixel of each quadrant is written exactly once.
            if top_right {
                for i in 0..thickness {
                    let y1 = y - i;
                    if y0 - y1 < y0 - x {
                        set_at(surf, x0 + x - 1, y0 - y1, color, area);
                    }
                    if x0 + y1 - 1 >= x0 + x - 1 {
                        set_at(surf, x0 + y1 - 1, y0 - x, color, area);
                    }
                }
            }
            if top_left {
                for i in 0..thickness {
                    let y1 = y - i;
                    if y0 - y1 <= y0 - x {
                        set_at(surf, x0 - x, y0 - y1, color, area);
                    }
                    if x0 - y1 < x0 - x {
                        set_at(surf, x0 - y1, y0 - x, color, area);
                    }
                }
            }
            if bottom_left {
                for i in 0..thickness {
                    let y1 = y - i;
                    if x0 - y1 <= x0 - x {
                        set_at(surf, x0 - y1, y0 + x - 1, color, area);
                    }
                    if y0 + y1 - 1 > y0 + x - 1 {
                        set_at(surf, x0 - x, y0 + y1 - 1, color, area);
                    }
                }
            }
            if bottom_right {
                for i in 0..thickness {
                    let y1 = y - i;
                    if y0 + y1 - 1 >= y0 + x - 1 {
                        set_at(surf, x0 + x - 1, y0 + y1 - 1, color, area);
                    }
                    if x0 + y1 - 1 > x0 + x - 1 {
                        set_at(surf, x0 + y1 - 1, y0 + x - 1, color, area);
                    }
                }
            }
        }
    } else {
        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x + 1;

            // filled quadrants: the top pair runs spans down to the center
            // row inclusive, the bottom pair starts at the center row and
            // stops short of the far edge
            if top_right {
                for y1 in (y0 - x)..=y0 {
                    set_at(surf, x0 + y - 1, y1, color, area);
                }
                for y1 in (y0 - y)..=y0 {
                    set_at(surf, x0 + x - 1, y1, color, area);
                }
            }
            if top_left {
                for y1 in (y0 - x)..=y0 {
                    set_at(surf, x0 - y, y1, color, area);
                }
                for y1 in (y0 - y)..=y0 {
                    set_at(surf, x0 - x, y1, color, area);
                }
            }
            if bottom_left {
                for y1 in y0..(y0 + x) {
                    set_at(surf, x0 - y, y1, color, area);
                }
                for y1 in y0..(y0 + y) {
                    set_at(surf, x0 - x, y1, color, area);
                }
            }
            if bottom_right {
                for y1 in y0..(y0 + x) {
                    set_at(surf, x0 + y - 1, y1, color, area);
                }
                for y1 in y0..(y0 + y) {
                    set_at(surf, x0 + x - 1, y1, color, area);
                }
            }
        }
    }
}
