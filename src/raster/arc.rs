//! Elliptical arc rasterizer
//!
//! Parametric sampling chained into aliased line segments. The angle step
//! is sized so consecutive samples on the larger radius stay about two
//! pixels apart, floored at 0.05 rad so huge radii don't explode the
//! segment count. Screen y grows downward, hence the sine sign flip.

use crate::raster::line::draw_line;
use crate::raster::pixel::DrawnArea;
use crate::surface::Surface;

#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_arc(
    surf: &mut Surface,
    x: i32,
    y: i32,
    radius1: i32,
    radius2: i32,
    angle_start: f64,
    angle_stop: f64,
    color: u32,
    area: &mut DrawnArea,
) {
    let mut a_step = if (radius1 as f64) < 1.0e-4 || (radius2 as f64) < 1.0e-4 {
        1.0
    } else {
        (2.0 / radius1.max(radius2) as f64).asin()
    };
    if a_step < 0.05 {
        a_step = 0.05;
    }

    let mut x_last = (x as f64 + angle_start.cos() * radius1 as f64) as i32;
    let mut y_last = (y as f64 - angle_start.sin() * radius2 as f64) as i32;

    let mut a = angle_start + a_step;
    while a <= angle_stop {
        let x_next = (x as f64 + a.cos() * radius1 as f64) as i32;
        let y_next = (y as f64 - a.sin() * radius2 as f64) as i32;
        draw_line(surf, x_last, y_last, x_next, y_next, color, area);
        x_last = x_next;
        y_last = y_next;
        a += a_step;
    }
}
