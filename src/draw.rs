//! Public drawing operations
//!
//! Each operation resolves the color through the surface's format, validates
//! its inputs, locks the surface for the duration of the draw, and returns
//! the tight bounding rect of every pixel it changed. A call that touches
//! nothing returns a zero-size rect at the operation's anchor point.

use std::f64::consts::PI;

use crate::color::Color;
use crate::error::DrawError;
use crate::raster::arc::draw_arc;
use crate::raster::circle::{draw_circle_bresenham, draw_circle_filled, draw_circle_quadrant};
use crate::raster::ellipse::draw_ellipse;
use crate::raster::line::{draw_aaline, draw_line_width};
use crate::raster::pixel::DrawnArea;
use crate::raster::poly::draw_fillpoly;
use crate::raster::round_rect::draw_round_rect;
use crate::rect::Rect;
use crate::surface::Surface;

/// Which 90-degree sectors of a circle to draw. All false means the full
/// circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quadrants {
    pub top_right: bool,
    pub top_left: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Quadrants {
    /// No sector selected: the full circle
    pub fn full() -> Self {
        Self::default()
    }

    #[inline]
    fn any(&self) -> bool {
        self.top_right || self.top_left || self.bottom_left || self.bottom_right
    }
}

/// Per-corner border radii for [`rect`]. Negative entries fall back to the
/// call's global `border_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerRadii {
    pub top_left: i32,
    pub top_right: i32,
    pub bottom_left: i32,
    pub bottom_right: i32,
}

impl Default for CornerRadii {
    fn default() -> Self {
        Self {
            top_left: -1,
            top_right: -1,
            bottom_left: -1,
            bottom_right: -1,
        }
    }
}

impl CornerRadii {
    fn all_unset(&self) -> bool {
        self.top_left <= 0 && self.top_right <= 0 && self.bottom_left <= 0 && self.bottom_right <= 0
    }
}

fn check_depth(surf: &Surface) -> Result<(), DrawError> {
    match surf.bytes_per_pixel() {
        1..=4 => Ok(()),
        depth => Err(DrawError::UnsupportedBitDepth(depth)),
    }
}

/// Run a draw closure with the surface locked, releasing the lock on the
/// way out regardless of what the closure did.
fn with_lock<R>(
    surf: &mut Surface,
    draw: impl FnOnce(&mut Surface) -> R,
) -> Result<R, DrawError> {
    if !surf.lock() {
        return Err(DrawError::Lock);
    }
    let out = draw(surf);
    if !surf.unlock() {
        return Err(DrawError::Unlock);
    }
    Ok(out)
}

/// Draw an antialiased line between float endpoints. With `blend` the
/// fringe pixels mix against the existing background; without it they are
/// the color scaled by coverage.
pub fn aaline(
    surf: &mut Surface,
    color: impl Into<Color>,
    start: (f32, f32),
    end: (f32, f32),
    blend: bool,
) -> Result<Rect, DrawError> {
    check_depth(surf)?;
    let color = color.into().map(surf.format());

    let mut area = DrawnArea::new();
    with_lock(surf, |surf| {
        draw_aaline(surf, color, start.0, start.1, end.0, end.1, blend, &mut area);
    })?;
    Ok(area.to_rect(start.0 as i32, start.1 as i32))
}

/// Draw a line of the given width between integer endpoints. Width < 1
/// draws nothing.
pub fn line(
    surf: &mut Surface,
    color: impl Into<Color>,
    start: (i32, i32),
    end: (i32, i32),
    width: i32,
) -> Result<Rect, DrawError> {
    check_depth(surf)?;
    let color = color.into().map(surf.format());

    if width < 1 {
        return Ok(Rect::empty_at(start.0, start.1));
    }

    let mut area = DrawnArea::new();
    with_lock(surf, |surf| {
        draw_line_width(surf, color, width, start.0, start.1, end.0, end.1, &mut area);
    })?;
    Ok(area.to_rect(start.0, start.1))
}

/// Draw a chain of antialiased segments through the points; `closed` joins
/// the last point back to the first when there are more than two.
pub fn aalines(
    surf: &mut Surface,
    color: impl Into<Color>,
    closed: bool,
    points: &[(f32, f32)],
    blend: bool,
) -> Result<Rect, DrawError> {
    check_depth(surf)?;
    let color = color.into().map(surf.format());

    if points.len() < 2 {
        return Err(DrawError::TooFewPoints { min: 2 });
    }
    let anchor = (points[0].0 as i32, points[0].1 as i32);

    let mut area = DrawnArea::new();
    with_lock(surf, |surf| {
        for pair in points.windows(2) {
            draw_aaline(
                surf, color, pair[0].0, pair[0].1, pair[1].0, pair[1].1, blend, &mut area,
            );
        }
        if closed && points.len() > 2 {
            let last = points[points.len() - 1];
            let first = points[0];
            draw_aaline(surf, color, last.0, last.1, first.0, first.1, blend, &mut area);
        }
    })?;
    Ok(area.to_rect(anchor.0, anchor.1))
}

/// Draw a chain of width-pixel segments through the points; `closed` joins
/// the last point back to the first when there are more than two.
pub fn lines(
    surf: &mut Surface,
    color: impl Into<Color>,
    closed: bool,
    points: &[(i32, i32)],
    width: i32,
) -> Result<Rect, DrawError> {
    check_depth(surf)?;
    let color = color.into().map(surf.format());

    if points.len() < 2 {
        return Err(DrawError::TooFewPoints { min: 2 });
    }
    let anchor = points[0];

    if width < 1 {
        return Ok(Rect::empty_at(anchor.0, anchor.1));
    }

    let mut area = DrawnArea::new();
    with_lock(surf, |surf| {
        for pair in points.windows(2) {
            draw_line_width(
                surf, color, width, pair[0].0, pair[0].1, pair[1].0, pair[1].1, &mut area,
            );
        }
        if closed && points.len() > 2 {
            let last = points[points.len() - 1];
            let first = points[0];
            draw_line_width(surf, color, width, last.0, last.1, first.0, first.1, &mut area);
        }
    })?;
    Ok(area.to_rect(anchor.0, anchor.1))
}

/// Draw an elliptical arc inscribed in `rect` from `start_angle` to
/// `stop_angle` (radians, counterclockwise, 0 at three o'clock). A stop
/// angle behind the start wraps forward one turn. Width stacks concentric
/// arcs inward.
pub fn arc(
    surf: &mut Surface,
    color: impl Into<Color>,
    rect: Rect,
    start_angle: f64,
    stop_angle: f64,
    width: i32,
) -> Result<Rect, DrawError> {
    check_depth(surf)?;
    let color = color.into().map(surf.format());

    if width < 0 {
        return Ok(Rect::empty_at(rect.x, rect.y));
    }
    let mut width = width;
    if width > rect.w / 2 || width > rect.h / 2 {
        width = (rect.w / 2).max(rect.h / 2);
    }

    let mut stop_angle = stop_angle;
    if stop_angle < start_angle {
        stop_angle += 2.0 * PI;
    }

    let mut area = DrawnArea::new();
    with_lock(surf, |surf| {
        let width = width.min(rect.w.min(rect.h) / 2);
        for k in 0..width {
            draw_arc(
                surf,
                rect.x + rect.w / 2,
                rect.y + rect.h / 2,
                rect.w / 2 - k,
                rect.h / 2 - k,
                start_angle,
                stop_angle,
                color,
                &mut area,
            );
        }
    })?;
    Ok(area.to_rect(rect.x, rect.y))
}

/// Draw an ellipse inscribed in `rect`: filled when width == 0, otherwise
/// an outline stacked `width` deep.
pub fn ellipse(
    surf: &mut Surface,
    color: impl Into<Color>,
    rect: Rect,
    width: i32,
) -> Result<Rect, DrawError> {
    check_depth(surf)?;
    let color = color.into().map(surf.format());

    if width < 0 {
        return Ok(Rect::empty_at(rect.x, rect.y));
    }
    let mut width = width;
    if width > rect.w / 2 || width > rect.h / 2 {
        width = (rect.w / 2).max(rect.h / 2);
    }

    let mut area = DrawnArea::new();
    with_lock(surf, |surf| {
        if width == 0 {
            draw_ellipse(
                surf,
                rect.x + rect.w / 2,
                rect.y + rect.h / 2,
                rect.w,
                rect.h,
                true,
                color,
                &mut area,
            );
        } else {
            let width = width.min(rect.w.min(rect.h) / 2);
            for k in 0..width {
                draw_ellipse(
                    surf,
                    rect.x + rect.w / 2,
                    rect.y + rect.h / 2,
                    rect.w - k,
                    rect.h - k,
                    false,
                    color,
                    &mut area,
                );
            }
        }
    })?;
    Ok(area.to_rect(rect.x, rect.y))
}

/// Draw a circle around `center`: filled when width == 0 (or when the
/// outline would be as thick as the radius), otherwise an outline ring.
/// Selecting quadrants restricts drawing to those sectors. Radius < 1 or
/// width < 0 draws nothing.
pub fn circle(
    surf: &mut Surface,
    color: impl Into<Color>,
    center: (i32, i32),
    radius: i32,
    width: i32,
    quadrants: Quadrants,
) -> Result<Rect, DrawError> {
    check_depth(surf)?;
    let color = color.into().map(surf.format());

    if radius < 1 || width < 0 {
        return Ok(Rect::empty_at(center.0, center.1));
    }
    let width = width.min(radius);

    let mut area = DrawnArea::new();
    with_lock(surf, |surf| {
        if !quadrants.any() {
            if width == 0 || width == radius {
                draw_circle_filled(surf, center.0, center.1, radius, color, &mut area);
            } else {
                draw_circle_bresenham(surf, center.0, center.1, radius, width, color, &mut area);
            }
        } else {
            draw_circle_quadrant(
                surf,
                center.0,
                center.1,
                radius,
                width,
                color,
                quadrants.top_right,
                quadrants.top_left,
                quadrants.bottom_left,
                quadrants.bottom_right,
                &mut area,
            );
        }
    })?;
    Ok(area.to_rect(center.0, center.1))
}

/// Draw a polygon through the points: filled when width == 0, otherwise the
/// closed outline at that line width.
pub fn polygon(
    surf: &mut Surface,
    color: impl Into<Color>,
    points: &[(i32, i32)],
    width: i32,
) -> Result<Rect, DrawError> {
    let color = color.into();

    if width > 0 {
        return lines(surf, color, true, points, width);
    }

    check_depth(surf)?;
    let color = color.map(surf.format());

    if points.len() < 3 {
        return Err(DrawError::TooFewPoints { min: 3 });
    }
    let anchor = points[0];

    let mut area = DrawnArea::new();
    with_lock(surf, |surf| {
        draw_fillpoly(surf, points, color, &mut area);
    })?;
    Ok(area.to_rect(anchor.0, anchor.1))
}

/// Draw a rectangle: filled when width == 0, otherwise outlined. With all
/// radii unset this is exactly the 4-corner polygon; any positive radius
/// switches to the rounded form with per-corner control.
pub fn rect(
    surf: &mut Surface,
    color: impl Into<Color>,
    r: Rect,
    width: i32,
    border_radius: i32,
    corners: CornerRadii,
) -> Result<Rect, DrawError> {
    check_depth(surf)?;
    let color = color.into();

    if width < 0 {
        return Ok(Rect::empty_at(r.x, r.y));
    }
    let mut width = width;
    if width > r.w / 2 || width > r.h / 2 {
        width = (r.w / 2).max(r.h / 2);
    }

    if border_radius <= 0 && corners.all_unset() {
        let left = r.x;
        let top = r.y;
        let right = r.x + r.w - 1;
        let bottom = r.y + r.h - 1;
        return polygon(
            surf,
            color,
            &[(left, top), (right, top), (right, bottom), (left, bottom)],
            width,
        );
    }

    let packed = color.map(surf.format());
    let mut area = DrawnArea::new();
    with_lock(surf, |surf| {
        draw_round_rect(
            surf,
            r.x,
            r.y,
            r.x + r.w - 1,
            r.y + r.h - 1,
            border_radius,
            width,
            packed,
            corners.top_left,
            corners.top_right,
            corners.bottom_left,
            corners.bottom_right,
            &mut area,
        );
    })?;
    Ok(area.to_rect(r.x, r.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelFormat;

    const WHITE: u32 = 0xFFFF_FFFF;

    fn surf() -> Surface {
        Surface::new(100, 100, PixelFormat::rgba8888())
    }

    #[test]
    fn test_line_width_below_one_is_empty() {
        let mut s = surf();
        let r = line(&mut s, WHITE, (10, 10), (20, 20), 0).unwrap();
        assert_eq!(r, Rect::empty_at(10, 10));
        assert_eq!(s.get_at(10, 10), Some(0));
    }

    #[test]
    fn test_lines_too_few_points() {
        let mut s = surf();
        assert_eq!(
            lines(&mut s, WHITE, false, &[(1, 1)], 1),
            Err(DrawError::TooFewPoints { min: 2 })
        );
    }

    #[test]
    fn test_polygon_too_few_points() {
        let mut s = surf();
        assert_eq!(
            polygon(&mut s, WHITE, &[(1, 1), (5, 5)], 0),
            Err(DrawError::TooFewPoints { min: 3 })
        );
    }

    #[test]
    fn test_closed_lines_draw_wrap_segment() {
        let mut s = surf();
        lines(&mut s, WHITE, true, &[(10, 10), (30, 10), (20, 30)], 1).unwrap();
        // a pixel on the closing segment from (20,30) back to (10,10)
        assert_eq!(s.get_at(15, 20), Some(WHITE));
    }

    #[test]
    fn test_open_lines_skip_wrap_segment() {
        let mut s = surf();
        lines(&mut s, WHITE, false, &[(10, 10), (30, 10), (20, 30)], 1).unwrap();
        assert_eq!(s.get_at(15, 20), Some(0));
    }

    #[test]
    fn test_circle_degenerate_radius() {
        let mut s = surf();
        let r = circle(&mut s, WHITE, (50, 50), 0, 0, Quadrants::full()).unwrap();
        assert_eq!(r, Rect::empty_at(50, 50));
    }

    #[test]
    fn test_circle_width_equal_radius_fills() {
        let mut a = surf();
        let mut b = surf();
        circle(&mut a, WHITE, (50, 50), 6, 6, Quadrants::full()).unwrap();
        circle(&mut b, WHITE, (50, 50), 6, 0, Quadrants::full()).unwrap();
        for y in 40..60 {
            for x in 40..60 {
                assert_eq!(a.get_at(x, y), b.get_at(x, y), "{x},{y}");
            }
        }
    }

    #[test]
    fn test_rect_without_radius_equals_polygon() {
        let target = Rect::new(10, 10, 15, 12);
        for width in [0, 1, 3] {
            let mut via_rect = surf();
            let mut via_poly = surf();
            let ra = rect(
                &mut via_rect,
                WHITE,
                target,
                width,
                0,
                CornerRadii::default(),
            )
            .unwrap();
            let rb = polygon(
                &mut via_poly,
                WHITE,
                &[(10, 10), (24, 10), (24, 21), (10, 21)],
                width,
            )
            .unwrap();
            assert_eq!(ra, rb, "width {width}");
        }
    }

    #[test]
    fn test_ellipse_negative_width_is_empty() {
        let mut s = surf();
        let r = ellipse(&mut s, WHITE, Rect::new(5, 6, 20, 10), -1).unwrap();
        assert_eq!(r, Rect::empty_at(5, 6));
    }

    #[test]
    fn test_arc_wraps_stop_angle() {
        // stop behind start still draws a forward sweep
        let mut s = surf();
        let r = arc(
            &mut s,
            WHITE,
            Rect::new(30, 30, 40, 40),
            3.0,
            1.0,
            1,
        )
        .unwrap();
        assert!(!r.is_empty());
    }

    #[test]
    fn test_dirty_rect_tight_for_filled_circle() {
        let mut s = surf();
        let r = circle(&mut s, WHITE, (50, 50), 5, 0, Quadrants::full()).unwrap();
        assert_eq!(r, Rect::new(45, 45, 10, 10));
    }

    #[test]
    fn test_colors_map_through_format() {
        let mut s = Surface::new(10, 10, PixelFormat::rgb565());
        line(&mut s, (255, 0, 0), (0, 0), (3, 0), 1).unwrap();
        assert_eq!(s.get_at(0, 0), Some(0xF800));
    }
}
