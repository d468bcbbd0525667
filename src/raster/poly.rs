//! Scanline polygon fill

use smallvec::SmallVec;

use crate::raster::line::draw_line;
use crate::raster::pixel::DrawnArea;
use crate::surface::Surface;

/// Fill a polygon with the even-odd rule.
///
/// For each scanline the crossing edges contribute an intersection when
/// `y >= y1 && y < y2` (strict at the lower end) or when the scanline is the
/// polygon's bottom row and the edge ends there; sorted pairs of
/// intersections become horizontal spans. Edges are normalized so y1 < y2
/// before the test, which closes the even-odd count cleanly at vertices.
/// Horizontal edges are skipped by the scan and repaired afterwards: an
/// interior horizontal border sitting on a local extremum would otherwise
/// stay uncolored.
pub(crate) fn draw_fillpoly(
    surf: &mut Surface,
    points: &[(i32, i32)],
    color: u32,
    area: &mut DrawnArea,
) {
    debug_assert!(points.len() >= 3);
    let n = points.len();

    let mut miny = points[0].1;
    let mut maxy = points[0].1;
    for &(_, py) in &points[1..] {
        miny = miny.min(py);
        maxy = maxy.max(py);
    }

    if miny == maxy {
        // the whole polygon sits on one scanline
        let mut minx = points[0].0;
        let mut maxx = points[0].0;
        for &(px, _) in &points[1..] {
            minx = minx.min(px);
            maxx = maxx.max(px);
        }
        draw_line(surf, minx, miny, maxx, miny, color, area);
        return;
    }

    let mut intersections: SmallVec<[i32; 64]> = SmallVec::new();

    for y in miny..=maxy {
        intersections.clear();

        for i in 0..n {
            let i_previous = if i > 0 { i - 1 } else { n - 1 };

            let (px1, py1) = points[i_previous];
            let (px2, py2) = points[i];
            let (x1, y1, x2, y2) = if py1 < py2 {
                (px1, py1, px2, py2)
            } else if py1 > py2 {
                (px2, py2, px1, py1)
            } else {
                // horizontal edge, handled by the repair pass below
                continue;
            };

            if (y >= y1 && y < y2) || (y == maxy && y2 == maxy) {
                intersections.push((y - y1) * (x2 - x1) / (y2 - y1) + x1);
            }
        }

        intersections.sort_unstable();

        for pair in intersections.chunks_exact(2) {
            draw_line(surf, pair[0], y, pair[1], y, color, area);
        }
    }

    // repair pass for horizontal borders strictly between the extremes
    for i in 0..n {
        let i_previous = if i > 0 { i - 1 } else { n - 1 };
        let y = points[i].1;

        if miny < y && points[i_previous].1 == y && y < maxy {
            draw_line(surf, points[i].0, y, points[i_previous].0, y, color, area);
        }
    }
}
