//! End-to-end drawing scenarios on a 100x100 RGBA surface

use softdraw::{
    aaline, circle, ellipse, line, lines, polygon, rect, CornerRadii, PixelFormat, Quadrants,
    Rect, Surface,
};

const WHITE: u32 = 0xFFFF_FFFF;

/// Deterministic xorshift64 for randomized sweeps
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        let range = (max - min + 1) as u64;
        min + (self.next_u64() % range) as i32
    }
}

fn surf() -> Surface {
    Surface::new(100, 100, PixelFormat::rgba8888())
}

fn lit_pixels(surf: &Surface) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..surf.height() {
        for x in 0..surf.width() {
            if surf.get_at(x, y) != Some(0) {
                out.push((x, y));
            }
        }
    }
    out
}

fn bounding_rect(pixels: &[(i32, i32)]) -> Rect {
    let min_x = pixels.iter().map(|p| p.0).min().unwrap();
    let min_y = pixels.iter().map(|p| p.1).min().unwrap();
    let max_x = pixels.iter().map(|p| p.0).max().unwrap();
    let max_y = pixels.iter().map(|p| p.1).max().unwrap();
    Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
}

#[test]
fn single_point_line() {
    let mut s = surf();
    let dirty = line(&mut s, WHITE, (10, 10), (10, 10), 1).unwrap();
    assert_eq!(dirty, Rect::new(10, 10, 1, 1));
    assert_eq!(lit_pixels(&s), vec![(10, 10)]);
}

#[test]
fn horizontal_line_pixel_run() {
    let mut s = surf();
    let dirty = line(&mut s, WHITE, (0, 0), (9, 0), 1).unwrap();
    assert_eq!(dirty, Rect::new(0, 0, 10, 1));
    let lit = lit_pixels(&s);
    assert_eq!(lit.len(), 10);
    assert!(lit.iter().all(|&(x, y)| y == 0 && (0..=9).contains(&x)));
}

#[test]
fn filled_circle_disk() {
    let mut s = surf();
    let dirty = circle(&mut s, WHITE, (50, 50), 5, 0, Quadrants::full()).unwrap();
    assert_eq!(dirty, Rect::new(45, 45, 10, 10));
    assert_eq!(s.get_at(50, 50), Some(WHITE));
    assert_eq!(s.get_at(56, 50), Some(0));
}

#[test]
fn filled_square_polygon() {
    let mut s = surf();
    let dirty = polygon(&mut s, WHITE, &[(10, 10), (20, 10), (20, 20), (10, 20)], 0).unwrap();
    assert_eq!(dirty, Rect::new(10, 10, 11, 11));
    for y in 10..=20 {
        for x in 10..=20 {
            assert_eq!(s.get_at(x, y), Some(WHITE), "hole at {x},{y}");
        }
    }
}

#[test]
fn aaline_column_coverage() {
    let mut s = surf();
    aaline(&mut s, WHITE, (0.0, 0.0), (10.0, 5.0), false).unwrap();
    let lit = lit_pixels(&s);
    assert!(lit.iter().all(|&(x, _)| (0..=10).contains(&x)));
    for x in 0..=10 {
        let rows: Vec<i32> = lit
            .iter()
            .filter(|&&(px, _)| px == x)
            .map(|&(_, y)| y)
            .collect();
        assert!(
            !rows.is_empty() && rows.len() <= 2,
            "column {x} rows {rows:?}"
        );
    }
    // every touched pixel carries some intensity
    for &(x, y) in &lit {
        let (r, g, b, _) = s.get_rgba_at(x, y).unwrap();
        assert!(r > 0 && g > 0 && b > 0);
    }
}

#[test]
fn rounded_rect_corners() {
    let mut s = surf();
    rect(
        &mut s,
        WHITE,
        Rect::new(0, 0, 20, 20),
        0,
        5,
        CornerRadii::default(),
    )
    .unwrap();
    assert_eq!(s.get_at(0, 0), Some(0));
    assert_eq!(s.get_at(19, 0), Some(0));
    assert_eq!(s.get_at(0, 19), Some(0));
    assert_eq!(s.get_at(19, 19), Some(0));
    assert_eq!(s.get_at(5, 0), Some(WHITE));
    assert_eq!(s.get_at(10, 10), Some(WHITE));
}

#[test]
fn clip_containment_across_primitives() {
    let clip = Rect::new(20, 20, 30, 30);

    let mut draws: Vec<Box<dyn FnMut(&mut Surface)>> = vec![
        Box::new(|s: &mut Surface| {
            line(s, WHITE, (-10, -10), (120, 90), 5).unwrap();
        }),
        Box::new(|s: &mut Surface| {
            aaline(s, WHITE, (-5.0, 40.0), (110.0, 10.0), true).unwrap();
        }),
        Box::new(|s: &mut Surface| {
            circle(s, WHITE, (25, 25), 40, 0, Quadrants::full()).unwrap();
        }),
        Box::new(|s: &mut Surface| {
            circle(s, WHITE, (45, 45), 30, 6, Quadrants::full()).unwrap();
        }),
        Box::new(|s: &mut Surface| {
            ellipse(s, WHITE, Rect::new(0, 0, 90, 60), 0).unwrap();
        }),
        Box::new(|s: &mut Surface| {
            polygon(s, WHITE, &[(-10, 25), (80, -10), (95, 70), (10, 95)], 0).unwrap();
        }),
        Box::new(|s: &mut Surface| {
            rect(
                s,
                WHITE,
                Rect::new(5, 5, 80, 80),
                3,
                15,
                CornerRadii::default(),
            )
            .unwrap();
        }),
    ];

    for draw in &mut draws {
        let mut s = surf();
        s.set_clip(clip);
        draw(&mut s);
        for (x, y) in lit_pixels(&s) {
            assert!(clip.contains(x, y), "pixel ({x},{y}) escaped the clip");
        }
    }
}

#[test]
fn dirty_rect_is_tight() {
    let mut s = surf();
    let dirty = line(&mut s, WHITE, (12, 30), (70, 55), 4).unwrap();
    assert_eq!(dirty, bounding_rect(&lit_pixels(&s)));

    let mut s = surf();
    let dirty = ellipse(&mut s, WHITE, Rect::new(10, 20, 41, 25), 0).unwrap();
    assert_eq!(dirty, bounding_rect(&lit_pixels(&s)));

    let mut s = surf();
    let dirty = polygon(&mut s, WHITE, &[(30, 10), (80, 35), (50, 80)], 0).unwrap();
    assert_eq!(dirty, bounding_rect(&lit_pixels(&s)));
}

#[test]
fn degenerate_inputs_draw_nothing() {
    let mut s = surf();

    let dirty = line(&mut s, WHITE, (10, 10), (40, 40), -1).unwrap();
    assert_eq!(dirty, Rect::empty_at(10, 10));

    let dirty = circle(&mut s, WHITE, (50, 50), 0, 0, Quadrants::full()).unwrap();
    assert_eq!(dirty, Rect::empty_at(50, 50));

    let dirty = ellipse(&mut s, WHITE, Rect::new(5, 6, 30, 30), -2).unwrap();
    assert_eq!(dirty, Rect::empty_at(5, 6));

    let dirty = rect(
        &mut s,
        WHITE,
        Rect::new(7, 8, 30, 30),
        -1,
        0,
        CornerRadii::default(),
    )
    .unwrap();
    assert_eq!(dirty, Rect::empty_at(7, 8));

    assert!(lit_pixels(&s).is_empty());
}

#[test]
fn line_symmetry_random_sweep() {
    let mut rng = Rng::new(0xC0FFEE);
    for _ in 0..50 {
        let a = (rng.range_i32(0, 99), rng.range_i32(0, 99));
        let b = (rng.range_i32(0, 99), rng.range_i32(0, 99));

        let mut fwd = surf();
        let mut rev = surf();
        line(&mut fwd, WHITE, a, b, 1).unwrap();
        line(&mut rev, WHITE, b, a, 1).unwrap();

        let fwd_lit = lit_pixels(&fwd);
        assert_eq!(fwd_lit, lit_pixels(&rev), "{a:?} <-> {b:?}");

        // both endpoints are part of the line
        assert!(fwd_lit.contains(&a), "{a:?} missing from {a:?}->{b:?}");
        assert!(fwd_lit.contains(&b), "{b:?} missing from {a:?}->{b:?}");
    }
}

#[test]
fn rect_identity_with_polygon() {
    let target = Rect::new(25, 30, 21, 17);
    let corners = [
        (25, 30),
        (45, 30),
        (45, 46),
        (25, 46),
    ];
    for width in [0, 1, 2, 5] {
        let mut a = surf();
        let mut b = surf();
        let ra = rect(&mut a, WHITE, target, width, 0, CornerRadii::default()).unwrap();
        let rb = polygon(&mut b, WHITE, &corners, width).unwrap();
        assert_eq!(ra, rb, "width {width}");
        assert_eq!(lit_pixels(&a), lit_pixels(&b), "width {width}");
    }
}

#[test]
fn closed_polyline_matches_outlined_polygon() {
    let pts = [(15, 15), (60, 20), (70, 65), (25, 70)];
    let mut via_lines = surf();
    let mut via_polygon = surf();
    lines(&mut via_lines, WHITE, true, &pts, 3).unwrap();
    polygon(&mut via_polygon, WHITE, &pts, 3).unwrap();
    assert_eq!(lit_pixels(&via_lines), lit_pixels(&via_polygon));
}

#[test]
fn drawing_works_on_every_depth() {
    for format in [
        PixelFormat::rgb332(),
        PixelFormat::rgb565(),
        PixelFormat::rgb24(),
        PixelFormat::rgba8888(),
    ] {
        let mut s = Surface::new(40, 40, format);
        let color = format.map_rgba(255, 255, 255, 255);
        let dirty = circle(&mut s, color, (20, 20), 8, 0, Quadrants::full()).unwrap();
        assert_eq!(dirty, Rect::new(12, 12, 16, 16));
        assert_eq!(s.get_at(20, 20), Some(color));
    }
}

#[test]
fn blended_aaline_mixes_toward_background() {
    let mut s = surf();
    let format = *s.format();
    let red = format.map_rgba(255, 0, 0, 255);
    s.fill(format.map_rgba(0, 0, 255, 255));

    aaline(&mut s, red, (10.0, 10.0), (40.0, 25.0), true).unwrap();

    // fringe pixels hold a red/blue mix, never pure red plus pure blue rows
    let mut saw_mix = false;
    for y in 0..50 {
        for x in 0..50 {
            let (r, _, b, _) = s.get_rgba_at(x, y).unwrap();
            if r > 0 && r < 255 {
                assert!(b > 0, "partial red without background blue at {x},{y}");
                saw_mix = true;
            }
        }
    }
    assert!(saw_mix);
}
