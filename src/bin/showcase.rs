//! Draws every primitive into a window: lines of assorted widths, an
//! antialiased fan, circles, quadrants, ellipses, a sweeping arc, a star
//! polygon, and rounded rectangles.

use std::f64::consts::PI;

use softdraw::display::{Display, InputEvent, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use softdraw::{
    aalines, arc, circle, ellipse, line, polygon, rect, CornerRadii, PixelFormat, Quadrants, Rect,
    Surface,
};

/// Parse command line arguments and return (width, height, vsync)
fn parse_args() -> (u32, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: showcase [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --width N, -w N   Window width (default {DEFAULT_WIDTH})");
                println!("  --height N, -h N  Window height (default {DEFAULT_HEIGHT})");
                println!("  --no-vsync        Disable VSync");
                println!("  --help            Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync)
}

fn draw_scene(surf: &mut Surface, t: f64) {
    let f = *surf.format();
    let white = f.map_rgba(255, 255, 255, 255);
    let red = f.map_rgba(230, 60, 60, 255);
    let green = f.map_rgba(80, 220, 120, 255);
    let blue = f.map_rgba(90, 140, 255, 255);
    let yellow = f.map_rgba(240, 220, 80, 255);

    surf.fill(f.map_rgba(12, 12, 20, 255));

    // line widths 1..6
    for w in 1..=6 {
        let y = 20 + w * 18;
        line(surf, white, (20, y), (180, y + 8), w).unwrap();
    }

    // antialiased fan
    let fan: Vec<(f32, f32)> = (0..=8)
        .map(|k| {
            let a = t + k as f64 * PI / 8.0;
            (300.0 + (a.cos() * 70.0) as f32, 90.0 + (a.sin() * 70.0) as f32)
        })
        .collect();
    aalines(surf, blue, false, &fan, true).unwrap();

    // circle family: filled, ring, two quadrants
    circle(surf, red, (80, 220), 36, 0, Quadrants::full()).unwrap();
    circle(surf, green, (180, 220), 36, 4, Quadrants::full()).unwrap();
    circle(
        surf,
        yellow,
        (280, 220),
        36,
        0,
        Quadrants {
            top_right: true,
            bottom_left: true,
            ..Quadrants::default()
        },
    )
    .unwrap();

    // ellipses and a sweeping arc
    ellipse(surf, blue, Rect::new(340, 180, 120, 70), 0).unwrap();
    ellipse(surf, white, Rect::new(340, 180, 120, 70), 2).unwrap();
    let sweep = (t * 1.5) % (2.0 * PI);
    arc(surf, yellow, Rect::new(480, 170, 90, 90), 0.0, sweep, 3).unwrap();

    // star polygon
    let star: Vec<(i32, i32)> = (0..10)
        .map(|k| {
            let a = -PI / 2.0 + k as f64 * PI / 5.0;
            let r = if k % 2 == 0 { 50.0 } else { 20.0 };
            (
                500 + (a.cos() * r) as i32,
                90 + (a.sin() * r) as i32,
            )
        })
        .collect();
    polygon(surf, green, &star, 0).unwrap();

    // rounded rects: filled with mixed corners, plus an outline
    rect(
        surf,
        red,
        Rect::new(40, 300, 160, 90),
        0,
        12,
        CornerRadii {
            top_left: 30,
            bottom_right: 30,
            ..CornerRadii::default()
        },
    )
    .unwrap();
    rect(
        surf,
        white,
        Rect::new(230, 300, 160, 90),
        4,
        18,
        CornerRadii::default(),
    )
    .unwrap();
}

fn main() -> Result<(), String> {
    let (width, height, vsync) = parse_args();

    let (mut display, texture_creator) =
        Display::with_options("softdraw showcase", width, height, vsync)?;
    let mut target = RenderTarget::new(&texture_creator, width, height)?;
    let mut surf = Surface::new(width, height, PixelFormat::rgba8888());

    let start = std::time::Instant::now();
    'running: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'running,
                InputEvent::KeyDown(k) if k == sdl2::keyboard::Keycode::Escape => {
                    break 'running;
                },
                _ => {},
            }
        }

        draw_scene(&mut surf, start.elapsed().as_secs_f64());
        display.present(&mut target, &surf)?;
    }

    Ok(())
}
