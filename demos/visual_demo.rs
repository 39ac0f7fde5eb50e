//! Visual demo of the physics engine using macroquad
//!
//! Run with: cargo run --example visual_demo

use macroquad::prelude::*;
use rustphy2d::dynamics::{Color as BodyColor, RigidBody};
use rustphy2d::geometry::Aabb;
use rustphy2d::math::Vec2 as PhysVec2;
use rustphy2d::{World, WorldConfig};

// Window settings
const WINDOW_WIDTH: f32 = 1100.0;
const WINDOW_HEIGHT: f32 = 700.0;

// Left side panel; the viewport is everything to its right
const PANEL_WIDTH: f32 = 260.0;
const CONSOLE_LINES: usize = 8;

const PALETTE: [(&str, BodyColor); 5] = [
    ("red", BodyColor::RED),
    ("green", BodyColor::rgb(0.2, 0.8, 0.3)),
    ("blue", BodyColor::rgb(0.25, 0.45, 1.0)),
    ("gold", BodyColor::rgb(1.0, 0.8, 0.1)),
    ("white", BodyColor::WHITE),
];

fn window_conf() -> Conf {
    Conf {
        window_title: "RustPhy2D - Visual Demo".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        ..Default::default()
    }
}

/// Settings for bodies spawned with the mouse
struct Creator {
    mass: f32,
    size: PhysVec2,
    color: usize,
}

impl Creator {
    fn spawn(&self, center: PhysVec2) -> RigidBody {
        RigidBody::from_center_size(center, self.size)
            .with_mass(self.mass)
            .with_color(PALETTE[self.color].1)
    }
}

fn viewport() -> Aabb {
    Aabb::new(
        PhysVec2::new(PANEL_WIDTH, 0.0),
        PhysVec2::new(screen_width(), screen_height()),
    )
}

/// Adds the fixed floor every scene starts with
fn add_floor(world: &mut World) {
    world.add_object(
        RigidBody::fixed(Aabb::new(
            PhysVec2::new(PANEL_WIDTH + 40.0, WINDOW_HEIGHT - 120.0),
            PhysVec2::new(WINDOW_WIDTH - 40.0, WINDOW_HEIGHT - 80.0),
        ))
        .with_color(BodyColor::WHITE),
    );
}

fn to_screen(color: BodyColor) -> Color {
    Color::new(color.r, color.g, color.b, color.a)
}

fn preset_name(corrected: bool) -> &'static str {
    if corrected {
        "corrected"
    } else {
        "default"
    }
}

fn init_logging() {
    use simplelog::LevelFilter::{Info, Off};
    if let Err(err) = simplelog::TermLogger::init(
        Info,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {err}");
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let mut corrected = true;
    let mut world = World::new(WorldConfig::corrected().with_gravity(100.0));
    add_floor(&mut world);

    let mut creator = Creator {
        mass: 1.0,
        size: PhysVec2::splat(64.0),
        color: 0,
    };

    let mut console: Vec<String> = Vec::new();
    let mut running = false;
    let mut filled = false;

    loop {
        // Handle input
        if is_key_pressed(KeyCode::Space) {
            running = !running;
        }
        if is_key_pressed(KeyCode::F) {
            filled = !filled;
        }
        if is_key_pressed(KeyCode::R) {
            world.clear();
            add_floor(&mut world);
            console.clear();
        }
        if is_key_pressed(KeyCode::P) {
            corrected = !corrected;
            let preset = if corrected {
                WorldConfig::corrected()
            } else {
                WorldConfig::default()
            };
            world.set_config(preset.with_gravity(world.gravity()));
            log::info!("switched to {} policies", preset_name(corrected));
        }

        // Gravity
        if is_key_down(KeyCode::Up) {
            world.set_gravity((world.gravity() + 2.0).min(500.0));
        }
        if is_key_down(KeyCode::Down) {
            world.set_gravity((world.gravity() - 2.0).max(1.0));
        }

        // Creation settings
        if is_key_pressed(KeyCode::RightBracket) {
            creator.mass = (creator.mass * 2.0).min(100.0);
        }
        if is_key_pressed(KeyCode::LeftBracket) {
            creator.mass = (creator.mass / 2.0).max(0.1);
        }
        if is_key_pressed(KeyCode::Equal) {
            creator.size = (creator.size + PhysVec2::splat(8.0)).min(PhysVec2::splat(200.0));
        }
        if is_key_pressed(KeyCode::Minus) {
            creator.size = (creator.size - PhysVec2::splat(8.0)).max(PhysVec2::splat(8.0));
        }
        if is_key_pressed(KeyCode::C) {
            creator.color = (creator.color + 1) % PALETTE.len();
        }

        // Spawn on mouse click inside the viewport
        if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            let mouse = PhysVec2::new(mx, my);
            let view = viewport();
            if mouse.x > view.min.x && mouse.x < view.max.x && mouse.y > view.min.y && mouse.y < view.max.y {
                let handle = world.add_object(creator.spawn(mouse));
                console.push(format!("[INFO] Created {handle} at ({mx:.0}, {my:.0})."));
            }
        }

        if running {
            match world.step(get_frame_time()) {
                Ok(report) => {
                    for err in report.diagnostics {
                        console.push(format!("[WARN] {err}"));
                    }
                }
                Err(err) => console.push(format!("[ERROR] {err}")),
            }

            for handle in world.remove_outside(viewport()) {
                console.push(format!("[INFO] Culled {handle}."));
            }
        }

        if console.len() > CONSOLE_LINES {
            console.drain(..console.len() - CONSOLE_LINES);
        }

        // === DRAWING ===
        clear_background(Color::from_rgba(25, 25, 35, 255));

        for (_, body) in world.iter() {
            let shape = body.shape;
            let color = to_screen(body.color);
            if filled {
                draw_rectangle(shape.min.x, shape.min.y, shape.width(), shape.height(), color);
            } else {
                draw_rectangle_lines(shape.min.x, shape.min.y, shape.width(), shape.height(), 2.0, color);
            }
        }

        // === UI ===
        draw_rectangle(0.0, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(40, 40, 55, 255));
        draw_text("RustPhy2D", 10.0, 28.0, 28.0, WHITE);

        let status = [
            format!("Bodies: {}", world.num_bodies()),
            format!("FPS: {}", get_fps()),
            format!("Gravity: {:.0}", world.gravity()),
            format!("Policies: {}", preset_name(corrected)),
            format!("Shapes: {}", if filled { "filled" } else { "outlined" }),
        ];
        for (i, line) in status.iter().enumerate() {
            draw_text(line, 10.0, 55.0 + i as f32 * 20.0, 20.0, LIGHTGRAY);
        }

        draw_text("Create Object", 10.0, 175.0, 22.0, GOLD);
        let settings = [
            format!("Mass: {:.1}  [ / ]", creator.mass),
            format!("Size: {:.0} x {:.0}  - / =", creator.size.x, creator.size.y),
            format!("Color: {}  [C]", PALETTE[creator.color].0),
        ];
        for (i, line) in settings.iter().enumerate() {
            draw_text(line, 10.0, 200.0 + i as f32 * 20.0, 20.0, LIGHTGRAY);
        }

        draw_text("Console", 10.0, 290.0, 22.0, GOLD);
        for (i, line) in console.iter().enumerate() {
            draw_text(line, 10.0, 312.0 + i as f32 * 18.0, 16.0, GRAY);
        }

        if !running {
            draw_text("PAUSED", PANEL_WIDTH + 20.0, 35.0, 36.0, YELLOW);
        }

        draw_text(
            "[Click] Spawn | [Space] Run | [R] Reset | [Up/Down] Gravity | [F] Fill | [P] Policies",
            PANEL_WIDTH + 10.0,
            screen_height() - 10.0,
            16.0,
            GRAY,
        );

        next_frame().await
    }
}
