//! Basic physics simulation example
//!
//! This example drops a box onto a fixed floor under gravity.

use rustphy2d::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use simplelog::LevelFilter::{Off, Warn};
    simplelog::TermLogger::init(
        Warn,
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    println!("RustPhy2D - Basic Simulation Example");
    println!("=====================================\n");

    // Screen coordinates: +y points down
    let mut world = World::new(WorldConfig::corrected().with_gravity(9.81));

    // Create a static floor
    world.add_object(RigidBody::fixed(Aabb::new(
        Vec2::new(-10.0, 10.0),
        Vec2::new(10.0, 11.0),
    )));
    println!("Created floor with top surface at y=10.0");

    // Create a dynamic box
    let crate_box = world.add_object(
        RigidBody::from_center_size(Vec2::new(0.0, 4.5), Vec2::ONE)
            .with_mass(1.0)
            .with_restitution(0.5),
    );
    println!("Created 1x1 box with its bottom at y=5.0\n");

    // Simulation parameters
    let dt = 1.0 / 60.0;
    let total_time = 3.0;
    let steps = (total_time / dt) as usize;

    println!("Simulating {} seconds ({} steps at {}Hz)...\n", total_time, steps, 1.0 / dt);

    for i in 0..steps {
        world.step(dt)?;

        // Print every 30 frames (0.5 seconds)
        if i % 30 == 0 {
            let body = world.body(crate_box)?;
            let center = body.center();
            println!(
                "t={:.2}s: center=({:.3}, {:.3}), velocity=({:.3}, {:.3})",
                i as f32 * dt,
                center.x,
                center.y,
                body.velocity.x,
                body.velocity.y
            );
        }
    }

    let center = world.body(crate_box)?.center();
    println!("\nFinal box center: ({:.3}, {:.3})", center.x, center.y);
    println!("Expected resting center: ~(0, 9.5) (floor top at 10.0 minus half the box)");
    Ok(())
}
