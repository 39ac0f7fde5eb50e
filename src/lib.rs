//! # RustPhy2D
//!
//! A small 2D physics engine for axis-aligned boxes, written in Rust.
//!
//! ## Features
//!
//! - **Rigid Body Dynamics**: Semi-implicit Euler integration under gravity and applied forces
//! - **Collision Detection**: All-pairs AABB overlap tests producing a normal and penetration depth
//! - **Collision Response**: Impulse resolution with restitution and Baumgarte positional correction
//! - **Handles**: Opaque, never-reused body handles with checked access
//! - **Policies**: Switchable detection, response and queue ordering rules
//!
//! Positions are in screen space, so +y points down and positive gravity pulls bodies down.
//!
//! ## Quick Start
//!
//! ```rust
//! use rustphy2d::prelude::*;
//!
//! // Create a physics world
//! let mut world = World::new(WorldConfig::corrected().with_gravity(9.81));
//!
//! // Create a static floor
//! world.add_object(RigidBody::fixed(Aabb::new(Vec2::new(0.0, 10.0), Vec2::new(20.0, 11.0))));
//!
//! // Create a dynamic box
//! let crate_box = world.add_object(
//!     RigidBody::from_center_size(Vec2::new(10.0, 2.0), Vec2::splat(1.0))
//!         .with_mass(2.0)
//!         .with_restitution(0.1),
//! );
//!
//! // Simulation loop
//! let dt = 1.0 / 60.0;
//! for _ in 0..600 {
//!     let report = world.step(dt)?;
//!     assert!(report.is_clean());
//! }
//!
//! let body = world.body(crate_box)?;
//! assert!(body.shape.max.y < 10.5);
//! # Ok::<(), PhysicsError>(())
//! ```

pub mod collision;
pub mod dynamics;
mod error;
pub mod geometry;
pub mod math;
pub mod solver;
pub mod storage;
mod world;

pub use error::{PhysicsError, PhysicsResult};
pub use world::{StepReport, World, WorldConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collision::{BodyHandle, Collision, DetectionPolicy, ResolutionOrder};
    pub use crate::dynamics::{BodyType, Color, RigidBody};
    pub use crate::error::{PhysicsError, PhysicsResult};
    pub use crate::geometry::Aabb;
    pub use crate::math::Vec2;
    pub use crate::solver::SolverConfig;
    pub use crate::world::{StepReport, World, WorldConfig};
}
