mod integrator;
mod rigid_body;

pub use integrator::{integrate_position, integrate_semi_implicit_euler, integrate_velocity, ForceField};
pub use rigid_body::{BodyType, Color, RigidBody};
