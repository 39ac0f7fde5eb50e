use crate::math::Vec2;

use super::rigid_body::RigidBody;

/// Forces acting on a body for one integration step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForceField {
    /// Gravity along +y, scaled by the body's inverse mass like any other force
    pub gravity: f32,
    /// Force applied to every dynamic body
    pub global_force: Vec2,
}

impl ForceField {
    /// Acceleration of `body` under this field plus its own accumulated force
    pub fn acceleration(&self, body: &RigidBody, accumulated_force: Vec2) -> Vec2 {
        let mut accel = (self.global_force + accumulated_force) * body.inv_mass;
        accel.y += self.gravity * body.inv_mass;
        accel
    }
}

/// Integrates velocity (applies forces to velocity)
pub fn integrate_velocity(body: &mut RigidBody, field: &ForceField, accumulated_force: Vec2, dt: f32) {
    if !body.is_dynamic() {
        return;
    }

    body.velocity += field.acceleration(body, accumulated_force) * dt;
}

/// Integrates position (translates both corners by velocity)
pub fn integrate_position(body: &mut RigidBody, dt: f32) {
    if !body.is_dynamic() {
        return;
    }

    body.shape.translate(body.velocity * dt);
}

/// Performs a full integration step (semi-implicit Euler).
///
/// Fixed bodies are left untouched. `max_acceleration` is not applied.
pub fn integrate_semi_implicit_euler(
    body: &mut RigidBody,
    field: &ForceField,
    accumulated_force: Vec2,
    dt: f32,
) {
    // Velocity first, then position with the new velocity
    integrate_velocity(body, field, accumulated_force, dt);
    integrate_position(body, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::BodyType;
    use crate::geometry::Aabb;

    fn unit_box() -> RigidBody {
        RigidBody::new(Aabb::new(Vec2::ZERO, Vec2::ONE))
    }

    #[test]
    fn test_free_fall() {
        let mut body = unit_box().with_inv_mass(1.0);
        let field = ForceField {
            gravity: 10.0,
            global_force: Vec2::ZERO,
        };
        let dt = 0.1;

        integrate_semi_implicit_euler(&mut body, &field, Vec2::ZERO, dt);

        assert!((body.velocity.y - 1.0).abs() < 1e-6);
        assert!((body.shape.min.y - 0.1).abs() < 1e-6);
        assert!((body.shape.max.y - 1.1).abs() < 1e-6);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_fixed_body_no_integration() {
        let mut body = unit_box()
            .with_type(BodyType::Fixed)
            .with_velocity(Vec2::new(3.0, 4.0));
        let before = body.clone();
        let field = ForceField {
            gravity: 500.0,
            global_force: Vec2::new(10.0, 10.0),
        };

        integrate_semi_implicit_euler(&mut body, &field, Vec2::new(1.0, 1.0), 1.0);

        assert_eq!(body, before);
    }

    #[test]
    fn test_gravity_scales_with_inverse_mass() {
        let field = ForceField {
            gravity: 10.0,
            global_force: Vec2::ZERO,
        };
        let mut light = unit_box().with_mass(0.5);
        let mut heavy = unit_box().with_mass(2.0);

        integrate_velocity(&mut light, &field, Vec2::ZERO, 1.0);
        integrate_velocity(&mut heavy, &field, Vec2::ZERO, 1.0);

        assert!((light.velocity.y - 20.0).abs() < 1e-5);
        assert!((heavy.velocity.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_forces_accumulate() {
        let field = ForceField {
            gravity: 0.0,
            global_force: Vec2::new(1.0, 0.0),
        };
        let mut body = unit_box().with_mass(2.0);

        integrate_velocity(&mut body, &field, Vec2::new(3.0, -4.0), 0.5);

        // (1 + 3, -4) * 0.5 inv mass * 0.5 s
        assert!((body.velocity.x - 1.0).abs() < 1e-6);
        assert!((body.velocity.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_size_invariant() {
        let mut body = RigidBody::new(Aabb::new(Vec2::new(2.0, 3.0), Vec2::new(7.0, 11.0)))
            .with_velocity(Vec2::new(-13.0, 6.5));
        let size = body.shape.size();

        integrate_position(&mut body, 0.37);

        assert!((body.shape.size() - size).is_near_zero(1e-5));
    }
}
