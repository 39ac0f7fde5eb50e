use crate::collision::{BodyHandle, Collision};
use crate::dynamics::RigidBody;
use crate::error::{PhysicsError, PhysicsResult};
use crate::geometry::Aabb;
use crate::math::Vec2;

/// Penetration allowed before positional correction kicks in
pub const SLOP: f32 = 0.01;

/// Fraction of the remaining penetration corrected per resolution
pub const BAUMGARTE: f32 = 0.2;

/// How the collision impulse is turned into velocity changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpulseScaling {
    /// Each body's change is `impulse * (1/inv_mass_a + 1/inv_mass_b) / inv_mass`.
    /// Requires both inverse masses to be non-zero to stay finite.
    #[default]
    TotalMassRatio,
    /// Each body's change is `impulse * inv_mass`, conserving momentum
    InverseMass,
}

/// How a body's velocity is limited by its `max_velocity` after an impulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VelocityClamp {
    /// Keep whichever of velocity and limit is lexicographically smaller (x, then y)
    #[default]
    Lexicographic,
    /// Clamp each component to `[-max, max]`
    ComponentWise,
    /// Leave the velocity as is
    Disabled,
}

impl VelocityClamp {
    /// Applies the limit to `velocity`
    pub fn apply(self, velocity: Vec2, max_velocity: Vec2) -> Vec2 {
        match self {
            VelocityClamp::Lexicographic => max_velocity.lexicographic_min(velocity),
            VelocityClamp::ComponentWise => velocity.clamp(-max_velocity, max_velocity),
            VelocityClamp::Disabled => velocity,
        }
    }
}

/// Configuration for collision resolution
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Velocity response rule
    pub impulse_scaling: ImpulseScaling,
    /// Velocity limit rule
    pub velocity_clamp: VelocityClamp,
    /// Allowed penetration slop
    pub slop: f32,
    /// Positional correction coefficient
    pub baumgarte: f32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            impulse_scaling: ImpulseScaling::TotalMassRatio,
            velocity_clamp: VelocityClamp::Lexicographic,
            slop: SLOP,
            baumgarte: BAUMGARTE,
        }
    }
}

impl SolverConfig {
    /// Momentum-conserving impulses with per-component velocity limits
    pub fn corrected() -> Self {
        Self {
            impulse_scaling: ImpulseScaling::InverseMass,
            velocity_clamp: VelocityClamp::ComponentWise,
            ..Self::default()
        }
    }
}

/// Resolves one collision between `body_a` and `body_b`.
///
/// Returns `Ok(false)` without touching either body when they are already separating.
/// Otherwise applies the impulse and positional correction and returns `Ok(true)`.
/// Bodies with zero inverse mass are never moved. On error neither body is modified.
pub fn resolve(
    collision: &Collision,
    body_a: &mut RigidBody,
    body_b: &mut RigidBody,
    config: &SolverConfig,
) -> PhysicsResult<bool> {
    let inv_mass_a = body_a.inv_mass;
    let inv_mass_b = body_b.inv_mass;
    let inv_mass_sum = inv_mass_a + inv_mass_b;

    if !(inv_mass_sum > 0.0) {
        return Err(PhysicsError::DegenerateMassPair {
            a: collision.body_a,
            b: collision.body_b,
        });
    }

    let normal = collision.normal;
    let separating_speed = (body_b.velocity - body_a.velocity).dot(normal);
    if separating_speed > 0.0 {
        return Ok(false);
    }

    let restitution = body_a.restitution.min(body_b.restitution);
    let j = -(1.0 + restitution) * separating_speed / inv_mass_sum;
    let impulse = normal * j;

    let (scale_a, scale_b) = match config.impulse_scaling {
        ImpulseScaling::TotalMassRatio => {
            let total_mass = 1.0 / inv_mass_a + 1.0 / inv_mass_b;
            (total_mass / inv_mass_a, total_mass / inv_mass_b)
        }
        ImpulseScaling::InverseMass => (inv_mass_a, inv_mass_b),
    };

    let correction = normal * ((collision.penetration - config.slop).max(0.0) / inv_mass_sum * config.baumgarte);

    let next_a = if body_a.has_finite_mass() {
        Some(respond(
            collision.body_a,
            body_a,
            body_a.velocity - impulse * scale_a,
            -correction * inv_mass_a,
            config,
        )?)
    } else {
        None
    };
    let next_b = if body_b.has_finite_mass() {
        Some(respond(
            collision.body_b,
            body_b,
            body_b.velocity + impulse * scale_b,
            correction * inv_mass_b,
            config,
        )?)
    } else {
        None
    };

    if let Some((velocity, shape)) = next_a {
        body_a.velocity = velocity;
        body_a.shape = shape;
    }
    if let Some((velocity, shape)) = next_b {
        body_b.velocity = velocity;
        body_b.shape = shape;
    }

    log::trace!(
        "resolved {} / {}: j = {j}, correction = {:?}",
        collision.body_a,
        collision.body_b,
        correction
    );

    Ok(true)
}

/// Computes a body's new velocity and shape without committing them
fn respond(
    handle: BodyHandle,
    body: &RigidBody,
    velocity: Vec2,
    shift: Vec2,
    config: &SolverConfig,
) -> PhysicsResult<(Vec2, Aabb)> {
    // Checked before clamping: the lexicographic rule would hide a NaN behind the limit
    if !velocity.is_finite() {
        return Err(PhysicsError::NonFiniteResult { handle });
    }

    let velocity = config.velocity_clamp.apply(velocity, body.max_velocity);
    let shape = body.shape.translated(shift);

    if !velocity.is_finite() || !shape.is_finite() {
        return Err(PhysicsError::NonFiniteResult { handle });
    }

    Ok((velocity, shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collision(normal: Vec2, penetration: f32) -> Collision {
        Collision {
            body_a: BodyHandle::new(0),
            body_b: BodyHandle::new(1),
            normal,
            penetration,
        }
    }

    fn body_at(x: f32, velocity: Vec2) -> RigidBody {
        RigidBody::new(Aabb::new(Vec2::new(x, 0.0), Vec2::new(x + 10.0, 10.0)))
            .with_velocity(velocity)
            .with_restitution(0.0)
    }

    #[test]
    fn test_separating_bodies_untouched() {
        let mut a = body_at(0.0, Vec2::new(-1.0, 0.0));
        let mut b = body_at(8.0, Vec2::new(1.0, 0.0));
        let (before_a, before_b) = (a.clone(), b.clone());

        for config in [SolverConfig::default(), SolverConfig::corrected()] {
            let applied = resolve(&collision(Vec2::X, 2.0), &mut a, &mut b, &config).unwrap();
            assert!(!applied);
            assert_eq!(a, before_a);
            assert_eq!(b, before_b);
        }
    }

    #[test]
    fn test_inelastic_inverse_mass_response() {
        let mut a = body_at(0.0, Vec2::new(5.0, 0.0));
        let mut b = body_at(8.0, Vec2::new(-5.0, 0.0));

        let applied = resolve(&collision(Vec2::X, 2.0), &mut a, &mut b, &SolverConfig::corrected()).unwrap();

        assert!(applied);
        assert!((b.velocity - a.velocity).dot(Vec2::X).abs() < 1e-5);
        assert!(a.velocity.is_near_zero(1e-5));
        assert!(b.velocity.is_near_zero(1e-5));
    }

    #[test]
    fn test_total_mass_ratio_amplifies_response() {
        let mut a = body_at(0.0, Vec2::new(5.0, 0.0));
        let mut b = body_at(8.0, Vec2::new(-5.0, 0.0));
        let config = SolverConfig {
            velocity_clamp: VelocityClamp::Disabled,
            ..SolverConfig::default()
        };

        resolve(&collision(Vec2::X, 2.0), &mut a, &mut b, &config).unwrap();

        // j = 5, total mass = 2, so each body changes by 10
        assert_eq!(a.velocity, Vec2::new(-5.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_positional_correction() {
        let mut a = body_at(0.0, Vec2::ZERO);
        let mut b = body_at(8.0, Vec2::ZERO);

        resolve(&collision(Vec2::X, 2.0), &mut a, &mut b, &SolverConfig::corrected()).unwrap();

        // (2 - 0.01) / 2 * 0.2 = 0.199 per unit inverse mass
        assert!((a.shape.min.x + 0.199).abs() < 1e-5);
        assert!((b.shape.min.x - 8.199).abs() < 1e-5);
        assert!((a.shape.width() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_penetration_within_slop_is_not_corrected() {
        let mut a = body_at(0.0, Vec2::ZERO);
        let mut b = body_at(9.995, Vec2::ZERO);
        let (before_a, before_b) = (a.shape, b.shape);

        resolve(&collision(Vec2::X, 0.005), &mut a, &mut b, &SolverConfig::corrected()).unwrap();

        assert_eq!(a.shape, before_a);
        assert_eq!(b.shape, before_b);
    }

    #[test]
    fn test_immovable_body_never_moves() {
        let floor_shape = Aabb::new(Vec2::new(0.0, 10.0), Vec2::new(100.0, 20.0));
        let mut falling = RigidBody::new(Aabb::new(Vec2::new(10.0, 1.0), Vec2::new(20.0, 11.0)))
            .with_velocity(Vec2::new(0.0, 4.0))
            .with_restitution(0.0);
        let mut floor = RigidBody::fixed(floor_shape);

        resolve(&collision(Vec2::Y, 1.0), &mut falling, &mut floor, &SolverConfig::corrected()).unwrap();

        assert_eq!(floor.shape, floor_shape);
        assert_eq!(floor.velocity, Vec2::ZERO);
        assert!(falling.velocity.is_near_zero(1e-5));
        assert!(falling.shape.max.y < 11.0);
    }

    #[test]
    fn test_degenerate_mass_pair() {
        let mut a = RigidBody::fixed(Aabb::new(Vec2::ZERO, Vec2::ONE)).with_velocity(Vec2::X);
        let mut b = RigidBody::fixed(Aabb::new(Vec2::ZERO, Vec2::ONE));

        let err = resolve(&collision(Vec2::X, 1.0), &mut a, &mut b, &SolverConfig::default()).unwrap_err();

        assert_eq!(
            err,
            PhysicsError::DegenerateMassPair {
                a: BodyHandle::new(0),
                b: BodyHandle::new(1),
            }
        );
        assert_eq!(a.velocity, Vec2::X);
    }

    #[test]
    fn test_total_mass_ratio_against_immovable_is_rejected() {
        let mut falling = body_at(0.0, Vec2::new(0.0, 3.0));
        let mut floor = RigidBody::fixed(Aabb::new(Vec2::new(0.0, 9.0), Vec2::new(50.0, 19.0)));
        let before = falling.clone();

        let err = resolve(&collision(Vec2::Y, 1.0), &mut falling, &mut floor, &SolverConfig::default()).unwrap_err();

        assert_eq!(err, PhysicsError::NonFiniteResult { handle: BodyHandle::new(0) });
        assert_eq!(falling, before);
    }

    #[test]
    fn test_zero_normal_is_a_no_op() {
        let mut a = body_at(0.0, Vec2::new(5.0, 0.0));
        let mut b = body_at(8.0, Vec2::new(-5.0, 0.0));
        let (before_a, before_b) = (a.clone(), b.clone());

        let applied = resolve(&collision(Vec2::ZERO, 2.0), &mut a, &mut b, &SolverConfig::default()).unwrap();

        assert!(applied);
        assert_eq!(a, before_a);
        assert_eq!(b, before_b);
    }

    #[test]
    fn test_velocity_clamp_rules() {
        let limit = Vec2::new(3.0, 3.0);
        let v = Vec2::new(-10.0, 10.0);

        assert_eq!(VelocityClamp::Lexicographic.apply(v, limit), v);
        assert_eq!(VelocityClamp::ComponentWise.apply(v, limit), Vec2::new(-3.0, 3.0));
        assert_eq!(VelocityClamp::Disabled.apply(v, limit), v);
        assert_eq!(VelocityClamp::Lexicographic.apply(Vec2::new(4.0, -10.0), limit), limit);
    }
}
