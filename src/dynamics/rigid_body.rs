use crate::geometry::Aabb;
use crate::math::Vec2;

/// How a body takes part in integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyType {
    /// Fixed bodies are never integrated. They can still be pushed by collisions
    /// unless their inverse mass is zero.
    Fixed,
    /// Dynamic bodies are moved by gravity, forces and their velocity
    #[default]
    Dynamic,
}

/// Display color of a body, RGBA in `0.0..=1.0`.
///
/// The simulation never reads it; it is carried for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Creates a color from RGBA components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A non-rotating rectangle in the simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RigidBody {
    /// Rectangle in world space
    pub shape: Aabb,
    /// Inverse mass (0 for infinite mass / immovable)
    pub inv_mass: f32,
    /// Restitution (bounciness)
    pub restitution: f32,
    /// Linear velocity
    pub velocity: Vec2,
    /// Upper velocity limit applied after collision response
    pub max_velocity: Vec2,
    /// Acceleration limit. Stored for drivers; the simulation does not apply it.
    pub max_acceleration: Vec2,
    /// Render color
    pub color: Color,
    /// Body type (fixed, dynamic)
    pub body_type: BodyType,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            shape: Aabb::default(),
            inv_mass: 1.0,
            restitution: 0.2,
            velocity: Vec2::ZERO,
            max_velocity: Vec2::INFINITY,
            max_acceleration: Vec2::INFINITY,
            color: Color::WHITE,
            body_type: BodyType::Dynamic,
        }
    }
}

impl RigidBody {
    /// Creates a dynamic body with unit mass occupying `shape`
    pub fn new(shape: Aabb) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Creates a dynamic body from its center and full size
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::new(Aabb::from_center_size(center, size))
    }

    /// Creates an immovable body: fixed type and infinite mass
    pub fn fixed(shape: Aabb) -> Self {
        Self {
            shape,
            inv_mass: 0.0,
            body_type: BodyType::Fixed,
            ..Self::default()
        }
    }

    /// Sets the body type
    pub fn with_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    /// Sets the mass (automatically computes inverse mass).
    ///
    /// Non-positive or infinite masses give an immovable body.
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.inv_mass = if mass > 0.0 && mass.is_finite() {
            1.0 / mass
        } else {
            0.0
        };
        self
    }

    /// Sets the inverse mass directly
    pub fn with_inv_mass(mut self, inv_mass: f32) -> Self {
        self.inv_mass = inv_mass.max(0.0);
        self
    }

    /// Sets restitution
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    /// Sets the initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the velocity limit
    pub fn with_max_velocity(mut self, max_velocity: Vec2) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    /// Sets the acceleration limit
    pub fn with_max_acceleration(mut self, max_acceleration: Vec2) -> Self {
        self.max_acceleration = max_acceleration;
        self
    }

    /// Sets the render color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the center of the rectangle
    pub fn center(&self) -> Vec2 {
        self.shape.center()
    }

    /// Returns the mass (inverse of inv_mass, or infinity for immovable bodies)
    pub fn mass(&self) -> f32 {
        if self.inv_mass > 0.0 {
            1.0 / self.inv_mass
        } else {
            f32::INFINITY
        }
    }

    /// Returns true if this body has finite mass
    pub fn has_finite_mass(&self) -> bool {
        self.inv_mass > 0.0
    }

    /// Returns true if this is a dynamic body
    pub fn is_dynamic(&self) -> bool {
        self.body_type == BodyType::Dynamic
    }

    /// Returns true if this is a fixed body
    pub fn is_fixed(&self) -> bool {
        self.body_type == BodyType::Fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let body = RigidBody::default();
        assert!(body.is_dynamic());
        assert_eq!(body.inv_mass, 1.0);
        assert_eq!(body.restitution, 0.2);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.max_velocity, Vec2::INFINITY);
    }

    #[test]
    fn test_with_mass() {
        let body = RigidBody::default().with_mass(4.0);
        assert!((body.inv_mass - 0.25).abs() < 0.0001);
        assert!((body.mass() - 4.0).abs() < 0.0001);

        let heavy = RigidBody::default().with_mass(0.0);
        assert!(!heavy.has_finite_mass());
        assert_eq!(heavy.mass(), f32::INFINITY);
    }

    #[test]
    fn test_fixed_body() {
        let body = RigidBody::fixed(Aabb::new(Vec2::new(0.0, 500.0), Vec2::new(900.0, 600.0)));

        assert!(body.is_fixed());
        assert!(!body.has_finite_mass());
        assert_eq!(body.center(), Vec2::new(450.0, 550.0));
    }

    #[test]
    fn test_from_center_size() {
        let body = RigidBody::from_center_size(Vec2::new(100.0, 100.0), Vec2::new(64.0, 64.0))
            .with_color(Color::RED);

        assert_eq!(body.shape.min, Vec2::new(68.0, 68.0));
        assert_eq!(body.shape.max, Vec2::new(132.0, 132.0));
        assert_eq!(body.color, Color::RED);
    }
}
