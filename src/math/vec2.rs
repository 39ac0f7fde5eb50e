use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector with f32 components.
///
/// Used for rectangle corners, velocities, forces and collision normals.
/// The y axis points down, matching screen space: positive gravity pulls bodies
/// towards larger y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector (0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector along X axis (1, 0)
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit vector along Y axis (0, 1)
    pub const Y: Self = Self::new(0.0, 1.0);

    /// One vector (1, 1)
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Both components positive infinity
    pub const INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY);

    /// Creates a new Vec2 from components
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a Vec2 with both components set to the same value
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Dot product of two vectors
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length of the vector (avoids sqrt)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns true if the vector is approximately zero
    #[inline]
    pub fn is_near_zero(self, epsilon: f32) -> bool {
        self.length_squared() < epsilon * epsilon
    }

    /// Returns true if neither component is NaN or infinite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Clamps each component to the range [min, max]
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise multiplication
    #[inline]
    pub fn component_mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Orders two vectors by x, falling back to y when the x components tie.
    ///
    /// Returns `None` if a compared component is NaN.
    #[inline]
    pub fn lexicographic_cmp(self, other: Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }

    /// Returns whichever of `self` and `other` is lexicographically smaller.
    ///
    /// `self` wins ties and incomparable (NaN) cases, so `limit.lexicographic_min(v)`
    /// yields `v` only when `v` is strictly smaller than `limit`.
    #[inline]
    pub fn lexicographic_min(self, other: Self) -> Self {
        match other.lexicographic_cmp(self) {
            Some(Ordering::Less) => other,
            _ => self,
        }
    }

    /// Returns the distance between two points
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }
}

// Operator overloads

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    #[inline]
    fn mul(self, vec: Vec2) -> Vec2 {
        Vec2::new(self * vec.x, self * vec.y)
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    // Divides each component directly so that `v / 0.0` follows IEEE rules per axis.
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec2_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    #[test]
    fn test_construction() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vec2::splat(5.0), Vec2::new(5.0, 5.0));
        assert_eq!(Vec2::from([3.0, 4.0]), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_dot_and_length() {
        let a = Vec2::new(3.0, 4.0);
        assert!(approx_eq(a.dot(Vec2::new(2.0, -1.0)), 2.0));
        assert!(approx_eq(a.length(), 5.0));
        assert!(approx_eq(a.length_squared(), 25.0));
    }

    #[test]
    fn test_operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 5.0);

        assert!(vec2_approx_eq(a + b, Vec2::new(5.0, 7.0)));
        assert!(vec2_approx_eq(b - a, Vec2::new(3.0, 3.0)));
        assert!(vec2_approx_eq(a * 2.0, Vec2::new(2.0, 4.0)));
        assert!(vec2_approx_eq(2.0 * a, Vec2::new(2.0, 4.0)));
        assert!(vec2_approx_eq(a / 2.0, Vec2::new(0.5, 1.0)));
        assert!(vec2_approx_eq(-a, Vec2::new(-1.0, -2.0)));
    }

    #[test]
    fn test_lexicographic_min() {
        let limit = Vec2::new(5.0, 5.0);

        // x decides
        assert_eq!(limit.lexicographic_min(Vec2::new(4.0, 100.0)), Vec2::new(4.0, 100.0));
        assert_eq!(limit.lexicographic_min(Vec2::new(6.0, -100.0)), limit);

        // y breaks the tie
        assert_eq!(limit.lexicographic_min(Vec2::new(5.0, 4.0)), Vec2::new(5.0, 4.0));
        assert_eq!(limit.lexicographic_min(Vec2::new(5.0, 6.0)), limit);

        // NaN never replaces the limit
        assert_eq!(limit.lexicographic_min(Vec2::new(f32::NAN, 0.0)), limit);
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec2::new(1.0, -1.0).is_finite());
        assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
        assert!(!Vec2::INFINITY.is_finite());
    }
}
