use crate::math::Vec2;

/// An axis-aligned rectangle defined by minimum and maximum corners.
///
/// This is the only collision shape: bodies never rotate, so the box is both the
/// shape and its own bounding volume.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y values)
    pub min: Vec2,
    /// Maximum corner (largest x, y values)
    pub max: Vec2,
}

impl Aabb {
    /// Creates an AABB from minimum and maximum points
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Creates an AABB from its center and full size
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    /// Width (`max.x - min.x`)
    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height (`max.y - min.y`)
    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the full size of the AABB
    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the half-extents (half the size in each dimension)
    #[inline]
    pub fn half_extents(self) -> Vec2 {
        self.size() * 0.5
    }

    /// Moves both corners by `offset`; the size is unchanged.
    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        self.min += offset;
        self.max += offset;
    }

    /// Returns a copy moved by `offset`
    #[inline]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.translate(offset);
        self
    }

    /// Returns true if both corners are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns true if this AABB contains the given point
    #[inline]
    pub fn contains_point(self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Returns true if this AABB touches or overlaps another AABB
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let aabb = Aabb::new(Vec2::new(-1.0, -2.0), Vec2::new(1.0, 2.0));
        assert_eq!(aabb.center(), Vec2::ZERO);
        assert_eq!(aabb.half_extents(), Vec2::new(1.0, 2.0));
        assert_eq!(aabb.width(), 2.0);
        assert_eq!(aabb.height(), 4.0);
    }

    #[test]
    fn test_from_center_size() {
        let aabb = Aabb::from_center_size(Vec2::new(32.0, 32.0), Vec2::new(64.0, 16.0));
        assert_eq!(aabb.min, Vec2::new(0.0, 24.0));
        assert_eq!(aabb.max, Vec2::new(64.0, 40.0));
    }

    #[test]
    fn test_translate_keeps_size() {
        let aabb = Aabb::new(Vec2::ZERO, Vec2::new(3.0, 5.0));
        let moved = aabb.translated(Vec2::new(-1.5, 10.0));

        assert_eq!(moved.min, Vec2::new(-1.5, 10.0));
        assert_eq!(moved.size(), aabb.size());
    }

    #[test]
    fn test_intersects() {
        let a = Aabb::new(Vec2::ZERO, Vec2::ONE);
        let b = Aabb::new(Vec2::new(0.5, 0.5), Vec2::new(1.5, 1.5));
        let c = Aabb::new(Vec2::new(2.0, 0.0), Vec2::new(3.0, 1.0));

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb::new(Vec2::ZERO, Vec2::ONE);
        assert!(aabb.contains_point(Vec2::new(0.5, 0.5)));
        assert!(aabb.contains_point(Vec2::ONE));
        assert!(!aabb.contains_point(Vec2::new(2.0, 0.5)));
    }
}
