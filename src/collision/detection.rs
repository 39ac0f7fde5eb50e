use crate::geometry::Aabb;
use crate::math::Vec2;

use super::contact::{BodyHandle, Collision};

/// Which overlap axis a collision is resolved along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisSelection {
    /// Resolve along x only when the x overlap is strictly larger than the y overlap
    #[default]
    LargestOverlap,
    /// Resolve along x only when the x overlap is strictly smaller (minimum translation)
    SmallestOverlap,
}

/// Normal produced for an x-axis collision when B's center is not left of A's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositiveXNormal {
    /// The zero vector. The record is still queued, but resolving it applies no
    /// impulse and no positional correction.
    #[default]
    Zero,
    /// The unit vector `(1, 0)`, mirroring the `(-1, 0)` produced on the other side
    UnitX,
}

/// Rules used by [`detect`] to turn an overlap into a collision record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectionPolicy {
    pub axis: AxisSelection,
    pub positive_x_normal: PositiveXNormal,
}

impl DetectionPolicy {
    /// Smallest-overlap axis with signed unit normals on both axes
    pub fn corrected() -> Self {
        Self {
            axis: AxisSelection::SmallestOverlap,
            positive_x_normal: PositiveXNormal::UnitX,
        }
    }
}

/// Tests two rectangles for overlap.
///
/// Touching edges (zero overlap) do not count. The returned normal points from `a`
/// towards `b` and the penetration is the overlap along the chosen axis.
pub fn detect(
    handle_a: BodyHandle,
    a: &Aabb,
    handle_b: BodyHandle,
    b: &Aabb,
    policy: &DetectionPolicy,
) -> Option<Collision> {
    let n = b.center() - a.center();
    let half_a = a.half_extents();
    let half_b = b.half_extents();

    // Written as negated comparisons so NaN overlaps are rejected too
    let x_overlap = half_a.x + half_b.x - n.x.abs();
    if !(x_overlap > 0.0) {
        return None;
    }

    let y_overlap = half_a.y + half_b.y - n.y.abs();
    if !(y_overlap > 0.0) {
        return None;
    }

    let along_x = match policy.axis {
        AxisSelection::LargestOverlap => x_overlap > y_overlap,
        AxisSelection::SmallestOverlap => x_overlap < y_overlap,
    };

    let (normal, penetration) = if along_x {
        let normal = if n.x < 0.0 {
            Vec2::new(-1.0, 0.0)
        } else {
            match policy.positive_x_normal {
                PositiveXNormal::Zero => Vec2::ZERO,
                PositiveXNormal::UnitX => Vec2::X,
            }
        };
        (normal, x_overlap)
    } else {
        let normal = if n.y < 0.0 {
            Vec2::new(0.0, -1.0)
        } else {
            Vec2::Y
        };
        (normal, y_overlap)
    };

    Some(Collision {
        body_a: handle_a,
        body_b: handle_b,
        normal,
        penetration,
    })
}
