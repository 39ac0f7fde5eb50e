use std::collections::VecDeque;
use std::fmt;

use crate::math::Vec2;

/// A handle to a body in the physics world.
///
/// Handles are issued in increasing order and a removed handle is not issued again
/// until the world is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    /// Creates a new body handle
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the storage slot of this handle
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An overlap found between two bodies, waiting to be resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// First body; pushed against the normal
    pub body_a: BodyHandle,
    /// Second body; pushed along the normal
    pub body_b: BodyHandle,
    /// Separation direction from A towards B. May be zero, see
    /// [`PositiveXNormal::Zero`](super::PositiveXNormal::Zero).
    pub normal: Vec2,
    /// Overlap along the chosen axis (positive when overlapping)
    pub penetration: f32,
}

/// Order in which pending collisions are handed to the resolver.
///
/// The outcome differs when several records in one frame share a body, because each
/// resolution moves the bodies that later records refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionOrder {
    /// Last detected, first resolved (a stack)
    #[default]
    Lifo,
    /// Detection order
    Fifo,
    /// Largest penetration first; ties resolve in detection order
    DeepestFirst,
}

/// Collisions detected in the current frame that have not been resolved yet
#[derive(Debug, Clone, Default)]
pub struct CollisionQueue {
    records: VecDeque<Collision>,
    order: ResolutionOrder,
}

impl CollisionQueue {
    /// Creates an empty queue drained in the given order
    pub fn new(order: ResolutionOrder) -> Self {
        Self {
            records: VecDeque::new(),
            order,
        }
    }

    /// Returns the drain order
    pub fn order(&self) -> ResolutionOrder {
        self.order
    }

    /// Changes the drain order. Records already queued are affected too.
    pub fn set_order(&mut self, order: ResolutionOrder) {
        self.order = order;
    }

    /// Queues a record
    pub fn push(&mut self, collision: Collision) {
        self.records.push_back(collision);
    }

    /// Takes the next record to resolve
    pub fn pop(&mut self) -> Option<Collision> {
        match self.order {
            ResolutionOrder::Lifo => self.records.pop_back(),
            ResolutionOrder::Fifo => self.records.pop_front(),
            ResolutionOrder::DeepestFirst => {
                let mut deepest: Option<(usize, f32)> = None;
                for (i, record) in self.records.iter().enumerate() {
                    match deepest {
                        Some((_, depth)) if record.penetration <= depth => {}
                        _ => deepest = Some((i, record.penetration)),
                    }
                }
                let (index, _) = deepest?;
                self.records.remove(index)
            }
        }
    }

    /// Returns the number of queued records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are queued
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every queued record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates over queued records in detection order
    pub fn iter(&self) -> impl Iterator<Item = &Collision> {
        self.records.iter()
    }
}
