//! Handle allocation and per-body storage.
//!
//! Slots are indexed by handle and never compacted. Removing a body only retires its
//! handle; the slot keeps its last contents and is not handed out again, so storage grows
//! with the total number of bodies ever added. [`BodyStorage::clear`] is the one
//! exception: it restarts allocation at slot zero, overwriting old slots as new bodies
//! arrive.

use crate::collision::BodyHandle;
use crate::dynamics::RigidBody;
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::Vec2;

/// Owns every body record and tracks which handles are live
#[derive(Debug, Clone, Default)]
pub struct BodyStorage {
    /// Live handles in insertion order
    active: Vec<BodyHandle>,
    /// Retired handles in retirement order
    freed: Vec<BodyHandle>,
    bodies: Vec<RigidBody>,
    /// Accumulated force per slot
    forces: Vec<Vec2>,
    /// Liveness per slot, for O(1) handle checks
    live: Vec<bool>,
    next: u32,
}

impl BodyStorage {
    /// Creates empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `body` in the next slot and returns its handle.
    ///
    /// The slot's accumulated force starts at zero.
    pub fn insert(&mut self, body: RigidBody) -> BodyHandle {
        let handle = BodyHandle::new(self.next);
        let index = handle.index();

        if index < self.bodies.len() {
            self.bodies[index] = body;
            self.forces[index] = Vec2::ZERO;
            self.live[index] = true;
        } else {
            self.bodies.push(body);
            self.forces.push(Vec2::ZERO);
            self.live.push(true);
        }

        self.active.push(handle);
        self.next += 1;
        handle
    }

    /// Retires `handle`. Its slot contents stay in storage but are unreachable.
    pub fn remove(&mut self, handle: BodyHandle) -> PhysicsResult<()> {
        let position = self
            .active
            .iter()
            .position(|&h| h == handle)
            .ok_or(PhysicsError::InvalidHandle(handle))?;

        let removed = self.active.remove(position);
        self.live[removed.index()] = false;
        self.freed.push(removed);
        Ok(())
    }

    /// Retires every active handle and restarts allocation at slot zero
    pub fn clear(&mut self) {
        for handle in self.active.drain(..) {
            self.live[handle.index()] = false;
            self.freed.push(handle);
        }
        self.next = 0;
    }

    /// Returns true if `handle` is in the active list
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.live.get(handle.index()).copied().unwrap_or(false)
    }

    fn check(&self, handle: BodyHandle) -> PhysicsResult<usize> {
        if self.contains(handle) {
            Ok(handle.index())
        } else {
            Err(PhysicsError::InvalidHandle(handle))
        }
    }

    /// Gets a reference to a live body
    pub fn get(&self, handle: BodyHandle) -> PhysicsResult<&RigidBody> {
        let index = self.check(handle)?;
        Ok(&self.bodies[index])
    }

    /// Gets a mutable reference to a live body
    pub fn get_mut(&mut self, handle: BodyHandle) -> PhysicsResult<&mut RigidBody> {
        let index = self.check(handle)?;
        Ok(&mut self.bodies[index])
    }

    /// Gets a live body together with its accumulated force
    pub fn get_with_force_mut(&mut self, handle: BodyHandle) -> PhysicsResult<(&mut RigidBody, Vec2)> {
        let index = self.check(handle)?;
        Ok((&mut self.bodies[index], self.forces[index]))
    }

    /// Gets mutable references to two different live bodies
    pub fn pair_mut(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
    ) -> PhysicsResult<(&mut RigidBody, &mut RigidBody)> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        Ok(get_two_mut(&mut self.bodies, a, b))
    }

    /// Accumulated force of a live body
    pub fn force(&self, handle: BodyHandle) -> PhysicsResult<Vec2> {
        let index = self.check(handle)?;
        Ok(self.forces[index])
    }

    /// Mutable accumulated force of a live body
    pub fn force_mut(&mut self, handle: BodyHandle) -> PhysicsResult<&mut Vec2> {
        let index = self.check(handle)?;
        Ok(&mut self.forces[index])
    }

    /// Live handles in insertion order
    pub fn active(&self) -> &[BodyHandle] {
        &self.active
    }

    /// Retired handles in retirement order
    pub fn freed(&self) -> &[BodyHandle] {
        &self.freed
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns true if no body is live
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of allocated slots, live or not
    pub fn slot_count(&self) -> usize {
        self.bodies.len()
    }
}

/// Gets mutable references to two elements at different indices
fn get_two_mut(slice: &mut [RigidBody], a: usize, b: usize) -> (&mut RigidBody, &mut RigidBody) {
    assert!(a != b);
    if a < b {
        let (left, right) = slice.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = slice.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
