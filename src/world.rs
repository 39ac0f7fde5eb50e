use crate::collision::{detect, BodyHandle, Collision, CollisionQueue, DetectionPolicy, ResolutionOrder};
use crate::dynamics::{integrate_semi_implicit_euler, ForceField, RigidBody};
use crate::error::{PhysicsError, PhysicsResult};
use crate::geometry::Aabb;
use crate::math::Vec2;
use crate::solver::{resolve, SolverConfig};
use crate::storage::BodyStorage;

/// Configuration for the physics world
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Gravity along +y (screen down)
    pub gravity: f32,
    /// Force applied to every dynamic body
    pub global_force: Vec2,
    /// Overlap to collision record rules
    pub detection: DetectionPolicy,
    /// Collision response configuration
    pub solver: SolverConfig,
    /// Drain order of the pending collision queue
    pub order: ResolutionOrder,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: 10.0,
            global_force: Vec2::ZERO,
            detection: DetectionPolicy::default(),
            solver: SolverConfig::default(),
            order: ResolutionOrder::Lifo,
        }
    }
}

impl WorldConfig {
    /// Conventional physics for every policy: minimum-overlap axis, signed unit
    /// normals, momentum-conserving impulses and per-component velocity limits.
    pub fn corrected() -> Self {
        Self {
            detection: DetectionPolicy::corrected(),
            solver: SolverConfig::corrected(),
            ..Self::default()
        }
    }

    /// Sets the gravity
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets the drain order of the pending collision queue
    pub fn with_order(mut self, order: ResolutionOrder) -> Self {
        self.order = order;
        self
    }
}

/// Summary of one [`World::step`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Bodies passed to the integrator without error
    pub integrated: usize,
    /// Collision records queued by the detection sweep
    pub collisions_detected: usize,
    /// Collision records resolved without error
    pub collisions_resolved: usize,
    /// Per-body and per-pair errors; each one was skipped and the frame went on
    pub diagnostics: Vec<PhysicsError>,
}

impl StepReport {
    /// Returns true if nothing was skipped
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// The main physics world containing all bodies and the pending collisions.
///
/// A frame is driven either with [`World::step`] or by calling the individual phases:
/// [`integrate`](World::integrate) every active body, [`detect_collision`](World::detect_collision)
/// every pair, then [`resolve_next`](World::resolve_next) until it returns `Ok(None)`.
#[derive(Debug, Clone)]
pub struct World {
    /// Configuration
    config: WorldConfig,
    /// Body records and handle bookkeeping
    storage: BodyStorage,
    /// Collisions detected but not resolved yet
    collisions: CollisionQueue,
    /// Current simulation time
    time: f32,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl World {
    /// Creates a new physics world with the given configuration
    pub fn new(config: WorldConfig) -> Self {
        Self {
            collisions: CollisionQueue::new(config.order),
            config,
            storage: BodyStorage::new(),
            time: 0.0,
        }
    }

    /// Creates a world with default policies and the given gravity
    pub fn with_gravity(gravity: f32) -> Self {
        Self::new(WorldConfig::default().with_gravity(gravity))
    }

    /// Adds a body and returns its handle
    pub fn add_object(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.storage.insert(body);
        log::debug!("added body {handle} ({} active)", self.storage.len());
        handle
    }

    /// Removes a body from the active list
    pub fn remove_object(&mut self, handle: BodyHandle) -> PhysicsResult<()> {
        self.storage.remove(handle)?;
        log::debug!("removed body {handle} ({} active)", self.storage.len());
        Ok(())
    }

    /// Retires every body and restarts handle allocation at zero.
    ///
    /// Pending collisions are dropped as well, since their handles may be reissued.
    pub fn clear(&mut self) {
        log::debug!("clearing {} bodies", self.storage.len());
        self.storage.clear();
        self.collisions.clear();
    }

    /// Advances one body by `dt` seconds. Fixed bodies are left unchanged.
    ///
    /// If the result is not finite the body keeps its previous state.
    pub fn integrate(&mut self, handle: BodyHandle, dt: f32) -> PhysicsResult<()> {
        let field = ForceField {
            gravity: self.config.gravity,
            global_force: self.config.global_force,
        };
        let (body, force) = self.storage.get_with_force_mut(handle)?;

        let mut next = body.clone();
        integrate_semi_implicit_euler(&mut next, &field, force, dt);
        if !next.velocity.is_finite() || !next.shape.is_finite() {
            return Err(PhysicsError::NonFiniteResult { handle });
        }

        *body = next;
        Ok(())
    }

    /// Tests two bodies for overlap, queueing a collision record if they overlap.
    ///
    /// A body never collides with itself.
    pub fn detect_collision(&mut self, handle_a: BodyHandle, handle_b: BodyHandle) -> PhysicsResult<bool> {
        let a = self.storage.get(handle_a)?;
        let b = self.storage.get(handle_b)?;
        if handle_a == handle_b {
            return Ok(false);
        }

        match detect(handle_a, &a.shape, handle_b, &b.shape, &self.config.detection) {
            Some(collision) => {
                log::trace!(
                    "collision {handle_a} / {handle_b}: normal {:?}, penetration {}",
                    collision.normal,
                    collision.penetration
                );
                self.collisions.push(collision);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Takes the next pending collision and resolves it.
    ///
    /// Returns `Ok(None)` once the queue is empty. A record that fails is discarded,
    /// so calling again continues with the next one.
    pub fn resolve_next(&mut self) -> PhysicsResult<Option<Collision>> {
        let Some(collision) = self.collisions.pop() else {
            return Ok(None);
        };

        let (body_a, body_b) = self.storage.pair_mut(collision.body_a, collision.body_b)?;
        resolve(&collision, body_a, body_b, &self.config.solver)?;
        Ok(Some(collision))
    }

    /// Runs one frame: integrate every active body, detect every pair in active order,
    /// then resolve every detected collision.
    ///
    /// Per-body and per-pair failures are logged and collected in the report without
    /// stopping the frame. Fails only if collisions from an earlier frame are still
    /// pending.
    pub fn step(&mut self, dt: f32) -> PhysicsResult<StepReport> {
        if !self.collisions.is_empty() {
            return Err(PhysicsError::UndrainedCollisions {
                pending: self.collisions.len(),
            });
        }

        let mut report = StepReport::default();
        let handles = self.storage.active().to_vec();

        for &handle in &handles {
            match self.integrate(handle, dt) {
                Ok(()) => report.integrated += 1,
                Err(err) => report.diagnostics.push(err),
            }
        }

        for (i, &handle_a) in handles.iter().enumerate() {
            for &handle_b in &handles[i + 1..] {
                match self.detect_collision(handle_a, handle_b) {
                    Ok(true) => report.collisions_detected += 1,
                    Ok(false) => {}
                    Err(err) => report.diagnostics.push(err),
                }
            }
        }

        loop {
            match self.resolve_next() {
                Ok(Some(_)) => report.collisions_resolved += 1,
                Ok(None) => break,
                Err(err) => report.diagnostics.push(err),
            }
        }

        for err in &report.diagnostics {
            log::warn!("skipped during step: {err}");
        }

        self.time += dt;
        Ok(report)
    }

    /// Removes every body lying entirely outside `bounds` and returns their handles
    pub fn remove_outside(&mut self, bounds: Aabb) -> Vec<BodyHandle> {
        let outside: Vec<BodyHandle> = self
            .iter()
            .filter(|(_, body)| !body.shape.intersects(bounds))
            .map(|(handle, _)| handle)
            .collect();

        for &handle in &outside {
            // Collected from the active list just above
            if let Err(err) = self.remove_object(handle) {
                log::warn!("failed to cull body {handle}: {err}");
            }
        }

        outside
    }

    /// Gets a reference to a body
    pub fn body(&self, handle: BodyHandle) -> PhysicsResult<&RigidBody> {
        self.storage.get(handle)
    }

    /// Gets a mutable reference to a body
    pub fn body_mut(&mut self, handle: BodyHandle) -> PhysicsResult<&mut RigidBody> {
        self.storage.get_mut(handle)
    }

    /// Gets the velocity of a body
    pub fn velocity(&self, handle: BodyHandle) -> PhysicsResult<Vec2> {
        Ok(self.storage.get(handle)?.velocity)
    }

    /// Sets the velocity of a body
    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) -> PhysicsResult<()> {
        self.storage.get_mut(handle)?.velocity = velocity;
        Ok(())
    }

    /// Adds to a body's accumulated force. The force persists until cleared.
    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec2) -> PhysicsResult<()> {
        *self.storage.force_mut(handle)? += force;
        Ok(())
    }

    /// Gets a body's accumulated force
    pub fn force(&self, handle: BodyHandle) -> PhysicsResult<Vec2> {
        self.storage.force(handle)
    }

    /// Resets a body's accumulated force to zero
    pub fn clear_force(&mut self, handle: BodyHandle) -> PhysicsResult<()> {
        *self.storage.force_mut(handle)? = Vec2::ZERO;
        Ok(())
    }

    /// Live handles, in the order bodies are simulated and drawn
    pub fn active_handles(&self) -> &[BodyHandle] {
        self.storage.active()
    }

    /// Retired handles
    pub fn freed_handles(&self) -> &[BodyHandle] {
        self.storage.freed()
    }

    /// Returns an iterator over live bodies in active order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.storage
            .active()
            .iter()
            .filter_map(|&handle| self.storage.get(handle).ok().map(|body| (handle, body)))
    }

    /// Returns the number of bodies in the world
    pub fn num_bodies(&self) -> usize {
        self.storage.len()
    }

    /// Collisions detected but not resolved yet
    pub fn pending_collisions(&self) -> &CollisionQueue {
        &self.collisions
    }

    /// Sets the gravity
    pub fn set_gravity(&mut self, gravity: f32) {
        self.config.gravity = gravity;
    }

    /// Gets the gravity
    pub fn gravity(&self) -> f32 {
        self.config.gravity
    }

    /// Sets the force applied to every dynamic body
    pub fn set_global_force(&mut self, force: Vec2) {
        self.config.global_force = force;
    }

    /// Gets the force applied to every dynamic body
    pub fn global_force(&self) -> Vec2 {
        self.config.global_force
    }

    /// Returns the configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Replaces the configuration, including the pending queue's drain order
    pub fn set_config(&mut self, config: WorldConfig) {
        self.collisions.set_order(config.order);
        self.config = config;
    }

    /// Returns the current simulation time
    pub fn time(&self) -> f32 {
        self.time
    }
}
