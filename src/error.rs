use crate::collision::BodyHandle;

/// Errors reported by [`World`](crate::World) operations.
///
/// Handle errors indicate a contract violation by the caller. The remaining variants are
/// per-pair or per-body diagnostics: the offending record or update is discarded and the
/// rest of the frame proceeds.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    /// The handle is not in the active list (never issued, removed, or cleared).
    #[error("body {0} is not active")]
    InvalidHandle(BodyHandle),

    /// Both bodies of a collision have zero inverse mass, so no impulse can be split
    /// between them.
    #[error("bodies {a} and {b} both have infinite mass")]
    DegenerateMassPair { a: BodyHandle, b: BodyHandle },

    /// Integration or resolution produced a NaN or infinite velocity or position.
    #[error("non-finite velocity or position computed for body {handle}")]
    NonFiniteResult { handle: BodyHandle },

    /// A frame was started while collision records from the previous one were still queued.
    #[error("{pending} collision records were left unresolved from the previous frame")]
    UndrainedCollisions { pending: usize },
}

/// Result alias used throughout the crate.
pub type PhysicsResult<T> = Result<T, PhysicsError>;
