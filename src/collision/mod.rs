pub mod contact;
pub mod detection;

pub use contact::{BodyHandle, Collision, CollisionQueue, ResolutionOrder};
pub use detection::{detect, AxisSelection, DetectionPolicy, PositiveXNormal};
