mod impulse;

pub use impulse::{resolve, ImpulseScaling, SolverConfig, VelocityClamp, BAUMGARTE, SLOP};
