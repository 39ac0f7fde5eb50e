mod vec2;

pub use vec2::Vec2;
