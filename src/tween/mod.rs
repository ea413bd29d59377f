mod animator;
mod easing;

pub use animator::{TweenPlayer, TweenSpec};
pub use easing::Easing;
