use crate::types::{Color, Vec2, Vec3};

/// Visual state of one UI element, written by animations and read by the
/// host renderer after each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub scale: Vec3,
    pub opacity: f32,
    pub anchored_position: Vec2,
    pub color: Color,
    pub visible: bool,
}

impl Visual {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            opacity: 1.0,
            anchored_position: Vec2::ZERO,
            color: Color::WHITE,
            visible: true,
        }
    }
}
