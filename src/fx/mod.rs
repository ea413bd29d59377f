mod dispatcher;

pub use dispatcher::{DispatchStats, EffectDispatcher, FALLBACK_RETURN_DELAY};

/// Well-known effect names used by the gameplay layer.
pub mod names {
    pub const COIN_COLLECT: &str = "CoinCollect";
    pub const POWERUP: &str = "Powerup";
    pub const OBSTACLE_HIT: &str = "ObstacleHit";
    pub const LEVEL_UP: &str = "LevelUp";
    pub const COMBO: &str = "Combo";
}
