mod score;

pub use score::{COMBO_MESSAGES, COMBO_THRESHOLDS, ScoreDisplay};
