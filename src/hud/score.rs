//! Animated score, multiplier, and combo readouts.

use crate::tween::TweenPlayer;
use crate::types::{self, Color, Vec3};
use crate::ui::visual::Visual;

/// Combo counts that trigger an achievement flash.
pub const COMBO_THRESHOLDS: [u32; 4] = [5, 10, 20, 50];
pub const COMBO_MESSAGES: [&str; 4] = ["Nice!", "Great!", "Awesome!", "Legendary!"];

const MAX_COMBO: u32 = 100;
const FLASH_DURATION: f32 = 1.5;
const FLASH_PEAK_SCALE: f32 = 1.5;
const FLASH_RISE_FRACTION: f32 = 0.3;

/// One HUD text element: its string plus the renderer-facing state and the
/// pop animation driving it.
#[derive(Debug, Default)]
struct TextElement {
    text: String,
    visual: Visual,
    player: TweenPlayer,
    rest_scale: Vec3,
}

impl TextElement {
    fn new() -> Self {
        Self {
            rest_scale: Vec3::ONE,
            ..Self::default()
        }
    }

    fn pop(&mut self, pop_scale: f32, duration: f32) {
        self.player
            .pulse(self.rest_scale, pop_scale - 1.0, duration);
    }

    fn advance(&mut self, dt: f32) {
        self.player.advance(dt, &mut self.visual);
    }
}

/// Achievement message taking over the combo text for a moment.
#[derive(Debug, Clone, Copy)]
struct FlashRun {
    elapsed: f32,
    base_scale: Vec3,
}

/// Score/combo HUD state machine: counts the displayed score toward the
/// target, pops elements on changes, and tracks the combo meter.
#[derive(Debug)]
pub struct ScoreDisplay {
    displayed_score: i64,
    target_score: i64,
    counting: bool,
    /// Fraction of the remaining difference applied per second while counting.
    animation_speed: f32,
    pop_scale: f32,
    pop_duration: f32,
    multiplier_color: Color,
    combo_color: Color,
    combo: u32,
    combo_fill: f32,
    score: TextElement,
    multiplier: TextElement,
    combo_text: TextElement,
    flash: Option<FlashRun>,
}

impl ScoreDisplay {
    pub fn new() -> Self {
        let mut display = Self {
            displayed_score: 0,
            target_score: 0,
            counting: false,
            animation_speed: 2.0,
            pop_scale: 1.2,
            pop_duration: 0.2,
            multiplier_color: Color::YELLOW,
            combo_color: Color::CYAN,
            combo: 0,
            combo_fill: 0.0,
            score: TextElement::new(),
            multiplier: TextElement::new(),
            combo_text: TextElement::new(),
            flash: None,
        };
        display.refresh_score_text();
        display
    }

    /// Set the score, either counting up to it or snapping.
    pub fn set_score(&mut self, score: i64, animate: bool) {
        self.target_score = score;
        if animate {
            self.counting = true;
        } else {
            self.displayed_score = score;
            self.counting = false;
            self.refresh_score_text();
        }
    }

    /// Add points and pop the score text.
    pub fn add_score(&mut self, points: i64) {
        self.set_score(self.target_score + points, true);
        self.score.pop(self.pop_scale, self.pop_duration);
    }

    pub fn set_multiplier(&mut self, multiplier: u32) {
        if multiplier > 1 {
            self.multiplier.text = format!("x{multiplier}");
            self.multiplier.visual.color = Color::lerp(
                Color::WHITE,
                self.multiplier_color,
                types::clamp01(multiplier as f32 / 10.0),
            );
            self.multiplier.pop(self.pop_scale, self.pop_duration);
        } else {
            self.multiplier.text.clear();
        }
    }

    pub fn increment_combo(&mut self) {
        self.combo += 1;
        self.refresh_combo();
        self.check_threshold();
        if self.flash.is_none() {
            self.combo_text.pop(self.pop_scale, self.pop_duration);
        }
    }

    pub fn reset_combo(&mut self) {
        self.combo = 0;
        self.refresh_combo();
    }

    pub fn advance(&mut self, dt: f32) {
        self.advance_counting(dt);
        self.score.advance(dt);
        self.multiplier.advance(dt);
        if self.flash.is_some() {
            self.advance_flash(dt);
        } else {
            self.combo_text.advance(dt);
        }
    }

    pub fn displayed_score(&self) -> i64 {
        self.displayed_score
    }

    pub fn score_text(&self) -> &str {
        &self.score.text
    }

    pub fn score_visual(&self) -> &Visual {
        &self.score.visual
    }

    pub fn multiplier_text(&self) -> &str {
        &self.multiplier.text
    }

    pub fn multiplier_visual(&self) -> &Visual {
        &self.multiplier.visual
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn combo_text(&self) -> &str {
        &self.combo_text.text
    }

    pub fn combo_visual(&self) -> &Visual {
        &self.combo_text.visual
    }

    /// Fill amount of the combo meter, 0..=1.
    pub fn combo_fill(&self) -> f32 {
        self.combo_fill
    }

    pub fn is_counting(&self) -> bool {
        self.counting
    }

    fn advance_counting(&mut self, dt: f32) {
        if !self.counting {
            return;
        }
        if self.displayed_score < self.target_score {
            let difference = self.target_score - self.displayed_score;
            let increment = ((difference as f32) * self.animation_speed * dt).ceil() as i64;
            self.displayed_score =
                (self.displayed_score + increment.max(1)).min(self.target_score);
            self.refresh_score_text();
        }
        if self.displayed_score >= self.target_score {
            self.displayed_score = self.target_score;
            self.counting = false;
            self.refresh_score_text();
        }
    }

    fn refresh_score_text(&mut self) {
        self.score.text = format_thousands(self.displayed_score);
    }

    fn refresh_combo(&mut self) {
        if self.combo > 0 {
            self.combo_text.text = format!("Combo x{}", self.combo);
            self.combo_text.visual.color = Color::lerp(
                Color::WHITE,
                self.combo_color,
                types::clamp01(self.combo as f32 / MAX_COMBO as f32),
            );
        } else {
            self.combo_text.text.clear();
        }
        self.combo_fill = types::clamp01(self.combo as f32 / MAX_COMBO as f32);
    }

    fn check_threshold(&mut self) {
        for (i, &threshold) in COMBO_THRESHOLDS.iter().enumerate().rev() {
            if self.combo == threshold {
                self.start_flash(COMBO_MESSAGES[i]);
                break;
            }
        }
    }

    fn start_flash(&mut self, message: &str) {
        self.combo_text.player.stop();
        self.combo_text.text = message.to_string();
        self.flash = Some(FlashRun {
            elapsed: 0.0,
            base_scale: self.combo_text.rest_scale,
        });
    }

    fn advance_flash(&mut self, dt: f32) {
        let Some(mut flash) = self.flash else {
            return;
        };
        flash.elapsed += dt;
        let t = types::clamp01(flash.elapsed / FLASH_DURATION);
        let peak = flash.base_scale * FLASH_PEAK_SCALE;

        self.combo_text.visual.scale = if t < FLASH_RISE_FRACTION {
            Vec3::lerp(flash.base_scale, peak, t / FLASH_RISE_FRACTION)
        } else {
            Vec3::lerp(
                peak,
                flash.base_scale,
                (t - FLASH_RISE_FRACTION) / (1.0 - FLASH_RISE_FRACTION),
            )
        };
        self.combo_text.visual.color = self
            .combo_color
            .with_alpha(types::ping_pong(flash.elapsed * 3.0, 1.0));

        if t >= 1.0 {
            self.combo_text.visual.scale = flash.base_scale;
            self.flash = None;
            self.refresh_combo();
        } else {
            self.flash = Some(flash);
        }
    }
}

impl Default for ScoreDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Format with thousands separators, e.g. 1234567 -> "1,234,567".
fn format_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
