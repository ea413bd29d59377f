//! Button micro-interactions: hover/press scaling, color blending, ripples,
//! shake and pulse feedback.

use rand::Rng;

use super::SoundCue;
use super::visual::Visual;
use crate::types::{self, Color, Vec2, Vec3};

const RIPPLE_END_SIZE: Vec2 = Vec2::new(200.0, 200.0);
const RIPPLE_START_ALPHA: f32 = 0.5;
const PULSE_PHASE: f32 = 0.15;
const PULSE_GAP: f32 = 0.1;

/// Visual tuning for one button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub hover_scale: f32,
    pub click_scale: f32,
    /// Rate of the per-tick approach toward the target scale/color.
    pub transition_speed: f32,
    pub normal_color: Color,
    pub hover_color: Color,
    pub pressed_color: Color,
    pub disabled_color: Color,
    pub ripple_duration: f32,
    /// Effect name dispatched on click, if any.
    pub click_effect: Option<String>,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            hover_scale: 1.05,
            click_scale: 0.95,
            transition_speed: 10.0,
            normal_color: Color::WHITE,
            hover_color: Color::rgb(0.9, 0.9, 1.0),
            pressed_color: Color::rgb(0.8, 0.8, 0.9),
            disabled_color: Color::rgb(0.5, 0.5, 0.5),
            ripple_duration: 0.5,
            click_effect: None,
        }
    }
}

/// Expanding, fading press ripple. Dropped once fully faded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub position: Vec2,
    pub size: Vec2,
    pub alpha: f32,
    elapsed: f32,
    duration: f32,
}

impl Ripple {
    fn new(position: Vec2, duration: f32) -> Self {
        Self {
            position,
            size: Vec2::ZERO,
            alpha: RIPPLE_START_ALPHA,
            elapsed: 0.0,
            duration: duration.max(f32::EPSILON),
        }
    }

    fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        let t = types::clamp01(self.elapsed / self.duration);
        self.size = Vec2::lerp(Vec2::ZERO, RIPPLE_END_SIZE, t);
        self.alpha = types::lerp(RIPPLE_START_ALPHA, 0.0, t);
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Feedback the host wires to audio and effect playback.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonEvent {
    Sound(SoundCue),
    PlayEffect { name: String, position: Vec2 },
}

#[derive(Debug, Clone, Copy)]
struct ShakeFx {
    intensity: f32,
    remaining: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PulsePhase {
    Up,
    Down,
    Gap,
}

#[derive(Debug, Clone, Copy)]
struct ButtonPulse {
    intensity: f32,
    remaining_pulses: u32,
    phase: PulsePhase,
    elapsed: f32,
}

/// Per-tick state machine for one interactive button.
///
/// Scale and color ease toward targets chosen by the pointer state; pointer
/// transitions also queue feedback events for the host to drain.
#[derive(Debug)]
pub struct ButtonFx {
    style: ButtonStyle,
    visual: Visual,
    rest_scale: Vec3,
    rest_position: Vec2,
    target_scale: Vec3,
    target_color: Color,
    interactable: bool,
    hovered: bool,
    pressed: bool,
    ripples: Vec<Ripple>,
    shake: Option<ShakeFx>,
    pulse: Option<ButtonPulse>,
    events: Vec<ButtonEvent>,
}

impl ButtonFx {
    pub fn new(style: ButtonStyle) -> Self {
        let mut visual = Visual::new();
        visual.color = style.normal_color;
        Self {
            target_scale: visual.scale,
            target_color: style.normal_color,
            rest_scale: visual.scale,
            rest_position: visual.anchored_position,
            visual,
            style,
            interactable: true,
            hovered: false,
            pressed: false,
            ripples: Vec::new(),
            shake: None,
            pulse: None,
            events: Vec::new(),
        }
    }

    /// Place the button and capture its rest transform.
    pub fn set_rest_transform(&mut self, position: Vec2, scale: Vec3) {
        self.rest_position = position;
        self.rest_scale = scale;
        self.visual.anchored_position = position;
        self.visual.scale = scale;
        self.target_scale = scale;
    }

    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Drain feedback queued since the last call.
    pub fn take_events(&mut self) -> Vec<ButtonEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pointer_enter(&mut self) {
        if !self.interactable {
            return;
        }
        self.hovered = true;
        self.target_scale = self.rest_scale * self.style.hover_scale;
        self.target_color = self.style.hover_color;
        self.events.push(ButtonEvent::Sound(SoundCue::Hover));
    }

    pub fn pointer_exit(&mut self) {
        if !self.interactable {
            return;
        }
        self.hovered = false;
        if !self.pressed {
            self.target_scale = self.rest_scale;
            self.target_color = self.style.normal_color;
        }
    }

    pub fn pointer_down(&mut self, position: Vec2) {
        if !self.interactable {
            return;
        }
        self.pressed = true;
        self.target_scale = self.rest_scale * self.style.click_scale;
        self.target_color = self.style.pressed_color;
        self.ripples
            .push(Ripple::new(position, self.style.ripple_duration));
        self.events.push(ButtonEvent::Sound(SoundCue::Click));
        if let Some(name) = &self.style.click_effect {
            self.events.push(ButtonEvent::PlayEffect {
                name: name.clone(),
                position: self.rest_position,
            });
        }
    }

    pub fn pointer_up(&mut self) {
        if !self.interactable {
            return;
        }
        self.pressed = false;
        if self.hovered {
            self.target_scale = self.rest_scale * self.style.hover_scale;
            self.target_color = self.style.hover_color;
        } else {
            self.target_scale = self.rest_scale;
            self.target_color = self.style.normal_color;
        }
    }

    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
        self.target_color = if interactable {
            self.style.normal_color
        } else {
            self.style.disabled_color
        };
        if !interactable {
            self.target_scale = self.rest_scale;
            self.hovered = false;
            self.pressed = false;
        }
    }

    /// Error feedback: random jitter around the rest position for `duration`,
    /// then an exact restore.
    pub fn shake(&mut self, intensity: f32, duration: f32) {
        self.shake = Some(ShakeFx {
            intensity,
            remaining: duration,
        });
    }

    /// Attention feedback: `count` scale pulses of the given intensity.
    pub fn pulse(&mut self, intensity: f32, count: u32) {
        if count == 0 {
            return;
        }
        self.pulse = Some(ButtonPulse {
            intensity,
            remaining_pulses: count,
            phase: PulsePhase::Up,
            elapsed: 0.0,
        });
    }

    pub fn advance(&mut self, dt: f32) {
        let blend = types::clamp01(dt * self.style.transition_speed);
        if self.pulse.is_none() {
            self.visual.scale = Vec3::lerp(self.visual.scale, self.target_scale, blend);
        }
        self.visual.color = Color::lerp(self.visual.color, self.target_color, blend);

        for ripple in &mut self.ripples {
            ripple.advance(dt);
        }
        self.ripples.retain(|r| !r.is_finished());

        self.advance_shake(dt);
        self.advance_pulse(dt);
    }

    fn advance_shake(&mut self, dt: f32) {
        let Some(mut shake) = self.shake else {
            return;
        };
        shake.remaining -= dt;
        if shake.remaining <= 0.0 {
            self.visual.anchored_position = self.rest_position;
            self.shake = None;
            return;
        }
        let mut rng = rand::thread_rng();
        let offset = Vec2::new(
            rng.gen_range(-1.0..=1.0) * shake.intensity,
            rng.gen_range(-1.0..=1.0) * shake.intensity,
        );
        self.visual.anchored_position = self.rest_position + offset;
        self.shake = Some(shake);
    }

    fn advance_pulse(&mut self, dt: f32) {
        let Some(mut pulse) = self.pulse else {
            return;
        };
        pulse.elapsed += dt;
        let peak = self.rest_scale * (1.0 + pulse.intensity);
        match pulse.phase {
            PulsePhase::Up => {
                let t = types::clamp01(pulse.elapsed / PULSE_PHASE);
                self.visual.scale = Vec3::lerp(self.rest_scale, peak, t);
                if t >= 1.0 {
                    pulse.phase = PulsePhase::Down;
                    pulse.elapsed = 0.0;
                }
            }
            PulsePhase::Down => {
                let t = types::clamp01(pulse.elapsed / PULSE_PHASE);
                self.visual.scale = Vec3::lerp(peak, self.rest_scale, t);
                if t >= 1.0 {
                    pulse.phase = PulsePhase::Gap;
                    pulse.elapsed = 0.0;
                }
            }
            PulsePhase::Gap => {
                if pulse.elapsed >= PULSE_GAP {
                    pulse.remaining_pulses -= 1;
                    if pulse.remaining_pulses == 0 {
                        self.visual.scale = self.rest_scale;
                        self.pulse = None;
                        return;
                    }
                    pulse.phase = PulsePhase::Up;
                    pulse.elapsed = 0.0;
                }
            }
        }
        self.pulse = Some(pulse);
    }
}
