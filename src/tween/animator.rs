//! Tween state machines animating UI element attributes.

use super::easing::Easing;
use crate::types::{self, Vec2, Vec3};
use crate::ui::visual::Visual;

/// Pause between direction inversions of a looping tween.
const LOOP_PAUSE: f32 = 0.1;

/// Which attributes a tween moves, from where to where, over how long.
///
/// Each attribute carries its own (start, end) pair; unset attributes are left
/// untouched on the element.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenSpec {
    pub scale: Option<(Vec3, Vec3)>,
    pub opacity: Option<(f32, f32)>,
    pub position: Option<(Vec2, Vec2)>,
    pub duration: f32,
    pub easing: Easing,
    pub looping: bool,
}

impl TweenSpec {
    pub fn new(duration: f32) -> Self {
        Self {
            scale: None,
            opacity: None,
            position: None,
            duration,
            easing: Easing::default(),
            looping: false,
        }
    }

    pub fn scale(from: Vec3, to: Vec3, duration: f32) -> Self {
        Self::new(duration).with_scale(from, to)
    }

    pub fn fade(from: f32, to: f32, duration: f32) -> Self {
        Self::new(duration).with_opacity(from, to)
    }

    /// The stock entrance: scale 0.8 to 1 while fading in, over 0.3s.
    pub fn scale_and_fade() -> Self {
        Self::new(0.3)
            .with_scale(Vec3::splat(0.8), Vec3::ONE)
            .with_opacity(0.0, 1.0)
    }

    /// Slide in from `offset` relative to the element's rest position.
    pub fn enter_from_offset(rest: Vec2, offset: Vec2, duration: f32) -> Self {
        Self::new(duration).with_position(rest + offset, rest)
    }

    pub fn with_scale(mut self, from: Vec3, to: Vec3) -> Self {
        self.scale = Some((from, to));
        self
    }

    pub fn with_opacity(mut self, from: f32, to: f32) -> Self {
        self.opacity = Some((from, to));
        self
    }

    pub fn with_position(mut self, from: Vec2, to: Vec2) -> Self {
        self.position = Some((from, to));
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn looped(mut self) -> Self {
        self.looping = true;
        self
    }

    fn selects_nothing(&self) -> bool {
        self.scale.is_none() && self.opacity.is_none() && self.position.is_none()
    }

    /// Write the interpolated state at `fraction` (0 = start, 1 = end).
    fn apply(&self, visual: &mut Visual, fraction: f32) {
        if let Some((from, to)) = self.scale {
            visual.scale = Vec3::lerp(from, to, fraction);
        }
        if let Some((from, to)) = self.opacity {
            visual.opacity = types::lerp(from, to, fraction);
        }
        if let Some((from, to)) = self.position {
            visual.anchored_position = Vec2::lerp(from, to, fraction);
        }
    }

    /// Write the exact endpoint values, bypassing interpolation so no
    /// floating-point drift remains.
    fn apply_endpoint(&self, visual: &mut Visual, at_end: bool) {
        if let Some((from, to)) = self.scale {
            visual.scale = if at_end { to } else { from };
        }
        if let Some((from, to)) = self.opacity {
            visual.opacity = if at_end { to } else { from };
        }
        if let Some((from, to)) = self.position {
            visual.anchored_position = if at_end { to } else { from };
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Running,
    /// Holding between loop inversions.
    Pausing { remaining: f32 },
    Completed,
}

/// A live execution of a [`TweenSpec`] against one element.
#[derive(Debug, Clone)]
struct TweenRun {
    spec: TweenSpec,
    elapsed: f32,
    reversed: bool,
    phase: Phase,
}

impl TweenRun {
    fn new(spec: TweenSpec, reversed: bool) -> Self {
        Self {
            spec,
            elapsed: 0.0,
            reversed,
            phase: Phase::Running,
        }
    }

    fn advance(&mut self, dt: f32, visual: &mut Visual) {
        match self.phase {
            Phase::Completed => {}
            Phase::Pausing { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.reversed = !self.reversed;
                    self.elapsed = 0.0;
                    self.phase = Phase::Running;
                } else {
                    self.phase = Phase::Pausing { remaining };
                }
            }
            Phase::Running => {
                self.elapsed += dt;
                let t = types::clamp01(self.elapsed / self.spec.duration);
                let eased = self.spec.easing.evaluate(t);
                let fraction = if self.reversed { 1.0 - eased } else { eased };
                self.spec.apply(visual, fraction);

                if t >= 1.0 {
                    self.spec.apply_endpoint(visual, !self.reversed);
                    self.phase = if self.spec.looping {
                        Phase::Pausing {
                            remaining: LOOP_PAUSE,
                        }
                    } else {
                        Phase::Completed
                    };
                }
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.phase == Phase::Completed
    }
}

/// Two-phase scale pulse: up to `base × (1 + intensity)` over half the
/// duration, back down over the other half, then an exact restore.
/// Independent of the spec mechanism; always linear.
#[derive(Debug, Clone)]
struct PulseRun {
    base: Vec3,
    target: Vec3,
    half_duration: f32,
    elapsed: f32,
    rising: bool,
    done: bool,
}

impl PulseRun {
    fn new(base: Vec3, intensity: f32, duration: f32) -> Self {
        Self {
            base,
            target: base * (1.0 + intensity),
            half_duration: (duration / 2.0).max(f32::EPSILON),
            elapsed: 0.0,
            rising: true,
            done: false,
        }
    }

    fn advance(&mut self, dt: f32, visual: &mut Visual) {
        if self.done {
            return;
        }
        self.elapsed += dt;
        let t = types::clamp01(self.elapsed / self.half_duration);
        visual.scale = if self.rising {
            Vec3::lerp(self.base, self.target, t)
        } else {
            Vec3::lerp(self.target, self.base, t)
        };
        if t >= 1.0 {
            if self.rising {
                self.rising = false;
                self.elapsed = 0.0;
            } else {
                visual.scale = self.base;
                self.done = true;
            }
        }
    }
}

#[derive(Debug, Clone)]
enum ActiveRun {
    Tween(TweenRun),
    Pulse(PulseRun),
}

/// Per-element animation driver.
///
/// A player owns at most one run; triggering a new animation replaces the
/// in-flight one, so only the latest trajectory is ever observed.
#[derive(Debug, Clone, Default)]
pub struct TweenPlayer {
    run: Option<ActiveRun>,
}

impl TweenPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `spec` forward. The element snaps to the spec's start state
    /// immediately.
    pub fn play(&mut self, spec: TweenSpec, visual: &mut Visual) {
        let Some(spec) = Self::validated(spec) else {
            return;
        };
        spec.apply_endpoint(visual, false);
        self.run = Some(ActiveRun::Tween(TweenRun::new(spec, false)));
    }

    /// Start `spec` reversed (end to start). The element is not snapped, so
    /// the animation continues from wherever the element currently is.
    pub fn play_reverse(&mut self, spec: TweenSpec) {
        let Some(spec) = Self::validated(spec) else {
            return;
        };
        self.run = Some(ActiveRun::Tween(TweenRun::new(spec, true)));
    }

    /// Scale pulse around `base`, the element's rest scale.
    pub fn pulse(&mut self, base: Vec3, intensity: f32, duration: f32) {
        self.run = Some(ActiveRun::Pulse(PulseRun::new(base, intensity, duration)));
    }

    /// Advance the active run by `dt` and write the element state.
    pub fn advance(&mut self, dt: f32, visual: &mut Visual) {
        let finished = match &mut self.run {
            None => false,
            Some(ActiveRun::Tween(run)) => {
                run.advance(dt, visual);
                run.is_finished()
            }
            Some(ActiveRun::Pulse(run)) => {
                run.advance(dt, visual);
                run.done
            }
        };
        if finished {
            self.run = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn stop(&mut self) {
        self.run = None;
    }

    fn validated(spec: TweenSpec) -> Option<TweenSpec> {
        if spec.selects_nothing() {
            log::warn!("tween spec selects no attributes, ignoring");
            return None;
        }
        let mut spec = spec;
        if spec.duration <= 0.0 {
            log::warn!("tween duration must be positive, clamping");
            spec.duration = f32::EPSILON;
        }
        Some(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_snaps_to_start_state() {
        let mut visual = Visual::new();
        let mut player = TweenPlayer::new();
        player.play(
            TweenSpec::scale(Vec3::splat(0.8), Vec3::ONE, 0.3),
            &mut visual,
        );

        assert_eq!(visual.scale, Vec3::splat(0.8));
    }

    #[test]
    fn play_reverse_does_not_snap() {
        let mut visual = Visual::new();
        visual.opacity = 0.7;
        let mut player = TweenPlayer::new();
        player.play_reverse(TweenSpec::fade(0.0, 1.0, 0.5));

        assert_eq!(visual.opacity, 0.7, "no write until the first tick");
    }

    #[test]
    fn completion_clears_the_run() {
        let mut visual = Visual::new();
        let mut player = TweenPlayer::new();
        player.play(TweenSpec::fade(0.0, 1.0, 0.2), &mut visual);

        player.advance(0.2, &mut visual);
        assert!(!player.is_running());
        assert_eq!(visual.opacity, 1.0);
    }

    #[test]
    fn empty_spec_is_rejected() {
        let mut visual = Visual::new();
        let mut player = TweenPlayer::new();
        player.play(TweenSpec::new(1.0), &mut visual);

        assert!(!player.is_running());
    }

    #[test]
    fn non_positive_duration_completes_on_first_tick() {
        let mut visual = Visual::new();
        let mut player = TweenPlayer::new();
        player.play(TweenSpec::fade(0.0, 1.0, 0.0), &mut visual);

        player.advance(0.016, &mut visual);
        assert_eq!(visual.opacity, 1.0);
        assert!(!player.is_running());
    }

    #[test]
    fn unselected_attributes_stay_untouched() {
        let mut visual = Visual::new();
        visual.opacity = 0.25;
        let mut player = TweenPlayer::new();
        player.play(
            TweenSpec::scale(Vec3::ZERO, Vec3::ONE, 1.0),
            &mut visual,
        );

        player.advance(0.5, &mut visual);
        assert_eq!(visual.opacity, 0.25);
    }
}
