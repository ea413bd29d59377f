//! UI theming: palettes, presets, accent pulsing.
//!
//! The manager is constructed once at startup and passed to consumers; hosts
//! iterate their own elements and ask for the color of each role.

use serde::{Deserialize, Serialize};

use super::visual::Visual;
use crate::types::Color;

/// Color assignments for themed UI elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
    pub text_secondary: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemePreset {
    #[default]
    Modern,
    Sunset,
    Ocean,
    Forest,
    Neon,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 5] = [
        ThemePreset::Modern,
        ThemePreset::Sunset,
        ThemePreset::Ocean,
        ThemePreset::Forest,
        ThemePreset::Neon,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn palette(self) -> ThemePalette {
        let (primary, secondary, accent, background) = match self {
            ThemePreset::Modern => (
                Color::rgb(0.2, 0.6, 1.0),
                Color::rgb(0.4, 0.2, 0.8),
                Color::rgb(1.0, 0.4, 0.2),
                Color::rgb(0.1, 0.1, 0.15),
            ),
            ThemePreset::Sunset => (
                Color::rgb(1.0, 0.5, 0.2),
                Color::rgb(1.0, 0.3, 0.5),
                Color::rgb(1.0, 0.8, 0.2),
                Color::rgb(0.15, 0.1, 0.12),
            ),
            ThemePreset::Ocean => (
                Color::rgb(0.1, 0.5, 0.7),
                Color::rgb(0.2, 0.7, 0.6),
                Color::rgb(0.3, 0.9, 0.8),
                Color::rgb(0.05, 0.1, 0.15),
            ),
            ThemePreset::Forest => (
                Color::rgb(0.3, 0.7, 0.3),
                Color::rgb(0.5, 0.8, 0.2),
                Color::rgb(1.0, 0.7, 0.2),
                Color::rgb(0.1, 0.12, 0.08),
            ),
            ThemePreset::Neon => (
                Color::rgb(1.0, 0.0, 1.0),
                Color::rgb(0.0, 1.0, 1.0),
                Color::rgb(1.0, 1.0, 0.0),
                Color::rgb(0.05, 0.05, 0.1),
            ),
        };
        ThemePalette {
            primary,
            secondary,
            accent,
            background,
            text: Color::WHITE,
            text_secondary: Color::rgb(0.8, 0.8, 0.8),
        }
    }
}

/// Which palette entry a UI element takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Background,
    Primary,
    Secondary,
    Accent,
    Text,
    TextSecondary,
}

/// Holds the active palette and drives the accent breathing pulse.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    preset: ThemePreset,
    palette: ThemePalette,
    pulse_enabled: bool,
    pulse_speed: f32,
    pulse_intensity: f32,
    anim_time: f32,
}

impl ThemeManager {
    pub fn new(preset: ThemePreset) -> Self {
        Self {
            preset,
            palette: preset.palette(),
            pulse_enabled: true,
            pulse_speed: 2.0,
            pulse_intensity: 0.1,
            anim_time: 0.0,
        }
    }

    pub fn preset(&self) -> ThemePreset {
        self.preset
    }

    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    pub fn set_preset(&mut self, preset: ThemePreset) {
        self.preset = preset;
        self.palette = preset.palette();
    }

    /// Override individual palette colors, detaching from the preset values.
    pub fn set_palette(&mut self, palette: ThemePalette) {
        self.palette = palette;
    }

    pub fn set_pulse_enabled(&mut self, enabled: bool) {
        self.pulse_enabled = enabled;
    }

    pub fn color_for(&self, role: ElementRole) -> Color {
        match role {
            ElementRole::Background => self.palette.background,
            ElementRole::Primary => self.palette.primary,
            ElementRole::Secondary => self.palette.secondary,
            ElementRole::Accent => self.palette.accent,
            ElementRole::Text => self.palette.text,
            ElementRole::TextSecondary => self.palette.text_secondary,
        }
    }

    /// Write the role's color onto an element.
    pub fn apply(&self, role: ElementRole, visual: &mut Visual) {
        visual.color = self.color_for(role);
    }

    pub fn advance(&mut self, dt: f32) {
        if self.pulse_enabled {
            self.anim_time += dt * self.pulse_speed;
        }
    }

    /// Accent color with the breathing pulse applied. Alpha is untouched.
    pub fn pulsed_accent(&self) -> Color {
        let accent = self.palette.accent;
        if !self.pulse_enabled {
            return accent;
        }
        let pulse = 1.0 + self.anim_time.sin() * self.pulse_intensity;
        Color::new(accent.r * pulse, accent.g * pulse, accent.b * pulse, accent.a)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(ThemePreset::default())
    }
}
