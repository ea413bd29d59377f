pub mod button;
pub mod theme;
pub mod visual;

pub use button::{ButtonEvent, ButtonFx, ButtonStyle, Ripple};
pub use theme::{ElementRole, ThemeManager, ThemePalette, ThemePreset};
pub use visual::Visual;

/// Audio cue identifiers the host may map to clips. Mixing stays external.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Hover,
    Click,
    ThemeChange,
}
