//! Main-menu flow: scene-load progress gating and theme selection.
//!
//! Scene loading itself stays in the host; the flow here owns the loading
//! panel state, converts raw load progress into bar fill and label text, and
//! gates activation behind a key press once loading is nearly done.

use crate::types::{self, Color};
use crate::ui::SoundCue;
use crate::ui::theme::{ThemeManager, ThemePreset};

/// Raw progress at which the host is allowed to finish activation.
const ACTIVATION_PROGRESS: f32 = 0.9;
/// Panel settle time before the load begins.
const LOAD_START_DELAY: f32 = 0.2;

/// Intents and feedback for the host to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    Sound(SoundCue),
    /// Begin loading the scene and report progress via `set_load_progress`.
    BeginLoad { scene: String },
    /// Loading finished and a key was pressed; activate the scene.
    ActivateScene { scene: String },
    /// Pulse the theme button at `index` to highlight the selection.
    PulseThemeButton { index: usize },
    Quit,
    OpenUrl { url: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LoadPhase {
    Idle,
    /// Waiting out the panel settle delay.
    Delay { remaining: f32 },
    Loading,
    ReadyToActivate,
}

/// Tick-driven state machine behind the main menu.
#[derive(Debug)]
pub struct MenuFlow {
    version_label: String,
    phase: LoadPhase,
    scene: Option<String>,
    progress: f32,
    current_theme: usize,
    events: Vec<MenuEvent>,
}

impl MenuFlow {
    pub fn new(version: &str) -> Self {
        Self {
            version_label: format!("v{version}"),
            phase: LoadPhase::Idle,
            scene: None,
            progress: 0.0,
            current_theme: 0,
            events: Vec::new(),
        }
    }

    pub fn version_label(&self) -> &str {
        &self.version_label
    }

    pub fn loading_panel_visible(&self) -> bool {
        self.phase != LoadPhase::Idle
    }

    /// Start the load flow for `scene`.
    pub fn load_scene(&mut self, scene: &str) {
        self.events.push(MenuEvent::Sound(SoundCue::Click));
        self.scene = Some(scene.to_string());
        self.progress = 0.0;
        self.phase = LoadPhase::Delay {
            remaining: LOAD_START_DELAY,
        };
    }

    /// Host-reported raw load progress, 0..=1.
    pub fn set_load_progress(&mut self, progress: f32) {
        self.progress = types::clamp01(progress);
    }

    /// Any-key input; only meaningful once loading is ready to activate.
    pub fn any_key_pressed(&mut self) {
        if self.phase != LoadPhase::ReadyToActivate {
            return;
        }
        if let Some(scene) = self.scene.take() {
            self.events.push(MenuEvent::ActivateScene { scene });
        }
        self.phase = LoadPhase::Idle;
        self.progress = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        match self.phase {
            LoadPhase::Delay { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.phase = LoadPhase::Loading;
                    if let Some(scene) = &self.scene {
                        self.events.push(MenuEvent::BeginLoad {
                            scene: scene.clone(),
                        });
                    }
                } else {
                    self.phase = LoadPhase::Delay { remaining };
                }
            }
            LoadPhase::Loading => {
                if self.progress >= ACTIVATION_PROGRESS {
                    self.phase = LoadPhase::ReadyToActivate;
                }
            }
            LoadPhase::Idle | LoadPhase::ReadyToActivate => {}
        }
    }

    /// Fill for the loading bar: raw progress rescaled so the bar completes
    /// when activation becomes possible.
    pub fn loading_bar_fill(&self) -> f32 {
        types::clamp01(self.progress / ACTIVATION_PROGRESS)
    }

    pub fn loading_label(&self) -> String {
        if self.phase == LoadPhase::ReadyToActivate {
            "Press any key to continue".to_string()
        } else {
            format!(
                "Loading... {}%",
                (self.loading_bar_fill() * 100.0).round() as u32
            )
        }
    }

    /// Select the theme at `index`, updating the manager.
    pub fn change_theme(&mut self, index: usize, themes: &mut ThemeManager) {
        let Some(preset) = ThemePreset::from_index(index) else {
            log::warn!("theme index {index} out of range");
            return;
        };
        self.current_theme = index;
        themes.set_preset(preset);
        self.events.push(MenuEvent::Sound(SoundCue::ThemeChange));
        self.events.push(MenuEvent::PulseThemeButton { index });
    }

    pub fn selected_theme(&self) -> usize {
        self.current_theme
    }

    /// Highlight color for the theme button at `index`.
    pub fn theme_button_color(&self, index: usize) -> Color {
        if index == self.current_theme {
            Color::YELLOW
        } else {
            Color::WHITE
        }
    }

    pub fn quit(&mut self) {
        self.events.push(MenuEvent::Sound(SoundCue::Click));
        self.events.push(MenuEvent::Quit);
    }

    pub fn open_url(&mut self, url: &str) {
        self.events.push(MenuEvent::Sound(SoundCue::Click));
        self.events.push(MenuEvent::OpenUrl {
            url: url.to_string(),
        });
    }

    /// Drain intents queued since the last call.
    pub fn take_events(&mut self) -> Vec<MenuEvent> {
        std::mem::take(&mut self.events)
    }
}
