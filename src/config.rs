//! Effect catalog and persisted UI settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::fx::{self, EffectDispatcher};
use crate::traits::effects::EffectBackend;
use crate::ui::theme::ThemePreset;

/// Instances pre-warmed per effect when the catalog does not say otherwise.
pub const DEFAULT_POOL_SIZE: usize = 20;

fn default_pool_size() -> usize {
    DEFAULT_POOL_SIZE
}

/// One pooled effect: where its template lives and how many instances to
/// pre-warm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectEntry {
    pub name: String,
    pub template: PathBuf,
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

/// The set of effects a scene registers at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectCatalog {
    pub effects: Vec<EffectEntry>,
}

impl Default for EffectCatalog {
    fn default() -> Self {
        let stock = [
            fx::names::COIN_COLLECT,
            fx::names::POWERUP,
            fx::names::OBSTACLE_HIT,
            fx::names::LEVEL_UP,
            fx::names::COMBO,
        ];
        Self {
            effects: stock
                .iter()
                .map(|name| EffectEntry {
                    name: (*name).to_string(),
                    template: PathBuf::from(format!("effects/{name}.vfx")),
                    pool_size: DEFAULT_POOL_SIZE,
                })
                .collect(),
        }
    }
}

impl EffectCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Register every entry whose template resolves. Entries with an
    /// unresolvable template are skipped with a warning; requests for them
    /// later surface as missing-effect diagnostics.
    pub fn register_all(
        &self,
        dispatcher: &mut EffectDispatcher,
        backend: &mut dyn EffectBackend,
    ) {
        for entry in &self.effects {
            match backend.load_template(&entry.template) {
                Ok(template) => {
                    dispatcher.register(backend, &entry.name, Some(template), entry.pool_size);
                }
                Err(err) => {
                    log::warn!("skipping effect {}: {err}", entry.name);
                }
            }
        }
    }
}

/// User-facing UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiSettings {
    pub theme: ThemePreset,
}

impl UiSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::settings_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        Self::read_file(path).unwrap_or_default()
    }

    fn read_file(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn settings_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "verve", "verve") {
            Ok(proj_dirs.config_dir().join("settings.json"))
        } else {
            Ok(PathBuf::from(".verve-settings.json"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::recording::RecordingBackend;

    #[test]
    fn default_catalog_covers_the_stock_effects() {
        let catalog = EffectCatalog::default();
        assert_eq!(catalog.effects.len(), 5);
        assert!(
            catalog
                .effects
                .iter()
                .any(|e| e.name == fx::names::COIN_COLLECT)
        );
        assert!(catalog.effects.iter().all(|e| e.pool_size == DEFAULT_POOL_SIZE));
    }

    #[test]
    fn register_all_skips_unresolvable_templates() {
        let mut backend = RecordingBackend::new();
        backend.add_template("effects/CoinCollect.vfx");

        let catalog = EffectCatalog {
            effects: vec![
                EffectEntry {
                    name: "CoinCollect".to_string(),
                    template: PathBuf::from("effects/CoinCollect.vfx"),
                    pool_size: 3,
                },
                EffectEntry {
                    name: "Missing".to_string(),
                    template: PathBuf::from("effects/Missing.vfx"),
                    pool_size: 3,
                },
            ],
        };

        let mut dispatcher = EffectDispatcher::new();
        catalog.register_all(&mut dispatcher, &mut backend);

        assert!(dispatcher.is_registered("CoinCollect"));
        assert_eq!(dispatcher.idle_count("CoinCollect"), 3);
        assert!(!dispatcher.is_registered("Missing"));
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("effects.json");

        let catalog = EffectCatalog::default();
        catalog.save(&path).unwrap();
        let loaded = EffectCatalog::load(&path).unwrap();

        assert_eq!(loaded, catalog);
    }

    #[test]
    fn settings_round_trip_and_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.json");

        assert_eq!(UiSettings::load_from(&path), UiSettings::default());

        let settings = UiSettings {
            theme: ThemePreset::Sunset,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(UiSettings::load_from(&path), settings);
    }
}
