//! In-memory effect backend for tests and headless hosts.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, bail};

use super::effects::{EffectBackend, EffectId, TemplateId};
use crate::types::{Quat, Vec3};

/// State of one instance as last seen by the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedInstance {
    pub template: TemplateId,
    pub position: Vec3,
    pub orientation: Quat,
    pub active: bool,
    pub play_count: u32,
    pub alive: bool,
}

/// Records every scene-graph operation instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_id: u64,
    templates: HashMap<String, TemplateId>,
    durations: HashMap<TemplateId, f32>,
    instances: HashMap<EffectId, RecordedInstance>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `path` resolvable through `load_template`.
    pub fn add_template(&mut self, path: &str) -> TemplateId {
        let id = TemplateId(self.next_id);
        self.next_id += 1;
        self.templates.insert(path.to_string(), id);
        id
    }

    /// Make `path` resolvable, with an intrinsic playback duration.
    pub fn add_template_with_duration(&mut self, path: &str, seconds: f32) -> TemplateId {
        let id = self.add_template(path);
        self.durations.insert(id, seconds);
        id
    }

    pub fn set_duration(&mut self, template: TemplateId, seconds: f32) {
        self.durations.insert(template, seconds);
    }

    /// Simulate external destruction of an instance.
    pub fn destroy(&mut self, id: EffectId) {
        if let Some(instance) = self.instances.get_mut(&id) {
            instance.alive = false;
        }
    }

    pub fn instance(&self, id: EffectId) -> Option<&RecordedInstance> {
        self.instances.get(&id)
    }

    /// Instances ever created, including destroyed ones.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn active_count(&self) -> usize {
        self.instances
            .values()
            .filter(|i| i.alive && i.active)
            .count()
    }

    /// Instance ids in creation order.
    pub fn created_ids(&self) -> Vec<EffectId> {
        let mut ids: Vec<EffectId> = self.instances.keys().copied().collect();
        ids.sort_by_key(|id| id.0);
        ids
    }
}

impl EffectBackend for RecordingBackend {
    fn load_template(&mut self, path: &Path) -> Result<TemplateId> {
        match self.templates.get(path.to_string_lossy().as_ref()) {
            Some(id) => Ok(*id),
            None => bail!("unknown effect template: {}", path.display()),
        }
    }

    fn instantiate(&mut self, template: TemplateId) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.instances.insert(
            id,
            RecordedInstance {
                template,
                position: Vec3::ZERO,
                orientation: Quat::IDENTITY,
                active: false,
                play_count: 0,
                alive: true,
            },
        );
        id
    }

    fn set_transform(&mut self, id: EffectId, position: Vec3, orientation: Quat) {
        if let Some(instance) = self.instances.get_mut(&id) {
            if instance.alive {
                instance.position = position;
                instance.orientation = orientation;
            }
        }
    }

    fn set_active(&mut self, id: EffectId, active: bool) {
        if let Some(instance) = self.instances.get_mut(&id) {
            if instance.alive {
                instance.active = active;
            }
        }
    }

    fn start_playback(&mut self, id: EffectId) {
        if let Some(instance) = self.instances.get_mut(&id) {
            if instance.alive {
                instance.play_count += 1;
            }
        }
    }

    fn playback_duration(&self, id: EffectId) -> Option<f32> {
        let instance = self.instances.get(&id)?;
        self.durations.get(&instance.template).copied()
    }

    fn is_alive(&self, id: EffectId) -> bool {
        self.instances.get(&id).is_some_and(|i| i.alive)
    }
}
