use std::path::Path;

use anyhow::Result;

use crate::types::{Quat, Vec3};

/// Handle for referencing registered effect templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub u64);

/// Handle for referencing live effect instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(pub u64);

/// Abstraction over the host scene graph for pooled visual effects.
/// Implementations: engine adapter (production), RecordingBackend (testing
/// and headless runs).
pub trait EffectBackend {
    /// Resolve an effect template by asset path.
    fn load_template(&mut self, path: &Path) -> Result<TemplateId>;

    /// Create a new instance of a template. New instances start inactive.
    fn instantiate(&mut self, template: TemplateId) -> EffectId;

    fn set_transform(&mut self, id: EffectId, position: Vec3, orientation: Quat);
    fn set_active(&mut self, id: EffectId, active: bool);

    /// Begin playback of the instance's visual effect.
    fn start_playback(&mut self, id: EffectId);

    /// Intrinsic playback duration in seconds, if the instance exposes one.
    fn playback_duration(&self, id: EffectId) -> Option<f32>;

    /// Whether the instance still exists in the host scene. Instances can be
    /// destroyed externally at any time.
    fn is_alive(&self, id: EffectId) -> bool;
}
