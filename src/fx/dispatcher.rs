//! Pooled effect dispatch with timed return to the idle queue.

use std::collections::{HashMap, VecDeque};

use crate::scheduler::TaskScheduler;
use crate::traits::effects::{EffectBackend, EffectId, TemplateId};
use crate::types::{Quat, Vec3};

/// Return delay applied when an instance reports no intrinsic duration.
pub const FALLBACK_RETURN_DELAY: f32 = 2.0;

/// Diagnostic counters. The dispatcher itself never fails; these are the only
/// observable error surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchStats {
    /// Play requests for names with no registered template.
    pub missing_effect: u64,
    /// Instances created because the idle queue was empty.
    pub spawned_on_demand: u64,
    /// Play requests that started an instance.
    pub played: u64,
}

#[derive(Debug, Clone)]
struct PendingReturn {
    name: String,
    instance: EffectId,
}

/// Owns per-name idle queues of pre-warmed effect instances and hands them
/// out FIFO. Instances are returned by a scheduled task after their playback
/// duration; instances destroyed by the host in the meantime are dropped.
#[derive(Debug, Default)]
pub struct EffectDispatcher {
    templates: HashMap<String, TemplateId>,
    idle: HashMap<String, VecDeque<EffectId>>,
    returns: TaskScheduler<EffectId, PendingReturn>,
    stats: DispatchStats,
}

impl EffectDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-instantiate `pool_size` inactive copies of `template` under `name`.
    ///
    /// A `None` template is a no-op. Re-registering a name replaces its
    /// template and idle queue; instances from the old pool are abandoned,
    /// not released.
    pub fn register(
        &mut self,
        backend: &mut dyn EffectBackend,
        name: &str,
        template: Option<TemplateId>,
        pool_size: usize,
    ) {
        let Some(template) = template else {
            return;
        };

        let mut queue = VecDeque::with_capacity(pool_size);
        for _ in 0..pool_size {
            let instance = backend.instantiate(template);
            backend.set_active(instance, false);
            queue.push_back(instance);
        }

        self.templates.insert(name.to_string(), template);
        self.idle.insert(name.to_string(), queue);
        log::debug!("registered effect {name} with pool size {pool_size}");
    }

    /// Start `name` at `position` and schedule its return to the pool.
    ///
    /// An empty idle queue grows the pool by one instance; the growth is
    /// permanent. An unregistered name is reported and ignored.
    pub fn play(
        &mut self,
        backend: &mut dyn EffectBackend,
        name: &str,
        position: Vec3,
        orientation: Quat,
    ) {
        let idle_empty = self.idle.get(name).is_none_or(|queue| queue.is_empty());
        if idle_empty {
            match self.templates.get(name) {
                Some(&template) => {
                    let instance = backend.instantiate(template);
                    self.idle
                        .entry(name.to_string())
                        .or_default()
                        .push_back(instance);
                    self.stats.spawned_on_demand += 1;
                }
                None => {
                    self.stats.missing_effect += 1;
                    log::warn!("effect {name} not found");
                    return;
                }
            }
        }

        let Some(instance) = self.idle.get_mut(name).and_then(|queue| queue.pop_front()) else {
            return;
        };

        backend.set_transform(instance, position, orientation);
        backend.set_active(instance, true);
        backend.start_playback(instance);

        let delay = backend
            .playback_duration(instance)
            .unwrap_or(FALLBACK_RETURN_DELAY);
        self.returns.schedule(
            instance,
            delay,
            PendingReturn {
                name: name.to_string(),
                instance,
            },
        );
        self.stats.played += 1;
    }

    /// `play` with an identity orientation.
    pub fn play_at(&mut self, backend: &mut dyn EffectBackend, name: &str, position: Vec3) {
        self.play(backend, name, position, Quat::IDENTITY);
    }

    /// Drain due returns. Called once per frame by the host.
    ///
    /// A returned instance is deactivated and re-enqueued under its name,
    /// unless the host destroyed it in the meantime (dropped silently) or the
    /// name no longer has a pool.
    pub fn advance(&mut self, backend: &mut dyn EffectBackend, dt: f32) {
        for pending in self.returns.advance(dt) {
            if !backend.is_alive(pending.instance) {
                continue;
            }
            backend.set_active(pending.instance, false);
            if let Some(queue) = self.idle.get_mut(&pending.name) {
                queue.push_back(pending.instance);
            }
        }
    }

    /// Deactivate every idle instance. Instances currently playing are not
    /// tracked and stay untouched.
    pub fn clear_all(&mut self, backend: &mut dyn EffectBackend) {
        for queue in self.idle.values() {
            for &instance in queue {
                backend.set_active(instance, false);
            }
        }
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Idle instances currently available under `name`.
    pub fn idle_count(&self, name: &str) -> usize {
        self.idle.get(name).map_or(0, VecDeque::len)
    }

    /// Instances playing with a return pending.
    pub fn pending_returns(&self) -> usize {
        self.returns.pending()
    }
}
