//! Procedural population of the instance registry.
//!
//! The generator never touches protected instances. A regeneration drops every
//! unprotected instance and then creates `number_of_meshes` fresh instances for
//! each kind in [`GeometryKind::POPULATED`], scattered uniformly in a cube of edge
//! `distance_multiplier` centred on the origin.

use std::f32::consts::PI;

use rand::Rng;

use crate::{
    config::Configuration,
    data_structures::{geometry::GeometryKind, instance::Instance, registry::InstanceRegistry},
};

/// What a single regeneration did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopulationSummary {
    pub removed: usize,
    pub created: usize,
}

/// Fills the registry with randomly placed instances.
///
/// The random source is owned so that hosts can seed it and get a reproducible
/// scene; [`PopulationGenerator::from_entropy`] uses the thread-local generator.
#[derive(Debug)]
pub struct PopulationGenerator<R: Rng> {
    rng: R,
}

impl PopulationGenerator<rand::rngs::ThreadRng> {
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> PopulationGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Spawns the protected label unless one already exists.
    ///
    /// Returns the label's index in the registry.
    pub fn spawn_label(&mut self, registry: &mut InstanceRegistry) -> usize {
        if let Some(idx) = registry.label_index() {
            log::warn!("label already exists at index {}, not spawning another", idx);
            return idx;
        }
        registry.add(Instance::label());
        log::info!("spawned centerpiece label");
        registry.len() - 1
    }

    /// Replaces every unprotected instance with a fresh random population.
    pub fn regenerate(
        &mut self,
        registry: &mut InstanceRegistry,
        config: &Configuration,
    ) -> PopulationSummary {
        let removed = registry.remove_all_unprotected();
        let per_kind = config.meshes_per_kind();

        let mut created = 0;
        for kind in GeometryKind::POPULATED {
            for _ in 0..per_kind {
                registry.add(self.scatter(kind, config.distance_multiplier));
                created += 1;
            }
        }

        let summary = PopulationSummary { removed, created };
        log::debug!(
            "regenerated population: removed {}, created {} ({} per kind, spread {})",
            summary.removed,
            summary.created,
            per_kind,
            config.distance_multiplier
        );
        summary
    }

    fn scatter(&mut self, kind: GeometryKind, distance_multiplier: f32) -> Instance {
        let position = cgmath::Vector3::new(
            self.centered(distance_multiplier),
            self.centered(distance_multiplier),
            self.centered(distance_multiplier),
        );
        let rotation = cgmath::Vector2::new(
            self.rng.random::<f32>() * PI,
            self.rng.random::<f32>() * PI,
        );
        let scale = kind.policy().scale.sample(self.rng.random::<f32>());
        Instance {
            kind,
            position,
            rotation,
            scale,
            protected: false,
        }
    }

    // (U[0, 1) - 0.5) * spread; works for any spread, including zero or negative.
    fn centered(&mut self, spread: f32) -> f32 {
        (self.rng.random::<f32>() - 0.5) * spread
    }
}
