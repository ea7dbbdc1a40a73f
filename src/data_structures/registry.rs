//! Ordered collection of every live instance in the scene.

use crate::data_structures::{geometry::GeometryKind, instance::Instance};

/// All live instances, in insertion order.
///
/// Order does not matter for rendering but the removal scan keeps protected
/// instances in their original relative order.
#[derive(Clone, Debug, Default)]
pub struct InstanceRegistry {
    instances: Vec<Instance>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    /// Drops every instance that is not protected and returns how many went.
    pub fn remove_all_unprotected(&mut self) -> usize {
        let before = self.instances.len();
        self.instances.retain(|instance| instance.protected);
        before - self.instances.len()
    }

    /// Applies `f` to every instance whose kind is listed in `kinds`.
    pub fn for_each<F>(&mut self, kinds: &[GeometryKind], mut f: F)
    where
        F: FnMut(&mut Instance),
    {
        self.instances
            .iter_mut()
            .filter(|instance| kinds.contains(&instance.kind))
            .for_each(|instance| f(instance));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn count_of(&self, kind: GeometryKind) -> usize {
        self.iter().filter(|instance| instance.kind == kind).count()
    }

    /// The protected label, if it has been spawned.
    pub fn label(&self) -> Option<&Instance> {
        self.iter()
            .find(|instance| instance.protected && instance.kind == GeometryKind::Label)
    }

    pub(crate) fn label_index(&self) -> Option<usize> {
        self.instances
            .iter()
            .position(|instance| instance.protected && instance.kind == GeometryKind::Label)
    }

    pub fn as_slice(&self) -> &[Instance] {
        &self.instances
    }
}
