//! Render snapshot handed to the renderer each frame.
//!
//! The core never draws anything itself. Instead [`Render`] groups the registry
//! by kind: every kind that currently has instances becomes one
//! [`InstancedBatch`] holding the shared base shape, the material and the raw
//! per-instance data ready to be written into a vertex buffer laid out by
//! [`InstanceRaw::desc`](crate::data_structures::instance::Vertex::desc).
//!
//! # Key types
//!
//! - [`Render<'a>`] is the full snapshot for one frame
//! - [`InstancedBatch<'a>`] is one instanced draw: base shape + instance data

use crate::data_structures::{
    geometry::{GeometryCatalog, GeometryKind, ShapeDescriptor},
    instance::InstanceRaw,
    registry::InstanceRegistry,
};

/// How a batch is shaded. Everything shares one matcap texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Matcap,
}

/// Data for one instanced draw call.
#[derive(Clone, Debug)]
pub struct InstancedBatch<'a> {
    pub kind: GeometryKind,
    pub shape: &'a ShapeDescriptor,
    pub material: Material,
    pub instances: Vec<InstanceRaw>,
    /// Stable per kind, usable as a pick id.
    pub id: u32,
}

impl InstancedBatch<'_> {
    pub fn amount(&self) -> usize {
        self.instances.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, Default)]
pub struct Render<'a> {
    pub batches: Vec<InstancedBatch<'a>>,
}

impl<'a> Render<'a> {
    /// Groups the registry into one batch per kind, in catalog order.
    ///
    /// Kinds without instances are skipped so no zero-instance draw is issued.
    pub fn from_registry(registry: &InstanceRegistry, catalog: &'a GeometryCatalog) -> Self {
        let batches = GeometryKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let instances: Vec<_> = registry
                    .iter()
                    .filter(|instance| instance.kind == kind)
                    .map(|instance| instance.to_raw())
                    .collect();
                if instances.is_empty() {
                    return None;
                }
                Some(InstancedBatch {
                    kind,
                    shape: catalog.descriptor(kind),
                    material: Material::Matcap,
                    instances,
                    id: kind as u32,
                })
            })
            .collect();
        Self { batches }
    }

    pub fn batch(&self, kind: GeometryKind) -> Option<&InstancedBatch<'a>> {
        self.batches.iter().find(|batch| batch.kind == kind)
    }

    /// Total number of instances across all batches.
    pub fn amount(&self) -> usize {
        self.batches.iter().map(InstancedBatch::amount).sum()
    }
}
