//! Scene data structures: the geometry catalog, instances and their registry.
//!
//! - `geometry` holds the closed set of shape kinds, their shared base shapes and per-kind policy
//! - `instance` holds per-instance transformation data and its GPU layout
//! - `registry` is the ordered collection of every live instance

pub mod geometry;
pub mod instance;
pub mod registry;
