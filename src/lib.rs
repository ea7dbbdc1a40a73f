//! scene-scatter
//!
//! Procedural population and selective animation for an instanced 3D scene. A
//! protected centerpiece label sits at the origin while tori, tetrahedra,
//! icosahedra, octahedra and spheres are scattered around it. Density and spread
//! can be retuned at runtime, which regenerates everything except the label, and
//! all kinds except spheres and the label keep rotating every frame.
//!
//! The crate does not own a window or draw anything. It consumes a clock and the
//! loaded assets and hands the renderer a per-kind instanced snapshot.
//!
//! High-level modules
//! - `animation`: the per-frame rotation step
//! - `clock`: monotonic elapsed-time sources
//! - `config`: tunable parameters, partial updates, observers and panel bounds
//! - `data_structures`: geometry catalog, instances and the instance registry
//! - `flow`: the scene lifecycle and the frame loop
//! - `generator`: procedural (re)population of the registry
//! - `render`: the per-frame snapshot handed to the renderer
//! - `resources`: asset loading (label font, matcap texture)
//!

pub mod animation;
pub mod clock;
pub mod config;
pub mod data_structures;
pub mod flow;
pub mod generator;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::{Matrix4, Vector2, Vector3};
pub use flow::{Frame, Frames, Scene};
