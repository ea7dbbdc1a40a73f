//! Geometry catalog: the closed set of shape kinds that can be placed in the scene.
//!
//! Every kind has exactly one base-shape descriptor which is shared by all of its
//! instances, and one [`KindPolicy`] which decides how the generator and the
//! animation driver treat it. Both live in declarative tables so that behaviour
//! per kind is data, not branching.

use std::{fmt, ops::Range};

/// The kinds of geometry the scene knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeometryKind {
    Torus,
    Tetrahedron,
    Icosahedron,
    Octahedron,
    Sphere,
    Label,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 6] = [
        GeometryKind::Torus,
        GeometryKind::Tetrahedron,
        GeometryKind::Icosahedron,
        GeometryKind::Octahedron,
        GeometryKind::Sphere,
        GeometryKind::Label,
    ];

    /// Kinds created on every regeneration, in creation order.
    pub const POPULATED: [GeometryKind; 5] = [
        GeometryKind::Torus,
        GeometryKind::Tetrahedron,
        GeometryKind::Icosahedron,
        GeometryKind::Octahedron,
        GeometryKind::Sphere,
    ];

    /// Kinds whose rotation is advanced every frame.
    pub const ROTATING: [GeometryKind; 4] = [
        GeometryKind::Torus,
        GeometryKind::Tetrahedron,
        GeometryKind::Icosahedron,
        GeometryKind::Octahedron,
    ];

    pub fn policy(self) -> KindPolicy {
        match self {
            // Donuts stay tiny next to everything else.
            GeometryKind::Torus => KindPolicy {
                animates: true,
                regenerated: true,
                scale: ScaleRange::Uniform(0.0..0.01),
            },
            GeometryKind::Tetrahedron | GeometryKind::Icosahedron | GeometryKind::Octahedron => {
                KindPolicy {
                    animates: true,
                    regenerated: true,
                    scale: ScaleRange::Uniform(0.0..1.0),
                }
            }
            // Rotating a sphere is invisible work.
            GeometryKind::Sphere => KindPolicy {
                animates: false,
                regenerated: true,
                scale: ScaleRange::Uniform(0.0..1.0),
            },
            GeometryKind::Label => KindPolicy {
                animates: false,
                regenerated: false,
                scale: ScaleRange::Fixed(1.0),
            },
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryKind::Torus => "torus",
            GeometryKind::Tetrahedron => "tetrahedron",
            GeometryKind::Icosahedron => "icosahedron",
            GeometryKind::Octahedron => "octahedron",
            GeometryKind::Sphere => "sphere",
            GeometryKind::Label => "label",
        };
        f.write_str(name)
    }
}

/// Where the uniform scale of a freshly created instance comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleRange {
    /// Drawn as `min + U[0, 1) * (max - min)`.
    Uniform(Range<f32>),
    Fixed(f32),
}

impl ScaleRange {
    /// Maps a unit sample `t` in `[0, 1)` onto the range.
    pub fn sample(&self, t: f32) -> f32 {
        match self {
            ScaleRange::Uniform(range) => range.start + t * (range.end - range.start),
            ScaleRange::Fixed(scale) => *scale,
        }
    }

    pub fn contains(&self, scale: f32) -> bool {
        match self {
            ScaleRange::Uniform(range) => scale >= range.start && scale <= range.end,
            ScaleRange::Fixed(fixed) => scale == *fixed,
        }
    }
}

/// Per-kind behaviour consulted by the generator and the animation driver.
#[derive(Clone, Debug, PartialEq)]
pub struct KindPolicy {
    pub animates: bool,
    pub regenerated: bool,
    pub scale: ScaleRange,
}

/// Text parameters of the centerpiece label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelText {
    pub text: String,
    pub size: f32,
    pub depth: f32,
    pub curve_segments: u32,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub bevel_segments: u32,
    /// The text geometry is centred on its own bounding box.
    pub centered: bool,
}

impl Default for LabelText {
    fn default() -> Self {
        Self {
            text: "Hi! welcome to my portfolio".to_string(),
            size: 0.5,
            depth: 0.05,
            curve_segments: 12,
            bevel_enabled: true,
            bevel_thickness: 0.03,
            bevel_size: 0.02,
            bevel_offset: 0.0,
            bevel_segments: 5,
            centered: true,
        }
    }
}

/// Base primitive dimensions of a kind, shared by every instance of it.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDescriptor {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Tetrahedron {
        radius: f32,
        detail: u32,
    },
    Icosahedron {
        radius: f32,
        detail: u32,
    },
    Octahedron {
        radius: f32,
        detail: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Label(LabelText),
}

impl ShapeDescriptor {
    pub fn kind(&self) -> GeometryKind {
        match self {
            ShapeDescriptor::Torus { .. } => GeometryKind::Torus,
            ShapeDescriptor::Tetrahedron { .. } => GeometryKind::Tetrahedron,
            ShapeDescriptor::Icosahedron { .. } => GeometryKind::Icosahedron,
            ShapeDescriptor::Octahedron { .. } => GeometryKind::Octahedron,
            ShapeDescriptor::Sphere { .. } => GeometryKind::Sphere,
            ShapeDescriptor::Label(_) => GeometryKind::Label,
        }
    }
}

/// Read-only lookup from [`GeometryKind`] to its shared [`ShapeDescriptor`].
#[derive(Clone, Debug)]
pub struct GeometryCatalog {
    // Indexed by position in `GeometryKind::ALL`.
    shapes: [ShapeDescriptor; 6],
}

impl GeometryCatalog {
    pub fn standard() -> Self {
        Self::with_label_text(LabelText::default())
    }

    pub fn with_label_text(label: LabelText) -> Self {
        Self {
            shapes: [
                ShapeDescriptor::Torus {
                    radius: 0.5,
                    tube: 0.1,
                    radial_segments: 12,
                    tubular_segments: 48,
                },
                ShapeDescriptor::Tetrahedron {
                    radius: 0.5,
                    detail: 0,
                },
                ShapeDescriptor::Icosahedron {
                    radius: 0.5,
                    detail: 0,
                },
                ShapeDescriptor::Octahedron {
                    radius: 0.025,
                    detail: 0,
                },
                ShapeDescriptor::Sphere {
                    radius: 0.1,
                    width_segments: 32,
                    height_segments: 32,
                },
                ShapeDescriptor::Label(label),
            ],
        }
    }

    pub fn descriptor(&self, kind: GeometryKind) -> &ShapeDescriptor {
        &self.shapes[kind as usize]
    }

    pub fn label(&self) -> &LabelText {
        match self.descriptor(GeometryKind::Label) {
            ShapeDescriptor::Label(text) => text,
            _ => unreachable!("the label slot always holds a label descriptor"),
        }
    }
}

impl Default for GeometryCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
