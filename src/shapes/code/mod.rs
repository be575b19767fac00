//! Implementation variants for the shape-drawing demo

pub mod polymorphic;
pub mod tagged;

use crate::error::Result;
use crate::utils::VariantInfo;
use polymorphic::{Circle, Rectangle, Shape, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use tagged::TaggedShape;

/// Function signature: draws a whole scene into the output stream
pub type RenderFn = fn(&Scene, &mut dyn Write) -> Result<()>;

/// Constructor for one concrete variant
pub type ShapeCtor = fn() -> Box<dyn Shape>;

/// Every drawable kind, paired with the constructor of its variant type.
pub static SHAPE_CATALOG: [(&str, ShapeCtor); 3] = [
    ("Circle", new_circle),
    ("Square", new_square),
    ("Rectangle", new_rectangle),
];

fn new_circle() -> Box<dyn Shape> {
    Box::new(Circle)
}

fn new_square() -> Box<dyn Shape> {
    Box::new(Square)
}

fn new_rectangle() -> Box<dyn Shape> {
    Box::new(Rectangle)
}

/// The same sequence of shapes held in both renditions.
pub struct Scene {
    pub tagged: Vec<TaggedShape>,
    pub shapes: Vec<Box<dyn Shape>>,
}

impl Scene {
    /// Build a scene from indices into [`SHAPE_CATALOG`].
    /// Out-of-range indices are skipped.
    pub fn from_catalog(indices: &[usize]) -> Self {
        let mut tagged = Vec::with_capacity(indices.len());
        let mut shapes = Vec::with_capacity(indices.len());
        for (kind, ctor) in indices.iter().filter_map(|&i| SHAPE_CATALOG.get(i)) {
            tagged.push(TaggedShape::new(*kind));
            shapes.push(ctor());
        }
        Self { tagged, shapes }
    }

    /// Build a reproducible random scene of `size` shapes.
    pub fn random(size: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let indices: Vec<usize> = (0..size)
            .map(|_| rng.random_range(0..SHAPE_CATALOG.len()))
            .collect();
        Self::from_catalog(&indices)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Returns all available variants
pub fn get_variants() -> Vec<VariantInfo<RenderFn>> {
    vec![
        VariantInfo {
            name: "tagged",
            description: "Single type branching on its kind label",
            function: tagged::render_scene,
        },
        VariantInfo {
            name: "polymorphic",
            description: "One type per shape behind a Shape trait object",
            function: polymorphic::render_scene,
        },
    ]
}
