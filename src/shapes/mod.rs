//! # Shape Drawing: Tag Branching vs Polymorphic Variants
//!
//! - **Tagged**: one `TaggedShape` type whose `draw` matches on its `kind`
//!   label. Adding a shape means editing that match; unknown labels print a
//!   fallback line.
//! - **Polymorphic**: a `Shape` trait with one type per shape. Adding a shape
//!   means adding a type; nothing that already exists is modified. The trait's
//!   provided `draw` is the abstract base and fails with `NotImplemented`.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::registry::DemoRunner;
use crate::utils::timer::{measure, TimingConfig, Variant};
use code::polymorphic::{Circle, Rectangle, Shape, Square};
use code::tagged::TaggedShape;
use code::Scene;
use std::io::Write;
use std::sync::Arc;

pub struct ShapesDemo;

impl DemoRunner for ShapesDemo {
    fn name(&self) -> &'static str {
        "shapes"
    }

    fn category(&self) -> &'static str {
        "polymorphism"
    }

    fn description(&self) -> &'static str {
        "Drawing shapes by branching on a kind label vs one type per shape"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::get_variants().iter().map(|v| v.name).collect()
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Without OCP:")?;
        for kind in ["Circle", "Square"] {
            TaggedShape::new(kind).draw(out)?;
        }

        writeln!(out)?;
        writeln!(out, "With OCP:")?;
        let shapes: [&dyn Shape; 3] = [&Circle, &Square, &Rectangle];
        for shape in shapes {
            tracing::debug!(kind = shape.kind(), "drawing through trait object");
            shape.draw(out)?;
        }
        Ok(())
    }

    fn get_variant_closures<'a>(&'a self, config: &TimingConfig) -> Vec<Variant<'a>> {
        let scene = Arc::new(Scene::random(config.input_size, config.seed));

        code::get_variants()
            .into_iter()
            .map(|v| {
                let scene = Arc::clone(&scene);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let mut sink = std::io::sink();
                        let (elapsed, drawn) = measure(|| func(&scene, &mut sink).is_ok());
                        (elapsed, drawn.then_some(scene.len() as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}
