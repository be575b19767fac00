//! Tag-branching rendition: one type, one `match` over its `kind` label.
//!
//! Supporting a new shape means editing [`TaggedShape::draw`]. Unknown labels
//! fall back to a fixed message instead of failing.

use super::Scene;
use crate::error::Result;
use std::io::Write;

/// A shape that only knows its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedShape {
    kind: String,
}

impl TaggedShape {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn configure(&mut self) {}

    pub fn details(&self) -> String {
        format!("{} shape", self.kind)
    }

    /// Branch on the label and write one line.
    pub fn draw(&self, out: &mut dyn Write) -> Result<()> {
        match self.kind.as_str() {
            "Circle" => writeln!(out, "Drawing a Circle")?,
            "Square" => writeln!(out, "Drawing a Square")?,
            "Rectangle" => writeln!(out, "Drawing a Rectangle")?,
            other => {
                tracing::warn!(kind = other, "no branch for shape kind, using fallback");
                writeln!(out, "Unknown shape type")?
            }
        }
        Ok(())
    }
}

/// Draw every tagged shape of the scene in order.
pub fn render_scene(scene: &Scene, out: &mut dyn Write) -> Result<()> {
    for shape in &scene.tagged {
        shape.draw(out)?;
    }
    Ok(())
}
