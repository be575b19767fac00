//! Polymorphic rendition: one capability trait, one type per shape.
//!
//! A new shape is a new type implementing [`Shape`]; existing types and the
//! rendering loop stay untouched.

use super::Scene;
use crate::error::{DispatchError, Result};
use std::io::Write;

/// Drawing capability shared by every shape variant.
pub trait Shape: Send + Sync {
    /// Label fixed at construction.
    fn kind(&self) -> &str;

    /// Write one line describing the drawing.
    ///
    /// The provided body is the undifferentiated base: it writes nothing and
    /// reports [`DispatchError::NotImplemented`]. Variants must override it.
    fn draw(&self, _out: &mut dyn Write) -> Result<()> {
        Err(DispatchError::NotImplemented {
            kind: self.kind().to_string(),
            operation: "draw",
        })
    }

    /// Hook for per-shape setup. Does nothing unless overridden.
    fn configure(&mut self) {}

    fn details(&self) -> String {
        format!("{} shape", self.kind())
    }
}

/// A shape with a label and no drawing behavior of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseShape {
    kind: String,
}

impl BaseShape {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl Shape for BaseShape {
    fn kind(&self) -> &str {
        &self.kind
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle;

impl Shape for Circle {
    fn kind(&self) -> &str {
        "Circle"
    }

    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing a Circle")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl Shape for Square {
    fn kind(&self) -> &str {
        "Square"
    }

    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing a Square")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle;

impl Shape for Rectangle {
    fn kind(&self) -> &str {
        "Rectangle"
    }

    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing a Rectangle")?;
        Ok(())
    }
}

/// Draw every shape of the scene through the trait object.
pub fn render_scene(scene: &Scene, out: &mut dyn Write) -> Result<()> {
    for shape in &scene.shapes {
        shape.draw(out)?;
    }
    Ok(())
}
