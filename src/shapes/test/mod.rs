//! Tests for the tagged and polymorphic shape renditions

use super::code::{get_variants, Scene, SHAPE_CATALOG};
use crate::error::{DispatchError, Result};

fn render(function: super::code::RenderFn, scene: &Scene) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    function(scene, &mut out)?;
    Ok(out)
}

/// Verify every variant draws byte-identical output to the first one
pub fn verify_all() -> Result<()> {
    let all_kinds: Vec<usize> = (0..SHAPE_CATALOG.len()).collect();
    let scenes = [
        Scene::from_catalog(&all_kinds),
        Scene::from_catalog(&[2, 2, 0, 1, 0]),
        Scene::random(257, 0x5EED),
        Scene::from_catalog(&[]),
    ];

    let variants = get_variants();
    let Some((reference, others)) = variants.split_first() else {
        return Ok(());
    };

    for scene in &scenes {
        let expected = render(reference.function, scene)?;
        let lines = expected.iter().filter(|&&b| b == b'\n').count();
        if lines != scene.len() {
            return Err(DispatchError::Verification {
                variant: reference.name.to_string(),
                reason: format!("expected {} lines, got {}", scene.len(), lines),
            });
        }

        for variant in others {
            let actual = render(variant.function, scene)?;
            if actual != expected {
                return Err(DispatchError::Verification {
                    variant: variant.name.to_string(),
                    reason: format!(
                        "output differs from '{}' on a {}-shape scene",
                        reference.name,
                        scene.len()
                    ),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should draw the same scene");
    }

    #[test]
    fn test_scene_output_order() {
        let scene = Scene::from_catalog(&[1, 0, 2]);
        for variant in get_variants() {
            let out = String::from_utf8(render(variant.function, &scene).unwrap()).unwrap();
            assert_eq!(
                out,
                "Drawing a Square\nDrawing a Circle\nDrawing a Rectangle\n",
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_never_falls_through_to_another_variant() {
        for (idx, (kind, _)) in SHAPE_CATALOG.iter().enumerate() {
            let scene = Scene::from_catalog(&[idx]);
            for variant in get_variants() {
                let out = String::from_utf8(render(variant.function, &scene).unwrap()).unwrap();
                assert_eq!(out, format!("Drawing a {}\n", kind), "{}", variant.name);
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let scene = Scene::random(32, 3);
        for variant in get_variants() {
            let first = render(variant.function, &scene).unwrap();
            let second = render(variant.function, &scene).unwrap();
            assert_eq!(first, second, "{}", variant.name);
        }
    }
}
