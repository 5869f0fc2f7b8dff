use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Render item with depth for sorting.
struct RenderItem {
    depth: f32,
    instance: RenderInstance,
}

/// Build the render buffer from the scene as seen through the camera.
///
/// Projects every active mesh entity to screen space, then groups by pass:
/// opaque instances first, transparent after `transparent_split`. Each pass
/// is sorted back-to-front (painter's algorithm) so blended shells composite
/// correctly without a depth buffer.
pub fn build_render_buffer(scene: &Scene, camera: &PerspectiveCamera, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut opaque: Vec<RenderItem> = Vec::new();
    let mut transparent: Vec<RenderItem> = Vec::new();

    for entity in scene.iter() {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let proj = match camera.project(entity.pos) {
            Some(p) => p,
            None => continue, // outside the near/far range
        };

        let mat = &mesh.material;
        let item = RenderItem {
            depth: proj.depth,
            instance: RenderInstance {
                x: proj.pos.x,
                y: proj.pos.y,
                radius: mesh.radius() * proj.scale,
                texture: mat.map.map_or(-1.0, |t| t.0 as f32),
                r: mat.color.r,
                g: mat.color.g,
                b: mat.color.b,
                opacity: if mat.transparent { mat.opacity } else { 1.0 },
                emissive_r: mat.emissive.r * mat.emissive_intensity,
                emissive_g: mat.emissive.g * mat.emissive_intensity,
                emissive_b: mat.emissive.b * mat.emissive_intensity,
                rotation_x: entity.rotation.x,
                rotation_y: entity.rotation.y,
                ..Default::default()
            },
        };

        if mat.transparent {
            transparent.push(item);
        } else {
            opaque.push(item);
        }
    }

    // Back-to-front within each pass: larger depth renders first.
    let farthest_first = |a: &RenderItem, b: &RenderItem| {
        b.depth
            .partial_cmp(&a.depth)
            .unwrap_or(std::cmp::Ordering::Equal)
    };
    opaque.sort_by(farthest_first);
    transparent.sort_by(farthest_first);

    let split = opaque.len() as u32;
    for item in opaque {
        buffer.push(item.instance);
    }
    buffer.set_transparent_split(split);
    for item in transparent {
        buffer.push(item.instance);
    }
}
