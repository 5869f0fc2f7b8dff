/// Scene light serialization for the renderer's lighting pass.
///
/// Lights are persistent — games add them once at init and the engine
/// serializes the active set to the SAB each frame.

use bytemuck::{Pod, Zeroable};

use crate::core::scene::{Light, Scene};

/// Wire format for one light (8 floats / 32 bytes):
/// `[kind, r, g, b, intensity, x, y, z]`
/// kind 0 = ambient (position ignored), kind 1 = point.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LightData {
    pub kind: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LightData {
    pub const FLOATS: usize = 8;

    pub const KIND_AMBIENT: f32 = 0.0;
    pub const KIND_POINT: f32 = 1.0;
}

/// Flat buffer of serialized lights for SharedArrayBuffer reads.
pub struct LightBuffer {
    lights: Vec<LightData>,
}

impl LightBuffer {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn push(&mut self, light: LightData) {
        self.lights.push(light);
    }

    pub fn count(&self) -> u32 {
        self.lights.len() as u32
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize the scene's lights into the flat buffer, in insertion order.
pub fn pack_lights(scene: &Scene, buffer: &mut LightBuffer) {
    buffer.clear();
    for light in scene.lights() {
        let data = match *light {
            Light::Ambient { color, intensity } => LightData {
                kind: LightData::KIND_AMBIENT,
                r: color.r,
                g: color.g,
                b: color.b,
                intensity,
                ..Default::default()
            },
            Light::Point { color, intensity, pos } => LightData {
                kind: LightData::KIND_POINT,
                r: color.r,
                g: color.g,
                b: color.b,
                intensity,
                x: pos.x,
                y: pos.y,
                z: pos.z,
            },
        };
        buffer.push(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::Color;
    use glam::Vec3;

    #[test]
    fn light_data_is_8_floats() {
        assert_eq!(std::mem::size_of::<LightData>(), LightData::FLOATS * 4);
    }

    #[test]
    fn packs_ambient_and_point() {
        let mut scene = Scene::new();
        scene.add_light(Light::Ambient { color: Color::WHITE, intensity: 0.4 });
        scene.add_light(Light::Point {
            color: Color::from_hex(0xffffff),
            intensity: 2.0,
            pos: Vec3::new(0.0, 0.0, 0.0),
        });

        let mut buffer = LightBuffer::new();
        pack_lights(&scene, &mut buffer);

        assert_eq!(buffer.count(), 2);
        assert_eq!(buffer.lights[0].kind, LightData::KIND_AMBIENT);
        assert!((buffer.lights[0].intensity - 0.4).abs() < 1e-6);
        assert_eq!(buffer.lights[1].kind, LightData::KIND_POINT);
        assert!((buffer.lights[1].intensity - 2.0).abs() < 1e-6);
    }

    #[test]
    fn repack_replaces_previous_frame() {
        let mut scene = Scene::new();
        scene.add_light(Light::Ambient { color: Color::WHITE, intensity: 0.4 });

        let mut buffer = LightBuffer::new();
        pack_lights(&scene, &mut buffer);
        pack_lights(&scene, &mut buffer);
        assert_eq!(buffer.count(), 1);
    }
}
