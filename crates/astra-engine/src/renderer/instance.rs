use bytemuck::{Pod, Zeroable};

/// Per-instance render data written to SharedArrayBuffer for the TypeScript
/// sphere rasterizer. Must match the TypeScript protocol: 16 floats = 64 bytes
/// stride.
///
/// Positions and radii are screen-space: the engine projects through the
/// camera before writing, so the rasterizer never sees world coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// Screen X in pixels.
    pub x: f32,
    /// Screen Y in pixels.
    pub y: f32,
    /// Screen radius in pixels.
    pub radius: f32,
    /// Texture id, or -1.0 for an untextured flat tint.
    pub texture: f32,
    /// Tint color.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity (1.0 for the opaque pass).
    pub opacity: f32,
    /// Emissive glow, premultiplied by intensity (>1.0 pushes into HDR).
    pub emissive_r: f32,
    pub emissive_g: f32,
    pub emissive_b: f32,
    /// Self-rotation angles for texture orientation, radians.
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all projected instances and pass metadata.
pub struct RenderBuffer {
    /// Instances ordered by pass: opaque first, then transparent after
    /// `transparent_split`, each pass sorted back-to-front.
    pub instances: Vec<RenderInstance>,
    /// Index where the transparent (blended) pass begins.
    pub transparent_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            transparent_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.transparent_split = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn set_transparent_split(&mut self, split: u32) {
        self.transparent_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
