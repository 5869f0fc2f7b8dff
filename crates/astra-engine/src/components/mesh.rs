use crate::assets::registry::TextureId;

/// RGB color in linear [0, 1] channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Surface description for a mesh: tint, optional texture map,
/// opacity/transparency, and HDR emissive glow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Tint color, multiplied with the texture if one is mapped.
    pub color: Color,
    /// Texture map (None renders the flat tint).
    pub map: Option<TextureId>,
    /// Opacity in [0, 1]. Only honored when `transparent` is set.
    pub opacity: f32,
    /// Whether this material renders in the blended transparent pass.
    pub transparent: bool,
    /// Emissive glow color.
    pub emissive: Color,
    /// Emissive intensity multiplier (0.0 = no glow, >1.0 pushes into HDR).
    pub emissive_intensity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            map: None,
            opacity: 1.0,
            transparent: false,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
        }
    }
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_map(mut self, map: TextureId) -> Self {
        self.map = Some(map);
        self
    }

    /// Enable the transparent pass at the given opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    pub fn with_emissive(mut self, color: Color, intensity: f32) -> Self {
        self.emissive = color;
        self.emissive_intensity = intensity;
        self
    }
}

/// Mesh shape primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
}

/// Component for renderable meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: Shape,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }

    /// Sphere mesh of the given radius.
    pub fn sphere(radius: f32, material: Material) -> Self {
        Self::new(Shape::Sphere { radius }, material)
    }

    /// The bounding radius of the shape, used for perspective sizing.
    pub fn radius(&self) -> f32 {
        match self.shape {
            Shape::Sphere { radius } => radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_unpacks_channels() {
        let c = Color::from_hex(0xff9900);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 0.6).abs() < 0.01);
        assert!((c.b - 0.0).abs() < 1e-6);
    }

    #[test]
    fn color_from_hex_white_and_black() {
        assert_eq!(Color::from_hex(0xffffff), Color::WHITE);
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
    }

    #[test]
    fn material_defaults_are_opaque() {
        let m = Material::default();
        assert_eq!(m.opacity, 1.0);
        assert!(!m.transparent);
        assert_eq!(m.emissive_intensity, 0.0);
    }

    #[test]
    fn with_opacity_enables_transparency() {
        let m = Material::new(Color::WHITE).with_opacity(0.1);
        assert!(m.transparent);
        assert!((m.opacity - 0.1).abs() < 1e-6);
    }

    #[test]
    fn sphere_radius_reported() {
        let mesh = MeshComponent::sphere(89.0, Material::default());
        assert_eq!(mesh.radius(), 89.0);
    }
}
