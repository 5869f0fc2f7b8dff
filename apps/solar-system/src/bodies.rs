/// Body parameters and scene constants.
///
/// Sizes, radii and speeds are pre-scaled world units, not physical values —
/// chosen so the whole system fits the camera's zoom range.

/// Parameters for one orbiting body.
pub struct PlanetParams {
    pub name: &'static str,
    /// Sphere radius in world units.
    pub size: f64,
    /// Extra radius for the translucent shell. May be negative — several
    /// bodies pass -1, which makes the shell smaller than the body. The
    /// arithmetic is kept literal; the shell is simply not visible then.
    pub atmosphere: f64,
    /// Orbital angular speed multiplier.
    pub speed: f64,
    /// Orbital distance from the origin.
    pub rotation_radius: f64,
    /// Texture name resolved through the manifest (`textures/<name>.jpg`).
    pub texture: &'static str,
    /// Tint color as 0xRRGGBB.
    pub tint: u32,
    pub has_moon: bool,
    /// Orbital inclination in degrees; stored on the body as degrees/360 and
    /// used as a vertical bob amplitude, not a true inclination angle.
    pub inclination_deg: f64,
}

pub const PLANET_COUNT: usize = 9;

pub const PLANETS: [PlanetParams; PLANET_COUNT] = [
    PlanetParams { name: "mercury", size: 13.0, atmosphere: 0.01, speed: 4.74, rotation_radius: 165.0, texture: "moon2", tint: 0x964b00, has_moon: false, inclination_deg: 7.0 },
    PlanetParams { name: "venus",   size: 18.0, atmosphere: 0.74, speed: 3.5,  rotation_radius: 197.0, texture: "moon",  tint: 0xffa500, has_moon: false, inclination_deg: 3.4 },
    PlanetParams { name: "earth",   size: 19.0, atmosphere: 1.43, speed: 2.98, rotation_radius: 217.0, texture: "earth", tint: 0xffffff, has_moon: true,  inclination_deg: 0.0 },
    PlanetParams { name: "mars",    size: 15.0, atmosphere: 0.02, speed: 2.41, rotation_radius: 244.0, texture: "moon",  tint: 0xffcccb, has_moon: true,  inclination_deg: 1.9 },
    PlanetParams { name: "jupiter", size: 42.0, atmosphere: -1.0, speed: 1.31, rotation_radius: 347.0, texture: "gas",   tint: 0xff9900, has_moon: true,  inclination_deg: 1.3 },
    PlanetParams { name: "saturn",  size: 39.0, atmosphere: -1.0, speed: 0.97, rotation_radius: 413.0, texture: "gas",   tint: 0xffff99, has_moon: true,  inclination_deg: 2.5 },
    PlanetParams { name: "uranus",  size: 29.0, atmosphere: -1.0, speed: 0.67, rotation_radius: 504.0, texture: "fire",  tint: 0x0000ff, has_moon: true,  inclination_deg: 0.8 },
    PlanetParams { name: "neptune", size: 29.0, atmosphere: -1.0, speed: 0.54, rotation_radius: 573.0, texture: "gas",   tint: 0x00008b, has_moon: true,  inclination_deg: 1.8 },
    PlanetParams { name: "pluto",   size: 11.0, atmosphere: 0.37, speed: 0.47, rotation_radius: 619.0, texture: "moon",  tint: 0x808080, has_moon: true,  inclination_deg: 17.2 },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 89.0;
pub const SUN_TEXTURE: &str = "fire";
pub const SUN_GLOW: u32 = 0xffff00;
pub const SUN_EMISSIVE_INTENSITY: f32 = 0.8;
/// The two overlapping sun meshes spin at distinct constant rates, one twice
/// as fast as the other, for a shimmering overlay effect.
pub const SUN_SPIN: f32 = 0.01;
pub const SUN2_SPIN: f32 = 0.005;

pub const HALO_RADIUS: f32 = 100.0;
pub const HALO_OPACITY: f32 = 0.1;
pub const HALO_EMISSIVE_INTENSITY: f32 = 0.2;

// ── Atmosphere shells ────────────────────────────────────────────────

pub const ATMOSPHERE_OPACITY: f32 = 0.1;

// ── Moons ────────────────────────────────────────────────────────────

/// Every moon shares one material: white tint, `moon2` texture.
pub const MOON_TEXTURE: &str = "moon2";
pub const MOON_TINT: u32 = 0xffffff;

// ── Self-rotation ────────────────────────────────────────────────────

/// Per-frame X/Y rotation increment is `SPIN_RATE * body_index` — the first
/// body never spins past its initial random offset.
pub const SPIN_RATE: f32 = 0.001;

// ── Time ─────────────────────────────────────────────────────────────

/// Time accumulator increment per tick. Frame-count-based, so playback speed
/// follows the display refresh rate.
pub const TIME_STEP: f64 = 0.01;

// ── Camera / zoom ────────────────────────────────────────────────────

pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 10000.0;
pub const CANVAS_WIDTH: f32 = 1280.0;
pub const CANVAS_HEIGHT: f32 = 720.0;
pub const CLEAR_COLOR: u32 = 0xaaaaaa;

pub const ZOOM_START: f64 = 200.0;
/// Key-clamp bounds and step for the arrow keys.
pub const ZOOM_MIN: f64 = 250.0;
pub const ZOOM_MAX: f64 = 800.0;
pub const ZOOM_CONTROL_SPEED: f64 = 10.0;
/// The slow automatic zoom-out runs to its own bound, past ZOOM_MAX.
pub const ZOOM_AUTO_LIMIT: f64 = 1000.0;
pub const ZOOM_AUTO_STEP: f64 = 0.3;

// ── Input ────────────────────────────────────────────────────────────

pub const KEY_ARROW_UP: u32 = 38;
pub const KEY_ARROW_DOWN: u32 = 40;
/// Viewport resize (sent by the worker as kind=99).
pub const CUSTOM_RESIZE: u32 = 99;

// ── Scene ────────────────────────────────────────────────────────────

pub const BACKGROUND_TEXTURE: &str = "space";
pub const AMBIENT_WHITE_INTENSITY: f32 = 0.4;
pub const AMBIENT_BLUE: u32 = 0x00008b;
pub const AMBIENT_BLUE_INTENSITY: f32 = 0.2;
pub const POINT_LIGHT_INTENSITY: f32 = 2.0;

/// Seed for the initial-rotation RNG; fixed so the scene is reproducible.
pub const RNG_SEED: u64 = 42;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_planets() {
        assert_eq!(PLANETS.len(), PLANET_COUNT);
    }

    #[test]
    fn sizes_are_positive() {
        for p in &PLANETS {
            assert!(p.size > 0.0, "{} has non-positive size", p.name);
            assert!(p.rotation_radius > 0.0);
        }
    }

    #[test]
    fn orbits_are_ordered_outward() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].rotation_radius < pair[1].rotation_radius);
        }
    }

    #[test]
    fn seven_bodies_have_moons() {
        let count = PLANETS.iter().filter(|p| p.has_moon).count();
        assert_eq!(count, 7);
    }

    #[test]
    fn gas_giants_have_sunken_shells() {
        // The -1 atmosphere values are intentional; see PlanetParams docs.
        for name in ["jupiter", "saturn", "uranus", "neptune"] {
            let p = PLANETS.iter().find(|p| p.name == name).unwrap();
            assert_eq!(p.atmosphere, -1.0);
        }
    }

    #[test]
    fn zoom_bounds_are_consistent() {
        assert!(ZOOM_MIN + ZOOM_CONTROL_SPEED < ZOOM_MAX - ZOOM_CONTROL_SPEED);
        assert!(ZOOM_MAX < ZOOM_AUTO_LIMIT);
    }
}
