/// Planet factory — builds a body's meshes and registers them in the scene.

use astra_engine::{Color, EngineContext, Entity, EntityId, Material, MeshComponent, Rng};
use glam::Vec3;

use crate::bodies::{PlanetParams, ATMOSPHERE_OPACITY, MOON_TEXTURE, MOON_TINT};

/// One orbiting body. Holds orbital parameters plus non-owning handles into
/// the scene, which owns the meshes; positions and rotations are pushed
/// through `Scene::get_mut` each frame.
pub struct CelestialBody {
    /// Sphere radius in world units.
    pub size: f64,
    /// Orbital angular speed multiplier.
    pub speed: f64,
    /// Orbital distance from the origin.
    pub rotation_radius: f64,
    /// Vertical bob amplitude: inclination degrees divided by 360.
    pub orbital_inclination: f64,
    pub body: EntityId,
    pub atmosphere: EntityId,
    pub moon: Option<EntityId>,
}

/// Independent uniform rotation offset in [0, 1) radians per axis, so bodies
/// don't all start in identical orientation. Drawn from the engine's seeded
/// RNG for reproducible scenes.
fn random_rotation(rng: &mut Rng) -> Vec3 {
    Vec3::new(rng.next_f32(), rng.next_f32(), rng.next_f32())
}

/// Create a body from its parameters: a textured sphere, a translucent
/// atmosphere shell of radius `size + atmosphere` (literal arithmetic — a
/// negative atmosphere sinks the shell inside the body), and optionally a
/// moon of radius `size / 4` sharing the common moon material.
///
/// All meshes are spawned into the scene exactly once and never removed.
/// Malformed parameters or unknown texture names are not validated here;
/// a missing texture just renders the flat tint.
pub fn create_body(ctx: &mut EngineContext, params: &PlanetParams) -> CelestialBody {
    let tint = Color::from_hex(params.tint);

    let body_material = Material {
        map: ctx.textures.get(params.texture),
        ..Material::new(tint)
    };
    let body = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(body)
            .with_tag(params.name)
            .with_rotation(random_rotation(&mut ctx.rng))
            .with_mesh(MeshComponent::sphere(params.size as f32, body_material)),
    );

    let atmosphere_material = Material::new(tint).with_opacity(ATMOSPHERE_OPACITY);
    let atmosphere = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(atmosphere)
            .with_tag(format!("{}-atmosphere", params.name))
            .with_rotation(random_rotation(&mut ctx.rng))
            .with_mesh(MeshComponent::sphere(
                (params.size + params.atmosphere) as f32,
                atmosphere_material,
            )),
    );

    let moon = params.has_moon.then(|| {
        let moon_material = Material {
            map: ctx.textures.get(MOON_TEXTURE),
            ..Material::new(Color::from_hex(MOON_TINT))
        };
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(format!("{}-moon", params.name))
                .with_rotation(random_rotation(&mut ctx.rng))
                .with_mesh(MeshComponent::sphere(params.size as f32 / 4.0, moon_material)),
        );
        id
    });

    CelestialBody {
        size: params.size,
        speed: params.speed,
        rotation_radius: params.rotation_radius,
        orbital_inclination: params.inclination_deg / 360.0,
        body,
        atmosphere,
        moon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_engine::{GameConfig, Shape};

    fn test_ctx() -> EngineContext {
        EngineContext::new(&GameConfig::default())
    }

    fn earth() -> PlanetParams {
        PlanetParams {
            name: "earth",
            size: 19.0,
            atmosphere: 1.43,
            speed: 2.98,
            rotation_radius: 217.0,
            texture: "earth",
            tint: 0xffffff,
            has_moon: true,
            inclination_deg: 0.0,
        }
    }

    fn sphere_radius(ctx: &EngineContext, id: EntityId) -> f32 {
        match ctx.scene.get(id).unwrap().mesh.unwrap().shape {
            Shape::Sphere { radius } => radius,
        }
    }

    #[test]
    fn earth_end_to_end() {
        let mut ctx = test_ctx();
        let body = create_body(&mut ctx, &earth());

        assert_eq!(body.size, 19.0);
        assert!(body.moon.is_some());
        // 0 / 360 — the vertical bob is always zero regardless of time.
        assert_eq!(body.orbital_inclination, 0.0);
        assert_eq!(ctx.scene.len(), 3);
    }

    #[test]
    fn shell_radius_is_size_plus_atmosphere() {
        let mut ctx = test_ctx();
        let body = create_body(&mut ctx, &earth());
        assert_eq!(sphere_radius(&ctx, body.atmosphere), 19.0 + 1.43);
    }

    #[test]
    fn negative_atmosphere_is_kept_literal() {
        let mut ctx = test_ctx();
        let params = PlanetParams { atmosphere: -1.0, ..earth() };
        let body = create_body(&mut ctx, &params);
        // Shell ends up smaller than the body — intentional, not clamped.
        assert_eq!(sphere_radius(&ctx, body.atmosphere), 18.0);
    }

    #[test]
    fn moon_is_a_quarter_of_the_body() {
        let mut ctx = test_ctx();
        let body = create_body(&mut ctx, &earth());
        assert_eq!(sphere_radius(&ctx, body.moon.unwrap()), 4.75);
    }

    #[test]
    fn moonless_body_spawns_two_meshes() {
        let mut ctx = test_ctx();
        let params = PlanetParams { has_moon: false, ..earth() };
        let body = create_body(&mut ctx, &params);
        assert!(body.moon.is_none());
        assert_eq!(ctx.scene.len(), 2);
    }

    #[test]
    fn atmosphere_shell_is_translucent() {
        let mut ctx = test_ctx();
        let body = create_body(&mut ctx, &earth());
        let mat = ctx.scene.get(body.atmosphere).unwrap().mesh.unwrap().material;
        assert!(mat.transparent);
        assert!((mat.opacity - ATMOSPHERE_OPACITY).abs() < 1e-6);
    }

    #[test]
    fn initial_rotations_are_randomized_but_reproducible() {
        let mut ctx_a = test_ctx();
        let mut ctx_b = test_ctx();
        let a = create_body(&mut ctx_a, &earth());
        let b = create_body(&mut ctx_b, &earth());

        let rot_a = ctx_a.scene.get(a.body).unwrap().rotation;
        let rot_b = ctx_b.scene.get(b.body).unwrap().rotation;
        // Same seed, same draw order: identical scenes.
        assert_eq!(rot_a, rot_b);
        assert_ne!(rot_a, Vec3::ZERO);

        // Each mesh draws its own offsets.
        let moon_rot = ctx_a.scene.get(a.moon.unwrap()).unwrap().rotation;
        assert_ne!(moon_rot, rot_a);
    }
}
