/// Solar system — nine bodies orbiting a double-mesh sun, with a slow
/// auto-zoom camera the arrow keys push in and out.

use astra_engine::{
    Color, EngineContext, Entity, EntityId, Game, GameConfig, GameEvent, InputEvent, InputQueue,
    Light, Material, MeshComponent,
};
use glam::Vec3;

use crate::bodies::*;
use crate::orbit;
use crate::planet::{create_body, CelestialBody};

// ── Game event kinds to the UI layer ─────────────────────────────────

/// Per-frame view info: a = time, b = zoom.
const EVENT_VIEW_INFO: f32 = 1.0;

/// All mutable state of the visualization. The camera zoom and the time
/// accumulator live here rather than in globals; input mutates them only
/// through the setters below.
pub struct SolarSystem {
    /// Time accumulator, advanced by a fixed step per tick (not wall clock).
    time: f64,
    /// Camera distance along the fixed diagonal viewing axis.
    zoom: f64,
    /// Bodies in creation order; the index doubles as the phase offset.
    planets: Vec<CelestialBody>,

    sun: Option<EntityId>,
    sun2: Option<EntityId>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            zoom: ZOOM_START,
            planets: Vec::new(),
            sun: None,
            sun2: None,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    // ── Zoom setters ───────────────────────────────────────────────

    /// Arrow-up: move the camera in, never below the key-clamp floor.
    fn zoom_in(&mut self) {
        if self.zoom > ZOOM_MIN + ZOOM_CONTROL_SPEED {
            self.zoom -= ZOOM_CONTROL_SPEED;
        }
    }

    /// Arrow-down: move the camera out, never past the key-clamp ceiling.
    fn zoom_out(&mut self) {
        if self.zoom < ZOOM_MAX - ZOOM_CONTROL_SPEED {
            self.zoom += ZOOM_CONTROL_SPEED;
        }
    }

    /// The continuous slow zoom-out, bounded by its own (wider) limit.
    fn auto_zoom(&mut self) {
        if self.zoom < ZOOM_AUTO_LIMIT {
            self.zoom += ZOOM_AUTO_STEP;
        }
    }

    fn handle_key(&mut self, key_code: u32) {
        match key_code {
            KEY_ARROW_UP => self.zoom_in(),
            KEY_ARROW_DOWN => self.zoom_out(),
            _ => {}
        }
    }

    // ── Scene construction helpers ─────────────────────────────────

    fn spawn_sun(ctx: &mut EngineContext, tag: &str) -> EntityId {
        let material = Material {
            map: ctx.textures.get(SUN_TEXTURE),
            ..Material::new(Color::WHITE)
                .with_emissive(Color::from_hex(SUN_GLOW), SUN_EMISSIVE_INTENSITY)
        };
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(tag)
                .with_mesh(MeshComponent::sphere(SUN_RADIUS, material)),
        );
        id
    }

    fn spawn_halo(ctx: &mut EngineContext) {
        let glow = Color::from_hex(SUN_GLOW);
        let material = Material::new(glow)
            .with_opacity(HALO_OPACITY)
            .with_emissive(glow, HALO_EMISSIVE_INTENSITY);
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("sun-halo")
                .with_mesh(MeshComponent::sphere(HALO_RADIUS, material)),
        );
    }

    /// Increment an entity's X and Y rotation by the same amount.
    fn rotate(ctx: &mut EngineContext, id: EntityId, amount: f32) {
        if let Some(entity) = ctx.scene.get_mut(id) {
            entity.rotation.x += amount;
            entity.rotation.y += amount;
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            clear_color: CLEAR_COLOR,
            rng_seed: RNG_SEED,
            max_instances: 64,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Lighting ─────────────────────────────────────────────────
        ctx.scene.add_light(Light::Ambient {
            color: Color::WHITE,
            intensity: AMBIENT_WHITE_INTENSITY,
        });
        ctx.scene.add_light(Light::Ambient {
            color: Color::from_hex(AMBIENT_BLUE),
            intensity: AMBIENT_BLUE_INTENSITY,
        });
        ctx.scene.add_light(Light::Point {
            color: Color::WHITE,
            intensity: POINT_LIGHT_INTENSITY,
            pos: Vec3::ZERO,
        });

        if let Some(space) = ctx.textures.get(BACKGROUND_TEXTURE) {
            ctx.scene.set_background(space);
        }

        // ── Sun: two spinning meshes plus a static translucent halo ──
        self.sun = Some(Self::spawn_sun(ctx, "sun"));
        self.sun2 = Some(Self::spawn_sun(ctx, "sun2"));
        Self::spawn_halo(ctx);

        // ── Planets, in the order that fixes their phase offsets ─────
        for params in PLANETS.iter() {
            self.planets.push(create_body(ctx, params));
        }

        log::info!(
            "scene built: {} bodies, {} entities",
            self.planets.len(),
            ctx.scene.len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Input ────────────────────────────────────────────────────
        for event in input.iter() {
            match event {
                InputEvent::KeyDown { key_code } => self.handle_key(*key_code),
                InputEvent::Custom { kind, a, b, .. } if *kind == CUSTOM_RESIZE => {
                    ctx.camera.set_viewport(*a, *b);
                }
                _ => {}
            }
        }

        // ── Camera: slow zoom-out, fixed-bearing dolly on the diagonal
        self.auto_zoom();
        let zoom = self.zoom as f32;
        ctx.camera.set_position(Vec3::new(zoom, 0.0, zoom));
        ctx.camera.look_at(Vec3::ZERO);

        // ── Advance time ─────────────────────────────────────────────
        self.time += TIME_STEP;

        // ── Move bodies ──────────────────────────────────────────────
        for (i, planet) in self.planets.iter().enumerate() {
            let phase = orbit::body_phase(self.time, planet.speed, i);
            let pos = orbit::orbit_position(
                planet.rotation_radius,
                planet.orbital_inclination,
                phase,
            );
            let spin = SPIN_RATE * i as f32;

            if let Some(entity) = ctx.scene.get_mut(planet.body) {
                entity.pos = pos.as_vec3();
                entity.rotation.x += spin;
                entity.rotation.y += spin;
            }
            // The shell tracks the body exactly; it does not spin.
            if let Some(entity) = ctx.scene.get_mut(planet.atmosphere) {
                entity.pos = pos.as_vec3();
            }

            if let Some(moon_id) = planet.moon {
                let offset = orbit::moon_offset(planet.size);
                let bob = orbit::moon_bob_amplitude(offset, i);
                let moon_pos = orbit::moon_position(
                    pos,
                    offset,
                    bob,
                    orbit::moon_phase(self.time, planet.speed, i),
                );
                if let Some(entity) = ctx.scene.get_mut(moon_id) {
                    entity.pos = moon_pos.as_vec3();
                    entity.rotation.x += spin;
                    entity.rotation.y += spin;
                }
            }
        }

        // ── Spin the sun overlay meshes ──────────────────────────────
        if let Some(sun) = self.sun {
            Self::rotate(ctx, sun, SUN_SPIN);
        }
        if let Some(sun2) = self.sun2 {
            Self::rotate(ctx, sun2, SUN2_SPIN);
        }

        ctx.emit_event(GameEvent {
            kind: EVENT_VIEW_INFO,
            a: self.time as f32,
            b: self.zoom as f32,
            c: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn tick(game: &mut SolarSystem, ctx: &mut EngineContext) {
        let input = InputQueue::new();
        game.update(ctx, &input);
    }

    fn tick_with_keys(game: &mut SolarSystem, ctx: &mut EngineContext, keys: &[u32]) {
        let mut input = InputQueue::new();
        for &key in keys {
            input.push(InputEvent::KeyDown { key_code: key });
        }
        game.update(ctx, &input);
    }

    fn body_pos(ctx: &EngineContext, id: EntityId) -> Vec3 {
        ctx.scene.get(id).unwrap().pos
    }

    #[test]
    fn init_builds_the_whole_scene() {
        let (game, ctx) = setup();
        assert_eq!(game.planets.len(), 9);
        // 2 suns + halo, then a body and shell per planet plus 7 moons.
        assert_eq!(ctx.scene.len(), 3 + 9 * 2 + 7);
        assert_eq!(ctx.scene.lights().len(), 3);
        assert!(ctx.scene.find_by_tag("sun-halo").is_some());
    }

    #[test]
    fn scenes_with_equal_seeds_are_identical() {
        let (game_a, ctx_a) = setup();
        let (game_b, ctx_b) = setup();
        for (a, b) in game_a.planets.iter().zip(&game_b.planets) {
            let rot_a = ctx_a.scene.get(a.body).unwrap().rotation;
            let rot_b = ctx_b.scene.get(b.body).unwrap().rotation;
            assert_eq!(rot_a, rot_b);
        }
    }

    #[test]
    fn camera_rides_the_diagonal() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx);
        let zoom = game.zoom() as f32;
        assert_eq!(ctx.camera.position, Vec3::new(zoom, 0.0, zoom));
        assert_eq!(ctx.camera.target, Vec3::ZERO);
    }

    #[test]
    fn auto_zoom_creeps_toward_its_own_limit() {
        let (mut game, mut ctx) = setup();
        let start = game.zoom();
        tick(&mut game, &mut ctx);
        assert!((game.zoom() - (start + ZOOM_AUTO_STEP)).abs() < 1e-9);

        for _ in 0..4000 {
            tick(&mut game, &mut ctx);
        }
        assert!(game.zoom() <= ZOOM_AUTO_LIMIT + ZOOM_AUTO_STEP);
    }

    #[test]
    fn zoom_keys_respect_the_clamp_range() {
        let (mut game, mut ctx) = setup();

        // Hammer arrow-down: keys alone never push past the ceiling.
        for _ in 0..200 {
            tick_with_keys(&mut game, &mut ctx, &[KEY_ARROW_DOWN]);
        }
        assert!(game.zoom() <= ZOOM_MAX + ZOOM_AUTO_STEP * 200.0);

        // Hammer arrow-up: never below the floor, whatever came before.
        for _ in 0..500 {
            tick_with_keys(&mut game, &mut ctx, &[KEY_ARROW_UP]);
        }
        assert!(game.zoom() >= ZOOM_MIN);
    }

    #[test]
    fn up_key_is_ignored_at_the_floor() {
        let (mut game, mut ctx) = setup();
        // Start zoom (200) is already below the floor; arrow-up must not fire.
        let before = game.zoom();
        tick_with_keys(&mut game, &mut ctx, &[KEY_ARROW_UP]);
        assert!((game.zoom() - (before + ZOOM_AUTO_STEP)).abs() < 1e-9);
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let (mut game, mut ctx) = setup();
        let before = game.zoom();
        tick_with_keys(&mut game, &mut ctx, &[32, 13, 37, 39]);
        assert!((game.zoom() - (before + ZOOM_AUTO_STEP)).abs() < 1e-9);
    }

    #[test]
    fn time_advances_by_fixed_step() {
        let (mut game, mut ctx) = setup();
        for _ in 0..10 {
            tick(&mut game, &mut ctx);
        }
        assert!((game.time - 0.1).abs() < 1e-12);
    }

    #[test]
    fn bodies_stay_on_their_circles() {
        let (mut game, mut ctx) = setup();
        for _ in 0..25 {
            tick(&mut game, &mut ctx);
        }
        for planet in &game.planets {
            let pos = body_pos(&ctx, planet.body);
            let r = (pos.x * pos.x + pos.z * pos.z).sqrt();
            let expected = planet.rotation_radius as f32;
            assert!((r - expected).abs() / expected < 1e-5);
        }
    }

    #[test]
    fn shell_tracks_body_exactly() {
        let (mut game, mut ctx) = setup();
        for _ in 0..25 {
            tick(&mut game, &mut ctx);
            for planet in &game.planets {
                assert_eq!(body_pos(&ctx, planet.body), body_pos(&ctx, planet.atmosphere));
            }
        }
    }

    #[test]
    fn earth_never_bobs() {
        // Inclination 0/360: flat orbit regardless of time.
        let (mut game, mut ctx) = setup();
        for _ in 0..50 {
            tick(&mut game, &mut ctx);
            assert_eq!(body_pos(&ctx, game.planets[2].body).y, 0.0);
        }
    }

    #[test]
    fn first_body_never_spins() {
        let (mut game, mut ctx) = setup();
        let initial = ctx.scene.get(game.planets[0].body).unwrap().rotation;
        for _ in 0..100 {
            tick(&mut game, &mut ctx);
        }
        assert_eq!(ctx.scene.get(game.planets[0].body).unwrap().rotation, initial);
    }

    #[test]
    fn spin_accumulates_linearly_with_index() {
        let (mut game, mut ctx) = setup();
        let i = 4;
        let initial = ctx.scene.get(game.planets[i].body).unwrap().rotation;
        let frames = 100;
        for _ in 0..frames {
            tick(&mut game, &mut ctx);
        }
        let rotation = ctx.scene.get(game.planets[i].body).unwrap().rotation;
        let expected = initial.x + frames as f32 * SPIN_RATE * i as f32;
        assert!((rotation.x - expected).abs() < 1e-3);
        assert!((rotation.y - (initial.y + frames as f32 * SPIN_RATE * i as f32)).abs() < 1e-3);
    }

    #[test]
    fn moons_hold_their_offset_distance() {
        let (mut game, mut ctx) = setup();
        for _ in 0..25 {
            tick(&mut game, &mut ctx);
        }
        for planet in &game.planets {
            if let Some(moon_id) = planet.moon {
                let body = body_pos(&ctx, planet.body);
                let moon = body_pos(&ctx, moon_id);
                let planar = ((moon.x - body.x).powi(2) + (moon.z - body.z).powi(2)).sqrt();
                let expected = orbit::moon_offset(planet.size) as f32;
                assert!(
                    (planar - expected).abs() / expected < 1e-4,
                    "moon offset drifted for a body of size {}",
                    planet.size
                );
            }
        }
    }

    #[test]
    fn sun_meshes_spin_at_distinct_rates() {
        let (mut game, mut ctx) = setup();
        for _ in 0..10 {
            tick(&mut game, &mut ctx);
        }
        let sun = ctx.scene.get(game.sun.unwrap()).unwrap().rotation;
        let sun2 = ctx.scene.get(game.sun2.unwrap()).unwrap().rotation;
        assert!((sun.x - 10.0 * SUN_SPIN).abs() < 1e-6);
        assert!((sun2.x - 10.0 * SUN2_SPIN).abs() < 1e-6);
        // The halo stays put.
        let halo = ctx.scene.find_by_tag("sun-halo").unwrap();
        assert_eq!(halo.rotation, Vec3::ZERO);
    }

    #[test]
    fn resize_event_updates_the_camera() {
        let (mut game, mut ctx) = setup();
        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: CUSTOM_RESIZE, a: 1920.0, b: 960.0, c: 0.0 });
        game.update(&mut ctx, &input);
        assert!((ctx.camera.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn view_info_event_emitted_each_tick() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx);
        let event = ctx.events.last().expect("view info event");
        assert_eq!(event.kind, EVENT_VIEW_INFO);
        assert!((event.a - game.time as f32).abs() < 1e-6);
        assert!((event.b - game.zoom as f32).abs() < 1e-3);
    }
}
