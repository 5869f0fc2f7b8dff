use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::TextureRegistry;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Canvas width in pixels.
    pub canvas_width: f32,
    /// Canvas height in pixels.
    pub canvas_height: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip distance in world units.
    pub near: f32,
    /// Far clip distance in world units.
    pub far: f32,
    /// Renderer clear color behind the scene background (0xRRGGBB).
    pub clear_color: u32,
    /// Seed for the engine's deterministic RNG.
    pub rng_seed: u64,
    /// Maximum number of render instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of scene lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            canvas_width: 800.0,
            canvas_height: 600.0,
            fov_degrees: 45.0,
            near: 0.1,
            far: 10000.0,
            clear_color: 0x000000,
            rng_seed: 42,
            max_instances: 256,
            max_lights: 8,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: spawn entities, add lights, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Advance animation, move the camera, react to input.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub textures: TextureRegistry,
    pub rng: Rng,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::new(
                config.fov_degrees,
                config.near,
                config.far,
                config.canvas_width,
                config.canvas_height,
            ),
            textures: TextureRegistry::new(),
            rng: Rng::new(config.rng_seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
