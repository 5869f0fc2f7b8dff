use astra_engine::{
    build_render_buffer, pack_lights, EngineContext, FixedTimestep, Game, GameConfig, InputEvent,
    InputQueue, LightBuffer, ProtocolLayout, RenderBuffer, TextureManifest, TextureRegistry,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    light_buffer: LightBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::new(&config);

        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let light_buffer = LightBuffer::with_capacity(config.max_lights);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer,
            light_buffer,
            timestep,
            config,
            layout,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction, after any manifest
    /// has been loaded (init spawns textured meshes).
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Load the texture manifest JSON and rebuild the registry.
    /// A malformed manifest is logged and ignored — meshes spawned afterward
    /// fall back to flat tints.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.textures = TextureRegistry::from_manifest(&manifest);
                log::info!("loaded {} textures", self.ctx.textures.len());
            }
            Err(err) => log::warn!("bad texture manifest: {err}"),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update game, project the scene, pack lights.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
        }

        // Drain input after update
        self.input.drain();

        // Project the scene through the camera into the instance buffer
        build_render_buffer(&self.ctx.scene, &self.ctx.camera, &mut self.render_buffer);

        // Serialize scene lights
        pack_lights(&self.ctx.scene, &mut self.light_buffer);
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn transparent_split(&self) -> u32 {
        self.render_buffer.transparent_split
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.light_buffer.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.light_buffer.count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn canvas_width(&self) -> f32 {
        self.config.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.config.canvas_height
    }

    /// Background texture id for the renderer, or -1.0 when unset.
    pub fn background_texture(&self) -> f32 {
        self.ctx
            .scene
            .background()
            .map_or(-1.0, |t| t.0 as f32)
    }

    pub fn clear_color(&self) -> u32 {
        self.config.clear_color
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
