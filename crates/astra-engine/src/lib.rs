pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use crate::api::game::{Game, GameConfig, EngineContext};
pub use crate::api::types::{EntityId, GameEvent};
pub use crate::components::entity::Entity;
pub use crate::components::mesh::{Color, Material, MeshComponent, Shape};
pub use crate::core::rng::Rng;
pub use crate::core::scene::{Light, Scene};
pub use crate::core::time::FixedTimestep;
pub use crate::renderer::camera::{PerspectiveCamera, Projection};
pub use crate::renderer::instance::{RenderBuffer, RenderInstance};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::assets::manifest::TextureManifest;
pub use crate::assets::registry::{TextureId, TextureRegistry};
pub use crate::bridge::protocol::ProtocolLayout;
pub use crate::systems::lighting::{pack_lights, LightBuffer, LightData};
pub use crate::systems::render::build_render_buffer;
