use glam::Vec3;

use crate::api::types::EntityId;
use crate::assets::registry::TextureId;
use crate::components::entity::Entity;
use crate::components::mesh::Color;

/// A scene light. Ambient lights tint everything uniformly; point lights
/// fall off with distance from their position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient { color: Color, intensity: f32 },
    Point { color: Color, intensity: f32, pos: Vec3 },
}

/// Entity storage plus scene-wide state (background, lights).
/// Flat Vec storage — designed for small-to-medium entity counts.
///
/// The scene exclusively owns all spawned entities; game code keeps only
/// `EntityId` handles and mutates through `get_mut`.
pub struct Scene {
    entities: Vec<Entity>,
    lights: Vec<Light>,
    background: Option<TextureId>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
            lights: Vec::new(),
            background: None,
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Active scene lights, in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Set the background texture rendered behind all entities.
    pub fn set_background(&mut self, texture: TextureId) {
        self.background = Some(texture);
    }

    /// The background texture, if one was set.
    pub fn background(&self) -> Option<TextureId> {
        self.background
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
