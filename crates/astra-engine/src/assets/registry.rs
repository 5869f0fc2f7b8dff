use std::collections::HashMap;

use crate::assets::manifest::TextureManifest;

/// Handle to a texture uploaded by the TypeScript layer.
/// Index into the manifest's texture list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Registry of named textures, built from a TextureManifest.
/// Provides name-based lookup for game code; the id order matches the
/// manifest so both sides agree without further negotiation.
pub struct TextureRegistry {
    by_name: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    /// Build a registry from a parsed TextureManifest.
    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut by_name = HashMap::with_capacity(manifest.textures.len());
        for (index, desc) in manifest.textures.iter().enumerate() {
            by_name.insert(desc.name.clone(), TextureId(index as u32));
        }
        Self { by_name }
    }

    /// Look up a texture by name.
    /// Unknown names log a warning and return None — the mesh renders with
    /// its flat tint instead (a visual glitch, not an error).
    pub fn get(&self, name: &str) -> Option<TextureId> {
        let id = self.by_name.get(name).copied();
        if id.is_none() {
            log::warn!("texture not in manifest: {name}");
        }
        id
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
