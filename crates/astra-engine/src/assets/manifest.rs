use serde::{Deserialize, Serialize};

/// Asset manifest describing all textures for a game.
/// Loaded from a JSON file at runtime; the TypeScript layer decodes the
/// actual image files and uploads them in manifest order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// List of named textures. Index in this list becomes the TextureId.
    pub textures: Vec<TextureDescriptor>,
}

/// Describes a single texture image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Name game code uses to look the texture up (e.g. "earth").
    pub name: String,
    /// Relative path to the image file (e.g. "textures/earth.jpg").
    /// Defaults to the `textures/<name>.jpg` convention when omitted.
    #[serde(default)]
    pub path: Option<String>,
}

impl TextureDescriptor {
    /// Resolved image path, applying the convention when none was given.
    pub fn resolved_path(&self) -> String {
        match &self.path {
            Some(p) => p.clone(),
            None => format!("textures/{}.jpg", self.name),
        }
    }
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
