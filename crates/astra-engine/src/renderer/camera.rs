use glam::{Vec2, Vec3};

/// Projection result from 3D world space to 2D screen space.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Screen position in pixels, origin top-left.
    pub pos: Vec2,
    /// View-space distance along the camera forward axis (positive = in front).
    pub depth: f32,
    /// Pixels per world unit at this depth, for perspective sizing.
    pub scale: f32,
}

/// Perspective camera with explicit position/target, projecting world
/// positions to screen pixels for the instance rasterizer.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip distance; points closer than this are culled.
    pub near: f32,
    /// Far clip distance; points beyond this are culled.
    pub far: f32,
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World up direction.
    pub up: Vec3,
    screen_width: f32,
    screen_height: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, near: f32, far: f32, screen_width: f32, screen_height: f32) -> Self {
        Self {
            fov_degrees,
            near,
            far,
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            screen_width,
            screen_height,
        }
    }

    /// Viewport aspect ratio (width over height).
    pub fn aspect(&self) -> f32 {
        self.screen_width / self.screen_height
    }

    /// Update screen dimensions (e.g. on canvas resize).
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Aim the camera at a world-space point.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Focal length in pixels, derived from the vertical field of view.
    fn focal_length(&self) -> f32 {
        let half_fov = self.fov_degrees.to_radians() / 2.0;
        (self.screen_height / 2.0) / half_fov.tan()
    }

    /// Orthonormal view basis: (right, up, forward).
    /// Forward points from the camera toward the target.
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Project a world position to screen pixels.
    /// Returns None for points outside the near/far range (culled).
    pub fn project(&self, world: Vec3) -> Option<Projection> {
        let (right, up, forward) = self.basis();
        let rel = world - self.position;

        let depth = rel.dot(forward);
        if depth < self.near || depth > self.far {
            return None;
        }

        let focal = self.focal_length();
        let scale = focal / depth;
        let x = self.screen_width / 2.0 + rel.dot(right) * scale;
        // Screen Y grows downward.
        let y = self.screen_height / 2.0 - rel.dot(up) * scale;

        Some(Projection {
            pos: Vec2::new(x, y),
            depth,
            scale,
        })
    }
}
