/// Orbit math — pure functions, no engine dependencies.
///
/// Uses f64 throughout; positions convert to f32 only when written to
/// entities in game.rs.
///
/// Orbits are deliberately simple parametric circles, not Kepler ellipses:
/// each body moves on a circle of fixed radius in the XZ plane with a
/// vertical sine bob sharing the same phase.

use glam::DVec3;

/// Per-index additive phase constant (radians). Purely a desynchronization
/// device so bodies don't start in a straight line — not a physical angle.
pub const PHASE_SPACING: f64 = 20.0;

/// Gap between a body's surface and its moon's orbit.
pub const MOON_CLEARANCE: f64 = 4.0;

/// Orbital phase of the body at `index` (0-based creation order).
pub fn body_phase(time: f64, speed: f64, index: usize) -> f64 {
    time * speed + (index as f64 + 1.0) * PHASE_SPACING
}

/// Moon phase: twice the parent's angular rate, same per-index offset.
pub fn moon_phase(time: f64, speed: f64, index: usize) -> f64 {
    2.0 * time * speed + (index as f64 + 1.0) * PHASE_SPACING
}

/// Position on a circular orbit of `rotation_radius` in the XZ plane, with a
/// vertical bob of `bob_amplitude` synchronized to the same phase.
pub fn orbit_position(rotation_radius: f64, bob_amplitude: f64, phase: f64) -> DVec3 {
    DVec3::new(
        rotation_radius * phase.cos(),
        bob_amplitude * phase.sin(),
        rotation_radius * phase.sin(),
    )
}

/// Fixed distance between a body's center and its moon.
pub fn moon_offset(size: f64) -> f64 {
    size + size / 4.0 + MOON_CLEARANCE
}

/// Moon bob amplitude shrinks with body index: outer moons bob relatively less.
pub fn moon_bob_amplitude(offset: f64, index: usize) -> f64 {
    offset / (5.0 + (index as f64 + 1.0) * 5.0)
}

/// Moon position relative to its parent's current position.
pub fn moon_position(parent: DVec3, offset: f64, bob_amplitude: f64, phase: f64) -> DVec3 {
    parent
        + DVec3::new(
            offset * phase.cos(),
            bob_amplitude * phase.sin(),
            offset * phase.sin(),
        )
}
