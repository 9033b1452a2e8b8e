use crate::api::types::ParticleId;
use crate::core::physics::{ColliderMaterial, PhysicsBody};
use crate::core::rng::Rng;

/// Radius of a named particle.
pub const NAMED_RADIUS: f32 = 20.0;
/// Radius of the anonymous fallback particle spawned when no names are
/// configured.
pub const ANONYMOUS_RADIUS: f32 = 12.0;
/// Restitution a particle starts (and restarts) with.
pub const BASE_RESTITUTION: f32 = 0.8;
/// Restitution once assigned to a zone; the extra bounce pushes the particle
/// off the settled cluster instead of letting it wander along the floor.
pub const ASSIGNED_RESTITUTION: f32 = 0.9;

/// A simulated body plus identity, label, and render state.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Stable identity; survives repositions.
    pub id: ParticleId,
    /// Display label; `None` for the anonymous fallback particle.
    pub name: Option<String>,
    pub radius: f32,
    /// Render-only color, randomized at spawn.
    pub color: [u8; 3],
    /// Handles into the physics world. Replaced wholesale on reposition.
    pub body: PhysicsBody,
    /// Legacy score from the point-zone days; carried, never read.
    pub point_value: u32,
}

impl Particle {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("particle")
    }

    /// Material every particle body is created with.
    pub fn material() -> ColliderMaterial {
        ColliderMaterial {
            restitution: BASE_RESTITUTION,
            friction: 0.0,
            density: 1.0,
        }
    }

    /// Random pastel color; each channel has a floor so particles stay
    /// visible against the dark background.
    pub fn random_color(rng: &mut Rng) -> [u8; 3] {
        let channel = |rng: &mut Rng, floor: f32| (rng.next_f32() * 255.0).max(floor) as u8;
        [
            channel(rng, 20.0),
            channel(rng, 210.0),
            channel(rng, 150.0),
        ]
    }
}
