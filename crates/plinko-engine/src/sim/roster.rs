use glam::Vec2;

use crate::api::types::ParticleId;
use crate::core::physics::{BodyDesc, ColliderDesc, PhysicsWorld};
use crate::core::rng::Rng;
use crate::sim::particle::Particle;

/// Horizontal margin beyond the board edges before a particle is culled.
pub const OFFSCREEN_MARGIN: f32 = 50.0;

/// The active particles of a division, in spawn order.
///
/// Flat Vec storage; designed for tens of particles, not thousands.
#[derive(Default)]
pub struct Roster {
    particles: Vec<Particle>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, index: usize) -> &Particle {
        &self.particles[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn find(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// Create a particle and its physics body at the given coordinates.
    pub fn spawn(
        &mut self,
        world: &mut PhysicsWorld,
        rng: &mut Rng,
        name: Option<String>,
        pos: Vec2,
        radius: f32,
    ) -> ParticleId {
        let id = self.fresh_id(rng);
        let body = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::Ball { radius }).with_position(pos),
            Particle::material(),
        );
        self.particles.push(Particle {
            id,
            name,
            radius,
            color: Particle::random_color(rng),
            body,
            point_value: 0,
        });
        id
    }

    /// Re-create a particle's body at a new coordinate.
    ///
    /// The particle keeps its identity, label, and color; the body restarts
    /// with the base material, so an assignment-era restitution bump does
    /// not follow it back to the top.
    pub fn reposition(&mut self, world: &mut PhysicsWorld, index: usize, pos: Vec2) {
        let particle = &mut self.particles[index];
        world.remove_body(&particle.body);
        particle.body = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::Ball {
                radius: particle.radius,
            })
            .with_position(pos),
            Particle::material(),
        );
    }

    /// Remove particles that left the horizontal bounds of the board.
    ///
    /// Index walk: the index only advances past survivors, so a removal
    /// never skips the particle that slid into the vacated slot.
    pub fn remove_offscreen(&mut self, world: &mut PhysicsWorld, world_width: f32) -> usize {
        let mut removed = 0;
        let mut index = 0;
        while index < self.particles.len() {
            let pos = world.body_position(&self.particles[index].body);
            if pos.x < -OFFSCREEN_MARGIN || pos.x > world_width + OFFSCREEN_MARGIN {
                world.remove_body(&self.particles[index].body);
                self.particles.remove(index);
                removed += 1;
            } else {
                index += 1;
            }
        }
        removed
    }

    /// Remove every particle and its body.
    pub fn clear(&mut self, world: &mut PhysicsWorld) {
        for particle in &self.particles {
            world.remove_body(&particle.body);
        }
        self.particles.clear();
    }

    fn fresh_id(&self, rng: &mut Rng) -> ParticleId {
        loop {
            let id = ParticleId(rng.next_u64());
            if self.particles.iter().all(|p| p.id != id) {
                return id;
            }
        }
    }
}
