pub mod api;
pub mod board;
pub mod core;
pub mod render;
pub mod sim;
pub mod zones;

// Re-export key types at crate root for convenience
pub use crate::api::config::{ConfigError, SimConfig};
pub use crate::api::types::{DivisionEvent, GroupsReport, ParticleId};
pub use crate::core::physics::{
    BodyDesc, BodyType, ColliderDesc, ColliderMaterial, PhysicsBody, PhysicsWorld,
};
pub use crate::core::rng::Rng;
pub use crate::core::time::FixedTimestep;
pub use crate::render::frame::{CircleInstance, FrameSnapshot, RectInstance, TextLabel};
pub use crate::sim::driver::{DivisionState, Simulation};
pub use crate::sim::particle::Particle;
pub use crate::sim::roster::Roster;
pub use crate::zones::capacity::capacity_plan;
pub use crate::zones::geometry::ZoneGeometry;
pub use crate::zones::{Zone, ZoneSet};
