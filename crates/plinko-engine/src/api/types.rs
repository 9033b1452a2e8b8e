use serde::Serialize;

/// Unique identifier for a particle in the roster.
///
/// Generated randomly at spawn and stable for the particle's lifetime,
/// including across repositions (the physics body is re-created, the id is
/// not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleId(pub u64);

/// Notable state transitions produced by a frame, drained by the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivisionEvent {
    /// A zone reached its capacity and stopped accepting members.
    ZoneFilled { zone: usize },
    /// A particle landed in a full zone and was sent back to the top,
    /// re-aimed at the least populated zone.
    Redirected { particle: ParticleId, toward: usize },
    /// Every active particle is assigned; the division is complete.
    Finalized,
}

/// Finalized zone-to-labels mapping, handed to the results presentation.
///
/// `groups[i]` is the ordered member list of zone `i` (assignment order).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupsReport {
    pub groups: Vec<Vec<String>>,
}

impl GroupsReport {
    /// Total number of names across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }
}
