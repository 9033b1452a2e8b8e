pub mod capacity;
pub mod geometry;

use crate::api::types::ParticleId;
use self::capacity::capacity_plan;
use self::geometry::ZoneGeometry;

/// A bottom collection slot with a capacity and an ordered member list.
#[derive(Debug, Clone)]
pub struct Zone {
    index: usize,
    capacity: usize,
    members: Vec<ParticleId>,
    full: bool,
}

impl Zone {
    fn new(index: usize, capacity: usize) -> Self {
        Self {
            index,
            capacity,
            members: Vec::with_capacity(capacity),
            // A zone that may hold nothing never accepts a member.
            full: capacity == 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn members(&self) -> &[ParticleId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.members.iter().any(|m| *m == id)
    }
}

/// The full set of zones for one division.
///
/// Rebuilt (members cleared, capacities recomputed, full flags reset) at the
/// start of every division.
#[derive(Debug, Clone)]
pub struct ZoneSet {
    geometry: ZoneGeometry,
    zones: Vec<Zone>,
}

impl ZoneSet {
    /// Create an empty zone set. `rebuild` must run before a division.
    pub fn new(geometry: ZoneGeometry) -> Self {
        let zones = (0..geometry.zone_count())
            .map(|index| Zone::new(index, 0))
            .collect();
        Self { geometry, zones }
    }

    pub fn geometry(&self) -> &ZoneGeometry {
        &self.geometry
    }

    /// Reset all zones for a fresh division of `total` particles.
    pub fn rebuild(&mut self, total: usize) {
        let plan = capacity_plan(total, self.geometry.zone_count());
        self.zones = plan
            .into_iter()
            .enumerate()
            .map(|(index, capacity)| Zone::new(index, capacity))
            .collect();
    }

    pub fn zone(&self, index: usize) -> &Zone {
        &self.zones[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// The zone a particle already belongs to, if any.
    ///
    /// Linear scan over all member lists; fine at this scale (tens of
    /// particles) and run once per landed particle per frame.
    pub fn member_zone(&self, id: ParticleId) -> Option<usize> {
        self.zones.iter().position(|z| z.contains(id))
    }

    /// Total particles assigned across all zones.
    pub fn assigned_total(&self) -> usize {
        self.zones.iter().map(|z| z.len()).sum()
    }

    /// Index of the zone with the strictly smallest member count, scanning
    /// left to right so ties keep the lowest index.
    pub fn least_populated(&self) -> usize {
        let mut best = 0;
        for (index, zone) in self.zones.iter().enumerate() {
            if zone.len() < self.zones[best].len() {
                best = index;
            }
        }
        best
    }

    /// Append a member to a zone. Returns `true` when this push filled the
    /// zone to capacity.
    ///
    /// Callers must check `is_full` first; pushing into a full zone is a
    /// logic error upstream, so the member is refused to keep the capacity
    /// invariant intact.
    pub fn push_member(&mut self, index: usize, id: ParticleId) -> bool {
        let zone = &mut self.zones[index];
        if zone.full {
            log::warn!("refused push into full zone {index}");
            return false;
        }
        zone.members.push(id);
        if zone.members.len() >= zone.capacity {
            zone.full = true;
            return true;
        }
        false
    }
}
