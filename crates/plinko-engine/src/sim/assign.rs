use glam::Vec2;

use crate::api::types::DivisionEvent;
use crate::core::physics::PhysicsWorld;
use crate::core::rng::Rng;
use crate::sim::particle::ASSIGNED_RESTITUTION;
use crate::sim::roster::Roster;
use crate::zones::ZoneSet;

/// Horizontal jitter applied to a redirected particle's aim point, so a
/// stream of overflow particles does not stack on one peg column.
pub const REDIRECT_JITTER: f32 = 25.0;

/// Decides, frame by frame, which settled particle belongs to which zone.
///
/// A particle is `unassigned` until it appears in a zone's member list;
/// assignment is terminal. Capacity is enforced *before* membership: a full
/// zone bounces the particle back to the top instead of accepting it.
pub struct GroupAssigner {
    threshold: f32,
}

impl GroupAssigner {
    /// `threshold` is the vertical position below which a particle counts as
    /// landed (see `SimConfig::scoring_threshold`).
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Run the per-frame assignment pass over every active particle.
    ///
    /// For each particle, in roster order:
    /// 1. skip while above the scoring threshold;
    /// 2. resolve the target zone from the horizontal position; divider-exact
    ///    and out-of-board positions resolve to no zone and retry next frame;
    /// 3. skip if already a member anywhere (a particle lingering below the
    ///    threshold is seen again every frame);
    /// 4. full target: reposition to the top, aimed at the least populated
    ///    zone, and let the next frames decide where it actually lands;
    /// 5. otherwise join the zone and bounce a little harder from now on.
    pub fn run_pass(
        &self,
        world: &mut PhysicsWorld,
        roster: &mut Roster,
        zones: &mut ZoneSet,
        rng: &mut Rng,
        events: &mut Vec<DivisionEvent>,
    ) {
        for index in 0..roster.len() {
            let (id, body) = {
                let particle = roster.get(index);
                (particle.id, particle.body)
            };
            let pos = world.body_position(&body);
            if pos.y < self.threshold {
                continue;
            }
            let Some(target) = zones.geometry().zone_index(pos.x) else {
                continue;
            };
            if zones.member_zone(id).is_some() {
                continue;
            }

            if zones.zone(target).is_full() {
                let toward = zones.least_populated();
                let aim_x = zones.geometry().center_of(toward)
                    + rng.range(-REDIRECT_JITTER, REDIRECT_JITTER);
                roster.reposition(world, index, Vec2::new(aim_x, 0.0));
                log::debug!(
                    "zone {target} full, sending particle back up toward zone {toward}"
                );
                events.push(DivisionEvent::Redirected {
                    particle: id,
                    toward,
                });
                continue;
            }

            if zones.push_member(target, id) {
                log::info!(
                    "zone {} filled ({} members)",
                    target,
                    zones.zone(target).len()
                );
                events.push(DivisionEvent::ZoneFilled { zone: target });
            }
            world.set_restitution(&body, ASSIGNED_RESTITUTION);
        }
    }

    /// A division is complete once every active particle holds a zone seat.
    /// An empty roster never completes.
    pub fn is_complete(&self, zones: &ZoneSet, roster: &Roster) -> bool {
        !roster.is_empty() && zones.assigned_total() == roster.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ParticleId;
    use crate::sim::particle::{BASE_RESTITUTION, NAMED_RADIUS};
    use crate::zones::geometry::ZoneGeometry;

    const WIDTH: f32 = 300.0;
    const THRESHOLD: f32 = 550.0;
    const LANDED_Y: f32 = 560.0;

    struct Rig {
        world: PhysicsWorld,
        roster: Roster,
        zones: ZoneSet,
        rng: Rng,
        assigner: GroupAssigner,
        events: Vec<DivisionEvent>,
    }

    /// Three zones of width 100 over a 300-wide board.
    fn rig(total: usize) -> Rig {
        let mut zones = ZoneSet::new(ZoneGeometry::new(3, WIDTH));
        zones.rebuild(total);
        Rig {
            world: PhysicsWorld::new(Vec2::ZERO),
            roster: Roster::new(),
            zones,
            rng: Rng::new(42),
            assigner: GroupAssigner::new(THRESHOLD),
            events: Vec::new(),
        }
    }

    impl Rig {
        fn land(&mut self, x: f32) -> ParticleId {
            self.roster.spawn(
                &mut self.world,
                &mut self.rng,
                None,
                Vec2::new(x, LANDED_Y),
                NAMED_RADIUS,
            )
        }

        fn pass(&mut self) {
            self.assigner.run_pass(
                &mut self.world,
                &mut self.roster,
                &mut self.zones,
                &mut self.rng,
                &mut self.events,
            );
        }
    }

    #[test]
    fn landed_particle_joins_its_zone() {
        let mut rig = rig(3);
        let id = rig.land(150.0);
        rig.pass();
        assert_eq!(rig.zones.member_zone(id), Some(1));
    }

    #[test]
    fn particle_above_threshold_is_ignored() {
        let mut rig = rig(3);
        let id = rig.roster.spawn(
            &mut rig.world,
            &mut rig.rng,
            None,
            Vec2::new(150.0, 100.0),
            NAMED_RADIUS,
        );
        rig.pass();
        assert_eq!(rig.zones.member_zone(id), None);
    }

    #[test]
    fn divider_exact_position_stays_unassigned() {
        let mut rig = rig(3);
        let id = rig.land(100.0);
        rig.pass();
        assert_eq!(rig.zones.member_zone(id), None);
        assert_eq!(rig.zones.assigned_total(), 0);
    }

    #[test]
    fn repeated_passes_are_idempotent() {
        let mut rig = rig(3);
        let id = rig.land(50.0);
        rig.pass();
        rig.pass();
        rig.pass();
        assert_eq!(rig.zones.member_zone(id), Some(0));
        assert_eq!(rig.zones.zone(0).len(), 1);
        assert_eq!(rig.zones.assigned_total(), 1);
    }

    #[test]
    fn assignment_bumps_restitution() {
        let mut rig = rig(3);
        rig.land(50.0);
        let body = rig.roster.get(0).body;
        assert!((rig.world.restitution(&body) - BASE_RESTITUTION).abs() < 0.001);
        rig.pass();
        assert!((rig.world.restitution(&body) - ASSIGNED_RESTITUTION).abs() < 0.001);
    }

    #[test]
    fn overflow_is_redirected_toward_least_populated_zone() {
        // capacities [1, 1, 1]
        let mut rig = rig(3);
        let first = rig.land(50.0);
        rig.pass();
        assert_eq!(rig.zones.member_zone(first), Some(0));
        assert!(rig.zones.zone(0).is_full());

        let second = rig.land(50.0);
        rig.events.clear();
        rig.pass();

        // not assigned anywhere, sent back to the top aimed at zone 1
        assert_eq!(rig.zones.member_zone(second), None);
        assert_eq!(
            rig.events,
            vec![DivisionEvent::Redirected {
                particle: second,
                toward: 1
            }]
        );
        let pos = rig.world.body_position(&rig.roster.get(1).body);
        assert_eq!(pos.y, 0.0);
        let center = rig.zones.geometry().center_of(1);
        assert!(
            (pos.x - center).abs() <= REDIRECT_JITTER,
            "aim x {} not near zone center {}",
            pos.x,
            center
        );
    }

    #[test]
    fn filling_a_zone_emits_an_event() {
        let mut rig = rig(3);
        rig.land(50.0);
        rig.pass();
        assert!(rig
            .events
            .contains(&DivisionEvent::ZoneFilled { zone: 0 }));
    }

    #[test]
    fn empty_roster_never_completes() {
        let rig = rig(0);
        assert!(!rig.assigner.is_complete(&rig.zones, &rig.roster));
    }

    #[test]
    fn completion_requires_every_particle_seated() {
        let mut rig = rig(2); // capacities [1, 1, 0]
        rig.land(50.0);
        rig.land(150.0);
        assert!(!rig.assigner.is_complete(&rig.zones, &rig.roster));
        rig.pass();
        assert!(rig.assigner.is_complete(&rig.zones, &rig.roster));
    }

    #[test]
    fn simultaneous_fills_complete_in_one_pass() {
        let mut rig = rig(3);
        rig.land(50.0);
        rig.land(150.0);
        rig.land(250.0);
        rig.pass();
        assert!(rig.assigner.is_complete(&rig.zones, &rig.roster));
        // every particle in exactly one zone
        for particle in rig.roster.iter() {
            let seats = rig
                .zones
                .iter()
                .filter(|z| z.contains(particle.id))
                .count();
            assert_eq!(seats, 1);
        }
    }
}
