use glam::Vec2;

use crate::api::config::{ConfigError, SimConfig};
use crate::api::types::{DivisionEvent, GroupsReport};
use crate::board::Board;
use crate::core::physics::PhysicsWorld;
use crate::core::rng::Rng;
use crate::render::frame::{CircleInstance, FrameSnapshot, RectInstance, TextLabel};
use crate::sim::assign::GroupAssigner;
use crate::sim::particle::{ANONYMOUS_RADIUS, NAMED_RADIUS};
use crate::sim::roster::Roster;
use crate::zones::geometry::ZoneGeometry;
use crate::zones::ZoneSet;

const BACKGROUND: [u8; 3] = [50, 50, 50];
const STATIC_COLOR: [u8; 3] = [255, 255, 255];
const LABEL_COLOR: [u8; 3] = [185, 185, 185];
const LABEL_SIZE: f32 = 40.0;

/// Lifecycle of one group assignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionState {
    /// No active particles; waiting for a drop.
    Idle,
    /// Particles falling; the assignment engine runs every frame.
    Running,
    /// Every particle seated; groups are final and frames are no-ops.
    Finalized,
}

/// Owns the physics world, the static board, the particle roster, and the
/// zone state, and runs one logical frame at a time:
/// step physics → cull off-screen particles → assignment pass → completion
/// check.
pub struct Simulation {
    config: SimConfig,
    world: PhysicsWorld,
    board: Board,
    roster: Roster,
    zones: ZoneSet,
    assigner: GroupAssigner,
    rng: Rng,
    state: DivisionState,
    events: Vec<DivisionEvent>,
    results: Option<GroupsReport>,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = PhysicsWorld::new(Vec2::new(0.0, config.gravity_y));
        world.set_dt(config.fixed_dt);
        let board = Board::build(&mut world, &config);
        let geometry = ZoneGeometry::new(config.zone_count, config.world_width);
        let assigner = GroupAssigner::new(config.scoring_threshold());
        let rng = Rng::new(config.seed);
        Ok(Self {
            zones: ZoneSet::new(geometry),
            config,
            world,
            board,
            roster: Roster::new(),
            assigner,
            rng,
            state: DivisionState::Idle,
            events: Vec::new(),
            results: None,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> DivisionState {
        self.state
    }

    /// Finalized zone-to-labels mapping; `None` until the division completes.
    pub fn results(&self) -> Option<&GroupsReport> {
        self.results.as_ref()
    }

    /// Drain the events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<DivisionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a new division: one particle per name, dropped from the top
    /// center with horizontal jitter. With no names configured, a single
    /// anonymous particle falls instead.
    pub fn start_division(&mut self, names: &[String]) {
        self.roster.clear(&mut self.world);
        self.results = None;
        self.events.clear();

        let center = self.config.world_width / 2.0;
        let jitter = self.config.world_width / 4.0;
        if names.is_empty() {
            let x = center + self.rng.range(-jitter, jitter);
            self.roster.spawn(
                &mut self.world,
                &mut self.rng,
                None,
                Vec2::new(x, 0.0),
                ANONYMOUS_RADIUS,
            );
        } else {
            for name in names {
                let x = center + self.rng.range(-jitter, jitter);
                self.roster.spawn(
                    &mut self.world,
                    &mut self.rng,
                    Some(name.clone()),
                    Vec2::new(x, 0.0),
                    NAMED_RADIUS,
                );
            }
        }

        self.zones.rebuild(self.roster.len());
        self.state = DivisionState::Running;
        log::info!(
            "division started: {} particles into {} zones",
            self.roster.len(),
            self.config.zone_count
        );
    }

    /// Destroy all particles and clear the zones. The board stays; the frame
    /// loop keeps idling until the next division.
    pub fn reset(&mut self) {
        self.roster.clear(&mut self.world);
        self.zones.rebuild(0);
        self.results = None;
        self.events.clear();
        self.state = DivisionState::Idle;
        log::info!("simulation reset");
    }

    /// One logical frame. A no-op unless a division is running.
    pub fn frame(&mut self) {
        if self.state != DivisionState::Running {
            return;
        }

        self.world.step();
        self.roster
            .remove_offscreen(&mut self.world, self.config.world_width);
        self.assigner.run_pass(
            &mut self.world,
            &mut self.roster,
            &mut self.zones,
            &mut self.rng,
            &mut self.events,
        );

        if self.assigner.is_complete(&self.zones, &self.roster) {
            self.state = DivisionState::Finalized;
            self.results = Some(self.build_report());
            self.events.push(DivisionEvent::Finalized);
            log::info!(
                "division finalized: {} particles seated",
                self.roster.len()
            );
        }
    }

    /// Everything the rendering sink needs to paint the current frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut snapshot = FrameSnapshot {
            background: BACKGROUND,
            ..FrameSnapshot::default()
        };

        // zone point labels, 1..=N left to right
        let zone_width = self.config.zone_width();
        for zone in 0..self.config.zone_count {
            snapshot.labels.push(TextLabel {
                pos: Vec2::new(
                    zone as f32 * zone_width + zone_width / 2.0 - 2.0,
                    self.config.world_height - 50.0,
                ),
                text: (zone + 1).to_string(),
                size: LABEL_SIZE,
                color: LABEL_COLOR,
            });
        }

        for peg in &self.board.pegs {
            snapshot.circles.push(CircleInstance {
                pos: peg.pos,
                radius: peg.radius,
                color: STATIC_COLOR,
                label: None,
            });
        }
        for particle in self.roster.iter() {
            snapshot.circles.push(CircleInstance {
                pos: self.world.body_position(&particle.body),
                radius: particle.radius,
                color: particle.color,
                label: Some(particle.label().to_owned()),
            });
        }
        for wall in &self.board.walls {
            snapshot.rects.push(RectInstance {
                center: wall.center,
                size: wall.size,
                color: STATIC_COLOR,
            });
        }
        snapshot
    }

    fn build_report(&self) -> GroupsReport {
        let groups = self
            .zones
            .iter()
            .map(|zone| {
                zone.members()
                    .iter()
                    .filter_map(|id| self.roster.find(*id))
                    .map(|p| p.label().to_owned())
                    .collect()
            })
            .collect();
        GroupsReport { groups }
    }

    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut PhysicsWorld, &mut Roster, &ZoneSet) {
        (&mut self.world, &mut self.roster, &self.zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sim(zone_count: usize) -> Simulation {
        Simulation::new(SimConfig {
            zone_count,
            ..SimConfig::default()
        })
        .unwrap()
    }

    /// Drop every particle straight onto the floor of its intended zone so a
    /// single frame decides the whole division.
    fn land_all(sim: &mut Simulation, xs: &[f32]) {
        let y = sim.config().scoring_threshold() + 10.0;
        let (world, roster, _) = sim.parts_mut();
        for (index, x) in xs.iter().enumerate() {
            roster.reposition(world, index, Vec2::new(*x, y));
        }
    }

    #[test]
    fn zero_zone_config_is_rejected() {
        let result = Simulation::new(SimConfig {
            zone_count: 0,
            ..SimConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::ZeroZones)));
    }

    #[test]
    fn start_division_spawns_one_particle_per_name() {
        let mut sim = sim(3);
        sim.start_division(&names(&["ada", "grace", "edsger"]));
        assert_eq!(sim.state(), DivisionState::Running);
        let (_, roster, zones) = sim.parts_mut();
        assert_eq!(roster.len(), 3);
        let caps: usize = zones.iter().map(|z| z.capacity()).sum();
        assert_eq!(caps, 3);
    }

    #[test]
    fn no_names_spawns_the_anonymous_particle() {
        let mut sim = sim(3);
        sim.start_division(&[]);
        let (_, roster, _) = sim.parts_mut();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).label(), "particle");
    }

    #[test]
    fn frame_is_noop_while_idle() {
        let mut sim = sim(3);
        sim.frame();
        assert_eq!(sim.state(), DivisionState::Idle);
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn division_finalizes_when_every_particle_lands() {
        let mut sim = sim(3);
        sim.start_division(&names(&["a", "b", "c"]));

        // one per zone: centers of zones 0, 1, 2 on an 800-wide board
        let zw = sim.config().zone_width();
        land_all(&mut sim, &[zw * 0.5, zw * 1.5, zw * 2.5]);
        sim.frame();

        assert_eq!(sim.state(), DivisionState::Finalized);
        let report = sim.results().expect("report after finalize");
        assert_eq!(report.member_count(), 3);

        // every label appears exactly once across the groups
        let mut all: Vec<String> = report.groups.iter().flatten().cloned().collect();
        all.sort();
        assert_eq!(all, names(&["a", "b", "c"]));
    }

    #[test]
    fn finalize_fires_exactly_once() {
        let mut sim = sim(2);
        sim.start_division(&names(&["a", "b"]));
        let zw = sim.config().zone_width();
        land_all(&mut sim, &[zw * 0.5, zw * 1.5]);
        sim.frame();

        let events = sim.drain_events();
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == DivisionEvent::Finalized)
                .count(),
            1
        );

        // further frames change nothing
        sim.frame();
        assert_eq!(sim.state(), DivisionState::Finalized);
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn empty_division_never_finalizes() {
        let mut sim = sim(3);
        // never started; also cover a started-then-culled roster
        sim.start_division(&names(&["far"]));
        {
            let (world, roster, _) = sim.parts_mut();
            roster.reposition(world, 0, Vec2::new(-200.0, 300.0));
        }
        for _ in 0..5 {
            sim.frame();
        }
        // the particle fell off the board and was culled; nothing to seat
        assert_eq!(sim.state(), DivisionState::Running);
        assert!(sim.results().is_none());
    }

    #[test]
    fn reset_clears_particles_and_results() {
        let mut sim = sim(2);
        sim.start_division(&names(&["a", "b"]));
        let zw = sim.config().zone_width();
        land_all(&mut sim, &[zw * 0.5, zw * 1.5]);
        sim.frame();
        assert!(sim.results().is_some());

        sim.reset();
        assert_eq!(sim.state(), DivisionState::Idle);
        assert!(sim.results().is_none());
        let (_, roster, zones) = sim.parts_mut();
        assert!(roster.is_empty());
        assert_eq!(zones.assigned_total(), 0);
    }

    #[test]
    fn consecutive_divisions_rebuild_fresh_state() {
        let mut sim = sim(2);
        sim.start_division(&names(&["a", "b"]));
        let zw = sim.config().zone_width();
        land_all(&mut sim, &[zw * 0.5, zw * 1.5]);
        sim.frame();
        assert_eq!(sim.state(), DivisionState::Finalized);

        sim.start_division(&names(&["c", "d", "e", "f"]));
        assert_eq!(sim.state(), DivisionState::Running);
        let (_, roster, zones) = sim.parts_mut();
        assert_eq!(roster.len(), 4);
        assert!(zones.iter().all(|z| z.is_empty()));
        assert_eq!(zones.iter().map(|z| z.capacity()).sum::<usize>(), 4);
    }

    #[test]
    fn snapshot_contains_board_and_particles() {
        let mut sim = sim(4);
        sim.start_division(&names(&["a", "b"]));
        let snapshot = sim.snapshot();

        assert_eq!(snapshot.labels.len(), 4);
        assert_eq!(snapshot.labels[0].text, "1");
        assert_eq!(snapshot.labels[3].text, "4");
        // 3 canvas bounds + 4 dividers
        assert_eq!(snapshot.rects.len(), 7);
        let labeled = snapshot
            .circles
            .iter()
            .filter(|c| c.label.is_some())
            .count();
        assert_eq!(labeled, 2);
    }

    #[test]
    fn overflow_particles_end_up_spread_evenly() {
        // 4 particles into 2 zones, all aimed at zone 0: capacities [2, 2],
        // so two of them must be redirected and land in zone 1.
        let mut sim = sim(2);
        sim.start_division(&names(&["a", "b", "c", "d"]));
        let zw = sim.config().zone_width();
        // spaced out inside zone 0 so the solver has no overlaps to resolve
        land_all(&mut sim, &[zw * 0.25, zw * 0.4, zw * 0.6, zw * 0.75]);
        sim.frame();

        // two seated in zone 0, two sent back up
        {
            let (_, _, zones) = sim.parts_mut();
            assert_eq!(zones.zone(0).len(), 2);
            assert!(zones.zone(0).is_full());
            assert_eq!(zones.assigned_total(), 2);
        }

        // land the redirected pair in the zone they were aimed at
        let y = sim.config().scoring_threshold() + 10.0;
        {
            let (world, roster, zones) = sim.parts_mut();
            let full: Vec<usize> = (0..roster.len())
                .filter(|i| {
                    let id = roster.get(*i).id;
                    zones.member_zone(id).is_none()
                })
                .collect();
            assert_eq!(full.len(), 2);
            for (slot, index) in full.into_iter().enumerate() {
                let x = zw * (1.3 + 0.4 * slot as f32);
                roster.reposition(world, index, Vec2::new(x, y));
            }
        }
        sim.frame();

        assert_eq!(sim.state(), DivisionState::Finalized);
        let report = sim.results().unwrap();
        assert_eq!(report.groups[0].len(), 2);
        assert_eq!(report.groups[1].len(), 2);
    }
}
