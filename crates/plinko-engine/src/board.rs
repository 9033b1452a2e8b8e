use glam::Vec2;

use crate::api::config::{SimConfig, BOTTOM_WALL_HEIGHT, ZONE_WALL_HEIGHT};
use crate::core::physics::{BodyDesc, ColliderDesc, ColliderMaterial, PhysicsWorld};

/// Width of the left/right canvas boundary walls.
pub const SIDE_WALL_WIDTH: f32 = 50.0;
/// Width of the thin divider walls between zones.
pub const ZONE_WALL_WIDTH: f32 = 5.0;
/// Vertical band kept clear of pegs at the top of the board.
const PEG_TOP_MARGIN: f32 = 100.0;
/// Left offset nudging the peg grid off the wall.
const PEG_GRID_OFFSET: f32 = 12.0;

/// A static deflection pin.
#[derive(Debug, Clone, Copy)]
pub struct Peg {
    pub pos: Vec2,
    pub radius: f32,
}

/// A static rectangular wall (canvas boundary or zone divider).
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub center: Vec2,
    pub size: Vec2,
}

/// All static collision geometry: peg grid, canvas boundaries, and zone
/// divider walls. Built once at simulation construction and never touched by
/// division resets.
pub struct Board {
    pub pegs: Vec<Peg>,
    pub walls: Vec<Wall>,
}

impl Board {
    pub fn build(world: &mut PhysicsWorld, config: &SimConfig) -> Self {
        let mut board = Board {
            pegs: Vec::new(),
            walls: Vec::new(),
        };
        board.populate_pegs(world, config);
        board.populate_canvas_boundaries(world, config);
        board.populate_zone_walls(world, config);
        log::debug!(
            "board built: {} pegs, {} walls",
            board.pegs.len(),
            board.walls.len()
        );
        board
    }

    /// Staggered peg grid: odd rows shift half a spacing, and rows falling
    /// into the top margin or the zone-wall band are skipped.
    fn populate_pegs(&mut self, world: &mut PhysicsWorld, config: &SimConfig) {
        let spacing = config.peg_spacing();
        let radius = config.peg_radius();
        for row in 0..config.peg_rows {
            let y = spacing + row as f32 * spacing;
            if y < PEG_TOP_MARGIN || y > config.world_height - ZONE_WALL_HEIGHT {
                continue;
            }
            for col in 0..config.peg_columns() {
                let mut x = col as f32 * spacing + PEG_GRID_OFFSET;
                if row % 2 == 1 {
                    x += spacing / 2.0;
                }
                self.spawn_peg(world, Vec2::new(x, y), radius);
            }
        }
    }

    /// Side walls flank the board and the bottom wall sits just below it,
    /// so particles can only leave past the horizontal off-screen margin.
    fn populate_canvas_boundaries(&mut self, world: &mut PhysicsWorld, config: &SimConfig) {
        let width = config.world_width;
        let height = config.world_height;

        // bottom
        self.spawn_wall(
            world,
            Vec2::new(width / 2.0, height + BOTTOM_WALL_HEIGHT / 2.0),
            Vec2::new(width, BOTTOM_WALL_HEIGHT),
        );
        // left
        self.spawn_wall(
            world,
            Vec2::new(-SIDE_WALL_WIDTH / 2.0, height / 2.0),
            Vec2::new(SIDE_WALL_WIDTH, height),
        );
        // right
        self.spawn_wall(
            world,
            Vec2::new(width + SIDE_WALL_WIDTH / 2.0, height / 2.0),
            Vec2::new(SIDE_WALL_WIDTH, height),
        );
    }

    /// One thin divider at the left edge of every zone.
    fn populate_zone_walls(&mut self, world: &mut PhysicsWorld, config: &SimConfig) {
        let zone_width = config.zone_width();
        for zone in 0..config.zone_count {
            self.spawn_wall(
                world,
                Vec2::new(
                    zone as f32 * zone_width - ZONE_WALL_WIDTH / 2.0,
                    config.world_height - ZONE_WALL_HEIGHT / 2.0,
                ),
                Vec2::new(ZONE_WALL_WIDTH, ZONE_WALL_HEIGHT),
            );
        }
    }

    fn spawn_peg(&mut self, world: &mut PhysicsWorld, pos: Vec2, radius: f32) {
        world.create_body(
            &BodyDesc::fixed(ColliderDesc::Ball { radius }).with_position(pos),
            ColliderMaterial::default(),
        );
        self.pegs.push(Peg { pos, radius });
    }

    fn spawn_wall(&mut self, world: &mut PhysicsWorld, center: Vec2, size: Vec2) {
        world.create_body(
            &BodyDesc::fixed(ColliderDesc::Cuboid {
                half_width: size.x / 2.0,
                half_height: size.y / 2.0,
            })
            .with_position(center),
            ColliderMaterial::default(),
        );
        self.walls.push(Wall { center, size });
    }
}
