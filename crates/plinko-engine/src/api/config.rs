use std::fmt;

/// Thickness of the bottom wall. The scoring threshold sits half of this
/// above the canvas floor, so a particle counts as landed once it rests on
/// the wall.
pub const BOTTOM_WALL_HEIGHT: f32 = 100.0;

/// Height of the divider walls separating the bottom zones.
pub const ZONE_WALL_HEIGHT: f32 = 150.0;

/// Default zone count used when no override is configured.
pub const DEFAULT_ZONE_COUNT: usize = 9;

/// Configuration for one simulation, provided by the bridge at startup.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Canvas width in pixels (world units).
    pub world_width: f32,
    /// Canvas height in pixels (world units).
    pub world_height: f32,
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Downward gravity in world units per second squared.
    pub gravity_y: f32,
    /// Number of bottom collection zones (groups).
    pub zone_count: usize,
    /// Number of peg rows laid out across the board.
    pub peg_rows: usize,
    /// Seed for the deterministic rng (colors, jitter, ids).
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            fixed_dt: 1.0 / 60.0,
            gravity_y: 1800.0,
            zone_count: DEFAULT_ZONE_COUNT,
            peg_rows: 10,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Reject configurations the rest of the crate assumes away.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zone_count == 0 {
            return Err(ConfigError::ZeroZones);
        }
        if !(self.world_width > 0.0) || !(self.world_height > 0.0) {
            return Err(ConfigError::DegenerateWorld {
                width: self.world_width,
                height: self.world_height,
            });
        }
        Ok(())
    }

    /// Vertical position below which a particle is considered landed.
    pub fn scoring_threshold(&self) -> f32 {
        self.world_height - BOTTOM_WALL_HEIGHT / 2.0
    }

    /// Width of a single zone interval.
    pub fn zone_width(&self) -> f32 {
        self.world_width / self.zone_count as f32
    }

    /// Peg columns scale with the board width, one column per ~100 units.
    pub fn peg_columns(&self) -> usize {
        ((self.world_width / 100.0).round() as usize).max(1)
    }

    /// Horizontal and vertical spacing of the peg grid.
    pub fn peg_spacing(&self) -> f32 {
        self.world_width / self.peg_columns() as f32
    }

    /// Peg radius scales with the board width.
    pub fn peg_radius(&self) -> f32 {
        self.world_width / 200.0
    }
}

/// Configuration rejected before a division can start.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A zone count of zero would divide by zero everywhere downstream.
    ZeroZones,
    /// World dimensions must be strictly positive.
    DegenerateWorld { width: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroZones => write!(f, "zone count must be at least 1"),
            ConfigError::DegenerateWorld { width, height } => {
                write!(f, "world dimensions must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
