//! Unit scales and fixed tuning values for the drive models.

/// Kilometers-per-hour (config units) to meters-per-second (world units)
/// conversion scale
pub const KPH_TO_MPS: f32 = 1.0 / 3.6;

/// Meters-per-second (world units) to kilometers-per-hour (config units)
/// conversion scale
pub const MPS_TO_KPH: f32 = 3.6;

pub mod drive {
    /// Velocity magnitudes (m/s) below this count as stationary
    pub const STATIONARY_SPEED_EPSILON: f32 = 0.01;

    /// Reference band (km/h) the acceleration/deceleration/brake times are
    /// quoted over
    pub const REFERENCE_SPEED_BAND: f32 = 100.0;
}

pub mod wheel {
    /// Speed threshold (m/s) between the two wheel-solver substep counts
    pub const SUBSTEP_SPEED_THRESHOLD: f32 = 5.0;

    /// Solver substeps below the threshold
    pub const SUBSTEPS_LOW_SPEED: u8 = 12;

    /// Solver substeps above the threshold
    pub const SUBSTEPS_HIGH_SPEED: u8 = 15;
}
