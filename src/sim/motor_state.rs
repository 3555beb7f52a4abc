use glam::Vec3A;

use crate::sim::consts::drive::STATIONARY_SPEED_EPSILON;

/// Classification of the driver's throttle/brake intent for one tick.
///
/// Exactly one state holds at a time; it is recomputed every tick from the
/// acceleration input and a speed signal carried over from the previous tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotorState {
    Accelerating,
    Braking,
    Reversing,
    #[default]
    Idle,
}

impl MotorState {
    /// Classify from the signed scalar speed of the kinematic model.
    ///
    /// The kinematic model never lets speed and heading diverge, so a sign
    /// test on the previous tick's speed is enough to tell braking from
    /// reversing.
    #[must_use]
    pub fn from_scalar_speed(acceleration_input: f32, current_speed: f32) -> Self {
        if acceleration_input > 0.0 {
            Self::Accelerating
        } else if acceleration_input < 0.0 {
            if current_speed <= 0.0 {
                Self::Reversing
            } else {
                Self::Braking
            }
        } else {
            Self::Idle
        }
    }

    /// Classify from a rigid body's velocity vector.
    ///
    /// The body's velocity can point anywhere regardless of heading, so the
    /// braking/reversing split checks the component of velocity against the
    /// forward axis: near-stationary, or already moving backward relative to
    /// the heading, means the driver wants reverse.
    #[must_use]
    pub fn from_velocity(acceleration_input: f32, velocity: Vec3A, forward: Vec3A) -> Self {
        if acceleration_input > 0.0 {
            Self::Accelerating
        } else if acceleration_input < 0.0 {
            if velocity.length() < STATIONARY_SPEED_EPSILON || velocity.dot(-forward) > 0.0 {
                Self::Reversing
            } else {
                Self::Braking
            }
        } else {
            Self::Idle
        }
    }
}
