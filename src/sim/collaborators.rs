//! Boundary traits for the engine-owned objects the controller drives.
//!
//! The core computes values and issues commands through these traits; it
//! never reaches into a scene graph or physics world directly.

use glam::{Quat, Vec3A};

/// World-space pose reported by a wheel actuator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelPose {
    pub pos: Vec3A,
    pub rot: Quat,
}

/// One simulated wheel, owned by the external physics engine.
///
/// Torque, brake and steer commands are written every fixed tick; the
/// actuator reports its world pose back for visual sync.
pub trait WheelActuator {
    fn set_motor_torque(&mut self, torque: f32);
    fn set_brake_torque(&mut self, torque: f32);
    /// Steer angle in degrees
    fn set_steer_angle(&mut self, angle: f32);
    fn world_pose(&self) -> WheelPose;

    /// Hint for the wheel solver's substep counts around a speed threshold.
    /// Collaborators without a substepping solver can ignore it.
    fn configure_substeps(&mut self, _speed_threshold: f32, _below: u8, _above: u8) {}
}

/// Visual object mirroring a wheel actuator's pose. Optional per wheel.
pub trait PoseTarget {
    fn set_pose(&mut self, pose: WheelPose);
}

/// Read-only view of the chassis rigid body owned by the physics engine.
/// It is the source of truth for the vehicle's velocity.
pub trait ChassisProbe {
    /// Linear velocity in m/s
    fn velocity(&self) -> Vec3A;
    /// Forward axis as a unit vector
    fn forward(&self) -> Vec3A;
}

/// Spatial transform of the kinematic vehicle.
pub trait SpatialActuator {
    /// Translate along the vehicle's own forward axis, in meters
    fn translate_forward(&mut self, distance: f32);
    /// Rotate the heading around the up axis, in degrees
    fn rotate_heading(&mut self, angle: f32);
}

/// Steered visual wheel of the kinematic vehicle; holds the raw steering
/// angle independent of actual turning.
pub trait SteerTarget {
    /// Steer angle in degrees
    fn set_steer_angle(&mut self, angle: f32);
}

/// Rear light collaborator.
pub trait RearLight {
    fn set_active(&mut self, active: bool);
    /// Emissive color, linear RGB
    fn set_emission(&mut self, color: Vec3A);
}

/// Camera rig collaborator.
pub trait CameraRig {
    /// Shake amplitude gain
    fn set_amplitude_gain(&mut self, gain: f32);
    /// Field of view in degrees
    fn set_fov(&mut self, fov: f32);
}
