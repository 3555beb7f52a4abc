use super::{DriveControls, MotorState};

/// Shared surface of the two drive models.
///
/// One model is stepped per tick; its classification and speed then feed the
/// cosmetic feedback. Exactly one model runs per vehicle, never both.
pub trait MotionModel {
    /// Run one tick. The torque model runs on the fixed physics tick and
    /// ignores `dt`; the kinematic model integrates over it.
    fn step(&mut self, controls: DriveControls, dt: f32);

    /// Motor state classified during the last step
    fn motor_state(&self) -> MotorState;

    /// Speed in m/s; signed for the kinematic model, a magnitude otherwise
    fn speed(&self) -> f32;

    /// Speed relative to the configured top speed.
    ///
    /// Deliberately unclamped: a vehicle pushed past its cap reports a ratio
    /// above one.
    fn speed_ratio(&self) -> f32;

    /// The last clamped input the model was stepped with
    fn controls(&self) -> DriveControls;
}
