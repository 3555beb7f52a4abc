/// Driver input for one tick. Supplied fresh every tick, never retained
/// across frames by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriveControls {
    /// Throttle/brake axis; forward is positive
    pub throttle: f32,
    /// Steering axis; right is positive
    pub steer: f32,
    pub handbrake: bool,
}

impl Default for DriveControls {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl DriveControls {
    pub const DEFAULT: Self = Self {
        throttle: 0.0,
        steer: 0.0,
        handbrake: false,
    };

    pub(crate) fn clamp_fix(&mut self) {
        self.throttle = self.throttle.clamp(-1.0, 1.0);
        self.steer = self.steer.clamp(-1.0, 1.0);
    }
}
