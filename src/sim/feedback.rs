use crate::math;
use crate::sim::{CameraRig, FeedbackConfig, MotorState, RearLight, ShakeResponse};

/// Maps a motion model's outputs onto the rear light and camera rig.
pub struct FeedbackMapper {
    config: FeedbackConfig,
}

impl FeedbackMapper {
    #[must_use]
    pub const fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Light the rear light while braking or reversing, each with its own
    /// color; off in every other state.
    pub fn update_rear_light(&self, motor_state: MotorState, light: &mut dyn RearLight) {
        match motor_state {
            MotorState::Reversing => {
                light.set_active(true);
                light.set_emission(self.config.reverse_light_color * self.config.light_intensity);
            }
            MotorState::Braking => {
                light.set_active(true);
                light.set_emission(self.config.brake_light_color * self.config.light_intensity);
            }
            _ => light.set_active(false),
        }
    }

    /// Camera shake amplitude for a speed ratio.
    #[must_use]
    pub fn shake(&self, speed_ratio: f32) -> f32 {
        match self.config.shake {
            ShakeResponse::Linear => speed_ratio.abs(),
            ShakeResponse::Quadratic => speed_ratio * speed_ratio * self.config.noise_factor,
        }
    }

    /// Field of view for a speed ratio; exact at both endpoints of [0, 1].
    #[must_use]
    pub fn fov(&self, speed_ratio: f32) -> f32 {
        math::remap(
            speed_ratio,
            0.0,
            1.0,
            self.config.initial_fov,
            self.config.max_speed_fov,
        )
    }

    /// Push shake amplitude and field of view for the current speed ratio.
    pub fn update_camera(&self, speed_ratio: f32, camera: &mut dyn CameraRig) {
        camera.set_amplitude_gain(self.shake(speed_ratio));
        camera.set_fov(self.fov(speed_ratio));
    }
}
