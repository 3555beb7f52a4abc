use crate::sim::{CameraRig, DriveControls, FeedbackMapper, MotionModel, MotorState, RearLight};

/// A vehicle: one motion model wired to its cosmetic collaborators.
///
/// [`Self::fixed_step`] advances the motion model; call it on the fixed
/// physics tick when driving a [`crate::sim::PhysicsDrive`].
/// [`Self::render_step`] refreshes the light and camera from the last motion
/// step on the variable-rate tick. The kinematic model runs single-rate:
/// just call [`Self::step`].
pub struct Vehicle {
    model: Box<dyn MotionModel>,
    feedback: FeedbackMapper,
    rear_light: Box<dyn RearLight>,
    camera: Box<dyn CameraRig>,
}

impl Vehicle {
    #[must_use]
    pub fn new(
        model: Box<dyn MotionModel>,
        feedback: FeedbackMapper,
        rear_light: Box<dyn RearLight>,
        camera: Box<dyn CameraRig>,
    ) -> Self {
        Self {
            model,
            feedback,
            rear_light,
            camera,
        }
    }

    #[must_use]
    pub fn motor_state(&self) -> MotorState {
        self.model.motor_state()
    }

    /// Speed in m/s; signed for the kinematic model
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.model.speed()
    }

    /// The last clamped input the model was stepped with
    #[must_use]
    pub fn controls(&self) -> DriveControls {
        self.model.controls()
    }

    /// Advance the motion model one tick.
    pub fn fixed_step(&mut self, controls: DriveControls, dt: f32) {
        self.model.step(controls, dt);
    }

    /// Refresh the rear light and camera from the last motion step.
    pub fn render_step(&mut self) {
        self.feedback
            .update_rear_light(self.model.motor_state(), self.rear_light.as_mut());
        self.feedback
            .update_camera(self.model.speed_ratio(), self.camera.as_mut());
    }

    /// Single-rate tick: motion, then feedback.
    pub fn step(&mut self, controls: DriveControls, dt: f32) {
        self.fixed_step(controls, dt);
        self.render_step();
    }
}
