use log::{debug, warn};

use crate::math::{self, SmoothDamp};
use crate::sim::{
    DriveConfig, DriveControls, MotionModel, MotorState, SpatialActuator, SteerTarget,
    consts::{KPH_TO_MPS, drive},
};

/// Integrator memory of the kinematic model, owned by the vehicle instance
/// and mutated every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KinematicState {
    /// Signed forward speed in m/s; negative while reversing
    pub current_speed: f32,
    /// Derivative memory of the speed integrator
    pub smoothing: SmoothDamp,
}

/// Smoothed-kinematic drive model.
///
/// Damps a scalar speed toward a per-state target and advances position and
/// heading through the spatial actuator. Runs on the variable-rate tick.
pub struct KinematicDrive {
    config: DriveConfig,
    spatial: Box<dyn SpatialActuator>,
    steered_visuals: Vec<Box<dyn SteerTarget>>,
    state: KinematicState,
    motor_state: MotorState,
    last_controls: DriveControls,
}

impl KinematicDrive {
    #[must_use]
    pub fn new(config: DriveConfig, spatial: Box<dyn SpatialActuator>) -> Self {
        if config.acceleration_time <= 0.0
            || config.deceleration_time <= 0.0
            || config.brake_time <= 0.0
        {
            warn!("non-positive reference time in drive config, smoothing clamps to its minimum window");
        }

        Self {
            config,
            spatial,
            steered_visuals: Vec::new(),
            state: KinematicState::default(),
            motor_state: MotorState::Idle,
            last_controls: DriveControls::DEFAULT,
        }
    }

    /// Register a steered visual wheel; it receives the raw steering angle
    /// every tick.
    pub fn add_steered_visual(&mut self, wheel: Box<dyn SteerTarget>) {
        self.steered_visuals.push(wheel);
    }

    #[must_use]
    pub const fn config(&self) -> &DriveConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &KinematicState {
        &self.state
    }

    pub const fn set_state(&mut self, state: KinematicState) {
        self.state = state;
    }

    /// Signed forward speed in m/s
    #[must_use]
    pub const fn current_speed(&self) -> f32 {
        self.state.current_speed
    }

    /// Advance one tick: classify, damp the speed toward its per-state
    /// target, then translate and steer through the spatial actuator.
    pub fn advance(&mut self, controls: DriveControls, dt: f32) {
        let mut controls = controls;
        controls.clamp_fix();

        let motor_state =
            MotorState::from_scalar_speed(controls.throttle, self.state.current_speed);
        if motor_state != self.motor_state {
            debug!("motor state {:?} -> {:?}", self.motor_state, motor_state);
        }
        self.motor_state = motor_state;
        self.last_controls = controls;

        let (target_speed, reference_time) = match self.motor_state {
            MotorState::Accelerating => (
                self.config.max_speed * KPH_TO_MPS * controls.throttle,
                self.config.acceleration_time,
            ),
            MotorState::Braking => (0.0, self.config.brake_time),
            MotorState::Reversing => (
                self.config.max_reverse_speed * KPH_TO_MPS * controls.throttle,
                self.config.acceleration_time,
            ),
            MotorState::Idle => (0.0, self.config.deceleration_time),
        };

        // The smoothing window shrinks as the gap closes, so the approach
        // slows its own rate of change near the target.
        let smooth_time = (target_speed - self.state.current_speed).abs() * reference_time
            / drive::REFERENCE_SPEED_BAND;
        self.state.current_speed =
            self.state
                .smoothing
                .advance(self.state.current_speed, target_speed, smooth_time, dt);

        self.spatial.translate_forward(self.state.current_speed * dt);

        let steering_angle = self.config.max_steering_angle * controls.steer;
        let speed_factor = if math::approx_zero(self.state.current_speed) {
            0.0
        } else {
            self.state.current_speed.signum()
        };
        self.spatial.rotate_heading(steering_angle * speed_factor * dt);

        // visual wheels hold the full lock regardless of speed
        for wheel in &mut self.steered_visuals {
            wheel.set_steer_angle(steering_angle);
        }
    }
}

impl MotionModel for KinematicDrive {
    fn step(&mut self, controls: DriveControls, dt: f32) {
        self.advance(controls, dt);
    }

    fn motor_state(&self) -> MotorState {
        self.motor_state
    }

    fn speed(&self) -> f32 {
        self.state.current_speed
    }

    fn speed_ratio(&self) -> f32 {
        let top_speed = self.config.max_speed * KPH_TO_MPS;
        if top_speed <= 0.0 {
            0.0
        } else {
            self.state.current_speed / top_speed
        }
    }

    fn controls(&self) -> DriveControls {
        self.last_controls
    }
}
