use arrayvec::ArrayVec;
use log::debug;

use crate::sim::{
    Axle, ChassisProbe, DriveControls, MAX_AXLES, MotionModel, MotorState, PowertrainConfig,
    consts::{MPS_TO_KPH, wheel},
};

/// Torque-based drive model distributing motor, brake and steer commands
/// across the wheel actuators of an externally simulated vehicle.
///
/// Stateless across ticks apart from the externally-owned rigid body; must
/// run on the fixed physics tick to stay consistent with the external
/// integrator.
pub struct PhysicsDrive {
    config: PowertrainConfig,
    chassis: Box<dyn ChassisProbe>,
    axles: ArrayVec<Axle, MAX_AXLES>,
    motor_state: MotorState,
    last_controls: DriveControls,
}

impl PhysicsDrive {
    #[must_use]
    pub fn new(config: PowertrainConfig, chassis: Box<dyn ChassisProbe>) -> Self {
        Self {
            config,
            chassis,
            axles: ArrayVec::new(),
            motor_state: MotorState::Idle,
            last_controls: DriveControls::DEFAULT,
        }
    }

    /// Register an axle.
    ///
    /// The first wheel registered gets the solver substep hint; the solver
    /// applies it vehicle-wide, so one wheel is enough. Avoids low-speed
    /// jitter.
    ///
    /// # Panics
    ///
    /// Panics when more than [`MAX_AXLES`] axles are registered.
    pub fn add_axle(&mut self, mut axle: Axle) {
        if self.axles.is_empty() {
            axle.left.actuator.configure_substeps(
                wheel::SUBSTEP_SPEED_THRESHOLD,
                wheel::SUBSTEPS_LOW_SPEED,
                wheel::SUBSTEPS_HIGH_SPEED,
            );
        }
        self.axles.push(axle);
    }

    #[must_use]
    pub const fn config(&self) -> &PowertrainConfig {
        &self.config
    }

    #[must_use]
    pub fn axles(&self) -> &[Axle] {
        &self.axles
    }

    /// Speed over ground in km/h, read from the chassis
    #[must_use]
    pub fn speed_kph(&self) -> f32 {
        self.chassis.velocity().length() * MPS_TO_KPH
    }

    /// Run one fixed tick: classify from the chassis velocity, then command
    /// every axle independently.
    pub fn advance(&mut self, controls: DriveControls) {
        let mut controls = controls;
        controls.clamp_fix();

        let velocity = self.chassis.velocity();
        let forward = self.chassis.forward();

        let motor_state = MotorState::from_velocity(controls.throttle, velocity, forward);
        if motor_state != self.motor_state {
            debug!("motor state {:?} -> {:?}", self.motor_state, motor_state);
        }
        self.motor_state = motor_state;
        self.last_controls = controls;

        // one velocity read per tick, shared by every axle's cap check
        let speed_kph = velocity.length() * MPS_TO_KPH;
        let motor_torque = self.config.full_motor_torque * controls.throttle;
        let steering_angle = self.config.full_steering_angle * controls.steer;

        for axle in &mut self.axles {
            let mut torque = 0.0;
            let mut brake = 0.0;

            match self.motor_state {
                // throttle is negative here, so the brake torque comes out positive
                MotorState::Braking => brake = -motor_torque * self.config.brakes_factor,
                MotorState::Accelerating => {
                    // hard cap: no torque at all past the top speed
                    if axle.has_motor && speed_kph < self.config.max_speed {
                        torque = motor_torque;
                    }
                }
                MotorState::Reversing => {
                    if axle.has_motor && speed_kph < self.config.max_reverse_speed {
                        torque = motor_torque;
                    }
                }
                MotorState::Idle => {
                    brake = self.config.full_motor_torque * self.config.engine_brake_factor;
                }
            }

            // The handbrake locks the non-driven axles no matter the motor
            // state; driven axles ignore it.
            if controls.handbrake && !axle.has_motor {
                brake = self.config.full_motor_torque * self.config.handbrake_factor;
            }

            let steered = axle.has_steering;
            for mount in [&mut axle.left, &mut axle.right] {
                if steered {
                    mount.actuator.set_steer_angle(steering_angle);
                }
                mount.actuator.set_motor_torque(torque);
                mount.actuator.set_brake_torque(brake);
                mount.sync_visual();
            }
        }
    }
}

impl MotionModel for PhysicsDrive {
    fn step(&mut self, controls: DriveControls, _dt: f32) {
        self.advance(controls);
    }

    fn motor_state(&self) -> MotorState {
        self.motor_state
    }

    fn speed(&self) -> f32 {
        self.chassis.velocity().length()
    }

    fn speed_ratio(&self) -> f32 {
        if self.config.max_speed <= 0.0 {
            0.0
        } else {
            self.speed_kph() / self.config.max_speed
        }
    }

    fn controls(&self) -> DriveControls {
        self.last_controls
    }
}
