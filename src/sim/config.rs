use glam::Vec3A;

/// Timing and limits of the smoothed-kinematic model.
///
/// Speeds are km/h; the timing fields are seconds to traverse the
/// 0-100 km/h reference band.
#[derive(Clone, Copy, Debug)]
pub struct DriveConfig {
    /// Top forward speed in km/h
    pub max_speed: f32,
    /// Top reverse speed in km/h
    pub max_reverse_speed: f32,
    /// Seconds to accelerate from 0 to 100 km/h
    pub acceleration_time: f32,
    /// Seconds to coast from 100 to 0 km/h with the throttle released
    pub deceleration_time: f32,
    /// Seconds to brake from 100 to 0 km/h
    pub brake_time: f32,
    /// Full steering lock in degrees
    pub max_steering_angle: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self::COMPACT
    }
}

impl DriveConfig {
    pub const COMPACT: Self = Self {
        max_speed: 160.0,
        max_reverse_speed: 30.0,
        acceleration_time: 8.0,
        deceleration_time: 5.0,
        brake_time: 3.0,
        max_steering_angle: 35.0,
    };

    pub const SPORTS: Self = Self {
        max_speed: 240.0,
        max_reverse_speed: 40.0,
        acceleration_time: 4.5,
        deceleration_time: 6.0,
        brake_time: 2.5,
        max_steering_angle: 30.0,
    };

    pub const TRUCK: Self = Self {
        max_speed: 110.0,
        max_reverse_speed: 20.0,
        acceleration_time: 14.0,
        deceleration_time: 7.0,
        brake_time: 4.5,
        max_steering_angle: 40.0,
    };
}

/// Torque distribution tuning of the per-axle model.
///
/// The factor fields are relative to `full_motor_torque`.
#[derive(Clone, Copy, Debug)]
pub struct PowertrainConfig {
    pub full_motor_torque: f32,
    /// Full steering lock in degrees
    pub full_steering_angle: f32,
    /// Top forward speed in km/h; the motor cuts out entirely above it
    pub max_speed: f32,
    /// Top reverse speed in km/h
    pub max_reverse_speed: f32,
    /// Brake intensity relative to the full motor torque
    pub brakes_factor: f32,
    /// Handbrake intensity relative to the full motor torque
    pub handbrake_factor: f32,
    /// Engine-brake intensity relative to the full motor torque
    pub engine_brake_factor: f32,
}

impl Default for PowertrainConfig {
    fn default() -> Self {
        Self::SEDAN
    }
}

impl PowertrainConfig {
    pub const SEDAN: Self = Self {
        full_motor_torque: 1200.0,
        full_steering_angle: 30.0,
        max_speed: 180.0,
        max_reverse_speed: 30.0,
        brakes_factor: 2.0,
        handbrake_factor: 3.0,
        engine_brake_factor: 0.15,
    };

    pub const SPORTS: Self = Self {
        full_motor_torque: 2500.0,
        full_steering_angle: 25.0,
        max_speed: 250.0,
        max_reverse_speed: 40.0,
        brakes_factor: 1.5,
        handbrake_factor: 2.5,
        engine_brake_factor: 0.1,
    };
}

/// How camera shake grows with the speed ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShakeResponse {
    /// Amplitude rises linearly with |speed ratio|
    #[default]
    Linear,
    /// Amplitude rises with the square of the speed ratio, scaled by the
    /// noise factor; negligible at low speed, pronounced near the top
    Quadratic,
}

/// Rear light colors and camera response.
#[derive(Clone, Copy, Debug)]
pub struct FeedbackConfig {
    /// Emissive color while braking, linear RGB
    pub brake_light_color: Vec3A,
    /// Emissive color while reversing, linear RGB
    pub reverse_light_color: Vec3A,
    /// Scale applied to both light colors before emission
    pub light_intensity: f32,
    pub shake: ShakeResponse,
    /// Shake gain at top speed for the quadratic response
    pub noise_factor: f32,
    /// Field of view at standstill, degrees
    pub initial_fov: f32,
    /// Field of view at top speed, degrees
    pub max_speed_fov: f32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self::SUBTLE
    }
}

impl FeedbackConfig {
    /// Plain emission and linear shake, a fit for the kinematic model.
    pub const SUBTLE: Self = Self {
        brake_light_color: Vec3A::new(1.0, 0.08, 0.04),
        reverse_light_color: Vec3A::new(0.9, 0.9, 0.85),
        light_intensity: 1.0,
        shake: ShakeResponse::Linear,
        noise_factor: 1.0,
        initial_fov: 60.0,
        max_speed_fov: 72.0,
    };

    /// Boosted emission and quadratic shake, a fit for the torque model.
    pub const INTENSE: Self = Self {
        brake_light_color: Vec3A::new(1.0, 0.08, 0.04),
        reverse_light_color: Vec3A::new(0.9, 0.9, 0.85),
        light_intensity: 4.0,
        shake: ShakeResponse::Quadratic,
        noise_factor: 2.0,
        initial_fov: 60.0,
        max_speed_fov: 78.0,
    };
}
