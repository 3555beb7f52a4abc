mod axle;
mod collaborators;
mod config;
pub mod consts;
mod controls;
mod feedback;
mod kinematic;
mod motion;
mod motor_state;
mod physics;
mod vehicle;

pub use axle::*;
pub use collaborators::*;
pub use config::*;
pub use controls::*;
pub use feedback::*;
pub use kinematic::*;
pub use motion::*;
pub use motor_state::*;
pub use physics::*;
pub use vehicle::*;
