use std::{cell::RefCell, rc::Rc};

use drivesim::sim::{
    CameraRig, DriveConfig, DriveControls, FeedbackConfig, FeedbackMapper, KinematicDrive,
    RearLight, SpatialActuator, Vehicle,
};
use glam::{Vec2, Vec3A};

#[derive(Debug, Default)]
struct Chassis {
    pos: Vec2,
    // degrees, 0 points along +Y
    heading: f32,
}

#[derive(Clone, Default)]
struct ChassisHandle(Rc<RefCell<Chassis>>);

impl SpatialActuator for ChassisHandle {
    fn translate_forward(&mut self, distance: f32) {
        let mut chassis = self.0.borrow_mut();
        let heading = chassis.heading.to_radians();
        let forward = Vec2::new(heading.sin(), heading.cos());
        chassis.pos += forward * distance;
    }

    fn rotate_heading(&mut self, angle: f32) {
        self.0.borrow_mut().heading += angle;
    }
}

#[derive(Default)]
struct ConsoleLight {
    active: bool,
}

impl RearLight for ConsoleLight {
    fn set_active(&mut self, active: bool) {
        if active != self.active {
            println!("rear light {}", if active { "on" } else { "off" });
        }
        self.active = active;
    }

    fn set_emission(&mut self, _color: Vec3A) {}
}

#[derive(Default)]
struct SilentCamera;

impl CameraRig for SilentCamera {
    fn set_amplitude_gain(&mut self, _gain: f32) {}
    fn set_fov(&mut self, _fov: f32) {}
}

fn main() {
    drivesim::init_logging();

    let chassis = ChassisHandle::default();
    let drive = KinematicDrive::new(DriveConfig::SPORTS, Box::new(chassis.clone()));

    let mut vehicle = Vehicle::new(
        Box::new(drive),
        FeedbackMapper::new(FeedbackConfig::SUBTLE),
        Box::new(ConsoleLight::default()),
        Box::new(SilentCamera),
    );

    const DT: f32 = 1.0 / 60.0;

    // full throttle with a slight right turn, then coast, then brake
    let script = [
        (3.0, DriveControls { throttle: 1.0, steer: 0.2, handbrake: false }),
        (2.0, DriveControls::DEFAULT),
        (2.0, DriveControls { throttle: -1.0, steer: 0.0, handbrake: false }),
    ];

    let mut elapsed = 0.0;
    for (duration, controls) in script {
        let ticks = (duration / DT) as usize;
        for _ in 0..ticks {
            vehicle.step(controls, DT);
            elapsed += DT;
        }

        let chassis = chassis.0.borrow();
        println!(
            "t={elapsed:.1}s state={:?} speed={:.1} km/h pos=({:.1}, {:.1}) heading={:.0} deg",
            vehicle.motor_state(),
            vehicle.speed() * 3.6,
            chassis.pos.x,
            chassis.pos.y,
            chassis.heading,
        );
    }
}
