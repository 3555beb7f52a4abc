use super::{PoseTarget, WheelActuator};

/// Most axles a single vehicle will carry.
pub const MAX_AXLES: usize = 4;

/// A wheel actuator plus its optional visual twin.
pub struct WheelMount {
    pub actuator: Box<dyn WheelActuator>,
    pub visual: Option<Box<dyn PoseTarget>>,
}

impl WheelMount {
    #[must_use]
    pub fn new(actuator: Box<dyn WheelActuator>) -> Self {
        Self {
            actuator,
            visual: None,
        }
    }

    #[must_use]
    pub fn with_visual(actuator: Box<dyn WheelActuator>, visual: Box<dyn PoseTarget>) -> Self {
        Self {
            actuator,
            visual: Some(visual),
        }
    }

    /// Mirror the actuator's world pose onto the visual twin, if any.
    pub(crate) fn sync_visual(&mut self) {
        if let Some(visual) = &mut self.visual {
            visual.set_pose(self.actuator.world_pose());
        }
    }
}

/// A left/right pair of wheel actuators, optionally driven and/or steered.
///
/// A vehicle holds an ordered sequence of these; the order only matters for
/// iteration.
pub struct Axle {
    pub has_motor: bool,
    pub has_steering: bool,
    pub left: WheelMount,
    pub right: WheelMount,
}
