use serde::{Deserialize, Serialize};

use crate::RigidBody2D;

const SCALE: f32 = 0.5;
const THRUSTER_ARM: f32 = SCALE * 0.7 / 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeftThruster,
    RightThruster,
    MainThruster,
}

impl Control {
    pub const ALL: [Control; 3] = [
        Control::LeftThruster,
        Control::RightThruster,
        Control::MainThruster,
    ];
}

/// A fixed force and the point it is applied at, both in the body's frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thruster {
    pub force: cgmath::Vector2<f32>,
    pub offset: cgmath::Vector2<f32>,
}

impl Thruster {
    pub fn fire(&self, body: &mut RigidBody2D) {
        body.apply_force(self.force, self.offset);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlMap {
    pub left: Thruster,
    pub right: Thruster,
    pub main: Thruster,
}

impl ControlMap {
    pub fn thruster(&self, control: Control) -> &Thruster {
        match control {
            Control::LeftThruster => &self.left,
            Control::RightThruster => &self.right,
            Control::MainThruster => &self.main,
        }
    }

    /// Fires the thruster of every control in `active`, once per occurrence.
    pub fn apply(&self, body: &mut RigidBody2D, active: &[Control]) {
        for &control in active {
            self.thruster(control).fire(body);
        }
    }
}

impl Default for ControlMap {
    fn default() -> Self {
        Self {
            // Steering left pushes on the right of the center of mass.
            left: Thruster {
                force: cgmath::vec2(0.0, 10.0 * SCALE),
                offset: cgmath::vec2(THRUSTER_ARM, 0.0),
            },
            right: Thruster {
                force: cgmath::vec2(0.0, 10.0 * SCALE),
                offset: cgmath::vec2(-THRUSTER_ARM, 0.0),
            },
            main: Thruster {
                force: cgmath::vec2(0.0, 20.0 * SCALE),
                offset: cgmath::vec2(0.0, 0.0),
            },
        }
    }
}
