use crate::{cross2, rotate, BodyError};

/// Gravity used when nothing else is configured, in units consistent with the
/// body's mass and the applied forces.
pub const DEFAULT_GRAVITY: f32 = 9.8;

/// A single free-floating planar body.
///
/// Forces applied during a frame are accumulated and consumed by the next
/// [`RigidBody2D::update`], which integrates with semi-implicit Euler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody2D {
    mass: f32,
    moment_of_inertia: f32,
    position: cgmath::Vector2<f32>,
    orientation: f32,
    linear_velocity: cgmath::Vector2<f32>,
    angular_velocity: f32,
    force: cgmath::Vector2<f32>,
    torque: f32,
}

impl RigidBody2D {
    /// Creates a body at rest. Fails if `mass` or `moment_of_inertia` is not
    /// strictly positive (NaN included).
    pub fn new(
        mass: f32,
        moment_of_inertia: f32,
        position: cgmath::Vector2<f32>,
        orientation: f32,
    ) -> Result<Self, BodyError> {
        if !(mass > 0.0) {
            return Err(BodyError::NonPositiveMass(mass));
        }
        if !(moment_of_inertia > 0.0) {
            return Err(BodyError::NonPositiveMomentOfInertia(moment_of_inertia));
        }
        Ok(Self {
            mass,
            moment_of_inertia,
            position,
            orientation,
            linear_velocity: cgmath::vec2(0.0, 0.0),
            angular_velocity: 0.0,
            force: cgmath::vec2(0.0, 0.0),
            torque: 0.0,
        })
    }

    /// Accumulates a force given in the body's local frame, applied at
    /// `offset` from the center of mass (also local).
    ///
    /// Both are rotated by the orientation at call time, so every call made
    /// before the next `update` uses the same frame.
    pub fn apply_force(&mut self, force: cgmath::Vector2<f32>, offset: cgmath::Vector2<f32>) {
        let world_force = rotate(force, self.orientation);
        let world_offset = rotate(offset, self.orientation);

        self.force += world_force;
        self.torque += cross2(world_offset, world_force);
    }

    /// Advances the body by `dt` under `gravity` (pointing down the y axis)
    /// and clears the accumulators.
    ///
    /// Velocities are updated first and the new velocities move the pose.
    pub fn update(&mut self, dt: f32, gravity: f32) {
        let linear_acceleration = self.force / self.mass + cgmath::vec2(0.0, -gravity);
        self.linear_velocity += linear_acceleration * dt;
        self.position += self.linear_velocity * dt;

        let angular_acceleration = self.torque / self.moment_of_inertia;
        self.angular_velocity += angular_acceleration * dt;
        self.orientation += self.angular_velocity * dt;

        self.force = cgmath::vec2(0.0, 0.0);
        self.torque = 0.0;
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn moment_of_inertia(&self) -> f32 {
        self.moment_of_inertia
    }

    pub fn position(&self) -> cgmath::Vector2<f32> {
        self.position
    }

    /// Moves the body without touching its velocity.
    pub fn set_position(&mut self, position: cgmath::Vector2<f32>) {
        self.position = position;
    }

    /// Radians, never wrapped.
    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    pub fn linear_velocity(&self) -> cgmath::Vector2<f32> {
        self.linear_velocity
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// World-frame force accumulated since the last update.
    pub fn force(&self) -> cgmath::Vector2<f32> {
        self.force
    }

    /// Torque accumulated since the last update.
    pub fn torque(&self) -> f32 {
        self.torque
    }
}
