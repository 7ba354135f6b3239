use crate::{rotate, ConfigError, Control, RigidBody2D, SimConfig};

/// What the presentation layer needs to draw the body for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: cgmath::Vector2<f32>,
    pub orientation: f32,
}

impl Pose {
    /// Maps a point from the body's frame into the world, rotating with the
    /// same convention used for forces.
    pub fn transform_point(&self, local: cgmath::Vector2<f32>) -> cgmath::Vector2<f32> {
        rotate(local, self.orientation) + self.position
    }

    pub fn is_finite(&self) -> bool {
        self.position.x.is_finite() && self.position.y.is_finite() && self.orientation.is_finite()
    }
}

impl From<&RigidBody2D> for Pose {
    fn from(body: &RigidBody2D) -> Self {
        Self {
            position: body.position(),
            orientation: body.orientation(),
        }
    }
}

/// Owns the body and runs exactly one integration step per rendered frame.
pub struct FrameDriver {
    config: SimConfig,
    body: RigidBody2D,
    frame_count: u64,
    reported_non_finite: bool,
}

impl FrameDriver {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let body = config.body.build()?;
        tracing::info!(
            mass = body.mass(),
            moment_of_inertia = body.moment_of_inertia(),
            gravity = config.gravity,
            "created frame driver"
        );
        Ok(Self {
            config,
            body,
            frame_count: 0,
            reported_non_finite: false,
        })
    }

    /// Runs one frame: clamp the displayed position, fire the active
    /// controls, then integrate over `dt`.
    ///
    /// The clamp only moves the body, its velocity is kept, so a body held
    /// against a bound keeps pressing into it.
    pub fn step(&mut self, dt: f32, active: &[Control]) -> Pose {
        if let Some(bounds) = &self.config.clamp {
            let position = self.body.position();
            if !bounds.contains(position) {
                self.body.set_position(bounds.clamp(position));
            }
        }

        if !active.is_empty() {
            tracing::debug!(frame = self.frame_count + 1, ?active, "firing controls");
        }
        self.config.controls.apply(&mut self.body, active);
        self.body.update(dt, self.config.gravity);
        self.frame_count += 1;

        let pose = self.pose();
        tracing::trace!(
            frame = self.frame_count,
            dt,
            x = pose.position.x,
            y = pose.position.y,
            orientation = pose.orientation,
            "stepped"
        );
        if !pose.is_finite() && !self.reported_non_finite {
            self.reported_non_finite = true;
            tracing::warn!(frame = self.frame_count, ?pose, "body pose is no longer finite");
        }
        pose
    }

    /// Puts the body back to its configured initial state.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.body = self.config.body.build()?;
        self.frame_count = 0;
        self.reported_non_finite = false;
        tracing::info!("reset body");
        Ok(())
    }

    /// Replaces the configuration and rebuilds the body from it.
    pub fn set_config(&mut self, config: SimConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.reset()
    }

    pub fn pose(&self) -> Pose {
        Pose::from(&self.body)
    }

    pub fn body(&self) -> &RigidBody2D {
        &self.body
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[cfg(test)]
    fn reported_non_finite(&self) -> bool {
        self.reported_non_finite
    }
}
