use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ControlMap, RigidBody2D, DEFAULT_GRAVITY};

/// Initial state of the simulated body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub mass: f32,
    pub moment_of_inertia: f32,
    pub position: cgmath::Vector2<f32>,
    pub orientation: f32,
}

impl BodyConfig {
    pub fn build(&self) -> Result<RigidBody2D, ConfigError> {
        Ok(RigidBody2D::new(
            self.mass,
            self.moment_of_inertia,
            self.position,
            self.orientation,
        )?)
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            moment_of_inertia: 1.0,
            position: cgmath::vec2(0.0, 0.0),
            orientation: 0.0,
        }
    }
}

/// Axis-aligned box the displayed position is kept inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: cgmath::Vector2<f32>,
    pub max: cgmath::Vector2<f32>,
}

impl Bounds {
    /// Pulls `point` inside the box. Never panics; with inverted bounds the
    /// `max` side wins.
    pub fn clamp(&self, point: cgmath::Vector2<f32>) -> cgmath::Vector2<f32> {
        cgmath::vec2(
            point.x.max(self.min.x).min(self.max.x),
            point.y.max(self.min.y).min(self.max.y),
        )
    }

    pub fn contains(&self, point: cgmath::Vector2<f32>) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let finite = [self.min.x, self.min.y, self.max.x, self.max.y]
            .iter()
            .all(|v| v.is_finite());
        if finite && self.min.x <= self.max.x && self.min.y <= self.max.y {
            Ok(())
        } else {
            Err(ConfigError::InvalidBounds {
                min_x: self.min.x,
                min_y: self.min.y,
                max_x: self.max.x,
                max_y: self.max.y,
            })
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: cgmath::vec2(-0.9, -0.9),
            max: cgmath::vec2(0.9, 0.9),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub gravity: f32,
    pub body: BodyConfig,
    pub controls: ControlMap,
    /// `None` lets the body leave the view.
    pub clamp: Option<Bounds>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            body: BodyConfig::default(),
            controls: ControlMap::default(),
            clamp: Some(Bounds::default()),
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        self.body.build()?;
        if let Some(bounds) = &self.clamp {
            bounds.validate()?;
        }
        Ok(())
    }
}
