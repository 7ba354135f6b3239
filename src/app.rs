use cgmath::prelude::*;
use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::{Bounds, Control, FrameDriver, Pose, SimConfig};

const DRONE_HALF_SIZE: f32 = 0.125;
const FLAME_LENGTH: f32 = 0.08;

/// The parts of the app that survive a restart. Body state is never stored.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    info_window_open: bool,
    settings_window_open: bool,
    config: SimConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            info_window_open: true,
            settings_window_open: false,
            config: SimConfig::default(),
        }
    }
}

fn key_for(control: Control) -> egui::Key {
    match control {
        Control::LeftThruster => egui::Key::A,
        Control::RightThruster => egui::Key::D,
        Control::MainThruster => egui::Key::Space,
    }
}

/// Time to integrate this frame. Nothing is simulated while paused, and the
/// frame that resumes starts from zero so the pause is not replayed in one
/// step.
fn simulated_time(paused: bool, was_paused: bool, dt: std::time::Duration) -> f32 {
    if paused || was_paused {
        0.0
    } else {
        dt.as_secs_f32()
    }
}

pub struct App {
    last_time: std::time::Instant,
    settings: Settings,
    driver: FrameDriver,
    paused: bool,
    config_error: Option<String>,
}

impl App {
    /// `driver` comes from the command line config when one was given,
    /// otherwise the stored config replaces it.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut driver: FrameDriver,
        from_file: bool,
    ) -> Self {
        let mut settings: Settings = cc
            .storage
            .and_then(|s| s.get_string("App"))
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(settings) => Some(settings),
                Err(err) => {
                    tracing::warn!(%err, "ignoring stored settings");
                    None
                }
            })
            .unwrap_or_default();

        if from_file {
            settings.config = *driver.config();
        } else if let Err(err) = driver.set_config(settings.config) {
            tracing::warn!(%err, "stored config is invalid, using the current one");
            settings.config = *driver.config();
        }

        Self {
            last_time: std::time::Instant::now(),
            settings,
            driver,
            paused: false,
            config_error: None,
        }
    }

    fn active_controls(ctx: &egui::Context) -> Vec<Control> {
        if ctx.wants_keyboard_input() {
            return vec![];
        }
        ctx.input(|i| {
            Control::ALL
                .into_iter()
                .filter(|&control| i.key_down(key_for(control)))
                .collect()
        })
    }

    fn reset(&mut self) {
        if let Err(err) = self.driver.reset() {
            tracing::error!(%err, "failed to reset body");
        }
    }

    fn apply_settings(&mut self) {
        match self.driver.set_config(self.settings.config) {
            Ok(()) => self.config_error = None,
            Err(err) => {
                tracing::warn!(%err, "rejected config");
                self.config_error = Some(err.to_string());
            }
        }
    }

    fn paint(&self, ui: &mut egui::Ui, pose: Pose, active: &[Control]) {
        let size = ui.available_size();
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
        let half = rect.width().min(rect.height()) * 0.5;
        let center = rect.center();
        // World y points up, screen y points down.
        let to_screen = |p: cgmath::Vector2<f32>| {
            egui::pos2(center.x + p.x * half, center.y - p.y * half)
        };

        let painter = ui.painter_at(rect);

        if let Some(bounds) = &self.driver.config().clamp {
            painter.rect_stroke(
                egui::Rect::from_two_pos(to_screen(bounds.min), to_screen(bounds.max)),
                0.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
            );
        }

        let corners = [
            cgmath::vec2(-DRONE_HALF_SIZE, -DRONE_HALF_SIZE),
            cgmath::vec2(DRONE_HALF_SIZE, -DRONE_HALF_SIZE),
            cgmath::vec2(DRONE_HALF_SIZE, DRONE_HALF_SIZE),
            cgmath::vec2(-DRONE_HALF_SIZE, DRONE_HALF_SIZE),
        ]
        .map(|corner| to_screen(pose.transform_point(corner)));
        painter.add(egui::Shape::convex_polygon(
            corners.to_vec(),
            egui::Color32::from_rgb(60, 90, 200),
            egui::Stroke::new(1.5, egui::Color32::BLACK),
        ));

        // Flames point against the thrust.
        let controls = &self.driver.config().controls;
        for &control in active {
            let thruster = controls.thruster(control);
            if thruster.force.magnitude2() == 0.0 {
                continue;
            }
            let start = thruster.offset - cgmath::vec2(0.0, DRONE_HALF_SIZE);
            let end = start - thruster.force.normalize() * FLAME_LENGTH;
            painter.line_segment(
                [
                    to_screen(pose.transform_point(start)),
                    to_screen(pose.transform_point(end)),
                ],
                egui::Stroke::new(3.0, egui::Color32::from_rgb(240, 140, 30)),
            );
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let time = std::time::Instant::now();
        let dt = time.duration_since(self.last_time);
        self.last_time = time;

        let frame_time = dt.as_secs_f32();

        let was_paused = self.paused;
        if !ctx.wants_keyboard_input() {
            ctx.input(|i| {
                if i.key_pressed(egui::Key::P) {
                    self.paused = !self.paused;
                }
            });
            if ctx.input(|i| i.key_pressed(egui::Key::R)) {
                self.reset();
            }
        }

        let ts = simulated_time(self.paused, was_paused, dt);
        let active = if self.paused {
            vec![]
        } else {
            Self::active_controls(ctx)
        };
        let pose = if self.paused {
            self.driver.pose()
        } else {
            self.driver.step(ts, &active)
        };

        egui::TopBottomPanel::top("Top Panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.settings.info_window_open |= ui.button("Info").clicked();
                self.settings.settings_window_open |= ui.button("Settings").clicked();
                if ui.button("Reset").clicked() {
                    self.reset();
                }
                ui.checkbox(&mut self.paused, "Paused");
                ui.label("A / D: steer, Space: thrust, R: reset, P: pause");
            });
        });

        let body = *self.driver.body();
        let frame_count = self.driver.frame_count();
        egui::Window::new("Info")
            .open(&mut self.settings.info_window_open)
            .show(ctx, |ui| {
                ui.label(format!("FPS: {:.3}", 1.0 / frame_time));
                ui.label(format!("Frame Time: {:.3}ms", frame_time * 1000.0));
                ui.label(format!("Frame: {frame_count}"));
                ui.label(format!(
                    "Position: ({:.3}, {:.3})",
                    pose.position.x, pose.position.y
                ));
                ui.label(format!("Orientation: {:.1}°", pose.orientation.to_degrees()));
                ui.label(format!(
                    "Velocity: ({:.3}, {:.3}) m/s",
                    body.linear_velocity().x,
                    body.linear_velocity().y
                ));
                ui.label(format!(
                    "Angular Velocity: {:.1}°/s",
                    body.angular_velocity().to_degrees()
                ));
            });

        let mut apply = false;
        let mut settings_window_open = self.settings.settings_window_open;
        let config_error = self.config_error.clone();
        egui::Window::new("Settings")
            .open(&mut settings_window_open)
            .show(ctx, |ui| {
                let config = &mut self.settings.config;
                ui.horizontal(|ui| {
                    ui.label("Gravity: ");
                    ui.add(egui::DragValue::new(&mut config.gravity).speed(0.1));
                });
                ui.horizontal(|ui| {
                    ui.label("Mass: ");
                    ui.add(
                        egui::DragValue::new(&mut config.body.mass)
                            .speed(0.05)
                            .clamp_range(0.01..=100.0),
                    );
                });
                ui.horizontal(|ui| {
                    ui.label("Moment of Inertia: ");
                    ui.add(
                        egui::DragValue::new(&mut config.body.moment_of_inertia)
                            .speed(0.05)
                            .clamp_range(0.01..=100.0),
                    );
                });
                ui.horizontal(|ui| {
                    ui.label("Clamp Position: ");
                    let mut clamped = config.clamp.is_some();
                    if ui.checkbox(&mut clamped, "").changed() {
                        config.clamp = clamped.then(Bounds::default);
                    }
                });
                ui.horizontal(|ui| {
                    apply = ui.button("Apply").clicked();
                    if ui.button("Defaults").clicked() {
                        *config = SimConfig::default();
                    }
                });
                if let Some(err) = &config_error {
                    ui.colored_label(egui::Color32::RED, err.as_str());
                }
                ui.label("Applying a config resets the body.");
            });
        self.settings.settings_window_open = settings_window_open;
        if apply {
            self.apply_settings();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_gray(230)))
            .show(ctx, |ui| self.paint(ui, pose, &active));

        if !self.paused {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&self.settings) {
            Ok(json) => {
                storage.set_string("App", json);
                storage.flush();
            }
            Err(err) => tracing::warn!(%err, "failed to save settings"),
        }
    }
}
