//! Animated view of a running simulation
//!
//! Each frame advances the simulator by a fixed duration and redraws every
//! particle on a square `[-1, 1]` canvas. The frame counter wraps after a set
//! number of frames while the particles keep moving; only Reset returns them to
//! their initial state.

use eframe::egui;
use log::{debug, error};
use orbitsim_core::{Particle, Simulator};
use std::time::Duration;

/// Half-width of the visible world square
const WORLD_EXTENT: f32 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct ViewerSettings {
    pub frame_duration: f64,
    pub frame_interval_ms: u64,
    pub frames: u32,
}

pub struct ViewerApp {
    initial: Vec<Particle>,
    sim: Simulator,
    settings: ViewerSettings,
    frame: u32,
    playing: bool,
    speed_multiplier: f32,
    last_error: Option<String>,
}

impl ViewerApp {
    pub fn new(
        initial: Vec<Particle>,
        settings: ViewerSettings,
        _cc: &eframe::CreationContext<'_>,
    ) -> Self {
        Self::with_settings(initial, settings)
    }

    fn with_settings(initial: Vec<Particle>, settings: ViewerSettings) -> Self {
        Self {
            sim: Simulator::new(initial.clone()),
            initial,
            settings,
            frame: 0,
            playing: true,
            speed_multiplier: 1.0,
            last_error: None,
        }
    }

    fn reset(&mut self) {
        self.sim = Simulator::new(self.initial.clone());
        self.frame = 0;
        self.last_error = None;
    }

    /// Advance by one frame; returns false if the simulation failed
    fn advance_frame(&mut self) -> bool {
        if self.settings.frames > 0 && self.frame >= self.settings.frames {
            debug!("animation looped after {} frames", self.frame);
            self.frame = 0;
        }

        match self.sim.advance(self.settings.frame_duration) {
            Ok(_) => {
                self.frame += 1;
                true
            }
            Err(e) => {
                error!("advance failed at frame {}: {}", self.frame, e);
                self.last_error = Some(e.to_string());
                self.playing = false;
                false
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top bar with controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reset();
                }

                if ui.button("⏭ Step").clicked() {
                    self.advance_frame();
                }

                ui.separator();

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.speed_multiplier, 1.0..=10.0));

                ui.separator();

                ui.label(format!("Frame: {} / {}", self.frame, self.settings.frames));
            });
        });

        if let Some(ref error) = self.last_error {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.set_max_height(100.0);
                ui.label(egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED));
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();

            // Equal aspect: one scale for both axes
            let center = rect.center();
            let scale = rect.width().min(rect.height()) / (2.0 * WORLD_EXTENT) * 0.9;

            let frame_rect = egui::Rect::from_center_size(
                center,
                egui::vec2(2.0 * WORLD_EXTENT * scale, 2.0 * WORLD_EXTENT * scale),
            );
            painter.rect_stroke(frame_rect, 0.0, egui::Stroke::new(1.0, egui::Color32::GRAY));

            for pos in self.sim.positions() {
                let screen_pos =
                    center + egui::vec2(pos.x as f32 * scale, -(pos.y as f32) * scale);
                painter.circle_filled(screen_pos, 4.0, egui::Color32::RED);
            }
        });

        if self.playing {
            let frames_per_update = self.speed_multiplier.round().max(1.0) as usize;
            for _ in 0..frames_per_update {
                if !self.advance_frame() {
                    break;
                }
            }
            ctx.request_repaint_after(Duration::from_millis(self.settings.frame_interval_ms));
        }
    }
}
