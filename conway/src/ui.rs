// ui.rs - Window, controls and board drawing

use conway_core::{patterns, Seed, SimConfig, Simulation, StepError};
use eframe::egui;
use egui::{Color32, Rect, Vec2};
use tracing::error;

/// Height reserved above the board for the control panel.
pub const CONTROLS_HEIGHT: f32 = 110.0;

pub struct GameOfLife {
    sim: Simulation,
    scale: f32,
    live_percent: u32,
    is_running: bool,
    step_requested: bool,
    selected_pattern: usize,
    live_color: Color32,
    dead_color: Color32,
}

impl GameOfLife {
    pub fn new(sim: Simulation, config: &SimConfig) -> Self {
        Self {
            sim,
            scale: config.scale as f32,
            live_percent: config.live_percent,
            is_running: true,
            step_requested: false,
            selected_pattern: 0,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
        }
    }

    /// Board cell under a screen position, if any.
    fn cell_at(&self, origin: egui::Pos2, pos: egui::Pos2) -> Option<(usize, usize)> {
        let rel = pos - origin;
        if rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }
        let (row, col) = ((rel.y / self.scale) as usize, (rel.x / self.scale) as usize);
        let board = self.sim.board();
        (row < board.height() && col < board.width()).then_some((row, col))
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.is_running = !self.is_running;
            }

            if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                self.step_requested = true;
            }

            if ui.button("⏹ Clear").clicked() {
                self.is_running = false;
                self.sim.clear();
            }

            if ui.button("🎲 Random").clicked() {
                self.sim.reseed(Seed::Random { live_percent: self.live_percent });
            }
        });

        ui.horizontal(|ui| {
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            let pattern = &patterns::PATTERNS[self.selected_pattern];
            let board = self.sim.board();
            let fits = pattern.fits(board.height(), board.width());
            if ui.add_enabled(fits, egui::Button::new("Apply Pattern")).clicked() {
                self.sim.reseed(Seed::Pattern(pattern));
            }

            ui.separator();

            let mut delay = self.sim.throttle_mut().delay();
            if ui.add(egui::Slider::new(&mut delay, 0..=60).text("frames/gen")).changed() {
                self.sim.throttle_mut().set_delay(delay);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });

        let board = self.sim.board();
        let total = board.height() * board.width();
        let live = board.live_count();
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.sim.generation()));
            ui.label(format!("Live cells: {live}"));
            ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
            ui.label(format!("Workers: {}", self.sim.scheduler().workers()));
            if self.sim.cycle_detected() {
                ui.colored_label(Color32::from_rgb(200, 120, 0), "cycle detected");
            }
        });
    }

    /// Clear to the dead color, then one square per live cell.
    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let board = self.sim.board();
        let size = Vec2::new(board.width() as f32, board.height() as f32) * self.scale;
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, self.dead_color);
        let cell = Vec2::splat(self.scale);
        for (row, col) in board.alive() {
            let min = origin + Vec2::new(col as f32, row as f32) * self.scale;
            painter.rect_filled(Rect::from_min_size(min, cell), 0.0, self.live_color);
        }

        // Editing only while paused
        if !self.is_running && response.clicked() {
            if let Some((row, col)) = response.interact_pointer_pos().and_then(|pos| self.cell_at(origin, pos)) {
                self.sim.toggle(row, col);
            }
        }
    }

    /// Run whatever step this frame calls for.
    fn advance(&mut self) -> Result<bool, StepError> {
        if std::mem::take(&mut self.step_requested) {
            self.sim.step().map(|()| true)
        } else if self.is_running {
            self.sim.tick()
        } else {
            Ok(false)
        }
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if let Err(err) = self.advance() {
            // A step that cannot start its workers is fatal
            error!(%err, "generation step failed");
            self.is_running = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.draw_board(ui));

        // Each frame is one throttle tick
        if self.is_running || self.step_requested {
            ctx.request_repaint();
        }
    }
}
