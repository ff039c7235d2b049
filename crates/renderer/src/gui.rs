//! On-screen UI drawn with egui.
//!
//! Two layers share one egui pass:
//!
//! - the game overlay, whose visibility comes from the simulation's
//!   [`Overlay`](donut_game::Overlay)
//! - a tuning panel bound directly to the live [`GameConfig`](donut_game::GameConfig)

use donut_game::{Easing, PlayerInput, Simulation};
use three_d::egui::{self, Align2, Color32, RichText};
use three_d::{Context, CoreError, FrameInput, GUI};

/// egui state for the overlay and tuning panel.
pub struct GameGui {
    gui: GUI,
    debug_panel_open: bool,
}

impl GameGui {
    pub fn new(context: &Context, debug_panel_open: bool) -> Self {
        Self {
            gui: GUI::new(context),
            debug_panel_open,
        }
    }

    pub fn toggle_debug_panel(&mut self) {
        self.debug_panel_open = !self.debug_panel_open;
    }

    /// Lay out this frame's UI.
    ///
    /// Events the UI consumes are marked handled. Returns the commands issued
    /// by clicking overlay buttons.
    pub fn update(&mut self, frame_input: &mut FrameInput, simulation: &mut Simulation) -> PlayerInput {
        let mut input = PlayerInput::default();
        let debug_panel_open = &mut self.debug_panel_open;

        self.gui.update(
            &mut frame_input.events,
            frame_input.accumulated_time,
            frame_input.viewport,
            frame_input.device_pixel_ratio,
            |ctx| {
                input = overlay_ui(ctx, simulation);
                if *debug_panel_open {
                    tuning_ui(ctx, simulation, debug_panel_open);
                }
            },
        );

        input
    }

    /// Draw the UI laid out by the last [`GameGui::update`].
    pub fn render(&self) -> Result<(), CoreError> {
        self.gui.render()
    }
}

fn overlay_ui(ctx: &egui::Context, simulation: &Simulation) -> PlayerInput {
    let overlay = simulation.overlay();
    let mut input = PlayerInput::default();

    if overlay.start_visible {
        egui::Area::new(egui::Id::new("start_screen"))
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Donut Runner").size(48.0).color(Color32::WHITE));
                    ui.label("Space to jump. Drag to orbit the camera.");
                    if ui.button(RichText::new("Start").size(24.0)).clicked() {
                        input.start = true;
                    }
                });
            });
    }

    if overlay.play_visible {
        egui::Area::new(egui::Id::new("score"))
            .anchor(Align2::LEFT_TOP, [16.0, 16.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&overlay.score_text).size(28.0).color(Color32::WHITE));
            });
    }

    if overlay.game_over_visible {
        egui::Area::new(egui::Id::new("game_over"))
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Game Over").size(48.0).color(Color32::LIGHT_RED));
                    ui.label(
                        RichText::new(&overlay.final_score_text)
                            .size(24.0)
                            .color(Color32::WHITE),
                    );
                    if ui.button(RichText::new("Restart").size(24.0)).clicked() {
                        input.start = true;
                    }
                });
            });
    }

    input
}

fn tuning_ui(ctx: &egui::Context, simulation: &mut Simulation, open: &mut bool) {
    let status = format!(
        "{:?} | score {} | frame {}",
        simulation.state(),
        simulation.score(),
        simulation.frame
    );
    let config = &mut simulation.config;

    egui::Window::new("Tuning")
        .open(open)
        .anchor(Align2::RIGHT_TOP, [-16.0, 16.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Obstacles");
            ui.add(egui::Slider::new(&mut config.obstacles.step, 0.02..=0.5).text("speed"));

            ui.heading("Jump");
            ui.add(egui::Slider::new(&mut config.player.jump_height, 0.5..=5.0).text("height"));
            ui.add(
                egui::Slider::new(&mut config.player.jump_duration_ms, 100.0..=1000.0)
                    .text("rise (ms)"),
            );
            egui::ComboBox::from_label("easing")
                .selected_text(config.player.jump_easing.name())
                .show_ui(ui, |ui| {
                    for easing in Easing::ALL {
                        ui.selectable_value(&mut config.player.jump_easing, easing, easing.name());
                    }
                });

            ui.heading("Scene");
            ui.add(egui::Slider::new(&mut config.render.spin_speed, 0.0..=10.0).text("spin"));
            ui.add(
                egui::Slider::new(&mut config.render.ambient_intensity, 0.0..=2.0)
                    .text("ambient"),
            );
            ui.add(
                egui::Slider::new(&mut config.render.directional_intensity, 0.0..=5.0)
                    .text("directional"),
            );
            ui.color_edit_button_rgb(&mut config.render.clear_color);

            ui.separator();
            ui.label(status);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_result_matches_screen_write() {
        // RenderTarget::write forwards the closure's error type unchanged
        let _render: fn(&GameGui) -> Result<(), CoreError> = GameGui::render;
    }
}
