//! Per-frame host loop.
//!
//! three-d calls [`App::frame`] once per display refresh. Returning a
//! [`FrameOutput`] asks for the next frame; there is no self-rescheduling.

use donut_game::{GameConfig, PlayerInput, Simulation};
use donut_renderer::{GameGui, Scene};
use three_d::{ClearState, Context, Event, FrameInput, FrameOutput, Key, Viewport};

/// Keys read from one frame's events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyCommands {
    pub input: PlayerInput,
    pub toggle_debug_panel: bool,
}

/// Map key presses to game commands.
///
/// Space or ArrowUp jumps, Enter starts or restarts, G toggles the tuning
/// panel. Events already handled by the UI are skipped.
pub fn read_keys(events: &[Event]) -> KeyCommands {
    let mut commands = KeyCommands::default();

    for event in events {
        if let Event::KeyPress { kind, handled, .. } = event {
            if *handled {
                continue;
            }
            match kind {
                Key::Space | Key::ArrowUp => commands.input.jump = true,
                Key::Enter => commands.input.start = true,
                Key::G => commands.toggle_debug_panel = true,
                _ => {}
            }
        }
    }

    commands
}

/// Game state plus everything needed to draw it.
pub struct App {
    simulation: Simulation,
    scene: Scene,
    gui: GameGui,
    spin: f32,
}

impl App {
    pub fn new(context: &Context, viewport: Viewport, config: GameConfig) -> Self {
        let show_debug_panel = config.render.show_debug_panel;
        let simulation = Simulation::new(config);
        let scene = Scene::new(context, viewport, &simulation);
        let gui = GameGui::new(context, show_debug_panel);

        Self {
            simulation,
            scene,
            gui,
            spin: 0.0,
        }
    }

    /// Handle input, advance the game one frame and draw it.
    pub fn frame(&mut self, mut frame_input: FrameInput) -> FrameOutput {
        // UI first so clicks on buttons don't also orbit the camera
        let clicked = self.gui.update(&mut frame_input, &mut self.simulation);
        self.scene
            .handle_events(frame_input.viewport, &mut frame_input.events);

        let keys = read_keys(&frame_input.events);
        if keys.toggle_debug_panel {
            self.gui.toggle_debug_panel();
        }

        self.simulation.apply_input(&clicked.merge(keys.input));

        let elapsed_ms = frame_input.elapsed_time as f32;
        self.simulation.tick(elapsed_ms);

        let render = &self.simulation.config.render;
        self.spin = (self.spin + render.spin_speed * elapsed_ms / 1000.0) % std::f32::consts::TAU;
        self.scene.apply_lighting(render);
        self.scene.sync(&self.simulation, self.spin);

        let [r, g, b] = render.clear_color;
        let lights = self.scene.lights();
        let screen = frame_input.screen();
        let result = screen
            .clear(ClearState::color_and_depth(r, g, b, 1.0, 1.0))
            .render(self.scene.camera(), self.scene.models(), &lights)
            .render(self.scene.camera(), self.scene.title(), &lights)
            .write(|| self.gui.render());

        if let Err(e) = result {
            log::error!("Failed to draw UI: {e}");
        }

        FrameOutput::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use three_d::Modifiers;

    fn press(kind: Key, handled: bool) -> Event {
        Event::KeyPress {
            kind,
            modifiers: Modifiers::default(),
            handled,
        }
    }

    #[test]
    fn test_jump_keys() {
        assert!(read_keys(&[press(Key::Space, false)]).input.jump);
        assert!(read_keys(&[press(Key::ArrowUp, false)]).input.jump);
        assert!(!read_keys(&[press(Key::Space, true)]).input.jump);
    }

    #[test]
    fn test_start_and_toggle_keys() {
        let keys = read_keys(&[press(Key::Enter, false), press(Key::G, false)]);
        assert!(keys.input.start);
        assert!(keys.toggle_debug_panel);
        assert!(!keys.input.jump);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(read_keys(&[press(Key::A, false)]), KeyCommands::default());
        assert_eq!(read_keys(&[]), KeyCommands::default());
    }
}
