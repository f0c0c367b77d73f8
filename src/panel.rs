//! Debug panel: live sliders and color pickers bound to the scene parameters.
//!
//! The application only sees [`ControlSurface`]; [`DebugPanel`] is the egui
//! implementation. Values are written in place between frames.

use crate::color::Rgb;
use crate::params::{ranges, FogMode, FogParams, ParamRange, SceneParams, WaveParams};

/// Something that can edit the parameter record once per frame
pub trait ControlSurface {
    /// Draw the controls; returns true when any parameter changed
    fn show(&mut self, ctx: &egui::Context, params: &mut SceneParams) -> bool;

    /// Show or hide the controls
    fn toggle(&mut self);
}

/// egui window with one control per parameter
pub struct DebugPanel {
    visible: bool,
    width: f32,
}

impl Default for DebugPanel {
    fn default() -> Self {
        Self {
            visible: true,
            width: 340.0,
        }
    }
}

impl DebugPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl ControlSurface for DebugPanel {
    fn show(&mut self, ctx: &egui::Context, params: &mut SceneParams) -> bool {
        if !self.visible {
            return false;
        }

        let mut changed = false;
        egui::Window::new("Debug")
            .default_width(self.width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Waves");
                changed |= wave_controls(ui, &mut params.wave);
                ui.separator();

                ui.heading("Colors");
                changed |= color_controls(ui, &mut params.wave);
                ui.separator();

                ui.heading("Fog");
                changed |= fog_controls(ui, &mut params.fog);
                ui.separator();

                if ui.button("Reset").clicked() {
                    *params = SceneParams::default();
                    changed = true;
                }
                ui.small("H: toggle panel | Esc: quit");
            });
        changed
    }

    fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

/// Slider that only writes on user input, snapped with [`ParamRange::clamp`]
fn slider(ui: &mut egui::Ui, value: &mut f32, range: ParamRange, label: &str) -> bool {
    let changed = ui
        .add(
            egui::Slider::new(value, range.min..=range.max)
                .step_by(range.step as f64)
                .clamping(egui::SliderClamping::Never)
                .text(label),
        )
        .changed();
    if changed {
        *value = range.clamp(*value);
    }
    changed
}

fn color_picker(ui: &mut egui::Ui, color: &mut Rgb, label: &str) -> bool {
    let mut srgb = color.to_srgb8();
    let changed = ui
        .horizontal(|ui| {
            let changed = ui.color_edit_button_srgb(&mut srgb).changed();
            ui.label(label);
            changed
        })
        .inner;
    if changed {
        *color = Rgb::from_srgb8(srgb);
    }
    changed
}

fn wave_controls(ui: &mut egui::Ui, wave: &mut WaveParams) -> bool {
    let mut changed = false;

    changed |= slider(
        ui,
        &mut wave.big_wave_elevation,
        ranges::BIG_WAVE_ELEVATION,
        "big wave elevation",
    );
    changed |= slider(
        ui,
        &mut wave.big_wave_frequency.x,
        ranges::BIG_WAVE_FREQUENCY,
        "big wave frequency x",
    );
    changed |= slider(
        ui,
        &mut wave.big_wave_frequency.y,
        ranges::BIG_WAVE_FREQUENCY,
        "big wave frequency y",
    );
    changed |= slider(
        ui,
        &mut wave.big_wave_speed,
        ranges::BIG_WAVE_SPEED,
        "big wave speed",
    );

    changed |= slider(
        ui,
        &mut wave.small_wave_elevation,
        ranges::SMALL_WAVE_ELEVATION,
        "small wave elevation",
    );
    changed |= slider(
        ui,
        &mut wave.small_wave_frequency,
        ranges::SMALL_WAVE_FREQUENCY,
        "small wave frequency",
    );
    changed |= slider(
        ui,
        &mut wave.small_wave_speed,
        ranges::SMALL_WAVE_SPEED,
        "small wave speed",
    );
    changed |= ui
        .add(
            egui::Slider::new(
                &mut wave.small_wave_iterations,
                0..=ranges::MAX_SMALL_WAVE_ITERATIONS,
            )
            .text("small wave iterations"),
        )
        .changed();

    changed
}

fn color_controls(ui: &mut egui::Ui, wave: &mut WaveParams) -> bool {
    let mut changed = false;
    changed |= color_picker(ui, &mut wave.depth_color, "depth color");
    changed |= color_picker(ui, &mut wave.surface_color, "surface color");
    changed |= slider(
        ui,
        &mut wave.color_offset,
        ranges::COLOR_OFFSET,
        "color offset",
    );
    changed |= slider(
        ui,
        &mut wave.color_multiplier,
        ranges::COLOR_MULTIPLIER,
        "color multiplier",
    );
    changed
}

fn fog_controls(ui: &mut egui::Ui, fog: &mut FogParams) -> bool {
    let mut changed = false;

    egui::ComboBox::from_label("fog mode")
        .selected_text(fog.mode.label())
        .show_ui(ui, |ui| {
            for mode in FogMode::ALL {
                changed |= ui
                    .selectable_value(&mut fog.mode, mode, mode.label())
                    .changed();
            }
        });

    // Only the controls of the active model are shown
    match fog.mode {
        FogMode::Off => {}
        FogMode::Linear => {
            changed |= color_picker(ui, &mut fog.color, "fog color");
            changed |= slider(ui, &mut fog.near, ranges::FOG_DISTANCE, "fog near");
            changed |= slider(ui, &mut fog.far, ranges::FOG_DISTANCE, "fog far");
        }
        FogMode::Exponential => {
            changed |= color_picker(ui, &mut fog.color, "fog color");
            changed |= slider(ui, &mut fog.density, ranges::FOG_DENSITY, "fog density");
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Persistent egui context driving the panel with synthetic input
    struct PanelHarness {
        ctx: egui::Context,
        panel: DebugPanel,
    }

    impl PanelHarness {
        fn new() -> Self {
            Self {
                ctx: egui::Context::default(),
                panel: DebugPanel::default(),
            }
        }

        fn frame(
            &mut self,
            params: &mut SceneParams,
            events: Vec<egui::Event>,
        ) -> (bool, egui::FullOutput) {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(1280.0, 720.0),
                )),
                events,
                ..Default::default()
            };
            let mut changed = false;
            let output = self.ctx.run(input, |ctx| {
                changed |= self.panel.show(ctx, params);
            });
            (changed, output)
        }

        /// Idle frames until the window has been laid out; returns the last output
        fn settle(&mut self, params: &mut SceneParams) -> egui::FullOutput {
            let mut last = None;
            for _ in 0..8 {
                let (changed, output) = self.frame(params, Vec::new());
                assert!(!changed);
                last = Some(output);
            }
            last.unwrap()
        }

        /// Press and release the primary button at `pos`; true if any frame reported a change
        fn click(&mut self, params: &mut SceneParams, pos: egui::Pos2) -> bool {
            let button = |pressed| egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            };
            let mut changed = false;
            changed |= self.frame(params, vec![egui::Event::PointerMoved(pos)]).0;
            changed |= self.frame(params, vec![button(true)]).0;
            changed |= self.frame(params, vec![button(false)]).0;
            changed
        }
    }

    fn find_text(shapes: &[egui::Shape], text: &str) -> Option<egui::Rect> {
        shapes.iter().find_map(|shape| match shape {
            egui::Shape::Text(t) if t.galley.text() == text => {
                Some(t.galley.rect.translate(t.pos.to_vec2()))
            }
            egui::Shape::Vec(inner) => find_text(inner, text),
            _ => None,
        })
    }

    fn text_rect(output: &egui::FullOutput, text: &str) -> egui::Rect {
        let shapes: Vec<egui::Shape> = output.shapes.iter().map(|c| c.shape.clone()).collect();
        find_text(&shapes, text).unwrap_or_else(|| panic!("{text:?} not drawn"))
    }

    #[test]
    fn test_idle_frames_change_nothing() {
        let mut harness = PanelHarness::new();
        let mut params = SceneParams::default();

        for _ in 0..20 {
            assert!(!harness.frame(&mut params, Vec::new()).0);
        }
        assert_eq!(params, SceneParams::default());
    }

    #[test]
    fn test_hidden_panel_is_inert() {
        let mut harness = PanelHarness::new();
        harness.panel.toggle();
        assert!(!harness.panel.is_visible());

        let mut params = SceneParams::default();
        params.wave.big_wave_elevation = 0.65;
        assert!(!harness.frame(&mut params, Vec::new()).0);
        assert_eq!(params.wave.big_wave_elevation, 0.65);

        harness.panel.toggle();
        assert!(harness.panel.is_visible());
    }

    #[test]
    fn test_slider_click_writes_snapped_value() {
        let mut harness = PanelHarness::new();
        let mut params = SceneParams::default();
        let output = harness.settle(&mut params);

        // Sliders start at the left edge of the content, level with their label
        let left = text_rect(&output, "Waves").left();
        let row = text_rect(&output, "big wave elevation").center().y;

        assert!(harness.click(&mut params, egui::pos2(left + 1.0, row)));
        assert_eq!(params.wave.big_wave_elevation, ranges::BIG_WAVE_ELEVATION.min);

        let mut expected = SceneParams::default();
        expected.wave.big_wave_elevation = ranges::BIG_WAVE_ELEVATION.min;
        assert_eq!(params, expected);
    }

    #[test]
    fn test_reset_restores_defaults_and_stays_put() {
        let mut harness = PanelHarness::new();
        let mut params = SceneParams::default();
        params.wave.big_wave_elevation = 0.65;
        params.wave.small_wave_iterations = 7;
        params.fog.mode = FogMode::Linear;

        let output = harness.settle(&mut params);
        let reset = text_rect(&output, "Reset").center();

        assert!(harness.click(&mut params, reset));
        assert_eq!(params, SceneParams::default());

        for _ in 0..5 {
            assert!(!harness.frame(&mut params, Vec::new()).0);
        }
        assert_eq!(params, SceneParams::default());
    }
}
