//! Debug panel
//!
//! Every edit goes through the named handlers in `spotlight_core::bindings`.

use spotlight_core::AppState;
use spotlight_core::bindings::{
    self, ANIMATE_CYLINDERS_LABEL, ANIMATE_LIGHTS_LABEL, ANIMATION_FOLDER, CYLINDER_SPACING,
    LIGHT_DISTANCE, LIGHT_FOLDERS, LIGHT_SPACING, MATERIAL_METALNESS, MATERIAL_ROUGHNESS,
    NumericControl, POSITION_FOLDER, SHOW_AXES_LABEL, SPOT_ANGLE, SPOT_DISTANCE, SPOT_INTENSITY,
};

use crate::panels::Panel;

/// Slider for one numeric control. Returns the new value when it changed.
fn slider(ui: &mut egui::Ui, control: &NumericControl, current: f32) -> Option<f32> {
    let mut value = current;
    let response = ui.add(
        egui::Slider::new(&mut value, control.range())
            .step_by(control.step as f64)
            .text(control.label),
    );
    response.changed().then_some(value)
}

fn checkbox(ui: &mut egui::Ui, label: &str, current: bool) -> Option<bool> {
    let mut value = current;
    ui.checkbox(&mut value, label).changed().then_some(value)
}

/// Floating window with the material, light, position and animation controls
pub struct DebugPanel;

impl DebugPanel {
    pub fn new() -> Self {
        Self
    }

    /// Show the panel as a window anchored to the top-right corner.
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState) {
        egui::Window::new(self.name())
            .anchor(egui::Align2::RIGHT_TOP, [-8.0, 8.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| self.ui(ui, state));
    }

    fn material_controls(ui: &mut egui::Ui, state: &mut AppState) {
        let material = &mut state.scene.material;
        if let Some(v) = slider(ui, &MATERIAL_METALNESS, material.metalness) {
            bindings::set_material_metalness(material, v);
        }
        if let Some(v) = slider(ui, &MATERIAL_ROUGHNESS, material.roughness) {
            bindings::set_material_roughness(material, v);
        }
    }

    fn light_folder(ui: &mut egui::Ui, state: &mut AppState, index: usize, title: &str) {
        let Some(light) = state.scene.lights.get(index) else {
            return;
        };
        let (angle, intensity, distance) = (light.angle, light.intensity, light.distance);

        egui::CollapsingHeader::new(title)
            .default_open(true)
            .show(ui, |ui| {
                if let Some(v) = slider(ui, &SPOT_ANGLE, angle) {
                    bindings::set_light_angle(&mut state.scene, index, v);
                }
                if let Some(v) = slider(ui, &SPOT_INTENSITY, intensity) {
                    bindings::set_light_intensity(&mut state.scene, index, v);
                }
                if let Some(v) = slider(ui, &SPOT_DISTANCE, distance) {
                    bindings::set_light_falloff_distance(&mut state.scene, index, v);
                }
            });
    }

    fn position_folder(ui: &mut egui::Ui, state: &mut AppState) {
        egui::CollapsingHeader::new(POSITION_FOLDER)
            .default_open(true)
            .show(ui, |ui| {
                let AppState { params, scene, .. } = state;
                if let Some(v) = slider(ui, &LIGHT_SPACING, params.light_spacing) {
                    bindings::set_light_spacing(params, scene, v);
                }
                if let Some(v) = slider(ui, &LIGHT_DISTANCE, params.light_distance) {
                    bindings::set_light_distance(params, scene, v);
                }
                if let Some(v) = slider(ui, &CYLINDER_SPACING, params.cylinder_spacing) {
                    bindings::set_cylinder_spacing(params, scene, v);
                }
            });
    }

    fn animation_folder(ui: &mut egui::Ui, state: &mut AppState) {
        egui::CollapsingHeader::new(ANIMATION_FOLDER)
            .default_open(true)
            .show(ui, |ui| {
                let params = &mut state.params;
                if let Some(v) = checkbox(ui, ANIMATE_LIGHTS_LABEL, params.animate_lights) {
                    bindings::set_animate_lights(params, v);
                }
                if let Some(v) = checkbox(ui, ANIMATE_CYLINDERS_LABEL, params.animate_cylinders) {
                    bindings::set_animate_cylinders(params, v);
                }
            });
    }
}

impl Default for DebugPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for DebugPanel {
    fn name(&self) -> &str {
        "Debug"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        Self::material_controls(ui, state);

        for (index, title) in LIGHT_FOLDERS.iter().enumerate() {
            Self::light_folder(ui, state, index, title);
        }

        Self::position_folder(ui, state);
        Self::animation_folder(ui, state);

        ui.separator();
        if let Some(v) = checkbox(ui, SHOW_AXES_LABEL, state.scene.axes.visible) {
            bindings::set_axes_visible(&mut state.scene, v);
        }
    }
}
