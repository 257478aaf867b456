use super::EguiApp;
use super::style;
use crate::egui_app::view_model;
use crate::predictor::{Field, InputHint};
use eframe::egui::{self, RichText};

const INPUT_WIDTH: f32 = 150.0;

impl EguiApp {
    pub(super) fn render_form_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        style::compartment_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Property Details")
                    .size(20.0)
                    .color(palette.text_primary),
            );
            ui.add_space(10.0);
            egui::Grid::new("property_details")
                .num_columns(2)
                .spacing(egui::vec2(16.0, 10.0))
                .show(ui, |ui| {
                    for pair in Field::ALL.chunks(2) {
                        for &field in pair {
                            ui.vertical(|ui| self.render_field(ui, field));
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(14.0);
            self.render_form_actions(ui);
        });
    }

    fn render_field(&mut self, ui: &mut egui::Ui, field: Field) {
        let palette = style::palette();
        ui.label(RichText::new(field.label()).color(palette.text_primary));
        let busy = self.controller.is_busy();
        if field.is_flag() {
            self.render_flag_picker(ui, field, busy);
        } else {
            let mut text = self.controller.ui.form.input(field).to_string();
            let response = ui
                .add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut text).desired_width(INPUT_WIDTH),
                )
                .on_hover_text(hint_text(field.hint()));
            if response.changed() {
                self.controller.update_field(field, &text);
            }
        }
        ui.label(
            RichText::new(field.description())
                .small()
                .color(palette.text_muted),
        );
    }

    fn render_flag_picker(&mut self, ui: &mut egui::Ui, field: Field, busy: bool) {
        let current = self.controller.ui.form.features().get(field);
        let label = |value: f64| if value == 1.0 { "Yes" } else { "No" };
        let mut selected = current;
        ui.add_enabled_ui(!busy, |ui| {
            egui::ComboBox::from_id_salt(("flag_picker", field.name()))
                .width(INPUT_WIDTH)
                .selected_text(label(current))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected, 0.0, "No");
                    ui.selectable_value(&mut selected, 1.0, "Yes");
                });
        });
        if selected != current {
            self.controller.set_field_value(field, selected);
        }
    }

    fn render_form_actions(&mut self, ui: &mut egui::Ui) {
        let button = view_model::submit_button(self.controller.is_busy());
        ui.horizontal(|ui| {
            let submit = egui::Button::new(RichText::new(button.label).strong())
                .min_size(egui::vec2(220.0, 32.0));
            if ui.add_enabled(button.enabled, submit).clicked() {
                self.controller.submit_prediction();
            }
            if button.enabled {
                if ui.button("Reset").clicked() {
                    self.controller.reset_form();
                }
            } else {
                ui.spinner();
                if ui.button("Cancel").clicked() {
                    self.controller.cancel_prediction();
                }
            }
        });
    }
}

fn hint_text(hint: InputHint) -> String {
    let bound = |value: Option<f64>| value.map_or_else(|| "–".to_string(), |v| v.to_string());
    format!(
        "Suggested range {} to {}, step {}",
        bound(hint.min),
        bound(hint.max),
        hint.step
    )
}
