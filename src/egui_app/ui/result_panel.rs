use super::EguiApp;
use super::style::{self, StatusTone};
use crate::egui_app::view_model::{self, ResultView, SummaryRow};
use eframe::egui::{self, RichText};

impl EguiApp {
    pub(super) fn render_result_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let view = view_model::result_view(
            &self.controller.ui.submission,
            self.controller.ui.form.features(),
        );
        style::compartment_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                RichText::new("Prediction Results")
                    .size(20.0)
                    .color(palette.text_primary),
            );
            ui.add_space(10.0);
            match &view {
                ResultView::Error(message) => {
                    ui.label(
                        RichText::new(message)
                            .color(style::status_badge_color(StatusTone::Error)),
                    );
                }
                ResultView::Estimate { price, summary } => render_estimate(ui, price, summary),
                ResultView::Placeholder => {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(view_model::PLACEHOLDER_PROMPT).color(palette.text_muted),
                        );
                    });
                }
            }
        });
    }
}

fn render_estimate(ui: &mut egui::Ui, price: &str, summary: &[SummaryRow]) {
    let palette = style::palette();
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Estimated Median Home Value").color(palette.success));
        ui.label(
            RichText::new(price)
                .size(32.0)
                .strong()
                .color(palette.success),
        );
    });
    ui.add_space(12.0);
    ui.label(RichText::new("Area Summary").color(palette.text_primary));
    egui::Grid::new("area_summary")
        .num_columns(2)
        .spacing(egui::vec2(24.0, 4.0))
        .show(ui, |ui| {
            for pair in summary.chunks(2) {
                for row in pair {
                    ui.label(
                        RichText::new(format!("{}: {}", row.label, row.value))
                            .color(palette.text_muted),
                    );
                }
                ui.end_row();
            }
        });
}
