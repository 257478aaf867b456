use super::EguiApp;
use super::style;
use eframe::egui::{self, Frame, Margin, RichText};

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Boston Housing Price Predictor").color(palette.text_primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.render_server_controls(ui);
                    });
                });
                ui.label(
                    RichText::new(
                        "Enter Boston area property details to get an estimated median home value",
                    )
                    .color(palette.text_muted),
                );
            });
    }

    /// Laid out right to left, so widgets are added in reverse visual order.
    fn render_server_controls(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let checking = matches!(
            self.controller.ui.server.health,
            crate::egui_app::state::ServerHealth::Checking
        );
        if ui
            .add_enabled(!checking, egui::Button::new("Check server"))
            .clicked()
        {
            self.controller.check_server_health();
        }
        let dirty = self.controller.ui.server.url_input.trim()
            != self.controller.settings().server_url;
        if ui.add_enabled(dirty, egui::Button::new("Save")).clicked() {
            self.controller.save_server_url();
        }
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.controller.ui.server.url_input)
                .hint_text(crate::config::DEFAULT_SERVER_URL)
                .desired_width(240.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) && dirty {
            self.controller.save_server_url();
        }
        ui.label(RichText::new("Server").color(palette.text_muted));
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let badge = style::status_badge_color(status.tone);
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 6.0, badge);
                    ui.label(RichText::new(status.badge_label()).color(badge));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let server = &self.controller.ui.server;
                        ui.label(RichText::new(server.health.summary()).color(palette.text_muted));
                        if let Some(model) = server.model_summary() {
                            ui.separator();
                            ui.label(RichText::new(model).color(palette.text_muted));
                        }
                    });
                });
            });
    }
}
