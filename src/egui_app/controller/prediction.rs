use super::EguiController;
use super::jobs::{PredictionJob, PredictionJobResult};
use crate::egui_app::ui::style::StatusTone;
use crate::predictor::{Field, UnknownField};

impl EguiController {
    /// Store new text for `field`; the value is coerced to a finite number.
    pub fn update_field(&mut self, field: Field, raw: &str) {
        self.ui.form.edit(field, raw);
    }

    /// Name-based variant of [`EguiController::update_field`].
    pub fn update_field_by_name(&mut self, name: &str, raw: &str) -> Result<(), UnknownField> {
        let field = name.parse::<Field>()?;
        self.update_field(field, raw);
        Ok(())
    }

    pub fn set_field_value(&mut self, field: Field, value: f64) {
        self.ui.form.set_value(field, value);
    }

    pub fn reset_form(&mut self) {
        self.ui.form.reset();
    }

    pub fn is_busy(&self) -> bool {
        self.ui.submission.is_busy()
    }

    /// Send the current form to the prediction service.
    ///
    /// Ignored while a previous submission is still in flight.
    pub fn submit_prediction(&mut self) {
        let Some(request) = self.ui.submission.begin() else {
            tracing::debug!("Prediction already in flight; ignoring submit");
            return;
        };
        self.set_status("Requesting price prediction…", StatusTone::Busy);
        self.jobs.begin_prediction(
            &self.client,
            PredictionJob {
                request,
                features: *self.ui.form.features(),
            },
        );
    }

    /// Stop waiting for the in-flight prediction. A late response is dropped.
    pub fn cancel_prediction(&mut self) {
        if let Some(request) = self.ui.submission.abandon() {
            tracing::info!(?request, "Prediction cancelled");
            self.set_status("Prediction cancelled", StatusTone::Warning);
        }
    }

    pub(super) fn handle_prediction_finished(&mut self, message: PredictionJobResult) {
        let PredictionJobResult { request, result } = message;
        let status = match &result {
            Ok(_) => ("Prediction updated".to_string(), StatusTone::Info),
            Err(err) => {
                tracing::error!("Prediction failed: {err}");
                (format!("Prediction failed: {err}"), StatusTone::Error)
            }
        };
        if !self.ui.submission.complete(request, result) {
            tracing::debug!(?request, "Ignoring result of superseded prediction");
            return;
        }
        self.set_status(status.0, status.1);
    }
}
