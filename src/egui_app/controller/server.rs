use super::EguiController;
use super::jobs::HealthCheckResult;
use crate::config::{self, Settings};
use crate::egui_app::state::ServerHealth;
use crate::egui_app::ui::style::StatusTone;

impl EguiController {
    /// Ask the service for its health report in the background.
    pub fn check_server_health(&mut self) {
        if self.jobs.begin_health_check(&self.client) {
            self.ui.server.health = ServerHealth::Checking;
        }
    }

    /// Apply the URL typed into the server field and persist it.
    pub fn save_server_url(&mut self) {
        let settings = Settings {
            server_url: self.ui.server.url_input.clone(),
            ..self.settings.clone()
        };
        let saved = config::config_path().and_then(|path| {
            config::save_settings_to_path(&settings, &path)?;
            config::load_settings_from(&path)
        });
        match saved {
            Ok(saved) => {
                tracing::info!("Prediction server set to {}", saved.server_url);
                self.set_status(
                    format!("Prediction server set to {}", saved.server_url),
                    StatusTone::Info,
                );
                self.apply_settings(saved);
                self.ui.server.model_info = None;
                // A check against the old URL may still be running; its report is dropped on arrival.
                self.ui.server.health = if self.jobs.health_check_in_progress() {
                    ServerHealth::Checking
                } else {
                    ServerHealth::Unknown
                };
            }
            Err(err) => {
                tracing::warn!("Failed to save settings: {err}");
                self.set_status(format!("Failed to save settings: {err}"), StatusTone::Error);
            }
        }
    }

    pub(super) fn handle_health_checked(&mut self, message: HealthCheckResult) {
        self.jobs.clear_health_check();
        if message.server_url != self.client.server_url() {
            tracing::debug!("Ignoring health report for {}", message.server_url);
            self.ui.server.health = ServerHealth::Unknown;
            self.ui.server.model_info = None;
            return;
        }
        if let Some(unknown) = message
            .model_info
            .as_ref()
            .map(|info| info.unknown_features())
            .filter(|unknown| !unknown.is_empty())
        {
            tracing::warn!("Model expects features this client does not send: {unknown:?}");
            self.set_status(
                format!("Model expects unknown features: {}", unknown.join(", ")),
                StatusTone::Warning,
            );
        }
        self.ui.server.model_info = message.model_info;
        self.ui.server.health = match message.result {
            Ok(health) => ServerHealth::Reachable(health),
            Err(err) => {
                tracing::warn!("Health check failed: {err}");
                ServerHealth::Unreachable(err.to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::app_dirs::ConfigBaseGuard;
    use crate::config::{self, Settings};
    use crate::egui_app::controller::EguiController;
    use crate::egui_app::state::ServerHealth;
    use crate::egui_app::ui::style::StatusTone;
    use crate::mock_service::{MockService, http_response, unreachable_base_url};
    use std::sync::mpsc;
    use tempfile::tempdir;

    const MODEL_INFO_BODY: &str = r#"{"model_type": "TensorFlow/Keras", "input_shape": "(None, 11)", "features_expected": 11, "feature_names": ["CRIM", "ZN", "INDUS", "CHAS", "NOX", "RM", "AGE", "DIS", "TAX", "PTRATIO", "LSTAT"]}"#;

    fn json_response(body: &str) -> String {
        http_response(200, Some("application/json"), body)
    }

    #[test]
    fn healthy_server_is_reported() {
        let service = MockService::json(
            200,
            r#"{"status": "healthy", "model_loaded": true, "model_type": "TensorFlow/Keras"}"#,
        );
        let mut controller = EguiController::new(Settings {
            server_url: service.base_url(),
            timeout_secs: Some(10),
        });
        controller.check_server_health();
        assert_eq!(controller.ui.server.health, ServerHealth::Checking);
        assert!(controller.has_pending_jobs());
        controller.wait_for_job();
        assert!(!controller.has_pending_jobs());
        assert!(matches!(
            controller.ui.server.health,
            ServerHealth::Reachable(ref health) if health.model_loaded
        ));
    }

    #[test]
    fn unreachable_server_is_reported() {
        let mut controller = EguiController::new(Settings {
            server_url: unreachable_base_url(),
            timeout_secs: Some(10),
        });
        controller.check_server_health();
        controller.wait_for_job();
        assert!(matches!(
            controller.ui.server.health,
            ServerHealth::Unreachable(_)
        ));
    }

    #[test]
    fn saved_server_url_is_applied_and_persisted() {
        let base = tempdir().unwrap();
        let _guard = ConfigBaseGuard::set(base.path().to_path_buf());
        let mut controller = EguiController::new(Settings::default());
        controller.ui.server.url_input = "http://predictor.internal:8080/".to_string();

        controller.save_server_url();

        assert_eq!(controller.settings().server_url, "http://predictor.internal:8080");
        assert_eq!(controller.ui.server.url_input, "http://predictor.internal:8080");
        assert_eq!(
            config::load_or_default().unwrap().server_url,
            "http://predictor.internal:8080"
        );
    }

    #[test]
    fn load_configuration_reads_saved_settings() {
        let base = tempdir().unwrap();
        let _guard = ConfigBaseGuard::set(base.path().to_path_buf());
        config::save(&Settings {
            server_url: "http://10.1.1.1:8000".to_string(),
            timeout_secs: None,
        })
        .unwrap();
        let mut controller = EguiController::new(Settings::default());
        controller.load_configuration().unwrap();
        assert_eq!(controller.settings().server_url, "http://10.1.1.1:8000");
    }

    #[test]
    fn loaded_model_is_described() {
        let service = MockService::sequence(vec![
            json_response(r#"{"status": "healthy", "model_loaded": true, "model_type": "TensorFlow/Keras"}"#),
            json_response(MODEL_INFO_BODY),
        ]);
        let mut controller = EguiController::new(Settings {
            server_url: service.base_url(),
            timeout_secs: Some(10),
        });
        controller.check_server_health();
        controller.wait_for_job();

        assert_eq!(service.next_request().path, "/api/health");
        assert_eq!(service.next_request().path, "/api/model-info");
        let info = controller.ui.server.model_info.as_ref().unwrap();
        assert_eq!(info.feature_names.len(), 11);
        assert!(
            controller
                .ui
                .server
                .model_summary()
                .unwrap()
                .starts_with("Model input (None, 11): CRIM, ZN")
        );
        assert_ne!(controller.ui.status.tone, StatusTone::Warning);
    }

    #[test]
    fn unknown_model_features_raise_a_warning() {
        let service = MockService::sequence(vec![
            json_response(r#"{"status": "healthy", "model_loaded": true}"#),
            json_response(r#"{"feature_names": ["CRIM", "RAD"]}"#),
        ]);
        let mut controller = EguiController::new(Settings {
            server_url: service.base_url(),
            timeout_secs: Some(10),
        });
        controller.check_server_health();
        controller.wait_for_job();

        assert_eq!(controller.ui.status.tone, StatusTone::Warning);
        assert!(controller.ui.status.text.contains("RAD"));
    }

    #[test]
    fn model_info_failure_keeps_health_report() {
        let service = MockService::sequence(vec![
            json_response(r#"{"status": "healthy", "model_loaded": true}"#),
            http_response(500, None, "Model not loaded"),
        ]);
        let mut controller = EguiController::new(Settings {
            server_url: service.base_url(),
            timeout_secs: Some(10),
        });
        controller.check_server_health();
        controller.wait_for_job();

        assert!(matches!(
            controller.ui.server.health,
            ServerHealth::Reachable(_)
        ));
        assert_eq!(controller.ui.server.model_info, None);
    }

    #[test]
    fn saving_url_during_health_check_stays_checking_until_report_lands() {
        let base = tempdir().unwrap();
        let _guard = ConfigBaseGuard::set(base.path().to_path_buf());
        let (release, gate) = mpsc::channel();
        let old = MockService::respond_after(
            json_response(r#"{"status": "healthy", "model_loaded": false}"#),
            gate,
        );
        let mut controller = EguiController::new(Settings {
            server_url: old.base_url(),
            timeout_secs: Some(10),
        });
        controller.check_server_health();
        old.next_request();

        controller.ui.server.url_input = "http://predictor.internal:8080".to_string();
        controller.save_server_url();
        assert_eq!(controller.ui.server.health, ServerHealth::Checking);
        assert!(controller.has_pending_jobs());

        release.send(()).unwrap();
        controller.wait_for_job();
        assert_eq!(controller.ui.server.health, ServerHealth::Unknown);
        assert!(!controller.has_pending_jobs());
    }
}
