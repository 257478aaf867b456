use crate::predictor::{ModelInfo, ServiceHealth};

/// Last known reachability of the prediction service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ServerHealth {
    #[default]
    Unknown,
    Checking,
    Reachable(ServiceHealth),
    Unreachable(String),
}

/// Server settings editor and health indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerState {
    /// Text of the server URL field; applied on save.
    pub url_input: String,
    pub health: ServerHealth,
    /// Description of the loaded model, from the last successful health check.
    pub model_info: Option<ModelInfo>,
}

impl ServerState {
    pub fn model_summary(&self) -> Option<String> {
        let info = self.model_info.as_ref()?;
        let shape = info.input_shape.as_deref().unwrap_or("unknown");
        Some(format!(
            "Model input {shape}: {}",
            info.feature_names.join(", ")
        ))
    }
}

impl ServerHealth {
    pub fn summary(&self) -> String {
        match self {
            ServerHealth::Unknown => "Server: not checked".to_string(),
            ServerHealth::Checking => "Server: checking…".to_string(),
            ServerHealth::Reachable(health) => {
                let model = if health.model_loaded {
                    health.model_type.as_deref().unwrap_or("model loaded")
                } else {
                    "no model loaded"
                };
                format!("Server: {} ({model})", health.status)
            }
            ServerHealth::Unreachable(err) => format!("Server: unreachable ({err})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_model_when_loaded() {
        let health = ServerHealth::Reachable(ServiceHealth {
            status: "healthy".into(),
            model_loaded: true,
            model_type: Some("TensorFlow/Keras".into()),
        });
        assert_eq!(health.summary(), "Server: healthy (TensorFlow/Keras)");
    }

    #[test]
    fn summary_flags_missing_model() {
        let health = ServerHealth::Reachable(ServiceHealth {
            status: "healthy".into(),
            model_loaded: false,
            model_type: None,
        });
        assert_eq!(health.summary(), "Server: healthy (no model loaded)");
    }

    #[test]
    fn model_summary_lists_shape_and_features() {
        let mut server = ServerState::default();
        assert_eq!(server.model_summary(), None);
        server.model_info = Some(ModelInfo {
            input_shape: Some("(None, 11)".into()),
            feature_names: vec!["CRIM".into(), "ZN".into()],
            ..ModelInfo::default()
        });
        assert_eq!(
            server.model_summary().as_deref(),
            Some("Model input (None, 11): CRIM, ZN")
        );
    }
}
