//! Housing features and the client for the remote price prediction service.

pub mod api;
pub mod features;

pub use api::{ModelInfo, PredictError, PredictionResult, PredictorClient, ServiceHealth};
pub use features::{Field, HousingFeatures, InputHint, UnknownField};
