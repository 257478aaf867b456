use crate::predictor::{PredictError, PredictionResult};

/// Identifies one submission so late responses can be matched or discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// What the result panel has to show.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Outcome {
    /// Nothing submitted yet.
    #[default]
    Empty,
    /// The latest completed submission succeeded.
    Estimate(PredictionResult),
    /// The latest completed submission failed. `last_estimate` is the estimate
    /// that was on screen before the failure.
    Failed {
        message: String,
        last_estimate: Option<PredictionResult>,
    },
}

/// Prediction outcome and in-flight request, kept together so a stale error
/// and a fresh estimate can never both be current.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    outcome: Outcome,
    in_flight: Option<RequestId>,
    last_issued: u64,
}

impl SubmissionState {
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The most recent successful estimate, including one hidden behind a later error.
    pub fn estimate(&self) -> Option<&PredictionResult> {
        match &self.outcome {
            Outcome::Estimate(result) => Some(result),
            Outcome::Failed { last_estimate, .. } => last_estimate.as_ref(),
            Outcome::Empty => None,
        }
    }

    /// Start a submission: clears any error and marks a request in flight.
    ///
    /// Returns `None` while another request is still in flight.
    pub fn begin(&mut self) -> Option<RequestId> {
        if self.in_flight.is_some() {
            return None;
        }
        self.clear_error();
        self.last_issued += 1;
        let id = RequestId(self.last_issued);
        self.in_flight = Some(id);
        Some(id)
    }

    /// Apply the result of request `id`. Returns `false` and changes nothing
    /// when `id` is not the request currently in flight.
    pub fn complete(
        &mut self,
        id: RequestId,
        result: Result<PredictionResult, PredictError>,
    ) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }
        self.in_flight = None;
        self.outcome = match result {
            Ok(estimate) => Outcome::Estimate(estimate),
            Err(err) => Outcome::Failed {
                message: err.to_string(),
                last_estimate: self.estimate().cloned(),
            },
        };
        true
    }

    /// Stop waiting for the in-flight request; its result will be ignored.
    pub fn abandon(&mut self) -> Option<RequestId> {
        self.in_flight.take()
    }

    fn clear_error(&mut self) {
        self.outcome = match std::mem::take(&mut self.outcome) {
            Outcome::Failed { last_estimate, .. } => {
                last_estimate.map_or(Outcome::Empty, Outcome::Estimate)
            }
            other => other,
        };
    }
}
