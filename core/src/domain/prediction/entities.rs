use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, nutrition::risk::RiskReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum HealthLabel {
    Healthy,
    Unhealthy,
}

impl HealthLabel {
    /// 0 is the healthy class; any other raw label counts as unhealthy.
    pub fn from_raw(raw: u8) -> Self {
        if raw == 0 {
            HealthLabel::Healthy
        } else {
            HealthLabel::Unhealthy
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HealthLabel::Healthy => "Healthy",
            HealthLabel::Unhealthy => "Unhealthy",
        }
    }
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub label: HealthLabel,
    pub risks: RiskReport,
}

/// Shape of the loaded classifier, reported by readiness checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSummary {
    pub features: usize,
    pub trees: usize,
}

/// Classifier slot decided once at startup.
#[derive(Debug)]
pub enum ModelState<C> {
    Ready(C),
    Unavailable { reason: String },
}

impl<C> ModelState<C> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        ModelState::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }

    pub fn classifier(&self) -> Result<&C, CoreError> {
        match self {
            ModelState::Ready(classifier) => Ok(classifier),
            ModelState::Unavailable { reason } => Err(CoreError::ModelUnavailable(reason.clone())),
        }
    }
}
