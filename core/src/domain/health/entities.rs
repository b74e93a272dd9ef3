use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessStatus {
    Ready,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelHealthStatus {
    pub status: ReadinessStatus,
    pub model_loaded: bool,
    pub reason: Option<String>,
    pub features: Option<usize>,
    pub trees: Option<usize>,
}

impl ModelHealthStatus {
    pub fn is_ready(&self) -> bool {
        self.status == ReadinessStatus::Ready
    }
}
