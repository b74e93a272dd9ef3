use std::path::PathBuf;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriScanConfig {
    pub model: ModelConfig,
}

#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub path: PathBuf,
    /// Abort startup instead of serving without a classifier.
    pub required: bool,
}
