//! Serde view of XGBoost's JSON model format (`Booster.save_model("*.json")`).
//!
//! Only the fields needed for inference are declared; everything else is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct XgbModelFile {
    pub learner: Learner,
}

#[derive(Debug, Deserialize)]
pub(super) struct Learner {
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub gradient_booster: GradientBooster,
    pub learner_model_param: LearnerModelParam,
    pub objective: Objective,
}

#[derive(Debug, Deserialize)]
pub(super) struct GradientBooster {
    pub name: String,
    #[serde(default)]
    pub model: Option<GbTreeModel>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GbTreeModel {
    pub trees: Vec<TreeArtifact>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TreeArtifact {
    pub left_children: Vec<i32>,
    pub right_children: Vec<i32>,
    pub split_indices: Vec<u32>,
    pub split_conditions: Vec<f32>,
    pub default_left: Vec<Flag>,
    /// 0 for numerical splits, 1 for categorical ones. Missing in pre-1.6 models.
    #[serde(default)]
    pub split_type: Vec<u8>,
}

/// Older writers emit `default_left` as 0/1, newer ones as booleans.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub(super) enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    pub fn is_set(self) -> bool {
        match self {
            Flag::Bool(value) => value,
            Flag::Int(value) => value != 0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct LearnerModelParam {
    pub base_score: String,
    pub num_feature: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct Objective {
    pub name: String,
}
