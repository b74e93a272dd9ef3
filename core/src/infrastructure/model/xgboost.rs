use std::path::Path;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::feature_row::{FEATURE_COLUMNS, ModelFeatureRow},
    prediction::{entities::ModelSummary, ports::Classifier},
};

use super::artifact::{TreeArtifact, XgbModelFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryObjective {
    Logistic,
    LogitRaw,
    Hinge,
}

impl BinaryObjective {
    fn parse(name: &str) -> Result<Self, CoreError> {
        match name {
            "binary:logistic" => Ok(BinaryObjective::Logistic),
            "binary:logitraw" => Ok(BinaryObjective::LogitRaw),
            "binary:hinge" => Ok(BinaryObjective::Hinge),
            other => Err(CoreError::InvalidArtifact(format!(
                "unsupported objective '{other}', expected a binary classifier"
            ))),
        }
    }

    /// Converts the stored `base_score` into margin space.
    fn base_margin(&self, base_score: f64) -> Result<f64, CoreError> {
        match self {
            BinaryObjective::Logistic => {
                if !(base_score > 0.0 && base_score < 1.0) {
                    return Err(CoreError::InvalidArtifact(format!(
                        "base_score {base_score} is not a probability"
                    )));
                }
                Ok((base_score / (1.0 - base_score)).ln())
            }
            BinaryObjective::LogitRaw | BinaryObjective::Hinge => Ok(base_score),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Split {
        feature: usize,
        threshold: f32,
        default_left: bool,
        left: usize,
        right: usize,
    },
    Leaf(f32),
}

#[derive(Debug, Clone, PartialEq)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn from_artifact(
        index: usize,
        artifact: TreeArtifact,
        num_features: usize,
    ) -> Result<Self, CoreError> {
        let len = artifact.left_children.len();
        let invalid = |reason: String| CoreError::InvalidArtifact(format!("tree {index}: {reason}"));

        if len == 0 {
            return Err(invalid("has no nodes".to_string()));
        }
        if artifact.right_children.len() != len
            || artifact.split_indices.len() != len
            || artifact.split_conditions.len() != len
            || artifact.default_left.len() != len
        {
            return Err(invalid("node arrays have different lengths".to_string()));
        }
        if !artifact.split_type.is_empty() && artifact.split_type.len() != len {
            return Err(invalid("split_type length does not match node count".to_string()));
        }
        if let Some(id) = artifact.split_type.iter().position(|kind| *kind != 0) {
            return Err(invalid(format!(
                "node {id} is a categorical split, only numerical splits are supported"
            )));
        }

        let mut nodes = Vec::with_capacity(len);
        for id in 0..len {
            let (left, right) = (artifact.left_children[id], artifact.right_children[id]);
            if left == -1 && right == -1 {
                nodes.push(Node::Leaf(artifact.split_conditions[id]));
                continue;
            }

            // Children are always allocated after their parent, which rules out cycles.
            let child = |raw: i32| -> Result<usize, CoreError> {
                usize::try_from(raw)
                    .ok()
                    .filter(|child| *child > id && *child < len)
                    .ok_or_else(|| invalid(format!("node {id} has invalid child {raw}")))
            };

            let feature = artifact.split_indices[id] as usize;
            if feature >= num_features {
                return Err(invalid(format!(
                    "node {id} splits on feature {feature}, model has {num_features}"
                )));
            }

            nodes.push(Node::Split {
                feature,
                threshold: artifact.split_conditions[id],
                default_left: artifact.default_left[id].is_set(),
                left: child(left)?,
                right: child(right)?,
            });
        }

        Ok(Self { nodes })
    }

    fn leaf_value(&self, features: &[f32]) -> f32 {
        let mut id = 0;
        loop {
            match &self.nodes[id] {
                Node::Leaf(value) => return *value,
                Node::Split {
                    feature,
                    threshold,
                    default_left,
                    left,
                    right,
                } => {
                    let value = features[*feature];
                    let go_left = if value.is_nan() {
                        *default_left
                    } else {
                        value < *threshold
                    };
                    id = if go_left { *left } else { *right };
                }
            }
        }
    }
}

/// Gradient-boosted tree ensemble loaded from an XGBoost JSON model.
#[derive(Debug, Clone)]
pub struct XgbClassifier {
    feature_names: Vec<String>,
    objective: BinaryObjective,
    base_margin: f64,
    trees: Vec<Tree>,
}

impl XgbClassifier {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::InvalidArtifact(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let file: XgbModelFile = serde_json::from_str(raw)
            .map_err(|e| CoreError::InvalidArtifact(format!("malformed model JSON: {}", e)))?;
        let learner = file.learner;

        let objective = BinaryObjective::parse(&learner.objective.name)?;

        if learner.gradient_booster.name != "gbtree" {
            return Err(CoreError::InvalidArtifact(format!(
                "unsupported booster '{}'",
                learner.gradient_booster.name
            )));
        }

        let num_features: usize = learner
            .learner_model_param
            .num_feature
            .trim()
            .parse()
            .map_err(|_| {
                CoreError::InvalidArtifact(format!(
                    "num_feature '{}' is not a count",
                    learner.learner_model_param.num_feature
                ))
            })?;

        let feature_names = if learner.feature_names.is_empty() {
            FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect()
        } else {
            learner.feature_names
        };
        if feature_names.len() != num_features {
            return Err(CoreError::InvalidArtifact(format!(
                "model declares {} features but names {}",
                num_features,
                feature_names.len()
            )));
        }

        let base_score = parse_base_score(&learner.learner_model_param.base_score)?;
        let base_margin = objective.base_margin(base_score)?;

        let trees = learner
            .gradient_booster
            .model
            .map(|model| model.trees)
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, tree)| Tree::from_artifact(index, tree, num_features))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            feature_names,
            objective,
            base_margin,
            trees,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Raw ensemble output before the objective's link function.
    pub fn margin(&self, row: &ModelFeatureRow) -> Result<f64, CoreError> {
        let features = self
            .feature_names
            .iter()
            .map(|name| {
                row.get(name).map(|value| value as f32).ok_or_else(|| {
                    CoreError::PredictionFailed(format!(
                        "feature row is missing column '{name}'"
                    ))
                })
            })
            .collect::<Result<Vec<f32>, _>>()?;

        Ok(self.base_margin
            + self
                .trees
                .iter()
                .map(|tree| f64::from(tree.leaf_value(&features)))
                .sum::<f64>())
    }

    /// Positive-class probability for a margin; only `binary:logistic` has one.
    fn probability(&self, margin: f64) -> Option<f64> {
        match self.objective {
            BinaryObjective::Logistic => Some(1.0 / (1.0 + (-margin).exp())),
            BinaryObjective::LogitRaw | BinaryObjective::Hinge => None,
        }
    }
}

impl Classifier for XgbClassifier {
    fn predict(&self, row: &ModelFeatureRow) -> Result<u8, CoreError> {
        let margin = self.margin(row)?;
        tracing::debug!(margin, probability = ?self.probability(margin), "ensemble output");

        // margin > 0 is probability > 0.5 for logistic and the hinge decision rule.
        Ok(u8::from(margin > 0.0))
    }

    fn summary(&self) -> ModelSummary {
        ModelSummary {
            features: self.feature_names.len(),
            trees: self.trees.len(),
        }
    }
}

/// Accepts both `"5E-1"` and the bracketed vector form `"[5E-1]"`.
fn parse_base_score(raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim().trim_start_matches('[').trim_end_matches(']');
    trimmed
        .split(',')
        .next()
        .and_then(|first| first.trim().parse::<f64>().ok())
        .ok_or_else(|| CoreError::InvalidArtifact(format!("invalid base_score '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::entities::NutritionInput;
    use serde_json::{Value, json};

    const FAT: usize = 3;
    const SUGARS: usize = 5;

    fn model_json(base_score: &str, objective: &str, trees: Vec<Value>) -> String {
        json!({
            "learner": {
                "feature_names": FEATURE_COLUMNS,
                "gradient_booster": {
                    "name": "gbtree",
                    "model": {
                        "gbtree_model_param": { "num_trees": trees.len().to_string() },
                        "tree_info": vec![0; trees.len()],
                        "trees": trees
                    }
                },
                "learner_model_param": {
                    "base_score": base_score,
                    "num_class": "0",
                    "num_feature": "18"
                },
                "objective": { "name": objective }
            },
            "version": [2, 1, 0]
        })
        .to_string()
    }

    fn stump(feature: usize, threshold: f32, left: f32, right: f32, default_left: Value) -> Value {
        json!({
            "left_children": [1, -1, -1],
            "right_children": [2, -1, -1],
            "split_indices": [feature, 0, 0],
            "split_conditions": [threshold, left, right],
            "default_left": default_left,
            "base_weights": [0.0, left, right]
        })
    }

    fn two_stumps() -> Vec<Value> {
        vec![
            stump(FAT, 20.0, -0.5, 0.8, json!([0, 0, 0])),
            stump(SUGARS, 25.0, -0.3, 0.4, json!([false, false, false])),
        ]
    }

    fn row(fat: f64, sugars: f64) -> ModelFeatureRow {
        ModelFeatureRow::from(&NutritionInput {
            fat,
            sugars,
            ..Default::default()
        })
    }

    #[test]
    fn test_margin_sums_leaves_over_base() {
        let model =
            XgbClassifier::from_json_str(&model_json("5E-1", "binary:logistic", two_stumps()))
                .unwrap();

        let margin = model.margin(&row(25.0, 10.0)).unwrap();
        assert!((margin - 0.5).abs() < 1e-6);
        assert_eq!(model.predict(&row(25.0, 10.0)).unwrap(), 1);
        assert_eq!(model.predict(&row(10.0, 10.0)).unwrap(), 0);
        assert_eq!(model.predict(&row(10.0, 30.0)).unwrap(), 0);
    }

    #[test]
    fn test_split_condition_sends_equal_values_right() {
        let model =
            XgbClassifier::from_json_str(&model_json("5E-1", "binary:logistic", two_stumps()))
                .unwrap();

        let margin = model.margin(&row(20.0, 0.0)).unwrap();
        assert!((margin - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bracketed_base_score_is_logit_transformed() {
        let model = XgbClassifier::from_json_str(&model_json("[6E-1]", "binary:logistic", vec![]))
            .unwrap();

        let margin = model.margin(&row(0.0, 0.0)).unwrap();
        assert!((margin - (0.6f64 / 0.4).ln()).abs() < 1e-9);
        assert_eq!(model.predict(&row(0.0, 0.0)).unwrap(), 1);
        let probability = model.probability(margin).unwrap();
        assert!((probability - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_raw_objective_uses_base_score_as_margin() {
        let model =
            XgbClassifier::from_json_str(&model_json("-2E-1", "binary:logitraw", vec![])).unwrap();

        let margin = model.margin(&row(0.0, 0.0)).unwrap();
        assert!((margin + 0.2).abs() < 1e-9);
        assert_eq!(model.probability(margin), None);
    }

    #[test]
    fn test_missing_value_follows_default_direction() {
        let trees = vec![stump(FAT, 20.0, -1.0, 1.0, json!([1, 0, 0]))];
        let model =
            XgbClassifier::from_json_str(&model_json("5E-1", "binary:logistic", trees)).unwrap();

        let mut values: Vec<(String, f64)> = FEATURE_COLUMNS
            .iter()
            .map(|c| (c.to_string(), 0.0))
            .collect();
        values[FAT].1 = f64::NAN;

        let margin = model.margin(&ModelFeatureRow::new(values)).unwrap();
        assert!((margin + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_row_missing_a_column_fails_prediction() {
        let model =
            XgbClassifier::from_json_str(&model_json("5E-1", "binary:logistic", two_stumps()))
                .unwrap();
        let partial = ModelFeatureRow::new(vec![("Fat (g)".to_string(), 30.0)]);

        let err = model.predict(&partial).unwrap_err();
        assert!(matches!(err, CoreError::PredictionFailed(msg) if msg.contains("Calories (kcal)")));
    }

    #[test]
    fn test_absent_feature_names_default_to_trained_columns() {
        let mut raw: Value =
            serde_json::from_str(&model_json("5E-1", "binary:logistic", two_stumps())).unwrap();
        raw["learner"]
            .as_object_mut()
            .unwrap()
            .remove("feature_names");

        let model = XgbClassifier::from_json_str(&raw.to_string()).unwrap();
        assert_eq!(model.feature_names().len(), FEATURE_COLUMNS.len());
        assert_eq!(model.summary(), ModelSummary { features: 18, trees: 2 });
    }

    #[test]
    fn test_rejects_non_binary_objective() {
        let err = XgbClassifier::from_json_str(&model_json("5E-1", "reg:squarederror", vec![]))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArtifact(_)));
    }

    #[test]
    fn test_rejects_out_of_range_child() {
        let tree = json!({
            "left_children": [1, -1, -1],
            "right_children": [7, -1, -1],
            "split_indices": [FAT, 0, 0],
            "split_conditions": [20.0, -0.5, 0.5],
            "default_left": [0, 0, 0]
        });
        let err = XgbClassifier::from_json_str(&model_json("5E-1", "binary:logistic", vec![tree]))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArtifact(msg) if msg.contains("invalid child 7")));
    }

    #[test]
    fn test_rejects_backwards_child_reference() {
        let tree = json!({
            "left_children": [1, 0, -1],
            "right_children": [2, 2, -1],
            "split_indices": [FAT, FAT, 0],
            "split_conditions": [20.0, 10.0, 0.5],
            "default_left": [0, 0, 0]
        });
        let err = XgbClassifier::from_json_str(&model_json("5E-1", "binary:logistic", vec![tree]))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArtifact(_)));
    }

    #[test]
    fn test_rejects_categorical_split() {
        let mut tree = stump(15, 1.0, -0.5, 0.5, json!([0, 0, 0]));
        tree["split_type"] = json!([1, 0, 0]);
        tree["categories"] = json!([1]);
        tree["categories_nodes"] = json!([0]);
        tree["categories_segments"] = json!([0]);
        tree["categories_sizes"] = json!([1]);

        let err = XgbClassifier::from_json_str(&model_json("5E-1", "binary:logistic", vec![tree]))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArtifact(msg) if msg.contains("categorical")));
    }

    #[test]
    fn test_accepts_explicit_numerical_split_types() {
        let mut tree = stump(FAT, 20.0, -0.5, 0.8, json!([0, 0, 0]));
        tree["split_type"] = json!([0, 0, 0]);

        let model =
            XgbClassifier::from_json_str(&model_json("5E-1", "binary:logistic", vec![tree]))
                .unwrap();
        assert_eq!(model.predict(&row(25.0, 0.0)).unwrap(), 1);
    }

    #[test]
    fn test_rejects_unknown_split_feature() {
        let trees = vec![stump(42, 1.0, 0.0, 0.0, json!([0, 0, 0]))];
        let err = XgbClassifier::from_json_str(&model_json("5E-1", "binary:logistic", trees))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArtifact(_)));
    }

    #[test]
    fn test_rejects_logistic_base_score_outside_unit_interval() {
        let err = XgbClassifier::from_json_str(&model_json("1E0", "binary:logistic", vec![]))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidArtifact(_)));
    }

    #[test]
    fn test_missing_file_is_invalid_artifact() {
        let err = XgbClassifier::from_path("/nonexistent/health_nutrition_model.json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidArtifact(msg) if msg.contains("cannot read")));
    }

    #[test]
    fn test_bundled_model_loads() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../models/health_nutrition_model.json"
        );
        let model = XgbClassifier::from_path(path).unwrap();
        assert_eq!(model.summary().features, FEATURE_COLUMNS.len());

        let label = model.predict(&ModelFeatureRow::from(&NutritionInput::default()));
        assert!(matches!(label, Ok(0) | Ok(1)));
    }
}
