use nutriscan_core::domain::nutrition::{CategoryFlags, MealTypeFlags, NutritionInput};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Prediction request body. Every field is required; extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictRequest {
    #[serde(rename = "Calories", deserialize_with = "whole_number")]
    #[schema(example = 350)]
    pub calories: i64,
    #[serde(rename = "Protein")]
    pub protein: f64,
    #[serde(rename = "Carbohydrates")]
    pub carbohydrates: f64,
    #[serde(rename = "Fat")]
    pub fat: f64,
    #[serde(rename = "Fiber")]
    pub fiber: f64,
    #[serde(rename = "Sugars")]
    pub sugars: f64,
    #[serde(rename = "Sodium", deserialize_with = "whole_number")]
    pub sodium: i64,
    #[serde(rename = "Cholesterol", deserialize_with = "whole_number")]
    pub cholesterol: i64,
    #[serde(rename = "Water_Intake", deserialize_with = "whole_number")]
    pub water_intake: i64,
    #[serde(rename = "Meal_Type_Dinner")]
    pub meal_type_dinner: bool,
    #[serde(rename = "Meal_Type_Lunch")]
    pub meal_type_lunch: bool,
    #[serde(rename = "Meal_Type_Snack")]
    pub meal_type_snack: bool,
    #[serde(rename = "Category_Dairy")]
    pub category_dairy: bool,
    #[serde(rename = "Category_Fruits")]
    pub category_fruits: bool,
    #[serde(rename = "Category_Grains")]
    pub category_grains: bool,
    #[serde(rename = "Category_Meat")]
    pub category_meat: bool,
    #[serde(rename = "Category_Snacks")]
    pub category_snacks: bool,
    #[serde(rename = "Category_Vegetables")]
    pub category_vegetables: bool,
}

/// Integer fields also accept floats with no fractional part, e.g. `2000.0`.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(value) => Ok(value),
        Number::Float(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        Number::Float(value) => Err(serde::de::Error::custom(format!(
            "expected a whole number, got {value}"
        ))),
    }
}

impl From<PredictRequest> for NutritionInput {
    fn from(request: PredictRequest) -> Self {
        Self {
            calories: request.calories,
            protein: request.protein,
            carbohydrates: request.carbohydrates,
            fat: request.fat,
            fiber: request.fiber,
            sugars: request.sugars,
            sodium: request.sodium,
            cholesterol: request.cholesterol,
            water_intake: request.water_intake,
            meal_type: MealTypeFlags {
                dinner: request.meal_type_dinner,
                lunch: request.meal_type_lunch,
                snack: request.meal_type_snack,
            },
            category: CategoryFlags {
                dairy: request.category_dairy,
                fruits: request.category_fruits,
                grains: request.category_grains,
                meat: request.category_meat,
                snacks: request.category_snacks,
                vegetables: request.category_vegetables,
            },
        }
    }
}
