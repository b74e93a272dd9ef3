use crate::domain::nutrition::entities::NutritionInput;

/// Column names the classifier was trained on, in training order.
pub const FEATURE_COLUMNS: [&str; 18] = [
    "Calories (kcal)",
    "Protein (g)",
    "Carbohydrates (g)",
    "Fat (g)",
    "Fiber (g)",
    "Sugars (g)",
    "Sodium (mg)",
    "Cholesterol (mg)",
    "Water_Intake (ml)",
    "Meal_Type_Dinner",
    "Meal_Type_Lunch",
    "Meal_Type_Snack",
    "Category_Dairy",
    "Category_Fruits",
    "Category_Grains",
    "Category_Meat",
    "Category_Snacks",
    "Category_Vegetables",
];

/// Input values keyed by trained column name. Flags are encoded as 0.0 / 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFeatureRow {
    values: Vec<(String, f64)>,
}

impl ModelFeatureRow {
    pub fn new(values: Vec<(String, f64)>) -> Self {
        Self { values }
    }

    /// Looks a column up by name; position in the row is irrelevant.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| *value)
    }

    pub fn columns(&self) -> Vec<&str> {
        self.values.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

impl From<&NutritionInput> for ModelFeatureRow {
    fn from(input: &NutritionInput) -> Self {
        let values = [
            input.calories as f64,
            input.protein,
            input.carbohydrates,
            input.fat,
            input.fiber,
            input.sugars,
            input.sodium as f64,
            input.cholesterol as f64,
            input.water_intake as f64,
            flag(input.meal_type.dinner),
            flag(input.meal_type.lunch),
            flag(input.meal_type.snack),
            flag(input.category.dairy),
            flag(input.category.fruits),
            flag(input.category.grains),
            flag(input.category.meat),
            flag(input.category.snacks),
            flag(input.category.vegetables),
        ];

        Self::new(
            FEATURE_COLUMNS
                .iter()
                .zip(values)
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}
