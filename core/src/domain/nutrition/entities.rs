/// Nutritional attributes of a single food item, as submitted by a client.
///
/// Measurements are expected to be non-negative but nothing enforces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionInput {
    pub calories: i64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugars: f64,
    pub sodium: i64,
    pub cholesterol: i64,
    pub water_intake: i64,
    pub meal_type: MealTypeFlags,
    pub category: CategoryFlags,
}

/// One-hot meal type. Breakfast is the implicit baseline (all false).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MealTypeFlags {
    pub dinner: bool,
    pub lunch: bool,
    pub snack: bool,
}

/// One-hot food category. Beverages are the implicit baseline (all false).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFlags {
    pub dairy: bool,
    pub fruits: bool,
    pub grains: bool,
    pub meat: bool,
    pub snacks: bool,
    pub vegetables: bool,
}
