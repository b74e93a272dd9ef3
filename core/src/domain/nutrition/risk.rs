use crate::domain::nutrition::entities::NutritionInput;

/// Fixed nutritional thresholds, listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskRule {
    HighFat,
    HighSodium,
    HighSugar,
    LowFiberHighFat,
}

impl RiskRule {
    pub const ALL: [RiskRule; 4] = [
        RiskRule::HighFat,
        RiskRule::HighSodium,
        RiskRule::HighSugar,
        RiskRule::LowFiberHighFat,
    ];

    pub fn applies(&self, input: &NutritionInput) -> bool {
        match self {
            RiskRule::HighFat => input.fat > 20.0,
            RiskRule::HighSodium => input.sodium > 500,
            RiskRule::HighSugar => input.sugars > 25.0,
            RiskRule::LowFiberHighFat => input.fiber < 2.0 && input.fat > 15.0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskRule::HighFat => "High Fat: Not suitable for heart patients.",
            RiskRule::HighSodium => "High Sodium: Risk of hypertension.",
            RiskRule::HighSugar => "High Sugar: Risk for diabetes.",
            RiskRule::LowFiberHighFat => "Low Fiber + High Fat: Digestive risks.",
        }
    }
}

/// Advisories triggered by an input, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskReport(Vec<String>);

impl RiskReport {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

/// Evaluates every rule independently against the raw input.
pub fn assess_risks(input: &NutritionInput) -> RiskReport {
    RiskReport(
        RiskRule::ALL
            .iter()
            .filter(|rule| rule.applies(input))
            .map(|rule| rule.message().to_string())
            .collect(),
    )
}
