use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoiScenarioKind {
    Conservative,
    Realistic,
    Optimistic,
}

impl RoiScenarioKind {
    pub const ALL: [RoiScenarioKind; 3] = [
        RoiScenarioKind::Conservative,
        RoiScenarioKind::Realistic,
        RoiScenarioKind::Optimistic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoiScenarioKind::Conservative => "conservative",
            RoiScenarioKind::Realistic => "realistic",
            RoiScenarioKind::Optimistic => "optimistic",
        }
    }

    /// Display name used on the dashboard and in exports.
    pub fn label(&self) -> &'static str {
        match self {
            RoiScenarioKind::Conservative => "Conservative Impact",
            RoiScenarioKind::Realistic => "Realistic Impact",
            RoiScenarioKind::Optimistic => "Optimistic Impact",
        }
    }
}

/// One what-if projection of consulting payoff under a given
/// waste-reduction assumption.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoiScenario {
    pub kind: RoiScenarioKind,
    pub name: String,
    pub description: String,
    /// Reduction applied to per-project waste, as a fraction (0-0.9).
    pub waste_reduction: f64,
    pub annual_savings: i64,
    pub net_savings: i64,
    pub roi_percentage: i64,
    /// None when the engagement never pays back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payback_months: Option<i64>,
    pub consulting_fee: i64,
    pub support_cost: i64,
    pub total_investment: i64,
}
