use serde::{Deserialize, Serialize};

use crate::models::cost::WasteCategory;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityPriority {
    High,
    Medium,
    Low,
}

impl OpportunityPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityPriority::High => "high",
            OpportunityPriority::Medium => "medium",
            OpportunityPriority::Low => "low",
        }
    }
}

/// A ranked waste-reduction recommendation tied to one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub category: WasteCategory,
    /// Human-readable category title, e.g. "Process Optimization".
    pub label: String,
    pub current_waste: i64,
    /// Share of total waste, rounded percent.
    pub impact_percentage: i64,
    pub potential_savings: i64,
    pub solution: String,
    pub time_to_implement: String,
    pub priority: OpportunityPriority,
}
