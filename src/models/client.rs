use serde::{Deserialize, Serialize};

use crate::models::cost::{CalculationResult, ConsultingInputs, CostInputs};
use crate::models::opportunity::Opportunity;
use crate::models::roi::RoiScenario;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Draft,
    Completed,
    Pending,
    Archived,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Draft => "draft",
            ClientStatus::Completed => "completed",
            ClientStatus::Pending => "pending",
            ClientStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(ClientStatus::Draft),
            "completed" => Some(ClientStatus::Completed),
            "pending" => Some(ClientStatus::Pending),
            "archived" => Some(ClientStatus::Archived),
            _ => None,
        }
    }

    /// Pending and archived are set by the user and survive saves;
    /// draft and completed are derived from the calculations.
    pub fn is_manual(&self) -> bool {
        matches!(self, ClientStatus::Pending | ClientStatus::Archived)
    }
}

impl Default for ClientStatus {
    fn default() -> Self {
        ClientStatus::Draft
    }
}

/// Contact and context fields from the first wizard step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub problem_statement: String,
}

/// Combined model output persisted with the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientCalculations {
    pub cost: CalculationResult,
    pub roi_scenarios: Vec<RoiScenario>,
    pub opportunities: Vec<Opportunity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    pub client_info: ClientInfo,
    pub cost_inputs: CostInputs,
    pub consulting_inputs: ConsultingInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculations: Option<ClientCalculations>,
    pub status: ClientStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientCreateInput {
    pub client_info: ClientInfo,
    #[serde(default)]
    pub cost_inputs: Option<CostInputs>,
    #[serde(default)]
    pub consulting_inputs: Option<ConsultingInputs>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdateInput {
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
    #[serde(default)]
    pub cost_inputs: Option<CostInputs>,
    #[serde(default)]
    pub consulting_inputs: Option<ConsultingInputs>,
    /// Pending/archived stick; draft/completed return the record to
    /// automatic derivation.
    #[serde(default)]
    pub status: Option<ClientStatus>,
}
