use serde::{Deserialize, Serialize};

/// The nine fixed waste categories. The order of `ALL` is the order
/// the breakdown is built, serialized and charted in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum WasteCategory {
    ProcessInefficiencies,
    ExcessiveMeetings,
    CommunicationOverhead,
    ResourceUnderutilization,
    IdleTime,
    QualityRework,
    DelayPenalties,
    OpportunityCosts,
    PremiumResourceCosts,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 9] = [
        WasteCategory::ProcessInefficiencies,
        WasteCategory::ExcessiveMeetings,
        WasteCategory::CommunicationOverhead,
        WasteCategory::ResourceUnderutilization,
        WasteCategory::IdleTime,
        WasteCategory::QualityRework,
        WasteCategory::DelayPenalties,
        WasteCategory::OpportunityCosts,
        WasteCategory::PremiumResourceCosts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::ProcessInefficiencies => "processInefficiencies",
            WasteCategory::ExcessiveMeetings => "excessiveMeetings",
            WasteCategory::CommunicationOverhead => "communicationOverhead",
            WasteCategory::ResourceUnderutilization => "resourceUnderutilization",
            WasteCategory::IdleTime => "idleTime",
            WasteCategory::QualityRework => "qualityRework",
            WasteCategory::DelayPenalties => "delayPenalties",
            WasteCategory::OpportunityCosts => "opportunityCosts",
            WasteCategory::PremiumResourceCosts => "premiumResourceCosts",
        }
    }
}

/// Numeric project parameters collected by the cost wizard.
///
/// Ranges are advisory UI bounds; the model itself only rejects
/// negative or non-finite values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostInputs {
    /// Months.
    pub project_duration: f64,
    /// Headcount.
    pub team_size: f64,
    /// Blended $/hr.
    pub hourly_rate: f64,
    /// % of time lost to poor process.
    pub inefficiency_percentage: f64,
    pub meetings_per_week: f64,
    /// Hours.
    pub meeting_duration: f64,
    pub participants_per_meeting: f64,
    /// %.
    pub communication_overhead: f64,
    /// % (0-100).
    pub resource_utilization: f64,
    /// %.
    pub idle_time_percentage: f64,
    /// Fully loaded $/hr.
    pub resource_cost_per_hour: f64,
    /// % of work requiring rework.
    pub defect_rate: f64,
    /// Multiplier, >= 1 in practice.
    pub rework_cost_multiplier: f64,
    /// Display only, not used by the cost math.
    pub quality_assurance_hours: f64,
    /// % of schedule likely delayed.
    pub delay_percentage: f64,
    pub penalty_cost_per_day: f64,
    pub opportunity_cost_per_day: f64,
    /// Scale factor for annualized figures.
    pub projects_per_year: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            project_duration: 6.0,
            team_size: 8.0,
            hourly_rate: 85.0,
            inefficiency_percentage: 15.0,
            meetings_per_week: 12.0,
            meeting_duration: 1.0,
            participants_per_meeting: 4.0,
            communication_overhead: 20.0,
            resource_utilization: 75.0,
            idle_time_percentage: 12.0,
            resource_cost_per_hour: 110.0,
            defect_rate: 6.0,
            rework_cost_multiplier: 2.2,
            quality_assurance_hours: 160.0,
            delay_percentage: 25.0,
            penalty_cost_per_day: 800.0,
            opportunity_cost_per_day: 1500.0,
            projects_per_year: 4.0,
        }
    }
}

/// Consulting engagement parameters for the ROI projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultingInputs {
    pub consulting_fee: f64,
    pub support_cost: f64,
    /// Months, display only.
    pub implementation_timeframe: f64,
    /// % (0-100).
    pub expected_waste_reduction: f64,
    /// Display only.
    pub ongoing_support_months: f64,
}

impl Default for ConsultingInputs {
    fn default() -> Self {
        Self {
            consulting_fee: 75_000.0,
            support_cost: 25_000.0,
            implementation_timeframe: 6.0,
            expected_waste_reduction: 60.0,
            ongoing_support_months: 12.0,
        }
    }
}

/// Per-category waste dollars, each rounded independently before any
/// summation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WasteBreakdown {
    pub process_inefficiencies: i64,
    pub excessive_meetings: i64,
    pub communication_overhead: i64,
    pub resource_underutilization: i64,
    pub idle_time: i64,
    pub quality_rework: i64,
    pub delay_penalties: i64,
    pub opportunity_costs: i64,
    pub premium_resource_costs: i64,
}

impl WasteBreakdown {
    pub fn amount(&self, category: WasteCategory) -> i64 {
        match category {
            WasteCategory::ProcessInefficiencies => self.process_inefficiencies,
            WasteCategory::ExcessiveMeetings => self.excessive_meetings,
            WasteCategory::CommunicationOverhead => self.communication_overhead,
            WasteCategory::ResourceUnderutilization => self.resource_underutilization,
            WasteCategory::IdleTime => self.idle_time,
            WasteCategory::QualityRework => self.quality_rework,
            WasteCategory::DelayPenalties => self.delay_penalties,
            WasteCategory::OpportunityCosts => self.opportunity_costs,
            WasteCategory::PremiumResourceCosts => self.premium_resource_costs,
        }
    }

    pub fn set_amount(&mut self, category: WasteCategory, amount: i64) {
        match category {
            WasteCategory::ProcessInefficiencies => self.process_inefficiencies = amount,
            WasteCategory::ExcessiveMeetings => self.excessive_meetings = amount,
            WasteCategory::CommunicationOverhead => self.communication_overhead = amount,
            WasteCategory::ResourceUnderutilization => self.resource_underutilization = amount,
            WasteCategory::IdleTime => self.idle_time = amount,
            WasteCategory::QualityRework => self.quality_rework = amount,
            WasteCategory::DelayPenalties => self.delay_penalties = amount,
            WasteCategory::OpportunityCosts => self.opportunity_costs = amount,
            WasteCategory::PremiumResourceCosts => self.premium_resource_costs = amount,
        }
    }

    /// Category/amount pairs in fixed breakdown order.
    pub fn entries(&self) -> [(WasteCategory, i64); 9] {
        let mut entries = [(WasteCategory::ProcessInefficiencies, 0); 9];
        for (slot, category) in entries.iter_mut().zip(WasteCategory::ALL) {
            *slot = (category, self.amount(category));
        }
        entries
    }

    pub fn total(&self) -> i64 {
        WasteCategory::ALL
            .iter()
            .map(|category| self.amount(*category))
            .sum()
    }
}

/// Derived, rounded dollar metrics for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CostMetrics {
    pub efficient_project_cost: i64,
    pub current_project_cost: i64,
    pub total_waste: i64,
    pub waste_percentage: i64,
    pub monthly_waste: i64,
    pub daily_waste: i64,
    pub waste_per_resource: i64,
    pub efficiency_rating: i64,
    pub potential_savings: i64,
    pub monthly_burn_rate: i64,
    pub effective_hourly_rate: i64,
    pub annual_waste: i64,
    pub annual_potential_savings: i64,
    pub annual_current_cost: i64,
    pub annual_efficient_cost: i64,
}

/// Immutable output of one cost computation. All fields are rounded
/// integers, so persistence round-trips are bit-identical.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_cost: i64,
    pub efficient_cost: i64,
    pub total_waste: i64,
    pub waste_breakdown: WasteBreakdown,
    pub metrics: CostMetrics,
}
