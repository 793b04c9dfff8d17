use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::cost::{
    CalculationResult, CostInputs, CostMetrics, WasteBreakdown, WasteCategory,
};

pub const WORKING_DAYS_PER_MONTH: f64 = 22.0;
pub const WORKING_HOURS_PER_DAY: f64 = 8.0;
const WEEKS_PER_MONTH: f64 = 4.33;
/// Share of total meeting hours counted as excessive.
const EXCESSIVE_MEETING_SHARE: f64 = 0.15;
/// Utilization below this percentage counts as waste.
const UTILIZATION_THRESHOLD: f64 = 85.0;
/// Idle time up to this percentage is considered normal.
const NORMAL_IDLE_PERCENTAGE: f64 = 5.0;
/// Premium over the blended rate that triggers the premium charge.
const PREMIUM_RATE_TRIGGER: f64 = 10.0;
/// Share of working hours billed at the premium when triggered.
const PREMIUM_HOURS_SHARE: f64 = 0.1;
/// Assumed recoverable share of identified waste.
pub const RECOVERABLE_SHARE: f64 = 0.7;

/// Turns project inputs into the cost breakdown and dashboard metrics.
///
/// Deterministic and free of I/O. Negative or non-finite fields are
/// rejected; zero values are legal and every ratio with a zero
/// denominator resolves to 0 so the output is always well-formed.
pub fn compute_costs(inputs: &CostInputs) -> AppResult<CalculationResult> {
    validate_inputs(inputs)?;

    let total_working_hours =
        inputs.project_duration * WORKING_DAYS_PER_MONTH * WORKING_HOURS_PER_DAY * inputs.team_size;
    let efficient_labor_cost = total_working_hours * inputs.hourly_rate;

    let mut breakdown = WasteBreakdown::default();
    for category in WasteCategory::ALL {
        let cost = category_cost(category, inputs, total_working_hours);
        breakdown.set_amount(category, round_dollars(cost));
    }

    let total_waste = breakdown.total();
    let current_project_cost = round_dollars(efficient_labor_cost) + total_waste;

    let metrics = build_metrics(
        inputs,
        total_working_hours,
        efficient_labor_cost,
        total_waste,
        current_project_cost,
    );

    debug!(
        target: "app::model",
        total_working_hours,
        efficient_labor_cost,
        total_waste,
        total_cost = current_project_cost,
        "cost model evaluated"
    );

    Ok(CalculationResult {
        total_cost: current_project_cost,
        efficient_cost: round_dollars(efficient_labor_cost),
        total_waste,
        waste_breakdown: breakdown,
        metrics,
    })
}

/// Dollar cost of a single waste category, before rounding.
fn category_cost(category: WasteCategory, inputs: &CostInputs, total_working_hours: f64) -> f64 {
    match category {
        WasteCategory::ProcessInefficiencies => {
            total_working_hours * (inputs.inefficiency_percentage / 100.0) * inputs.hourly_rate
        }
        WasteCategory::ExcessiveMeetings => {
            let project_weeks = inputs.project_duration * WEEKS_PER_MONTH;
            let weekly_meeting_hours = inputs.meetings_per_week
                * inputs.meeting_duration
                * inputs.participants_per_meeting;
            weekly_meeting_hours * project_weeks * EXCESSIVE_MEETING_SHARE * inputs.hourly_rate
        }
        WasteCategory::CommunicationOverhead => {
            total_working_hours * (inputs.communication_overhead / 100.0) * inputs.hourly_rate
        }
        WasteCategory::ResourceUnderutilization => {
            let shortfall = (UTILIZATION_THRESHOLD - inputs.resource_utilization).max(0.0);
            total_working_hours * (shortfall / 100.0) * inputs.hourly_rate
        }
        WasteCategory::IdleTime => {
            let excessive_idle = (inputs.idle_time_percentage - NORMAL_IDLE_PERCENTAGE).max(0.0);
            total_working_hours * (excessive_idle / 100.0) * inputs.hourly_rate
        }
        WasteCategory::QualityRework => {
            total_working_hours
                * (inputs.defect_rate / 100.0)
                * inputs.hourly_rate
                * (inputs.rework_cost_multiplier - 1.0).max(0.0)
        }
        WasteCategory::DelayPenalties => {
            expected_delay_days(inputs) * inputs.penalty_cost_per_day
        }
        WasteCategory::OpportunityCosts => {
            expected_delay_days(inputs) * inputs.opportunity_cost_per_day
        }
        WasteCategory::PremiumResourceCosts => {
            let premium = (inputs.resource_cost_per_hour - inputs.hourly_rate).max(0.0);
            if premium > PREMIUM_RATE_TRIGGER {
                total_working_hours * PREMIUM_HOURS_SHARE * premium
            } else {
                0.0
            }
        }
    }
}

fn expected_delay_days(inputs: &CostInputs) -> f64 {
    inputs.project_duration * WORKING_DAYS_PER_MONTH * (inputs.delay_percentage / 100.0)
}

fn build_metrics(
    inputs: &CostInputs,
    total_working_hours: f64,
    efficient_labor_cost: f64,
    total_waste: i64,
    current_project_cost: i64,
) -> CostMetrics {
    let waste = total_waste as f64;
    let current = current_project_cost as f64;
    let project_days = inputs.project_duration * WORKING_DAYS_PER_MONTH;

    CostMetrics {
        efficient_project_cost: round_dollars(efficient_labor_cost),
        current_project_cost,
        total_waste,
        waste_percentage: round_dollars(ratio(waste, current) * 100.0),
        monthly_waste: round_dollars(ratio(waste, inputs.project_duration)),
        daily_waste: round_dollars(ratio(waste, project_days)),
        waste_per_resource: round_dollars(ratio(waste, inputs.team_size)),
        efficiency_rating: round_dollars(ratio(efficient_labor_cost, current) * 100.0).max(0),
        potential_savings: round_dollars(waste * RECOVERABLE_SHARE),
        monthly_burn_rate: round_dollars(ratio(current, inputs.project_duration)),
        effective_hourly_rate: round_dollars(ratio(current, total_working_hours)),
        annual_waste: round_dollars(waste * inputs.projects_per_year),
        annual_potential_savings: round_dollars(waste * RECOVERABLE_SHARE * inputs.projects_per_year),
        annual_current_cost: round_dollars(current * inputs.projects_per_year),
        annual_efficient_cost: round_dollars(efficient_labor_cost * inputs.projects_per_year),
    }
}

/// Zero denominators resolve to 0 instead of NaN/Inf so the output
/// stays well-formed for zero-duration or zero-team records.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn round_dollars(value: f64) -> i64 {
    value.round() as i64
}

fn validate_inputs(inputs: &CostInputs) -> AppResult<()> {
    let fields: [(&str, f64); 18] = [
        ("projectDuration", inputs.project_duration),
        ("teamSize", inputs.team_size),
        ("hourlyRate", inputs.hourly_rate),
        ("inefficiencyPercentage", inputs.inefficiency_percentage),
        ("meetingsPerWeek", inputs.meetings_per_week),
        ("meetingDuration", inputs.meeting_duration),
        ("participantsPerMeeting", inputs.participants_per_meeting),
        ("communicationOverhead", inputs.communication_overhead),
        ("resourceUtilization", inputs.resource_utilization),
        ("idleTimePercentage", inputs.idle_time_percentage),
        ("resourceCostPerHour", inputs.resource_cost_per_hour),
        ("defectRate", inputs.defect_rate),
        ("reworkCostMultiplier", inputs.rework_cost_multiplier),
        ("qualityAssuranceHours", inputs.quality_assurance_hours),
        ("delayPercentage", inputs.delay_percentage),
        ("penaltyCostPerDay", inputs.penalty_cost_per_day),
        ("opportunityCostPerDay", inputs.opportunity_cost_per_day),
        ("projectsPerYear", inputs.projects_per_year),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            return Err(AppError::invalid_input(name, "must be a finite number"));
        }
        if value < 0.0 {
            return Err(AppError::invalid_input(name, "must not be negative"));
        }
    }

    Ok(())
}
