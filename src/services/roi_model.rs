use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::cost::ConsultingInputs;
use crate::models::roi::{RoiScenario, RoiScenarioKind};

/// Conservative scenario applies half of the expected reduction.
const CONSERVATIVE_FACTOR: f64 = 0.5;
/// Optimistic scenario applies 1.5x, capped at a 90% reduction.
const OPTIMISTIC_FACTOR: f64 = 1.5;
const MAX_REDUCTION: f64 = 0.9;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Projects consulting payoff for one project's waste total, scaled to
/// a year. Always returns exactly three scenarios in fixed order:
/// conservative, realistic, optimistic.
pub fn compute_roi(
    total_waste_per_project: i64,
    consulting: &ConsultingInputs,
    projects_per_year: f64,
) -> AppResult<Vec<RoiScenario>> {
    validate_consulting_inputs(consulting)?;
    if !projects_per_year.is_finite() || projects_per_year < 0.0 {
        return Err(AppError::invalid_input(
            "projectsPerYear",
            "must be a finite, non-negative number",
        ));
    }
    if total_waste_per_project < 0 {
        return Err(AppError::invalid_input(
            "totalWaste",
            "must not be negative",
        ));
    }

    let total_investment = consulting.consulting_fee + consulting.support_cost;
    let expected_reduction = consulting.expected_waste_reduction / 100.0;

    let scenarios = RoiScenarioKind::ALL
        .iter()
        .map(|kind| {
            build_scenario(
                *kind,
                total_waste_per_project as f64,
                expected_reduction,
                total_investment,
                consulting,
                projects_per_year,
            )
        })
        .collect::<Vec<_>>();

    debug!(
        target: "app::model",
        total_waste_per_project,
        total_investment,
        expected_reduction,
        "roi scenarios computed"
    );

    Ok(scenarios)
}

fn build_scenario(
    kind: RoiScenarioKind,
    waste_per_project: f64,
    expected_reduction: f64,
    total_investment: f64,
    consulting: &ConsultingInputs,
    projects_per_year: f64,
) -> RoiScenario {
    let (reduction, description) = match kind {
        RoiScenarioKind::Conservative => {
            let reduction = expected_reduction * CONSERVATIVE_FACTOR;
            (
                reduction,
                format!(
                    "{}% waste reduction - Basic improvements",
                    (reduction * 100.0).round() as i64
                ),
            )
        }
        RoiScenarioKind::Realistic => (
            expected_reduction,
            format!(
                "{}% waste reduction - Full implementation",
                (expected_reduction * 100.0).round() as i64
            ),
        ),
        RoiScenarioKind::Optimistic => {
            let reduction = (expected_reduction * OPTIMISTIC_FACTOR).min(MAX_REDUCTION);
            (
                reduction,
                format!(
                    "{}% waste reduction - Exceptional results",
                    (reduction * 100.0).round() as i64
                ),
            )
        }
    };

    let annual_savings = waste_per_project * reduction * projects_per_year;
    let net_savings = annual_savings - total_investment;

    let roi_percentage = if total_investment == 0.0 {
        // Zero-cost engagement; the ratio is undefined, report 0.
        0
    } else {
        ((net_savings / total_investment) * 100.0).round() as i64
    };

    let payback_months = if total_investment == 0.0 {
        Some(0)
    } else if annual_savings <= 0.0 {
        None
    } else {
        Some((total_investment / (annual_savings / MONTHS_PER_YEAR)).ceil() as i64)
    };

    RoiScenario {
        kind,
        name: kind.label().to_string(),
        description,
        waste_reduction: reduction,
        annual_savings: annual_savings.round() as i64,
        net_savings: net_savings.round() as i64,
        roi_percentage,
        payback_months,
        consulting_fee: consulting.consulting_fee.round() as i64,
        support_cost: consulting.support_cost.round() as i64,
        total_investment: total_investment.round() as i64,
    }
}

fn validate_consulting_inputs(consulting: &ConsultingInputs) -> AppResult<()> {
    let fields: [(&str, f64); 5] = [
        ("consultingFee", consulting.consulting_fee),
        ("supportCost", consulting.support_cost),
        ("implementationTimeframe", consulting.implementation_timeframe),
        ("expectedWasteReduction", consulting.expected_waste_reduction),
        ("ongoingSupportMonths", consulting.ongoing_support_months),
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
