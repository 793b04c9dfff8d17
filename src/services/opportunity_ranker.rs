use tracing::debug;

use crate::models::cost::{WasteBreakdown, WasteCategory};
use crate::models::opportunity::{Opportunity, OpportunityPriority};
use crate::services::cost_model::RECOVERABLE_SHARE;

const MAX_OPPORTUNITIES: usize = 5;
/// Opportunities at or below this savings figure are noise.
const MIN_MEANINGFUL_SAVINGS: i64 = 1000;

/// Canned remediation guidance for one waste category, plus the
/// impact-percentage threshold that elevates its priority.
struct Playbook {
    label: &'static str,
    solution: &'static str,
    time_to_implement: &'static str,
    threshold: i64,
    above: OpportunityPriority,
    below: OpportunityPriority,
}

fn playbook(category: WasteCategory) -> Playbook {
    match category {
        WasteCategory::ProcessInefficiencies => Playbook {
            label: "Process Optimization",
            solution: "Implement standardized workflows, eliminate redundant steps, introduce automation where possible",
            time_to_implement: "2-3 months",
            threshold: 25,
            above: OpportunityPriority::High,
            below: OpportunityPriority::Medium,
        },
        WasteCategory::ExcessiveMeetings => Playbook {
            label: "Meeting Efficiency",
            solution: "Reduce meeting frequency by 40%, implement async updates, establish clear meeting protocols",
            time_to_implement: "1 month",
            threshold: 20,
            above: OpportunityPriority::High,
            below: OpportunityPriority::Medium,
        },
        WasteCategory::CommunicationOverhead => Playbook {
            label: "Communication Streamlining",
            solution: "Deploy collaboration tools, create communication standards, implement status dashboards",
            time_to_implement: "1-2 months",
            threshold: 15,
            above: OpportunityPriority::High,
            below: OpportunityPriority::Medium,
        },
        WasteCategory::ResourceUnderutilization => Playbook {
            label: "Resource Optimization",
            solution: "Implement capacity planning, cross-train team members, optimize task allocation",
            time_to_implement: "2-4 months",
            threshold: 20,
            above: OpportunityPriority::High,
            below: OpportunityPriority::Medium,
        },
        WasteCategory::IdleTime => Playbook {
            label: "Workflow Optimization",
            solution: "Eliminate bottlenecks, implement parallel work streams, improve dependency management",
            time_to_implement: "1-3 months",
            threshold: 15,
            above: OpportunityPriority::High,
            below: OpportunityPriority::Medium,
        },
        WasteCategory::QualityRework => Playbook {
            label: "Quality Management",
            solution: "Implement quality gates, establish review processes, invest in upfront planning",
            time_to_implement: "2-3 months",
            threshold: 20,
            above: OpportunityPriority::High,
            below: OpportunityPriority::Medium,
        },
        WasteCategory::DelayPenalties => Playbook {
            label: "Timeline Management",
            solution: "Improve project planning, implement milestone tracking, establish realistic timelines",
            time_to_implement: "1-2 months",
            threshold: 10,
            above: OpportunityPriority::Medium,
            below: OpportunityPriority::Low,
        },
        WasteCategory::OpportunityCosts => Playbook {
            label: "Strategic Planning",
            solution: "Improve project prioritization, implement portfolio management, optimize resource allocation",
            time_to_implement: "3-6 months",
            threshold: 15,
            above: OpportunityPriority::Medium,
            below: OpportunityPriority::Low,
        },
        WasteCategory::PremiumResourceCosts => Playbook {
            label: "Resource Planning",
            solution: "Improve resource forecasting, establish preferred vendor relationships, optimize hiring",
            time_to_implement: "2-4 months",
            threshold: 10,
            above: OpportunityPriority::Medium,
            below: OpportunityPriority::Low,
        },
    }
}

/// Ranks waste categories into at most five reduction opportunities,
/// largest cost first. Categories with no waste, and opportunities
/// whose recoverable savings are not meaningful, are dropped.
pub fn rank_opportunities(breakdown: &WasteBreakdown, total_waste: i64) -> Vec<Opportunity> {
    let mut ranked: Vec<(WasteCategory, i64)> = breakdown
        .entries()
        .into_iter()
        .filter(|(_, cost)| *cost > 0)
        .collect();
    // Stable sort keeps breakdown order for equal costs.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_OPPORTUNITIES);

    let opportunities: Vec<Opportunity> = ranked
        .into_iter()
        .map(|(category, cost)| build_opportunity(category, cost, total_waste))
        .filter(|opportunity| opportunity.potential_savings > MIN_MEANINGFUL_SAVINGS)
        .collect();

    debug!(
        target: "app::model",
        count = opportunities.len(),
        total_waste,
        "waste reduction opportunities ranked"
    );

    opportunities
}

fn build_opportunity(category: WasteCategory, cost: i64, total_waste: i64) -> Opportunity {
    let impact_percentage = if total_waste == 0 {
        0
    } else {
        ((cost as f64 / total_waste as f64) * 100.0).round() as i64
    };
    let potential_savings = (cost as f64 * RECOVERABLE_SHARE).round() as i64;

    let plan = playbook(category);
    let priority = if impact_percentage > plan.threshold {
        plan.above
    } else {
        plan.below
    };

    Opportunity {
        category,
        label: plan.label.to_string(),
        current_waste: cost,
        impact_percentage,
        potential_savings,
        solution: plan.solution.to_string(),
        time_to_implement: plan.time_to_implement.to_string(),
        priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cost::CostInputs;
    use crate::services::cost_model::compute_costs;

    fn sample_breakdown() -> (WasteBreakdown, i64) {
        let result = compute_costs(&CostInputs::default()).unwrap();
        (result.waste_breakdown, result.total_waste)
    }

    #[test]
    fn test_returns_top_five_by_cost_descending() {
        let (breakdown, total) = sample_breakdown();
        let opportunities = rank_opportunities(&breakdown, total);

        assert_eq!(opportunities.len(), 5);
        for pair in opportunities.windows(2) {
            assert!(pair[0].current_waste >= pair[1].current_waste);
        }
        // Communication overhead dominates the default engagement.
        assert_eq!(
            opportunities[0].category,
            WasteCategory::CommunicationOverhead
        );
        assert_eq!(opportunities[0].label, "Communication Streamlining");
    }

    #[test]
    fn test_impact_and_savings_are_derived_from_cost() {
        let (breakdown, total) = sample_breakdown();
        let opportunities = rank_opportunities(&breakdown, total);

        let top = &opportunities[0];
        assert_eq!(top.current_waste, 143_616);
        // 143616 / 538024 = 26.69%.
        assert_eq!(top.impact_percentage, 27);
        assert_eq!(top.potential_savings, 100_531);
    }

    #[test]
    fn test_priority_thresholds_vary_per_category() {
        let (breakdown, total) = sample_breakdown();
        let opportunities = rank_opportunities(&breakdown, total);

        // 27% communication impact clears its 15% high bar.
        assert_eq!(opportunities[0].priority, OpportunityPriority::High);

        let process = opportunities
            .iter()
            .find(|o| o.category == WasteCategory::ProcessInefficiencies)
            .unwrap();
        // 20% process impact stays below its 25% high bar.
        assert_eq!(process.impact_percentage, 20);
        assert_eq!(process.priority, OpportunityPriority::Medium);
    }

    #[test]
    fn test_low_priority_categories() {
        let mut breakdown = WasteBreakdown::default();
        breakdown.delay_penalties = 5_000;
        breakdown.communication_overhead = 95_000;
        let opportunities = rank_opportunities(&breakdown, 100_000);

        let delays = opportunities
            .iter()
            .find(|o| o.category == WasteCategory::DelayPenalties)
            .unwrap();
        // 5% impact is below the 10% bar for delay penalties.
        assert_eq!(delays.priority, OpportunityPriority::Low);
    }

    #[test]
    fn test_never_more_than_five_items() {
        let breakdown = WasteBreakdown {
            process_inefficiencies: 90_000,
            excessive_meetings: 80_000,
            communication_overhead: 70_000,
            resource_underutilization: 60_000,
            idle_time: 50_000,
            quality_rework: 40_000,
            delay_penalties: 30_000,
            opportunity_costs: 20_000,
            premium_resource_costs: 10_000,
        };
        let opportunities = rank_opportunities(&breakdown, breakdown.total());
        assert_eq!(opportunities.len(), 5);
        assert_eq!(
            opportunities[0].category,
            WasteCategory::ProcessInefficiencies
        );
        assert_eq!(opportunities[4].category, WasteCategory::IdleTime);
    }

    #[test]
    fn test_drops_insignificant_savings() {
        let mut breakdown = WasteBreakdown::default();
        // 70% of 1400 is 980, at or below the 1000 floor.
        breakdown.idle_time = 1_400;
        breakdown.quality_rework = 50_000;
        let opportunities = rank_opportunities(&breakdown, 51_400);

        assert_eq!(opportunities.len(), 1);
        assert_eq!(opportunities[0].category, WasteCategory::QualityRework);
        for opportunity in &opportunities {
            assert!(opportunity.potential_savings > 1_000);
        }
    }

    #[test]
    fn test_zero_waste_yields_no_opportunities() {
        let breakdown = WasteBreakdown::default();
        assert!(rank_opportunities(&breakdown, 0).is_empty());
    }
}
