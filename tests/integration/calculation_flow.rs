use costlens::db::DbPool;
use costlens::models::client::{ClientCreateInput, ClientInfo};
use costlens::models::cost::{CalculationResult, ConsultingInputs, CostInputs};
use costlens::services::client_service::ClientService;
use costlens::services::cost_model::compute_costs;
use costlens::services::roi_model::compute_roi;
use serde_json::Value as JsonValue;
use tempfile::tempdir;

#[test]
fn persisted_calculations_reload_bit_identical() {
    let dir = tempdir().expect("temp dir");
    let db_path = dir.path().join("engagements.sqlite");
    let pool = DbPool::new(&db_path).expect("db pool");
    let service = ClientService::new(pool);

    let record = service
        .create_client(ClientCreateInput {
            client_info: ClientInfo {
                name: "Casey".to_string(),
                ..ClientInfo::default()
            },
            cost_inputs: Some(CostInputs::default()),
            consulting_inputs: Some(ConsultingInputs::default()),
        })
        .expect("create");

    let expected = compute_costs(&CostInputs::default()).expect("compute");
    let stored = record.calculations.as_ref().expect("calculations");
    assert_eq!(stored.cost, expected);

    // A fresh pool reads the persisted bytes back without drift.
    let pool = DbPool::new(&db_path).expect("reopen");
    let reloaded = ClientService::new(pool)
        .get_client(&record.id)
        .expect("reload");
    let reloaded_calculations = reloaded.calculations.expect("reloaded calculations");
    assert_eq!(reloaded_calculations.cost, expected);
    assert_eq!(
        reloaded_calculations.roi_scenarios,
        stored.roi_scenarios
    );
    assert_eq!(reloaded_calculations.opportunities, stored.opportunities);
}

#[test]
fn calculation_result_serializes_with_dashboard_field_names() {
    let result = compute_costs(&CostInputs::default()).expect("compute");
    let json: JsonValue = serde_json::to_value(&result).expect("to json");

    assert_eq!(json["totalCost"], JsonValue::from(1_256_104));
    assert_eq!(json["efficientCost"], JsonValue::from(718_080));
    assert_eq!(json["totalWaste"], JsonValue::from(538_024));

    let breakdown = json["wasteBreakdown"].as_object().expect("breakdown");
    for key in [
        "processInefficiencies",
        "excessiveMeetings",
        "communicationOverhead",
        "resourceUnderutilization",
        "idleTime",
        "qualityRework",
        "delayPenalties",
        "opportunityCosts",
        "premiumResourceCosts",
    ] {
        assert!(breakdown.contains_key(key), "missing breakdown key {key}");
    }

    let metrics = json["metrics"].as_object().expect("metrics");
    assert_eq!(metrics["wastePercentage"], JsonValue::from(43));
    assert_eq!(metrics["annualWaste"], JsonValue::from(2_152_096));

    let round_tripped: CalculationResult =
        serde_json::from_value(json).expect("from json");
    assert_eq!(round_tripped, result);
}

#[test]
fn roi_scenarios_serialize_with_nullable_payback() {
    let scenarios = compute_roi(0, &ConsultingInputs::default(), 4.0).expect("roi");
    let json = serde_json::to_value(&scenarios).expect("to json");

    // No payback on zero savings: the field is omitted, never NaN.
    assert!(json[0].get("paybackMonths").is_none());
    assert_eq!(json[0]["netSavings"], JsonValue::from(-100_000));
    assert_eq!(json[0]["name"], JsonValue::from("Conservative Impact"));
}

#[test]
fn full_pipeline_matches_documented_engagement() {
    // The canonical sales-demo engagement from the product docs.
    let result = compute_costs(&CostInputs::default()).expect("compute");
    assert_eq!(result.total_waste, 538_024);

    let scenarios =
        compute_roi(result.total_waste, &ConsultingInputs::default(), 4.0).expect("roi");
    assert_eq!(scenarios.len(), 3);
    assert_eq!(scenarios[1].annual_savings, 1_291_258);
    assert_eq!(scenarios[1].payback_months, Some(1));
}
