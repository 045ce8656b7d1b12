#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use patient_insights::http::{create_router, AppState};
use patient_insights::services::cache::AggregateCache;

fn app() -> Router {
    create_router(AppState::new(Arc::new(support::sample_dataset())))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_reports_record_count() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["records"], 10);
    assert_eq!(body["version"], "v1");
}

#[tokio::test]
async fn test_view_listing_in_registry_order() {
    let (status, body) = get(app(), "/v1/views").await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body["views"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec![
            "age_analysis",
            "insurance_provider_analysis",
            "medical_condition_analysis",
            "medication_analysis"
        ]
    );
}

#[tokio::test]
async fn test_age_analysis_query() {
    let (status, body) = get(app(), "/v1/views/age_analysis?gender=Female&blood_type=All").await;
    assert_eq!(status, StatusCode::OK);

    let result = &body["result"];
    assert_eq!(result["total"], 5);
    assert_eq!(result["dimension"], "age_group");
    assert_eq!(result["counts"][0], serde_json::json!({"label": "0-18", "count": 1}));
    assert_eq!(result["counts"][3]["label"], "41-50");
    assert_eq!(result["counts"][3]["count"], 0);
    assert_eq!(result["distribution"][3]["summary"], Value::Null);
}

#[tokio::test]
async fn test_value_with_spaces_is_decoded() {
    let (status, body) =
        get(app(), "/v1/views/medication_analysis?insurance_provider=Blue%20Cross").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["total"], 2);
    assert_eq!(body["filters"][1]["value"], "Blue Cross");
}

#[tokio::test]
async fn test_errors_map_to_status_codes() {
    let (status, body) = get(app(), "/v1/views/unknown_view").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_VIEW");

    let (status, body) = get(app(), "/v1/views/age_analysis?medication=Aspirin").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_FILTER_FIELD");

    let (status, _) = get(app(), "/v1/views/unknown_view/options").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_options_for_age_analysis() {
    let (status, body) = get(app(), "/v1/views/age_analysis/options").await;
    assert_eq!(status, StatusCode::OK);

    let gender = &body["filters"][0];
    assert_eq!(gender["field"], "gender");
    assert_eq!(gender["options"][0]["label"], "All Genders");
    assert_eq!(gender["options"].as_array().unwrap().len(), 3);

    let blood = &body["filters"][1];
    assert_eq!(blood["label"], "Blood Type");
    assert_eq!(blood["options"][0]["label"], "All Blood Types");
    assert_eq!(blood["options"][1]["value"], "A+");
}

#[tokio::test]
async fn test_cache_is_shared_across_requests() {
    let cache = Arc::new(AggregateCache::new());
    let router = create_router(
        AppState::new(Arc::new(support::sample_dataset())).with_cache(Arc::clone(&cache)),
    );

    get(router.clone(), "/v1/views/age_analysis?gender=Male").await;
    get(router.clone(), "/v1/views/age_analysis?gender=Male&blood_type=All").await;
    get(router, "/v1/views/age_analysis?gender=Female").await;

    let stats = cache.stats();
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 2);
}
