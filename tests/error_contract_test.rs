use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde_json::Value as JsonValue;

use job_portal_backend::dto::job_dto::{CreateJobPayload, CreatedJobResponse};
use job_portal_backend::error::Error;

async fn rendered(err: Error) -> (StatusCode, JsonValue) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_renders_404_with_message() {
    let (status, body) = rendered(Error::NotFound("Job with id: 7 not found".to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Job with id: 7 not found");
}

#[tokio::test]
async fn internal_renders_500_with_message() {
    let (status, body) = rendered(Error::Internal("Error creating job posting".to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error creating job posting");
}

#[test]
fn created_response_uses_camel_case_wire_names() {
    let payload = CreateJobPayload {
        title: "Software Engineer".to_string(),
        company: "Tech Corp".to_string(),
        location: "New York, USA".to_string(),
        salary: rust_decimal::Decimal::from(120000),
        description: "An exciting opportunity.".to_string(),
        job_type: "Full-Time".to_string(),
        experience: "3-5 years".to_string(),
        requirements: "CS degree or equivalent.".to_string(),
    };

    let now = Utc::now();
    let body = serde_json::to_value(CreatedJobResponse::new(42, payload, now)).unwrap();

    assert_eq!(body["id"], 42);
    assert_eq!(body["jobType"], "Full-Time");
    assert_eq!(body["salary"].as_f64(), Some(120000.0));
    let date_posted = body["datePosted"].as_str().expect("datePosted");
    assert!(chrono::DateTime::parse_from_rfc3339(date_posted).is_ok());
    assert!(body.get("job_type").is_none());
}
