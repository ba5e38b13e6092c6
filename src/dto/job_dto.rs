use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::job::Job;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Decimal,
    pub description: String,
    pub job_type: String,
    pub experience: String,
    pub requirements: String,
}

/// Full replacement of every field; there are no partial-update semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPayload {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Decimal,
    pub description: String,
    pub job_type: String,
    pub experience: String,
    pub requirements: String,
}

/// The created record as echoed back to the client: submitted fields plus
/// the generated id and a response-time `datePosted`. Not re-read from
/// storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedJobResponse {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Decimal,
    pub description: String,
    pub job_type: String,
    pub experience: String,
    pub requirements: String,
    pub date_posted: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub message: String,
    pub data: Vec<Job>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedJob {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Decimal,
    pub description: String,
    pub job_type: String,
    pub experience: String,
    pub requirements: String,
    pub date_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobResponse {
    pub message: String,
    pub updated_job: UpdatedJob,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    pub message: String,
}

impl CreatedJobResponse {
    pub fn new(id: i32, payload: CreateJobPayload, date_posted: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title,
            company: payload.company,
            location: payload.location,
            salary: payload.salary,
            description: payload.description,
            job_type: payload.job_type,
            experience: payload.experience,
            requirements: payload.requirements,
            date_posted,
        }
    }
}

impl UpdatedJob {
    pub fn new(id: i32, payload: UpdateJobPayload, date_updated: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title,
            company: payload.company,
            location: payload.location,
            salary: payload.salary,
            description: payload.description,
            job_type: payload.job_type,
            experience: payload.experience,
            requirements: payload.requirements,
            date_updated,
        }
    }
}
