use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;

use crate::{
    dto::job_dto::{
        CreateJobPayload, CreatedJobResponse, DeleteJobResponse, JobListResponse,
        UpdateJobPayload, UpdateJobResponse, UpdatedJob,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job posting created successfully", body = Json<CreatedJobResponse>),
        (status = 500, description = "Error creating job posting")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    let id = match state.job_service.insert(&payload).await {
        Ok(id) => id,
        Err(err) => {
            tracing::error!(error = ?err, "error inserting job posting");
            return Err(Error::Internal("Error creating job posting".to_string()));
        }
    };

    // datePosted is stamped here, not re-read from storage.
    let body = CreatedJobResponse::new(id, payload, Utc::now());
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/api/getAllJobs",
    responses(
        (status = 201, description = "All job postings", body = Json<JobListResponse>),
        (status = 500, description = "Error in fetching jobs")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = match state.job_service.select_all().await {
        Ok(jobs) => jobs,
        Err(err) => {
            tracing::error!(error = ?err, "error fetching jobs");
            return Err(Error::Internal("Error in fetching jobs".to_string()));
        }
    };

    let body = JobListResponse {
        message: "Success".to_string(),
        data: jobs,
    };
    // Reads answer 201 on this surface; existing clients depend on it.
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/api/getJobById/{id}",
    params(
        ("id" = i32, Path, description = "Job posting ID")
    ),
    responses(
        (status = 201, description = "Job posting lookup result, data array possibly empty", body = Json<JobListResponse>),
        (status = 500, description = "Error in fetching job by id")
    )
)]
#[axum::debug_handler]
pub async fn get_job_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let jobs = match state.job_service.select_by_id(id).await {
        Ok(jobs) => jobs,
        Err(err) => {
            tracing::error!(error = ?err, id, "error fetching job by id");
            return Err(Error::Internal(format!(
                "Error in fetching jobs with id: {}",
                id
            )));
        }
    };

    // An unknown id yields an empty data array with the success status, not
    // a 404. This route alone behaves this way; existing clients depend on
    // the shape.
    let body = JobListResponse {
        message: "Success".to_string(),
        data: jobs,
    };
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    put,
    path = "/api/updateJobDetailsById/{id}",
    params(
        ("id" = i32, Path, description = "Job posting ID")
    ),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job posting updated successfully", body = Json<UpdateJobResponse>),
        (status = 404, description = "Job posting not found"),
        (status = 500, description = "Error updating job")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    let affected = match state.job_service.update(id, &payload).await {
        Ok(affected) => affected,
        Err(err) => {
            tracing::error!(error = ?err, id, "error updating job");
            return Err(Error::Internal("Error updating job".to_string()));
        }
    };

    if affected == 0 {
        return Err(Error::NotFound(format!("Job with id: {} not found", id)));
    }

    // The echo is the submitted payload, not a re-read of the stored row.
    let body = UpdateJobResponse {
        message: "Job updated successfully".to_string(),
        updated_job: UpdatedJob::new(id, payload, Utc::now()),
    };
    Ok((StatusCode::OK, Json(body)))
}

#[utoipa::path(
    delete,
    path = "/api/deleteJobById/{id}",
    params(
        ("id" = i32, Path, description = "Job posting ID")
    ),
    responses(
        (status = 201, description = "Job posting deleted successfully", body = Json<DeleteJobResponse>),
        (status = 404, description = "Job posting not found"),
        (status = 500, description = "Error deleting job")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let affected = match state.job_service.delete(id).await {
        Ok(affected) => affected,
        Err(err) => {
            tracing::error!(error = ?err, id, "error deleting job");
            return Err(Error::Internal(format!(
                "Error in deleting job with id: {}",
                id
            )));
        }
    };

    if affected == 0 {
        return Err(Error::NotFound(format!("Job with id: {} not found", id)));
    }

    let body = DeleteJobResponse {
        message: format!("Successfully deleted job with id: {}", id),
    };
    Ok((StatusCode::CREATED, Json(body)))
}
