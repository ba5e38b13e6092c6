pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::services::job_service::JobService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub job_service: JobService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let job_service = JobService::new(pool.clone());

        Self { pool, job_service }
    }
}

/// The full application router, shared between `main` and the integration
/// tests so both exercise the same layering.
pub fn app(state: AppState) -> Router {
    let job_api = Router::new()
        .route("/api/jobs", post(routes::job::create_job))
        .route("/api/getAllJobs", get(routes::job::list_jobs))
        .route("/api/getJobById/:id", get(routes::job::get_job_by_id))
        .route(
            "/api/updateJobDetailsById/:id",
            put(routes::job::update_job),
        )
        .route("/api/deleteJobById/:id", delete(routes::job::delete_job));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(job_api)
        .with_state(state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
}
