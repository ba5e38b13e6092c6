use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::Result;
use crate::models::job::Job;
use sqlx::PgPool;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, payload: &CreateJobPayload) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO jobs (title, company, location, salary, description, job_type, experience, requirements)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.company)
        .bind(&payload.location)
        .bind(payload.salary)
        .bind(&payload.description)
        .bind(&payload.job_type)
        .bind(&payload.experience)
        .bind(&payload.requirements)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    // No ORDER BY: the listing order is whatever the storage engine returns.
    pub async fn select_all(&self) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, company, location, salary, description, job_type, experience, requirements
            FROM jobs
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    /// Zero or one row, returned as a vector so the handler can surface the
    /// array-shaped contract directly.
    pub async fn select_by_id(&self, id: i32) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, company, location, salary, description, job_type, experience, requirements
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    /// Unconditional single-statement update; returns the affected-row count
    /// so the caller can distinguish not-found from success.
    pub async fn update(&self, id: i32, payload: &UpdateJobPayload) -> Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE jobs
            SET title = $1, company = $2, location = $3, salary = $4,
                description = $5, job_type = $6, experience = $7, requirements = $8
            WHERE id = $9
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.company)
        .bind(&payload.location)
        .bind(payload.salary)
        .bind(&payload.description)
        .bind(&payload.job_type)
        .bind(&payload.experience)
        .bind(&payload.requirements)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected())
    }

    pub async fn delete(&self, id: i32) -> Result<u64> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected())
    }
}
