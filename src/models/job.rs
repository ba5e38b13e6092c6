use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored job posting. Timestamps are not part of the row; the handlers
/// stamp responses at shaping time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Decimal,
    pub description: String,
    pub job_type: String,
    pub experience: String,
    pub requirements: String,
}
