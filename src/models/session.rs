use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of the signaling log. Rows are insert-only: each push creates a
/// new row with exactly one of `offer`/`answer` set, and `ucode` carries no
/// uniqueness constraint. `id` pins the retrieval order (ascending).
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Session {
    pub id: i32,
    pub ucode: String,
    pub offer: Option<String>,
    pub answer: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewOffer {
    pub ucode: String,
    pub offer: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewAnswer {
    pub ucode: String,
    pub answer: String,
}

/// Request body for the push endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalData {
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushStatus {
    pub db_push_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferResponse {
    pub offer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: Option<String>,
}
