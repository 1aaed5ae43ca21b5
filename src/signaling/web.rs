use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, routing::post};

use crate::AppState;
use crate::Error;
use crate::models::{AnswerResponse, OfferResponse, PushStatus, SignalData};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/push-offer/{ucode}", post(post::push_offer))
        .route("/get-offer/{ucode}", get(get::get_offer))
        .route("/push-answer/{ucode}", post(post::push_answer))
        .route("/get-answer/{ucode}", get(get::get_answer))
}

mod post {

    use super::*;

    pub async fn push_offer(
        State(state): State<AppState>,
        Path(ucode): Path<String>,
        Json(body): Json<SignalData>,
    ) -> impl IntoResponse {
        let internal_err =
            |e: Error| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        match state.store.push_offer(&ucode, &body.data).await {
            Ok(()) => (
                StatusCode::OK,
                Json(PushStatus {
                    db_push_status: "Offer pushed successfully".to_string(),
                }),
            )
                .into_response(),
            Err(e) => {
                tracing::error!("push-offer failed for ucode {}: {}", ucode, e);
                internal_err(e)
            }
        }
    }

    pub async fn push_answer(
        State(state): State<AppState>,
        Path(ucode): Path<String>,
        Json(body): Json<SignalData>,
    ) -> impl IntoResponse {
        let internal_err =
            |e: Error| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        match state.store.push_answer(&ucode, &body.data).await {
            Ok(()) => (
                StatusCode::OK,
                Json(PushStatus {
                    db_push_status: "Answer pushed successfully".to_string(),
                }),
            )
                .into_response(),
            Err(e) => {
                tracing::error!("push-answer failed for ucode {}: {}", ucode, e);
                internal_err(e)
            }
        }
    }
}

mod get {

    use super::*;

    pub async fn get_offer(
        State(state): State<AppState>,
        Path(ucode): Path<String>,
    ) -> impl IntoResponse {
        match state.store.get_offer(&ucode).await {
            // Absence is a normal outcome (the caller polls), not an error.
            Ok(offer) => (StatusCode::OK, Json(OfferResponse { offer })).into_response(),
            Err(e) => {
                tracing::error!("get-offer failed for ucode {}: {}", ucode, e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }

    pub async fn get_answer(
        State(state): State<AppState>,
        Path(ucode): Path<String>,
    ) -> impl IntoResponse {
        match state.store.get_answer(&ucode).await {
            Ok(answer) => (StatusCode::OK, Json(AnswerResponse { answer })).into_response(),
            Err(e) => {
                tracing::error!("get-answer failed for ucode {}: {}", ucode, e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
