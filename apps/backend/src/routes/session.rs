//! Session HTTP routes: the wire face of the round controller.
//!
//! Every handler is one gateway turn; request bodies are JSON, errors are
//! problem+json via [`AppError`].

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::{CardId, PlayerView, RevealedSubmissions, NO_CARD};
use crate::error::AppError;
use crate::services::RoundService;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinRequest {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateRequest {
    player_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayCardRequest {
    player_id: String,
    /// Omitted card id means "withdraw", matching the sentinel.
    #[serde(default = "no_card")]
    card_id: CardId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RevealRequest {
    player_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveRequest {
    player_id: String,
    winning_player_id: String,
}

fn no_card() -> CardId {
    NO_CARD
}

/// POST /api/session/join
async fn join(
    app_state: web::Data<AppState>,
    body: web::Json<JoinRequest>,
) -> Result<web::Json<PlayerView>, AppError> {
    let view = app_state
        .gateway
        .with_session(&app_state.session_key, |state, rng| {
            RoundService.join(state, rng, &body.name)
        })
        .await?;
    Ok(web::Json(view))
}

/// POST /api/session/state
async fn query_state(
    app_state: web::Data<AppState>,
    body: web::Json<StateRequest>,
) -> Result<web::Json<PlayerView>, AppError> {
    let view = app_state
        .gateway
        .with_session(&app_state.session_key, |state, _| {
            RoundService.query(state, &body.player_id)
        })
        .await?;
    Ok(web::Json(view))
}

/// POST /api/session/play
async fn play_card(
    app_state: web::Data<AppState>,
    body: web::Json<PlayCardRequest>,
) -> Result<web::Json<PlayerView>, AppError> {
    let view = app_state
        .gateway
        .with_session(&app_state.session_key, |state, _| {
            RoundService.play_card(state, &body.player_id, body.card_id)
        })
        .await?;
    Ok(web::Json(view))
}

/// POST /api/session/reveal
async fn reveal(
    app_state: web::Data<AppState>,
    body: web::Json<RevealRequest>,
) -> Result<web::Json<RevealedSubmissions>, AppError> {
    let gateway = app_state.gateway.clone();
    let revealed = gateway
        .with_session(&app_state.session_key, |state, _| {
            RoundService.reveal_submissions(state, gateway.corpus(), &body.player_id)
        })
        .await?;
    Ok(web::Json(revealed))
}

/// POST /api/session/resolve
async fn resolve(
    app_state: web::Data<AppState>,
    body: web::Json<ResolveRequest>,
) -> Result<web::Json<PlayerView>, AppError> {
    let view = app_state
        .gateway
        .with_session(&app_state.session_key, |state, _| {
            RoundService.resolve_round(state, &body.player_id, &body.winning_player_id)
        })
        .await?;
    Ok(web::Json(view))
}

/// POST /api/session/reset
async fn reset(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let gateway = app_state.gateway.clone();
    gateway
        .with_session(&app_state.session_key, |state, rng| {
            RoundService.reset(state, gateway.corpus(), rng)
        })
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/session")
            .route("/join", web::post().to(join))
            .route("/state", web::post().to(query_state))
            .route("/play", web::post().to(play_card))
            .route("/reveal", web::post().to(reveal))
            .route("/resolve", web::post().to(resolve))
            .route("/reset", web::post().to(reset)),
    );
}
