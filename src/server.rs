use crate::db::debate::DebateId;
use crate::db::{DebateReader, VoteStore};
use crate::error::ApiError;
use crate::identity::VoterIdentity;
use crate::services::{verdict, vote};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Store handles injected into the handlers. Splitting read and write seams
/// lets tests swap in `MemStore` without touching the routes.
#[derive(Clone)]
pub struct AppState {
    pub debates: Arc<dyn DebateReader>,
    pub votes: Arc<dyn VoteStore>,
}

impl AppState {
    pub fn shared<S>(store: Arc<S>) -> Self
    where
        S: DebateReader + VoteStore + 'static,
    {
        Self {
            debates: store.clone(),
            votes: store,
        }
    }
}

#[derive(Deserialize)]
struct VoteRequest {
    vote: String,
}

async fn submit_vote(
    path: web::Path<String>,
    body: web::Json<VoteRequest>,
    voter: VoterIdentity,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let debate_id = DebateId::parse(&path).map_err(|_| ApiError::InvalidDebateId)?;
    let choice = body.into_inner().vote;
    if choice.is_empty() {
        return Err(ApiError::InvalidPayload);
    }
    vote::submit_vote(
        state.debates.as_ref(),
        state.votes.as_ref(),
        debate_id,
        choice,
        voter,
    )
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Vote submitted successfully" })))
}

async fn get_verdicts(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let debate_id = DebateId::parse(&path).map_err(|_| ApiError::InvalidDebateId)?;
    let verdicts =
        verdict::debate_verdicts(state.debates.as_ref(), state.votes.as_ref(), debate_id).await?;
    Ok(HttpResponse::Ok().json(verdicts))
}

pub fn configure(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(|_err, _req| ApiError::InvalidPayload.into()))
        .service(web::resource("/debates/{id}/vote").route(web::post().to(submit_vote)))
        .service(web::resource("/debates/{id}/verdicts").route(web::get().to(get_verdicts)));
}
