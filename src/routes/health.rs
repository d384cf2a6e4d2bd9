use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::state::AppState;

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

/// Ready once the first refresh has committed a board.
#[get("/ready")]
async fn ready(state: web::Data<AppState>) -> impl Responder {
    let location = &state.config.location;
    match state.store.get(&location.code).await {
        Some(snapshot) => HttpResponse::Ok().json(json!({
            "location": location.code,
            "sequence": snapshot.sequence,
            "refreshed_at": snapshot.refreshed_at,
        })),
        None => HttpResponse::ServiceUnavailable().json(json!({
            "location": location.code,
            "message": "board has not loaded yet",
        })),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).service(ready);
}
