use crate::handlers::board::board_view;
use crate::handlers::refresh::refresh_board;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, post, web};

#[get("")]
async fn board(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(board_view(&state).await)
}

#[get("/today")]
async fn today(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(board_view(&state).await.today)
}

#[get("/tomorrow")]
async fn tomorrow(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(board_view(&state).await.tomorrow)
}

#[post("/refresh")]
async fn refresh(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(refresh_board(&state).await)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(board)
        .service(today)
        .service(tomorrow)
        .service(refresh);
}
