use ::askama_actix::Template;
use ::aw::{
    body::BoxBody,
    http::{header::ContentType, StatusCode},
    web::{self, Data},
    HttpResponse, Responder, ResponseError,
};
use ::log::{error, info, warn};

use crate::state::*;
use crate::{
    data::*,
    manager::{ClassroomManager, ClassroomManagerError, ClassroomView},
};

mod health;
mod index;
mod rating;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index::get)));
    cfg.service(web::resource("/test").route(web::get().to(health::get)));
    cfg.service(web::resource("/addrating").route(web::post().to(rating::post)));
}

/// ответ в виде простого текста
fn plain_text(status: StatusCode, body: String) -> HttpResponse<BoxBody> {
    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(body)
}
