use super::*;

pub const LIVENESS_BODY: &str = "classroom-rank is up";

pub async fn get() -> impl Responder {
    plain_text(StatusCode::OK, LIVENESS_BODY.to_owned())
}
