use super::*;

impl ResponseError for ClassroomManagerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ClassroomManagerError::ClassroomNotFound(_) => StatusCode::BAD_REQUEST,
            ClassroomManagerError::DbErr(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            ClassroomManagerError::DbErr(e) => {
                error!("{:?}", e);
                plain_text(
                    self.status_code(),
                    format!("error occured (HTTP ERROR #{})", self.status_code()),
                )
            }
            _ => plain_text(self.status_code(), self.to_string()),
        }
    }
}

impl ResponseError for RatingFormError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        plain_text(self.status_code(), self.to_string())
    }
}

pub async fn post(
    reg: Data<Registry>,
    form: RatingForm,
) -> ::aw::Result<impl Responder> {
    let (class_id, rating) = form.validate().map_err(|e| {
        warn!("reject rating {:?}: {}", form, e);
        e
    })?;

    let manager = ClassroomManager::apply_rating(&reg.db, class_id, rating)
        .await
        .map_err(|e| {
            if let ClassroomManagerError::ClassroomNotFound(_) = e {
                warn!("reject rating {} for unknown class `{}`", rating, class_id);
            }
            e
        })?;

    let view = manager.view();
    info!(
        "class `{}` rated {}: {:.2} over {} ratings",
        view.id, rating, view.rating, view.num_of_ratings
    );

    Ok(plain_text(
        StatusCode::OK,
        format!(
            "rating added: {} is now rated {:.2} ({} ratings)",
            view.class_name, view.rating, view.num_of_ratings
        ),
    ))
}
