use std::{future::Future, pin::Pin};

use ::aw::{web::Bytes, FromRequest, HttpMessage, HttpRequest};
use ::log::trace;

use crate::data::{RatingForm, RatingFormError};

/// тело `POST /addrating`: JSON по заголовку, иначе urlencoded-форма
/// (в том числе без `Content-Type`)
impl FromRequest for RatingForm {
    type Error = ::aw::Error;

    type Future = Pin<Box<dyn Future<Output = Result<RatingForm, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut ::aw::dev::Payload) -> Self::Future {
        let is_json = req.content_type().ends_with("json");
        let body = Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = body.await?;
            trace!("INPUT RATING FORM: `{}`", String::from_utf8_lossy(&bytes));

            let form = if is_json {
                ::serde_json::from_slice::<RatingForm>(&bytes)
                    .map_err(|e| RatingFormError::MalformedBody(e.to_string()))?
            } else {
                ::serde_urlencoded::from_bytes::<RatingForm>(&bytes)
                    .map_err(|e| RatingFormError::MalformedBody(e.to_string()))?
            };

            Ok(form)
        })
    }
}
