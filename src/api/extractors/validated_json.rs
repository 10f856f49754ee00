//! JSON extractor that runs `validator` rules after deserializing.
//!
//! Handlers taking `ValidatedJson<T>` never see a structurally
//! invalid payload; both malformed JSON and failed field rules reject
//! with [`AppError::Validation`] before the handler body runs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(describe(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten field errors into one line, in a stable order.
fn describe(errors: &validator::ValidationErrors) -> String {
    let mut lines: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();

    lines.sort();
    lines.join(", ")
}
