use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    dto::{RequiredFields, missing_fields},
    error::AppError,
};

/// `Path` whose rejection renders through [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);

/// JSON body checked for required keys before it is deserialized into `T`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + RequiredFields,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;

        let Value::Object(body) = value else {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".into(),
            ));
        };

        let missing = missing_fields::<T>(&body);
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        serde_json::from_value(Value::Object(body))
            .map(ValidJson)
            .map_err(|err| AppError::BadRequest(format!("Invalid request body: {err}")))
    }
}
