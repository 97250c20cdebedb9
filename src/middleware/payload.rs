use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::RecordsError;
use crate::types::Validate;

/// JSON body that has been parsed and passed [`Validate`].
///
/// Any body rejection (bad JSON, wrong content type, wrong field types) is reported as a
/// validation failure so every malformed request answers 400.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = RecordsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = match Json::<T>::from_request(req, state).await {
            Ok(v) => v,
            Err(rejection) => return Err(RecordsError::validation(rejection.body_text())),
        };
        body.validate()?;
        Ok(ValidJson(body))
    }
}
