//! Request-body extractor that reports malformed JSON as 400.
//!
//! Plain [`axum::Json`] answers 415 for a missing content type and 422 for a
//! body that parses but does not fit the target type. Clients of this API
//! only ever see 400 for either.

use axum::extract::FromRequest;

use crate::error::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
