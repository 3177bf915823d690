//! Callable request/response envelopes.
//!
//! Requests arrive as `{"data": ...}` and successes leave as
//! `{"result": ...}`. A body that is missing or not JSON yields `data = null`
//! so that validation, not decoding, decides what the caller did wrong.

use crate::identity::CallerIdentity;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::convert::Infallible;

#[derive(Debug, Clone)]
pub struct CallableRequest {
    pub caller: Option<CallerIdentity>,
    pub data: JsonValue,
}

impl CallableRequest {
    pub fn from_body(caller: Option<CallerIdentity>, body: &[u8]) -> Self {
        let data = serde_json::from_slice::<JsonValue>(body)
            .ok()
            .and_then(|mut envelope| envelope.get_mut("data").map(JsonValue::take))
            .unwrap_or(JsonValue::Null);
        Self { caller, data }
    }
}

impl FromRequest<AppState> for CallableRequest {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let caller =
            CallerIdentity::from_headers(req.headers(), &state.settings.auth_user_header);
        let body = Bytes::from_request(req, state).await.unwrap_or_default();
        Ok(Self::from_body(caller, &body))
    }
}

#[derive(Serialize)]
struct ResultBody<T> {
    result: T,
}

/// Successful callable response.
#[derive(Debug, Clone)]
pub struct CallableResponse<T>(pub T);

impl<T: Serialize> IntoResponse for CallableResponse<T> {
    fn into_response(self) -> Response {
        Json(ResultBody { result: self.0 }).into_response()
    }
}
