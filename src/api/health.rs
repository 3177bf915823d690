use crate::api::callable::CallableResponse;
use crate::error::HandlerError;
use crate::health::{HealthChecker, HealthReport};
use crate::AppState;
use axum::extract::State;

/// POST /healthCheck. No caller identity required.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<CallableResponse<HealthReport>, HandlerError> {
    let checker = HealthChecker::new(state.config_store.clone(), state.settings.region.clone());
    checker.check_health().await.map(CallableResponse)
}
