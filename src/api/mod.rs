//! HTTP surface: one route per declared function.

pub mod callable;
pub mod connection;
pub mod diagnostics;
pub mod functions;
pub mod health;
pub mod orders;

use crate::middleware::logging::{request_logging_middleware, UuidRequestId};
use crate::AppState;
use axum::{routing::post, Router};
use functions::DeclaredFunctions;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    let functions = DeclaredFunctions::from_settings(&state.settings);

    Router::new()
        .route(
            &functions.create_order.path(),
            post(orders::create_razorpay_order)
                .layer(TimeoutLayer::new(functions.create_order.timeout)),
        )
        .route(
            &functions.health_check.path(),
            post(health::health_check).layer(TimeoutLayer::new(functions.health_check.timeout)),
        )
        .route(
            &functions.connection_test.path(),
            post(connection::test_razorpay_connection)
                .layer(TimeoutLayer::new(functions.connection_test.timeout)),
        )
        .route(
            &functions.setup_diagnostic.path(),
            axum::routing::get(diagnostics::setup_diagnostic)
                .post(diagnostics::setup_diagnostic)
                .options(diagnostics::options_setup_diagnostic)
                .layer(TimeoutLayer::new(functions.setup_diagnostic.timeout)),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_logging_middleware))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
