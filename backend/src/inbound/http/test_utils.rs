//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::to_bytes;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use serde::de::DeserializeOwned;

use crate::Trace;
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::outbound::security::Argon2PasswordHasher;
use crate::test_support::seeded_stores;

/// State over the sample dataset with cheap hashing costs.
pub async fn seeded_state() -> web::Data<HttpState> {
    let hasher = Argon2PasswordHasher::with_costs(1024, 1, 1).expect("cheap test parameters");
    web::Data::new(HttpState::new(&seeded_stores().await, Arc::new(hasher), 2025))
}

/// The `/api/v1` scope behind the trace middleware.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).wrap(Trace).service(api_scope())
}

/// Send `request` through a fresh app over `state`.
pub async fn send(state: web::Data<HttpState>, request: actix_test::TestRequest) -> ServiceResponse {
    let app = actix_test::init_service(test_app(state)).await;
    actix_test::call_service(&app, request.to_request()).await
}

/// Decode a JSON response body.
pub async fn json_body<T: DeserializeOwned>(response: ServiceResponse) -> T {
    let bytes = to_bytes(response.into_body()).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Read a plain-text response body.
pub async fn text_body(response: ServiceResponse) -> String {
    let bytes = to_bytes(response.into_body()).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
