//! Optional Prometheus metrics middleware wrapper.
//!
//! Lets the app factory wrap the same middleware type whether or not a
//! Prometheus registry was built.

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::PrometheusMetrics;
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;

/// Prometheus middleware, or a pass-through when metrics are off.
#[derive(Clone)]
pub(crate) enum MetricsLayer {
    Enabled(Arc<PrometheusMetrics>),
    Disabled,
}

impl MetricsLayer {
    #[must_use]
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        metrics.map_or(Self::Disabled, |metrics| Self::Enabled(Arc::new(metrics)))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        match self.clone() {
            Self::Enabled(metrics) => {
                let pending = Compat::new((*metrics).clone()).new_transform(service);
                Box::pin(async move { Ok(boxed::service(pending.await?)) })
            }
            Self::Disabled => Box::pin(async move {
                let passthrough =
                    service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
                Ok(boxed::service(passthrough))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use actix_web_prom::PrometheusMetricsBuilder;
    use rstest::rstest;

    async fn metrics_status(layer: MetricsLayer) -> StatusCode {
        let app = actix_test::init_service(
            App::new()
                .wrap(layer)
                .route("/ping", web::get().to(HttpResponse::Ok)),
        )
        .await;
        let ping = actix_test::TestRequest::get().uri("/ping").to_request();
        assert_eq!(actix_test::call_service(&app, ping).await.status(), StatusCode::OK);
        let scrape = actix_test::TestRequest::get().uri("/metrics").to_request();
        actix_test::call_service(&app, scrape).await.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn enabled_layer_serves_the_scrape_endpoint() {
        let metrics = PrometheusMetricsBuilder::new("election_test")
            .endpoint("/metrics")
            .build()
            .expect("metrics should build for tests");
        let status = metrics_status(MetricsLayer::from_option(Some(metrics))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn disabled_layer_passes_requests_through() {
        let status = metrics_status(MetricsLayer::from_option(None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
