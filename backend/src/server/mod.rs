//! HTTP server assembly.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::{ServerConfig, ServerSettings};

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::api_scope;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::outbound::security::Argon2PasswordHasher;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Shared state handed to every worker.
#[derive(Clone)]
struct Shared {
    probes: web::Data<HealthState>,
    api: web::Data<HttpState>,
}

impl Shared {
    fn from_config(probes: web::Data<HealthState>, config: &ServerConfig) -> Self {
        let api = HttpState::new(
            &config.stores,
            Arc::new(Argon2PasswordHasher::default()),
            config.default_year,
        );
        Self {
            probes,
            api: web::Data::new(api),
        }
    }

    /// Mount the probes, the `/api/v1` scope and, in debug builds, Swagger UI.
    fn routes(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.probes.clone())
            .app_data(self.api.clone())
            .service(ready)
            .service(live)
            .service(api_scope());

        #[cfg(debug_assertions)]
        cfg.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }
}

/// Bind an Actix server over the configured stores.
///
/// The health state is flagged ready once the listener is bound.
///
/// # Errors
/// Returns the [`std::io::Error`] raised while binding the socket.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let shared = Shared::from_config(health_state.clone(), &config);

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(config.prometheus.clone());

    let server = HttpServer::new(move || {
        let app = App::new().wrap(Trace).configure(|cfg| shared.routes(cfg));
        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());
        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
