//! Request harness and shared world for the election API scenarios.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix services spawn with `spawn_local`. Each request runs through a fresh
//! app built over the world's shared state.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use backend::Trace;
use backend::domain::ElectionStores;
use backend::inbound::http::api_scope;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::in_memory_stores;
use backend::outbound::security::Argon2PasswordHasher;
use backend::seed::{ElectionDataset, apply_dataset};

const SAMPLE_DATASET: &str = include_str!("../../fixtures/election-data.json");

pub(crate) struct ApiWorld {
    runtime: Runtime,
    local: LocalSet,
    stores: ElectionStores,
    state: web::Data<HttpState>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) last_body: Option<String>,
}

impl ApiWorld {
    /// Decode the last body as JSON.
    pub(crate) fn json(&self) -> Value {
        let body = self.last_body.as_deref().expect("a request was made");
        serde_json::from_str(body).expect("JSON response body")
    }
}

pub(crate) type SharedWorld = Rc<RefCell<ApiWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    (runtime, LocalSet::new())
}

/// Load the bundled sample dataset into the world's stores.
pub(crate) fn load_sample_dataset(world: &SharedWorld) {
    let ctx = world.borrow();
    let dataset = ElectionDataset::from_json(SAMPLE_DATASET).expect("sample dataset parses");
    let stores = ctx.stores.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        apply_dataset(dataset, &stores).await.expect("sample dataset applies");
    });
}

/// Send `request` through the `/api/v1` scope and record the response.
pub(crate) fn perform(world: &SharedWorld, request: TestRequest) {
    let (status, trace_id, body) = {
        let ctx = world.borrow();
        let state = ctx.state.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            let app = actix_test::init_service(
                App::new().app_data(state).wrap(Trace).service(api_scope()),
            )
            .await;
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get("trace-id")
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = actix_test::read_body(response).await;
            (status, trace_id, String::from_utf8_lossy(&body).into_owned())
        })
    };
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_trace_id = trace_id;
    ctx.last_body = Some(body);
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let hasher = Argon2PasswordHasher::with_costs(1024, 1, 1).expect("cheap test parameters");
    let stores = in_memory_stores();
    let state = web::Data::new(HttpState::new(&stores, Arc::new(hasher), 2025));
    WorldFixture {
        world: Rc::new(RefCell::new(ApiWorld {
            runtime,
            local,
            stores,
            state,
            last_status: None,
            last_trace_id: None,
            last_body: None,
        })),
    }
}
