//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all facade handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Bind server to listener
//! - Stop accepting on the shutdown signal

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{FacadeBehaviour, FacadeConfig};
use crate::http::handlers;
use crate::http::request;
use crate::observability::metrics;
use crate::upstream::{EmployeeApi, HttpEmployeeApi, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn EmployeeApi>,
    pub behaviour: Arc<FacadeBehaviour>,
}

/// HTTP server for the employee facade.
pub struct HttpServer {
    router: Router,
    config: FacadeConfig,
}

impl HttpServer {
    /// Create a server talking to the configured upstream.
    pub fn new(config: FacadeConfig) -> UpstreamResult<Self> {
        let api = Arc::new(HttpEmployeeApi::new(&config.upstream)?);
        Ok(Self::with_api(config, api))
    }

    /// Create a server on top of any `EmployeeApi`.
    pub fn with_api(config: FacadeConfig, api: Arc<dyn EmployeeApi>) -> Self {
        let state = AppState {
            api,
            behaviour: Arc::new(config.facade.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &FacadeConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/employees",
                get(handlers::list_employees).post(handlers::create_employee),
            )
            .route("/employees/search/{name}", get(handlers::search_employees))
            .route("/employees/highestSalary", get(handlers::get_highest_salary))
            .route(
                "/employees/topTenHighestEarningNames",
                get(handlers::get_top_earning_names),
            )
            .route(
                "/employees/{id}",
                get(handlers::get_employee).delete(handlers::delete_employee),
            )
            .route("/health", get(handlers::health))
            .route_layer(middleware::from_fn(metrics::track_requests))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(request::set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(request::make_request_span))
                    .layer(request::propagate_request_id_layer())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The configured router, for serving elsewhere or driving in tests.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }
}
