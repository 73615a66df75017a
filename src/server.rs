use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::directory::EmployeeDirectory;
use crate::handlers::{
    create_employee, delete_employee_by_id, delete_employee_by_name, get_employee, health_check,
    highest_salary, list_employees, search_employees, top_earners, AppState,
};
use crate::middleware::{logging_middleware, rate_limit_middleware};
use crate::rate_limiter::RateLimiter;

/// Builds the full application router from configuration: seeded directory,
/// rate limiter, routes and layers.
pub fn create_app(config: &Config) -> Router {
    let state = AppState {
        directory: Arc::new(EmployeeDirectory::with_mock_data(config.seed_count)),
        limiter: Arc::new(RateLimiter::new(config.rate_limit())),
    };
    router(state)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_employees)
                .post(create_employee)
                .delete(delete_employee_by_name),
        )
        .route("/employees/search/:search", get(search_employees))
        .route("/employees/highestSalary", get(highest_salary))
        .route(
            "/employees/topTenHighestEarningEmployeeNames",
            get(top_earners),
        )
        .route(
            "/employees/:id",
            get(get_employee).delete(delete_employee_by_id),
        )
        .route("/health", get(health_check))
        .layer(middleware::from_fn_with_state(
            state.limiter.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(logging_middleware)),
        )
}

pub struct Server {
    app: Router,
    bind_address: String,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let bind_address = config.bind_address.clone();
        let app = create_app(&config);
        Self { app, bind_address }
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind(&self.bind_address).await?;

        tracing::info!("Employee directory server starting on {}", self.bind_address);
        tracing::info!("Health check available at /health");

        // Run server with graceful shutdown
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        },
    }
}
