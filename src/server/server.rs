//! HTTP server core implementation

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::dashscope::DashScopeClient;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::ServiceRegistry;
use crate::utils::error::{Result, TongYiError};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer as ActixHttpServer};
use std::sync::Arc;
use tracing::info;

/// HTTP server
#[derive(Debug)]
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server: build the DashScope client, register the
    /// capability services and resolve them into the application state
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let client = Arc::new(DashScopeClient::new(config.dashscope.clone())?);
        let registry = ServiceRegistry::with_dashscope(client);
        let state = AppState::from_registry(&registry)?;

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);
        let cors_config = self.config.cors.clone();

        let server = ActixHttpServer::new(move || create_app(state.clone(), &cors_config))
            .bind(&bind_addr)
            .map_err(|e| {
                TongYiError::config(format!("Failed to bind to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| TongYiError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Create the Actix-web application
///
/// Cross-origin requests are permitted on all routes when CORS is enabled.
pub fn create_app(
    state: web::Data<AppState>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = if cors_config.enabled {
        Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(cors_config.max_age as usize)
    } else {
        Cors::default()
    };

    App::new()
        .app_data(state)
        .wrap(cors)
        .wrap(Logger::default())
        .route("/health", web::get().to(routes::health::health_check))
        .configure(routes::ai::configure_routes)
}
