//! Server construction and state wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use tracing::info;

use student_records::domain::StudentsService;
use student_records::inbound::http::build_app;
use student_records::inbound::http::state::HttpState;
use student_records::outbound::memory::InMemoryStudentRepository;
#[cfg(debug_assertions)]
use student_records::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the handler state over an in-memory store.
fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let repository = if config.seed_demo_data {
        InMemoryStudentRepository::seeded().map_err(|err| {
            std::io::Error::other(format!("invalid demo student record: {err}"))
        })?
    } else {
        InMemoryStudentRepository::new()
    };
    let service = Arc::new(StudentsService::new(Arc::new(repository)));
    Ok(HttpState::new(service.clone(), service))
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding, binding the socket or starting
/// the server fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config)?);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        let app = build_app(http_state.clone());

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, seed_demo_data = config.seed_demo_data, "student records server listening");
    Ok(server)
}
