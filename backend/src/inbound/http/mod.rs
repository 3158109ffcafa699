//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod state;
pub mod students;
pub mod validation;

pub use error::ApiResult;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpRequest, HttpResponse, web};

use crate::domain::Error;
use crate::middleware::{ResponseEnvelope, Trace};
use state::HttpState;

/// Register extractor configuration and the `/student` routes.
///
/// The scope carries [`ResponseEnvelope`]; services registered outside it
/// keep their bodies as produced.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use student_records::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .service(
            web::scope("/student")
                .wrap(ResponseEnvelope)
                .service(students::get_all_students)
                .service(students::get_student)
                .service(students::add_student)
                .service(students::update_student)
                .service(students::delete_student),
        );
}

/// Fallback handler for unmatched routes.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}

/// Assemble the application: enveloped routes and fallback under trace
/// middleware.
///
/// Services added to the returned [`App`], such as Swagger UI, are traced but
/// not enveloped.
pub fn build_app(
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
    App::new()
        .app_data(state)
        .configure(configure)
        .default_service(web::to(route_not_found).wrap(ResponseEnvelope))
        .wrap(Trace)
}
