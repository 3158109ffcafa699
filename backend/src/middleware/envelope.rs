//! Middleware wrapping every response body in the uniform envelope.
//!
//! The body is buffered, classified into an [`Outgoing`] value and passed
//! through [`normalize`]. Status codes and headers are preserved; rewritten
//! bodies are served as `application/json`.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::HttpResponse;
use actix_web::body::{self, BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ErrorInternalServerError;
use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use actix_web::web::Bytes;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use serde_json::Value;
use tracing::error;

use crate::inbound::http::envelope::{
    Envelope, NO_CONTENT_MARKER, Normalized, Outgoing, RESPONSE_STATUS_HEADER, normalize,
};

/// Envelope middleware.
///
/// Register it inside [`crate::Trace`] so error logs carry the trace id.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use student_records::{ResponseEnvelope, Trace};
///
/// let app = App::new().wrap(ResponseEnvelope).wrap(Trace);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ResponseEnvelope;

impl<S, B> Transform<S, ServiceRequest> for ResponseEnvelope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = ResponseEnvelopeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ResponseEnvelopeMiddleware { service }))
    }
}

/// Service wrapper produced by [`ResponseEnvelope`].
pub struct ResponseEnvelopeMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ResponseEnvelopeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            let (req, response) = res.into_parts();
            let response = envelope_response(response).await?;
            Ok(ServiceResponse::new(req, response))
        })
    }
}

/// Buffered body before classification.
enum RawBody {
    Empty,
    Json(Value),
    Text(String),
}

async fn envelope_response<B>(response: HttpResponse<B>) -> Result<HttpResponse<BoxBody>, Error>
where
    B: MessageBody + 'static,
{
    let no_content = is_no_content(&response);
    let (mut head, body) = response.into_parts();
    let bytes = body::to_bytes(body).await.map_err(|err| {
        let err: Box<dyn std::error::Error> = err.into();
        error!(error = %err, "failed to buffer response body");
        ErrorInternalServerError("failed to buffer response body")
    })?;

    let outgoing = classify(&head, read_body(&head, &bytes));
    match normalize(outgoing, no_content) {
        Normalized::PassThrough(_) => Ok(head.set_body(bytes).map_into_boxed_body()),
        Normalized::Wrapped(envelope) => {
            let encoded = serde_json::to_vec(&envelope).map_err(|err| {
                error!(error = %err, "failed to encode response envelope");
                ErrorInternalServerError("failed to encode response envelope")
            })?;
            let headers = head.headers_mut();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers.remove(CONTENT_LENGTH);
            Ok(head.set_body(Bytes::from(encoded)).map_into_boxed_body())
        }
    }
}

fn is_no_content<B>(response: &HttpResponse<B>) -> bool {
    response.status() == StatusCode::NO_CONTENT
        || response
            .headers()
            .get(RESPONSE_STATUS_HEADER)
            .is_some_and(|value| value.as_bytes() == NO_CONTENT_MARKER.as_bytes())
}

fn is_json(head: &HttpResponse<()>) -> bool {
    head.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase())
        .is_some_and(|value| {
            let essence = value.split(';').next().unwrap_or_default().trim();
            essence == "application/json" || essence.ends_with("+json")
        })
}

fn read_body(head: &HttpResponse<()>, bytes: &Bytes) -> RawBody {
    if bytes.is_empty() {
        return RawBody::Empty;
    }
    if is_json(head) {
        if let Ok(value) = serde_json::from_slice(bytes) {
            return RawBody::Json(value);
        }
    }
    RawBody::Text(String::from_utf8_lossy(bytes).into_owned())
}

fn classify(head: &HttpResponse<()>, body: RawBody) -> Outgoing {
    if let RawBody::Json(value) = &body {
        if let Some(envelope) = Envelope::from_json(value) {
            return Outgoing::Envelope(envelope);
        }
    }
    if head.error().is_some() {
        let description = match body {
            RawBody::Empty => Value::String(
                head.status()
                    .canonical_reason()
                    .unwrap_or("Error")
                    .to_owned(),
            ),
            RawBody::Json(value) => value,
            RawBody::Text(text) => Value::String(text),
        };
        return Outgoing::FrameworkError(description);
    }
    match body {
        RawBody::Empty => Outgoing::Absent,
        RawBody::Json(value) => Outgoing::Json(value),
        RawBody::Text(text) => Outgoing::Text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::LOCATION;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;
    use serde_json::json;

    async fn call<F, Fut>(handler: F) -> (StatusCode, actix_web::http::header::HeaderMap, Bytes)
    where
        F: Fn() -> Fut + Clone + 'static,
        Fut: std::future::Future<Output = Result<HttpResponse, Error>> + 'static,
    {
        let app = test::init_service(
            App::new()
                .wrap(ResponseEnvelope)
                .route("/", web::get().to(handler)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let status = res.status();
        let headers = res.headers().clone();
        let body = test::read_body(res).await;
        (status, headers, body)
    }

    fn json_of(body: &Bytes) -> Value {
        serde_json::from_slice(body).expect("body is JSON")
    }

    #[actix_web::test]
    async fn json_payloads_are_wrapped_with_status_and_headers_kept() {
        let (status, headers, body) = call(|| async {
            Ok(HttpResponse::Created()
                .insert_header((LOCATION, "http://localhost/student/addStudent/5"))
                .json(json!({"id": 5})))
        })
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            headers.get(LOCATION).and_then(|v| v.to_str().ok()),
            Some("http://localhost/student/addStudent/5")
        );
        assert_eq!(
            json_of(&body),
            json!({"status": "success", "data": {"id": 5}, "error": null})
        );
    }

    #[rstest]
    #[case("plain text", json!({"status": "success", "data": "plain text", "error": null}))]
    #[case("an error occurred", json!({"status": "error", "data": null, "error": "an error occurred"}))]
    #[actix_web::test]
    async fn text_bodies_follow_the_error_substring_rule(
        #[case] text: &'static str,
        #[case] expected: Value,
    ) {
        let (status, headers, body) =
            call(move || async move { Ok(HttpResponse::Ok().body(text)) }).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(json_of(&body), expected);
    }

    #[actix_web::test]
    async fn no_content_marker_leaves_body_untouched() {
        let (status, _, body) = call(|| async {
            Ok(HttpResponse::Ok()
                .insert_header((RESPONSE_STATUS_HEADER, NO_CONTENT_MARKER))
                .body("raw"))
        })
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Bytes::from_static(b"raw"));
    }

    #[actix_web::test]
    async fn no_content_status_keeps_empty_body() {
        let (status, _, body) = call(|| async { Ok(HttpResponse::NoContent().finish()) }).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn absent_bodies_pass_through() {
        let (status, _, body) = call(|| async { Ok(HttpResponse::Ok().finish()) }).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn envelopes_are_not_wrapped_twice() {
        let envelope = json!({"status": "error", "data": null, "error": "Student with id 2 already exists"});
        let expected = envelope.clone();
        let (status, _, body) = call(move || {
            let envelope = envelope.clone();
            async move { Ok(HttpResponse::Conflict().json(envelope)) }
        })
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json_of(&body), expected);
    }

    #[actix_web::test]
    async fn framework_errors_become_error_envelopes() {
        let (status, _, body) =
            call(|| async { Err(actix_web::error::ErrorBadRequest("malformed payload")) }).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json_of(&body),
            json!({"status": "error", "data": null, "error": "malformed payload"})
        );
    }

    #[actix_web::test]
    async fn framework_errors_without_body_use_the_status_reason() {
        let (status, _, body) = call(|| async {
            Err(actix_web::error::InternalError::from_response(
                "hidden",
                HttpResponse::MethodNotAllowed().finish(),
            )
            .into())
        })
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            json_of(&body),
            json!({"status": "error", "data": null, "error": "Method Not Allowed"})
        );
    }
}
