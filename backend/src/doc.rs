//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the student endpoints and the schemas they exchange:
//! the [`StudentDto`] wire record and the [`Envelope`] wrapping every
//! response body.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::envelope::{Envelope, ResponseStatus};
use crate::inbound::http::students::StudentDto;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student records API",
        description = "CRUD interface over student records with uniform response envelopes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::get_all_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::add_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
    ),
    components(schemas(StudentDto, Envelope, ResponseStatus)),
    tags(
        (name = "students", description = "Operations on student records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/student/getAllStudents")]
    #[case("/student/getStudent/{id}")]
    #[case("/student/addStudent")]
    #[case("/student/updateStudent/{id}")]
    #[case("/student/deleteStudent/{id}")]
    fn openapi_lists_student_paths(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn student_schema_uses_camel_case_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let student = schemas.get("StudentDto").expect("StudentDto schema");
        for field in ["id", "firstName", "lastName", "age"] {
            assert_object_schema_has_field(student, field);
        }
    }

    #[rstest]
    fn envelope_schema_has_all_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let envelope = schemas.get("Envelope").expect("Envelope schema");
        for field in ["status", "data", "error"] {
            assert_object_schema_has_field(envelope, field);
        }
    }
}
