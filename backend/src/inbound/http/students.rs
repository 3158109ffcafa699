//! Student record API handlers.
//!
//! ```text
//! GET    /student/getAllStudents
//! GET    /student/getStudent/{id}
//! POST   /student/addStudent {"id":5,"firstName":"Eve","lastName":"Lee","age":19.0}
//! PUT    /student/updateStudent/{id}
//! DELETE /student/deleteStudent/{id}
//! ```
//!
//! Handlers return bare payloads; [`crate::middleware::ResponseEnvelope`]
//! wraps them on the way out.

use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Student, StudentId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{Envelope, NO_CONTENT_MARKER, RESPONSE_STATUS_HEADER};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error};

/// Wire representation of a student record.
///
/// Example JSON:
/// `{"id":5,"firstName":"Eve","lastName":"Lee","age":19.0}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    /// Caller-assigned identifier; required on every write.
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub age: f64,
}

impl TryFrom<StudentDto> for Student {
    type Error = Error;

    fn try_from(value: StudentDto) -> Result<Self, Self::Error> {
        let id = value
            .id
            .ok_or_else(|| missing_field_error(FieldName::new("id")))?;
        Ok(Student::try_new(
            StudentId::new(id),
            value.first_name,
            value.last_name,
            value.age,
        )?)
    }
}

impl From<&Student> for StudentDto {
    fn from(value: &Student) -> Self {
        Self {
            id: Some(value.id().get()),
            first_name: value.first_name().to_owned(),
            last_name: value.last_name().to_owned(),
            age: value.age(),
        }
    }
}

/// Build the `Location` of a created record from the request URL.
fn created_location(req: &HttpRequest, id: StudentId) -> String {
    let info = req.connection_info();
    format!("{}://{}{}/{}", info.scheme(), info.host(), req.path(), id)
}

/// List every student in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use student_records::inbound::http::students::get_all_students;
///
/// let app = App::new().service(get_all_students);
/// ```
#[utoipa::path(
    get,
    path = "/student/getAllStudents",
    responses(
        (status = 200, description = "Success envelope whose data is the student list", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
    tags = ["students"],
    operation_id = "getAllStudents"
)]
#[get("/getAllStudents")]
pub async fn get_all_students(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<StudentDto>>> {
    let students = state.students_query.list_students().await?;
    Ok(web::Json(students.iter().map(StudentDto::from).collect()))
}

/// Fetch a single student.
#[utoipa::path(
    get,
    path = "/student/getStudent/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Success envelope whose data is the student", body = Envelope),
        (status = 400, description = "Invalid identifier", body = Envelope),
        (status = 404, description = "Student does not exist", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
#[get("/getStudent/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<StudentDto>> {
    let id = StudentId::new(path.into_inner());
    let student = state.students_query.get_student(id).await?;
    Ok(web::Json(StudentDto::from(&student)))
}

/// Create a student with a caller-assigned identifier.
#[utoipa::path(
    post,
    path = "/student/addStudent",
    request_body = StudentDto,
    responses(
        (status = 201, description = "Student created", body = Envelope,
            headers(("Location" = String, description = "URL of the created student"))),
        (status = 400, description = "Invalid request", body = Envelope),
        (status = 409, description = "Identifier already in use", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
    tags = ["students"],
    operation_id = "addStudent"
)]
#[post("/addStudent")]
pub async fn add_student(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<StudentDto>,
) -> ApiResult<HttpResponse> {
    let student = Student::try_from(payload.into_inner())?;
    let created = state.students.add_student(student).await?;
    Ok(HttpResponse::Created()
        .insert_header((LOCATION, created_location(&req, created.id())))
        .json(StudentDto::from(&created)))
}

/// Replace the names and age of an existing student.
///
/// The body identifier must exist and match the path identifier.
#[utoipa::path(
    put,
    path = "/student/updateStudent/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Success envelope whose data is the updated student", body = Envelope),
        (status = 400, description = "Invalid request or identifier mismatch", body = Envelope),
        (status = 404, description = "Student does not exist", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/updateStudent/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<StudentDto>,
) -> ApiResult<web::Json<StudentDto>> {
    let path_id = StudentId::new(path.into_inner());
    let student = Student::try_from(payload.into_inner())?;
    let updated = state.students.update_student(student, path_id).await?;
    Ok(web::Json(StudentDto::from(&updated)))
}

/// Remove a student.
#[utoipa::path(
    delete,
    path = "/student/deleteStudent/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Invalid identifier", body = Envelope),
        (status = 404, description = "Student does not exist", body = Envelope),
        (status = 500, description = "Internal server error", body = Envelope)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/deleteStudent/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = StudentId::new(path.into_inner());
    state.students.delete_student(id).await?;
    Ok(HttpResponse::NoContent()
        .insert_header((RESPONSE_STATUS_HEADER, NO_CONTENT_MARKER))
        .finish())
}
