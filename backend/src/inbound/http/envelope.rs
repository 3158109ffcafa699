//! Uniform response envelope and the rules that normalise handler output
//! into it.
//!
//! Every response body leaves the service as `{status, data, error}` except
//! no-content responses. The rules live in [`normalize`] so they can be
//! exercised without HTTP; [`crate::middleware::ResponseEnvelope`] applies
//! them to real responses.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Out-of-band marker a handler sets to declare a no-content response.
pub const RESPONSE_STATUS_HEADER: &str = "x-response-status";

/// Marker value signalling a 204 response.
pub const NO_CONTENT_MARKER: &str = "204";

/// Outcome recorded in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Response body wrapper shared by all endpoints.
///
/// ## Invariants
/// - Exactly one of `data` and `error` is populated.
/// - `status` is [`ResponseStatus::Success`] iff `data` is populated.
///
/// All three keys are always serialised; the empty side is `null`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use student_records::inbound::http::envelope::Envelope;
///
/// let envelope = Envelope::success(json!({"id": 1})).expect("non-null payload");
/// assert_eq!(
///     serde_json::to_value(&envelope).expect("serialise"),
///     json!({"status": "success", "data": {"id": 1}, "error": null})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Envelope {
    status: ResponseStatus,
    #[schema(value_type = Option<Object>)]
    data: Option<Value>,
    #[schema(value_type = Option<Object>)]
    error: Option<Value>,
}

impl Envelope {
    /// Wrap a successful payload.
    ///
    /// Returns `None` for JSON `null`, which cannot populate the `data` side.
    ///
    /// # Examples
    /// ```
    /// use serde_json::Value;
    /// use student_records::inbound::http::envelope::Envelope;
    ///
    /// assert!(Envelope::success(Value::Null).is_none());
    /// ```
    #[must_use]
    pub fn success(data: Value) -> Option<Self> {
        (!data.is_null()).then(|| Self::with_data(data))
    }

    /// `data` must not be JSON `null`.
    fn with_data(data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            error: None,
        }
    }

    /// Wrap an error description.
    #[must_use]
    pub fn error(error: Value) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            error: Some(error),
        }
    }

    #[must_use]
    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Recognise a JSON body that already has the envelope shape.
    ///
    /// The object must carry exactly the `status`, `data` and `error` keys
    /// and satisfy the envelope invariants; anything else is a payload.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if object.len() != 3 {
            return None;
        }
        let status = ResponseStatus::from_wire(object.get("status")?.as_str()?)?;
        let data = non_null(object, "data")?;
        let error = non_null(object, "error")?;
        match (status, data, error) {
            (ResponseStatus::Success, Some(data), None) => Some(Self::with_data(data.clone())),
            (ResponseStatus::Error, None, Some(error)) => Some(Self::error(error.clone())),
            _ => None,
        }
    }
}

/// Look up a required key, mapping JSON `null` to `None`.
///
/// The outer `Option` is `None` when the key is missing.
fn non_null<'a>(object: &'a Map<String, Value>, key: &str) -> Option<Option<&'a Value>> {
    object
        .get(key)
        .map(|value| if value.is_null() { None } else { Some(value) })
}

/// Classified body of an outgoing response.
#[derive(Debug, Clone, PartialEq)]
pub enum Outgoing {
    /// Already wrapped.
    Envelope(Envelope),
    /// Body of a response produced from a framework error.
    FrameworkError(Value),
    /// No body.
    Absent,
    /// Plain string payload.
    Text(String),
    /// Structured JSON payload.
    Json(Value),
}

/// Result of [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Emit the original body untouched.
    PassThrough(Outgoing),
    /// Replace the body with this envelope.
    Wrapped(Envelope),
}

/// Apply the envelope rules to an outgoing body. The first matching rule
/// wins:
///
/// 1. no-content responses pass through;
/// 2. envelopes pass through;
/// 3. framework errors become error envelopes;
/// 4. absent bodies pass through;
/// 5. strings containing `"error"` become error envelopes;
/// 6. everything else becomes a success envelope.
///
/// Rule 5 is a known quirk: a legitimate success string that contains
/// `"error"` is reported as a failure.
///
/// Feeding a [`Normalized::Wrapped`] envelope back in yields
/// [`Normalized::PassThrough`] with the same envelope.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use student_records::inbound::http::envelope::{normalize, Envelope, Normalized, Outgoing};
///
/// let wrapped = normalize(Outgoing::Json(json!([1, 2])), false);
/// let expected = Envelope::success(json!([1, 2])).expect("non-null payload");
/// assert_eq!(wrapped, Normalized::Wrapped(expected));
/// ```
#[must_use]
pub fn normalize(outgoing: Outgoing, no_content: bool) -> Normalized {
    if no_content {
        return Normalized::PassThrough(outgoing);
    }
    match outgoing {
        Outgoing::Envelope(_) | Outgoing::Absent => Normalized::PassThrough(outgoing),
        Outgoing::FrameworkError(value) => Normalized::Wrapped(Envelope::error(value)),
        Outgoing::Text(text) | Outgoing::Json(Value::String(text)) => {
            if text.contains("error") {
                Normalized::Wrapped(Envelope::error(Value::String(text)))
            } else {
                Normalized::Wrapped(Envelope::with_data(Value::String(text)))
            }
        }
        Outgoing::Json(value) => Envelope::success(value)
            .map_or(Normalized::PassThrough(Outgoing::Absent), Normalized::Wrapped),
    }
}
