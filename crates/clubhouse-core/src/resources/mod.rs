//! One thin client per backend resource.
//!
//! List endpoints wrap their records in an envelope (`{"tags": [...]}`,
//! `{"records": [...]}`). Whatever the body looks like, a list call yields a
//! list: a missing or malformed envelope is simply empty.

mod evidence;
mod golf_courses;
mod tags;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use evidence::EvidenceClient;
pub use golf_courses::GolfCoursesClient;
pub use tags::TagsClient;

use crate::transport::ApiResponse;

/// Decodes a list envelope, falling back to the empty envelope when the
/// body is not a JSON object or does not fit.
pub(crate) fn decode_envelope<T: DeserializeOwned + Default>(response: ApiResponse, what: &str) -> T {
    match response {
        ApiResponse::Json(value @ Value::Object(_)) => {
            serde_json::from_value(value).unwrap_or_else(|error| {
                tracing::warn!(what, %error, "Malformed envelope, treating as empty");
                T::default()
            })
        }
        _ => {
            tracing::warn!(what, "Response is not an object envelope, treating as empty");
            T::default()
        }
    }
}
