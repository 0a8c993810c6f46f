//! Tag model

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::{BadgeTone, RecordId, Timestamp};
use super::golf_course::GolfCourse;
use crate::error::{Error, Result};

pub const MIN_PRINT_QUANTITY: u32 = 1;
pub const MAX_PRINT_QUANTITY: u32 = 100;

/// Lifecycle state of a physical tag.
///
/// Values outside the known set are kept verbatim in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TagStatus {
    Registered,
    Unregistered,
    Lost,
    Found,
    Unrecognized(String),
}

impl TagStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Registered => "registered",
            Self::Unregistered => "unregistered",
            Self::Lost => "lost",
            Self::Found => "found",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub const fn badge(&self) -> BadgeTone {
        match self {
            Self::Registered => BadgeTone::Green,
            Self::Unregistered => BadgeTone::Yellow,
            Self::Lost => BadgeTone::Red,
            Self::Found => BadgeTone::Blue,
            Self::Unrecognized(_) => BadgeTone::Neutral,
        }
    }
}

impl Default for TagStatus {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<String> for TagStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "registered" => Self::Registered,
            "unregistered" => Self::Unregistered,
            "lost" => Self::Lost,
            "found" => Self::Found,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<TagStatus> for String {
    fn from(value: TagStatus) -> Self {
        match value {
            TagStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl OwnerInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_string()
    }
}

/// Print run a tag was produced in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagBatch {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub total_tags: u32,
    #[serde(default)]
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golf_course: Option<GolfCourse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub fields: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub tag_id: String,
    #[serde(default)]
    pub status: TagStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_info: Option<OwnerInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<TagBatch>,
    #[serde(default)]
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_form: Option<RegistrationForm>,
}

impl Tag {
    pub fn golf_course_name(&self) -> Option<&str> {
        self.batch
            .as_ref()
            .and_then(|batch| batch.golf_course.as_ref())
            .map(|course| course.name.as_str())
    }

    pub fn batch_id(&self) -> String {
        self.batch
            .as_ref()
            .map_or_else(|| "N/A".to_string(), |batch| batch.id.display_or_na())
    }
}

/// Bulk print request for a fresh batch of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintTagsRequest {
    pub quantity: u32,
    pub golf_course: String,
}

impl PrintTagsRequest {
    /// Form-level checks the print dialog enforces before submitting.
    pub fn validate(&self) -> Result<()> {
        if self.quantity < MIN_PRINT_QUANTITY {
            return Err(Error::InvalidInput(format!(
                "Quantity must be at least {MIN_PRINT_QUANTITY}"
            )));
        }
        if self.quantity > MAX_PRINT_QUANTITY {
            return Err(Error::InvalidInput(format!(
                "Quantity cannot exceed {MAX_PRINT_QUANTITY}"
            )));
        }
        if self.golf_course.trim().is_empty() {
            return Err(Error::InvalidInput("Golf course is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintTagsResponse {
    pub file_url: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_full_tag() {
        let tag: Tag = serde_json::from_value(json!({
            "tag_id": "T-001",
            "status": "registered",
            "owner_info": { "name": "Ada", "surname": "Lovelace", "email": "ada@example.com" },
            "batch": {
                "id": { "id": { "String": "batch-7" } },
                "total_tags": 50,
                "created": "2024-03-01T10:00:00Z",
                "golf_course": { "name": "St Andrews" },
            },
            "created": "2024-03-02T10:00:00Z",
            "registration_form": { "fields": ["email", "name", "email"] },
        }))
        .unwrap();

        assert_eq!(tag.status, TagStatus::Registered);
        assert_eq!(tag.owner_info.as_ref().unwrap().full_name(), "Ada Lovelace");
        assert_eq!(tag.golf_course_name(), Some("St Andrews"));
        assert_eq!(tag.batch_id(), "batch-7");
        assert_eq!(tag.registration_form.unwrap().fields.len(), 2);
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let status: TagStatus = serde_json::from_value(json!("retired")).unwrap();
        assert_eq!(status, TagStatus::Unrecognized("retired".to_string()));
        assert_eq!(status.badge(), BadgeTone::Neutral);
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("retired"));
    }

    #[test]
    fn tag_without_batch_reports_na() {
        let tag: Tag = serde_json::from_value(json!({
            "tag_id": "T-002",
            "status": "lost",
            "created": 1_700_000_000_000_i64,
        }))
        .unwrap();
        assert_eq!(tag.batch_id(), "N/A");
        assert_eq!(tag.status.badge(), BadgeTone::Red);
    }

    #[test]
    fn sparse_tag_decodes_with_placeholders() {
        let tag: Tag = serde_json::from_value(json!({ "tag_id": "T-003" })).unwrap();
        assert_eq!(tag.status, TagStatus::default());
        assert_eq!(tag.status.badge(), BadgeTone::Neutral);
        assert_eq!(tag.created.to_string(), "N/A");
    }

    #[test]
    fn print_request_enforces_quantity_bounds() {
        let mut request = PrintTagsRequest {
            quantity: 0,
            golf_course: "pebble".to_string(),
        };
        assert!(request.validate().is_err());
        request.quantity = 101;
        assert!(request.validate().is_err());
        request.quantity = 100;
        assert!(request.validate().is_ok());
        request.golf_course = "  ".to_string();
        assert!(request.validate().is_err());
    }
}
