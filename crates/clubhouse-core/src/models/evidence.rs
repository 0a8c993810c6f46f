//! Evidence record model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::{BadgeTone, GeoPoint, Timestamp};
use super::golf_course::GolfCourse;

/// Processing state of an evidence record. Open set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EvidenceStatus {
    Created,
    PrizeClaimed,
    FilesVerified,
    Unrecognized(String),
}

impl EvidenceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::PrizeClaimed => "prize_claimed",
            Self::FilesVerified => "files_verified",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub const fn badge(&self) -> BadgeTone {
        match self {
            Self::Created => BadgeTone::Blue,
            Self::PrizeClaimed => BadgeTone::Green,
            Self::FilesVerified => BadgeTone::Purple,
            Self::Unrecognized(_) => BadgeTone::Neutral,
        }
    }
}

impl Default for EvidenceStatus {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<String> for EvidenceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "created" => Self::Created,
            "prize_claimed" => Self::PrizeClaimed,
            "files_verified" => Self::FilesVerified,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<EvidenceStatus> for String {
    fn from(value: EvidenceStatus) -> Self {
        match value {
            EvidenceStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EvidenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalEnvelope {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub verification_complete: bool,
    #[serde(default)]
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceFiles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensors_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpx_url: Option<String>,
}

impl EvidenceFiles {
    /// Labelled links for every file that is present.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Video", &self.video_url),
            ("Picture", &self.picture_url),
            ("Sensors", &self.sensors_url),
            ("GPX", &self.gpx_url),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref()
                .filter(|url| !url.is_empty())
                .map(|url| (label, url))
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: EvidenceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_start: Option<GeoPoint>,
    #[serde(default)]
    pub timestamp_start: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golf_course: Option<GolfCourse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_envelope: Option<DigitalEnvelope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<EvidenceFiles>,
    #[serde(default)]
    pub digital_signature: String,
    #[serde(default)]
    pub claim_prize: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_url: Option<String>,
}

impl EvidenceRecord {
    pub fn golf_course_name(&self) -> Option<&str> {
        self.golf_course.as_ref().map(|course| course.name.as_str())
    }

    /// External viewer page for this record.
    pub fn viewer_url(&self, viewer_base: &str) -> String {
        format!(
            "{viewer_base}?evidenceId={}",
            urlencoding::encode(&self.id)
        )
    }

    /// Claim link, only offered once the prize is claimable.
    pub fn claim_link(&self) -> Option<&str> {
        if self.claim_prize {
            self.claim_url.as_deref().filter(|url| !url.is_empty())
        } else {
            None
        }
    }

    pub fn location_label(&self) -> String {
        self.location_start
            .map_or_else(|| "N/A".to_string(), |point| point.to_string())
    }
}
