//! Golf course model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{lenient_list, GeoPoint, RecordId};

const HOLES_KEY: &str = "golf:course:holes";
const PAR_KEY: &str = "golf:course:par";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub label: String,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GolfCourse {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    /// Free-form tags such as hole count, par, operator and website.
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub points_of_interest: Vec<PointOfInterest>,
    /// Polygon ring data, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Value>,
}

impl GolfCourse {
    pub fn holes(&self) -> Option<String> {
        self.property_text(HOLES_KEY)
    }

    pub fn par(&self) -> Option<String> {
        self.property_text(PAR_KEY)
    }

    pub fn operator(&self) -> Option<String> {
        self.property_text("operator")
    }

    pub fn website(&self) -> Option<String> {
        self.property_text("website")
    }

    /// Value used when a course is picked in a form: its id, else its name.
    pub fn selection_key(&self) -> String {
        self.id.display_id().unwrap_or_else(|| self.name.clone())
    }

    fn property_text(&self, key: &str) -> Option<String> {
        match self.properties.get(key)? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_course_with_properties() {
        let course: GolfCourse = serde_json::from_value(json!({
            "id": { "tb": "golf_course", "id": { "String": "pebble" } },
            "name": "Pebble Beach",
            "properties": {
                "golf:course:holes": "18",
                "golf:course:par": 72,
                "operator": "Pebble Beach Company",
            },
            "points_of_interest": [
                { "type": "tee", "label": "Hole 1", "location": { "latitude": 1.0, "longitude": 2.0 } }
            ],
        }))
        .unwrap();

        assert_eq!(course.holes().as_deref(), Some("18"));
        assert_eq!(course.par().as_deref(), Some("72"));
        assert_eq!(course.operator().as_deref(), Some("Pebble Beach Company"));
        assert_eq!(course.website(), None);
        assert_eq!(course.points_of_interest[0].kind, "tee");
        assert_eq!(course.selection_key(), "pebble");
    }

    #[test]
    fn minimal_course_uses_defaults() {
        let course: GolfCourse = serde_json::from_value(json!({ "name": "Links" })).unwrap();
        assert!(course.properties.is_empty());
        assert!(course.points_of_interest.is_empty());
        assert_eq!(course.selection_key(), "Links");
    }

    #[test]
    fn unnamed_course_with_broken_poi_still_decodes() {
        let course: GolfCourse = serde_json::from_value(json!({
            "id": "gc-9",
            "points_of_interest": [
                { "type": "tee", "label": "1" },
                { "type": "green", "label": "1", "location": { "latitude": 1.0, "longitude": 2.0 } },
            ],
        }))
        .unwrap();
        assert_eq!(course.name, "");
        assert_eq!(course.points_of_interest.len(), 1);
        assert_eq!(course.points_of_interest[0].kind, "green");
    }
}
