//! Client-side list filters for the tag and evidence screens.
//!
//! Both lists are loaded whole, so search and status filtering happen
//! locally. Matching is case-insensitive; an empty search matches everything.

use crate::models::{EvidenceRecord, EvidenceStatus, GolfCourse, Tag, TagStatus};
use crate::util::contains_ignore_case;

fn optional_match(field: Option<&str>, search: &str) -> bool {
    field.is_some_and(|value| contains_ignore_case(value, search))
}

/// Search over id, owner name, owner email and batch golf course.
pub fn tag_matches(tag: &Tag, search: &str, status: Option<&TagStatus>) -> bool {
    let owner = tag.owner_info.as_ref();
    let matches_search = contains_ignore_case(&tag.tag_id, search)
        || optional_match(owner.map(|owner| owner.name.as_str()), search)
        || optional_match(owner.map(|owner| owner.email.as_str()), search)
        || optional_match(tag.golf_course_name(), search);
    matches_search && status.is_none_or(|status| &tag.status == status)
}

pub fn filter_tags<'a>(tags: &'a [Tag], search: &str, status: Option<&TagStatus>) -> Vec<&'a Tag> {
    tags.iter()
        .filter(|tag| tag_matches(tag, search, status))
        .collect()
}

/// Search over id, golf course name and status.
pub fn evidence_matches(
    record: &EvidenceRecord,
    search: &str,
    status: Option<&EvidenceStatus>,
) -> bool {
    let matches_search = contains_ignore_case(&record.id, search)
        || optional_match(record.golf_course_name(), search)
        || contains_ignore_case(record.status.as_str(), search);
    matches_search && status.is_none_or(|status| &record.status == status)
}

pub fn filter_evidence<'a>(
    records: &'a [EvidenceRecord],
    search: &str,
    status: Option<&EvidenceStatus>,
) -> Vec<&'a EvidenceRecord> {
    records
        .iter()
        .filter(|record| evidence_matches(record, search, status))
        .collect()
}

/// Distinct statuses in the order they first appear.
pub fn unique_statuses(records: &[EvidenceRecord]) -> Vec<EvidenceStatus> {
    let mut statuses: Vec<EvidenceStatus> = Vec::new();
    for record in records {
        if !statuses.contains(&record.status) {
            statuses.push(record.status.clone());
        }
    }
    statuses
}

/// Golf-course picker for the print form.
pub fn filter_courses_by_name<'a>(courses: &'a [GolfCourse], search: &str) -> Vec<&'a GolfCourse> {
    courses
        .iter()
        .filter(|course| contains_ignore_case(&course.name, search))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn tags() -> Vec<Tag> {
        serde_json::from_value(json!([
            {
                "tag_id": "TAG-001",
                "status": "registered",
                "created": "2024-01-01T00:00:00Z",
                "owner_info": { "name": "Ada", "surname": "Lovelace", "email": "ada@club.example" },
                "batch": {
                    "id": { "id": { "String": "b1" } },
                    "created": "2024-01-01T00:00:00Z",
                    "golf_course": { "name": "Pebble Beach" },
                },
            },
            { "tag_id": "TAG-002", "status": "lost", "created": "2024-01-02T00:00:00Z" },
            { "tag_id": "TAG-003", "status": "registered", "created": "2024-01-03T00:00:00Z" },
        ]))
        .unwrap()
    }

    fn records() -> Vec<EvidenceRecord> {
        serde_json::from_value(json!([
            { "id": "ev-1", "status": "created", "timestamp_start": 0, "golf_course": { "name": "St Andrews" } },
            { "id": "ev-2", "status": "files_verified", "timestamp_start": 0 },
            { "id": "ev-3", "status": "created", "timestamp_start": 0 },
            { "id": "ev-4", "status": "disputed", "timestamp_start": 0 },
        ]))
        .unwrap()
    }

    fn tag_ids(tags: &[&Tag]) -> Vec<String> {
        tags.iter().map(|tag| tag.tag_id.clone()).collect()
    }

    #[test]
    fn tag_search_covers_owner_and_course() {
        let tags = tags();
        assert_eq!(tag_ids(&filter_tags(&tags, "ADA@", None)), vec!["TAG-001"]);
        assert_eq!(tag_ids(&filter_tags(&tags, "pebble", None)), vec!["TAG-001"]);
        assert_eq!(tag_ids(&filter_tags(&tags, "tag-00", None)).len(), 3);
        assert!(filter_tags(&tags, "lovelace", None).is_empty());
    }

    #[test]
    fn tag_status_filter_combines_with_search() {
        let tags = tags();
        assert_eq!(
            tag_ids(&filter_tags(&tags, "", Some(&TagStatus::Registered))),
            vec!["TAG-001", "TAG-003"]
        );
        assert_eq!(
            tag_ids(&filter_tags(&tags, "003", Some(&TagStatus::Registered))),
            vec!["TAG-003"]
        );
        assert!(filter_tags(&tags, "001", Some(&TagStatus::Lost)).is_empty());
    }

    #[test]
    fn evidence_search_covers_course_and_status() {
        let records = records();
        let ids = |found: Vec<&EvidenceRecord>| -> Vec<String> {
            found.iter().map(|record| record.id.clone()).collect()
        };
        assert_eq!(ids(filter_evidence(&records, "andrews", None)), vec!["ev-1"]);
        assert_eq!(ids(filter_evidence(&records, "VERIFIED", None)), vec!["ev-2"]);
        assert_eq!(
            ids(filter_evidence(&records, "", Some(&EvidenceStatus::Created))),
            vec!["ev-1", "ev-3"]
        );
    }

    #[test]
    fn unique_statuses_keep_first_seen_order() {
        assert_eq!(
            unique_statuses(&records()),
            vec![
                EvidenceStatus::Created,
                EvidenceStatus::FilesVerified,
                EvidenceStatus::Unrecognized("disputed".to_string()),
            ]
        );
    }

    #[test]
    fn course_picker_matches_name() {
        let courses: Vec<GolfCourse> =
            serde_json::from_value(json!([{ "name": "Old Course" }, { "name": "New Course" }]))
                .unwrap();
        let names: Vec<&str> = filter_courses_by_name(&courses, "old")
            .iter()
            .map(|course| course.name.as_str())
            .collect();
        assert_eq!(names, vec!["Old Course"]);
    }
}
