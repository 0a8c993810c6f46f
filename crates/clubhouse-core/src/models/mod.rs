//! Records exchanged with the club-house backend

mod common;
mod evidence;
mod golf_course;
mod pagination;
mod tag;

pub(crate) use common::lenient_list;
pub use common::{BadgeTone, GeoPoint, RecordId, Timestamp};
pub use evidence::{DigitalEnvelope, EvidenceFiles, EvidenceRecord, EvidenceStatus};
pub use golf_course::{GolfCourse, PointOfInterest};
pub use pagination::{
    CoursePage, CourseQuery, Pagination, SortDirection, DEFAULT_LIMIT, DEFAULT_PAGE,
    DEFAULT_SORT_FIELD,
};
pub use tag::{
    OwnerInfo, PrintTagsRequest, PrintTagsResponse, RegistrationForm, Tag, TagBatch, TagStatus,
    MAX_PRINT_QUANTITY, MIN_PRINT_QUANTITY,
};

/// Records that the sync controllers can reconcile by id.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Tag {
    fn key(&self) -> &str {
        &self.tag_id
    }
}

impl Keyed for EvidenceRecord {
    fn key(&self) -> &str {
        &self.id
    }
}
