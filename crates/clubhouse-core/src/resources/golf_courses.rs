use crate::error::Result;
use crate::models::{CoursePage, CourseQuery, GolfCourse};
use crate::transport::{path_segment, ApiClient};

use super::decode_envelope;

const GOLF_COURSES_ENDPOINT: &str = "/admin/golf-courses";

/// Paginated golf-course endpoints.
#[derive(Debug, Clone)]
pub struct GolfCoursesClient {
    api: ApiClient,
}

impl GolfCoursesClient {
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetches one page; the envelope is handed back as the server sent it.
    pub async fn list(&self, query: &CourseQuery) -> Result<CoursePage> {
        let endpoint = format!("{GOLF_COURSES_ENDPOINT}?{}", query.to_query_string());
        let response = self.api.get(&endpoint).await?;
        Ok(decode_envelope(response, "golf course page"))
    }

    pub async fn get(&self, id: &str) -> Result<GolfCourse> {
        self.api
            .get(&format!("{GOLF_COURSES_ENDPOINT}/{}", path_segment(id)))
            .await?
            .decode("golf course")
    }
}
