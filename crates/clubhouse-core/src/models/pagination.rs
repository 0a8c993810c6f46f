//! Server-side pagination, sorting and search parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::golf_course::GolfCourse;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_SORT_FIELD: &str = "name";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination metadata echoed by the server. Trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            total_count: 0,
            total_pages: 0,
        }
    }
}

/// Query for one page of golf courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseQuery {
    pub page: u32,
    pub limit: u32,
    pub sort: String,
    pub order: SortDirection,
    pub search: Option<String>,
}

impl Default for CourseQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: DEFAULT_SORT_FIELD.to_string(),
            order: SortDirection::Asc,
            search: None,
        }
    }
}

impl CourseQuery {
    /// Query string without the leading `?`; `search` is omitted when blank.
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
            format!("sort={}", urlencoding::encode(&self.sort)),
            format!("order={}", self.order),
        ];
        if let Some(search) = self.search.as_deref().filter(|search| !search.is_empty()) {
            pairs.push(format!("search={}", urlencoding::encode(search)));
        }
        pairs.join("&")
    }
}

/// Paginated golf-course envelope, returned to callers unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoursePage {
    #[serde(default, deserialize_with = "super::common::lenient_list")]
    pub courses: Vec<GolfCourse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl CoursePage {
    /// Pagination with zero or absent fields replaced by the defaults.
    pub fn pagination(&self) -> Pagination {
        let defaults = Pagination::default();
        Pagination {
            page: self.page.filter(|page| *page > 0).unwrap_or(defaults.page),
            limit: self.limit.filter(|limit| *limit > 0).unwrap_or(defaults.limit),
            total_count: self.total_count.unwrap_or(defaults.total_count),
            total_pages: self.total_pages.unwrap_or(defaults.total_pages),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_query_string_omits_search() {
        assert_eq!(
            CourseQuery::default().to_query_string(),
            "page=1&limit=20&sort=name&order=ASC"
        );
    }

    #[test]
    fn search_is_encoded() {
        let query = CourseQuery {
            page: 2,
            order: SortDirection::Desc,
            search: Some("st andrews".to_string()),
            ..CourseQuery::default()
        };
        assert_eq!(
            query.to_query_string(),
            "page=2&limit=20&sort=name&order=DESC&search=st%20andrews"
        );
    }

    #[test]
    fn pagination_defaults_fill_missing_fields() {
        let page: CoursePage = serde_json::from_value(json!({ "courses": null })).unwrap();
        assert!(page.courses.is_empty());
        assert_eq!(page.pagination(), Pagination::default());
    }

    #[test]
    fn sort_direction_parses_case_insensitively() {
        assert_eq!(SortDirection::parse("desc"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("sideways"), None);
    }
}
