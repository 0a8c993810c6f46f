use std::sync::Arc;

use tokio::sync::watch;

use super::{ListState, Operation, SyncedList};
use crate::error::Result;
use crate::models::{CoursePage, CourseQuery, GolfCourse, Pagination, DEFAULT_PAGE};
use crate::notify::Notifier;
use crate::resources::GolfCoursesClient;
use crate::table::TableEvent;
use crate::transport::ApiClient;

/// Golf-course page with its pagination metadata.
pub type CourseListState = ListState<GolfCourse, Pagination>;

/// Server-paginated golf-course list.
pub struct GolfCoursesController {
    client: GolfCoursesClient,
    list: SyncedList<GolfCourse, Pagination>,
}

impl GolfCoursesController {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client: GolfCoursesClient::new(api),
            list: SyncedList::new(notifier),
        }
    }

    pub fn state(&self) -> CourseListState {
        self.list.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<CourseListState> {
        self.list.subscribe()
    }

    /// Loads the first page with the default query on first activation.
    pub async fn activate(&self) -> Result<()> {
        if self.list.first_activation() {
            self.fetch_all(&CourseQuery::default()).await?;
        }
        Ok(())
    }

    /// Replaces the current page and its pagination from one list response.
    pub async fn fetch_all(&self, query: &CourseQuery) -> Result<CoursePage> {
        self.list
            .run(
                Operation::reload("fetch golf courses"),
                self.client.list(query),
                |state, page| {
                    state.items.clone_from(&page.courses);
                    state.meta = page.pagination();
                },
            )
            .await
    }

    pub async fn refresh(&self, query: &CourseQuery) -> Result<CoursePage> {
        self.fetch_all(query).await
    }

    pub async fn get_one(&self, id: &str) -> Result<GolfCourse> {
        self.list
            .run(Operation::read("fetch golf course"), self.client.get(id), |_, _| {})
            .await
    }
}

/// Host for the golf-course table: owns the query and turns table events
/// into page requests.
pub struct CourseBrowser {
    controller: GolfCoursesController,
    query: CourseQuery,
}

impl CourseBrowser {
    pub fn new(controller: GolfCoursesController) -> Self {
        Self {
            controller,
            query: CourseQuery::default(),
        }
    }

    pub const fn controller(&self) -> &GolfCoursesController {
        &self.controller
    }

    pub const fn query(&self) -> &CourseQuery {
        &self.query
    }

    pub async fn load(&self) -> Result<CoursePage> {
        self.controller.fetch_all(&self.query).await
    }

    /// Applies `event` to the query, then requests the resulting page.
    ///
    /// Page changes keep sort and search; sort and search changes go back to
    /// the first page. Limit, and the page a refresh asks for, follow what
    /// the server last reported.
    pub async fn handle(&mut self, event: TableEvent) -> Result<CoursePage> {
        let reported = self.controller.state().meta;
        self.query.limit = reported.limit;
        match event {
            TableEvent::PageChanged(page) => self.query.page = page.max(DEFAULT_PAGE),
            TableEvent::SortChanged { field, direction } => {
                self.query.sort = field;
                self.query.order = direction;
                self.query.page = DEFAULT_PAGE;
            }
            TableEvent::SearchChanged(text) => {
                self.query.search = Some(text).filter(|text| !text.is_empty());
                self.query.page = DEFAULT_PAGE;
            }
            TableEvent::Refresh => self.query.page = reported.page,
        }
        self.load().await
    }
}
