use crate::models::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};

use super::TableEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Previous,
    Next,
    Last,
}

/// First/previous/next/last controls derived from the server's pagination.
///
/// Page counts are taken as sent; nothing is recomputed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    pagination: Option<Pagination>,
}

impl PaginationControls {
    pub const fn new(pagination: Option<Pagination>) -> Self {
        Self { pagination }
    }

    fn page(&self) -> u32 {
        self.pagination
            .map(|pagination| pagination.page)
            .filter(|page| *page > 0)
            .unwrap_or(DEFAULT_PAGE)
    }

    fn limit(&self) -> u32 {
        self.pagination
            .map(|pagination| pagination.limit)
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_LIMIT)
    }

    fn total_count(&self) -> u64 {
        self.pagination.map_or(0, |pagination| pagination.total_count)
    }

    fn total_pages(&self) -> u32 {
        self.pagination
            .map(|pagination| pagination.total_pages)
            .filter(|total| *total > 0)
            .unwrap_or(1)
    }

    pub fn is_disabled(&self, target: PageTarget) -> bool {
        let Some(pagination) = self.pagination else {
            return true;
        };
        match target {
            PageTarget::First | PageTarget::Previous => pagination.page <= 1,
            PageTarget::Next | PageTarget::Last => pagination.page >= pagination.total_pages,
        }
    }

    /// Page the control leads to, or `None` while it is disabled.
    pub fn target(&self, target: PageTarget) -> Option<u32> {
        if self.is_disabled(target) {
            return None;
        }
        let page = self.page();
        Some(match target {
            PageTarget::First => 1,
            PageTarget::Previous => page.saturating_sub(1).max(1),
            PageTarget::Next => page + 1,
            PageTarget::Last => self.total_pages(),
        })
    }

    pub fn event(&self, target: PageTarget) -> Option<TableEvent> {
        self.target(target).map(TableEvent::PageChanged)
    }

    /// `Page X of Y`, where an unknown page count reads as 1.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page(), self.total_pages())
    }

    pub fn summary(&self) -> String {
        let page = u64::from(self.page());
        let limit = u64::from(self.limit());
        let total = self.total_count();
        format!(
            "Showing {} to {} of {total} course(s)",
            (page - 1) * limit + 1,
            (page * limit).min(total)
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL: [PageTarget; 4] = [
        PageTarget::First,
        PageTarget::Previous,
        PageTarget::Next,
        PageTarget::Last,
    ];

    fn controls(page: u32, total_pages: u32) -> PaginationControls {
        PaginationControls::new(Some(Pagination {
            page,
            limit: 20,
            total_count: 45,
            total_pages,
        }))
    }

    fn disabled(controls: &PaginationControls) -> Vec<bool> {
        ALL.iter().map(|target| controls.is_disabled(*target)).collect()
    }

    #[test]
    fn first_page_disables_backward_controls() {
        assert_eq!(disabled(&controls(1, 3)), vec![true, true, false, false]);
    }

    #[test]
    fn last_page_disables_forward_controls() {
        assert_eq!(disabled(&controls(3, 3)), vec![false, false, true, true]);
    }

    #[test]
    fn unknown_page_count_disables_everything() {
        assert_eq!(disabled(&controls(1, 0)), vec![true; 4]);
        assert_eq!(disabled(&PaginationControls::new(None)), vec![true; 4]);
        assert_eq!(controls(1, 0).label(), "Page 1 of 1");
        assert_eq!(PaginationControls::new(None).label(), "Page 1 of 1");
    }

    #[test]
    fn targets_follow_current_page() {
        let middle = controls(2, 3);
        assert_eq!(middle.target(PageTarget::First), Some(1));
        assert_eq!(middle.target(PageTarget::Previous), Some(1));
        assert_eq!(middle.target(PageTarget::Next), Some(3));
        assert_eq!(middle.event(PageTarget::Last), Some(TableEvent::PageChanged(3)));
        assert_eq!(controls(3, 3).event(PageTarget::Next), None);
    }

    #[test]
    fn summary_clamps_to_total() {
        assert_eq!(controls(1, 3).summary(), "Showing 1 to 20 of 45 course(s)");
        assert_eq!(controls(3, 3).summary(), "Showing 41 to 45 of 45 course(s)");
        assert_eq!(controls(2, 3).label(), "Page 2 of 3");
    }
}
